// Shared state structs to avoid circular dependencies.
// These are used by the command layer and can be tested independently.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TagsViewError;
use crate::modules::tags_view::TagsViewStore;
use crate::settings::TagsViewSettings;

/// Route metadata the tab bar cares about. Anything else the router puts in
/// `meta` (icons, permissions, ...) rides along in `extra`.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewMeta {
    #[serde(default)]
    pub affix: bool,
    #[serde(default)]
    pub no_cache: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewMeta {
    /// True when the view is rendered through an embedded external frame.
    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// One navigable page, as handed over by the routing layer.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub meta: ViewMeta,
    /// Remaining route fields (`fullPath`, `query`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewRecord {
    pub fn new(path: impl Into<String>, name: impl Into<String>, meta: ViewMeta) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            title: String::new(),
            meta,
            extra: Map::new(),
        }
    }

    /// Parses a route object coming over IPC. `path`, `name` and `meta` are
    /// required; a route missing any of them is rejected here rather than
    /// half-inserted into the store.
    pub fn from_value(value: Value) -> Result<Self, TagsViewError> {
        serde_json::from_value(value).map_err(TagsViewError::InvalidView)
    }

    /// Owned copy with `title` taken from `meta.title`, or `fallback` when
    /// the route has none.
    pub fn titled(&self, fallback: &str) -> Self {
        let title = self
            .meta
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback)
            .to_string();
        Self { title, ..self.clone() }
    }

    /// Shallow merge of `other` into `self`; fields present in `other` win.
    pub fn merge_from(&mut self, other: &ViewRecord) {
        self.path = other.path.clone();
        self.name = other.name.clone();
        if !other.title.is_empty() {
            self.title = other.title.clone();
        }
        self.meta = other.meta.clone();
        for (key, value) in &other.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Visited and cached views, copied out of the store.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewsSnapshot {
    pub visited_views: Vec<ViewRecord>,
    pub cached_views: Vec<String>,
}

/// Everything the tab bar renders from, emitted after each command.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagsPayload {
    pub visited_views: Vec<ViewRecord>,
    pub cached_views: Vec<String>,
    pub iframe_views: Vec<ViewRecord>,
}

pub struct AppState {
    pub tags_view: Arc<Mutex<TagsViewStore>>,
    pub settings: Arc<RwLock<TagsViewSettings>>,
}

impl AppState {
    pub fn new(settings: TagsViewSettings) -> Self {
        let store = TagsViewStore::with_fallback_title(settings.fallback_title.clone());
        Self {
            tags_view: Arc::new(Mutex::new(store)),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn store(&self) -> Result<MutexGuard<'_, TagsViewStore>, TagsViewError> {
        self.tags_view.lock().map_err(|_| TagsViewError::StateLocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_route_object() {
        let view = ViewRecord::from_value(json!({
            "path": "/system/user",
            "name": "User",
            "fullPath": "/system/user?page=2",
            "query": { "page": "2" },
            "meta": { "title": "Users", "noCache": true, "icon": "user" }
        }))
        .unwrap();

        assert_eq!(view.path, "/system/user");
        assert_eq!(view.title, "");
        assert!(view.meta.no_cache);
        assert!(!view.meta.affix);
        assert_eq!(view.meta.extra["icon"], json!("user"));
        assert_eq!(view.extra["fullPath"], json!("/system/user?page=2"));
    }

    #[test]
    fn test_route_without_meta_is_rejected() {
        let err = ViewRecord::from_value(json!({ "path": "/a", "name": "A" })).unwrap_err();
        assert!(matches!(err, TagsViewError::InvalidView(_)));

        let err = ViewRecord::from_value(json!({ "name": "A", "meta": {} })).unwrap_err();
        assert!(matches!(err, TagsViewError::InvalidView(_)));
    }

    #[test]
    fn test_titled_falls_back() {
        let view = ViewRecord::new("/a", "A", ViewMeta::default());
        assert_eq!(view.titled("no-name").title, "no-name");

        let meta = ViewMeta { title: Some("Home".into()), ..Default::default() };
        let view = ViewRecord::new("/a", "A", meta);
        assert_eq!(view.titled("no-name").title, "Home");
    }

    #[test]
    fn test_empty_link_is_not_iframe() {
        let meta = ViewMeta { link: Some(String::new()), ..Default::default() };
        assert!(!meta.has_link());

        let meta = ViewMeta { link: Some("https://example.com".into()), ..Default::default() };
        assert!(meta.has_link());
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let snapshot = ViewsSnapshot {
            visited_views: vec![ViewRecord::new("/a", "A", ViewMeta::default()).titled("no-name")],
            cached_views: vec!["A".into()],
        };
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["cachedViews"], json!(["A"]));
        assert_eq!(value["visitedViews"][0]["title"], json!("no-name"));
        assert_eq!(value["visitedViews"][0]["meta"], json!({ "affix": false, "noCache": false }));
    }
}
