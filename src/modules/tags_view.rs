// Tags-view store - pure logic, no shell imports.
// Owns the three tab collections and every action the tab bar invokes on them.

use crate::settings::DEFAULT_TITLE;
use crate::state::{TagsPayload, ViewRecord, ViewsSnapshot};

/// Visited, cached and iframe views for one browser window.
///
/// * `visited_views` - one record per open tab, keyed by `path`, in tab order.
/// * `cached_views` - component names kept alive while not displayed.
/// * `iframe_views` - open tabs whose route points at an external `meta.link`.
///
/// Records are copied in on add; callers only ever get copies back.
#[derive(Debug, Clone)]
pub struct TagsViewStore {
    visited_views: Vec<ViewRecord>,
    cached_views: Vec<String>,
    iframe_views: Vec<ViewRecord>,
    fallback_title: String,
}

impl Default for TagsViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TagsViewStore {
    pub fn new() -> Self {
        Self::with_fallback_title(DEFAULT_TITLE)
    }

    pub fn with_fallback_title(fallback_title: impl Into<String>) -> Self {
        Self {
            visited_views: Vec::new(),
            cached_views: Vec::new(),
            iframe_views: Vec::new(),
            fallback_title: fallback_title.into(),
        }
    }

    pub fn visited_views(&self) -> &[ViewRecord] {
        &self.visited_views
    }

    pub fn cached_views(&self) -> &[String] {
        &self.cached_views
    }

    pub fn iframe_views(&self) -> &[ViewRecord] {
        &self.iframe_views
    }

    pub fn contains_visited(&self, path: &str) -> bool {
        self.visited_views.iter().any(|v| v.path == path)
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cached_views.iter().any(|n| n == name)
    }

    pub fn snapshot(&self) -> ViewsSnapshot {
        ViewsSnapshot {
            visited_views: self.visited_views.clone(),
            cached_views: self.cached_views.clone(),
        }
    }

    pub fn payload(&self) -> TagsPayload {
        TagsPayload {
            visited_views: self.visited_views.clone(),
            cached_views: self.cached_views.clone(),
            iframe_views: self.iframe_views.clone(),
        }
    }

    pub(crate) fn visited_views_mut(&mut self) -> &mut Vec<ViewRecord> {
        &mut self.visited_views
    }

    // --- add ---

    pub fn add_view(&mut self, view: &ViewRecord) {
        self.add_visited_view(view);
        self.add_cached_view(view);
    }

    pub fn add_visited_view(&mut self, view: &ViewRecord) {
        if self.contains_visited(&view.path) {
            return;
        }
        log::debug!("[TagsView] Open tab {}", view.path);
        self.visited_views.push(view.titled(&self.fallback_title));
    }

    pub fn add_iframe_view(&mut self, view: &ViewRecord) {
        if self.iframe_views.iter().any(|v| v.path == view.path) {
            return;
        }
        log::debug!("[TagsView] Open iframe {} -> {:?}", view.path, view.meta.link);
        self.iframe_views.push(view.titled(&self.fallback_title));
    }

    pub fn add_cached_view(&mut self, view: &ViewRecord) {
        if self.is_cached(&view.name) || view.meta.no_cache {
            return;
        }
        self.cached_views.push(view.name.clone());
    }

    // --- delete one ---

    pub fn del_view(&mut self, view: &ViewRecord) -> ViewsSnapshot {
        self.del_visited_view(view);
        self.del_cached_view(view);
        self.snapshot()
    }

    pub fn del_visited_view(&mut self, view: &ViewRecord) -> Vec<ViewRecord> {
        self.visited_views.retain(|v| v.path != view.path);
        self.iframe_views.retain(|v| v.path != view.path);
        self.visited_views.clone()
    }

    pub fn del_iframe_view(&mut self, view: &ViewRecord) -> Vec<ViewRecord> {
        self.iframe_views.retain(|v| v.path != view.path);
        self.iframe_views.clone()
    }

    pub fn del_cached_view(&mut self, view: &ViewRecord) -> Vec<String> {
        if let Some(index) = self.cached_views.iter().position(|n| *n == view.name) {
            self.cached_views.remove(index);
        }
        self.cached_views.clone()
    }

    // --- close others ---

    pub fn del_others_views(&mut self, view: &ViewRecord) -> ViewsSnapshot {
        self.del_others_visited_views(view);
        self.del_others_cached_views(view);
        self.snapshot()
    }

    /// Keeps affixed tabs and the tab at `view.path`. Affixed iframe tabs
    /// survive along with their visited entry.
    pub fn del_others_visited_views(&mut self, view: &ViewRecord) -> Vec<ViewRecord> {
        self.visited_views.retain(|v| v.meta.affix || v.path == view.path);
        self.iframe_views.retain(|v| v.meta.affix || v.path == view.path);
        log::info!("[TagsView] Closed other tabs, {} left", self.visited_views.len());
        self.visited_views.clone()
    }

    pub fn del_others_cached_views(&mut self, view: &ViewRecord) -> Vec<String> {
        if self.is_cached(&view.name) {
            self.cached_views.retain(|n| *n == view.name);
        } else {
            self.cached_views.clear();
        }
        self.cached_views.clone()
    }

    // --- close all ---

    pub fn del_all_views(&mut self, view: &ViewRecord) -> ViewsSnapshot {
        self.del_all_visited_views(view);
        self.del_all_cached_views(view);
        self.snapshot()
    }

    pub fn del_all_visited_views(&mut self, _view: &ViewRecord) -> Vec<ViewRecord> {
        self.visited_views.retain(|v| v.meta.affix);
        self.iframe_views.clear();
        log::info!("[TagsView] Closed all tabs, {} affixed left", self.visited_views.len());
        self.visited_views.clone()
    }

    pub fn del_all_cached_views(&mut self, _view: &ViewRecord) -> Vec<String> {
        self.cached_views.clear();
        self.cached_views.clone()
    }

    // --- update ---

    pub fn update_visited_view(&mut self, view: &ViewRecord) {
        if let Some(existing) = self.visited_views.iter_mut().find(|v| v.path == view.path) {
            existing.merge_from(view);
        }
    }

    // --- close to one side ---

    /// Closes the non-affixed tabs right of `view`. `None` when `view` is not
    /// open, in which case nothing changes.
    pub fn del_right_tags(&mut self, view: &ViewRecord) -> Option<Vec<ViewRecord>> {
        let index = self.visited_views.iter().position(|v| v.path == view.path)?;
        let closed = self.close_tags_where(|idx| idx > index);
        log::info!("[TagsView] Closed {} tab(s) right of {}", closed, view.path);
        Some(self.visited_views.clone())
    }

    /// Closes the non-affixed tabs left of `view`. `None` when `view` is not
    /// open, in which case nothing changes.
    pub fn del_left_tags(&mut self, view: &ViewRecord) -> Option<Vec<ViewRecord>> {
        let index = self.visited_views.iter().position(|v| v.path == view.path)?;
        let closed = self.close_tags_where(|idx| idx < index);
        log::info!("[TagsView] Closed {} tab(s) left of {}", closed, view.path);
        Some(self.visited_views.clone())
    }

    /// Drops every non-affixed visited view whose index matches `in_range`,
    /// together with its cache name and iframe record. Returns how many closed.
    fn close_tags_where(&mut self, in_range: impl Fn(usize) -> bool) -> usize {
        let visited = std::mem::take(&mut self.visited_views);
        let mut closed = 0;

        for (idx, item) in visited.into_iter().enumerate() {
            if !in_range(idx) || item.meta.affix {
                self.visited_views.push(item);
                continue;
            }
            self.cached_views.retain(|n| *n != item.name);
            if item.meta.has_link() {
                self.iframe_views.retain(|v| v.path != item.path);
            }
            closed += 1;
        }

        closed
    }
}
