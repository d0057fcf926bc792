// Command layer - the boundary the webview talks to.
// Route objects arrive as JSON, snapshots go back as serialisable payloads,
// errors as strings the way IPC commands report them.

use serde_json::Value;

use crate::error::TagsViewError;
use crate::modules::tabs::reorder_visited_views;
use crate::modules::tags_view::TagsViewStore;
use crate::state::{AppState, TagsPayload, ViewRecord, ViewsSnapshot};

fn with_store<T>(
    state: &AppState,
    view: Value,
    action: impl FnOnce(&mut TagsViewStore, &ViewRecord) -> T,
) -> Result<T, String> {
    let view = ViewRecord::from_value(view).map_err(|e| e.to_string())?;
    let mut store = state.store().map_err(|e| e.to_string())?;
    Ok(action(&mut *store, &view))
}

/// Navigation landed on a route: open its tab, cache it, and register the
/// embedded frame when the route points at an external link.
pub fn add_tag_view(state: &AppState, view: Value) -> Result<TagsPayload, String> {
    with_store(state, view, |store, view| {
        store.add_view(view);
        if view.meta.has_link() {
            store.add_iframe_view(view);
        }
        store.payload()
    })
}

pub fn close_tag_view(state: &AppState, view: Value) -> Result<ViewsSnapshot, String> {
    with_store(state, view, |store, view| {
        log::debug!("[Command] close {}", view.path);
        store.del_view(view)
    })
}

pub fn close_other_tags(state: &AppState, view: Value) -> Result<ViewsSnapshot, String> {
    with_store(state, view, |store, view| store.del_others_views(view))
}

pub fn close_all_tags(state: &AppState, view: Value) -> Result<ViewsSnapshot, String> {
    with_store(state, view, |store, view| store.del_all_views(view))
}

/// Closing to one side of a tab that is no longer open is a no-op and
/// answers `None`.
pub fn close_right_tags(state: &AppState, view: Value) -> Result<Option<Vec<ViewRecord>>, String> {
    with_store(state, view, |store, view| store.del_right_tags(view))
}

pub fn close_left_tags(state: &AppState, view: Value) -> Result<Option<Vec<ViewRecord>>, String> {
    with_store(state, view, |store, view| store.del_left_tags(view))
}

/// Drops the cached instance so the page is rebuilt on next display.
/// Re-navigation adds it back through `add_tag_view`.
pub fn refresh_tag_view(state: &AppState, view: Value) -> Result<Vec<String>, String> {
    with_store(state, view, |store, view| {
        if view.meta.has_link() {
            store.del_iframe_view(view);
        }
        store.del_cached_view(view)
    })
}

pub fn update_tag_view(state: &AppState, view: Value) -> Result<(), String> {
    with_store(state, view, |store, view| store.update_visited_view(view))
}

pub fn reorder_tags(state: &AppState, new_order: Vec<String>) -> Result<bool, String> {
    log::debug!("[Command] reorder {:?}", new_order);
    let mut store = state.store().map_err(|e| e.to_string())?;
    Ok(reorder_visited_views(&mut store, &new_order))
}

pub fn get_tags(state: &AppState) -> Result<TagsPayload, String> {
    state
        .store()
        .map(|store| store.payload())
        .map_err(|e: TagsViewError| e.to_string())
}
