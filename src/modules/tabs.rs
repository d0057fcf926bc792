// Tab reordering module - pure logic over the visited views.
// Drives drag-and-drop in the tab bar; cached and iframe views are untouched.

use crate::modules::tags_view::TagsViewStore;
use crate::state::ViewRecord;
use std::collections::HashMap;

/// Reorders the open tabs to follow `new_order` (a list of paths).
/// Returns true if the order changed, false otherwise.
pub fn reorder_visited_views(store: &mut TagsViewStore, new_order: &[String]) -> bool {
    let changed = reorder_logic(store.visited_views_mut(), new_order);
    if changed {
        log::info!("[Tab Reorder] New order: {:?}", store.visited_views().iter().map(|v| &v.path).collect::<Vec<_>>());
    } else {
        log::debug!("[Tab Reorder] No change detected");
    }
    changed
}

/// Algorithm:
/// 1. Map existing views by path for O(1) lookup
/// 2. Rebuild vector based on new_order, ignoring unknown paths
/// 3. Append views missing from new_order in their previous relative order
fn reorder_logic(views: &mut Vec<ViewRecord>, new_order: &[String]) -> bool {
    if views.is_empty() || new_order.is_empty() {
        return false;
    }

    let old_order: Vec<String> = views.iter().map(|v| v.path.clone()).collect();

    let mut by_path: HashMap<String, ViewRecord> = views.drain(..).map(|v| (v.path.clone(), v)).collect();

    let mut reordered = Vec::with_capacity(old_order.len());
    for path in new_order {
        if let Some(view) = by_path.remove(path) {
            reordered.push(view);
        }
    }

    // Never drop a tab the caller forgot to mention.
    for path in &old_order {
        if let Some(view) = by_path.remove(path) {
            reordered.push(view);
        }
    }

    let changed = reordered.iter().map(|v| &v.path).ne(old_order.iter());
    *views = reordered;

    changed
}
