//! Footer copyright year

use glaze_dom::{NodeId, ViewTree};

/// Write `year` into `#year`; returns the stamped element
pub fn stamp_year<V: ViewTree + ?Sized>(view: &mut V, year: i32) -> Option<NodeId> {
    let Some(target) = view.element_by_id("year") else {
        tracing::debug!("no #year element");
        return None;
    };
    view.set_text(target, &year.to_string());
    Some(target)
}
