//! Scroll polish: marks the nav once the page has scrolled a little

use glaze_dom::{NodeId, ViewTree};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPolish {
    nav: NodeId,
    threshold: f64,
}

impl ScrollPolish {
    /// Find `.nav` and apply the current scroll state
    pub fn setup<V: ViewTree + ?Sized>(view: &mut V, threshold: f64) -> Option<Self> {
        let nav = view.query(".nav")?;
        let polish = Self { nav, threshold };
        polish.apply(view);
        Some(polish)
    }

    /// Sync `is-scrolled` with the scroll offset
    pub fn apply<V: ViewTree + ?Sized>(&self, view: &mut V) {
        let scrolled = view.scroll_y() > self.threshold;
        view.toggle_class(self.nav, "is-scrolled", scrolled);
    }
}
