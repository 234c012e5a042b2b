//! Focus Management
//!
//! Which elements take keyboard focus, and the first/last stops of a
//! container that traps it.

use glaze_dom::{NodeId, ViewTree};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,    // negative or unparsable
    Sequential(i32), // zero or positive
}

impl TabIndex {
    /// Stricter than `[tabindex]:not([tabindex="-1"])`: an empty value and
    /// any negative index are both left out of the tab order on purpose.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Whether `node` takes part in sequential keyboard focus
///
/// Links need an `href`; form controls must not be `disabled` and inputs must
/// not be `type="hidden"`; anything with a non-negative `tabindex` counts.
/// Elements carrying `aria-hidden` (any value) are excluded.
pub fn is_focusable<V: ViewTree + ?Sized>(view: &V, node: NodeId) -> bool {
    if view.has_attribute(node, "aria-hidden") {
        return false;
    }

    let by_tag = match view.tag_name(node) {
        Some("a") => view.has_attribute(node, "href"),
        Some("button" | "select" | "textarea") => !view.has_attribute(node, "disabled"),
        Some("input") => {
            !view.has_attribute(node, "disabled")
                && !view
                    .attribute(node, "type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        }
        Some(_) => false,
        None => return false,
    };

    by_tag
        || view
            .attribute(node, "tabindex")
            .is_some_and(|v| TabIndex::parse(v).is_focusable())
}

/// Focusable descendants of `container` in document order
pub fn focusable_descendants<V: ViewTree + ?Sized>(view: &V, container: NodeId) -> Vec<NodeId> {
    view.query_all_within(container, "*")
        .into_iter()
        .filter(|&node| is_focusable(view, node))
        .collect()
}

/// First and last focus stops of a trapping container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    pub container: NodeId,
    pub first: NodeId,
    pub last: NodeId,
}

impl FocusTrap {
    /// Compute stops; an empty container traps focus on itself
    pub fn capture<V: ViewTree + ?Sized>(view: &V, container: NodeId) -> Self {
        let focusable = focusable_descendants(view, container);
        Self {
            container,
            first: focusable.first().copied().unwrap_or(container),
            last: focusable.last().copied().unwrap_or(container),
        }
    }

    /// Where Tab (or Shift+Tab when `backwards`) must wrap to, if it must
    pub fn wrap_target(&self, focused: Option<NodeId>, backwards: bool) -> Option<NodeId> {
        match (backwards, focused) {
            (true, Some(f)) if f == self.first => Some(self.last),
            (false, Some(f)) if f == self.last => Some(self.first),
            _ => None,
        }
    }
}
