//! Button ripple effect
//!
//! A pointer-down inside a `.btn` drops a `span.ripple` at the pointer. The
//! stylesheet animates it; the host reports `animationend` and the span is
//! removed again. Removed spans are kept detached and reused, so a long
//! session does not keep growing the node arena.

use glaze_dom::{NodeId, UiEvent, ViewTree};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RippleEffect {
    /// `prefers-reduced-motion: reduce`
    reduce_motion: bool,
    accent_property: String,
    /// Ripples waiting for their animation to end
    live: Vec<NodeId>,
    /// Detached spans ready for the next pointer-down
    spare: Vec<NodeId>,
}

impl RippleEffect {
    pub fn new(accent_property: impl Into<String>, reduce_motion: bool) -> Self {
        Self {
            reduce_motion,
            accent_property: accent_property.into(),
            live: Vec::new(),
            spare: Vec::new(),
        }
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.reduce_motion = reduce;
    }

    /// Ripples currently attached
    pub fn live(&self) -> &[NodeId] {
        &self.live
    }

    /// Spawn a ripple for a pointer-down; returns the new span
    pub fn handle_pointer_down<V: ViewTree + ?Sized>(&mut self, view: &mut V, event: &UiEvent) -> Option<NodeId> {
        let button = view.closest(event.target?, ".btn")?;
        if self.reduce_motion {
            return None;
        }

        let rect = view.bounding_rect(button);
        let size = rect.max_side();
        let (x, y) = rect.to_local(event.client_x, event.client_y);
        let (x, y) = (x - size / 2.0, y - size / 2.0);

        let ripple = match self.spare.pop() {
            Some(span) => {
                view.remove_attribute(span, "style");
                span
            }
            None => view.create_element("span"),
        };
        view.set_attribute(ripple, "class", "ripple");
        view.set_style(ripple, "width", &format!("{size}px"));
        view.set_style(ripple, "height", &format!("{size}px"));
        view.set_style(ripple, "left", &format!("{x}px"));
        view.set_style(ripple, "top", &format!("{y}px"));

        let accent = view
            .custom_property(button, &self.accent_property)
            .filter(|accent| !accent.is_empty());
        if let Some(accent) = accent {
            view.set_style(ripple, "background", &format!("color-mix(in srgb, {accent} 70%, white 10%)"));
        }

        if let Err(err) = view.append_child(button, ripple) {
            tracing::debug!("ripple not attached: {err}");
            self.spare.push(ripple);
            return None;
        }
        self.live.push(ripple);
        Some(ripple)
    }

    /// Remove a ripple whose animation finished
    pub fn handle_animation_end<V: ViewTree + ?Sized>(&mut self, view: &mut V, event: &UiEvent) -> bool {
        let Some(target) = event.target else {
            return false;
        };
        let Some(index) = self.live.iter().position(|&r| r == target) else {
            return false;
        };
        self.live.swap_remove(index);
        view.remove(target);
        self.spare.push(target);
        true
    }
}
