//! Modal focus trap
//!
//! Tracks which overlays are open, in the order they were opened, and routes
//! keyboard and click input to the topmost one. Closing an overlay hands
//! focus back to whatever opened it.

use glaze_dom::{EventKind, Key, NodeId, UiEvent, ViewTree};

use crate::aria::AriaState;
use crate::focus::FocusTrap;

/// Attribute and class names of the overlay markup contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalMarkup {
    /// Marks an overlay container
    pub modal_attr: String,
    /// On a control: selector of the overlay it opens
    pub open_attr: String,
    /// On a control inside an overlay: closes that overlay
    pub close_attr: String,
    /// Marks an overlay's backdrop
    pub backdrop_attr: String,
    /// Class present while an overlay is open
    pub active_class: String,
}

impl Default for ModalMarkup {
    fn default() -> Self {
        Self {
            modal_attr: "data-modal".to_string(),
            open_attr: "data-modal-open".to_string(),
            close_attr: "data-modal-close".to_string(),
            backdrop_attr: "data-modal-overlay".to_string(),
            active_class: "is-active".to_string(),
        }
    }
}

impl ModalMarkup {
    fn selector(attr: &str) -> String {
        format!("[{attr}]")
    }
}

/// Captured state of one open overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenModal {
    /// Control focus returns to on close
    pub trigger: Option<NodeId>,
    pub trap: FocusTrap,
}

/// Open-overlay registry and input router
#[derive(Debug, Default)]
pub struct ModalManager {
    markup: ModalMarkup,
    /// Insertion order is stacking order; the last entry is topmost
    open: Vec<(NodeId, OpenModal)>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markup(markup: ModalMarkup) -> Self {
        Self {
            markup,
            open: Vec::new(),
        }
    }

    pub fn markup(&self) -> &ModalMarkup {
        &self.markup
    }

    /// Number of open overlays
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn is_open(&self, overlay: NodeId) -> bool {
        self.open.iter().any(|(id, _)| *id == overlay)
    }

    /// Most recently opened overlay
    pub fn topmost(&self) -> Option<NodeId> {
        self.open.last().map(|(id, _)| *id)
    }

    /// Captured state of an open overlay
    pub fn state(&self, overlay: NodeId) -> Option<&OpenModal> {
        self.open
            .iter()
            .find(|(id, _)| *id == overlay)
            .map(|(_, state)| state)
    }

    /// Open overlays, bottom to top
    pub fn open_overlays(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.open.iter().map(|(id, _)| *id)
    }

    /// Show `overlay` and trap focus in it
    ///
    /// `trigger` is the control that asked for it; when `None` the currently
    /// focused element is recorded instead. Returns false if it was already
    /// open or is not an element attached to the page.
    pub fn open<V: ViewTree + ?Sized>(
        &mut self,
        view: &mut V,
        overlay: NodeId,
        trigger: Option<NodeId>,
    ) -> bool {
        if self.is_open(overlay) {
            return false;
        }
        if view.tag_name(overlay).is_none() || !view.is_connected(overlay) {
            tracing::debug!(?overlay, "modal open ignored: not an attached element");
            return false;
        }

        let trigger = trigger.or_else(|| view.active_element());
        view.add_class(overlay, &self.markup.active_class);
        view.remove_attribute(overlay, "hidden");
        AriaState::Hidden(false).apply(view, overlay);
        view.set_attribute(overlay, "data-open", "true");

        let trap = FocusTrap::capture(view, overlay);
        self.open.push((overlay, OpenModal { trigger, trap }));
        view.focus(trap.first);

        tracing::debug!(?overlay, ?trigger, depth = self.open.len(), "modal opened");
        true
    }

    /// Hide `overlay` and restore focus to its trigger
    ///
    /// Returns false if it was not open.
    pub fn close<V: ViewTree + ?Sized>(&mut self, view: &mut V, overlay: NodeId) -> bool {
        let Some(index) = self.open.iter().position(|(id, _)| *id == overlay) else {
            return false;
        };
        let (_, state) = self.open.remove(index);

        view.remove_class(overlay, &self.markup.active_class);
        AriaState::Hidden(true).apply(view, overlay);
        view.set_attribute(overlay, "data-open", "false");

        match state.trigger {
            Some(trigger) if view.is_connected(trigger) => view.focus(trigger),
            Some(trigger) => tracing::debug!(?trigger, "trigger detached, focus not restored"),
            None => {}
        }

        tracing::debug!(?overlay, depth = self.open.len(), "modal closed");
        true
    }

    /// Escape and Tab handling for the topmost overlay
    ///
    /// Returns true if the event was consumed.
    pub fn handle_key<V: ViewTree + ?Sized>(&mut self, view: &mut V, event: &mut UiEvent) -> bool {
        if event.kind != EventKind::KeyDown {
            return false;
        }
        let Some(&(overlay, state)) = self.open.last() else {
            return false;
        };

        match event.key {
            Some(Key::Escape) => {
                event.prevent_default();
                self.close(view, overlay)
            }
            Some(Key::Tab) => {
                let backwards = event.modifiers.shift;
                match state.trap.wrap_target(view.active_element(), backwards) {
                    Some(target) => {
                        event.prevent_default();
                        view.focus(target);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Click routing: outside clicks first, then opener/closer controls
    ///
    /// The outside check sees the stack as it was before this click, so a
    /// click on an opener never closes the overlay it has just opened.
    pub fn handle_click<V: ViewTree + ?Sized>(&mut self, view: &mut V, event: &mut UiEvent) -> bool {
        if event.kind != EventKind::Click {
            return false;
        }
        let Some(target) = event.target else {
            return false;
        };

        let closed_outside = self.route_outside_click(view, target);
        let handled_control = self.route_controls(view, target, event);
        closed_outside || handled_control
    }

    /// Close the topmost overlay when `target` is its backdrop or lies
    /// outside every overlay
    pub fn route_outside_click<V: ViewTree + ?Sized>(&mut self, view: &mut V, target: NodeId) -> bool {
        let Some(overlay) = self.topmost() else {
            return false;
        };

        let on_backdrop = view.has_attribute(target, &self.markup.backdrop_attr);
        let outside = !view.contains(overlay, target)
            && view
                .closest(target, &ModalMarkup::selector(&self.markup.modal_attr))
                .is_none();

        if on_backdrop || outside {
            return self.close(view, overlay);
        }
        false
    }

    /// Opener and closer controls at or above `target`
    fn route_controls<V: ViewTree + ?Sized>(
        &mut self,
        view: &mut V,
        target: NodeId,
        event: &mut UiEvent,
    ) -> bool {
        if let Some(opener) = view.closest(target, &ModalMarkup::selector(&self.markup.open_attr)) {
            event.prevent_default();
            let selector = view
                .attribute(opener, &self.markup.open_attr)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let Some(selector) = selector else {
                return false;
            };
            return match view.query(&selector) {
                Some(overlay) => self.open(view, overlay, Some(opener)),
                None => {
                    tracing::debug!(%selector, "modal opener target not found");
                    false
                }
            };
        }

        if let Some(closer) = view.closest(target, &ModalMarkup::selector(&self.markup.close_attr)) {
            event.prevent_default();
            let modal_selector = ModalMarkup::selector(&self.markup.modal_attr);
            return match view.closest(closer, &modal_selector) {
                Some(overlay) => self.close(view, overlay),
                None => {
                    tracing::debug!(?closer, "modal closer outside any overlay");
                    false
                }
            };
        }

        false
    }
}
