//! Age verification gate
//!
//! Covers the page until the visitor confirms their age. The confirmation is
//! remembered in local storage, so later page loads skip the gate.

use glaze_a11y::AriaState;
use glaze_dom::{NodeId, UiEvent, ViewTree};

use crate::storage::Storage;

const CONFIRMED: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGate {
    gate: NodeId,
    confirm: NodeId,
    exit: NodeId,
    storage_key: String,
    exit_url: String,
}

impl AgeGate {
    /// Locate `#ageGate` and its two buttons and show the gate unless the
    /// visitor already confirmed
    ///
    /// Inert (`None`) if any of the three elements is missing.
    pub fn setup<V, S>(view: &mut V, storage: &S, storage_key: &str, exit_url: &str) -> Option<Self>
    where
        V: ViewTree + ?Sized,
        S: Storage + ?Sized,
    {
        let gate = Self {
            gate: view.element_by_id("ageGate")?,
            confirm: view.element_by_id("ageGateConfirm")?,
            exit: view.element_by_id("ageGateExit")?,
            storage_key: storage_key.to_string(),
            exit_url: exit_url.to_string(),
        };

        if gate.is_verified(storage) {
            tracing::debug!("age already verified");
        } else {
            gate.show(view);
        }
        Some(gate)
    }

    pub fn is_verified<S: Storage + ?Sized>(&self, storage: &S) -> bool {
        storage.get_item(&self.storage_key).as_deref() == Some(CONFIRMED)
    }

    pub fn gate(&self) -> NodeId {
        self.gate
    }

    pub fn show<V: ViewTree + ?Sized>(&self, view: &mut V) {
        AriaState::Hidden(false).apply(view, self.gate);
        if let Some(body) = view.body() {
            view.add_class(body, "no-scroll");
        }
        view.focus(self.confirm);
        tracing::info!("age gate shown");
    }

    pub fn hide<V: ViewTree + ?Sized>(&self, view: &mut V) {
        AriaState::Hidden(true).apply(view, self.gate);
        if let Some(body) = view.body() {
            view.remove_class(body, "no-scroll");
        }
    }

    /// Confirm and exit clicks
    pub fn handle_click<V, S>(&self, view: &mut V, storage: &mut S, event: &UiEvent) -> bool
    where
        V: ViewTree + ?Sized,
        S: Storage + ?Sized,
    {
        let Some(target) = event.target else {
            return false;
        };

        if view.contains(self.confirm, target) {
            storage.set_item(&self.storage_key, CONFIRMED);
            self.hide(view);
            tracing::info!("age confirmed");
            true
        } else if view.contains(self.exit, target) {
            view.navigate(&self.exit_url);
            true
        } else {
            false
        }
    }
}
