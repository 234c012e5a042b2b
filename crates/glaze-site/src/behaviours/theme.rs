//! Flavour theme switcher
//!
//! `[data-flavour]` controls swap the `theme--*` class on `<html>` and
//! `<body>` and report which flavour is selected through `aria-pressed`.

use glaze_a11y::AriaState;
use glaze_dom::{NodeId, UiEvent, ViewTree};

use crate::config::theme_class;

const FLAVOUR_ATTR: &str = "data-flavour";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSwitcher {
    controls: Vec<NodeId>,
    /// Classes cleared before a new theme is applied
    theme_classes: Vec<String>,
}

impl ThemeSwitcher {
    /// `None` when the page has no flavour controls
    pub fn setup<V: ViewTree + ?Sized>(view: &V, theme_classes: Vec<String>) -> Option<Self> {
        let controls = view.query_all("[data-flavour]");
        if controls.is_empty() {
            return None;
        }
        Some(Self {
            controls,
            theme_classes,
        })
    }

    pub fn controls(&self) -> &[NodeId] {
        &self.controls
    }

    /// Replace the active theme on the document element and body
    pub fn set_theme<V: ViewTree + ?Sized>(&self, view: &mut V, flavour: &str) {
        let hosts = [view.document_element(), view.body()];
        let class = theme_class(flavour);
        for host in hosts.into_iter().flatten() {
            for known in &self.theme_classes {
                view.remove_class(host, known);
            }
            view.add_class(host, &class);
        }
        tracing::debug!(flavour, "theme applied");
    }

    /// Clicks on (or inside) a flavour control
    pub fn handle_click<V: ViewTree + ?Sized>(&self, view: &mut V, event: &mut UiEvent) -> bool {
        let Some(target) = event.target else {
            return false;
        };
        let Some(control) = self
            .controls
            .iter()
            .copied()
            .find(|&control| view.contains(control, target))
        else {
            return false;
        };

        event.prevent_default();
        let flavour = match view.attribute(control, FLAVOUR_ATTR) {
            Some(flavour) if !flavour.is_empty() => flavour.to_string(),
            _ => return false,
        };

        self.set_theme(view, &flavour);
        for &other in &self.controls {
            AriaState::Pressed(other == control).apply(view, other);
        }
        true
    }
}
