//! Navigation disclosure
//!
//! A `[data-nav-toggle]` button shows and hides the `.nav .menu` list on
//! narrow viewports.

use glaze_a11y::AriaState;
use glaze_dom::{EventKind, Key, NodeId, UiEvent, ViewTree};

const DEFAULT_MENU_ID: &str = "nav-menu";
const DEFAULT_TOGGLE_LABEL: &str = "Toggle navigation";

/// Collapsible navigation menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMenu {
    nav: NodeId,
    menu: NodeId,
    toggle: NodeId,
    breakpoint: f64,
}

impl NavMenu {
    /// Wire up the toggle and start collapsed
    ///
    /// Without a toggle the nav is left permanently expanded and `None` is
    /// returned, as it is when `.nav` or its `.menu` is missing.
    pub fn setup<V: ViewTree + ?Sized>(view: &mut V, breakpoint: f64) -> Option<Self> {
        let nav = view.query(".nav")?;
        let menu = view.query_within(nav, ".menu")?;

        let menu_id = match view.attribute(menu, "id").filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                view.set_attribute(menu, "id", DEFAULT_MENU_ID);
                DEFAULT_MENU_ID.to_string()
            }
        };

        let Some(toggle) = view.query("[data-nav-toggle]") else {
            view.remove_class(nav, "is-collapsed");
            tracing::debug!("nav has no toggle; leaving it expanded");
            return None;
        };

        let label = view
            .attribute(toggle, "aria-label")
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_TOGGLE_LABEL)
            .to_string();

        AriaState::Expanded(false).apply(view, toggle);
        AriaState::Controls(menu_id).apply(view, toggle);
        AriaState::Label(label).apply(view, toggle);
        view.add_class(nav, "is-collapsed");
        AriaState::Hidden(true).apply(view, menu);

        Some(Self {
            nav,
            menu,
            toggle,
            breakpoint,
        })
    }

    pub fn nav(&self) -> NodeId {
        self.nav
    }

    pub fn menu(&self) -> NodeId {
        self.menu
    }

    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    /// The toggle's `aria-expanded` is the source of truth
    pub fn is_expanded<V: ViewTree + ?Sized>(&self, view: &V) -> bool {
        AriaState::read_bool(view, self.toggle, "aria-expanded").unwrap_or(false)
    }

    pub fn set_expanded<V: ViewTree + ?Sized>(&self, view: &mut V, expand: bool) {
        AriaState::Expanded(expand).apply(view, self.toggle);
        view.toggle_class(self.nav, "is-expanded", expand);
        view.toggle_class(self.nav, "is-collapsed", !expand);
        view.toggle_class(self.menu, "is-open", expand);
        AriaState::Hidden(!expand).apply(view, self.menu);

        if expand {
            if let Some(first) = view.query_all_within(self.menu, "a, button").first() {
                view.focus(*first);
            }
        } else {
            view.focus(self.toggle);
        }
        tracing::debug!(expanded = expand, "nav toggled");
    }

    /// Clicks on (or inside) the toggle flip the menu
    pub fn handle_click<V: ViewTree + ?Sized>(&self, view: &mut V, event: &mut UiEvent) -> bool {
        let Some(target) = event.target else {
            return false;
        };
        if !view.contains(self.toggle, target) {
            return false;
        }
        event.prevent_default();
        let expanded = self.is_expanded(view);
        self.set_expanded(view, !expanded);
        true
    }

    /// Past the breakpoint a collapsed menu is reset to its wide layout
    pub fn handle_resize<V: ViewTree + ?Sized>(&self, view: &mut V) -> bool {
        if view.inner_width() <= self.breakpoint || self.is_expanded(view) {
            return false;
        }
        view.remove_class(self.menu, "is-open");
        view.remove_class(self.nav, "is-expanded");
        view.add_class(self.nav, "is-collapsed");
        view.remove_attribute(self.menu, "aria-hidden");
        true
    }

    /// Escape collapses an expanded menu
    pub fn handle_keydown<V: ViewTree + ?Sized>(&self, view: &mut V, event: &UiEvent) -> bool {
        if event.kind != EventKind::KeyDown || !event.is_key(&Key::Escape) || !self.is_expanded(view) {
            return false;
        }
        self.set_expanded(view, false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_dom::Document;

    fn nav_page(with_toggle: bool) -> (Document, NodeId, NodeId) {
        let mut doc = Document::default();
        let body = doc.body();
        let nav = doc.create_element("nav");
        doc.set_attribute(nav, "class", "nav");
        doc.tree.append_child(body, nav).unwrap();
        if with_toggle {
            let toggle = doc.create_element("button");
            doc.set_attribute(toggle, "data-nav-toggle", "");
            doc.tree.append_child(nav, toggle).unwrap();
        }
        let menu = doc.create_element("ul");
        doc.set_attribute(menu, "class", "menu");
        doc.tree.append_child(nav, menu).unwrap();
        (doc, nav, menu)
    }

    #[test]
    fn test_setup_assigns_menu_id() {
        let (mut doc, nav, menu) = nav_page(true);
        let nav_menu = NavMenu::setup(&mut doc, 720.0).unwrap();

        assert_eq!(doc.attribute(menu, "id"), Some("nav-menu"));
        assert_eq!(doc.attribute(nav_menu.toggle(), "aria-controls"), Some("nav-menu"));
        assert_eq!(doc.attribute(nav_menu.toggle(), "aria-label"), Some("Toggle navigation"));
        assert!(doc.has_class(nav, "is-collapsed"));
        assert!(!nav_menu.is_expanded(&doc));
    }

    #[test]
    fn test_without_toggle_nav_is_expanded() {
        let (mut doc, nav, _) = nav_page(false);
        doc.add_class(nav, "is-collapsed");
        assert!(NavMenu::setup(&mut doc, 720.0).is_none());
        assert!(!doc.has_class(nav, "is-collapsed"));
    }

    #[test]
    fn test_missing_menu_is_inert() {
        let mut doc = Document::default();
        assert!(NavMenu::setup(&mut doc, 720.0).is_none());
    }
}
