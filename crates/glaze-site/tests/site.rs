//! Page controller tests
//!
//! Mounts the bundled demo page and drives it with UI events the way a host
//! browser would.

use glaze_dom::{Document, Key, Modifiers, NodeId, UiEvent, ViewTree};
use glaze_html::HtmlParser;
use glaze_site::{LocalStorage, Script, Site, SiteConfig, SiteError, Storage, StorageManager};

const DEMO_PAGE: &str = include_str!("../assets/demo.html");
const DEMO_SESSION: &str = include_str!("../assets/demo-session.json");
const ORIGIN: &str = "https://eciggy.uk";
const AGE_KEY: &str = "eciggy-age-verified";

fn page() -> Document {
    HtmlParser::new().parse_with_url(DEMO_PAGE, "https://eciggy.uk/").unwrap()
}

fn verified_storage() -> LocalStorage {
    let mut storage = LocalStorage::new();
    storage.set_item(AGE_KEY, "true");
    storage
}

fn mount(doc: Document) -> Site<Document, LocalStorage> {
    Site::mount(doc, verified_storage(), SiteConfig::default(), 2026)
}

fn find<S: Storage>(site: &Site<Document, S>, selector: &str) -> NodeId {
    site.view().query(selector).unwrap()
}

fn click<S: Storage>(site: &mut Site<Document, S>, selector: &str) -> UiEvent {
    let target = find(site, selector);
    let mut event = UiEvent::click(target);
    site.dispatch(&mut event);
    event
}

fn key<S: Storage>(site: &mut Site<Document, S>, key: Key, modifiers: Modifiers) -> UiEvent {
    let focused = ViewTree::active_element(site.view());
    let mut event = UiEvent::key_down(focused, key, modifiers);
    site.dispatch(&mut event);
    event
}

fn focused<S: Storage>(site: &Site<Document, S>) -> Option<NodeId> {
    ViewTree::active_element(site.view())
}

#[test]
fn test_year_is_stamped() {
    let site = mount(page());
    let year = find(&site, "#year");
    assert_eq!(site.view().tree().text_content(year), "2026");
}

#[test]
fn test_age_gate_scenario() {
    let mut manager = StorageManager::new();

    let mut site = Site::mount(page(), manager.local_storage(ORIGIN), SiteConfig::default(), 2026);
    let gate = find(&site, "#ageGate");
    let confirm = find(&site, "#ageGateConfirm");
    let body = Document::body(site.view());

    assert_eq!(site.view().attribute(gate, "aria-hidden"), Some("false"));
    assert!(site.view().has_class(body, "no-scroll"));
    assert_eq!(focused(&site), Some(confirm));

    click(&mut site, "#ageGateConfirm");
    assert_eq!(site.storage().get_item(AGE_KEY).as_deref(), Some("true"));
    assert_eq!(site.view().attribute(gate, "aria-hidden"), Some("true"));
    assert!(!site.view().has_class(body, "no-scroll"));
    drop(site);

    // Reload against the same storage
    let site = Site::mount(page(), manager.local_storage(ORIGIN), SiteConfig::default(), 2026);
    let gate = find(&site, "#ageGate");
    let body = Document::body(site.view());
    assert_eq!(site.view().attribute(gate, "aria-hidden"), Some("true"));
    assert!(!site.view().has_class(body, "no-scroll"));
    assert_ne!(focused(&site), Some(find(&site, "#ageGateConfirm")));
}

#[test]
fn test_age_gate_exit_navigates() {
    let config = SiteConfig {
        exit_url: "https://example.com/".to_string(),
        ..SiteConfig::default()
    };
    let mut site = Site::mount(page(), LocalStorage::new(), config, 2026);

    click(&mut site, "#ageGateExit");
    assert_eq!(site.view().url(), "https://example.com/");
    assert!(site.storage().is_empty());
}

#[test]
fn test_nav_setup() {
    let site = mount(page());
    let toggle = find(&site, "[data-nav-toggle]");
    let nav = find(&site, ".nav");
    let menu = find(&site, ".menu");
    let view = site.view();

    assert_eq!(view.attribute(menu, "id"), Some("nav-menu"));
    assert_eq!(view.attribute(toggle, "aria-expanded"), Some("false"));
    assert_eq!(view.attribute(toggle, "aria-controls"), Some("nav-menu"));
    assert_eq!(view.attribute(toggle, "aria-label"), Some("Toggle navigation"));
    assert_eq!(view.attribute(menu, "aria-hidden"), Some("true"));
    assert!(view.has_class(nav, "is-collapsed"));
}

#[test]
fn test_nav_toggle_and_escape() {
    let mut site = mount(page());
    let toggle = find(&site, "[data-nav-toggle]");
    let nav = find(&site, ".nav");
    let menu = find(&site, ".menu");
    let first_link = find(&site, "[href='#flavours']");

    let event = click(&mut site, "[data-nav-toggle]");
    assert!(event.is_default_prevented());
    assert_eq!(site.view().attribute(toggle, "aria-expanded"), Some("true"));
    assert!(site.view().has_class(nav, "is-expanded"));
    assert!(!site.view().has_class(nav, "is-collapsed"));
    assert!(site.view().has_class(menu, "is-open"));
    assert_eq!(site.view().attribute(menu, "aria-hidden"), Some("false"));
    assert_eq!(focused(&site), Some(first_link));

    key(&mut site, Key::Escape, Modifiers::default());
    assert_eq!(site.view().attribute(toggle, "aria-expanded"), Some("false"));
    assert!(site.view().has_class(nav, "is-collapsed"));
    assert!(!site.view().has_class(menu, "is-open"));
    assert_eq!(focused(&site), Some(toggle));

    // Escape on a collapsed nav changes nothing
    key(&mut site, Key::Escape, Modifiers::default());
    assert_eq!(site.view().attribute(toggle, "aria-expanded"), Some("false"));
}

#[test]
fn test_nav_resize_past_breakpoint() {
    let mut site = mount(page());
    let menu = find(&site, ".menu");
    let nav = find(&site, ".nav");

    site.view_mut().set_inner_width(600.0);
    site.dispatch(&mut UiEvent::resize());
    assert_eq!(site.view().attribute(menu, "aria-hidden"), Some("true"));

    site.view_mut().set_inner_width(1024.0);
    assert!(site.dispatch(&mut UiEvent::resize()));
    assert_eq!(site.view().attribute(menu, "aria-hidden"), None);
    assert!(site.view().has_class(nav, "is-collapsed"));

    // An expanded menu is left alone
    click(&mut site, "[data-nav-toggle]");
    site.dispatch(&mut UiEvent::resize());
    assert!(site.view().has_class(menu, "is-open"));
}

#[test]
fn test_scroll_threshold() {
    let mut site = mount(page());
    let nav = find(&site, ".nav");
    assert!(!site.view().has_class(nav, "is-scrolled"));

    site.view_mut().set_scroll_y(24.0);
    site.dispatch(&mut UiEvent::scroll());
    assert!(!site.view().has_class(nav, "is-scrolled"));

    site.view_mut().set_scroll_y(200.0);
    site.dispatch(&mut UiEvent::scroll());
    assert!(site.view().has_class(nav, "is-scrolled"));

    site.view_mut().set_scroll_y(0.0);
    site.dispatch(&mut UiEvent::scroll());
    assert!(!site.view().has_class(nav, "is-scrolled"));
}

#[test]
fn test_scroll_state_applied_at_mount() {
    let mut doc = page();
    doc.set_scroll_y(500.0);
    let site = mount(doc);
    assert!(site.view().has_class(find(&site, ".nav"), "is-scrolled"));
}

#[test]
fn test_theme_switching() {
    let mut site = mount(page());
    let html = Document::document_element(site.view());
    let body = Document::body(site.view());

    let event = click(&mut site, "[data-flavour=grape]");
    assert!(event.is_default_prevented());
    assert!(site.view().has_class(html, "theme--grape"));
    assert!(site.view().has_class(body, "theme--grape"));

    click(&mut site, "[data-flavour=lemon]");
    assert!(!site.view().has_class(body, "theme--grape"));
    assert!(site.view().has_class(body, "theme--lemon"));

    let pressed: Vec<_> = site
        .view()
        .query_all("[data-flavour]")
        .into_iter()
        .map(|control| site.view().attribute(control, "aria-pressed").unwrap_or_default().to_string())
        .collect();
    assert_eq!(pressed, vec!["true", "false", "false", "false", "false"]);
}

#[test]
fn test_empty_flavour_is_ignored() {
    let mut doc = page();
    let lemon = doc.query("[data-flavour=lemon]").unwrap();
    doc.set_attribute(lemon, "data-flavour", "");
    let mut site = mount(doc);
    let body = Document::body(site.view());

    let mut event = UiEvent::click(lemon);
    site.dispatch(&mut event);
    assert!(event.is_default_prevented());
    assert!(!site.view().has_class(body, "theme--"));
    assert_eq!(site.view().attribute(lemon, "aria-pressed"), Some("false"));
}

#[test]
fn test_ripple_created_and_removed() {
    let mut site = mount(page());
    let button = find(&site, ".btn--primary");

    let mut event = UiEvent::pointer_down(button, 12.0, 8.0);
    assert!(site.dispatch(&mut event));

    let ripple = find(&site, ".ripple");
    assert_eq!(site.view().tree().parent(ripple), Some(button));
    let style = site.view().tree().element(ripple).unwrap().style();
    assert_eq!(style.get("background"), Some("color-mix(in srgb, #ff5f7a 70%, white 10%)"));
    assert_eq!(style.get("left"), Some("12px"));

    site.dispatch(&mut UiEvent::animation_end(ripple));
    assert!(!site.view().is_connected(ripple));
    assert!(site.ripple().live().is_empty());
}

#[test]
fn test_ripple_listener_is_passive() {
    let mut site = mount(page());
    let button = find(&site, ".btn--primary");

    let mut event = UiEvent::pointer_down(button, 0.0, 0.0);
    site.dispatch(&mut event);
    assert!(!event.is_default_prevented());
}

#[test]
fn test_reduced_motion_suppresses_ripple() {
    let mut site = mount(page());
    let button = find(&site, ".btn--primary");

    site.dispatch(&mut UiEvent::motion_preference(true));
    assert!(!site.dispatch(&mut UiEvent::pointer_down(button, 0.0, 0.0)));
    assert!(site.view().query(".ripple").is_none());

    site.dispatch(&mut UiEvent::motion_preference(false));
    site.dispatch(&mut UiEvent::pointer_down(button, 0.0, 0.0));
    assert!(site.view().query(".ripple").is_some());
}

#[test]
fn test_modal_round_trip_through_site() {
    let mut site = mount(page());
    let opener = find(&site, ".btn--primary");
    let modal = find(&site, "#newsletter");
    let email = find(&site, "#email");
    let close = find(&site, "[data-modal-close]");

    let event = click(&mut site, ".btn--primary");
    assert!(event.is_default_prevented());
    assert_eq!(site.modals().topmost(), Some(modal));
    assert_eq!(site.view().attribute(modal, "data-open"), Some("true"));
    assert_eq!(focused(&site), Some(email));

    key(&mut site, Key::Tab, Modifiers::shift());
    assert_eq!(focused(&site), Some(close));
    key(&mut site, Key::Tab, Modifiers::default());
    assert_eq!(focused(&site), Some(email));

    let event = key(&mut site, Key::Escape, Modifiers::default());
    assert!(event.is_default_prevented());
    assert_eq!(site.modals().open_count(), 0);
    assert_eq!(focused(&site), Some(opener));
}

#[test]
fn test_modal_backdrop_and_programmatic_open() {
    let mut site = mount(page());
    let modal = find(&site, "#newsletter");
    let confirm = find(&site, "#ageGateConfirm");
    site.view_mut().focus(confirm);

    assert!(site.open_modal(modal));
    assert!(!site.open_modal(modal));

    click(&mut site, "[data-modal-overlay]");
    assert!(!site.modals().is_open(modal));
    assert_eq!(focused(&site), Some(confirm));
    assert!(!site.close_modal(modal));
}

#[test]
fn test_open_ignores_detached_or_missing_overlay() {
    let mut site = mount(page());
    let modal = find(&site, "#newsletter");
    site.view_mut().remove(modal);

    assert!(!site.open_modal(modal));
    assert!(!site.open_modal(NodeId::NONE));
    assert_eq!(site.modals().open_count(), 0);

    // Escape still reaches the nav instead of a phantom overlay
    let event = key(&mut site, Key::Escape, Modifiers::default());
    assert!(!event.is_default_prevented());
}

#[test]
fn test_script_replay() {
    let mut manager = StorageManager::new();
    let mut site = Site::mount(page(), manager.local_storage(ORIGIN), SiteConfig::default(), 2026);
    let script = Script::from_json(DEMO_SESSION).unwrap();

    let outcomes = script.run(&mut site).unwrap();
    assert_eq!(outcomes.len(), script.steps().len());
    assert!(outcomes.iter().all(|outcome| outcome.handled));

    let body = Document::body(site.view());
    assert!(site.view().has_class(body, "theme--grape"));
    assert!(site.view().has_class(find(&site, ".nav"), "is-scrolled"));
    assert!(site.view().query(".ripple").is_none());
    assert_eq!(site.modals().open_count(), 0);
    assert_eq!(focused(&site), Some(find(&site, ".btn--primary")));
    drop(site);

    assert_eq!(manager.local_get(ORIGIN, AGE_KEY).as_deref(), Some("true"));
}

#[test]
fn test_script_missing_target() {
    let mut site = mount(page());
    let script = Script::from_json(r##"[{ "type": "click", "selector": "#nope" }]"##).unwrap();

    let err = script.run(&mut site).unwrap_err();
    assert!(matches!(err, SiteError::ScriptTarget { step: 0, .. }));
}

#[test]
fn test_parts_survive_session() {
    let site = mount(page());
    let (doc, storage) = site.into_parts();
    assert_eq!(doc.title(), "Eciggy UK");
    assert_eq!(storage.get_item(AGE_KEY).as_deref(), Some("true"));
}
