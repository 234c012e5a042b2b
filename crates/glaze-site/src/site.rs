//! Page controller
//!
//! `Site` owns the view, the page's storage area and every behaviour's
//! state. The host calls `mount` once after loading markup, then feeds each
//! UI event to `dispatch`.

use glaze_a11y::ModalManager;
use glaze_dom::{EventKind, NodeId, UiEvent, ViewTree};

use crate::behaviours::{AgeGate, NavMenu, RippleEffect, ScrollPolish, ThemeSwitcher, stamp_year};
use crate::config::SiteConfig;
use crate::dispatch::{EventTable, HandlerId, ListenerOptions};
use crate::storage::Storage;

/// Interactive page session
#[derive(Debug)]
pub struct Site<V: ViewTree, S: Storage> {
    view: V,
    storage: S,
    config: SiteConfig,
    events: EventTable,
    nav: Option<NavMenu>,
    scroll: Option<ScrollPolish>,
    theme: Option<ThemeSwitcher>,
    ripple: RippleEffect,
    modals: ModalManager,
    age_gate: Option<AgeGate>,
}

impl<V: ViewTree, S: Storage> Site<V, S> {
    /// Create an unmounted controller
    ///
    /// Only the content-loaded setup and the reduced-motion listener are
    /// registered; nothing touches the view yet.
    pub fn new(view: V, storage: S, config: SiteConfig) -> Self {
        let mut events = EventTable::new();
        events.add_listener(EventKind::DomContentLoaded, HandlerId::Setup, ListenerOptions::once());
        events.add_listener(EventKind::MotionPreferenceChange, HandlerId::Motion, ListenerOptions::default());

        let ripple = RippleEffect::new(config.accent_property.clone(), config.reduce_motion);
        Self {
            view,
            storage,
            config,
            events,
            nav: None,
            scroll: None,
            theme: None,
            ripple,
            modals: ModalManager::new(),
            age_gate: None,
        }
    }

    /// Create and mount: load-time routines, then content-loaded setup
    pub fn mount(view: V, storage: S, config: SiteConfig, year: i32) -> Self {
        let mut site = Self::new(view, storage, config);
        site.load(year);
        site.dispatch(&mut UiEvent::content_loaded());
        tracing::info!(handlers = site.events.len(), "site mounted");
        site
    }

    /// Year stamp and age gate
    fn load(&mut self, year: i32) {
        stamp_year(&mut self.view, year);

        self.age_gate = AgeGate::setup(
            &mut self.view,
            &self.storage,
            &self.config.age_gate_key,
            &self.config.exit_url,
        );
        if self.age_gate.is_some() {
            self.events.add_listener(EventKind::Click, HandlerId::AgeGate, ListenerOptions::default());
        }
    }

    /// Content-loaded routines, in order
    fn setup(&mut self) {
        self.nav = NavMenu::setup(&mut self.view, self.config.nav_breakpoint);
        if self.nav.is_some() {
            for kind in [EventKind::Click, EventKind::Resize, EventKind::KeyDown] {
                self.events.add_listener(kind, HandlerId::Nav, ListenerOptions::default());
            }
        }

        self.scroll = ScrollPolish::setup(&mut self.view, self.config.scroll_threshold);
        if self.scroll.is_some() {
            self.events.add_listener(EventKind::Scroll, HandlerId::Scroll, ListenerOptions::passive());
        }

        self.theme = ThemeSwitcher::setup(&self.view, self.config.theme_classes());
        if self.theme.is_some() {
            self.events.add_listener(EventKind::Click, HandlerId::Theme, ListenerOptions::default());
        }

        self.events.add_listener(EventKind::PointerDown, HandlerId::Ripple, ListenerOptions::passive());
        self.events.add_listener(EventKind::AnimationEnd, HandlerId::Ripple, ListenerOptions::default());

        self.events.add_listener(EventKind::KeyDown, HandlerId::Modal, ListenerOptions::default());
        self.events.add_listener(EventKind::Click, HandlerId::Modal, ListenerOptions::default());

        tracing::debug!(
            nav = self.nav.is_some(),
            scroll = self.scroll.is_some(),
            theme = self.theme.is_some(),
            "behaviours set up"
        );
    }

    /// Route one event through the delegated handlers for its kind
    ///
    /// Returns true if any handler acted on it.
    pub fn dispatch(&mut self, event: &mut UiEvent) -> bool {
        let listeners = self.events.listeners(event.kind);
        let mut dispatched = Vec::with_capacity(listeners.len());
        let mut handled = false;

        for listener in listeners {
            event.set_passive(listener.options.passive);
            handled |= self.run(listener.handler_id, event);
            dispatched.push(listener.handler_id);
        }
        event.set_passive(false);

        self.events.cleanup_once_handlers(event.kind, &dispatched);
        handled
    }

    fn run(&mut self, handler: HandlerId, event: &mut UiEvent) -> bool {
        match handler {
            HandlerId::Setup => {
                self.setup();
                true
            }
            HandlerId::Nav => match (self.nav, event.kind) {
                (Some(nav), EventKind::Click) => nav.handle_click(&mut self.view, event),
                (Some(nav), EventKind::Resize) => nav.handle_resize(&mut self.view),
                (Some(nav), EventKind::KeyDown) => nav.handle_keydown(&mut self.view, event),
                _ => false,
            },
            HandlerId::Scroll => match self.scroll {
                Some(scroll) => {
                    scroll.apply(&mut self.view);
                    true
                }
                None => false,
            },
            HandlerId::Theme => match &self.theme {
                Some(theme) => theme.handle_click(&mut self.view, event),
                None => false,
            },
            HandlerId::Ripple => match event.kind {
                EventKind::PointerDown => self.ripple.handle_pointer_down(&mut self.view, event).is_some(),
                EventKind::AnimationEnd => self.ripple.handle_animation_end(&mut self.view, event),
                _ => false,
            },
            HandlerId::Motion => {
                self.ripple.set_reduce_motion(event.reduce_motion);
                true
            }
            HandlerId::Modal => match event.kind {
                EventKind::KeyDown => self.modals.handle_key(&mut self.view, event),
                EventKind::Click => self.modals.handle_click(&mut self.view, event),
                _ => false,
            },
            HandlerId::AgeGate => match &self.age_gate {
                Some(gate) => gate.handle_click(&mut self.view, &mut self.storage, event),
                None => false,
            },
        }
    }

    /// Open an overlay from code; focus returns to the current active element
    pub fn open_modal(&mut self, overlay: NodeId) -> bool {
        self.modals.open(&mut self.view, overlay, None)
    }

    pub fn close_modal(&mut self, overlay: NodeId) -> bool {
        self.modals.close(&mut self.view, overlay)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// For the host to update window metrics before dispatching
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn events(&self) -> &EventTable {
        &self.events
    }

    pub fn modals(&self) -> &ModalManager {
        &self.modals
    }

    pub fn nav(&self) -> Option<&NavMenu> {
        self.nav.as_ref()
    }

    pub fn ripple(&self) -> &RippleEffect {
        &self.ripple
    }

    pub fn age_gate(&self) -> Option<&AgeGate> {
        self.age_gate.as_ref()
    }

    /// End the session, handing back the view and storage
    pub fn into_parts(self) -> (V, S) {
        (self.view, self.storage)
    }
}
