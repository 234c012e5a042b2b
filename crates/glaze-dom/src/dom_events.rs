//! UI Events
//!
//! The discrete input events a page reacts to: clicks, key presses,
//! pointer-downs, scroll/resize notifications, animation completion and
//! media-preference changes.

use crate::NodeId;

/// Event kinds routed by the page controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
    PointerDown,
    Scroll,
    Resize,
    AnimationEnd,
    /// `(prefers-reduced-motion: reduce)` changed
    MotionPreferenceChange,
    DomContentLoaded,
}

impl EventKind {
    /// Check if the default action can be cancelled
    pub fn cancelable(&self) -> bool {
        matches!(self, Self::Click | Self::KeyDown | Self::PointerDown)
    }
}

/// Keyboard key (subset of `KeyboardEvent.key`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a `KeyboardEvent.key` value
    pub fn parse(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }
}

/// Keyboard/mouse modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only Shift held
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// A dispatched UI event
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub kind: EventKind,
    /// Event target (None for window-level events)
    pub target: Option<NodeId>,
    pub key: Option<Key>,
    pub modifiers: Modifiers,
    pub client_x: f64,
    pub client_y: f64,
    /// New value for motion-preference changes
    pub reduce_motion: bool,
    cancelable: bool,
    passive: bool,
    default_prevented: bool,
}

impl UiEvent {
    fn new(kind: EventKind, target: Option<NodeId>) -> Self {
        Self {
            kind,
            target,
            key: None,
            modifiers: Modifiers::default(),
            client_x: 0.0,
            client_y: 0.0,
            reduce_motion: false,
            cancelable: kind.cancelable(),
            passive: false,
            default_prevented: false,
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, Some(target))
    }

    /// Create keydown event; `target` is normally the focused element
    pub fn key_down(target: Option<NodeId>, key: Key, modifiers: Modifiers) -> Self {
        Self {
            key: Some(key),
            modifiers,
            ..Self::new(EventKind::KeyDown, target)
        }
    }

    /// Create pointerdown event at client coordinates
    pub fn pointer_down(target: NodeId, client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            ..Self::new(EventKind::PointerDown, Some(target))
        }
    }

    /// Create window scroll event
    pub fn scroll() -> Self {
        Self::new(EventKind::Scroll, None)
    }

    /// Create window resize event
    pub fn resize() -> Self {
        Self::new(EventKind::Resize, None)
    }

    /// Create animationend event
    pub fn animation_end(target: NodeId) -> Self {
        Self::new(EventKind::AnimationEnd, Some(target))
    }

    /// Create media-query change event for reduced motion
    pub fn motion_preference(reduce: bool) -> Self {
        Self {
            reduce_motion: reduce,
            ..Self::new(EventKind::MotionPreferenceChange, None)
        }
    }

    /// Create DOMContentLoaded event
    pub fn content_loaded() -> Self {
        Self::new(EventKind::DomContentLoaded, None)
    }

    /// Key is the given key
    pub fn is_key(&self, key: &Key) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable && !self.passive {
            self.default_prevented = true;
        }
    }

    /// Mark the listener currently running as passive
    pub fn set_passive(&mut self, passive: bool) {
        self.passive = passive;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
