//! Event Delegation
//!
//! One delegated listener per event kind. Behaviours register under a
//! handler id; dispatch walks the handlers for the event's kind in the order
//! they were added.

use glaze_dom::EventKind;
use std::collections::HashMap;

/// Behaviour routines that can handle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerId {
    /// Runs the content-loaded setup routines
    Setup,
    Nav,
    Scroll,
    Theme,
    Ripple,
    /// Reduced-motion media query listener
    Motion,
    Modal,
    AgeGate,
}

/// Listener options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Handler may not prevent the default action
    pub passive: bool,
    /// Remove after the first dispatch
    pub once: bool,
}

impl ListenerOptions {
    pub fn passive() -> Self {
        Self {
            passive: true,
            ..Self::default()
        }
    }

    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }
}

/// Registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventListener {
    pub handler_id: HandlerId,
    pub options: ListenerOptions,
}

/// Delegated handler table
#[derive(Debug, Default)]
pub struct EventTable {
    root_handlers: HashMap<EventKind, Vec<EventListener>>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delegated handler; a handler is registered at most once per kind
    pub fn add_listener(&mut self, kind: EventKind, handler_id: HandlerId, options: ListenerOptions) -> bool {
        let listeners = self.root_handlers.entry(kind).or_default();
        if listeners.iter().any(|l| l.handler_id == handler_id) {
            return false;
        }
        listeners.push(EventListener { handler_id, options });
        true
    }

    /// Remove a delegated handler
    pub fn remove_listener(&mut self, kind: EventKind, handler_id: HandlerId) -> bool {
        let Some(listeners) = self.root_handlers.get_mut(&kind) else {
            return false;
        };
        let initial_len = listeners.len();
        listeners.retain(|l| l.handler_id != handler_id);
        listeners.len() < initial_len
    }

    /// Snapshot of the handlers for `kind`, in registration order
    pub fn listeners(&self, kind: EventKind) -> Vec<EventListener> {
        self.root_handlers.get(&kind).cloned().unwrap_or_default()
    }

    /// Drop `once` handlers that have just run
    pub fn cleanup_once_handlers(&mut self, kind: EventKind, dispatched: &[HandlerId]) {
        if let Some(listeners) = self.root_handlers.get_mut(&kind) {
            listeners.retain(|l| !l.options.once || !dispatched.contains(&l.handler_id));
        }
    }

    pub fn has_listener(&self, kind: EventKind, handler_id: HandlerId) -> bool {
        self.root_handlers
            .get(&kind)
            .is_some_and(|listeners| listeners.iter().any(|l| l.handler_id == handler_id))
    }

    /// Total handler count across kinds
    pub fn len(&self) -> usize {
        self.root_handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_listener_dedupes() {
        let mut table = EventTable::new();
        assert!(table.add_listener(EventKind::Click, HandlerId::Nav, ListenerOptions::default()));
        assert!(!table.add_listener(EventKind::Click, HandlerId::Nav, ListenerOptions::passive()));
        assert!(table.add_listener(EventKind::KeyDown, HandlerId::Nav, ListenerOptions::default()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_registration_order() {
        let mut table = EventTable::new();
        table.add_listener(EventKind::Click, HandlerId::Nav, ListenerOptions::default());
        table.add_listener(EventKind::Click, HandlerId::Theme, ListenerOptions::default());
        table.add_listener(EventKind::Click, HandlerId::Modal, ListenerOptions::default());

        let order: Vec<_> = table
            .listeners(EventKind::Click)
            .iter()
            .map(|l| l.handler_id)
            .collect();
        assert_eq!(order, vec![HandlerId::Nav, HandlerId::Theme, HandlerId::Modal]);
        assert!(table.listeners(EventKind::Scroll).is_empty());
    }

    #[test]
    fn test_remove_and_once_cleanup() {
        let mut table = EventTable::new();
        table.add_listener(EventKind::DomContentLoaded, HandlerId::Setup, ListenerOptions::once());
        table.add_listener(EventKind::Scroll, HandlerId::Scroll, ListenerOptions::passive());

        table.cleanup_once_handlers(EventKind::Scroll, &[HandlerId::Scroll]);
        assert!(table.has_listener(EventKind::Scroll, HandlerId::Scroll));

        table.cleanup_once_handlers(EventKind::DomContentLoaded, &[HandlerId::Setup]);
        assert!(!table.has_listener(EventKind::DomContentLoaded, HandlerId::Setup));

        assert!(table.remove_listener(EventKind::Scroll, HandlerId::Scroll));
        assert!(!table.remove_listener(EventKind::Scroll, HandlerId::Scroll));
        assert!(table.is_empty());
    }
}
