//! Glaze Accessibility
//!
//! Focus handling for page overlays.
//!
//! Features:
//! - ARIA state attributes
//! - Focusable-descendant rules and tab index parsing
//! - Modal focus trap with stacked overlays

pub mod aria;
pub mod focus;
pub mod modal;

pub use aria::AriaState;
pub use focus::{FocusTrap, TabIndex, focusable_descendants, is_focusable};
pub use modal::{ModalManager, ModalMarkup, OpenModal};

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("invalid ARIA boolean {value:?} for {name}")]
    InvalidBoolean { name: String, value: String },
}
