//! ARIA Support
//!
//! The ARIA states page behaviours write, and typed reads of boolean states.

use glaze_dom::{NodeId, ViewTree};

use crate::A11yError;

/// ARIA state/property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Expanded(bool),
    Hidden(bool),
    Pressed(bool),
    Controls(String),
    Label(String),
}

impl AriaState {
    /// Attribute name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expanded(_) => "aria-expanded",
            Self::Hidden(_) => "aria-hidden",
            Self::Pressed(_) => "aria-pressed",
            Self::Controls(_) => "aria-controls",
            Self::Label(_) => "aria-label",
        }
    }

    /// Attribute value
    pub fn value(&self) -> String {
        match self {
            Self::Expanded(b) | Self::Hidden(b) | Self::Pressed(b) => b.to_string(),
            Self::Controls(s) | Self::Label(s) => s.clone(),
        }
    }

    /// Write the attribute onto `node`
    pub fn apply<V: ViewTree + ?Sized>(&self, view: &mut V, node: NodeId) {
        view.set_attribute(node, self.name(), &self.value());
    }

    /// Parse an ARIA boolean (`"true"` / `"false"`)
    pub fn parse_bool(name: &str, value: &str) -> Result<bool, A11yError> {
        match value {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(A11yError::InvalidBoolean {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Read a boolean state; absent or malformed reads as `None`
    pub fn read_bool<V: ViewTree + ?Sized>(view: &V, node: NodeId, name: &str) -> Option<bool> {
        let value = view.attribute(node, name)?;
        Self::parse_bool(name, value)
            .map_err(|err| tracing::debug!("{err}"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_dom::Document;

    #[test]
    fn test_names_and_values() {
        assert_eq!(AriaState::Expanded(true).name(), "aria-expanded");
        assert_eq!(AriaState::Hidden(false).value(), "false");
        assert_eq!(AriaState::Controls("nav-menu".into()).value(), "nav-menu");
    }

    #[test]
    fn test_apply_and_read() {
        let mut doc = Document::default();
        let body = doc.body();

        AriaState::Pressed(true).apply(&mut doc, body);
        assert_eq!(AriaState::read_bool(&doc, body, "aria-pressed"), Some(true));
        assert_eq!(AriaState::read_bool(&doc, body, "aria-expanded"), None);

        doc.set_attribute(body, "aria-hidden", "yes");
        assert_eq!(AriaState::read_bool(&doc, body, "aria-hidden"), None);
    }

    #[test]
    fn test_parse_bool_error() {
        assert!(AriaState::parse_bool("aria-hidden", "true").unwrap());
        assert_eq!(
            AriaState::parse_bool("aria-hidden", "1"),
            Err(A11yError::InvalidBoolean {
                name: "aria-hidden".into(),
                value: "1".into()
            })
        );
    }
}
