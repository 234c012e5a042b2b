//! Glaze DOM - in-memory view tree
//!
//! Arena-based element tree with the query and mutation surface the page
//! behaviours need: attributes, class lists, inline style, custom properties,
//! geometry, focus and window metrics.

mod attributes;
mod classlist;
mod document;
mod dom_events;
mod element;
mod geometry;
mod node;
mod style;
mod tree;
mod view;

pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use document::Document;
pub use dom_events::{EventKind, Key, Modifiers, UiEvent};
pub use element::{CompoundSelector, ElementQuery, SelectorList, SimpleSelector};
pub use geometry::DOMRect;
pub use node::{ElementData, Node, NodeData};
pub use style::InlineStyle;
pub use tree::DomTree;
pub use view::ViewTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,

    #[error("hierarchy request error: {0:?} cannot be inserted there")]
    HierarchyRequest(NodeId),

    #[error("node {0:?} is not a child of the given parent")]
    NotAChild(NodeId),
}

/// Selector parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character {found:?} at offset {offset} in {selector:?}")]
    Unexpected {
        selector: String,
        offset: usize,
        found: char,
    },

    #[error("combinators are not supported: {0:?}")]
    Combinator(String),

    #[error("unterminated attribute selector in {0:?}")]
    Unterminated(String),
}
