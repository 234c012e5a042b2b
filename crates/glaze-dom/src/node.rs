//! DOM Node - arena entry
//!
//! Links are `NodeId`s into the owning tree rather than pointers, so a node
//! that has been detached keeps its identity and can be re-attached.

use crate::{DOMRect, DOMTokenList, InlineStyle, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag_name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Create a doctype node
    pub fn doctype(name: impl Into<String>) -> Self {
        Self::with_data(NodeData::Doctype { name: name.into() })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
///
/// `class` and `style` live in `attrs` like any other attribute; `class_list`
/// and `style` are parsed views that are kept in sync on every write.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag_name: String,
    attrs: NamedNodeMap,
    class_list: DOMTokenList,
    style: InlineStyle,
    /// Layout box reported by the host
    pub rect: DOMRect,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            class_list: DOMTokenList::new(),
            style: InlineStyle::new(),
            rect: DOMRect::default(),
        }
    }

    /// All attributes
    pub fn attrs(&self) -> &NamedNodeMap {
        &self.attrs
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Check attribute presence
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains(name)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name.to_ascii_lowercase().as_str() {
            "class" => self.class_list.set_value(value),
            "style" => self.style = InlineStyle::parse(value),
            _ => {}
        }
        self.attrs.set(name, value);
    }

    /// Remove an attribute
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => self.class_list = DOMTokenList::new(),
            "style" => self.style = InlineStyle::new(),
            _ => {}
        }
        self.attrs.remove(&name).is_some()
    }

    /// Parsed class list
    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    /// Check for a class
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.contains(class)
    }

    /// Add or remove a class, keeping the `class` attribute in sync
    pub fn toggle_class(&mut self, class: &str, force: Option<bool>) -> bool {
        let on = self.class_list.toggle(class, force);
        let value = self.class_list.value();
        if !value.is_empty() || self.attrs.contains("class") {
            self.attrs.set("class", &value);
        }
        on
    }

    /// Parsed inline style
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Set an inline style property, keeping the `style` attribute in sync
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        self.style.set(property, value);
        let css_text = self.style.css_text();
        self.attrs.set("style", &css_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attribute_sync() {
        let mut elem = ElementData::new("DIV");
        assert_eq!(elem.tag_name, "div");

        elem.set_attr("class", "modal is-active");
        assert!(elem.has_class("is-active"));

        elem.toggle_class("is-active", Some(false));
        assert_eq!(elem.get_attr("class"), Some("modal"));

        let mut bare = ElementData::new("body");
        bare.toggle_class("no-scroll", Some(false));
        assert!(!bare.has_attr("class"));
    }

    #[test]
    fn test_style_attribute_sync() {
        let mut elem = ElementData::new("span");
        elem.set_style_property("width", "12px");
        elem.set_style_property("height", "12px");
        assert_eq!(elem.get_attr("style"), Some("width: 12px; height: 12px;"));

        elem.set_attr("style", "left: 1px");
        assert_eq!(elem.style().get("width"), None);
        assert_eq!(elem.style().get("left"), Some("1px"));
    }

    #[test]
    fn test_node_kinds() {
        assert!(Node::element("a").is_element());
        assert_eq!(Node::text("hi").as_text(), Some("hi"));
        assert!(Node::document().as_element().is_none());
    }
}
