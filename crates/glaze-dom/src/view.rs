//! View tree interface
//!
//! The query/mutate surface page behaviours are written against. `Document`
//! implements it in memory; a browser binding would implement it over the
//! real DOM. Every operation tolerates unknown or non-element ids by doing
//! nothing (or answering `None`/`false`).

use crate::style::resolve_vars;
use crate::{DOMRect, Document, DomResult, ElementQuery, NodeId};

pub trait ViewTree {
    /// `<html>`
    fn document_element(&self) -> Option<NodeId>;

    /// `<body>`
    fn body(&self) -> Option<NodeId>;

    /// First match in the whole document
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// All matches in the whole document, in document order
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    /// First match beneath `scope`
    fn query_within(&self, scope: NodeId, selector: &str) -> Option<NodeId>;

    /// All matches beneath `scope`, in document order
    fn query_all_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Nearest inclusive ancestor matching `selector`
    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    fn matches(&self, node: NodeId, selector: &str) -> bool;

    /// Inclusive containment
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    fn is_connected(&self, node: NodeId) -> bool;

    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.toggle_class(node, class, true);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.toggle_class(node, class, false);
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, on: bool);

    /// Replace children with text
    fn set_text(&mut self, node: NodeId, text: &str);

    fn focus(&mut self, node: NodeId);

    fn active_element(&self) -> Option<NodeId>;

    fn scroll_y(&self) -> f64;

    fn inner_width(&self) -> f64;

    fn navigate(&mut self, url: &str);

    fn bounding_rect(&self, node: NodeId) -> DOMRect;

    /// Computed value of a custom property (`--name`), inherited from ancestors
    fn custom_property(&self, node: NodeId, name: &str) -> Option<String>;

    fn create_element(&mut self, tag_name: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId>;

    /// Detach from parent
    fn remove(&mut self, node: NodeId);

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
}

impl ViewTree for Document {
    fn document_element(&self) -> Option<NodeId> {
        let html = Document::document_element(self);
        html.is_valid().then_some(html)
    }

    fn body(&self) -> Option<NodeId> {
        let body = Document::body(self);
        body.is_valid().then_some(body)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(self.tree.root(), selector)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(self.tree.root(), selector)
    }

    fn query_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(scope, selector)
    }

    fn query_all_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(scope, selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        self.tree.closest(node, selector)
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        self.tree.matches(node, selector)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree.is_connected(node)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree.element(node).map(|e| e.tag_name.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.element(node)?.get_attr(name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.set_attr(name, value);
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.remove_attr(name);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.has_class(class))
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.toggle_class(class, Some(on));
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Err(err) = self.tree.set_text_content(node, text) {
            tracing::debug!("set_text on {:?}: {}", node, err);
        }
    }

    fn focus(&mut self, node: NodeId) {
        if !Document::focus(self, node) {
            tracing::debug!("cannot focus {:?}", node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        Document::active_element(self)
    }

    fn scroll_y(&self) -> f64 {
        Document::scroll_y(self)
    }

    fn inner_width(&self) -> f64 {
        Document::inner_width(self)
    }

    fn navigate(&mut self, url: &str) {
        Document::navigate(self, url);
    }

    fn bounding_rect(&self, node: NodeId) -> DOMRect {
        self.tree.element(node).map(|e| e.rect).unwrap_or_default()
    }

    fn custom_property(&self, node: NodeId, name: &str) -> Option<String> {
        let raw = inherited_property(self, node, name)?;
        let resolved = resolve_vars(&raw, &|var: &str| inherited_property(self, node, var));
        Some(resolved.trim().to_string())
    }

    fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.tree.create_element(tag_name)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    fn remove(&mut self, node: NodeId) {
        self.tree.detach(node);
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.set_style_property(property, value);
        }
    }
}

/// Raw declared value of `name` on `node` or its nearest declaring ancestor
fn inherited_property(doc: &Document, node: NodeId, name: &str) -> Option<String> {
    std::iter::once(node)
        .chain(doc.tree.ancestors(node))
        .filter_map(|id| doc.tree.element(id))
        .find_map(|elem| elem.style().get(name).map(str::to_string))
}
