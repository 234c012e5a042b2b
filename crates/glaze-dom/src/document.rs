//! Document - High-level document API
//!
//! Owns the tree plus the per-page state a host browser would keep next to
//! it: the focused element, the scroll offset, the viewport width and the
//! current location.

use crate::{DomTree, ElementQuery, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding keyboard focus
    focused: Option<NodeId>,
    /// window.scrollY
    scroll_y: f64,
    /// window.innerWidth
    inner_width: f64,
}

/// Viewport width used until the host reports one
const DEFAULT_INNER_WIDTH: f64 = 1280.0;

impl Document {
    /// Create a new document with html/head/body
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let root = doc.tree.root();

        let html = doc.tree.create_element("html");
        let head = doc.tree.create_element("head");
        let body = doc.tree.create_element("body");

        // Freshly created nodes under the document cannot violate hierarchy.
        let _ = doc.tree.append_child(root, html);
        let _ = doc.tree.append_child(html, head);
        let _ = doc.tree.append_child(html, body);

        doc.html_element = html;
        doc.head_element = head;
        doc.body_element = body;
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
            scroll_y: 0.0,
            inner_width: DEFAULT_INNER_WIDTH,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self.tree.query_selector(root, "html").unwrap_or(NodeId::NONE);
        self.head_element = self.tree.query_selector(root, "head").unwrap_or(NodeId::NONE);
        self.body_element = self.tree.query_selector(root, "body").unwrap_or(NodeId::NONE);
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the location (window.location.href = ...)
    pub fn navigate(&mut self, url: &str) {
        tracing::info!("navigating to {}", url);
        self.url = url.to_string();
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        self.tree
            .query_selector(self.head_element, "title")
            .map(|title| self.tree.text_content(title).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| self.tree.element(node).and_then(|e| e.id()) == Some(id))
    }

    /// Move focus to a connected element; returns false otherwise
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.tree.element(id).is_none() || !self.tree.is_connected(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Focused element, falling back to <body>
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
            .filter(|&id| self.tree.is_connected(id))
            .or_else(|| self.body_element.is_valid().then_some(self.body_element))
    }

    /// Vertical scroll offset
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Viewport width
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    pub fn set_inner_width(&mut self, width: f64) {
        self.inner_width = width;
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_structure() {
        let doc = Document::new("https://eciggy.uk/");
        assert!(doc.document_element().is_valid());
        assert_eq!(doc.tree.parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.active_element(), Some(doc.body()));
    }

    #[test]
    fn test_focus_requires_connection() {
        let mut doc = Document::default();
        let detached = doc.tree.create_element("button");
        assert!(!doc.focus(detached));

        let body = doc.body();
        doc.tree.append_child(body, detached).unwrap();
        assert!(doc.focus(detached));
        assert_eq!(doc.active_element(), Some(detached));

        doc.tree.detach(detached);
        assert_eq!(doc.active_element(), Some(body));
    }

    #[test]
    fn test_get_element_by_id_and_title() {
        let mut doc = Document::default();
        let head = doc.head();
        let title = doc.tree.create_element("title");
        doc.tree.append_child(head, title).unwrap();
        doc.tree.set_text_content(title, " Eciggy UK ").unwrap();

        let body = doc.body();
        let year = doc.tree.create_element("span");
        doc.tree.element_mut(year).unwrap().set_attr("id", "year");
        doc.tree.append_child(body, year).unwrap();

        assert_eq!(doc.get_element_by_id("year"), Some(year));
        assert_eq!(doc.get_element_by_id("nope"), None);
        assert_eq!(doc.title(), "Eciggy UK");
    }
}
