//! HTML Serialization (innerHTML/outerHTML)
//!
//! Writes a subtree back out as markup. Used to dump a page after a session
//! so the attribute and class changes the behaviours made can be inspected.

use glaze_dom::{DomTree, ElementData, NodeData, NodeId};

/// Elements without an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// Elements whose text is written unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer {
    /// Put each element on its own line, indented two spaces per level
    pub pretty: bool,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Children of `node_id` only
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut out = Emitter::new(tree, self.pretty);
        out.children(node_id, 0);
        out.finish()
    }

    /// `node_id` and its subtree
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut out = Emitter::new(tree, self.pretty);
        out.node(node_id, 0);
        out.finish()
    }
}

/// Output buffer for one serialization pass
struct Emitter<'a> {
    tree: &'a DomTree,
    pretty: bool,
    buf: String,
}

impl<'a> Emitter<'a> {
    fn new(tree: &'a DomTree, pretty: bool) -> Self {
        Self {
            tree,
            pretty,
            buf: String::new(),
        }
    }

    fn finish(self) -> String {
        self.buf
    }

    fn line_break(&mut self, depth: usize) {
        if self.pretty && !self.buf.is_empty() {
            self.buf.push('\n');
            self.buf.push_str(&"  ".repeat(depth));
        }
    }

    fn node(&mut self, id: NodeId, depth: usize) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Document => self.children(id, depth),
            NodeData::Doctype { name } => {
                self.buf.push_str("<!DOCTYPE ");
                self.buf.push_str(name);
                self.buf.push('>');
            }
            NodeData::Comment(text) => {
                self.line_break(depth);
                self.buf.push_str(&format!("<!--{text}-->"));
            }
            NodeData::Text(text) => escape_into(&mut self.buf, text, false),
            NodeData::Element(elem) => self.element(id, elem, depth),
        }
    }

    fn element(&mut self, id: NodeId, elem: &ElementData, depth: usize) {
        let tag = elem.tag_name.as_str();

        self.line_break(depth);
        self.buf.push('<');
        self.buf.push_str(tag);
        for attr in elem.attrs().iter() {
            self.buf.push(' ');
            self.buf.push_str(&attr.name);
            // Boolean attributes (`hidden`, `data-modal`) are written bare
            if !attr.value.is_empty() {
                self.buf.push_str("=\"");
                escape_into(&mut self.buf, &attr.value, true);
                self.buf.push('"');
            }
        }
        self.buf.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        if RAW_TEXT_ELEMENTS.contains(&tag) {
            let tree = self.tree;
            for (_, child) in tree.children(id) {
                if let Some(text) = child.as_text() {
                    self.buf.push_str(text);
                }
            }
        } else {
            self.children(id, depth + 1);
        }

        if self.tree.children(id).any(|(_, child)| child.is_element()) {
            self.line_break(depth);
        }
        self.buf.push_str(&format!("</{tag}>"));
    }

    fn children(&mut self, parent: NodeId, depth: usize) {
        let tree = self.tree;
        for (child, _) in tree.children(parent) {
            self.node(child, depth);
        }
    }
}

/// Escape `&`, `<`, `>` and, inside attribute values, `"`
fn escape_into(buf: &mut String, text: &str, in_attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' if in_attribute => buf.push_str("&quot;"),
            _ => buf.push(c),
        }
    }
}

/// `element.innerHTML`
pub fn get_inner_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(tree, node_id)
}

/// `element.outerHTML`
pub fn get_outer_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(tree, node_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let mut text = String::new();
        escape_into(&mut text, "Lemon <zest> & \"fizz\"", false);
        assert_eq!(text, "Lemon &lt;zest&gt; &amp; \"fizz\"");

        let mut attr = String::new();
        escape_into(&mut attr, "Lemon <zest> & \"fizz\"", true);
        assert_eq!(attr, "Lemon &lt;zest&gt; &amp; &quot;fizz&quot;");
    }

    #[test]
    fn test_outer_html() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        let input = tree.create_element("input");
        tree.append_child(tree.root(), button).unwrap();
        tree.append_child(tree.root(), input).unwrap();
        tree.element_mut(button).unwrap().set_attr("data-modal-close", "");
        tree.element_mut(input).unwrap().set_attr("type", "hidden");
        tree.set_text_content(button, "Close").unwrap();

        assert_eq!(get_outer_html(&tree, button), "<button data-modal-close>Close</button>");
        assert_eq!(get_outer_html(&tree, input), "<input type=\"hidden\">");
        assert_eq!(get_inner_html(&tree, button), "Close");
    }

    #[test]
    fn test_pretty_print_indents_elements() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let li = tree.create_element("li");
        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, li).unwrap();

        let html = HtmlSerializer::pretty().serialize_outer(&tree, ul);
        assert_eq!(html, "<ul>\n  <li></li>\n</ul>");
    }
}
