//! Element Query and Methods
//!
//! querySelector, getElementsByClassName, closest, matches.
//!
//! Supported grammar is a comma-separated list of compound selectors made
//! of an optional tag (or `*`) followed by any number of `#id`, `.class`,
//! `[attr]` and `[attr=value]` parts. Combinators are rejected.

use crate::{DomTree, ElementData, NodeId, SelectorError};

/// Element query trait
pub trait ElementQuery {
    /// Query first matching descendant of `root`
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId>;

    /// Query all matching descendants of `root` in document order
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Get elements by class name
    fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId>;

    /// Get elements by tag name
    fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId>;

    /// Find closest inclusive ancestor matching selector
    fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId>;

    /// Check if element matches selector
    fn matches(&self, element: NodeId, selector: &str) -> bool;
}

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Attribute { name: String, value: Option<String> },
    Universal,
}

impl SimpleSelector {
    /// Parse a single simple selector (`div`, `.btn`, `#id`, `*`, `[attr]`)
    pub fn parse(s: &str) -> Option<Self> {
        let compound = CompoundSelector::parse(s).ok()?;
        match compound.parts.as_slice() {
            [single] => Some(single.clone()),
            _ => None,
        }
    }

    /// Test one element
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag_name.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.has_class(class),
            Self::Attribute { name, value: None } => elem.has_attr(name),
            Self::Attribute {
                name,
                value: Some(expected),
            } => elem.get_attr(name) == Some(expected.as_str()),
        }
    }
}

/// Sequence of simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parts = Vec::new();
        let mut chars = s.char_indices().peekable();

        while let Some(&(offset, c)) = chars.peek() {
            match c {
                '*' => {
                    chars.next();
                    parts.push(SimpleSelector::Universal);
                }
                '#' | '.' => {
                    chars.next();
                    let ident = take_ident(&mut chars);
                    if ident.is_empty() {
                        return Err(unexpected(s, offset, c));
                    }
                    parts.push(if c == '#' {
                        SimpleSelector::Id(ident)
                    } else {
                        SimpleSelector::Class(ident)
                    });
                }
                '[' => {
                    chars.next();
                    parts.push(parse_attribute(s, &mut chars)?);
                }
                c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                    return Err(SelectorError::Combinator(s.to_string()));
                }
                c if is_ident_char(c) && parts.is_empty() => {
                    let tag = take_ident(&mut chars);
                    parts.push(SimpleSelector::Tag(tag.to_ascii_lowercase()));
                }
                _ => return Err(unexpected(s, offset, c)),
            }
        }

        Ok(Self { parts })
    }

    /// Test one element
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.parts.iter().all(|part| part.matches(elem))
    }
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<CompoundSelector>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let selectors = split_top_level(input)
            .into_iter()
            .map(CompoundSelector::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if selectors.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { selectors })
    }

    /// Test one element
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.selectors.iter().any(|sel| sel.matches(elem))
    }

    /// Test a node of `tree`; non-elements never match
    pub fn matches_node(&self, tree: &DomTree, id: NodeId) -> bool {
        tree.element(id).is_some_and(|elem| self.matches(elem))
    }
}

type CharStream<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut CharStream<'_>) -> String {
    let mut ident = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn unexpected(selector: &str, offset: usize, found: char) -> SelectorError {
    SelectorError::Unexpected {
        selector: selector.to_string(),
        offset,
        found,
    }
}

/// Parse the remainder of `[name]` / `[name=value]` after the `[`
fn parse_attribute(s: &str, chars: &mut CharStream<'_>) -> Result<SimpleSelector, SelectorError> {
    skip_spaces(chars);
    let name = take_ident(chars).to_ascii_lowercase();
    if name.is_empty() {
        return Err(SelectorError::Unterminated(s.to_string()));
    }
    skip_spaces(chars);

    let value = match chars.next() {
        Some((_, ']')) => return Ok(SimpleSelector::Attribute { name, value: None }),
        Some((_, '=')) => {
            skip_spaces(chars);
            match chars.peek() {
                Some(&(_, quote @ ('"' | '\''))) => {
                    chars.next();
                    let mut value = String::new();
                    loop {
                        match chars.next() {
                            Some((_, c)) if c == quote => break,
                            Some((_, c)) => value.push(c),
                            None => return Err(SelectorError::Unterminated(s.to_string())),
                        }
                    }
                    value
                }
                _ => take_ident(chars),
            }
        }
        Some((offset, c)) => return Err(unexpected(s, offset, c)),
        None => return Err(SelectorError::Unterminated(s.to_string())),
    };

    skip_spaces(chars);
    match chars.next() {
        Some((_, ']')) => Ok(SimpleSelector::Attribute {
            name,
            value: Some(value),
        }),
        Some((offset, c)) => Err(unexpected(s, offset, c)),
        None => Err(SelectorError::Unterminated(s.to_string())),
    }
}

fn skip_spaces(chars: &mut CharStream<'_>) {
    while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
}

/// Split on commas that are outside brackets and quotes
fn split_top_level(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => in_brackets = true,
            (None, ']') => in_brackets = false,
            (None, ',') if !in_brackets => {
                out.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&input[start..]);
    out
}

impl ElementQuery for DomTree {
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_logged(selector)?;
        self.descendants(root)
            .into_iter()
            .find(|&id| list.matches_node(self, id))
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(list) = parse_logged(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|&id| list.matches_node(self, id))
            .collect()
    }

    fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| {
                self.element(id)
                    .is_some_and(|e| tag == "*" || e.tag_name.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_logged(selector)?;
        std::iter::once(element)
            .chain(self.ancestors(element))
            .find(|&id| list.matches_node(self, id))
    }

    fn matches(&self, element: NodeId, selector: &str) -> bool {
        parse_logged(selector).is_some_and(|list| list.matches_node(self, element))
    }
}

fn parse_logged(selector: &str) -> Option<SelectorList> {
    SelectorList::parse(selector)
        .map_err(|err| tracing::debug!("ignoring selector: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
        let mut e = ElementData::new(tag);
        for (name, value) in attrs {
            e.set_attr(name, value);
        }
        e
    }

    #[test]
    fn test_simple_selector_parse() {
        assert!(matches!(SimpleSelector::parse("div"), Some(SimpleSelector::Tag(_))));
        assert!(matches!(SimpleSelector::parse(".class"), Some(SimpleSelector::Class(_))));
        assert!(matches!(SimpleSelector::parse("#id"), Some(SimpleSelector::Id(_))));
        assert!(matches!(SimpleSelector::parse("*"), Some(SimpleSelector::Universal)));
        assert!(matches!(
            SimpleSelector::parse("[data-modal]"),
            Some(SimpleSelector::Attribute { value: None, .. })
        ));
        assert_eq!(SimpleSelector::parse("a.b"), None);
    }

    #[test]
    fn test_compound_matches() {
        let button = elem("button", &[("class", "btn btn--ghost"), ("type", "button")]);

        let sel = CompoundSelector::parse("button.btn[type=\"button\"]").unwrap();
        assert!(sel.matches(&button));

        let sel = CompoundSelector::parse("button.btn[type=submit]").unwrap();
        assert!(!sel.matches(&button));
    }

    #[test]
    fn test_selector_list() {
        let link = elem("a", &[("href", "#")]);
        let list = SelectorList::parse("a, button").unwrap();
        assert!(list.matches(&link));

        let list = SelectorList::parse("[data-label='a,b'], span").unwrap();
        assert!(!list.matches(&link));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(SelectorList::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(
            SelectorList::parse(".nav .menu"),
            Err(SelectorError::Combinator(_))
        ));
        assert!(matches!(
            SelectorList::parse("[data-modal"),
            Err(SelectorError::Unterminated(_))
        ));
        assert!(matches!(
            SelectorList::parse("div!"),
            Err(SelectorError::Unexpected { found: '!', .. })
        ));
    }

    #[test]
    fn test_tree_queries() {
        let mut tree = DomTree::new();
        let nav = tree.create_element("nav");
        let menu = tree.create_element("ul");
        let link = tree.create_element("a");
        tree.append_child(tree.root(), nav).unwrap();
        tree.append_child(nav, menu).unwrap();
        tree.append_child(menu, link).unwrap();
        tree.element_mut(nav).unwrap().set_attr("class", "nav");
        tree.element_mut(menu).unwrap().set_attr("class", "menu");

        assert_eq!(tree.query_selector(tree.root(), ".menu"), Some(menu));
        assert_eq!(tree.query_selector(menu, ".menu"), None);
        assert_eq!(tree.closest(link, ".nav"), Some(nav));
        assert_eq!(tree.closest(nav, "nav"), Some(nav));
        assert_eq!(tree.get_elements_by_tag_name(tree.root(), "A"), vec![link]);
        assert_eq!(tree.get_elements_by_class_name(tree.root(), "nav"), vec![nav]);
        assert!(tree.query_selector_all(tree.root(), "[broken").is_empty());
    }
}
