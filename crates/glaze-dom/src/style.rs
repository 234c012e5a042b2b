//! Inline style and CSS custom properties
//!
//! `style="..."` declarations are kept in order. Custom properties (`--name`)
//! inherit down the tree; `var(--name, fallback)` references inside a value
//! are resolved against the same lookup.

/// Maximum depth of nested `var()` resolution
const MAX_VAR_DEPTH: usize = 16;

/// Parsed `style` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration block, skipping malformed entries
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for decl in css_text.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(name, value);
        }
        style
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property; an empty value removes it
    pub fn set(&mut self, property: &str, value: &str) {
        // Custom properties are case-sensitive, everything else is not.
        let property = if property.starts_with("--") {
            property.to_string()
        } else {
            property.to_ascii_lowercase()
        };

        if value.is_empty() {
            self.remove(&property);
            return;
        }

        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    /// Remove a property
    pub fn remove(&mut self, property: &str) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|(name, _)| name != property);
        self.declarations.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize back to a declaration block
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolve `var()` references in a value using `lookup` for custom properties
pub(crate) fn resolve_vars(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    resolve_vars_at(value, lookup, 0)
}

fn resolve_vars_at(value: &str, lookup: &dyn Fn(&str) -> Option<String>, depth: usize) -> String {
    if depth >= MAX_VAR_DEPTH {
        return String::new();
    }

    let mut result = value.to_string();
    while let Some(start) = result.find("var(") {
        let Some(end) = matching_paren(&result, start + 3) else {
            break; // Malformed var()
        };
        let inner = &result[start + 4..end];
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (inner.trim(), None),
        };

        let resolved = match lookup(name) {
            Some(found) => resolve_vars_at(&found, lookup, depth + 1),
            None => fallback
                .map(|f| resolve_vars_at(f, lookup, depth + 1))
                .unwrap_or_default(),
        };
        result = format!("{}{}{}", &result[..start], resolved, &result[end + 1..]);
    }

    result
}

/// Byte offset of the `)` matching the `(` at `open`
fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}
