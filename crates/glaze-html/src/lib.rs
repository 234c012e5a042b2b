//! Glaze HTML
//!
//! Loads page markup into a `glaze_dom::Document` using html5ever and
//! serializes documents back to HTML.

mod parser;
mod serializer;

pub use glaze_dom::Document;
pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, get_inner_html, get_outer_html};

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Markup loading errors
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("markup could not be attached to the document: {0}")]
    Tree(#[from] glaze_dom::DomError),
}
