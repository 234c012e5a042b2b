//! Site errors

use std::path::PathBuf;

/// Result type for site setup
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors raised while loading a page session
///
/// Event handling itself never fails; these cover configuration, markup and
/// scripted-session input.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid site configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid exit URL {url:?}: {source}")]
    ExitUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid origin {origin:?}: {source}")]
    Origin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid session script: {0}")]
    Script(#[source] serde_json::Error),

    #[error("script step {step}: no element matches {selector:?}")]
    ScriptTarget { step: usize, selector: String },

    #[error("failed to load markup: {0}")]
    Markup(#[from] glaze_html::HtmlError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
