//! Glaze Site
//!
//! Client-side interactivity for the Eciggy UK marketing pages.
//!
//! Features:
//! - Collapsible navigation and scroll-aware header
//! - Flavour theme switcher
//! - Button ripples that respect reduced motion
//! - Modal dialogs with focus trapping
//! - Age verification gate backed by local storage
//! - Scripted session replay

pub mod behaviours;
pub mod config;
pub mod dispatch;
mod error;
pub mod script;
pub mod site;
pub mod storage;

pub use config::SiteConfig;
pub use dispatch::{EventTable, HandlerId, ListenerOptions};
pub use error::{SiteError, SiteResult};
pub use script::{Script, ScriptStep, StepOutcome};
pub use site::Site;
pub use storage::{LocalStorage, Storage, StorageManager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a page file into a document located at `url`
pub fn load_page(path: &std::path::Path, url: &str) -> SiteResult<glaze_dom::Document> {
    let markup = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(glaze_html::HtmlParser::new().parse_with_url(&markup, url)?)
}
