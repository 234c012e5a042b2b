//! Site Configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SiteError, SiteResult};

/// Flavour themes the switcher knows how to clear
pub const DEFAULT_THEMES: [&str; 5] = ["lemon", "strawberry", "blueberry", "grape", "blackcurrant"];

/// Page controller options
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset (px) past which the nav is marked scrolled
    pub scroll_threshold: f64,

    /// Viewport width (px) above which a collapsed nav is reset
    pub nav_breakpoint: f64,

    /// Local storage key holding the age confirmation
    pub age_gate_key: String,

    /// Where the age gate's exit control navigates
    pub exit_url: String,

    /// Flavour names; each maps to a `theme--<name>` class
    pub themes: Vec<String>,

    /// Custom property the ripple tint is taken from
    pub accent_property: String,

    /// Origin local storage is scoped to
    pub origin: String,

    /// Initial `prefers-reduced-motion` state
    pub reduce_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 24.0,
            nav_breakpoint: 720.0,
            age_gate_key: "eciggy-age-verified".to_string(),
            exit_url: "https://www.google.com".to_string(),
            themes: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            accent_property: "--color-accent".to_string(),
            origin: "https://eciggy.uk".to_string(),
            reduce_motion: false,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(SiteError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the URLs are absolute
    pub fn validate(&self) -> SiteResult<()> {
        Url::parse(&self.exit_url).map_err(|source| SiteError::ExitUrl {
            url: self.exit_url.clone(),
            source,
        })?;
        Url::parse(&self.origin).map_err(|source| SiteError::Origin {
            origin: self.origin.clone(),
            source,
        })?;
        Ok(())
    }

    /// `theme--<name>` classes for every configured flavour
    pub fn theme_classes(&self) -> Vec<String> {
        self.themes.iter().map(|t| theme_class(t)).collect()
    }

    /// Serialized origin (`scheme://host[:port]`)
    pub fn origin_key(&self) -> String {
        Url::parse(&self.origin)
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|_| self.origin.clone())
    }
}

/// Class name for a flavour
pub fn theme_class(flavour: &str) -> String {
    format!("theme--{flavour}")
}
