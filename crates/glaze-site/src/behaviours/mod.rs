//! Page Behaviours
//!
//! Each behaviour locates its markup once at setup and is inert (`None`)
//! when that markup is missing.

pub mod age_gate;
pub mod nav;
pub mod ripple;
pub mod scroll;
pub mod theme;
pub mod year;

pub use age_gate::AgeGate;
pub use nav::NavMenu;
pub use ripple::RippleEffect;
pub use scroll::ScrollPolish;
pub use theme::ThemeSwitcher;
pub use year::stamp_year;
