//! Scripted sessions
//!
//! A JSON list of UI steps replayed against a mounted page, so a session can
//! be reproduced from the command line:
//!
//! ```json
//! [
//!   { "type": "click", "selector": "#ageGateConfirm" },
//!   { "type": "scroll", "y": 120 },
//!   { "type": "key", "key": "Tab", "shift": true }
//! ]
//! ```

use glaze_dom::{Document, Key, Modifiers, NodeId, UiEvent, ViewTree};
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::site::Site;
use crate::storage::Storage;

/// One host-side action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click the first element matching `selector`
    Click { selector: String },
    /// Key press delivered to the focused element
    Key {
        key: String,
        #[serde(default)]
        shift: bool,
    },
    /// Pointer-down at client coordinates on the first match
    PointerDown {
        selector: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Move focus without an event
    Focus { selector: String },
    /// Scroll the window to `y`
    Scroll { y: f64 },
    /// Resize the viewport to `width`
    Resize { width: f64 },
    /// Finish the animation on the first match
    AnimationEnd { selector: String },
    /// Flip `prefers-reduced-motion`
    ReduceMotion { reduce: bool },
}

/// What one replayed step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub handled: bool,
    pub default_prevented: bool,
}

/// Ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn from_json(json: &str) -> SiteResult<Self> {
        serde_json::from_str(json).map_err(SiteError::Script)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Replay every step in order
    ///
    /// Stops at the first step whose selector matches nothing.
    pub fn run<S: Storage>(&self, site: &mut Site<Document, S>) -> SiteResult<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(self.steps.len());
        for (step, action) in self.steps.iter().enumerate() {
            let outcome = run_step(site, step, action)?;
            tracing::debug!(step, handled = outcome.handled, "script step");
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}

fn resolve<S: Storage>(site: &Site<Document, S>, step: usize, selector: &str) -> SiteResult<NodeId> {
    site.view().query(selector).ok_or_else(|| SiteError::ScriptTarget {
        step,
        selector: selector.to_string(),
    })
}

fn run_step<S: Storage>(site: &mut Site<Document, S>, step: usize, action: &ScriptStep) -> SiteResult<StepOutcome> {
    let mut event = match action {
        ScriptStep::Click { selector } => UiEvent::click(resolve(site, step, selector)?),
        ScriptStep::Key { key, shift } => {
            let modifiers = if *shift { Modifiers::shift() } else { Modifiers::default() };
            let focused = ViewTree::active_element(site.view());
            UiEvent::key_down(focused, Key::parse(key), modifiers)
        }
        ScriptStep::PointerDown { selector, x, y } => {
            UiEvent::pointer_down(resolve(site, step, selector)?, *x, *y)
        }
        ScriptStep::Focus { selector } => {
            let target = resolve(site, step, selector)?;
            let focused = site.view_mut().focus(target);
            return Ok(StepOutcome {
                step,
                handled: focused,
                default_prevented: false,
            });
        }
        ScriptStep::Scroll { y } => {
            site.view_mut().set_scroll_y(*y);
            UiEvent::scroll()
        }
        ScriptStep::Resize { width } => {
            site.view_mut().set_inner_width(*width);
            UiEvent::resize()
        }
        ScriptStep::AnimationEnd { selector } => UiEvent::animation_end(resolve(site, step, selector)?),
        ScriptStep::ReduceMotion { reduce } => UiEvent::motion_preference(*reduce),
    };

    let handled = site.dispatch(&mut event);
    Ok(StepOutcome {
        step,
        handled,
        default_prevented: event.is_default_prevented(),
    })
}
