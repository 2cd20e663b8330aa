//! Gate configuration
//!
//! Which activity states remove the encoder pull-ups.  Defaults come from
//! the `auto-off-idle` / `auto-off-sleep` cargo features; the same options
//! can be overridden at run time (e.g. from a JSON board file).

use serde::{Deserialize, Serialize};

use crate::activity::ActivityState;

/// Power-gating policy for the encoder inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Treat Idle like Asleep and remove the pull-ups.
    pub idle_triggers_gate: bool,
    /// Remove the pull-ups when the device goes to sleep.
    pub sleep_triggers_gate: bool,
}

impl GateConfig {
    /// Build-time policy selected by cargo features.
    pub const fn from_features() -> Self {
        Self {
            idle_triggers_gate: cfg!(feature = "auto-off-idle"),
            sleep_triggers_gate: cfg!(feature = "auto-off-sleep"),
        }
    }

    /// Neither option enabled: the gate never subscribes to anything.
    pub const fn is_inert(&self) -> bool {
        !self.idle_triggers_gate && !self.sleep_triggers_gate
    }

    /// Whether `state` takes the pull-ups away.
    pub const fn disables_on(&self, state: ActivityState) -> bool {
        match state {
            ActivityState::Active => false,
            ActivityState::Idle => self.idle_triggers_gate,
            // Either option compiles the sleep branch in.
            ActivityState::Asleep => !self.is_inert(),
        }
    }

    /// Parse a JSON document.  Missing fields keep their feature defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::from_features()
    }
}
