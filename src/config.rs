//! Reveal timing configuration
//!
//! Data-driven tuning for the timeline. Defaults carry the canonical
//! values; embedders can ship an overridden JSON blob instead of
//! recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Timing and travel tuning for one reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay before auto-progress starts (seconds)
    pub cover_delay: f64,
    /// Auto-progress duration (seconds)
    pub progress_duration: f64,
    /// Grace between progress completion and AwaitTap (seconds)
    pub await_grace: f64,
    /// Curtain slide duration (seconds)
    pub reveal_duration: f64,
    /// Travel distance as a fraction of viewport height
    pub travel_factor: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            cover_delay: COVER_DELAY,
            progress_duration: PROGRESS_DURATION,
            await_grace: AWAIT_GRACE,
            reveal_duration: REVEAL_DURATION,
            travel_factor: TRAVEL_FACTOR,
        }
    }
}

impl RevealConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
