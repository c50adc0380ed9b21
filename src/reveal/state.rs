//! Reveal state types

use serde::{Deserialize, Serialize};

/// Current phase of the reveal timeline.
///
/// Totally ordered; the machine only ever moves forward, so the sequence of
/// visited phases is a strictly increasing subsequence of this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Curtains closed, initial delay running
    Covering,
    /// Auto-progress animating 0 to 1
    Progress,
    /// Progress done, waiting for a tap
    AwaitTap,
    /// Curtains sliding away
    Revealing,
    /// Terminal: content visible, curtains parked
    Revealed,
}

/// Curtain offsets from the closed position (0 = closed; the top curtain
/// travels negative, the bottom positive).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurtainOffsets {
    pub top: f32,
    pub bottom: f32,
}

/// Snapshot of the reveal timeline. Owned and mutated exclusively by
/// [`RevealMachine`]; consumers read copies.
///
/// [`RevealMachine`]: super::RevealMachine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    pub phase: Phase,
    /// Progress fraction in [0, 1]; meaningful only during `Progress`
    pub progress: f32,
    pub offsets: CurtainOffsets,
    /// Whether a tap would currently trigger the reveal
    pub tap_enabled: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            phase: Phase::Covering,
            progress: 0.0,
            offsets: CurtainOffsets::default(),
            tap_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RevealState::default();
        assert_eq!(state.phase, Phase::Covering);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.offsets, CurtainOffsets::default());
        assert!(!state.tap_enabled);
    }

    #[test]
    fn test_phase_total_order() {
        assert!(Phase::Covering < Phase::Progress);
        assert!(Phase::Progress < Phase::AwaitTap);
        assert!(Phase::AwaitTap < Phase::Revealing);
        assert!(Phase::Revealing < Phase::Revealed);
    }
}
