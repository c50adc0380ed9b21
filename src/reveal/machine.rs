//! The reveal state machine
//!
//! Owns the five-phase timeline. Time never comes from a wall clock here:
//! callers feed a monotonic `now` (seconds) into [`RevealMachine::advance`]
//! and [`RevealMachine::on_tap`], which makes every scenario reproducible
//! in tests without a UI harness.

use glam::Vec2;

use super::state::{CurtainOffsets, Phase, RevealState};
use crate::config::RevealConfig;
use crate::ease_in_out;

/// Drives one reveal sequence per app launch.
///
/// All mutation happens through `advance` and `on_tap` on a single control
/// thread; renderers read snapshots via the accessors. A tap commits any
/// due transitions first, so it always observes the freshest phase.
#[derive(Debug, Clone)]
pub struct RevealMachine {
    config: RevealConfig,
    state: RevealState,
    viewport: Vec2,
    /// Pixel distance each curtain slides, fixed at Revealing entry
    travel: f32,
    started_at: Option<f64>,
    /// Progress phase entry time
    progress_at: f64,
    /// Revealing phase entry time
    reveal_at: f64,
}

impl RevealMachine {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::default(),
            viewport: Vec2::ZERO,
            travel: 0.0,
            started_at: None,
            progress_at: 0.0,
            reveal_at: 0.0,
        }
    }

    /// Viewport used to compute travel when Revealing begins. May be
    /// updated any time before the tap; a zero-height viewport yields zero
    /// travel and the timeline still completes.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Begin the timeline. Called once per session; repeated calls are
    /// ignored so the running timeline cannot be restarted.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_some() {
            log::warn!("reveal timeline already started, ignoring start()");
            return;
        }
        self.started_at = Some(now);
        self.state = RevealState::default();
        log::debug!("reveal timeline started at t={now:.3}");
    }

    /// Commit every transition due at `now` and refresh the interpolated
    /// progress/offset values. Phases only move forward; a tap that already
    /// moved the machine into Revealing leaves no pending AwaitTap
    /// transition to fire.
    pub fn advance(&mut self, now: f64) {
        let Some(start) = self.started_at else {
            return;
        };

        if self.state.phase == Phase::Covering && now >= start + self.config.cover_delay {
            self.enter_progress(start + self.config.cover_delay);
        }

        if self.state.phase == Phase::Progress {
            let t = (now - self.progress_at) / self.config.progress_duration;
            self.state.progress = ease_in_out(t) as f32;
            let await_at =
                self.progress_at + self.config.progress_duration + self.config.await_grace;
            if now >= await_at {
                self.enter_await_tap();
            }
        }

        if self.state.phase == Phase::Revealing {
            let t = (now - self.reveal_at) / self.config.reveal_duration;
            let f = ease_in_out(t) as f32;
            self.state.offsets = CurtainOffsets {
                top: -self.travel * f,
                bottom: self.travel * f,
            };
            if now >= self.reveal_at + self.config.reveal_duration {
                self.enter_revealed();
            }
        }
    }

    /// Handle a tap gesture. Accepted during Progress (discarding the
    /// in-flight progress) and AwaitTap; a silent no-op everywhere else.
    pub fn on_tap(&mut self, now: f64) {
        self.advance(now);
        if !self.state.tap_enabled {
            log::debug!("tap ignored during {:?}", self.state.phase);
            return;
        }
        self.enter_revealing(now);
    }

    fn enter_progress(&mut self, at: f64) {
        self.state.phase = Phase::Progress;
        self.state.progress = 0.0;
        self.state.tap_enabled = true;
        self.progress_at = at;
        log::debug!("phase -> Progress at t={at:.3}");
    }

    fn enter_await_tap(&mut self) {
        self.state.phase = Phase::AwaitTap;
        self.state.progress = 1.0;
        self.state.tap_enabled = true;
        log::debug!("phase -> AwaitTap");
    }

    fn enter_revealing(&mut self, now: f64) {
        self.state.phase = Phase::Revealing;
        self.state.tap_enabled = false;
        self.travel = self.viewport.y * self.config.travel_factor;
        self.reveal_at = now;
        log::debug!(
            "phase -> Revealing at t={now:.3}, travel {:.1}",
            self.travel
        );
    }

    fn enter_revealed(&mut self) {
        self.state.phase = Phase::Revealed;
        self.state.tap_enabled = false;
        self.state.offsets = CurtainOffsets {
            top: -self.travel,
            bottom: self.travel,
        };
        log::debug!("phase -> Revealed");
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    pub fn offsets(&self) -> CurtainOffsets {
        self.state.offsets
    }

    pub fn tap_enabled(&self) -> bool {
        self.state.tap_enabled
    }

    /// Copy of the full state for the rendering layer.
    pub fn state(&self) -> RevealState {
        self.state
    }
}

impl Default for RevealMachine {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_machine(viewport_height: f32) -> RevealMachine {
        let mut machine = RevealMachine::default();
        machine.set_viewport(Vec2::new(390.0, viewport_height));
        machine.start(0.0);
        machine
    }

    #[test]
    fn test_scenario_no_tap() {
        let mut machine = started_machine(1000.0);

        machine.advance(0.1);
        assert_eq!(machine.phase(), Phase::Covering);
        assert!(!machine.tap_enabled());

        machine.advance(0.25);
        assert_eq!(machine.phase(), Phase::Progress);
        assert_eq!(machine.progress(), 0.0);
        assert!(machine.tap_enabled());

        machine.advance(1.0);
        assert_eq!(machine.phase(), Phase::Progress);
        assert!(machine.progress() > 0.0 && machine.progress() < 1.0);

        machine.advance(2.45);
        assert_eq!(machine.phase(), Phase::Progress);
        assert!((machine.progress() - 1.0).abs() < 1e-6);

        // Grace period keeps Progress until 2.55
        machine.advance(2.54);
        assert_eq!(machine.phase(), Phase::Progress);

        machine.advance(0.25 + 2.2 + 0.1);
        assert_eq!(machine.phase(), Phase::AwaitTap);
        assert!(machine.tap_enabled());

        // Stays there forever without a tap
        machine.advance(60.0);
        assert_eq!(machine.phase(), Phase::AwaitTap);
        assert_eq!(machine.offsets(), CurtainOffsets::default());
    }

    #[test]
    fn test_scenario_tap_in_await_tap() {
        let mut machine = started_machine(1000.0);
        machine.advance(3.0);
        assert_eq!(machine.phase(), Phase::AwaitTap);

        machine.on_tap(5.0);
        assert_eq!(machine.phase(), Phase::Revealing);
        assert_eq!(machine.offsets(), CurtainOffsets::default());
        assert!(!machine.tap_enabled());

        machine.advance(5.45);
        let mid = machine.offsets();
        assert!(mid.top < 0.0 && mid.top > -700.0);
        assert!(mid.bottom > 0.0 && mid.bottom < 700.0);

        machine.advance(5.9);
        assert_eq!(machine.phase(), Phase::Revealed);
        assert!((machine.offsets().top - -700.0).abs() < 1e-3);
        assert!((machine.offsets().bottom - 700.0).abs() < 1e-3);

        // Terminal: offsets stay parked
        machine.advance(10.0);
        assert_eq!(machine.phase(), Phase::Revealed);
        assert!((machine.offsets().top - -700.0).abs() < 1e-3);
    }

    #[test]
    fn test_scenario_tap_during_progress() {
        let mut machine = started_machine(1000.0);
        machine.advance(1.0);
        assert_eq!(machine.phase(), Phase::Progress);

        // Early tap skips AwaitTap entirely
        machine.on_tap(1.0);
        assert_eq!(machine.phase(), Phase::Revealing);

        machine.advance(1.9);
        assert_eq!(machine.phase(), Phase::Revealed);
        assert!((machine.offsets().top - -700.0).abs() < 1e-3);
        assert!((machine.offsets().bottom - 700.0).abs() < 1e-3);
    }

    #[test]
    fn test_tap_cancels_pending_await_tap() {
        // Long reveal so t=2.55 lands inside Revealing
        let config = RevealConfig {
            reveal_duration: 5.0,
            ..RevealConfig::default()
        };
        let mut machine = RevealMachine::new(config);
        machine.set_viewport(Vec2::new(390.0, 1000.0));
        machine.start(0.0);

        machine.on_tap(1.0);
        assert_eq!(machine.phase(), Phase::Revealing);

        // The progress-completed deadline must not drag us back to AwaitTap
        machine.advance(2.55);
        assert_eq!(machine.phase(), Phase::Revealing);
    }

    #[test]
    fn test_scenario_tap_while_covering() {
        let mut machine = started_machine(1000.0);

        machine.on_tap(0.1);
        assert_eq!(machine.phase(), Phase::Covering);
        assert_eq!(machine.offsets(), CurtainOffsets::default());

        // Timeline proceeds untouched
        machine.advance(0.25);
        assert_eq!(machine.phase(), Phase::Progress);
    }

    #[test]
    fn test_scenario_tap_while_revealed() {
        let mut machine = started_machine(1000.0);
        machine.advance(3.0);
        machine.on_tap(5.0);
        machine.advance(5.9);
        assert_eq!(machine.phase(), Phase::Revealed);
        let parked = machine.offsets();

        machine.on_tap(6.0);
        assert_eq!(machine.phase(), Phase::Revealed);
        assert_eq!(machine.offsets(), parked);
    }

    #[test]
    fn test_tap_while_revealing_is_noop() {
        let mut machine = started_machine(1000.0);
        machine.advance(3.0);
        machine.on_tap(5.0);
        machine.advance(5.45);
        let mid = machine.offsets();

        // A second tap must not restart the slide
        machine.on_tap(5.45);
        assert_eq!(machine.phase(), Phase::Revealing);
        assert_eq!(machine.offsets(), mid);

        machine.advance(5.9);
        assert_eq!(machine.phase(), Phase::Revealed);
    }

    #[test]
    fn test_zero_viewport_still_completes() {
        let mut machine = started_machine(0.0);
        machine.advance(3.0);
        machine.on_tap(3.0);
        assert_eq!(machine.phase(), Phase::Revealing);

        machine.advance(3.9);
        assert_eq!(machine.phase(), Phase::Revealed);
        assert_eq!(machine.offsets(), CurtainOffsets::default());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut machine = started_machine(1000.0);
        machine.advance(1.0);
        machine.start(1.0);
        // Second start is ignored: still mid-Progress on the original clock
        assert_eq!(machine.phase(), Phase::Progress);
        machine.advance(0.25 + 2.2 + 0.1);
        assert_eq!(machine.phase(), Phase::AwaitTap);
    }

    #[test]
    fn test_advance_before_start_is_noop() {
        let mut machine = RevealMachine::default();
        machine.advance(10.0);
        machine.on_tap(10.0);
        assert_eq!(machine.phase(), Phase::Covering);
    }

    #[test]
    fn test_phase_sequence_strictly_increasing() {
        let mut machine = started_machine(1000.0);
        let mut visited = vec![machine.phase()];

        let mut record = |machine: &RevealMachine, visited: &mut Vec<Phase>| {
            if *visited.last().unwrap() != machine.phase() {
                visited.push(machine.phase());
            }
        };

        for i in 0..=300 {
            let t = i as f64 * 0.01;
            machine.advance(t);
            record(&machine, &mut visited);
        }
        machine.on_tap(3.0);
        record(&machine, &mut visited);
        for i in 301..=400 {
            let t = i as f64 * 0.01;
            machine.advance(t);
            record(&machine, &mut visited);
        }

        assert_eq!(
            visited,
            vec![
                Phase::Covering,
                Phase::Progress,
                Phase::AwaitTap,
                Phase::Revealing,
                Phase::Revealed,
            ]
        );
        // Strictly increasing in the Phase order, no revisits
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_large_time_jump_from_covering() {
        let mut machine = started_machine(1000.0);
        // One late poll commits both due transitions
        machine.advance(10.0);
        assert_eq!(machine.phase(), Phase::AwaitTap);
        assert_eq!(machine.progress(), 1.0);
    }
}
