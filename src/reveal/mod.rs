//! Reveal timeline state machine
//!
//! Single-threaded and poll-driven: the machine stores deadlines against a
//! caller-supplied monotonic clock and commits due transitions in
//! `advance`. No operation here can fail - out-of-phase taps and degenerate
//! viewports are silent non-errors.

pub mod machine;
pub mod state;

pub use machine::RevealMachine;
pub use state::{CurtainOffsets, Phase, RevealState};
