//! Cloudveil - procedural cloud-curtain reveal animation
//!
//! Core modules:
//! - `rng`: Deterministic xorshift* PRNG (seed fully determines geometry)
//! - `cloud`: Seeded cloud-mass composition (plain-data primitives)
//! - `render`: Layered paint instructions for the two curtains
//! - `reveal`: Timed five-phase reveal state machine with tap-to-skip
//! - `config`: Data-driven timing/travel tuning

pub mod cloud;
pub mod config;
pub mod render;
pub mod reveal;
pub mod rng;

pub use cloud::{Anchor, CloudMass, Primitive, ShapeStyle};
pub use config::RevealConfig;
pub use render::{Curtain, CurtainLayer, CurtainPaint, CurtainRenderer};
pub use reveal::{CurtainOffsets, Phase, RevealMachine, RevealState};
pub use rng::SeededRng;

/// Reveal-timeline constants
pub mod consts {
    /// Delay before the progress animation starts (seconds)
    pub const COVER_DELAY: f64 = 0.25;
    /// Duration of the auto-progress animation (seconds)
    pub const PROGRESS_DURATION: f64 = 2.2;
    /// Grace period between progress completion and AwaitTap (seconds)
    pub const AWAIT_GRACE: f64 = 0.1;
    /// Duration of the curtain slide-away animation (seconds)
    pub const REVEAL_DURATION: f64 = 0.9;
    /// Curtain travel distance as a fraction of viewport height
    pub const TRAVEL_FACTOR: f32 = 0.7;

    /// Seed for the top curtain's cloud geometry
    pub const TOP_CURTAIN_SEED: i64 = 24680;
    /// Seed for the bottom curtain's cloud geometry
    pub const BOTTOM_CURTAIN_SEED: i64 = 13579;
    /// Seed offset for a curtain's background layer
    pub const BACKGROUND_SEED_OFFSET: i64 = 11;
    /// Seed offset for a curtain's foreground layer
    pub const FOREGROUND_SEED_OFFSET: i64 = 29;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cosine ease-in-out over `t` in [0, 1]; exact at both endpoints
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f64::consts::PI * t).cos()
}
