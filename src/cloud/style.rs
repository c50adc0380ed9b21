//! Cloud style configuration
//!
//! Immutable tuning for one composed mass. Styles are passed by value and
//! never mutated after creation; the background layer is a derived copy.

use serde::{Deserialize, Serialize};

use crate::rng::SeededRng;

/// Inclusive-low, exclusive-high sampling span for one random draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub lo: f32,
    pub hi: f32,
}

impl Span {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Draw one value from the span, consuming exactly one PRNG float.
    pub fn sample(&self, rng: &mut SeededRng) -> f32 {
        rng.range_f32(self.lo, self.hi)
    }

    /// Derived span with both ends scaled (trailing-edge bubbles use a
    /// slightly tighter radius span than the leading edge).
    pub fn scaled(&self, lo_factor: f32, hi_factor: f32) -> Self {
        Self::new(self.lo * lo_factor, self.hi * hi_factor)
    }
}

/// Tuning for one cloud mass. All fractional values are relative to the
/// container (widths to container width, heights/radii to container height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Bubbles along the leading edge
    pub bubble_count_top: usize,
    /// Bubbles along the trailing edge
    pub bubble_count_bottom: usize,
    /// Bubble radius span (fraction of container height)
    pub bubble_radius: Span,
    /// Horizontal bubble jitter (fraction of container width)
    pub horizontal_jitter: Span,
    /// Vertical jitter for leading-edge bubbles (fraction of height)
    pub vertical_jitter_top: Span,
    /// Vertical jitter for trailing-edge bubbles (fraction of height)
    pub vertical_jitter_bottom: Span,
    /// Height of the solid body rectangle (fraction of height)
    pub base_body_height: f32,
    /// Fill opacity of the foreground layer
    pub opacity: f32,
    /// Geometry seed (0 is remapped to 1 by the PRNG)
    pub seed: i64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            bubble_count_top: 14,
            bubble_count_bottom: 10,
            bubble_radius: Span::new(0.20, 0.50),
            horizontal_jitter: Span::new(-0.10, 0.10),
            vertical_jitter_top: Span::new(-0.28, 0.04),
            vertical_jitter_bottom: Span::new(-0.04, 0.28),
            base_body_height: 0.40,
            opacity: 0.98,
            seed: 0,
        }
    }
}

impl ShapeStyle {
    /// Default style with a specific seed.
    pub fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Derived style for the lower-density background layer: 80% of the
    /// bubble counts (truncated) and 95% of the body height.
    pub fn background_layer(&self) -> Self {
        Self {
            bubble_count_top: (self.bubble_count_top as f32 * 0.8) as usize,
            bubble_count_bottom: (self.bubble_count_bottom as f32 * 0.8) as usize,
            base_body_height: self.base_body_height * 0.95,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_layer_derivation() {
        let base = ShapeStyle::with_seed(24680);
        let bg = base.background_layer();

        // Counts truncate: 14 * 0.8 = 11.2 -> 11, 10 * 0.8 = 8
        assert_eq!(bg.bubble_count_top, 11);
        assert_eq!(bg.bubble_count_bottom, 8);
        assert!((bg.base_body_height - 0.38).abs() < 1e-6);

        // Everything else is inherited, base is untouched
        assert_eq!(bg.seed, base.seed);
        assert_eq!(bg.bubble_radius, base.bubble_radius);
        assert_eq!(base.bubble_count_top, 14);
    }

    #[test]
    fn test_span_sample_in_bounds() {
        let span = Span::new(0.08, 0.92);
        let mut rng = SeededRng::new(1);
        for _ in 0..200 {
            let v = span.sample(&mut rng);
            assert!((span.lo..span.hi).contains(&v));
        }
    }

    #[test]
    fn test_span_scaled() {
        let span = Span::new(0.20, 0.50);
        let trailing = span.scaled(0.85, 0.90);
        assert!((trailing.lo - 0.17).abs() < 1e-6);
        assert!((trailing.hi - 0.45).abs() < 1e-6);
    }
}
