//! Cloud mass composition
//!
//! Builds the irregular blob for one curtain layer: a pill-shaped body
//! rectangle, two rows of randomly placed bubbles, and a fixed ear circle
//! near each side edge so the silhouette never reads as flat.
//!
//! Draw order is part of the contract. Every random draw consumes the PRNG
//! stream in the order written here; reordering draws changes the geometry
//! for a given seed even though no individual draw changed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::style::{ShapeStyle, Span};
use crate::rng::SeededRng;

/// Horizontal body inset (fraction of container width)
const BODY_INSET_FRACTION: f32 = 0.06;
/// Body corner radius (fraction of body height, pill-like)
const BODY_CORNER_FRACTION: f32 = 0.72;
/// Span of bubble anchor positions across the width
const BUBBLE_SPREAD: Span = Span::new(0.08, 0.92);
/// Ear circle distance from the side edges (fraction of width)
const EAR_INSET_FRACTION: f32 = 0.06;
/// Ear circle radius span (fraction of container height)
const EAR_RADIUS: Span = Span::new(0.16, 0.28);
/// Radius scaling for trailing-edge bubbles
const TRAILING_RADIUS_LO: f32 = 0.85;
const TRAILING_RADIUS_HI: f32 = 0.90;

/// Which container edge the solid body sits flush against. The body hugs
/// the edge the curtain is pushed away from, so the fluffy silhouette faces
/// the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Top,
    Bottom,
}

/// One drawable geometric unit. All primitives of a mass are filled with
/// the same paint, so order never affects appearance, but it is preserved
/// for deterministic output comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    RoundedRect {
        origin: Vec2,
        size: Vec2,
        corner_radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
    },
}

/// Ordered primitive list for one composed cloud mass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CloudMass {
    pub primitives: Vec<Primitive>,
}

impl CloudMass {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Compose a cloud mass for the given style, container size and anchor.
///
/// Pure and deterministic: two calls with identical arguments return
/// bit-identical primitive lists. Output order is
/// `[body, leading bubbles.., trailing bubbles.., left ear, right ear]`.
pub fn compose(style: &ShapeStyle, container: Vec2, anchor: Anchor) -> CloudMass {
    let mut rng = SeededRng::new(style.seed);
    let (w, h) = (container.x, container.y);

    let mut primitives = Vec::with_capacity(style.bubble_count_top + style.bubble_count_bottom + 3);

    // Solid body, flush against the anchored edge
    let inset_x = w * BODY_INSET_FRACTION;
    let body_h = h * style.base_body_height;
    let body_y = match anchor {
        Anchor::Top => 0.0,
        Anchor::Bottom => h - body_h,
    };
    primitives.push(Primitive::RoundedRect {
        origin: Vec2::new(inset_x, body_y),
        size: Vec2::new(w - 2.0 * inset_x, body_h),
        corner_radius: body_h * BODY_CORNER_FRACTION,
    });

    // Leading-edge bubbles
    for _ in 0..style.bubble_count_top {
        primitives.push(bubble(
            &mut rng,
            w,
            h,
            style,
            style.vertical_jitter_top,
            style.bubble_radius,
        ));
    }

    // Trailing-edge bubbles, slightly smaller
    let trailing_radius = style
        .bubble_radius
        .scaled(TRAILING_RADIUS_LO, TRAILING_RADIUS_HI);
    for _ in 0..style.bubble_count_bottom {
        primitives.push(bubble(
            &mut rng,
            w,
            h,
            style,
            style.vertical_jitter_bottom,
            trailing_radius,
        ));
    }

    // Side ears: left radius is drawn before the right one
    let left_r = h * EAR_RADIUS.sample(&mut rng);
    let right_r = h * EAR_RADIUS.sample(&mut rng);
    primitives.push(Primitive::Circle {
        center: Vec2::new(w * EAR_INSET_FRACTION, h * 0.5),
        radius: left_r,
    });
    primitives.push(Primitive::Circle {
        center: Vec2::new(w * (1.0 - EAR_INSET_FRACTION), h * 0.5),
        radius: right_r,
    });

    CloudMass { primitives }
}

/// One bubble circle; consumes four PRNG draws in fixed order:
/// anchor x, horizontal jitter, vertical jitter, radius.
fn bubble(
    rng: &mut SeededRng,
    w: f32,
    h: f32,
    style: &ShapeStyle,
    vertical_jitter: Span,
    radius: Span,
) -> Primitive {
    let rx = BUBBLE_SPREAD.sample(rng);
    let jx = style.horizontal_jitter.sample(rng);
    let jy = vertical_jitter.sample(rng);
    let r = radius.sample(rng);
    Primitive::Circle {
        center: Vec2::new(w * rx + w * jx, h * 0.5 + h * jy),
        radius: h * r,
    }
}
