//! Curtain paint instructions
//!
//! Turns composed cloud masses into layered, backend-agnostic paint data:
//! fills, gradient directions, shadows and per-layer placement. No
//! randomness happens here - all stochastic decisions were made during
//! composition, and each (curtain, layer) mass is composed once and cached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cloud::{Anchor, CloudMass, ShapeStyle, compose};
use crate::consts::{
    BACKGROUND_SEED_OFFSET, BOTTOM_CURTAIN_SEED, FOREGROUND_SEED_OFFSET, TOP_CURTAIN_SEED,
};

/// RGBA color, straight alpha
pub type Color = [f32; 4];

/// Curtain container height as a fraction of viewport height
pub const CURTAIN_HEIGHT_FRACTION: f32 = 0.65;
/// Curtain container height cap (points)
pub const CURTAIN_MAX_HEIGHT: f32 = 520.0;

/// Background layer frame, relative to the curtain container
const BG_FRAME_SCALE: Vec2 = Vec2::new(1.10, 0.82);
/// Foreground layer frame, relative to the curtain container
const FG_FRAME_SCALE: Vec2 = Vec2::new(1.02, 0.78);
/// Background layer positional offset (fractions of width/height)
const BG_NUDGE: Vec2 = Vec2::new(-0.04, 0.08);
/// Foreground layer positional offset (fractions of width/height)
const FG_NUDGE: Vec2 = Vec2::new(0.02, 0.02);
/// Background layer fill opacity
const BG_OPACITY: f32 = 0.62;

/// Cool tint at the lower gradient stop
const COOL_TINT: [f32; 3] = [0.88, 0.93, 1.0];

/// Which curtain of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curtain {
    Top = 0,
    Bottom = 1,
}

impl Curtain {
    /// The composed mass hugs the edge this curtain retreats toward.
    fn anchor(self) -> Anchor {
        match self {
            Curtain::Top => Anchor::Bottom,
            Curtain::Bottom => Anchor::Top,
        }
    }

    /// Sign of the vertical layer nudge (top curtain nudges up).
    fn nudge_sign(self) -> f32 {
        match self {
            Curtain::Top => -1.0,
            Curtain::Bottom => 1.0,
        }
    }
}

/// The two composited layers of one curtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurtainLayer {
    Background = 0,
    Foreground = 1,
}

/// Two-stop linear gradient; points are in unit coordinates of the frame
/// being filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: [Color; 2],
}

/// Drop-shadow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub offset: Vec2,
}

/// Paint instructions for one cloud layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPaint {
    pub layer: CurtainLayer,
    /// Frame the mass was composed in (mass coordinates are frame-local)
    pub frame_size: Vec2,
    /// Frame offset from the curtain container center
    pub offset: Vec2,
    pub mass: CloudMass,
    pub fill: Gradient,
    pub opacity: f32,
    pub shadow: Shadow,
}

/// Soft backing behind the cloud layers, avoids hard container edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackingPaint {
    pub fill: Gradient,
    pub base_color: Color,
    pub shadow: Shadow,
}

/// Complete paint instructions for one curtain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurtainPaint {
    pub curtain: Curtain,
    pub backing: BackingPaint,
    /// Background first, foreground on top
    pub layers: [LayerPaint; 2],
}

/// Curtain container height for a given viewport height.
pub fn curtain_height(viewport_height: f32) -> f32 {
    (viewport_height * CURTAIN_HEIGHT_FRACTION).min(CURTAIN_MAX_HEIGHT)
}

fn white(alpha: f32) -> Color {
    [1.0, 1.0, 1.0, alpha]
}

fn black(alpha: f32) -> Color {
    [0.0, 0.0, 0.0, alpha]
}

fn tint(alpha: f32) -> Color {
    [COOL_TINT[0], COOL_TINT[1], COOL_TINT[2], alpha]
}

/// Renders the two curtains of one reveal sequence. Owns the per-layer
/// geometry cache; masses are composed on first use and reused every frame.
#[derive(Debug, Clone)]
pub struct CurtainRenderer {
    container: Vec2,
    style_top: ShapeStyle,
    style_bottom: ShapeStyle,
    masses: [[Option<CloudMass>; 2]; 2],
}

impl CurtainRenderer {
    /// Renderer for a curtain container of the given size, with the
    /// canonical curtain seeds.
    pub fn new(container: Vec2) -> Self {
        Self::with_styles(
            container,
            ShapeStyle::with_seed(TOP_CURTAIN_SEED),
            ShapeStyle::with_seed(BOTTOM_CURTAIN_SEED),
        )
    }

    pub fn with_styles(container: Vec2, top: ShapeStyle, bottom: ShapeStyle) -> Self {
        Self {
            container,
            style_top: top,
            style_bottom: bottom,
            masses: Default::default(),
        }
    }

    fn style(&self, curtain: Curtain) -> ShapeStyle {
        match curtain {
            Curtain::Top => self.style_top,
            Curtain::Bottom => self.style_bottom,
        }
    }

    /// Style and frame size for one layer. The background layer drops to
    /// 80% bubble density and runs off its own seed offset so the two
    /// layers are visually distinct but still read as one mass.
    fn layer_params(&self, curtain: Curtain, layer: CurtainLayer) -> (ShapeStyle, Vec2) {
        let base = self.style(curtain);
        match layer {
            CurtainLayer::Background => {
                let mut style = base.background_layer();
                style.seed = base.seed.wrapping_add(BACKGROUND_SEED_OFFSET);
                (style, self.container * BG_FRAME_SCALE)
            }
            CurtainLayer::Foreground => {
                let mut style = base;
                style.seed = base.seed.wrapping_add(FOREGROUND_SEED_OFFSET);
                (style, self.container * FG_FRAME_SCALE)
            }
        }
    }

    /// Composed geometry for one layer, computed once and cached.
    pub fn cloud_mass(&mut self, curtain: Curtain, layer: CurtainLayer) -> &CloudMass {
        let (style, frame) = self.layer_params(curtain, layer);
        let anchor = curtain.anchor();
        self.masses[curtain as usize][layer as usize].get_or_insert_with(|| {
            log::debug!("composing {curtain:?}/{layer:?} mass (seed {})", style.seed);
            compose(&style, frame, anchor)
        })
    }

    /// Paint instructions for one curtain. Dark theme deepens shadows and
    /// leaves geometry untouched.
    pub fn render(&mut self, curtain: Curtain, is_dark: bool) -> CurtainPaint {
        let (w, h) = (self.container.x, self.container.y);
        let sign = curtain.nudge_sign();
        let opacity = self.style(curtain).opacity;

        let (shadow_alpha, shadow_radius, shadow_y) = if is_dark {
            (0.28, 26.0, 12.0)
        } else {
            (0.12, 22.0, 10.0)
        };
        // Shadows fall toward the opening, opposite the retreat direction
        let mass_shadow = Shadow {
            color: black(shadow_alpha),
            radius: shadow_radius,
            offset: Vec2::new(0.0, -sign * shadow_y),
        };

        let background = LayerPaint {
            layer: CurtainLayer::Background,
            frame_size: self.container * BG_FRAME_SCALE,
            offset: Vec2::new(BG_NUDGE.x * w, sign * BG_NUDGE.y * h),
            mass: self.cloud_mass(curtain, CurtainLayer::Background).clone(),
            fill: mass_gradient(curtain, BG_OPACITY),
            opacity: BG_OPACITY,
            shadow: mass_shadow,
        };

        let foreground = LayerPaint {
            layer: CurtainLayer::Foreground,
            frame_size: self.container * FG_FRAME_SCALE,
            offset: Vec2::new(FG_NUDGE.x * w, sign * FG_NUDGE.y * h),
            mass: self.cloud_mass(curtain, CurtainLayer::Foreground).clone(),
            fill: mass_gradient(curtain, opacity),
            opacity,
            shadow: Shadow {
                color: black(shadow_alpha * 0.9),
                radius: shadow_radius * 0.8,
                offset: mass_shadow.offset * 0.8,
            },
        };

        CurtainPaint {
            curtain,
            backing: backing_paint(curtain),
            layers: [background, foreground],
        }
    }
}

/// Cloud fill: white on the screen-top side shading into the cool tint on
/// the screen-bottom side, parameterized from each curtain's own edge.
fn mass_gradient(curtain: Curtain, opacity: f32) -> Gradient {
    match curtain {
        Curtain::Top => Gradient {
            start: Vec2::new(0.5, 0.0),
            end: Vec2::new(0.5, 1.0),
            stops: [white(opacity), tint(opacity)],
        },
        Curtain::Bottom => Gradient {
            start: Vec2::new(0.5, 1.0),
            end: Vec2::new(0.5, 0.0),
            stops: [tint(opacity), white(opacity)],
        },
    }
}

fn backing_paint(curtain: Curtain) -> BackingPaint {
    let (start, end) = match curtain {
        Curtain::Top => (Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)),
        Curtain::Bottom => (Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.0)),
    };
    BackingPaint {
        fill: Gradient {
            start,
            end,
            stops: [white(0.95), white(0.75)],
        },
        base_color: white(0.88),
        shadow: Shadow {
            color: black(0.12),
            radius: 12.0,
            offset: Vec2::new(0.0, -curtain.nudge_sign() * 6.0),
        },
    }
}
