//! Seeded cloud-mass composition
//!
//! Geometry here is plain data: an ordered list of primitives that a
//! backend can fill however it likes. Composition is pure and deterministic
//! for a fixed style, container size and anchor - no randomness survives
//! past this module.

pub mod compose;
pub mod style;

pub use compose::{Anchor, CloudMass, Primitive, compose};
pub use style::{ShapeStyle, Span};
