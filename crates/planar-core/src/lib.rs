//! **planar-core**: 2D geometry primitives and numeric helpers.
//!
//! This crate provides the foundational types used across the *planar*
//! crates: grid and continuous points, rectangles, circles and segments,
//! distance and intersection predicates, slice vectors, easing curves and
//! tweens, a frame clock, colour conversions and a 2D camera.

pub mod camera;
pub mod clock;
pub mod color;
pub mod distance;
pub mod easing;
pub mod geom;
pub mod intersection;
pub mod number;
pub mod seq;
pub mod vector;

pub use camera::Camera2;
pub use clock::{FrameClock, FrameTick};
pub use easing::{Easing, Tween, TweenConfig};
pub use geom::{Circle, Located, Point, Point2, Rect, Segment};
pub use vector::VectorError;
