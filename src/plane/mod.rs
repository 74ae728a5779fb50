//! Geometry/view engine
//!
//! Everything here is a pure function of its inputs:
//! - No persistent state beyond the caller's parameters
//! - No I/O, no locking, no allocation beyond tick vectors
//! - Non-finite inputs degrade to defined values instead of failing

pub mod arc;
pub mod geometry;
pub mod grid;
pub mod magnitude;
pub mod view;

pub use arc::{ArcDescriptor, ScreenArc, compute_arc};
pub use geometry::{
    Projections, compute_point, magnitude_circle_radius, magnitude_circle_visible, projections,
};
pub use grid::{GridTicks, nice_step, ticks};
pub use magnitude::{clamp_exponent, resolve_magnitude};
pub use view::{View, to_screen};
