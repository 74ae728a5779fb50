//! Point, projection and circle-gate geometry
//!
//! At the extremes of the exponent range a point can land far outside the
//! f64 range of screen space. Each helper here reports whether its shape is
//! safe to draw; callers omit whatever fails instead of rendering garbage.

use glam::DVec2;
use serde::Serialize;

use super::view::View;
use crate::consts::CIRCLE_GATE_FACTOR;
use crate::polar_to_cartesian;

/// z = r·e^(iθ) as a world point (re, im)
#[inline]
pub fn compute_point(r: f64, theta: f64) -> DVec2 {
    polar_to_cartesian(r, theta)
}

/// Radius in pixels of the circle |z| = |r|
#[inline]
pub fn magnitude_circle_radius(r: f64, view: &View) -> f64 {
    view.zoom() * r.abs()
}

/// Whether the |z| = |r| circle is worth drawing
///
/// Drawn only while its pixel radius is finite and below
/// CIRCLE_GATE_FACTOR canvases; beyond that the visible part is a straight
/// line off-screen and some backends choke on the radius.
pub fn magnitude_circle_visible(r: f64, view: &View) -> bool {
    let radius = magnitude_circle_radius(r, view);
    radius.is_finite() && radius < CIRCLE_GATE_FACTOR * view.max_dimension()
}

/// Dashed guides from the point down to each axis, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projections {
    /// Screen position of z
    pub point: DVec2,
    /// Foot on the real axis (re, 0)
    pub real_foot: DVec2,
    /// Foot on the imaginary axis (0, im)
    pub imag_foot: DVec2,
}

/// Projection guides for a world point, or None when it is off the f64 map
pub fn projections(point: DVec2, view: &View) -> Option<Projections> {
    let screen = view.to_screen(point);
    if !View::is_drawable(screen) {
        return None;
    }
    let center = view.center();
    Some(Projections {
        point: screen,
        real_foot: DVec2::new(screen.x, center.y),
        imag_foot: DVec2::new(center.x, screen.y),
    })
}
