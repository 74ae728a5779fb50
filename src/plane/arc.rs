//! Angle arc geometry
//!
//! The arc sweeps from angle 0 to θ around the origin. Its radius is
//! min(1, |r|) in world units, so it always traces on or inside the unit
//! circle no matter how large the magnitude is.
//!
//! Flags follow the SVG elliptical-arc convention:
//! - large_arc: the arc spans more than half a turn (|θ| > π)
//! - sweep: set for negative θ, because screen Y points down and a
//!   counter-clockwise world arc is a negative-angle screen arc

use glam::DVec2;
use serde::Serialize;

use super::view::View;
use crate::consts::MAX_ARC_RADIUS;
use crate::polar_to_cartesian;

/// Arc from angle 0 to θ in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcDescriptor {
    /// Radius in world units (≤ MAX_ARC_RADIUS)
    pub radius: f64,
    /// End angle (radians); the start angle is always 0
    pub theta: f64,
    /// Arc covers more than π radians
    pub large_arc: bool,
    /// SVG sweep flag (negative-angle direction on screen)
    pub sweep: bool,
}

impl ArcDescriptor {
    pub fn new(theta: f64, r: f64) -> Self {
        Self {
            radius: r.abs().min(MAX_ARC_RADIUS),
            theta,
            large_arc: theta.abs() > std::f64::consts::PI,
            sweep: theta < 0.0,
        }
    }

    /// Start point (angle 0)
    #[inline]
    pub fn start(&self) -> DVec2 {
        DVec2::new(self.radius, 0.0)
    }

    /// End point (angle θ)
    #[inline]
    pub fn end(&self) -> DVec2 {
        polar_to_cartesian(self.radius, self.theta)
    }

    /// Zero-length arc (θ = 0 or r = 0)
    pub fn is_degenerate(&self) -> bool {
        self.theta == 0.0 || self.radius == 0.0
    }

    /// Map into screen space
    pub fn to_screen(&self, view: &View) -> ScreenArc {
        ScreenArc {
            center: view.center(),
            radius: self.radius * view.zoom(),
            start: view.to_screen(self.start()),
            end: view.to_screen(self.end()),
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }
}

/// Arc in pixel coordinates, ready for any path/arc primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenArc {
    /// Canvas center (world origin)
    pub center: DVec2,
    /// Radius in pixels
    pub radius: f64,
    /// Start point in pixels
    pub start: DVec2,
    /// End point in pixels
    pub end: DVec2,
    pub large_arc: bool,
    pub sweep: bool,
}

impl ScreenArc {
    /// Every coordinate is finite
    pub fn is_drawable(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.start.is_finite()
            && self.end.is_finite()
    }

    /// SVG path data: move to the start point, then one elliptical arc
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y
        )
    }
}

/// Arc from 0 to θ for magnitude r, mapped through `view`
pub fn compute_arc(theta: f64, r: f64, view: &View) -> ScreenArc {
    ArcDescriptor::new(theta, r).to_screen(view)
}
