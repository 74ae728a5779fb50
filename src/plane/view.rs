//! Coordinate mapping between world units and canvas pixels
//!
//! World Y grows upward, screen Y grows downward, so the vertical axis is
//! flipped around the canvas center.

use glam::DVec2;
use serde::Serialize;

/// A zoomed view onto a fixed-size canvas
///
/// Only built through [`View::new`], so zoom is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct View {
    /// Pixels per world unit (always > 0 and finite)
    zoom: f64,
    /// Canvas width in pixels
    width: u32,
    /// Canvas height in pixels
    height: u32,
}

impl View {
    /// Create a view, rejecting degenerate zoom or an empty canvas
    pub fn new(zoom: f64, width: u32, height: u32) -> Option<Self> {
        if !zoom.is_finite() || zoom <= 0.0 || width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            zoom,
            width,
            height,
        })
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas center in pixels (world origin lands here)
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Larger of the two canvas dimensions
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        f64::from(self.width.max(self.height))
    }

    /// Visible world units from the origin to the left/right edge
    pub fn half_span_x(&self) -> f64 {
        self.center().x / self.zoom
    }

    /// Visible world units from the origin to the top/bottom edge
    pub fn half_span_y(&self) -> f64 {
        self.center().y / self.zoom
    }

    /// Map a world point into screen space
    ///
    /// Total, but the result is non-finite when the input is non-finite or
    /// the product overflows. Check with [`View::is_drawable`] before use.
    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        let center = self.center();
        DVec2::new(center.x + world.x * self.zoom, center.y - world.y * self.zoom)
    }

    /// Map a screen point back into world space
    pub fn to_world(&self, screen: DVec2) -> DVec2 {
        let center = self.center();
        DVec2::new(
            (screen.x - center.x) / self.zoom,
            (center.y - screen.y) / self.zoom,
        )
    }

    /// Both screen coordinates are finite
    #[inline]
    pub fn is_drawable(screen: DVec2) -> bool {
        screen.is_finite()
    }
}

/// Free-function form of [`View::to_screen`]
#[inline]
pub fn to_screen(x: f64, y: f64, view: &View) -> DVec2 {
    view.to_screen(DVec2::new(x, y))
}
