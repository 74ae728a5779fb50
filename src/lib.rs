//! Argand Plane - plot a single complex number z = r·e^(iθ)
//!
//! Core modules:
//! - `plane`: Pure geometry/view engine (magnitude, mapping, grid, arc)
//! - `format`: Compact numeric labels
//! - `scene`: Per-frame composition of drawable primitives
//! - `spin`: Explicit driver state for animating θ
//! - `settings`: Persisted control state
//! - `web`: wasm-bindgen surface for a browser UI (wasm32 only)

pub mod format;
pub mod plane;
pub mod scene;
pub mod settings;
pub mod spin;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use format::{format_complex, format_degrees, format_number};
pub use plane::{
    ArcDescriptor, GridTicks, ScreenArc, View, compute_arc, compute_point, magnitude_circle_visible,
    nice_step, resolve_magnitude, ticks,
};
pub use scene::{Controls, Scene, SceneCommand, Toggles, compose};
pub use settings::Settings;
pub use spin::{Spin, advance};

use glam::DVec2;

/// Engine configuration constants
pub mod consts {
    /// Smallest exponent accepted by the magnitude resolver
    pub const MIN_EXPONENT: i32 = -300;
    /// Largest exponent accepted by the magnitude resolver
    pub const MAX_EXPONENT: i32 = 300;

    /// Gridlines targeted across one half-span
    pub const DEFAULT_TARGET_LINES: f64 = 10.0;
    /// Floor for the raw step before taking log10
    pub const MIN_RAW_STEP: f64 = 1e-30;
    /// Tick values are rounded to this many decimal places
    pub const TICK_DECIMALS: i32 = 12;
    /// Upper bound on ticks generated on one side of zero
    pub const MAX_TICKS_PER_SIDE: f64 = 10_000.0;

    /// Magnitude circle is skipped once its radius exceeds this many canvases
    pub const CIRCLE_GATE_FACTOR: f64 = 3.0;
    /// The angle arc never leaves the unit circle
    pub const MAX_ARC_RADIUS: f64 = 1.0;

    /// Default canvas dimensions (pixels)
    pub const DEFAULT_CANVAS_WIDTH: u32 = 760;
    pub const DEFAULT_CANVAS_HEIGHT: u32 = 520;
    /// Default zoom (pixels per world unit)
    pub const DEFAULT_ZOOM: f64 = 100.0;

    /// Default spin rate (radians per second)
    pub const DEFAULT_SPIN_RATE: f64 = 0.8;
    /// Longest frame delta fed to the spin driver (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI + 0.5) - (-PI + 0.5)).abs() < 1e-9);
        assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(-5.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-12);
        assert_eq!(normalize_angle(f64::NAN), 0.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 3.0);
        assert!((p.length() - 2.0).abs() < 1e-12);
        assert!((p.y.atan2(p.x) - PI / 3.0).abs() < 1e-12);
        assert_eq!(polar_to_cartesian(0.0, 1.0), DVec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_normalize_angle_range(angle in -1e6..1e6f64) {
            let wrapped = normalize_angle(angle);
            prop_assert!(wrapped >= -PI);
            prop_assert!(wrapped < PI);
            // Same direction on the circle
            prop_assert!((wrapped.cos() - angle.cos()).abs() < 1e-6);
            prop_assert!((wrapped.sin() - angle.sin()).abs() < 1e-6);
        }
    }
}
