//! Scale-adaptive grid ticks
//!
//! Steps are always 1, 2 or 5 × 10^k, chosen so roughly a fixed number of
//! gridlines stay visible whatever the zoom. Ticks are laid out
//! symmetrically about the origin so both axes always carry a zero line.

use serde::Serialize;

use super::view::View;
use crate::consts::{DEFAULT_TARGET_LINES, MAX_TICKS_PER_SIDE, MIN_RAW_STEP, TICK_DECIMALS};

/// Pick a "nice" tick spacing for a span of world units
///
/// `target_lines` falls back to [`DEFAULT_TARGET_LINES`] when it is not a
/// positive finite number.
pub fn nice_step(span: f64, target_lines: f64) -> f64 {
    let target = if target_lines.is_finite() && target_lines > 0.0 {
        target_lines
    } else {
        DEFAULT_TARGET_LINES
    };

    let raw = span / target;
    // Floor before log10 so zero/negative spans stay finite
    let pow10 = 10_f64.powf(raw.max(MIN_RAW_STEP).log10().floor());
    let norm = raw / pow10;

    let multiplier = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    multiplier * pow10
}

/// Enumerate tick positions covering [-half, half] in `step` increments
///
/// The sequence runs from `-ceil(half/step)·step` to `+ceil(half/step)·step`
/// inclusive, so it always contains 0 and both extremes reach the edge of
/// the visible span. A step that is not positive and finite, a non-finite
/// half-span, or a runaway tick count yields just the origin.
pub fn ticks(step: f64, half: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !half.is_finite() {
        return vec![0.0];
    }

    let per_side = (half.abs() / step).ceil();
    if per_side > MAX_TICKS_PER_SIDE {
        log::warn!(
            "Tick step {} too fine for half-span {} ({} per side), skipping grid",
            step,
            half,
            per_side
        );
        return vec![0.0];
    }

    let start = -per_side * step;
    let end = per_side * step;
    let tolerance = step * 1e-9;

    let count = 2 * per_side as usize + 1;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let value = start + i as f64 * step;
        if value > end + tolerance {
            break;
        }
        out.push(round_tick(value, step));
    }
    out
}

/// Round to TICK_DECIMALS places to strip accumulated float noise
///
/// Left alone when the step itself is below that resolution (rounding would
/// collapse distinct ticks) or when scaling would lose the value.
fn round_tick(value: f64, step: f64) -> f64 {
    let factor = 10_f64.powi(TICK_DECIMALS);
    if step * factor < 100.0 {
        return value;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Tick positions for both axes of a view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridTicks {
    /// Spacing along the real (horizontal) axis
    pub step_x: f64,
    /// Vertical gridline positions (world x)
    pub xs: Vec<f64>,
    /// Spacing along the imaginary (vertical) axis
    pub step_y: f64,
    /// Horizontal gridline positions (world y)
    pub ys: Vec<f64>,
}

impl GridTicks {
    /// Ticks for a view using the default target line count
    pub fn for_view(view: &View) -> Self {
        Self::for_view_with_target(view, DEFAULT_TARGET_LINES)
    }

    /// Ticks for a view, each axis stepped from its own half-span
    pub fn for_view_with_target(view: &View, target_lines: f64) -> Self {
        let half_x = view.half_span_x();
        let half_y = view.half_span_y();
        let step_x = nice_step(half_x, target_lines);
        let step_y = nice_step(half_y, target_lines);
        Self {
            step_x,
            xs: ticks(step_x, half_x),
            step_y,
            ys: ticks(step_y, half_y),
        }
    }
}
