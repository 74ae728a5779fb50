//! Magnitude resolution from mantissa × 10^exponent
//!
//! The exponent control spans hundreds of decades, so r is never stored:
//! it is rebuilt from the two control values whenever either changes.

use crate::consts::{MAX_EXPONENT, MIN_EXPONENT};

/// Truncate and clamp an exponent into [MIN_EXPONENT, MAX_EXPONENT]
///
/// Non-finite exponents resolve to 0.
pub fn clamp_exponent(exponent: f64) -> i32 {
    if !exponent.is_finite() {
        return 0;
    }
    // Clamp in f64 first so the cast can't saturate on huge inputs
    exponent
        .trunc()
        .clamp(f64::from(MIN_EXPONENT), f64::from(MAX_EXPONENT)) as i32
}

/// Combine mantissa and exponent into r = m' × 10^e'
///
/// `m'` is the mantissa, or 0 when it is not finite. `e'` is the exponent
/// after [`clamp_exponent`]. The mantissa itself is not range-checked, so a
/// large mantissa at e' = 300 can still overflow to infinity; downstream
/// draw gates handle that.
pub fn resolve_magnitude(mantissa: f64, exponent: f64) -> f64 {
    let mantissa = if mantissa.is_finite() { mantissa } else { 0.0 };
    mantissa * 10_f64.powi(clamp_exponent(exponent))
}
