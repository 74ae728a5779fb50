//! Compact numeric labels
//!
//! Values between 1e-3 and 1e6 print as trimmed fixed-point; everything
//! else switches to scientific notation so labels stay short across the
//! whole 1e±300 range.

use glam::DVec2;

/// Label for any non-finite value
pub const INFINITY_SYMBOL: &str = "∞";

/// At or above this magnitude labels go scientific
const SCIENTIFIC_ABOVE: f64 = 1e6;
/// Below this magnitude labels go scientific
const SCIENTIFIC_BELOW: f64 = 1e-3;

/// Format a value for on-screen display
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return INFINITY_SYMBOL.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_ABOVE || magnitude < SCIENTIFIC_BELOW {
        return scientific(value);
    }

    let fixed = format!("{value:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Two fractional digits with a signed, zero-padded exponent (1.23e+07)
fn scientific(value: f64) -> String {
    let raw = format!("{value:.2e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}

/// θ in degrees with a degree sign
pub fn format_degrees(theta: f64) -> String {
    format!("{}°", format_number(theta.to_degrees()))
}

/// z as "a + bi" / "a - bi"
pub fn format_complex(z: DVec2) -> String {
    if z.y.is_sign_negative() && z.y != 0.0 {
        format!("{} - {}i", format_number(z.x), format_number(-z.y))
    } else {
        format!("{} + {}i", format_number(z.x), format_number(z.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_scientific(s: &str) -> bool {
        let Some((mantissa, exponent)) = s.split_once('e') else {
            return false;
        };
        let mantissa = mantissa.trim_start_matches('-');
        let digits = mantissa.split_once('.');
        matches!(digits, Some((int, frac)) if int.len() == 1 && frac.len() == 2)
            && (exponent.starts_with('+') || exponent.starts_with('-'))
            && exponent[1..].len() >= 2
            && exponent[1..].chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), INFINITY_SYMBOL);
        assert_eq!(format_number(f64::NEG_INFINITY), INFINITY_SYMBOL);
        assert_eq!(format_number(f64::NAN), INFINITY_SYMBOL);
    }

    #[test]
    fn test_fixed_trims_trailing_zeros() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.001), "0.001");
        assert_eq!(format_number(123456.789), "123456.789");
        assert_eq!(format_number(3.14159), "3.142");
        // Rounds up to a whole number before trimming
        assert_eq!(format_number(999999.9996), "1000000");
    }

    #[test]
    fn test_scientific_bands() {
        assert_eq!(format_number(1_500_000.0), "1.50e+06");
        assert!(is_scientific(&format_number(1_500_000.0)));
        assert_eq!(format_number(1.23e7), "1.23e+07");
        assert_eq!(format_number(1e6), "1.00e+06");
        assert_eq!(format_number(0.0001234), "1.23e-04");
        assert_eq!(format_number(-4.5e-9), "-4.50e-09");
        assert_eq!(format_number(1e300), "1.00e+300");
        assert_eq!(format_number(1e-300), "1.00e-300");
    }

    #[test]
    fn test_fixed_band_is_not_scientific() {
        for v in [0.001, 0.5, 42.0, 999_999.0] {
            assert!(!is_scientific(&format_number(v)), "{v}");
        }
    }

    #[test]
    fn test_degrees() {
        assert_eq!(format_degrees(std::f64::consts::PI), "180°");
        assert_eq!(format_degrees(0.0), "0°");
    }

    #[test]
    fn test_complex() {
        assert_eq!(format_complex(DVec2::new(1.0, 0.0)), "1 + 0i");
        assert_eq!(format_complex(DVec2::new(0.5, -0.25)), "0.5 - 0.25i");
        assert_eq!(format_complex(DVec2::new(-3e8, 2.0)), "-3.00e+08 + 2i");
    }
}
