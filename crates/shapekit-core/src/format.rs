//! Real-number formatting for areas and perimeters.
//!
//! Values are printed with a fixed number of significant digits, trailing
//! zeros removed, switching to scientific notation for very large or very
//! small magnitudes (`20`, `12.5664`, `1e+06`, `1.5e-07`).

/// Significant digits used when no precision is requested.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Format `value` with `significant_digits` significant digits.
///
/// A precision of zero is treated as one.
pub fn format_real(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = significant_digits.max(1);
    // Round to the requested digits first so the exponent reflects carries
    // (999999.7 becomes 1e+06, not 1000000).
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_print_without_fraction() {
        assert_eq!(format_real(20.0, 6), "20");
        assert_eq!(format_real(18.0, 6), "18");
        assert_eq!(format_real(-4.0, 6), "-4");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_real(std::f64::consts::PI * 4.0, 6), "12.5664");
        assert_eq!(format_real(0.1 + 0.2, 6), "0.3");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_real(1_000_000.0, 6), "1e+06");
        assert_eq!(format_real(999_999.7, 6), "1e+06");
        assert_eq!(format_real(0.000_015, 6), "1.5e-05");
        assert_eq!(format_real(123_456.0, 6), "123456");
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_real(std::f64::consts::PI, 3), "3.14");
        assert_eq!(format_real(std::f64::consts::PI, 0), "3");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_real(0.0, 6), "0");
        assert_eq!(format_real(f64::NAN, 6), "nan");
        assert_eq!(format_real(f64::NEG_INFINITY, 6), "-inf");
    }
}
