//! Fixed-point number formatting.

/// Formats `value` with exactly three digits after the decimal point.
///
/// Rounds to the nearest thousandth; values that sit exactly halfway
/// between two thousandths round away from zero. Negative zero prints as
/// `0.000`, while small negative values keep their sign (`-0.000`).
/// NaN and infinities fall through to the standard `Display` output.
///
/// # Examples
///
/// ```
/// use hudkit_domain::common::format_fixed3;
///
/// assert_eq!(format_fixed3(1.0), "1.000");
/// assert_eq!(format_fixed3(0.0625), "0.063");
/// assert_eq!(format_fixed3(-2.34567), "-2.346");
/// ```
pub fn format_fixed3(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0.000".to_string();
    }

    // A double lands exactly on a half-thousandth only when it is an odd
    // multiple of 1/16. `{:.3}` breaks those ties to even, so handle them here.
    let sixteenths = value * 16.0;
    let is_exact_tie = sixteenths.fract() == 0.0 && (sixteenths % 2.0).abs() == 1.0;
    if is_exact_tie && value.abs() < MAX_EXACT_TIE {
        let thousandths = (value.abs() * 1000.0).ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:03}", thousandths / 1000, thousandths % 1000);
    }

    format!("{value:.3}")
}

/// Beyond this magnitude `value * 1000.0` is no longer exact.
const MAX_EXACT_TIE: f64 = 1e12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_are_padded() {
        assert_eq!(format_fixed3(0.5), "0.500");
        assert_eq!(format_fixed3(42.0), "42.000");
        assert_eq!(format_fixed3(-3.0), "-3.000");
    }

    #[test]
    fn test_rounds_to_nearest_thousandth() {
        assert_eq!(format_fixed3(1.23449), "1.234");
        assert_eq!(format_fixed3(1.23451), "1.235");
        assert_eq!(format_fixed3(-0.9999), "-1.000");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed3(0.0625), "0.063");
        assert_eq!(format_fixed3(0.1875), "0.188");
        assert_eq!(format_fixed3(1.0625), "1.063");
        assert_eq!(format_fixed3(-0.0625), "-0.063");
        assert_eq!(format_fixed3(-2.3125), "-2.313");
    }

    #[test]
    fn test_even_sixteenths_are_not_ties() {
        // 2/16 = 0.125 has exactly three decimals
        assert_eq!(format_fixed3(0.125), "0.125");
        assert_eq!(format_fixed3(-0.375), "-0.375");
    }

    #[test]
    fn test_negative_zero_drops_sign() {
        assert_eq!(format_fixed3(-0.0), "0.000");
        assert_eq!(format_fixed3(0.0), "0.000");
    }

    #[test]
    fn test_tiny_negative_keeps_sign() {
        assert_eq!(format_fixed3(-0.0001), "-0.000");
    }

    #[test]
    fn test_non_finite_values_fall_through() {
        assert_eq!(format_fixed3(f64::NAN), "NaN");
        assert_eq!(format_fixed3(f64::INFINITY), "inf");
        assert_eq!(format_fixed3(f64::NEG_INFINITY), "-inf");
    }
}
