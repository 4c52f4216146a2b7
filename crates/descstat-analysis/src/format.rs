//! Number formatting for the text report

/// Marker for a statistic that is undefined for the sample.
pub const NOT_APPLICABLE: &str = "N/A";

/// Marker for a sample in which no value repeats.
pub const NO_MODE: &str = "#N/A";

/// Formats `value` without superfluous trailing zeros.
///
/// Whole numbers print without a fractional part. Anything else is printed
/// with `decimals` fractional digits, then trailing zeros and a dangling
/// decimal point are removed.
///
/// # Examples
///
/// ```
/// use descstat_analysis::format::format_number;
///
/// assert_eq!(format_number(20.0, 7), "20");
/// assert_eq!(format_number(2.5, 7), "2.5");
/// assert_eq!(format_number(66.666_666_666, 5), "66.66667");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        // also catches -0.0
        return "0".to_owned();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.decimals$}");
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_owned()
}

/// Formats an optional statistic, using [`NOT_APPLICABLE`] for `None`.
#[must_use]
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_owned(), |v| format_number(v, decimals))
}

/// Formats the modes of a sample.
///
/// A single mode prints as a bare number, several modes as a bracketed list,
/// and no mode as [`NO_MODE`].
#[must_use]
pub fn format_modes(modes: &[f64], decimals: usize) -> String {
    match modes {
        [] => NO_MODE.to_owned(),
        [mode] => format_number(*mode, decimals),
        _ => {
            let parts = modes
                .iter()
                .map(|&m| format_number(m, decimals))
                .collect::<Vec<_>>();
            format!("[{}]", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_number(4.0, 7), "4");
        assert_eq!(format_number(-12.0, 7), "-12");
        assert_eq!(format_number(0.0, 7), "0");
        assert_eq!(format_number(-0.0, 7), "0");
        assert_eq!(format_number(1e20, 7), "100000000000000000000");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_number(2.5, 7), "2.5");
        assert_eq!(format_number(0.125, 6), "0.125");
        assert_eq!(format_number(-1.75, 5), "-1.75");
    }

    #[test]
    fn test_rounded_to_precision() {
        assert_eq!(format_number(7.071_067_811_865_475, 7), "7.0710678");
        assert_eq!(format_number(8.164_965_809_277_26, 6), "8.164966");
        assert_eq!(format_number(1.0 / 3.0, 5), "0.33333");
    }

    #[test]
    fn test_rounding_to_whole_drops_point() {
        assert_eq!(format_number(9.999_999_99, 6), "10");
        assert_eq!(format_number(0.000_000_01, 6), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN, 6), "nan");
        assert_eq!(format_number(f64::INFINITY, 6), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn test_optional() {
        assert_eq!(format_optional(None, 6), NOT_APPLICABLE);
        assert_eq!(format_optional(Some(1.5), 6), "1.5");
    }

    #[test]
    fn test_modes() {
        assert_eq!(format_modes(&[], 6), NO_MODE);
        assert_eq!(format_modes(&[20.0], 6), "20");
        assert_eq!(format_modes(&[1.0, 2.5, 3.0], 6), "[1, 2.5, 3]");
    }
}
