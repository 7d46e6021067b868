/// Exponents (base ten) for which [`format_number`] uses positional notation.
///
/// Values whose decimal exponent falls outside this range are printed in
/// scientific notation, e.g. `1e+16` or `1.5e-07`.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Formats a runtime value the way `print` writes it.
///
/// The shortest digit string that round-trips to the same `f64` is used.
/// Integral values keep a trailing `.0`, non-finite values print as `nan`,
/// `inf` and `-inf`, and very large or very small magnitudes switch to
/// scientific notation with a signed exponent of at least two digits.
///
/// ## Example
/// ```
/// use while_lang::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3.0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "nan");
/// assert_eq!(format_number(1e16), "1e+16");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0.0");
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. `1.2345e2`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        let digits = mantissa.chars()
                             .filter(char::is_ascii_digit)
                             .collect::<String>();
        format!("{sign}{}", positional(&digits, exponent))
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.unsigned_abs())
    }
}

/// Places the decimal point into a significant-digit string.
fn positional(digits: &str, exponent: i32) -> String {
    let shift = exponent.unsigned_abs() as usize;
    if exponent < 0 {
        return format!("0.{}{digits}", "0".repeat(shift - 1));
    }

    let integral = shift + 1;
    if digits.len() <= integral {
        format!("{digits}{}.0", "0".repeat(integral - digits.len()))
    } else {
        format!("{}.{}", &digits[..integral], &digits[integral..])
    }
}

/// Formats a number literal for the canonical program rendering.
///
/// Unlike [`format_number`], the result never uses exponent notation, so it
/// always lexes back into a single number token. A fractional part is always
/// present.
///
/// ## Example
/// ```
/// use while_lang::util::num::format_literal;
///
/// assert_eq!(format_literal(5.0), "5.0");
/// assert_eq!(format_literal(0.25), "0.25");
/// assert_eq!(format_literal(1e16), "10000000000000000.0");
/// ```
#[must_use]
pub fn format_literal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Converts the text of a number token into its value.
///
/// Returns `None` when the text does not denote a finite `f64`, which
/// happens for literals with more digits than a double can hold.
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_a_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-12.0), "-12.0");
        assert_eq!(format_number(100.0), "100.0");
        assert_eq!(format_number(9_999_999_999_999_998.0), "9999999999999998.0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(123.45), "123.45");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn extreme_magnitudes_switch_to_scientific() {
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(2.0_f64.powf(60.0)), "1.152921504606847e+18");
        assert_eq!(format_number(-1e300), "-1e+300");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn literals_render_without_exponent() {
        assert_eq!(format_literal(0.0000001), "0.0000001");
        assert_eq!(format_literal(42.0), "42.0");
    }

    #[test]
    fn oversized_literals_are_rejected() {
        assert_eq!(parse_literal("12.5"), Some(12.5));
        assert_eq!(parse_literal(&"9".repeat(400)), None);
    }
}
