//! Maturity amount calculator.
//!
//! Inputs are read the way a browser number field hands them over: the
//! longest numeric prefix counts, anything unparseable becomes `NaN`, and
//! `NaN` propagates to the displayed result instead of raising an error.

use std::num::FpCategory;

/// Prefix of every rendered result.
pub const RESULT_LABEL: &str = "Maturity Amount : ";

const INFINITY: &str = "Infinity";

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Parse the leading number in `raw`, ignoring leading whitespace and any
/// trailing garbage. Returns `NaN` when no number is present.
///
/// # Examples
/// ```
/// use maturity::parse_lenient;
///
/// assert_eq!(parse_lenient("  12.5kg"), 12.5);
/// assert_eq!(parse_lenient("-3e2x"), -300.0);
/// assert!(parse_lenient("abc").is_nan());
/// ```
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };
    if unsigned.starts_with(INFINITY) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let sign_len = trimmed.len() - unsigned.len();
    let len = numeric_prefix_len(unsigned);
    if len == 0 {
        return f64::NAN;
    }
    trimmed
        .get(..sign_len + len)
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(f64::NAN)
}

/// Byte length of `digits[.digits][(e|E)[+-]digits]` at the start of `s`,
/// or zero when there are no mantissa digits.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_digits = digits_from(0);
    let mut end = int_digits;
    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    end
}

/// `principal * (principal * rate * tenure) / 100`.
///
/// # Examples
/// ```
/// use maturity::maturity_amount;
///
/// assert_eq!(maturity_amount(1000.0, 5.0, 2.0), 100_000.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the calculator is defined over IEEE doubles, NaN included"
)]
pub const fn maturity_amount(principal: f64, rate: f64, tenure: f64) -> f64 {
    principal * (principal * rate * tenure) / 100.0
}

/// Render `value` with two decimals; non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`.
///
/// Rounding looks at the exact binary value and sends ties away from zero,
/// so `0.125` renders as `0.13` while `1.005` (stored just below) renders as
/// `1.00`.
///
/// # Examples
/// ```
/// use maturity::format_amount;
///
/// assert_eq!(format_amount(0.125), "0.13");
/// assert_eq!(format_amount(1.005), "1.00");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    match value.classify() {
        FpCategory::Nan => "NaN".to_owned(),
        FpCategory::Infinite if value.is_sign_negative() => format!("-{INFINITY}"),
        FpCategory::Infinite => INFINITY.to_owned(),
        FpCategory::Zero => "0.00".to_owned(),
        FpCategory::Normal | FpCategory::Subnormal => round_to_cents(value),
    }
}

fn round_to_cents(value: f64) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        increment(&mut digits);
    }

    let (units, cents) = digits.split_at(digits.len().saturating_sub(2));
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = |part: &[u8]| part.iter().copied().map(char::from).collect::<String>();
    format!("{sign}{}.{}", text(units), text(cents))
}

/// Add one to a big-endian ASCII decimal, growing it on overflow.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Compute from raw field text and produce the display line.
///
/// # Examples
/// ```
/// use maturity::calculate;
///
/// assert_eq!(calculate("1000", "5", "2"), "Maturity Amount : 100000.00");
/// assert_eq!(calculate("", "5", "2"), "Maturity Amount : NaN");
/// ```
#[must_use]
pub fn calculate(principal: &str, rate: &str, tenure: &str) -> String {
    let amount = maturity_amount(
        parse_lenient(principal),
        parse_lenient(rate),
        parse_lenient(tenure),
    );
    format!("{RESULT_LABEL}{}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1000", 1000.0)]
    #[case("  42  ", 42.0)]
    #[case("3.5%", 3.5)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("+7", 7.0)]
    #[case("-2.25", -2.25)]
    #[case("1e3", 1000.0)]
    #[case("2E-1x", 0.2)]
    #[case("4e", 4.0)]
    #[case("4e+", 4.0)]
    #[case("1.2.3", 1.2)]
    fn numeric_prefix_is_parsed(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_lenient(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("-")]
    #[case(".")]
    #[case("+.e5")]
    #[case("e5")]
    fn missing_number_is_nan(#[case] raw: &str) {
        assert!(parse_lenient(raw).is_nan());
    }

    #[rstest]
    #[case("Infinity", f64::INFINITY)]
    #[case("-Infinity and beyond", f64::NEG_INFINITY)]
    fn infinity_literal_is_recognised(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_lenient(raw), expected);
    }

    #[rstest]
    #[case(1000.0, 5.0, 2.0, "100000.00")]
    #[case(100.0, 1.5, 1.0, "150.00")]
    #[case(0.0, 5.0, 2.0, "0.00")]
    #[case(-0.0, 5.0, 2.0, "0.00")]
    #[case(10.0, -1.0, 1.0, "-1.00")]
    #[case(f64::NAN, 5.0, 2.0, "NaN")]
    fn amount_is_rounded_to_cents(
        #[case] principal: f64,
        #[case] rate: f64,
        #[case] tenure: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(format_amount(maturity_amount(principal, rate, tenure)), expected);
    }

    #[rstest]
    fn rounding_keeps_two_decimals() {
        assert_eq!(format_amount(0.333_333), "0.33");
        assert_eq!(format_amount(0.666_666), "0.67");
        assert_eq!(format_amount(1_234.5), "1234.50");
    }

    #[rstest]
    #[case(0.125, "0.13")]
    #[case(-0.125, "-0.13")]
    #[case(2.675, "2.67")]
    #[case(1.005, "1.00")]
    #[case(0.375, "0.38")]
    #[case(0.999, "1.00")]
    #[case(99.999, "100.00")]
    #[case(-0.001, "-0.00")]
    #[case(5e-324, "0.00")]
    fn ties_round_away_from_zero_on_exact_value(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[rstest]
    fn half_cent_result_rounds_up() {
        assert_eq!(calculate("1", "12.5", "1"), "Maturity Amount : 0.13");
    }

    #[rstest]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn infinite_amounts_are_named(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[rstest]
    fn unparseable_field_poisons_result() {
        assert_eq!(calculate("1000", "five", "2"), "Maturity Amount : NaN");
    }
}
