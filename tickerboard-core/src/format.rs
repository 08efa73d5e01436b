//! Fixed-precision decimal formatting with thousands grouping.

/// Upper bound on decimal places; feed precisions above it are clamped.
pub const MAX_PRECISION: usize = 18;

/// Formats `value` with exactly `precision` decimal places, grouping the
/// integer part with `separator` when one is given.
///
/// Non-finite input formats as zero. `precision` is clamped to
/// [`MAX_PRECISION`].
///
/// ```
/// use tickerboard_core::format_decimal;
/// assert_eq!(format_decimal(1234.5, 2, Some(',')), "1,234.50");
/// assert_eq!(format_decimal(-9876543.0, 0, Some(',')), "-9,876,543");
/// ```
pub fn format_decimal(value: f64, precision: usize, separator: Option<char>) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let precision = precision.min(MAX_PRECISION);
    let fixed = format!("{value:.precision$}");

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    // "-0.00" after rounding reads as a loss that isn't there.
    let sign = if int_part.bytes().chain(frac_part.unwrap_or("").bytes()).all(|b| b == b'0') {
        ""
    } else {
        sign
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    out.push_str(sign);
    match separator {
        Some(sep) => out.push_str(&group_thousands(int_part, sep)),
        None => out.push_str(int_part),
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
