//! Dollar value formatting for display layers
//!
//! Formatting is a display concern, not a calculation one; the library
//! keeps it to a single adapter so embedding applications can render
//! results consistently.

/// Format a dollar value as `$1,234,568`
///
/// Rounds to zero fraction digits and keeps the sign.
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, true, 0)
}

/// Format a dollar value with explicit sign handling and precision
///
/// When `return_negative` is false the absolute value is rendered.
/// `fraction_digits` is the exact number of digits after the decimal
/// point; rounding is half away from zero.
pub fn format_currency_with(value: f64, return_negative: bool, fraction_digits: usize) -> String {
    let value = if return_negative { value } else { value.abs() };

    let scale = 10f64.powi(fraction_digits as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let digits = format!("{:.*}", fraction_digits, rounded);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    out.push('$');
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(100.0), "$100");
        assert_eq!(format_currency(1_000.0), "$1,000");
    }

    #[test]
    fn test_rounds_to_whole_dollars_by_default() {
        assert_eq!(format_currency(1_909.66), "$1,910");
        assert_eq!(format_currency(0.4), "$0");
    }

    #[test]
    fn test_keeps_the_sign_by_default() {
        assert_eq!(format_currency(-500.0), "-$500");
        assert_eq!(format_currency_with(-500.0, false, 0), "$500");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_currency_with(1_234.567, true, 2), "$1,234.57");
        assert_eq!(format_currency_with(1_234.0, true, 2), "$1,234.00");
    }
}
