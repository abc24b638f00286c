//! Number formatting for summary cards and table cells.
//!
//! Stored values are never rounded; rounding happens only here.

/// Format a number with a thousands separator (`,`) and `decimals` digits after the point
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut integer = grouped.chars().rev().collect::<String>();

    // "-0.00" reads as noise
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", integer, d),
        None => integer,
    }
}

/// Money: two decimals with a leading currency sign, e.g. `$1,234.50`
pub fn format_money(value: f64) -> String {
    let digits = format_number_with_decimals(value, 2);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", digits),
    }
}

/// Unit counts: rounded to the nearest integer
pub fn format_count(value: f64) -> String {
    format_number_with_decimals(value.round(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.56), "-$1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(12.5), "13");
        assert_eq!(format_count(0.0), "0");
    }
}
