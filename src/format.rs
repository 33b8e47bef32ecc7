//! Numeric literal formatting for generated sources

/// Decimal places kept for expected output values
pub const VALUE_PRECISION: usize = 10;

/// Format a value as a fixed-notation decimal literal
///
/// At most [`VALUE_PRECISION`] decimal places, trailing zeros removed, at
/// least one fractional digit kept. Never uses scientific notation.
///
/// ```
/// use pooling_testgen::format::format_value;
///
/// assert_eq!(format_value(3.0), "3.0");
/// assert_eq!(format_value(2.25), "2.25");
/// assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let mut text = format!("{value:.prec$}", prec = VALUE_PRECISION);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        if text.ends_with('.') {
            text.push('0');
        }
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

/// Format values as a brace-enclosed initializer list
///
/// ```
/// use pooling_testgen::format::format_tensor;
///
/// assert_eq!(format_tensor(&[1.0, 2.5]), "{1.0, 2.5}");
/// ```
#[must_use]
pub fn format_tensor(values: &[f64]) -> String {
    let body: Vec<String> = values.iter().map(|&v| format_value(v)).collect();
    format!("{{{}}}", body.join(", "))
}

/// Format the input magnitude with exactly one decimal place
#[must_use]
pub fn format_max_input(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_keep_one_decimal() {
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(16777216.0), "16777216.0");
        assert_eq!(format_value(-4.0), "-4.0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_value(-0.0), "0.0");
        assert_eq!(format_value(-1e-12), "0.0");
    }

    #[test]
    fn test_no_scientific_notation() {
        assert_eq!(format_value(1e-7), "0.0000001");
        assert_eq!(format_value(1e15), "1000000000000000.0");
        assert!(!format_value(123456789.123).contains('e'));
    }

    #[test]
    fn test_precision_rounds() {
        assert_eq!(format_value(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_value(0.125), "0.125");
    }

    #[test]
    fn test_tensor() {
        assert_eq!(format_tensor(&[]), "{}");
        assert_eq!(format_tensor(&[1.0]), "{1.0}");
        assert_eq!(format_tensor(&[1.0, 0.5, 3.25]), "{1.0, 0.5, 3.25}");
    }

    #[test]
    fn test_max_input() {
        assert_eq!(format_max_input(16777216.0), "16777216.0");
        assert_eq!(format_max_input(2048.0), "2048.0");
    }
}
