//! Result line formatting.
//!
//! The output line must render doubles the way the original consumers
//! expect: `NaN` for the undefined sentinel, a trailing `.0` on whole
//! numbers, and the shortest round-trippable decimal form otherwise.
//! Rust's `f64` `Display` already produces the shortest round-trip form,
//! so only the whole-number and non-finite cases need special handling.

/// Render a single result value.
///
/// # Examples
///
/// ```
/// use dataproc_core::format::format_value;
///
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(9.0), "9.0");
/// assert_eq!(format_value(20.0 / 3.0), "6.666666666666667");
/// assert_eq!(format_value(f64::NAN), "NaN");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Build the full output line, exactly `Result = <value>`.
pub fn result_line(value: f64) -> String {
    format!("Result = {}", format_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_whole_number_gets_decimal() {
        assert_eq!(format_value(2.0), "2.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-3.0), "-3.0");
    }

    #[test]
    fn test_format_fractional_shortest_form() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(6.666666666666667), "6.666666666666667");
    }

    #[test]
    fn test_format_nan_sentinel() {
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_result_line_exact_text() {
        assert_eq!(result_line(6.666666666666667), "Result = 6.666666666666667");
        assert_eq!(result_line(f64::NAN), "Result = NaN");
        assert_eq!(result_line(9.0), "Result = 9.0");
    }
}
