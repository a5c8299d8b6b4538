//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use chrono::NaiveDate;

/// Date format accepted on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{s}': {e}. Expected format: YYYY-MM-DD"))
}

/// Parse a finite, non-negative number (distances, velocities, diameters).
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Invalid number '{s}'"))?;

    if !value.is_finite() {
        return Err(format!("Value must be finite, got '{s}'"));
    }
    if value < 0.0 {
        return Err(format!("Value cannot be negative, got {value}"));
    }
    Ok(value)
}

/// Check a `--where` expression has the `<attribute><op><value>` shape.
///
/// The attribute itself is checked when the expression is turned into a
/// filter, so unknown attributes surface as unsupported criteria.
pub fn validate_expression(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Expression cannot be empty".to_string());
    }
    if !s.contains(['<', '>', '=']) {
        return Err(format!(
            "Invalid expression '{s}'. Expected <attribute><op><value>, e.g. distance<=0.5"
        ));
    }
    Ok(s.to_string())
}
