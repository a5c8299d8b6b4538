//! Parsing textual criterion expressions such as `distance<=0.5`.

use std::str::FromStr;

use chrono::NaiveDate;

use super::{
    Comparator, DiameterFilter, DistanceFilter, HazardousFilter, Predicate, TimeFilter,
    VelocityFilter,
};
use crate::error::{Error, Result};

/// Date format accepted in expressions.
pub const EXPRESSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `<attribute><op><value>` into a predicate.
///
/// Supported attributes are `date`, `distance`, `velocity`, `diameter` and
/// `hazardous`; supported operators are `=`/`==`, `<=` and `>=`. Whitespace
/// around each part is ignored.
///
/// # Errors
///
/// - [`Error::UnsupportedCriterion`] if the attribute has no filter kind.
/// - [`Error::InvalidCriterion`] if the operator or value is malformed.
///
/// # Examples
///
/// ```
/// let predicate = neo_core::parse_criterion("velocity >= 12.5").unwrap();
/// assert_eq!(format!("{predicate:?}"), "VelocityFilter(op=ge, value=12.5)");
/// ```
pub fn parse_criterion(expression: &str) -> Result<Box<dyn Predicate>> {
    let (attribute, op, value) = split_expression(expression)?;

    let predicate: Box<dyn Predicate> = match attribute.to_ascii_lowercase().as_str() {
        "date" => Box::new(TimeFilter::new(op, parse_date(value)?)),
        "distance" => Box::new(DistanceFilter::new(op, parse_value::<f64>(attribute, value)?)),
        "velocity" => Box::new(VelocityFilter::new(op, parse_value::<f64>(attribute, value)?)),
        "diameter" => Box::new(DiameterFilter::new(op, parse_value::<f64>(attribute, value)?)),
        "hazardous" => Box::new(HazardousFilter::new(op, parse_value::<bool>(attribute, value)?)),
        _ => return Err(Error::UnsupportedCriterion(attribute.to_string())),
    };

    tracing::debug!(expression, filter = ?predicate, "parsed criterion");
    Ok(predicate)
}

fn split_expression(expression: &str) -> Result<(&str, Comparator, &str)> {
    let invalid = |reason: &str| Error::InvalidCriterion(format!("'{expression}': {reason}"));

    let start = expression
        .find(['<', '>', '='])
        .ok_or_else(|| invalid("missing operator"))?;
    let rest = &expression[start..];

    let (op, len) = if rest.starts_with("<=") {
        (Comparator::Le, 2)
    } else if rest.starts_with(">=") {
        (Comparator::Ge, 2)
    } else if rest.starts_with("==") {
        (Comparator::Eq, 2)
    } else if rest.starts_with('=') {
        (Comparator::Eq, 1)
    } else {
        return Err(invalid("only =, <= and >= are supported"));
    };

    let attribute = expression[..start].trim();
    let value = rest[len..].trim();
    if attribute.is_empty() {
        return Err(invalid("missing attribute"));
    }
    if value.is_empty() {
        return Err(invalid("missing value"));
    }
    Ok((attribute, op, value))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, EXPRESSION_DATE_FORMAT)
        .map_err(|e| Error::InvalidCriterion(format!("date '{value}': {e}")))
}

fn parse_value<T>(attribute: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| Error::InvalidCriterion(format!("{attribute} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::le("distance<=0.5", "DistanceFilter(op=le, value=0.5)")]
    #[case::ge_spaced(" velocity >= 10 ", "VelocityFilter(op=ge, value=10.0)")]
    #[case::single_eq("hazardous=false", "HazardousFilter(op=eq, value=false)")]
    #[case::double_eq("date==2000-01-01", "TimeFilter(op=eq, value=2000-01-01)")]
    #[case::case_insensitive("Diameter>=1.2", "DiameterFilter(op=ge, value=1.2)")]
    fn parses_supported_expressions(#[case] expression: &str, #[case] expected: &str) {
        let predicate = parse_criterion(expression).unwrap();
        assert_eq!(format!("{predicate:?}"), expected);
    }

    #[rstest]
    #[case::name("name=Eros", "name")]
    #[case::designation("designation>=433", "designation")]
    fn unknown_attribute_is_unsupported(#[case] expression: &str, #[case] attribute: &str) {
        let err = parse_criterion(expression).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCriterion(name) if name == attribute));
    }

    #[rstest]
    #[case::no_operator("distance 0.5")]
    #[case::strict_less("distance<0.5")]
    #[case::strict_greater("distance>0.5")]
    #[case::no_attribute("<=0.5")]
    #[case::no_value("velocity>=")]
    #[case::bad_number("distance<=near")]
    #[case::bad_bool("hazardous=maybe")]
    #[case::bad_date("date=01/01/2000")]
    fn malformed_expression_is_invalid(#[case] expression: &str) {
        let err = parse_criterion(expression).unwrap_err();
        assert!(matches!(err, Error::InvalidCriterion(_)), "got {err:?}");
    }
}
