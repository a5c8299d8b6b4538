//! Attribute extraction and the generic attribute filter.

use std::fmt;
use std::marker::PhantomData;

use chrono::NaiveDate;

use super::{Comparator, Predicate};
use crate::error::{Error, Result};
use crate::models::{ApproachView, NearEarthObject};

/// An attribute of a close approach (or its NEO) that filters can compare.
///
/// Every concrete attribute supplies its own [`Attribute::get`]; there is no
/// fallback extraction rule.
pub trait Attribute {
    /// Type of the extracted value, compared against the filter's reference value.
    type Value: PartialOrd + Clone + fmt::Debug;

    /// Attribute name used in criterion expressions and error messages.
    const NAME: &'static str;

    /// Name of the filter kind, used by `Debug`/`Display`.
    const FILTER_NAME: &'static str;

    /// Extract the attribute from an approach.
    ///
    /// Returns `Ok(None)` when the value is unknown for this record; unknown
    /// values never satisfy a comparison.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnlinkedApproach`] when a NEO attribute is requested
    /// but the approach has no linked NEO.
    fn get(view: &ApproachView<'_>) -> Result<Option<Self::Value>>;
}

fn linked_neo<'a>(view: &ApproachView<'a>) -> Result<&'a NearEarthObject> {
    view.neo.ok_or_else(|| Error::UnlinkedApproach {
        designation: view.approach.designation.clone(),
    })
}

/// Calendar date portion of the approach time.
#[derive(Debug, Clone, Copy)]
pub struct ApproachDate;

impl Attribute for ApproachDate {
    type Value = NaiveDate;
    const NAME: &'static str = "date";
    const FILTER_NAME: &'static str = "TimeFilter";

    fn get(view: &ApproachView<'_>) -> Result<Option<NaiveDate>> {
        Ok(Some(view.approach.date()))
    }
}

/// Nominal approach distance in au.
#[derive(Debug, Clone, Copy)]
pub struct ApproachDistance;

impl Attribute for ApproachDistance {
    type Value = f64;
    const NAME: &'static str = "distance";
    const FILTER_NAME: &'static str = "DistanceFilter";

    fn get(view: &ApproachView<'_>) -> Result<Option<f64>> {
        Ok(Some(view.approach.distance))
    }
}

/// Relative approach velocity in km/s.
#[derive(Debug, Clone, Copy)]
pub struct ApproachVelocity;

impl Attribute for ApproachVelocity {
    type Value = f64;
    const NAME: &'static str = "velocity";
    const FILTER_NAME: &'static str = "VelocityFilter";

    fn get(view: &ApproachView<'_>) -> Result<Option<f64>> {
        Ok(Some(view.approach.velocity))
    }
}

/// Hazardous flag of the approaching NEO.
#[derive(Debug, Clone, Copy)]
pub struct NeoHazardous;

impl Attribute for NeoHazardous {
    type Value = bool;
    const NAME: &'static str = "hazardous";
    const FILTER_NAME: &'static str = "HazardousFilter";

    fn get(view: &ApproachView<'_>) -> Result<Option<bool>> {
        Ok(Some(linked_neo(view)?.hazardous))
    }
}

/// Diameter of the approaching NEO in km; unknown for many objects.
#[derive(Debug, Clone, Copy)]
pub struct NeoDiameter;

impl Attribute for NeoDiameter {
    type Value = f64;
    const NAME: &'static str = "diameter";
    const FILTER_NAME: &'static str = "DiameterFilter";

    fn get(view: &ApproachView<'_>) -> Result<Option<f64>> {
        Ok(linked_neo(view)?.diameter)
    }
}

/// Compares one attribute of an approach against a reference value.
///
/// Evaluating the filter computes `A::get(approach) OP value`, with the
/// reference value on the right-hand side. An `AttributeFilter` with
/// `op = Comparator::Le` and `value = 10.0` on [`ApproachDistance`] therefore
/// checks `distance <= 10.0`.
pub struct AttributeFilter<A: Attribute> {
    op: Comparator,
    value: A::Value,
    attribute: PhantomData<A>,
}

/// Filter on the date of an approach.
pub type TimeFilter = AttributeFilter<ApproachDate>;
/// Filter on the approach distance.
pub type DistanceFilter = AttributeFilter<ApproachDistance>;
/// Filter on the approach velocity.
pub type VelocityFilter = AttributeFilter<ApproachVelocity>;
/// Filter on the NEO's hazardous flag.
pub type HazardousFilter = AttributeFilter<NeoHazardous>;
/// Filter on the NEO's diameter.
pub type DiameterFilter = AttributeFilter<NeoDiameter>;

impl<A: Attribute> AttributeFilter<A> {
    /// Create a filter from a comparator and a reference value.
    #[must_use]
    pub fn new(op: Comparator, value: A::Value) -> Self {
        Self {
            op,
            value,
            attribute: PhantomData,
        }
    }

    /// The comparator applied by this filter.
    #[must_use]
    pub fn op(&self) -> Comparator {
        self.op
    }

    /// The reference value compared against.
    #[must_use]
    pub fn value(&self) -> &A::Value {
        &self.value
    }
}

impl<A: Attribute> Clone for AttributeFilter<A> {
    fn clone(&self) -> Self {
        Self::new(self.op, self.value.clone())
    }
}

impl<A: Attribute> fmt::Debug for AttributeFilter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(op={}, value={:?})",
            A::FILTER_NAME,
            self.op,
            self.value
        )
    }
}

impl<A: Attribute> fmt::Display for AttributeFilter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", A::NAME, self.op.symbol(), self.value)
    }
}

impl<A: Attribute> Predicate for AttributeFilter<A> {
    fn evaluate(&self, view: &ApproachView<'_>) -> Result<bool> {
        let Some(actual) = A::get(view)? else {
            return Ok(false);
        };
        self.op
            .compare(&actual, &self.value)
            .ok_or(Error::Incomparable {
                attribute: A::NAME,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CloseApproach;
    use rstest::rstest;

    fn approach(distance: f64) -> CloseApproach {
        let time = NaiveDate::from_ymd_opt(2020, 6, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        CloseApproach::new("99942", time, distance, 7.4)
    }

    #[rstest]
    #[case::le_below(Comparator::Le, 0.5, true)]
    #[case::le_equal(Comparator::Le, 0.2, true)]
    #[case::le_above(Comparator::Le, 0.1, false)]
    #[case::ge_equal(Comparator::Ge, 0.2, true)]
    #[case::ge_above(Comparator::Ge, 0.3, false)]
    #[case::eq_same(Comparator::Eq, 0.2, true)]
    #[case::eq_other(Comparator::Eq, 0.21, false)]
    fn distance_filter_applies_comparator(
        #[case] op: Comparator,
        #[case] reference: f64,
        #[case] expected: bool,
    ) {
        let ca = approach(0.2);
        let filter = DistanceFilter::new(op, reference);
        assert_eq!(filter.evaluate(&ApproachView::new(&ca, None)).unwrap(), expected);
    }

    #[test]
    fn time_filter_compares_date_only() {
        let ca = approach(0.2);
        let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let filter = TimeFilter::new(Comparator::Eq, day);
        assert!(filter.evaluate(&ApproachView::new(&ca, None)).unwrap());
    }

    #[test]
    fn neo_attribute_without_link_is_an_error() {
        let ca = approach(0.2);
        let filter = HazardousFilter::new(Comparator::Eq, true);
        let err = filter.evaluate(&ApproachView::new(&ca, None)).unwrap_err();
        assert!(matches!(err, Error::UnlinkedApproach { designation } if designation == "99942"));
    }

    #[test]
    fn unknown_diameter_never_matches() {
        let ca = approach(0.2);
        let neo = NearEarthObject::new("99942", Some("Apophis".to_string()), None, true);
        let view = ApproachView::new(&ca, Some(&neo));

        for op in [Comparator::Eq, Comparator::Le, Comparator::Ge] {
            assert!(!DiameterFilter::new(op, 0.3).evaluate(&view).unwrap());
        }
    }

    #[test]
    fn nan_reference_is_incomparable() {
        let ca = approach(0.2);
        let filter = VelocityFilter::new(Comparator::Ge, f64::NAN);
        let err = filter.evaluate(&ApproachView::new(&ca, None)).unwrap_err();
        assert!(matches!(err, Error::Incomparable { attribute: "velocity" }));
    }

    #[test]
    fn debug_shows_kind_operator_and_value() {
        let filter = DistanceFilter::new(Comparator::Le, 0.6);
        assert_eq!(format!("{filter:?}"), "DistanceFilter(op=le, value=0.6)");
        assert_eq!(filter.to_string(), "distance <= 0.6");

        let hazard = HazardousFilter::new(Comparator::Eq, false);
        assert_eq!(format!("{hazard:?}"), "HazardousFilter(op=eq, value=false)");
    }
}
