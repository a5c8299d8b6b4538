//! Building filter sets from user criteria.

use chrono::NaiveDate;

use super::{
    Comparator, DiameterFilter, DistanceFilter, FilterSet, HazardousFilter, TimeFilter,
    VelocityFilter,
};

/// User-supplied query criteria.
///
/// Every field is optional; `None` means "no constraint". Numeric and date
/// values are expected to be parsed and validated by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Approach happened on exactly this date.
    pub date: Option<NaiveDate>,
    /// Approach happened on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Approach happened on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Minimum approach distance (au).
    pub distance_min: Option<f64>,
    /// Maximum approach distance (au).
    pub distance_max: Option<f64>,
    /// Minimum relative velocity (km/s).
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity (km/s).
    pub velocity_max: Option<f64>,
    /// Minimum NEO diameter (km).
    pub diameter_min: Option<f64>,
    /// Maximum NEO diameter (km).
    pub diameter_max: Option<f64>,
    /// `Some(true)` keeps only hazardous NEOs, `Some(false)` only
    /// non-hazardous ones, `None` keeps both.
    pub hazardous: Option<bool>,
}

/// Create a filter set from user criteria.
///
/// Exactly one filter is produced per criterion that is `Some`, in a fixed
/// order: date, start date, end date, distance min/max, velocity min/max,
/// diameter min/max, hazardous.
///
/// Presence alone decides whether a filter is emitted: `hazardous =
/// Some(false)` yields a `hazardous == false` filter and a bound of `0.0` is
/// still a bound.
#[must_use]
pub fn create_filters(criteria: &Criteria) -> FilterSet {
    let mut filters = FilterSet::new();

    if let Some(date) = criteria.date {
        filters.push(TimeFilter::new(Comparator::Eq, date));
    }
    if let Some(start) = criteria.start_date {
        filters.push(TimeFilter::new(Comparator::Ge, start));
    }
    if let Some(end) = criteria.end_date {
        filters.push(TimeFilter::new(Comparator::Le, end));
    }
    if let Some(min) = criteria.distance_min {
        filters.push(DistanceFilter::new(Comparator::Ge, min));
    }
    if let Some(max) = criteria.distance_max {
        filters.push(DistanceFilter::new(Comparator::Le, max));
    }
    if let Some(min) = criteria.velocity_min {
        filters.push(VelocityFilter::new(Comparator::Ge, min));
    }
    if let Some(max) = criteria.velocity_max {
        filters.push(VelocityFilter::new(Comparator::Le, max));
    }
    if let Some(min) = criteria.diameter_min {
        filters.push(DiameterFilter::new(Comparator::Ge, min));
    }
    if let Some(max) = criteria.diameter_max {
        filters.push(DiameterFilter::new(Comparator::Le, max));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(HazardousFilter::new(Comparator::Eq, hazardous));
    }

    tracing::debug!(count = filters.len(), "created filters");
    filters
}
