//! Filters for querying close approaches.
//!
//! A query is described by a [`FilterSet`]: an ordered list of [`Predicate`]s
//! combined with logical AND. Each predicate is usually an
//! [`AttributeFilter`], which pairs a [`Comparator`] and a reference value
//! with an [`Attribute`] that knows how to pull the compared value out of a
//! close approach.
//!
//! Filter sets are built from user criteria by [`create_filters`], or from
//! textual expressions such as `distance<=0.5` by [`parse_criterion`].

mod attribute;
mod criteria;
mod expression;

use std::fmt;

use crate::error::Result;
use crate::models::ApproachView;

pub use attribute::{
    ApproachDate, ApproachDistance, ApproachVelocity, Attribute, AttributeFilter, DiameterFilter,
    DistanceFilter, HazardousFilter, NeoDiameter, NeoHazardous, TimeFilter, VelocityFilter,
};
pub use criteria::{Criteria, create_filters};
pub use expression::parse_criterion;

/// Comparison applied between an extracted value and a reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `extracted == reference`
    Eq,
    /// `extracted <= reference`
    Le,
    /// `extracted >= reference`
    Ge,
}

impl Comparator {
    /// Apply the comparison.
    ///
    /// Returns `None` when the values have no ordering (e.g. NaN).
    pub fn compare<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> Option<bool> {
        let ordering = lhs.partial_cmp(rhs)?;
        Some(match self {
            Self::Eq => ordering.is_eq(),
            Self::Le => ordering.is_le(),
            Self::Ge => ordering.is_ge(),
        })
    }

    /// Operator symbol, as accepted by [`parse_criterion`].
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "eq"),
            Self::Le => write!(f, "le"),
            Self::Ge => write!(f, "ge"),
        }
    }
}

/// A boolean test over one close approach.
///
/// Evaluation is a pure read: it never mutates the approach or the predicate.
pub trait Predicate: fmt::Debug {
    /// Decide whether the approach satisfies this predicate.
    ///
    /// # Errors
    ///
    /// Returns an error when the attribute cannot be extracted or compared;
    /// see [`crate::Error`].
    fn evaluate(&self, view: &ApproachView<'_>) -> Result<bool>;
}

/// Ordered AND-combination of predicates.
///
/// An empty set matches every approach.
#[derive(Debug, Default)]
pub struct FilterSet {
    predicates: Vec<Box<dyn Predicate>>,
}

impl FilterSet {
    /// Create an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn push(&mut self, predicate: impl Predicate + 'static) {
        self.predicates.push(Box::new(predicate));
    }

    /// Append an already boxed predicate, e.g. one from [`parse_criterion`].
    pub fn push_boxed(&mut self, predicate: Box<dyn Predicate>) {
        self.predicates.push(predicate);
    }

    /// Combine with another set; the result requires both.
    #[must_use]
    pub fn and(mut self, other: FilterSet) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Number of predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the set has no predicates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterate over the predicates in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Predicate + 'static)> {
        self.predicates.iter().map(|predicate| &**predicate)
    }

    /// Check every predicate in order, stopping at the first that fails.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation error.
    pub fn matches(&self, view: &ApproachView<'_>) -> Result<bool> {
        for predicate in &self.predicates {
            if !predicate.evaluate(view)? {
                tracing::trace!(
                    designation = %view.approach.designation,
                    filter = ?predicate,
                    "approach rejected"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Extend<Box<dyn Predicate>> for FilterSet {
    fn extend<I: IntoIterator<Item = Box<dyn Predicate>>>(&mut self, iter: I) {
        self.predicates.extend(iter);
    }
}

impl FromIterator<Box<dyn Predicate>> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn Predicate>>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}
