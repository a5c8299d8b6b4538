//! Query engine: lazy filtering and result limiting.
//!
//! Both stages are plain iterator adapters. [`query`] keeps the approaches
//! that satisfy every filter in a [`FilterSet`]; [`limit`] caps any iterator
//! at a maximum number of items. Nothing is evaluated until the caller pulls
//! values, and dropping the iterator stops evaluation.

use std::iter::FusedIterator;

use crate::error::Result;
use crate::filters::FilterSet;
use crate::models::ApproachView;

/// Iterator returned by [`query`].
#[derive(Debug)]
pub struct Query<'f, I> {
    views: I,
    filters: &'f FilterSet,
    failed: bool,
}

impl<'a, I> Iterator for Query<'_, I>
where
    I: Iterator<Item = ApproachView<'a>>,
{
    type Item = Result<ApproachView<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for view in self.views.by_ref() {
            match self.filters.matches(&view) {
                Ok(true) => return Some(Ok(view)),
                Ok(false) => {}
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<'a, I> FusedIterator for Query<'_, I> where I: Iterator<Item = ApproachView<'a>> {}

/// Lazily keep the approaches that satisfy every filter.
///
/// Order is preserved. An empty filter set keeps everything. If a filter
/// fails to evaluate, the error is yielded once and the iterator ends, so
/// collecting into `Result<Vec<_>>` never returns partial results.
pub fn query<'a, 'f, I>(views: I, filters: &'f FilterSet) -> Query<'f, I::IntoIter>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    Query {
        views: views.into_iter(),
        filters,
        failed: false,
    }
}

/// Produce at most `n` items from an iterator.
///
/// `None` and `Some(0)` both mean "no limit".
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> std::iter::Take<I::IntoIter> {
    let n = match n {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };
    iter.into_iter().take(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Comparator, DistanceFilter, HazardousFilter};
    use crate::models::CloseApproach;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn approaches(distances: &[f64]) -> Vec<CloseApproach> {
        let time = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        distances
            .iter()
            .enumerate()
            .map(|(i, &d)| CloseApproach::new(format!("ca-{i}"), time, d, 10.0))
            .collect()
    }

    fn views(cas: &[CloseApproach]) -> impl Iterator<Item = ApproachView<'_>> {
        cas.iter().map(|ca| ApproachView::new(ca, None))
    }

    #[rstest]
    #[case::unlimited(None, 5)]
    #[case::zero_is_unlimited(Some(0), 5)]
    #[case::fewer(Some(2), 2)]
    #[case::exact(Some(5), 5)]
    #[case::more_than_available(Some(9), 5)]
    fn limit_caps_count(#[case] n: Option<usize>, #[case] expected: usize) {
        let out: Vec<i32> = limit(1..=5, n).collect();
        assert_eq!(out.len(), expected);
        assert_eq!(out, (1..=5).take(expected).collect::<Vec<_>>());
    }

    #[test]
    fn query_preserves_order() {
        let cas = approaches(&[0.1, 0.9, 0.2, 0.8]);
        let mut filters = FilterSet::new();
        filters.push(DistanceFilter::new(Comparator::Le, 0.5));

        let out: Vec<_> = query(views(&cas), &filters)
            .map(|r| r.map(|v| v.approach.designation.clone()))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(out, vec!["ca-0", "ca-2"]);
    }

    #[test]
    fn error_ends_iteration() {
        let cas = approaches(&[0.1, 0.2]);
        let mut filters = FilterSet::new();
        filters.push(HazardousFilter::new(Comparator::Eq, true));

        let mut results = query(views(&cas), &filters);
        assert!(results.next().unwrap().is_err());
        assert!(results.next().is_none());
    }

    #[test]
    fn limit_does_not_read_ahead() {
        let cas = approaches(&[0.1, 0.2, 0.3, 0.4]);
        let filters = FilterSet::new();
        let mut pulled = 0;

        let source = views(&cas).inspect(|_| pulled += 1);
        let out: Vec<_> = limit(query(source, &filters), Some(2)).collect();

        assert_eq!(out.len(), 2);
        assert_eq!(pulled, 2);
    }
}
