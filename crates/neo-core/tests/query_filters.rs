//! Integration tests for building filters and querying a linked database.

use chrono::{NaiveDate, NaiveDateTime};
use neo_core::{
    CloseApproach, Criteria, Error, FilterSet, NearEarthObject, NeoDatabase, create_filters, limit,
    parse_criterion,
};
use rstest::{fixture, rstest};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn designations(db: &NeoDatabase, filters: &FilterSet, n: Option<usize>) -> Vec<String> {
    limit(db.query(filters), n)
        .map(|r| r.map(|ca| ca.designation.clone()))
        .collect::<neo_core::Result<_>>()
        .expect("query should succeed")
}

/// Two NEOs with one approach each: a hazardous one with a known diameter
/// and a harmless one with an unknown diameter.
#[fixture]
fn scenario() -> NeoDatabase {
    NeoDatabase::new(
        vec![
            NearEarthObject::new("2015 CL", None, Some(1.2), true),
            NearEarthObject::new("2002 PB", None, None, false),
        ],
        vec![
            CloseApproach::new("2015 CL", at(2000, 1, 1, 0, 12), 0.5, 12.4),
            CloseApproach::new("2002 PB", at(2000, 1, 2, 19, 30), 0.9, 4.1),
        ],
    )
}

// ============================================================================
// Scenario
// ============================================================================

#[rstest]
fn date_selects_first(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        date: Some(day(2000, 1, 1)),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), vec!["2015 CL"]);
}

#[rstest]
fn not_hazardous_selects_second(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        hazardous: Some(false),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), vec!["2002 PB"]);
}

#[rstest]
fn hazardous_selects_first(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        hazardous: Some(true),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), vec!["2015 CL"]);
}

#[rstest]
fn unconstrained_hazard_keeps_both(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        hazardous: None,
        ..Criteria::default()
    });
    assert!(filters.is_empty());
    assert_eq!(
        designations(&scenario, &filters, None),
        vec!["2015 CL", "2002 PB"]
    );
}

#[rstest]
fn distance_max_selects_first(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        distance_max: Some(0.6),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), vec!["2015 CL"]);
}

#[rstest]
fn limit_one_keeps_original_order(scenario: NeoDatabase) {
    let filters = FilterSet::new();
    assert_eq!(designations(&scenario, &filters, Some(1)), vec!["2015 CL"]);
}

#[rstest]
fn diameter_filter_skips_unknown_diameter(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        diameter_max: Some(100.0),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), vec!["2015 CL"]);
}

#[rstest]
#[case::same_day(Some(day(2000, 1, 2)), None, vec!["2002 PB"])]
#[case::start_inclusive(None, Some(day(2000, 1, 1)), vec!["2015 CL", "2002 PB"])]
#[case::start_excludes_earlier(None, Some(day(2000, 1, 2)), vec!["2002 PB"])]
fn date_ignores_time_of_day(
    scenario: NeoDatabase,
    #[case] date: Option<NaiveDate>,
    #[case] start_date: Option<NaiveDate>,
    #[case] expected: Vec<&str>,
) {
    let filters = create_filters(&Criteria {
        date,
        start_date,
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None), expected);
}

#[rstest]
fn end_date_is_inclusive(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        end_date: Some(day(2000, 1, 2)),
        ..Criteria::default()
    });
    assert_eq!(designations(&scenario, &filters, None).len(), 2);
}

#[rstest]
fn rebuilt_filters_behave_the_same(scenario: NeoDatabase) {
    let criteria = Criteria {
        velocity_min: Some(5.0),
        diameter_min: Some(1.0),
        ..Criteria::default()
    };
    let first = create_filters(&criteria);
    let second = create_filters(&criteria);
    assert_eq!(
        designations(&scenario, &first, None),
        designations(&scenario, &second, None)
    );
}

#[rstest]
fn expressions_combine_with_named_criteria(scenario: NeoDatabase) {
    let filters = create_filters(&Criteria {
        start_date: Some(day(2000, 1, 1)),
        ..Criteria::default()
    });
    let mut extra = FilterSet::new();
    extra.push_boxed(parse_criterion("velocity<=5").unwrap());

    let combined = filters.and(extra);
    assert_eq!(designations(&scenario, &combined, None), vec!["2002 PB"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unlinked_approach_aborts_neo_attribute_query() {
    let db = NeoDatabase::new(
        vec![NearEarthObject::new("433", Some("Eros".to_string()), None, false)],
        vec![
            CloseApproach::new("433", at(2000, 1, 1, 0, 0), 0.2, 5.0),
            CloseApproach::new("ghost", at(2000, 1, 1, 0, 0), 0.2, 5.0),
            CloseApproach::new("433", at(2000, 1, 1, 0, 0), 0.2, 5.0),
        ],
    );
    let filters = create_filters(&Criteria {
        hazardous: Some(false),
        ..Criteria::default()
    });

    let result: neo_core::Result<Vec<&CloseApproach>> = db.query(&filters).collect();
    assert!(matches!(
        result,
        Err(Error::UnlinkedApproach { designation }) if designation == "ghost"
    ));
}

#[test]
fn approach_only_filters_ignore_missing_neo() {
    let db = NeoDatabase::new(
        Vec::new(),
        vec![CloseApproach::new("ghost", at(2000, 1, 1, 0, 0), 0.2, 5.0)],
    );
    let filters = create_filters(&Criteria {
        distance_max: Some(1.0),
        ..Criteria::default()
    });
    assert_eq!(designations(&db, &filters, None), vec!["ghost"]);
}
