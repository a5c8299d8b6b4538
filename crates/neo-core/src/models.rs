//! Record types for near-Earth objects and their close approaches.
//!
//! Records are built by the loaders in [`crate::extract`] and handed to
//! [`crate::NeoDatabase`], which links each close approach to its NEO. After
//! that the database only hands out shared references, so records are never
//! mutated again.

use chrono::{NaiveDate, NaiveDateTime};

/// Format used when displaying approach times.
pub const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Handle of a NEO inside a [`crate::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position of the NEO in the database's NEO collection.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of a close approach inside a [`crate::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Position of the approach in the database's approach collection.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A near-Earth object.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Primary designation, e.g. `"433"` or `"2015 CL"`.
    pub designation: String,

    /// IAU name, if the object has one.
    pub name: Option<String>,

    /// Diameter in kilometers, if known.
    pub diameter: Option<f64>,

    /// Whether the object is potentially hazardous.
    pub hazardous: bool,

    pub(crate) approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Create a NEO that is not yet linked to any approaches.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Designation followed by the name in parentheses when there is one.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Close approaches linked to this NEO, in dataset order.
    #[must_use]
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }
}

/// A single close approach of a NEO to Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    /// Designation of the approaching NEO.
    pub designation: String,

    /// Time of closest approach (TDB).
    pub time: NaiveDateTime,

    /// Nominal approach distance in astronomical units.
    pub distance: f64,

    /// Velocity relative to Earth in km/s.
    pub velocity: f64,

    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    /// Create an approach that is not yet linked to its NEO.
    pub fn new(designation: impl Into<String>, time: NaiveDateTime, distance: f64, velocity: f64) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Calendar date of the approach.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Approach time formatted for display.
    #[must_use]
    pub fn time_str(&self) -> String {
        self.time.format(TIME_DISPLAY_FORMAT).to_string()
    }

    /// Handle of the linked NEO, once linked by a database.
    #[must_use]
    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo
    }
}

/// A close approach together with its resolved NEO.
///
/// This is what filters evaluate against: approach attributes come straight
/// from the record, NEO attributes go through `neo`.
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    /// The approach itself.
    pub approach: &'a CloseApproach,
    /// The NEO it belongs to, if linked.
    pub neo: Option<&'a NearEarthObject>,
}

impl<'a> ApproachView<'a> {
    /// Pair an approach with its NEO.
    #[must_use]
    pub fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self { approach, neo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn fullname_includes_name_when_present() {
        let neo = NearEarthObject::new("433", Some("Eros".to_string()), Some(16.84), false);
        assert_eq!(neo.fullname(), "433 (Eros)");

        let unnamed = NearEarthObject::new("2015 CL", None, None, false);
        assert_eq!(unnamed.fullname(), "2015 CL");
    }

    #[test]
    fn approach_date_drops_time_of_day() {
        let ca = CloseApproach::new("2015 CL", time(2000, 1, 1, 23, 59), 0.5, 10.0);
        assert_eq!(ca.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(ca.time_str(), "2000-01-01 23:59");
    }

    #[test]
    fn new_records_are_unlinked() {
        let ca = CloseApproach::new("2015 CL", time(2000, 1, 1, 0, 0), 0.5, 10.0);
        assert!(ca.neo_id().is_none());

        let neo = NearEarthObject::new("2015 CL", None, None, false);
        assert!(neo.approaches().is_empty());
    }
}
