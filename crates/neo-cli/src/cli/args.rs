//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use neo_core::Criteria;

use super::validators::{parse_date, parse_non_negative, validate_expression};

/// Arguments for the `inspect` command
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO (e.g. "433" or "2015 CL")
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO (e.g. "Eros")
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also list the NEO's close approaches
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `query` command
#[derive(Parser, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long = "min-distance", value_parser = parse_non_negative)]
    pub distance_min: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long = "max-distance", value_parser = parse_non_negative)]
    pub distance_max: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long = "min-velocity", value_parser = parse_non_negative)]
    pub velocity_min: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long = "max-velocity", value_parser = parse_non_negative)]
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long = "min-diameter", value_parser = parse_non_negative)]
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long = "max-diameter", value_parser = parse_non_negative)]
    pub diameter_max: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Extra criterion such as "velocity>=20" (repeatable)
    ///
    /// Attributes: date, distance, velocity, diameter, hazardous.
    /// Operators: =, <=, >=.
    #[arg(short = 'w', long = "where", value_parser = validate_expression)]
    pub expressions: Vec<String>,

    /// Maximum number of results (0 for no limit; defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl QueryArgs {
    /// Tri-state hazard constraint: the two flags map to `Some(true)` and
    /// `Some(false)`, neither to `None`.
    #[must_use]
    pub fn hazard(&self) -> Option<bool> {
        match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Collect the named criteria.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.distance_min,
            distance_max: self.distance_max,
            velocity_min: self.velocity_min,
            velocity_max: self.velocity_max,
            diameter_min: self.diameter_min,
            diameter_max: self.diameter_max,
            hazardous: self.hazard(),
        }
    }
}
