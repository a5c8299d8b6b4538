//! JSON output for programmatic use.

use neo_core::{CloseApproach, NearEarthObject, NeoDatabase};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub(super) struct NeoJson<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> NeoJson<'a> {
    pub(super) fn new(neo: &'a NearEarthObject) -> Self {
        Self {
            designation: &neo.designation,
            name: neo.name.as_deref().unwrap_or_default(),
            diameter_km: neo.diameter,
            potentially_hazardous: neo.hazardous,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ApproachJson<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: Option<NeoJson<'a>>,
}

impl<'a> ApproachJson<'a> {
    pub(super) fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: neo.map(NeoJson::new),
        }
    }
}

#[derive(Debug, Serialize)]
struct NeoDetailsJson<'a> {
    #[serde(flatten)]
    neo: NeoJson<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    approaches: Option<Vec<ApproachJson<'a>>>,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

pub(super) fn print_approaches_json<W: Write>(
    out: &mut W,
    db: &NeoDatabase,
    approaches: &[&CloseApproach],
) -> io::Result<()> {
    let rows: Vec<ApproachJson<'_>> = approaches
        .iter()
        .map(|ca| ApproachJson::new(ca, db.neo_of(ca)))
        .collect();
    write_json(out, &rows)
}

pub(super) fn print_neo_json<W: Write>(
    out: &mut W,
    db: &NeoDatabase,
    neo: &NearEarthObject,
    verbose: bool,
) -> io::Result<()> {
    let approaches = verbose.then(|| {
        db.approaches_of(neo)
            .map(|ca| ApproachJson::new(ca, None))
            .collect()
    });
    write_json(
        out,
        &NeoDetailsJson {
            neo: NeoJson::new(neo),
            approaches,
        },
    )
}
