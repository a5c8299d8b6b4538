//! Loading NEOs from CSV and close approaches from JSON.
//!
//! The NEO file is a CSV export with (at least) the columns `pdes`, `name`,
//! `diameter` and `pha`. The close-approach file is a JSON document of the
//! form `{"fields": [...], "data": [[...], ...]}` where each data row lines up
//! with `fields`; the columns `des`, `cd`, `dist` and `v_rel` are used.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{CloseApproach, NearEarthObject};

/// Format of the `cd` (close-approach date) column, e.g. `2000-Jan-01 00:12`.
pub const APPROACH_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    diameter: Option<String>,
    #[serde(default)]
    pha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Read NEOs from a CSV file.
///
/// # Errors
///
/// Fails if the file cannot be opened or any row is malformed.
pub fn load_neos(path: impl AsRef<Path>) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading NEOs");
    let neos = read_neos(BufReader::new(File::open(path)?))?;
    tracing::info!(count = neos.len(), "loaded NEOs");
    Ok(neos)
}

/// Read NEOs from CSV data.
///
/// Empty `name` and `diameter` fields become `None`; `pha` is `false` when
/// empty or `N` and `true` otherwise.
///
/// # Errors
///
/// Returns [`Error::Csv`] for undecodable rows and [`Error::InvalidRecord`]
/// for an empty designation or a diameter that is not a finite number.
pub fn read_neos<R: Read>(reader: R) -> Result<Vec<NearEarthObject>> {
    let mut rows = csv::Reader::from_reader(reader);
    let mut neos = Vec::new();

    for (index, row) in rows.deserialize::<NeoRow>().enumerate() {
        let row_number = index + 1;
        let row = row?;

        let designation = row.pdes.trim();
        if designation.is_empty() {
            return Err(Error::InvalidRecord {
                row: row_number,
                message: "empty designation".to_string(),
            });
        }

        let name = non_empty(row.name.as_deref()).map(str::to_string);
        let diameter = non_empty(row.diameter.as_deref())
            .map(|d| parse_finite(d, "diameter", row_number))
            .transpose()?;
        let hazardous = !matches!(non_empty(row.pha.as_deref()), None | Some("N"));

        neos.push(NearEarthObject::new(designation, name, diameter, hazardous));
    }

    Ok(neos)
}

/// Read close approaches from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be opened or the document is malformed.
pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading close approaches");
    let approaches = read_approaches(BufReader::new(File::open(path)?))?;
    tracing::info!(count = approaches.len(), "loaded close approaches");
    Ok(approaches)
}

/// Read close approaches from JSON data.
///
/// Numeric columns may be given as JSON numbers or as strings and must be
/// finite.
///
/// # Errors
///
/// Returns [`Error::Json`] for invalid JSON, [`Error::MissingColumn`] when a
/// required field is absent, and [`Error::InvalidRecord`] for bad rows.
pub fn read_approaches<R: Read>(reader: R) -> Result<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;

    let column = |name: &'static str| {
        document
            .fields
            .iter()
            .position(|field| field == name)
            .ok_or(Error::MissingColumn(name))
    };
    let des = column("des")?;
    let cd = column("cd")?;
    let dist = column("dist")?;
    let v_rel = column("v_rel")?;

    document
        .data
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let row_number = index + 1;
            let field = |at: usize, name: &str| {
                row.get(at)
                    .and_then(value_as_str)
                    .ok_or_else(|| Error::InvalidRecord {
                        row: row_number,
                        message: format!("missing {name}"),
                    })
            };
            let number = |at: usize, name: &str| -> Result<f64> {
                parse_finite(&field(at, name)?, name, row_number)
            };

            let designation = field(des, "des")?;
            let raw_time = field(cd, "cd")?;
            let time = NaiveDateTime::parse_from_str(&raw_time, APPROACH_TIME_FORMAT).map_err(
                |e| Error::InvalidRecord {
                    row: row_number,
                    message: format!("cd '{raw_time}': {e}"),
                },
            )?;

            Ok(CloseApproach::new(
                designation,
                time,
                number(dist, "dist")?,
                number(v_rel, "v_rel")?,
            ))
        })
        .collect()
}

/// Parse a numeric column, rejecting `nan` and infinities.
fn parse_finite(raw: &str, name: &str, row: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(Error::InvalidRecord {
            row,
            message: format!("{name} '{raw}' is not a finite number"),
        }),
        Err(e) => Err(Error::InvalidRecord {
            row,
            message: format!("{name} '{raw}': {e}"),
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn value_as_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
