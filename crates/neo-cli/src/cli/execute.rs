//! Command execution functions.
//!
//! Each function takes the loaded [`App`], the parsed arguments and a writer,
//! so commands can be exercised in tests without a terminal.

use anyhow::{Context, Result};
use neo_core::{CloseApproach, FilterSet, NearEarthObject, NeoDatabase, create_filters, parse_criterion};
use std::io::Write;

use super::args::{InspectArgs, QueryArgs};
use crate::app::App;
use crate::error::Error;
use crate::output::{OutputConfig, OutputMode, print_approaches, print_neo};

/// Maximum number of name suggestions offered when a lookup misses
const MAX_SUGGESTIONS: usize = 5;

/// Execute the `inspect` command
pub fn execute_inspect<W: Write>(
    app: &App,
    args: &InspectArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let neo = find_neo(app.database(), args)?;
    print_neo(out, app.database(), neo, args.verbose, mode, config)?;
    Ok(())
}

fn find_neo<'a>(db: &'a NeoDatabase, args: &InspectArgs) -> Result<&'a NearEarthObject> {
    if let Some(pdes) = &args.pdes {
        return db
            .get_neo_by_designation(pdes)
            .ok_or_else(|| Error::NeoNotFound(format!("designation '{pdes}'")).into());
    }

    let name = args.name.as_deref().unwrap_or_default();
    db.get_neo_by_name(name).ok_or_else(|| {
        let suggestions: Vec<String> = db
            .names_with_prefix(name)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .collect();
        let message = if suggestions.is_empty() {
            format!("name '{name}'")
        } else {
            format!("name '{name}' (did you mean: {}?)", suggestions.join(", "))
        };
        Error::NeoNotFound(message).into()
    })
}

/// Build the filter set for a query: named criteria first, then `--where`
/// expressions in the order given.
pub fn build_filters(args: &QueryArgs) -> Result<FilterSet> {
    let mut filters = create_filters(&args.criteria());
    for expression in &args.expressions {
        let predicate = parse_criterion(expression)
            .map_err(Error::from)
            .with_context(|| format!("Invalid --where expression '{expression}'"))?;
        filters.push_boxed(predicate);
    }
    Ok(filters)
}

/// Run a query and collect its (limited) results.
///
/// `default_limit` applies when `--limit` is not given; a limit of 0 means
/// no limit.
pub fn run_query<'a>(
    db: &'a NeoDatabase,
    args: &QueryArgs,
    default_limit: usize,
) -> Result<Vec<&'a CloseApproach>> {
    let filters = build_filters(args)?;
    let limit = args.limit.unwrap_or(default_limit);
    tracing::debug!(filters = ?filters, limit, "running query");

    let results = neo_core::limit(db.query(&filters), Some(limit))
        .collect::<neo_core::Result<Vec<_>>>()
        .map_err(Error::from)
        .context("Query failed")?;

    tracing::info!(matches = results.len(), "query complete");
    Ok(results)
}

/// Execute the `query` command
pub fn execute_query<W: Write>(
    app: &App,
    args: &QueryArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let results = run_query(app.database(), args, app.config().query.default_limit)?;
    print_approaches(out, app.database(), &results, mode, config)?;
    Ok(())
}
