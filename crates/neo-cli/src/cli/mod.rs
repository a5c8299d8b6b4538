//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for neo using clap's derive API.
//!
//! # Commands
//!
//! - `inspect`: Show one NEO, looked up by designation or name
//! - `query`: List close approaches matching the given criteria
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--neofile`, `--cadfile`: Override the configured data files
//! - `--config`: Read configuration from this YAML file
//!
//! # Example
//!
//! ```bash
//! neo inspect --name Eros --verbose
//! neo query --start-date 2020-01-01 --end-date 2020-12-31 --max-distance 0.05 --hazardous
//! neo query --where "velocity>=20" --limit 5 --json
//! ```

mod args;
mod execute;
mod validators;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{InspectArgs, QueryArgs};
pub use execute::{build_filters, execute_inspect, execute_query, run_query};
pub use validators::{parse_date, parse_non_negative, validate_expression};

/// Neo - explore near-Earth objects and their close approaches
///
/// Loads NEOs from a CSV file and close approaches from a JSON file, then
/// inspects single objects or queries approaches by date, distance,
/// velocity, diameter and hazard.
#[derive(Parser, Debug)]
#[command(name = "neo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a YAML configuration file (default: ./neo.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the NEO CSV file
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach JSON file
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show a near-Earth object
    ///
    /// Looks the NEO up by primary designation or by IAU name. With
    /// `--verbose`, its close approaches are listed too.
    Inspect(InspectArgs),

    /// Query close approaches
    ///
    /// Lists close approaches matching every given criterion, in data file
    /// order, up to the configured or requested limit.
    Query(QueryArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::app::{App, DataOverrides};
        use crate::config::NeoConfig;
        use crate::output::{OutputConfig, OutputMode};

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let working_dir = std::env::current_dir()?;
        let config = NeoConfig::discover(self.config.as_deref(), &working_dir)
            .context("Failed to load configuration")?;
        let output_config = OutputConfig::resolve(config.output.colors && !self.no_color);

        let overrides = DataOverrides {
            neofile: self.neofile.clone(),
            cadfile: self.cadfile.clone(),
        };
        let app = App::load(config, overrides, &working_dir).context("Failed to load data")?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match &self.command {
            Commands::Inspect(args) => {
                execute::execute_inspect(&app, args, &mut out, output_mode, &output_config)
            }
            Commands::Query(args) => {
                execute::execute_query(&app, args, &mut out, output_mode, &output_config)
            }
        }
    }
}
