//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - `color`: Color and styling helpers
//! - `json`: JSON serialization for programmatic output

mod color;
mod json;

use neo_core::{CloseApproach, NearEarthObject, NeoDatabase};
use std::env;
use std::io::{self, Write};

use color::{colorize_hazard, dimmed, info, warning};
use json::{print_approaches_json, print_neo_json};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Resolve color use from the configured preference and the environment.
    ///
    /// `NO_COLOR` (any value) disables colors regardless of the preference.
    #[must_use]
    pub fn resolve(colors_preferred: bool) -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(colors_preferred && !no_color)
    }
}

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Rendering
// ============================================================================

fn format_distance(distance: f64, config: &OutputConfig) -> String {
    format!("{distance:.2} {}", dimmed("au", config))
}

fn format_velocity(velocity: f64, config: &OutputConfig) -> String {
    format!("{velocity:.2} {}", dimmed("km/s", config))
}

fn format_diameter(diameter: Option<f64>, config: &OutputConfig) -> String {
    match diameter {
        Some(d) => format!("a diameter of {d:.3} {}", dimmed("km", config)),
        None => format!("an {} diameter", warning("unknown", config)),
    }
}

/// Render one close approach as a sentence.
#[must_use]
pub fn format_approach(
    approach: &CloseApproach,
    neo: Option<&NearEarthObject>,
    config: &OutputConfig,
) -> String {
    let name = neo.map_or_else(|| approach.designation.clone(), NearEarthObject::fullname);
    format!(
        "On {}, '{}' approaches Earth at a distance of {} and a velocity of {}.",
        approach.time_str(),
        info(&name, config),
        format_distance(approach.distance, config),
        format_velocity(approach.velocity, config)
    )
}

/// Render a NEO as a sentence.
#[must_use]
pub fn format_neo(neo: &NearEarthObject, config: &OutputConfig) -> String {
    format!(
        "NEO {} has {} and {} potentially hazardous.",
        info(&neo.fullname(), config),
        format_diameter(neo.diameter, config),
        colorize_hazard(neo.hazardous, config)
    )
}

/// Print query results.
pub fn print_approaches<W: Write>(
    out: &mut W,
    db: &NeoDatabase,
    approaches: &[&CloseApproach],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_approaches_json(out, db, approaches),
        OutputMode::Text => {
            if approaches.is_empty() {
                return writeln!(
                    out,
                    "{}",
                    warning("No close approaches match the given criteria.", config)
                );
            }
            for approach in approaches {
                writeln!(out, "{}", format_approach(approach, db.neo_of(approach), config))?;
            }
            Ok(())
        }
    }
}

/// Print a NEO and, when `verbose`, its close approaches.
pub fn print_neo<W: Write>(
    out: &mut W,
    db: &NeoDatabase,
    neo: &NearEarthObject,
    verbose: bool,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_neo_json(out, db, neo, verbose),
        OutputMode::Text => {
            writeln!(out, "{}", format_neo(neo, config))?;
            if verbose {
                for approach in db.approaches_of(neo) {
                    writeln!(out, "- {}", format_approach(approach, Some(neo), config))?;
                }
            }
            Ok(())
        }
    }
}
