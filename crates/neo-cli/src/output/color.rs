//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Error/Hazard:   red     (hazardous objects, failures)
//!   - Success/Safe:   green   (non-hazardous objects)
//!   - Warning:        yellow  (empty results, unknown values)
//!   - Info/Reference: cyan    (designations and names)
//!   - Muted:          dimmed  (units)

use colored::{Color, Colorize};

use super::OutputConfig;

fn paint(text: &str, color: Color, config: &OutputConfig) -> String {
    if config.use_colors {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Green, for safe objects.
pub(crate) fn success(text: &str, config: &OutputConfig) -> String {
    paint(text, Color::Green, config)
}

/// Red, for hazardous objects.
pub(crate) fn error(text: &str, config: &OutputConfig) -> String {
    paint(text, Color::Red, config)
}

/// Yellow, for empty results and unknown values.
pub(crate) fn warning(text: &str, config: &OutputConfig) -> String {
    paint(text, Color::Yellow, config)
}

/// Cyan, for designations and names.
pub(crate) fn info(text: &str, config: &OutputConfig) -> String {
    paint(text, Color::Cyan, config)
}

/// Dim a unit or other secondary text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if config.use_colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Describe the hazard flag, red when hazardous.
pub(crate) fn colorize_hazard(hazardous: bool, config: &OutputConfig) -> String {
    if hazardous {
        error("is", config)
    } else {
        success("is not", config)
    }
}
