//! Neo - explore near-Earth object close approaches from the command line.
//!
//! This crate provides the `neo` binary and the pieces it is built from:
//! argument parsing, configuration loading and output formatting. Data
//! loading and querying live in `neo-core`.

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
