//! Neo CLI binary.

use anyhow::Result;
use neo_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the neo CLI.
fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=neo=debug,neo_core=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("neo=info,neo_cli=info,neo_core=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting neo CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Neo CLI completed successfully");
    Ok(())
}
