//! pkgorder CLI - resolve package installation orders from a manifest
//!
//! ## Architecture
//!
//! ```text
//! manifest (.json/.toml) → PackageManifest → PackageResolver → commands
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgorder::cli::Cli;
use pkgorder::ResolveError;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence, e.g. RUST_LOG=pkgorder=trace
    let default_filter = if cli.verbose {
        "pkgorder=debug"
    } else {
        "pkgorder=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.execute() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ResolveError>() {
            Some(resolve_err) => {
                resolve_err.display_with_hints();
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
