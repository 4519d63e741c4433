//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod install;
pub mod list;
pub mod max;
pub mod order;
pub mod stats;
pub mod tree;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::PackageManifest;
use crate::dependency::PackageResolver;

/// Output format shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Text format (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Options that apply to every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Manifest to read packages from
    pub manifest: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Verbose output requested
    pub verbose: bool,
}

impl GlobalOptions {
    /// Load the manifest and build a resolver from it
    pub fn load_resolver(&self) -> Result<PackageResolver> {
        let manifest = PackageManifest::load_from(&self.manifest).with_context(|| {
            format!(
                "Failed to load package manifest {}",
                self.manifest.display()
            )
        })?;

        Ok(PackageResolver::from_records(&manifest.packages))
    }

    /// Whether text output was requested
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }
}

/// Package names from a resolver, sorted
pub(crate) fn sorted_packages(resolver: &PackageResolver) -> Vec<String> {
    let mut packages: Vec<String> = resolver.all_packages().iter().cloned().collect();
    packages.sort();
    packages
}
