//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    install::InstallCommand, list::ListCommand, max::MaxCommand, order::OrderAllCommand,
    order::OrderCommand, stats::StatsCommand, tree::TreeCommand, GlobalOptions, OutputFormat,
};
use crate::config::DEFAULT_MANIFEST;

/// pkgorder - package installation order resolver
///
/// Reads a manifest of packages and their dependencies and works out the
/// order in which they have to be installed.
#[derive(Parser, Debug)]
#[command(name = "pkgorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the package manifest (.json or .toml)
    #[arg(
        short,
        long,
        global = true,
        env = "PKGORDER_MANIFEST",
        default_value = DEFAULT_MANIFEST
    )]
    pub manifest: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every package in the manifest
    List(ListCommand),

    /// Show the installation order for one package
    Order(OrderCommand),

    /// Show an installation order covering every package
    OrderAll(OrderAllCommand),

    /// Show what must be installed when another package is already present
    Install(InstallCommand),

    /// Find the package with the most transitive dependencies
    Max(MaxCommand),

    /// Display the dependency tree of a package
    Tree(TreeCommand),

    /// Show manifest statistics
    Stats(StatsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let opts = GlobalOptions {
            manifest: self.manifest,
            format: self.format,
            verbose: self.verbose,
        };

        match self.command {
            Commands::List(cmd) => cmd.execute(&opts),
            Commands::Order(cmd) => cmd.execute(&opts),
            Commands::OrderAll(cmd) => cmd.execute(&opts),
            Commands::Install(cmd) => cmd.execute(&opts),
            Commands::Max(cmd) => cmd.execute(&opts),
            Commands::Tree(cmd) => cmd.execute(&opts),
            Commands::Stats(cmd) => cmd.execute(&opts),
        }
    }
}
