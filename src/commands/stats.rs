//! Stats command - Manifest statistics

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::GlobalOptions;
use crate::utils::terminal::print_json;

/// Show manifest statistics
#[derive(Args, Debug)]
pub struct StatsCommand {}

#[derive(Serialize, Debug)]
struct StatsJson {
    packages: usize,
    edges: usize,
    leaves: usize,
    roots: usize,
}

impl StatsCommand {
    /// Execute the stats command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let stats = resolver.graph().stats();

        if !opts.is_text() {
            return print_json(&StatsJson {
                packages: stats.packages,
                edges: stats.edges,
                leaves: stats.leaves,
                roots: stats.roots,
            });
        }

        println!("Packages:      {}", stats.packages);
        println!("Dependencies:  {}", stats.edges);
        println!("Leaf packages: {}", stats.leaves);
        println!("Root packages: {}", stats.roots);
        Ok(())
    }
}
