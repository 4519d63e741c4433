//! List command - Show every package in the manifest

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::{sorted_packages, GlobalOptions};
use crate::utils::terminal::{print_info, print_json};

/// List every package
#[derive(Args, Debug)]
pub struct ListCommand {}

#[derive(Serialize, Debug)]
struct ListJson {
    packages: Vec<String>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let packages = sorted_packages(&resolver);

        if !opts.is_text() {
            return print_json(&ListJson { packages });
        }

        print_info(&format!("{} packages", packages.len()));
        for pkg in &packages {
            println!("  {}", pkg);
        }
        Ok(())
    }
}
