//! Max command - Package with the most transitive dependencies

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::GlobalOptions;
use crate::utils::terminal::{print_info, print_json, print_warning};

/// Find the package with the most transitive dependencies
#[derive(Args, Debug)]
pub struct MaxCommand {}

#[derive(Serialize, Debug)]
struct MaxJson {
    package: Option<String>,
    dependencies: usize,
}

impl MaxCommand {
    /// Execute the max command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;

        let result = match resolver.package_with_max_dependencies()? {
            Some(pkg) => {
                let count = resolver.dependency_count(&pkg)?;
                MaxJson {
                    package: Some(pkg),
                    dependencies: count,
                }
            }
            None => MaxJson {
                package: None,
                dependencies: 0,
            },
        };

        if !opts.is_text() {
            return print_json(&result);
        }

        match result.package {
            Some(pkg) => print_info(&format!(
                "'{}' has the most dependencies ({})",
                pkg, result.dependencies
            )),
            None => print_warning("Manifest contains no packages"),
        }
        Ok(())
    }
}
