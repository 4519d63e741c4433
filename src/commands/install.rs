//! Install command - Packages needed on top of an installed package

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::GlobalOptions;
use crate::utils::terminal::{print_info, print_json, print_numbered, print_success};

/// Show what must be newly installed
#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Package to install
    pub package: String,

    /// Package that is already installed, along with its dependencies
    #[arg(long, short = 'i')]
    pub installed: String,
}

#[derive(Serialize, Debug)]
struct InstallJson<'a> {
    package: &'a str,
    installed: &'a str,
    to_install: &'a [String],
}

impl InstallCommand {
    /// Execute the install command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let to_install = resolver.to_install(&self.package, &self.installed)?;

        if !opts.is_text() {
            return print_json(&InstallJson {
                package: &self.package,
                installed: &self.installed,
                to_install: &to_install,
            });
        }

        if to_install.is_empty() {
            print_success(&format!(
                "'{}' is already installed as part of '{}'",
                self.package, self.installed
            ));
            return Ok(());
        }

        print_info(&format!(
            "{} new packages needed for '{}' (with '{}' installed)",
            to_install.len(),
            self.package,
            self.installed
        ));
        print_numbered(&to_install);
        Ok(())
    }
}
