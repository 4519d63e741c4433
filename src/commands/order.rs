//! Order commands - Show installation orders
//!
//! Usage:
//!   pkgorder order <package>     # Order for one package and its dependencies
//!   pkgorder order-all           # Order covering every package

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::commands::GlobalOptions;
use crate::dependency::PackageResolver;
use crate::utils::terminal::{print_info, print_json, print_numbered};

/// Show the installation order for one package
#[derive(Args, Debug)]
pub struct OrderCommand {
    /// Package to install
    pub package: String,
}

/// Show an installation order covering every package
#[derive(Args, Debug)]
pub struct OrderAllCommand {}

#[derive(Serialize, Debug)]
struct OrderJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<&'a str>,
    order: &'a [String],
}

impl OrderCommand {
    /// Execute the order command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let order = resolver.installation_order(&self.package)?;

        if !opts.is_text() {
            return print_json(&OrderJson {
                package: Some(&self.package),
                order: &order,
            });
        }

        print_info(&format!(
            "Installation order for '{}' ({} packages)",
            self.package,
            order.len()
        ));
        print_order(&resolver, &order, opts.verbose);
        Ok(())
    }
}

impl OrderAllCommand {
    /// Execute the order-all command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let order = resolver.installation_order_for_all()?;

        if !opts.is_text() {
            return print_json(&OrderJson {
                package: None,
                order: &order,
            });
        }

        print_info(&format!(
            "Installation order for all packages ({} packages)",
            order.len()
        ));
        print_order(&resolver, &order, opts.verbose);
        Ok(())
    }
}

/// Print an order, with each package's direct dependencies when verbose
fn print_order(resolver: &PackageResolver, order: &[String], verbose: bool) {
    if !verbose {
        print_numbered(order);
        return;
    }

    let width = order.len().to_string().len();
    for (i, pkg) in order.iter().enumerate() {
        let deps = resolver.graph().adjacent_of(pkg).unwrap_or_default();
        if deps.is_empty() {
            println!("{:>width$}. {}", i + 1, pkg, width = width);
        } else {
            println!(
                "{:>width$}. {} {}",
                i + 1,
                pkg,
                style(format!("(after {})", deps.join(", "))).dim(),
                width = width
            );
        }
    }
}
