//! pkgorder - package installation order resolution
//!
//! The core is [`dependency::PackageResolver`], which loads package records
//! into a [`dependency::DependencyGraph`] and answers installation-order
//! queries. The remaining modules load manifests and drive the CLI.
//!
//! ```
//! use pkgorder::dependency::{PackageRecord, PackageResolver};
//!
//! let records = vec![
//!     PackageRecord::new("A", vec!["B", "C"]),
//!     PackageRecord::new("B", vec!["D"]),
//!     PackageRecord::new("C", vec!["D"]),
//! ];
//! let resolver = PackageResolver::from_records(&records);
//!
//! assert_eq!(resolver.installation_order("A").unwrap(), ["D", "B", "C", "A"]);
//! assert_eq!(resolver.to_install("A", "B").unwrap(), ["C", "A"]);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dependency;
pub mod error;
pub mod utils;

pub use error::ResolveError;
