//! Error types and helpers for user-friendly error messages
//!
//! Resolution failures carry enough context to print an actionable hint.

use thiserror::Error;

/// Errors raised by installation-order queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The queried package is not in the dependency graph
    #[error("Package '{package}' not found")]
    PackageNotFound { package: String },

    /// A dependency cycle was reached while resolving
    ///
    /// `cycle` starts and ends with the same package.
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    Cycle { cycle: Vec<String> },
}

impl ResolveError {
    /// Create a package-not-found error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        Self::PackageNotFound {
            package: package.into(),
        }
    }

    /// Create a cycle error from the packages on the cycle, closing the loop
    pub fn cycle(mut path: Vec<String>) -> Self {
        if let Some(first) = path.first().cloned() {
            path.push(first);
        }
        Self::Cycle { cycle: path }
    }

    /// Get a hint for resolving this error
    pub fn hint(&self) -> String {
        match self {
            ResolveError::PackageNotFound { .. } => {
                "Check the package name for typos.\n\
                 Run: pkgorder list to see every package in the manifest"
                    .to_string()
            }
            ResolveError::Cycle { cycle } => {
                let first = cycle.first().map(String::as_str).unwrap_or("");
                format!(
                    "These packages depend on each other, so none of them can be installed first.\n\
                     Remove one of the dependencies on the cycle, or run: pkgorder tree {}",
                    first
                )
            }
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);
        eprintln!("\n{} {}", style("HINT:").yellow().bold(), self.hint());
        eprintln!();
    }
}

/// A specialized Result type for resolver queries
pub type Result<T> = std::result::Result<T, ResolveError>;
