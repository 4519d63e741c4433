//! Dependency management module
//!
//! This module provides the package dependency graph and installation-order
//! resolution on top of it.

pub mod graph;
pub mod resolver;

pub use graph::{DependencyGraph, GraphStats};
pub use resolver::{PackageRecord, PackageResolver};
