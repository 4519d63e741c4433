//! Installation-order resolution over a dependency graph
//!
//! The resolver is populated once from a list of package records and then
//! answers ordering and closure queries. "Already installed" is passed in per
//! query, nothing is remembered between calls.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dependency::graph::DependencyGraph;
use crate::error::{ResolveError, Result};

/// A package and the names of its direct dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package name
    pub name: String,

    /// Direct dependencies, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl PackageRecord {
    /// Create a record from a name and its dependency names
    pub fn new<S: Into<String>>(name: impl Into<String>, dependencies: Vec<S>) -> Self {
        Self {
            name: name.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolves installation orders for packages in a dependency graph
#[derive(Debug, Clone, Default)]
pub struct PackageResolver {
    graph: DependencyGraph,
}

impl PackageResolver {
    /// Create a resolver with an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver and load the given records into it
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a PackageRecord>) -> Self {
        let mut resolver = Self::new();
        resolver.load(records);
        resolver
    }

    /// Add every record's package and its dependency edges to the graph
    ///
    /// Records with an empty name are skipped. Loading is order independent.
    pub fn load<'a>(&mut self, records: impl IntoIterator<Item = &'a PackageRecord>) {
        for record in records {
            if record.name.is_empty() {
                continue;
            }

            debug!(
                package = %record.name,
                dependencies = record.dependencies.len(),
                "loading package"
            );

            self.graph.add_vertex(&record.name);
            for dep in &record.dependencies {
                self.graph.add_edge(&record.name, dep);
            }
        }

        debug!(
            packages = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "dependency graph loaded"
        );
    }

    /// Get the underlying dependency graph
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// All packages, in no particular order
    pub fn all_packages(&self) -> &HashSet<String> {
        self.graph.all_vertices()
    }

    /// Installation order for `pkg` and everything it transitively depends on
    ///
    /// Every dependency comes before its dependents and `pkg` is last. Fails
    /// if `pkg` is unknown or a cycle is reachable from it.
    pub fn installation_order(&self, pkg: &str) -> Result<Vec<String>> {
        self.ensure_exists(pkg)?;

        let mut traversal = Traversal::new(&self.graph);
        traversal.visit(pkg)?;

        debug!(
            package = pkg,
            count = traversal.order.len(),
            "resolved installation order"
        );
        Ok(traversal.order)
    }

    /// Packages that must be newly installed to add `new_pkg` when
    /// `installed_pkg` and its dependencies are already present
    pub fn to_install(&self, new_pkg: &str, installed_pkg: &str) -> Result<Vec<String>> {
        self.ensure_exists(new_pkg)?;
        self.ensure_exists(installed_pkg)?;

        let wanted = self.installation_order(new_pkg)?;
        let present: HashSet<String> = self
            .installation_order(installed_pkg)?
            .into_iter()
            .collect();

        Ok(wanted
            .into_iter()
            .filter(|pkg| !present.contains(pkg))
            .collect())
    }

    /// A single installation order covering every package in the graph
    ///
    /// Packages are visited in ascending name order, so the result is stable
    /// for a given graph.
    pub fn installation_order_for_all(&self) -> Result<Vec<String>> {
        let mut traversal = Traversal::new(&self.graph);
        for pkg in self.sorted_packages() {
            traversal.visit(pkg)?;
        }

        debug!(count = traversal.order.len(), "resolved global installation order");
        Ok(traversal.order)
    }

    /// Number of packages `pkg` transitively depends on, excluding itself
    pub fn dependency_count(&self, pkg: &str) -> Result<usize> {
        Ok(self.installation_order(pkg)?.len() - 1)
    }

    /// The package with the largest transitive dependency closure
    ///
    /// Ties go to the name that sorts first. Returns `None` for an empty graph.
    pub fn package_with_max_dependencies(&self) -> Result<Option<String>> {
        let mut best: Option<(&str, usize)> = None;

        for pkg in self.sorted_packages() {
            let count = self.dependency_count(pkg)?;
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((pkg, count));
            }
        }

        Ok(best.map(|(pkg, _)| pkg.to_string()))
    }

    fn ensure_exists(&self, pkg: &str) -> Result<()> {
        if self.graph.contains(pkg) {
            Ok(())
        } else {
            Err(ResolveError::package_not_found(pkg))
        }
    }

    fn sorted_packages(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self
            .graph
            .all_vertices()
            .iter()
            .map(String::as_str)
            .collect();
        packages.sort_unstable();
        packages
    }
}

/// Depth-first post-order walk with cycle detection on the active path
struct Traversal<'g> {
    graph: &'g DependencyGraph,

    /// Packages on the current recursion path, in order
    path: Vec<&'g str>,
    on_path: HashSet<&'g str>,

    /// Packages already appended to `order`
    emitted: HashSet<&'g str>,
    order: Vec<String>,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            path: Vec::new(),
            on_path: HashSet::new(),
            emitted: HashSet::new(),
            order: Vec::new(),
        }
    }

    fn visit(&mut self, pkg: &'g str) -> Result<()> {
        if self.emitted.contains(pkg) {
            return Ok(());
        }

        if self.on_path.contains(pkg) {
            let start = self.path.iter().position(|p| *p == pkg).unwrap_or(0);
            let cycle = self.path[start..].iter().map(|p| p.to_string()).collect();
            return Err(ResolveError::cycle(cycle));
        }

        self.path.push(pkg);
        self.on_path.insert(pkg);

        let graph = self.graph;
        for dep in graph.adjacent_of(pkg).unwrap_or_default() {
            self.visit(dep)?;
        }

        self.on_path.remove(pkg);
        self.path.pop();

        self.emitted.insert(pkg);
        self.order.push(pkg.to_string());
        Ok(())
    }
}
