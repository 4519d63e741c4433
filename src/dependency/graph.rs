//! Dependency graph data structures
//!
//! A directed, unweighted graph over package names. An edge `(from, to)` means
//! `from` depends on `to`, so `to` must be installed first.

use std::collections::{HashMap, HashSet};

/// Directed dependency graph keyed by package name
///
/// Mutators never fail: empty names, missing vertices and duplicate edges
/// are all silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Every vertex in the graph
    vertices: HashSet<String>,

    /// Successor lists keyed by vertex. `None` until the first edge is added
    /// from that vertex.
    adjacency: HashMap<String, Option<Vec<String>>>,

    /// Number of distinct `(from, to)` pairs
    edge_count: usize,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex if it is non-empty and not already present
    pub fn add_vertex(&mut self, name: &str) {
        if name.is_empty() || self.vertices.contains(name) {
            return;
        }

        self.vertices.insert(name.to_string());
        self.adjacency.insert(name.to_string(), None);
    }

    /// Remove a vertex together with every edge that touches it
    pub fn remove_vertex(&mut self, name: &str) {
        if !self.vertices.contains(name) {
            return;
        }

        // Outgoing edges, including a self-loop
        if let Some(Some(successors)) = self.adjacency.get(name) {
            self.edge_count -= successors.len();
        }
        self.adjacency.remove(name);
        self.vertices.remove(name);

        // Incoming edges
        for successors in self.adjacency.values_mut().flatten() {
            let before = successors.len();
            successors.retain(|s| s != name);
            self.edge_count -= before - successors.len();
        }
    }

    /// Add the edge `from -> to`, creating either endpoint if needed
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() {
            return;
        }

        self.add_vertex(from);
        self.add_vertex(to);

        let successors = self
            .adjacency
            .entry(from.to_string())
            .or_insert(None)
            .get_or_insert_with(Vec::new);

        if successors.iter().any(|s| s == to) {
            return;
        }

        successors.push(to.to_string());
        self.edge_count += 1;
    }

    /// Remove the edge `from -> to` if it exists
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if !self.vertices.contains(from) || !self.vertices.contains(to) {
            return;
        }

        if let Some(Some(successors)) = self.adjacency.get_mut(from) {
            if let Some(pos) = successors.iter().position(|s| s == to) {
                successors.remove(pos);
                self.edge_count -= 1;
            }
        }
    }

    /// All vertices, in no particular order
    pub fn all_vertices(&self) -> &HashSet<String> {
        &self.vertices
    }

    /// Check whether a vertex exists
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains(name)
    }

    /// Direct dependencies of `vertex` in insertion order
    ///
    /// Returns `None` if the vertex is absent or never had an outgoing edge,
    /// and `Some` (possibly empty once edges were removed) otherwise. Callers
    /// that only care about the dependencies can treat both as a leaf.
    pub fn adjacent_of(&self, vertex: &str) -> Option<&[String]> {
        self.adjacency
            .get(vertex)
            .and_then(|successors| successors.as_deref())
    }

    /// Vertices that have a direct edge into `vertex`, sorted by name
    pub fn dependents_of(&self, vertex: &str) -> Vec<&str> {
        let mut dependents: Vec<&str> = self
            .adjacency
            .iter()
            .filter(|(_, successors)| {
                successors
                    .as_ref()
                    .is_some_and(|list| list.iter().any(|s| s == vertex))
            })
            .map(|(name, _)| name.as_str())
            .collect();
        dependents.sort_unstable();
        dependents
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get statistics about the dependency graph
    pub fn stats(&self) -> GraphStats {
        let leaves = self
            .vertices
            .iter()
            .filter(|v| self.adjacent_of(v).map_or(true, |s| s.is_empty()))
            .count();

        let with_dependents: HashSet<&str> = self
            .adjacency
            .values()
            .flatten()
            .flat_map(|successors| successors.iter().map(String::as_str))
            .collect();

        GraphStats {
            packages: self.vertex_count(),
            edges: self.edge_count,
            leaves,
            roots: self.vertex_count() - with_dependents.len(),
        }
    }
}

/// Statistics about a dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of packages
    pub packages: usize,

    /// Number of dependency edges
    pub edges: usize,

    /// Packages with no dependencies
    pub leaves: usize,

    /// Packages that nothing depends on
    pub roots: usize,
}
