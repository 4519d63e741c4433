//! Tree command - Display dependency tree
//!
//! Usage:
//!   pkgorder tree <package>              # Show the full tree
//!   pkgorder tree <package> --depth 2    # Limit depth
//!   pkgorder tree <package> --no-dedupe  # Repeat shared subtrees
//!   pkgorder tree <package> --format json

use std::collections::HashSet;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::GlobalOptions;
use crate::dependency::DependencyGraph;
use crate::error::ResolveError;
use crate::utils::terminal::print_json;

/// Display dependency tree
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Package whose dependencies are shown
    pub package: String,

    /// Maximum depth to display (default: unlimited)
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Don't deduplicate repeated dependencies
    #[arg(long)]
    pub no_dedupe: bool,
}

/// Dependency node for JSON output
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct TreeJson {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<TreeJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycle: Option<bool>,
}

/// How a node relates to what has already been printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeMark {
    New,
    Duplicate,
    Cycle,
}

/// Walk state shared by the text and JSON renderers
struct TreeWalker<'g> {
    graph: &'g DependencyGraph,
    max_depth: Option<usize>,
    dedupe: bool,
    visited: HashSet<&'g str>,
    path: HashSet<&'g str>,
}

impl<'g> TreeWalker<'g> {
    fn new(graph: &'g DependencyGraph, max_depth: Option<usize>, dedupe: bool) -> Self {
        Self {
            graph,
            max_depth,
            dedupe,
            visited: HashSet::new(),
            path: HashSet::new(),
        }
    }

    fn mark(&self, name: &str) -> NodeMark {
        if self.path.contains(name) {
            NodeMark::Cycle
        } else if self.dedupe && self.visited.contains(name) {
            NodeMark::Duplicate
        } else {
            NodeMark::New
        }
    }

    /// Children to descend into, or an empty slice when the node is a leaf,
    /// already shown, or past the depth limit
    fn children(&self, name: &str, mark: NodeMark, depth: usize) -> &'g [String] {
        if mark != NodeMark::New || self.max_depth.is_some_and(|max| depth >= max) {
            return &[];
        }
        let graph: &'g DependencyGraph = self.graph;
        graph.adjacent_of(name).unwrap_or_default()
    }

    fn enter(&mut self, name: &'g str) {
        self.visited.insert(name);
        self.path.insert(name);
    }

    fn leave(&mut self, name: &str) {
        self.path.remove(name);
    }

    fn format_tree(&mut self, root: &'g str) -> String {
        let mut output = String::new();
        output.push_str(root);
        output.push('\n');

        self.enter(root);
        let children = self.children(root, NodeMark::New, 0);
        self.format_children(children, "", 1, &mut output);
        self.leave(root);

        output
    }

    fn format_children(
        &mut self,
        children: &'g [String],
        prefix: &str,
        depth: usize,
        output: &mut String,
    ) {
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == count;
            let mark = self.mark(child);

            let marker = match mark {
                NodeMark::New => "",
                NodeMark::Duplicate => " (already resolved)",
                NodeMark::Cycle => " (cycle)",
            };
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("{}{}{}{}\n", prefix, connector, child, marker));

            if mark != NodeMark::New {
                continue;
            }

            self.enter(child);
            let grandchildren = self.children(child, mark, depth);
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            self.format_children(grandchildren, &child_prefix, depth + 1, output);
            self.leave(child);
        }
    }

    fn build_json(&mut self, name: &'g str, depth: usize) -> TreeJson {
        let mark = self.mark(name);
        let mut node = TreeJson {
            name: name.to_string(),
            dependencies: Vec::new(),
            duplicate: (mark == NodeMark::Duplicate).then_some(true),
            cycle: (mark == NodeMark::Cycle).then_some(true),
        };

        if mark != NodeMark::New {
            return node;
        }

        self.enter(name);
        for child in self.children(name, mark, depth) {
            node.dependencies.push(self.build_json(child, depth + 1));
        }
        self.leave(name);

        node
    }
}

impl TreeCommand {
    /// Execute the tree command
    pub fn execute(self, opts: &GlobalOptions) -> Result<()> {
        let resolver = opts.load_resolver()?;
        let graph = resolver.graph();

        if !graph.contains(&self.package) {
            return Err(ResolveError::package_not_found(&self.package).into());
        }

        let mut walker = TreeWalker::new(graph, self.depth, !self.no_dedupe);

        if !opts.is_text() {
            return print_json(&walker.build_json(&self.package, 0));
        }

        print!("{}", walker.format_tree(&self.package));
        Ok(())
    }
}
