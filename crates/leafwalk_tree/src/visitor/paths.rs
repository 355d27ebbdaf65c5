//! Leaf path collection.

use std::ops::ControlFlow;

use crate::Node;

use super::{VisitResult, Visitor, walk_forest};

/// A visitor that records each leaf prefixed by the keys of its ancestor branches.
///
/// Treating branch keys as directory names turns a nested listing into
/// file paths:
///
/// ```rust
/// use leafwalk_tree::{Node, PathCollector};
///
/// let forest = vec![
///     Node::leaf("Cargo.toml"),
///     Node::branch([("src", vec![Node::leaf("lib.rs")])]),
/// ];
///
/// let paths = PathCollector::new().collect_from(&forest);
/// assert_eq!(paths, ["Cargo.toml", "src/lib.rs"]);
/// ```
#[derive(Debug, Clone)]
pub struct PathCollector<'a> {
    separator: String,
    keys: Vec<&'a str>,
    paths: Vec<String>,
}

impl<'a> PathCollector<'a> {
    /// Creates a collector joining keys with `/`.
    pub fn new() -> Self {
        Self::with_separator("/")
    }

    /// Creates a collector joining keys with the given separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            keys: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Walks `forest` and returns every collected path, in walk order.
    pub fn collect_from(mut self, forest: &'a [Node]) -> Vec<String> {
        let _ = walk_forest(&mut self, forest);
        self.paths
    }

    /// Returns the paths collected so far.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Consumes the collector, returning the collected paths.
    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

impl Default for PathCollector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Visitor<'a> for PathCollector<'a> {
    fn visit_leaf(&mut self, leaf: &'a str) -> VisitResult {
        let mut path = String::new();
        for key in &self.keys {
            path.push_str(key);
            path.push_str(&self.separator);
        }
        path.push_str(leaf);
        self.paths.push(path);
        ControlFlow::Continue(())
    }

    fn enter_key(&mut self, key: &'a str) -> VisitResult {
        self.keys.push(key);
        ControlFlow::Continue(())
    }

    fn leave_key(&mut self, _key: &'a str) -> VisitResult {
        self.keys.pop();
        ControlFlow::Continue(())
    }
}
