//! Visitor pattern for forest traversal.
//!
//! This module provides traits and functions for walking forests of [`Node`]s.
//!
//! # Overview
//!
//! - [`walk`] - Call a closure on every leaf, in order
//! - [`Visitor`] - Traversal trait with key hooks and early termination
//! - [`walk_forest`], [`walk_node`], [`walk_branch`] - Drive a [`Visitor`]
//! - [`PathCollector`] - Collect leaves prefixed with their ancestor keys
//! - [`find_leaf`] - Stop at the first matching leaf
//!
//! # Examples
//!
//! ## Counting leaves per top-level key
//!
//! ```rust
//! use leafwalk_tree::Node;
//! use leafwalk_tree::visitor::{Visitor, VisitResult, walk_forest};
//! use std::ops::ControlFlow;
//!
//! #[derive(Default)]
//! struct DirSizes<'a> {
//!     depth: usize,
//!     sizes: Vec<(&'a str, usize)>,
//! }
//!
//! impl<'a> Visitor<'a> for DirSizes<'a> {
//!     fn visit_leaf(&mut self, _leaf: &'a str) -> VisitResult {
//!         if self.depth > 0 && let Some(last) = self.sizes.last_mut() {
//!             last.1 += 1;
//!         }
//!         ControlFlow::Continue(())
//!     }
//!
//!     fn enter_key(&mut self, key: &'a str) -> VisitResult {
//!         if self.depth == 0 {
//!             self.sizes.push((key, 0));
//!         }
//!         self.depth += 1;
//!         ControlFlow::Continue(())
//!     }
//!
//!     fn leave_key(&mut self, _key: &'a str) -> VisitResult {
//!         self.depth -= 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let forest = vec![Node::branch([
//!     ("src", vec![Node::leaf("lib.rs"), Node::leaf("node.rs")]),
//!     ("tests", vec![Node::leaf("walk.rs")]),
//! ])];
//!
//! let mut sizes = DirSizes::default();
//! let _ = walk_forest(&mut sizes, &forest);
//! assert_eq!(sizes.sizes, vec![("src", 2), ("tests", 1)]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use leafwalk_tree::{Node, find_leaf};
//!
//! let forest = vec![
//!     Node::leaf("notes.txt"),
//!     Node::branch([("src", vec![Node::leaf("main.rs"), Node::leaf("lib.rs")])]),
//! ];
//!
//! assert_eq!(find_leaf(&forest, |leaf| leaf.ends_with(".rs")), Some("main.rs"));
//! ```
//!
//! [`Node`]: crate::Node

mod paths;
mod visit;
mod walk;

pub use paths::PathCollector;
pub use visit::{VisitResult, Visitor};
pub use walk::{find_leaf, walk, walk_branch, walk_forest, walk_node};
