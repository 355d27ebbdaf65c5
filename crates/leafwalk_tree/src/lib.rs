//! # leafwalk_tree
//!
//! Nested leaf/branch trees and the walkers that visit their string leaves.
//!
//! A [`Forest`] is an ordered sequence of [`Node`]s. A node is either a string
//! leaf, a branch mapping keys to child forests, or some other value that every
//! walker skips. Walking a forest calls a visitor on each leaf, depth-first, in
//! the order the leaves appear.
//!
//! ## Architecture
//!
//! - [`Node`] and [`Branch`] form the typed tree; branch keys keep insertion order
//! - [`parse`] turns untyped JSON into a typed forest
//! - [`walk`] and the [`visitor`] module traverse typed forests
//! - [`walk_value`] traverses untyped JSON directly and fails at the first malformed node
//! - [`Leaves`] yields the same leaves as an iterator
//! - [`Coll`] is an unrelated enumerable wrapper built on the same "produce" idea
//!
//! ## Example
//!
//! ```rust
//! use leafwalk_tree::{Node, walk};
//!
//! let forest = vec![
//!     Node::leaf("a"),
//!     Node::branch([("d", vec![Node::leaf("b"), Node::leaf("c")])]),
//!     Node::leaf("e"),
//! ];
//!
//! let mut seen = Vec::new();
//! walk(&forest, |leaf| seen.push(leaf.to_string()));
//! assert_eq!(seen, ["a", "b", "c", "e"]);
//! ```

mod coll;
mod dynamic;
mod error;
mod leaves;
mod node;
pub mod parse;
pub mod visitor;

pub use coll::{Coll, Produce};
pub use dynamic::walk_value;
pub use error::TreeError;
pub use leaves::{Leaves, leaves};
pub use node::{Branch, Forest, Node};

// Re-export commonly used visitor items for convenience
pub use visitor::{PathCollector, VisitResult, Visitor, find_leaf, walk};
