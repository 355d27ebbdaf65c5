//! Node definition.
//!
//! The tree types walked by everything else in this crate.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::Leaves;

/// An ordered sequence of nodes.
///
/// Forests are the unit every walker starts from: the top-level input, and
/// the value stored under every branch key.
pub type Forest = Vec<Node>;

/// A node in a tree.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::Node;
///
/// // A directory listing: one file, then a directory holding two more.
/// let forest = vec![
///     Node::leaf("README.md"),
///     Node::branch([("src", vec![Node::leaf("lib.rs"), Node::leaf("node.rs")])]),
/// ];
///
/// assert!(forest[0].is_leaf());
/// assert_eq!(forest[1].as_branch().map(|b| b.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A string value, handed to the visitor.
    Leaf(String),

    /// A mapping from keys to child forests.
    Branch(Branch),

    /// Anything else. Walkers skip these without complaint.
    Other(Value),
}

impl Node {
    /// Creates a leaf node.
    #[inline]
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    /// Creates a branch node from `(key, forest)` pairs, keeping their order.
    pub fn branch<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Forest)>,
    {
        Self::Branch(entries.into_iter().collect())
    }

    /// Creates a node that walkers will skip.
    #[inline]
    pub fn other(value: impl Into<Value>) -> Self {
        Self::Other(value.into())
    }

    /// Returns true if this node is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this node is a branch.
    #[inline]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Returns the leaf text, if this is a leaf.
    #[inline]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the branch mapping, if this is a branch.
    #[inline]
    pub const fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    /// Iterates over every leaf under this node, in walk order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(std::slice::from_ref(self))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

impl From<Branch> for Node {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Leaf(value) => serializer.serialize_str(value),
            Node::Branch(branch) => branch.serialize(serializer),
            Node::Other(value) => value.serialize(serializer),
        }
    }
}

/// The mapping held by a branch node.
///
/// Keys iterate in insertion order. Inserting an existing key replaces its
/// forest in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Branch(IndexMap<String, Forest>);

impl Branch {
    /// Creates an empty branch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a child forest under `key`, returning the forest it replaced.
    pub fn insert(&mut self, key: impl Into<String>, forest: Forest) -> Option<Forest> {
        self.0.insert(key.into(), forest)
    }

    /// Returns the child forest stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Forest> {
        self.0.get(key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the branch has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, forest)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Forest> {
        self.0.iter()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Forest> {
        self.0.keys()
    }
}

impl<K: Into<String>> FromIterator<(K, Forest)> for Branch {
    fn from_iter<I: IntoIterator<Item = (K, Forest)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, forest)| (key.into(), forest))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = (&'a String, &'a Forest);
    type IntoIter = indexmap::map::Iter<'a, String, Forest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
