//! Iterator over the leaves of a forest.

use std::iter::FusedIterator;

use crate::{Forest, Node};

/// Returns an iterator over the leaves of `forest`, in walk order.
///
/// Yields exactly what [`walk`](crate::walk) would visit, so the usual
/// iterator adapters apply:
///
/// ```rust
/// use leafwalk_tree::{Node, leaves};
///
/// let forest = vec![
///     Node::leaf("a.md"),
///     Node::branch([("src", vec![Node::leaf("lib.rs"), Node::leaf("b.md")])]),
/// ];
///
/// let docs: Vec<&str> = leaves(&forest).filter(|l| l.ends_with(".md")).collect();
/// assert_eq!(docs, ["a.md", "b.md"]);
/// ```
pub fn leaves(forest: &[Node]) -> Leaves<'_> {
    Leaves::new(forest)
}

/// Depth-first leaf iterator.
///
/// Keeps its own stack instead of recursing, so nesting depth only costs heap.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<Frame<'a>>,
}

#[derive(Debug, Clone)]
enum Frame<'a> {
    Nodes(std::slice::Iter<'a, Node>),
    Entries(indexmap::map::Iter<'a, String, Forest>),
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(forest: &'a [Node]) -> Self {
        Self {
            stack: vec![Frame::Nodes(forest.iter())],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut()? {
                Frame::Nodes(nodes) => match nodes.next() {
                    Some(Node::Leaf(value)) => return Some(value.as_str()),
                    Some(Node::Branch(branch)) => self.stack.push(Frame::Entries(branch.iter())),
                    Some(Node::Other(_)) => {}
                    None => {
                        self.stack.pop();
                    }
                },
                Frame::Entries(entries) => match entries.next() {
                    Some((_, forest)) => self.stack.push(Frame::Nodes(forest.iter())),
                    None => {
                        self.stack.pop();
                    }
                },
            }
        }
    }
}

impl FusedIterator for Leaves<'_> {}
