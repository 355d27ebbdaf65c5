//! Traversal drivers.

use std::ops::ControlFlow;

use crate::{Branch, Node};

use super::{VisitResult, Visitor};

/// Calls `visit` on every leaf of `forest`, depth-first, in encounter order.
///
/// Branch keys are ignored and their forests walked in the branch's own key
/// order. Nodes that are neither leaves nor branches are skipped.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::{Node, walk};
///
/// let forest = vec![Node::other(1), Node::leaf("a"), Node::other(true)];
///
/// let mut seen = Vec::new();
/// walk(&forest, |leaf| seen.push(leaf.to_owned()));
/// assert_eq!(seen, ["a"]);
/// ```
pub fn walk<F>(forest: &[Node], visit: F)
where
    F: FnMut(&str),
{
    let mut visitor = FnVisitor(visit);
    let _ = walk_forest(&mut visitor, forest);
}

/// Walks every node of a forest in order.
pub fn walk_forest<'a, V>(visitor: &mut V, forest: &'a [Node]) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    for node in forest {
        walk_node(visitor, node)?;
    }
    ControlFlow::Continue(())
}

/// Dispatches a single node to the matching visitor callback.
pub fn walk_node<'a, V>(visitor: &mut V, node: &'a Node) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    match node {
        Node::Leaf(value) => visitor.visit_leaf(value),
        Node::Branch(branch) => walk_branch(visitor, branch),
        Node::Other(value) => visitor.visit_other(value),
    }
}

/// Walks each keyed forest of a branch, firing the key hooks around it.
pub fn walk_branch<'a, V>(visitor: &mut V, branch: &'a Branch) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    for (key, forest) in branch {
        visitor.enter_key(key)?;
        walk_forest(visitor, forest)?;
        visitor.leave_key(key)?;
    }
    ControlFlow::Continue(())
}

/// Returns the first leaf, in walk order, for which `predicate` holds.
///
/// The walk stops as soon as a match is found.
pub fn find_leaf<'a, P>(forest: &'a [Node], predicate: P) -> Option<&'a str>
where
    P: FnMut(&str) -> bool,
{
    let mut finder = LeafFinder {
        predicate,
        found: None,
    };
    let _ = walk_forest(&mut finder, forest);
    finder.found
}

/// Adapts a leaf closure into a [`Visitor`].
struct FnVisitor<F>(F);

impl<'a, F> Visitor<'a> for FnVisitor<F>
where
    F: FnMut(&str),
{
    #[inline]
    fn visit_leaf(&mut self, leaf: &'a str) -> VisitResult {
        (self.0)(leaf);
        ControlFlow::Continue(())
    }
}

struct LeafFinder<'a, P> {
    predicate: P,
    found: Option<&'a str>,
}

impl<'a, P> Visitor<'a> for LeafFinder<'a, P>
where
    P: FnMut(&str) -> bool,
{
    fn visit_leaf(&mut self, leaf: &'a str) -> VisitResult {
        if (self.predicate)(leaf) {
            self.found = Some(leaf);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}
