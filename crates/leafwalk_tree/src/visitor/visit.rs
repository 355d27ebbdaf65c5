//! Read-only visitor trait.

use std::ops::ControlFlow;

use serde_json::Value;

/// Result of a visit callback.
///
/// `Continue(())` keeps walking; `Break(())` stops the whole traversal.
pub type VisitResult = ControlFlow<()>;

/// Callbacks invoked while walking a forest.
///
/// Only [`visit_leaf`](Visitor::visit_leaf) is required. The key hooks fire
/// around each branch entry, so a visitor can track where it is; the default
/// implementations ignore keys, matching plain [`walk`](crate::walk).
///
/// The `'a` lifetime is the lifetime of the forest being walked, so visitors
/// may keep borrowed leaves and keys.
pub trait Visitor<'a> {
    /// Called for every leaf, in walk order.
    fn visit_leaf(&mut self, leaf: &'a str) -> VisitResult;

    /// Called before descending into the forest stored under `key`.
    fn enter_key(&mut self, _key: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after the forest stored under `key` has been walked.
    fn leave_key(&mut self, _key: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for nodes that are neither leaves nor branches.
    fn visit_other(&mut self, _value: &'a Value) -> VisitResult {
        ControlFlow::Continue(())
    }
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    #[inline]
    fn visit_leaf(&mut self, leaf: &'a str) -> VisitResult {
        (**self).visit_leaf(leaf)
    }

    #[inline]
    fn enter_key(&mut self, key: &'a str) -> VisitResult {
        (**self).enter_key(key)
    }

    #[inline]
    fn leave_key(&mut self, key: &'a str) -> VisitResult {
        (**self).leave_key(key)
    }

    #[inline]
    fn visit_other(&mut self, value: &'a Value) -> VisitResult {
        (**self).visit_other(value)
    }
}
