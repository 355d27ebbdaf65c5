//! Enumerable wrapper.

use crate::{Node, walk};

/// Types that can hand out their elements one at a time.
///
/// This is the single primitive a collection needs to expose; everything else
/// (mapping, filtering, folding) comes from [`Iterator`] on the concrete type.
pub trait Produce<T: ?Sized> {
    /// Calls `visit` once per element, in order.
    fn produce<F>(&self, visit: F)
    where
        F: FnMut(&T);
}

/// An ordered, read-only collection.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::Coll;
///
/// let coll = Coll::new(vec![1, 2, 3]);
///
/// let mut seen = Vec::new();
/// coll.produce(|x| seen.push(*x));
/// assert_eq!(seen, [1, 2, 3]);
///
/// // The rest of the toolbox is plain `Iterator`.
/// assert_eq!(coll.iter().filter(|x| **x > 1).count(), 2);
/// assert_eq!(coll.iter().map(|x| x * 10).sum::<i32>(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coll<T> {
    items: Vec<T>,
}

impl<T> Coll<T> {
    /// Wraps `items`, taking ownership.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Calls `visit` once per element, in stored order.
    pub fn produce<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            visit(item);
        }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Coll<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Coll<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Coll<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Coll<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Coll<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Produce<T> for Coll<T> {
    fn produce<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        Coll::produce(self, visit);
    }
}

/// A forest produces its leaves.
impl Produce<str> for [Node] {
    fn produce<F>(&self, visit: F)
    where
        F: FnMut(&str),
    {
        walk(self, visit);
    }
}
