//! The public façade: thin, bounds-checked wrappers over the node algebra
//! in [`crate::node`], each rewrapping the returned root into a new
//! [`Sequence`].

use std::fmt;
use std::ops::Index;

use crate::builder::Builder;
use crate::error::{bounds_fail, empty_fail, range_fail, ErrorKind};
use crate::iter::Iter;
use crate::node::{self, Node};

/// A persistent, positionally indexed sequence of `T`, backed by a
/// self-balancing binary tree with structural sharing.
///
/// Every mutating method (`append`, `insert`, `set`, `delete`, ...)
/// returns a *new* `Sequence`; the receiver is left untouched and may
/// still be used afterwards. Cloning a `Sequence` is `O(1)` (an `Rc`
/// bump), since the clone shares every node with the original.
pub struct Sequence<T> {
    root: Node<T>,
}

impl<T> Sequence<T> {
    pub(crate) fn from_root(root: Node<T>) -> Self {
        Sequence { root }
    }

    /// The empty sequence. `O(1)`: no allocation.
    pub fn new() -> Self {
        Sequence { root: Node::Empty }
    }

    pub fn size(&self) -> usize {
        self.root.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn check_bounds_inclusive(&self, index: usize) {
        if index > self.size() {
            bounds_fail(self.size(), index);
        }
    }

    fn check_range(&self, offset: usize, limit: usize) {
        if limit < offset || limit > self.size() {
            range_fail(self.size(), offset, limit);
        }
    }
}

impl<T: Clone> Sequence<T> {
    pub fn get(&self, index: usize) -> &T {
        if index >= self.size() {
            bounds_fail(self.size(), index);
        }
        self.root.get(index)
    }

    pub fn get_first(&self) -> &T {
        if self.is_empty() {
            empty_fail("GetFirst");
        }
        self.root.get_first()
    }

    pub fn get_last(&self) -> &T {
        if self.is_empty() {
            empty_fail("GetLast");
        }
        self.root.get_last()
    }

    /// `index == size()` behaves like [`Sequence::append`].
    pub fn set(&self, index: usize, value: T) -> Sequence<T> {
        if index == self.size() {
            return self.append(value);
        }
        if index > self.size() {
            bounds_fail(self.size(), index);
        }
        Sequence::from_root(self.root.set(index, value))
    }

    pub fn insert(&self, index: usize, value: T) -> Sequence<T> {
        self.check_bounds_inclusive(index);
        Sequence::from_root(self.root.insert(index, value))
    }

    pub fn delete(&self, index: usize) -> Sequence<T> {
        if index >= self.size() {
            bounds_fail(self.size(), index);
        }
        Sequence::from_root(self.root.delete(index))
    }

    pub fn append(&self, value: T) -> Sequence<T> {
        Sequence::from_root(self.root.append(value))
    }

    /// Prepends `value` (the façade's `Push`, matching the original
    /// source's naming: `Push`/`Pop` are a stack interface over the
    /// front of the sequence, not the back).
    pub fn push(&self, value: T) -> Sequence<T> {
        Sequence::from_root(self.root.prepend(value))
    }

    /// Removes and returns the first value, paired with the rest of the
    /// sequence.
    pub fn pop(&self) -> (T, Sequence<T>) {
        match self.size() {
            0 => empty_fail("Pop"),
            1 => (self.root.get_first().clone(), Sequence::new()),
            _ => {
                let (value, new_root) = self.root.pop();
                (value, Sequence::from_root(new_root))
            }
        }
    }

    pub fn append_list(&self, other: &Sequence<T>) -> Sequence<T> {
        Sequence::from_root(node::append_nodes(&self.root, &other.root))
    }

    pub fn insert_list(&self, index: usize, other: &Sequence<T>) -> Sequence<T> {
        let size = self.size();
        self.check_bounds_inclusive(index);
        if index == 0 {
            return other.append_list(self);
        }
        if index == size {
            return self.append_list(other);
        }
        self.head(index).append_list(other).append_list(&self.tail(index))
    }

    pub fn head(&self, length: usize) -> Sequence<T> {
        self.check_bounds_inclusive(length);
        Sequence::from_root(self.root.head(length))
    }

    pub fn tail(&self, index: usize) -> Sequence<T> {
        self.check_bounds_inclusive(index);
        Sequence::from_root(self.root.tail(index))
    }

    pub fn sub_list(&self, offset: usize, limit: usize) -> Sequence<T> {
        let size = self.size();
        self.check_range(offset, limit);
        if offset == 0 && limit == size {
            return self.clone();
        }
        if offset == limit {
            return Sequence::new();
        }
        let root = if offset == 0 {
            self.root.head(limit)
        } else if limit == size {
            self.root.tail(offset)
        } else {
            self.root.head(limit).tail(offset)
        };
        Sequence::from_root(root)
    }

    pub fn delete_range(&self, offset: usize, limit: usize) -> Sequence<T> {
        let size = self.size();
        self.check_range(offset, limit);
        if offset == 0 && limit == size {
            return Sequence::new();
        }
        if offset == limit {
            return self.clone();
        }
        let root = if offset == 0 {
            self.root.tail(limit)
        } else if limit == size {
            self.root.head(offset)
        } else {
            node::append_nodes(&self.root.head(offset), &self.root.tail(limit))
        };
        Sequence::from_root(root)
    }

    pub fn for_each(&self, mut proc: impl FnMut(&T)) {
        self.root.for_each(&mut proc);
    }

    pub fn visit(&self, offset: usize, limit: usize, mut visitor: impl FnMut(usize, &T)) {
        self.check_range(offset, limit);
        self.root.visit(0, offset, limit, &mut visitor);
    }

    pub fn select(&self, mut predicate: impl FnMut(&T) -> bool) -> Sequence<T> {
        let mut builder = Builder::new();
        self.root.for_each(&mut |value| {
            if predicate(value) {
                builder.add(value.clone());
            }
        });
        builder.build()
    }

    pub fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        self.check_range(offset, limit);
        if limit == offset {
            return Vec::new();
        }
        let mut answer = Vec::with_capacity(limit - offset);
        self.root.visit(0, offset, limit, &mut |_, value| answer.push(value.clone()));
        answer
    }

    pub fn fwd_iterate(&self) -> Iter<T> {
        Iter::new(&self.root)
    }

    /// Runs every structural invariant check and reports each violation
    /// found (rather than stopping at the first) to `report`.
    pub fn check_invariants(&self, mut report: impl FnMut(String)) {
        if self.is_empty() && !matches!(self.root, Node::Empty) {
            report("empty sequence has a non-Empty root".to_string());
        }
        self.root.check_invariants(&mut report, true);
    }
}

/// Non-panicking counterparts to the accessors and updates above, for
/// callers that would rather branch on a bad index than crash on one.
/// These surface exactly the same [`ErrorKind`] the panicking path would
/// have formatted into a message; they run the same bounds check up
/// front and then delegate to the infallible method, so there is no
/// duplicated traversal logic to drift out of sync.
impl<T: Clone> Sequence<T> {
    pub fn try_get(&self, index: usize) -> Result<&T, ErrorKind> {
        if index >= self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.get(index))
    }

    pub fn try_get_first(&self) -> Result<&T, ErrorKind> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyOperation);
        }
        Ok(self.get_first())
    }

    pub fn try_get_last(&self) -> Result<&T, ErrorKind> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyOperation);
        }
        Ok(self.get_last())
    }

    pub fn try_set(&self, index: usize, value: T) -> Result<Sequence<T>, ErrorKind> {
        if index > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.set(index, value))
    }

    pub fn try_insert(&self, index: usize, value: T) -> Result<Sequence<T>, ErrorKind> {
        if index > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.insert(index, value))
    }

    pub fn try_delete(&self, index: usize) -> Result<Sequence<T>, ErrorKind> {
        if index >= self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.delete(index))
    }

    pub fn try_pop(&self) -> Result<(T, Sequence<T>), ErrorKind> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyOperation);
        }
        Ok(self.pop())
    }

    pub fn try_head(&self, length: usize) -> Result<Sequence<T>, ErrorKind> {
        if length > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.head(length))
    }

    pub fn try_tail(&self, index: usize) -> Result<Sequence<T>, ErrorKind> {
        if index > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.tail(index))
    }

    pub fn try_sub_list(&self, offset: usize, limit: usize) -> Result<Sequence<T>, ErrorKind> {
        if limit < offset || limit > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.sub_list(offset, limit))
    }

    pub fn try_delete_range(&self, offset: usize, limit: usize) -> Result<Sequence<T>, ErrorKind> {
        if limit < offset || limit > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.delete_range(offset, limit))
    }

    pub fn try_slice(&self, offset: usize, limit: usize) -> Result<Vec<T>, ErrorKind> {
        if limit < offset || limit > self.size() {
            return Err(ErrorKind::Bounds);
        }
        Ok(self.slice(offset, limit))
    }
}

impl<T: Clone> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            root: self.root.clone(),
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        self.fwd_iterate().zip(other.fwd_iterate()).all(|(a, b)| a == b)
    }
}

impl<T: Clone + Eq> Eq for Sequence<T> {}

impl<T: Clone> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Builder::new();
        for value in iter {
            builder.add(value);
        }
        builder.build()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter::new(&self.root)
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.fwd_iterate()
    }
}
