//! An incremental, append-only accumulator that constructs a balanced
//! [`crate::Sequence`] in amortized linear time, without the rebalancing
//! that repeated `append` calls on an already-built sequence would incur.
//!
//! The accumulator is a chain of stages: a leaf-stage buffers up to
//! [`crate::node::MAX_LEAF`] values; once full it hands a completed leaf
//! up to a branch-stage, which pairs incoming children two at a time and
//! promotes completed pairs further up the chain. `build` walks the chain
//! once, root first, appending the leaf-stage's still-pending values last.

use crate::node::{self, Node, MAX_LEAF};
use crate::Sequence;

struct BranchStage<T> {
    parent: Option<Box<BranchStage<T>>>,
    left: Node<T>,
    right: Option<Node<T>>,
}

impl<T: Clone> BranchStage<T> {
    fn new(left: Node<T>) -> Self {
        BranchStage {
            parent: None,
            left,
            right: None,
        }
    }

    fn add_child(&mut self, child: Node<T>) {
        match self.right.take() {
            None => self.right = Some(child),
            Some(right) => {
                let promoted = node::create_branch(self.left.clone(), right);
                match &mut self.parent {
                    Some(parent) => parent.add_child(promoted),
                    None => self.parent = Some(Box::new(BranchStage::new(promoted))),
                }
                self.left = child;
            }
        }
    }

    /// Non-destructive: reads the stage chain without consuming it, so a
    /// builder can keep accumulating (or be built again) afterwards.
    fn build(&self, extra: Node<T>) -> Node<T> {
        let mut answer = match &self.right {
            None => self.left.clone(),
            Some(right) => node::create_branch(self.left.clone(), right.clone()),
        };
        if let Some(parent) = &self.parent {
            answer = parent.build(answer);
        }
        answer.append_node(&extra)
    }

    fn size(&self) -> usize {
        let mut total = self.left.size();
        if let Some(right) = &self.right {
            total += right.size();
        }
        if let Some(parent) = &self.parent {
            total += parent.size();
        }
        total
    }
}

/// A transient, exclusively-owned accumulator for bulk-building a
/// [`Sequence`]. Not `Clone`: two builders sharing a mutable buffer would
/// defeat the whole point.
///
/// `build` may be called more than once; nodes already emitted into an
/// earlier `Sequence` are never mutated by later `add` calls, so earlier
/// snapshots stay valid.
pub struct Builder<T> {
    parent: Option<BranchStage<T>>,
    buffer: Vec<T>,
}

impl<T: Clone> Builder<T> {
    pub fn new() -> Self {
        Builder {
            parent: None,
            buffer: Vec::with_capacity(MAX_LEAF),
        }
    }

    /// Appends `value`, returning `self` so calls can be chained the way
    /// the rest of the façade chains its own builder-style methods.
    pub fn add(&mut self, value: T) -> &mut Self {
        if self.buffer.len() == MAX_LEAF {
            let leaf = node::leaf_from_vec(std::mem::replace(&mut self.buffer, Vec::with_capacity(MAX_LEAF)));
            match &mut self.parent {
                Some(parent) => parent.add_child(leaf),
                None => self.parent = Some(BranchStage::new(leaf)),
            }
        }
        self.buffer.push(value);
        self
    }

    pub fn size(&self) -> usize {
        let mut total = self.buffer.len();
        if let Some(parent) = &self.parent {
            total += parent.size();
        }
        total
    }

    /// Finalizes the tree built so far into a balanced [`Sequence`].
    /// Callable more than once: nothing here is destructive, so further
    /// `add` calls (and further `build` calls) remain valid afterwards.
    pub fn build(&self) -> Sequence<T> {
        let root = if self.buffer.is_empty() {
            match &self.parent {
                Some(parent) => parent.build(Node::Empty),
                None => Node::Empty,
            }
        } else if let Some(parent) = &self.parent {
            let leaf = node::leaf_from_vec(self.buffer.clone());
            parent.build(leaf)
        } else {
            node::leaf_from_vec(self.buffer.clone())
        };
        Sequence::from_root(root)
    }
}

impl<T: Clone> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Extend<T> for Builder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Clone> FromIterator<T> for Builder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Builder::new();
        builder.extend(iter);
        builder
    }
}
