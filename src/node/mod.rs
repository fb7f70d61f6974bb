//! The tree node algebra: `Empty`, `Leaf`, and `Branch`, and the positional
//! operations that dispatch across them.
//!
//! A `Node<T>` is never mutated after construction; every operation that
//! would change its logical contents returns a new `Node<T>`, sharing
//! whatever subtrees did not change. `Leaf` and `Branch` hold their payload
//! behind an `Rc`, so cloning a `Node<T>` (as every operation below does
//! liberally, to hand a subtree to a sibling call) is a reference-count
//! bump, not a copy.

mod balance;
mod leaf;
mod splice;

#[cfg(test)]
mod tests;

use std::rc::Rc;

/// Maximum number of values an array-backed leaf may hold before an insert
/// forces a split into a branch of two leaves.
pub(crate) const MAX_LEAF: usize = 32;

pub(crate) struct BranchData<T> {
    pub(crate) left: Node<T>,
    pub(crate) right: Node<T>,
    pub(crate) size: usize,
    pub(crate) depth: usize,
}

/// One node of the tree. Cloning is `O(1)`: `Leaf` and `Branch` are
/// `Rc`-backed, and `Empty` carries no data at all.
pub(crate) enum Node<T> {
    Empty,
    Leaf(Rc<[T]>),
    Branch(Rc<BranchData<T>>),
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Node::Empty => Node::Empty,
            Node::Leaf(values) => Node::Leaf(Rc::clone(values)),
            Node::Branch(b) => Node::Branch(Rc::clone(b)),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn size(&self) -> usize {
        match self {
            Node::Empty => 0,
            Node::Leaf(values) => values.len(),
            Node::Branch(b) => b.size,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Empty | Node::Leaf(_) => 0,
            Node::Branch(b) => b.depth,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn left_child(&self) -> &Node<T> {
        match self {
            Node::Branch(b) => &b.left,
            _ => panic!("not implemented for leaf nodes"),
        }
    }

    fn right_child(&self) -> &Node<T> {
        match self {
            Node::Branch(b) => &b.right,
            _ => panic!("not implemented for leaf nodes"),
        }
    }
}

impl<T: Clone> Node<T> {
    pub(crate) fn get(&self, index: usize) -> &T {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => &values[index],
            Node::Branch(b) => {
                let left_size = b.left.size();
                if index < left_size {
                    b.left.get(index)
                } else {
                    b.right.get(index - left_size)
                }
            }
        }
    }

    pub(crate) fn get_first(&self) -> &T {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => &values[0],
            Node::Branch(b) => b.left.get_first(),
        }
    }

    pub(crate) fn get_last(&self) -> &T {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => &values[values.len() - 1],
            Node::Branch(b) => b.right.get_last(),
        }
    }

    pub(crate) fn set(&self, index: usize, value: T) -> Node<T> {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => leaf::set(values, index, value),
            Node::Branch(b) => {
                let left_size = b.left.size();
                if index < left_size {
                    balance::create_branch(b.left.set(index, value), b.right.clone())
                } else {
                    balance::create_branch(b.left.clone(), b.right.set(index - left_size, value))
                }
            }
        }
    }

    pub(crate) fn insert(&self, index: usize, value: T) -> Node<T> {
        match self {
            Node::Empty => {
                if index == 0 {
                    leaf::single_value(value)
                } else {
                    panic!("invalid index for empty node: {index}")
                }
            }
            Node::Leaf(values) => leaf::insert(values, index, value),
            Node::Branch(b) => {
                let left_size = b.left.size();
                let (new_left, new_right) = if index < left_size {
                    (b.left.insert(index, value), b.right.clone())
                } else {
                    (b.left.clone(), b.right.insert(index - left_size, value))
                };
                balance::create_balanced_branch(new_left, new_right)
            }
        }
    }

    pub(crate) fn delete(&self, index: usize) -> Node<T> {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => leaf::delete(values, index),
            Node::Branch(b) => {
                let left_size = b.left.size();
                if index < left_size {
                    let new_left = b.left.delete(index);
                    if new_left.is_empty() {
                        return b.right.clone();
                    }
                    balance::create_balanced_branch(new_left, b.right.clone())
                } else {
                    let new_right = b.right.delete(index - left_size);
                    if new_right.is_empty() {
                        return b.left.clone();
                    }
                    balance::create_balanced_branch(b.left.clone(), new_right)
                }
            }
        }
    }

    pub(crate) fn append(&self, value: T) -> Node<T> {
        match self {
            Node::Empty => leaf::single_value(value),
            Node::Leaf(values) => leaf::append(values, value),
            Node::Branch(b) => {
                balance::create_balanced_branch(b.left.clone(), b.right.append(value))
            }
        }
    }

    pub(crate) fn prepend(&self, value: T) -> Node<T> {
        match self {
            Node::Empty => leaf::single_value(value),
            Node::Leaf(values) => leaf::prepend(values, value),
            Node::Branch(b) => {
                balance::create_balanced_branch(b.left.prepend(value), b.right.clone())
            }
        }
    }

    pub(crate) fn pop(&self) -> (T, Node<T>) {
        match self {
            Node::Empty => panic!("not implemented for empty nodes"),
            Node::Leaf(values) => {
                let value = values[0].clone();
                (value, leaf::delete(values, 0))
            }
            Node::Branch(b) => {
                let (value, new_left) = b.left.pop();
                if new_left.is_empty() {
                    (value, b.right.clone())
                } else {
                    (value, balance::create_balanced_branch(new_left, b.right.clone()))
                }
            }
        }
    }

    pub(crate) fn head(&self, index: usize) -> Node<T> {
        match self {
            Node::Empty => {
                if index == 0 {
                    Node::Empty
                } else {
                    panic!("invalid index for empty node: {index}")
                }
            }
            Node::Leaf(values) => leaf::head(values, index),
            Node::Branch(b) => {
                let left_size = b.left.size();
                if index < left_size {
                    b.left.head(index)
                } else {
                    let new_right = b.right.head(index - left_size);
                    splice::append_nodes(&b.left, &new_right)
                }
            }
        }
    }

    pub(crate) fn tail(&self, index: usize) -> Node<T> {
        match self {
            Node::Empty => {
                if index == 0 {
                    Node::Empty
                } else {
                    panic!("invalid index for empty node: {index}")
                }
            }
            Node::Leaf(values) => leaf::tail(values, index),
            Node::Branch(b) => {
                let left_size = b.left.size();
                if index < left_size {
                    let new_left = b.left.tail(index);
                    splice::append_nodes(&new_left, &b.right)
                } else {
                    b.right.tail(index - left_size)
                }
            }
        }
    }

    pub(crate) fn for_each(&self, proc: &mut dyn FnMut(&T)) {
        match self {
            Node::Empty => {}
            Node::Leaf(values) => values.iter().for_each(|v| proc(v)),
            Node::Branch(b) => {
                b.left.for_each(proc);
                b.right.for_each(proc);
            }
        }
    }

    pub(crate) fn visit(&self, base: usize, start: usize, limit: usize, v: &mut dyn FnMut(usize, &T)) {
        match self {
            Node::Empty => {}
            Node::Leaf(values) => {
                let limit = limit.min(values.len());
                for i in start..limit {
                    v(base + i, &values[i]);
                }
            }
            Node::Branch(b) => {
                visit_child(&b.left, 0, base, start, limit, v);
                visit_child(&b.right, b.left.size(), base, start, limit, v);
            }
        }
    }

    pub(crate) fn check_invariants(&self, report: &mut dyn FnMut(String), is_root: bool) {
        match self {
            Node::Empty => {
                if !is_root {
                    report("emptyNode: should not exist below root".to_string());
                }
            }
            Node::Leaf(values) => {
                let current_size = values.len();
                if current_size < 1 || current_size > MAX_LEAF {
                    report(format!("incorrect size: currentSize={current_size}"));
                }
            }
            Node::Branch(b) => {
                if b.depth != balance::max_depth(&b.left, &b.right) + 1 {
                    report(format!(
                        "incorrect depth: depth={} leftDepth={} rightDepth={}",
                        b.depth,
                        b.left.depth(),
                        b.right.depth()
                    ));
                }
                if balance::depth_diff(&b.left, &b.right) > 1 {
                    report(format!(
                        "invalid child depths: leftDepth={} rightDepth={}",
                        b.left.depth(),
                        b.right.depth()
                    ));
                }
                if b.size != b.left.size() + b.right.size() {
                    report(format!(
                        "incorrect size: size={} leftSize={} rightSize={}",
                        b.size,
                        b.left.size(),
                        b.right.size()
                    ));
                }
                b.left.check_invariants(report, false);
                b.right.check_invariants(report, false);
            }
        }
    }
}

/// Restricts `start..limit` (expressed in the parent's index space) to the
/// child rooted at `offset`, then visits it in the child's own index space.
fn visit_child<T: Clone>(
    child: &Node<T>,
    offset: usize,
    base: usize,
    start: usize,
    limit: usize,
    v: &mut dyn FnMut(usize, &T),
) {
    let base = base + offset;
    let start = start.saturating_sub(offset);
    let limit = limit.saturating_sub(offset).min(child.size());
    if limit > start {
        child.visit(base, start, limit, v);
    }
}

pub(crate) use balance::{create_balanced_branch, create_branch};
pub(crate) use leaf::leaf_from_vec;
pub(crate) use splice::append_nodes;
