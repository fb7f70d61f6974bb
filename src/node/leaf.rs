//! Leaf-local operations: construction, splitting, and the small rebuilds
//! that back every leaf-level mutation.
//!
//! A leaf stores its values in an `Rc<[T]>`. All mutating operations here
//! rebuild a fresh slice (mirroring the copy-then-mutate pattern any
//! persistent structure needs); the cases that don't change the leaf's
//! contents at all (`head`/`tail` at the boundary) instead clone the `Rc`
//! so the new node shares storage with the old one.

use std::rc::Rc;

use super::{Node, MAX_LEAF};

pub(super) fn leaf_from_vec<T>(values: Vec<T>) -> Node<T> {
    Node::Leaf(Rc::from(values))
}

pub(super) fn single_value<T>(value: T) -> Node<T> {
    leaf_from_vec(vec![value])
}

pub(super) fn set<T: Clone>(values: &Rc<[T]>, index: usize, value: T) -> Node<T> {
    let current_size = values.len();
    if index >= current_size {
        panic!("invalid index for leaf node: {index}");
    }
    let mut new_values = values.to_vec();
    new_values[index] = value;
    leaf_from_vec(new_values)
}

pub(super) fn insert<T: Clone>(values: &Rc<[T]>, index: usize, value: T) -> Node<T> {
    let current_size = values.len();
    if index > current_size {
        panic!("invalid index for leaf node: {index}");
    }
    if index == 0 {
        return prepend(values, value);
    }
    if index == current_size {
        return append(values, value);
    }
    if current_size < MAX_LEAF {
        let mut new_values = Vec::with_capacity(current_size + 1);
        new_values.extend_from_slice(&values[..index]);
        new_values.push(value);
        new_values.extend_from_slice(&values[index..]);
        leaf_from_vec(new_values)
    } else {
        let mut left = Vec::with_capacity(index);
        left.extend_from_slice(&values[..index]);
        let mut right = Vec::with_capacity(current_size + 1 - index);
        right.push(value);
        right.extend_from_slice(&values[index..]);
        super::create_branch(leaf_from_vec(left), leaf_from_vec(right))
    }
}

pub(super) fn delete<T: Clone>(values: &Rc<[T]>, index: usize) -> Node<T> {
    let current_size = values.len();
    if index >= current_size {
        panic!("invalid index for leaf node: {index}");
    }
    if current_size == 1 {
        return Node::Empty;
    }
    let mut new_values = Vec::with_capacity(current_size - 1);
    new_values.extend_from_slice(&values[..index]);
    new_values.extend_from_slice(&values[index + 1..]);
    leaf_from_vec(new_values)
}

pub(super) fn append<T: Clone>(values: &Rc<[T]>, value: T) -> Node<T> {
    let current_size = values.len();
    if current_size < MAX_LEAF {
        let mut new_values = values.to_vec();
        new_values.push(value);
        leaf_from_vec(new_values)
    } else {
        super::create_branch(Node::Leaf(Rc::clone(values)), single_value(value))
    }
}

pub(super) fn prepend<T: Clone>(values: &Rc<[T]>, value: T) -> Node<T> {
    let current_size = values.len();
    if current_size < MAX_LEAF {
        let mut new_values = Vec::with_capacity(current_size + 1);
        new_values.push(value);
        new_values.extend_from_slice(values);
        leaf_from_vec(new_values)
    } else {
        super::create_branch(single_value(value), Node::Leaf(Rc::clone(values)))
    }
}

pub(super) fn head<T: Clone>(values: &Rc<[T]>, index: usize) -> Node<T> {
    let current_size = values.len();
    if index > current_size {
        panic!("invalid index for leaf node: {index}");
    }
    if index == 0 {
        Node::Empty
    } else if index == current_size {
        Node::Leaf(Rc::clone(values))
    } else {
        leaf_from_vec(values[..index].to_vec())
    }
}

pub(super) fn tail<T: Clone>(values: &Rc<[T]>, index: usize) -> Node<T> {
    let current_size = values.len();
    if index > current_size {
        panic!("invalid index for leaf node: {index}");
    }
    if index == 0 {
        Node::Leaf(Rc::clone(values))
    } else if index == current_size {
        Node::Empty
    } else {
        leaf_from_vec(values[index..].to_vec())
    }
}

/// Combines this leaf with `other`, which must not be deeper than this
/// leaf (i.e. it is itself a leaf or empty). Two leaves whose combined
/// size still fits in one leaf are merged in place; otherwise a branch is
/// created over both.
pub(super) fn append_node<T: Clone>(values: &Rc<[T]>, other: &Node<T>) -> Node<T> {
    if other.is_empty() {
        return Node::Leaf(Rc::clone(values));
    }
    if let Node::Leaf(o) = other {
        let combined = values.len() + o.len();
        if combined <= MAX_LEAF {
            let mut new_values = Vec::with_capacity(combined);
            new_values.extend_from_slice(values);
            new_values.extend_from_slice(o);
            return leaf_from_vec(new_values);
        }
    }
    super::create_branch(Node::Leaf(Rc::clone(values)), other.clone())
}

pub(super) fn prepend_node<T: Clone>(values: &Rc<[T]>, other: &Node<T>) -> Node<T> {
    if other.is_empty() {
        return Node::Leaf(Rc::clone(values));
    }
    if let Node::Leaf(o) = other {
        let combined = o.len() + values.len();
        if combined <= MAX_LEAF {
            let mut new_values = Vec::with_capacity(combined);
            new_values.extend_from_slice(o);
            new_values.extend_from_slice(values);
            return leaf_from_vec(new_values);
        }
    }
    super::create_branch(other.clone(), Node::Leaf(Rc::clone(values)))
}
