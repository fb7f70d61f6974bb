//! The balancing protocol: plain and balanced branch construction, and the
//! single/double rotations that restore the AVL invariant
//! `|depth(left) - depth(right)| <= 1`.

use std::rc::Rc;

use super::{BranchData, Node};

pub(crate) fn max_depth<T>(left: &Node<T>, right: &Node<T>) -> usize {
    left.depth().max(right.depth())
}

pub(crate) fn depth_diff<T>(left: &Node<T>, right: &Node<T>) -> usize {
    let (l, r) = (left.depth(), right.depth());
    l.max(r) - l.min(r)
}

/// Builds a branch over `left`/`right` as-is, without checking balance.
/// Callers must already know the pair satisfies the AVL invariant (e.g.
/// `set`, which never changes a subtree's depth).
pub(crate) fn create_branch<T>(left: Node<T>, right: Node<T>) -> Node<T> {
    let size = left.size() + right.size();
    let depth = 1 + max_depth(&left, &right);
    Node::Branch(Rc::new(BranchData {
        left,
        right,
        size,
        depth,
    }))
}

/// Builds a branch over `left`/`right`, rotating first if they differ in
/// depth by more than one. This is the single entry point every mutating
/// node operation uses to recombine a changed child with its sibling.
pub(crate) fn create_balanced_branch<T: Clone>(left: Node<T>, right: Node<T>) -> Node<T> {
    let diff = left.depth() as isize - right.depth() as isize;
    if diff > 1 {
        rotate_right(&left, right)
    } else if diff < -1 {
        rotate_left(&right, left)
    } else {
        create_branch(left, right)
    }
}

/// Rotates `self` (too deep on its own left side relative to the sibling
/// that will end up on its right) against an incoming right sibling
/// `parent_right`.
fn rotate_right<T: Clone>(node: &Node<T>, parent_right: Node<T>) -> Node<T> {
    match node {
        Node::Branch(b) => {
            if b.left.depth() >= b.right.depth() {
                create_branch(b.left.clone(), create_branch(b.right.clone(), parent_right))
            } else {
                create_branch(
                    create_branch(b.left.clone(), b.right.left_child().clone()),
                    create_branch(b.right.right_child().clone(), parent_right),
                )
            }
        }
        _ => panic!("not implemented for leaf node"),
    }
}

/// Mirror of [`rotate_right`]: `node` is too deep on its own right side,
/// rotated against an incoming left sibling `parent_left`.
fn rotate_left<T: Clone>(node: &Node<T>, parent_left: Node<T>) -> Node<T> {
    match node {
        Node::Branch(b) => {
            if b.left.depth() > b.right.depth() {
                create_branch(
                    create_branch(parent_left, b.left.left_child().clone()),
                    create_branch(b.left.right_child().clone(), b.right.clone()),
                )
            } else {
                create_branch(create_branch(parent_left, b.left.clone()), b.right.clone())
            }
        }
        _ => panic!("not implemented for leaf node"),
    }
}
