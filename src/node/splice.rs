//! The concat engine: splicing two balanced subtrees of arbitrary depths
//! into one balanced tree. This backs `AppendList`/`InsertList` on the
//! façade as well as the recombination step inside `head`/`tail` on a
//! branch.

use super::balance::{create_balanced_branch, create_branch, depth_diff};
use super::{leaf, Node};

impl<T: Clone> Node<T> {
    /// Appends `other` (which must not be deeper than `self`) onto the
    /// right of `self`, rebalancing along the way.
    pub(crate) fn append_node(&self, other: &Node<T>) -> Node<T> {
        match self {
            Node::Empty => {
                if other.depth() != 0 {
                    panic!("appending branch to leaf");
                }
                other.clone()
            }
            Node::Leaf(values) => leaf::append_node(values, other),
            Node::Branch(b) => {
                if other.depth() > self.depth() {
                    panic!("appending larger node to smaller node");
                }
                if depth_diff(other, self) <= 1 {
                    create_branch(self.clone(), other.clone())
                } else {
                    create_balanced_branch(b.left.clone(), b.right.append_node(other))
                }
            }
        }
    }

    /// Mirror of [`Node::append_node`]: prepends `other` onto the left of
    /// `self`.
    pub(crate) fn prepend_node(&self, other: &Node<T>) -> Node<T> {
        match self {
            Node::Empty => {
                if other.depth() != 0 {
                    panic!("prepending branch to leaf");
                }
                other.clone()
            }
            Node::Leaf(values) => leaf::prepend_node(values, other),
            Node::Branch(b) => {
                if other.depth() > self.depth() {
                    panic!("prepending larger node to smaller node");
                }
                if depth_diff(other, self) <= 1 {
                    create_branch(other.clone(), self.clone())
                } else {
                    create_balanced_branch(b.left.prepend_node(other), b.right.clone())
                }
            }
        }
    }
}

/// Top-level splice dispatcher: concatenates `a` and `b`, choosing
/// whichever side is shallower to walk down so the whole operation costs
/// `O(|depth(a) - depth(b)|)` rotations.
pub(crate) fn append_nodes<T: Clone>(a: &Node<T>, b: &Node<T>) -> Node<T> {
    if a.is_empty() {
        b.clone()
    } else if b.is_empty() {
        a.clone()
    } else if a.depth() < b.depth() {
        b.prepend_node(a)
    } else {
        a.append_node(b)
    }
}
