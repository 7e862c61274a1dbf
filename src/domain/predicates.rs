//! Validity predicates over a single node.
//!
//! All checks are O(1) and only read the node's own link fields.

use crate::domain::error::{LinkError, LinkResult};
use crate::domain::node::{NodeId, TreeNode};

/// `first` is present iff `last` is present.
pub fn is_valid_parent<T>(node: &TreeNode<T>) -> bool {
    node.first.is_some() == node.last.is_some()
}

/// Either attached, or unlinked from any sibling chain.
pub fn is_valid_child<T>(node: &TreeNode<T>) -> bool {
    node.parent.is_some() || (node.next.is_none() && node.prev.is_none())
}

pub fn is_valid_node<T>(node: &TreeNode<T>) -> bool {
    is_valid_parent(node) && is_valid_child(node)
}

pub fn is_root<T>(node: &TreeNode<T>) -> bool {
    node.parent.is_none()
}

pub fn is_child<T>(node: &TreeNode<T>) -> bool {
    node.parent.is_some()
}

/// Whether the node currently has children.
///
/// Only meaningful for a valid parent; a corrupt one is reported as
/// [`LinkError::InvalidParent`] with the given handle.
pub fn is_parent<T>(id: NodeId, node: &TreeNode<T>) -> LinkResult<bool> {
    if !is_valid_parent(node) {
        return Err(LinkError::InvalidParent(id));
    }
    Ok(node.first.is_some())
}
