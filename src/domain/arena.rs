use generational_arena::Arena;
use tracing::instrument;

use crate::domain::error::{LinkError, LinkResult};
use crate::domain::node::{NodeId, NodeKind, TreeNode};

/// Arena owning every node of one or more trees.
///
/// Uses a generational arena so that stale handles are detected instead of
/// silently aliasing a recycled slot. Structure lives entirely in the links of
/// the stored [`TreeNode`]s; the arena itself tracks no roots.
#[derive(Debug, Clone)]
pub struct TreeArena<T> {
    pub(crate) arena: Arena<TreeNode<T>>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Full node: may parent children and be a child with siblings.
    pub fn create_node(&mut self, data: T) -> NodeId {
        self.arena.insert(TreeNode::detached(data, NodeKind::Node))
    }

    /// Parent-only node, the entry point of a tree.
    pub fn create_root(&mut self, data: T) -> NodeId {
        self.arena.insert(TreeNode::detached(data, NodeKind::Root))
    }

    /// Child + sibling node that can never have children.
    pub fn create_leaf(&mut self, data: T) -> NodeId {
        self.arena.insert(TreeNode::detached(data, NodeKind::Leaf))
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    /// Like [`get_node`](Self::get_node) but reports a stale handle as an error.
    pub fn node(&self, id: NodeId) -> LinkResult<&TreeNode<T>> {
        self.arena.get(id).ok_or(LinkError::UnknownNode(id))
    }

    /// Mutable access to the payload only; links change through linkage operations.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.data)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// All nodes in slot order, attached or not.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<T>)> {
        self.arena.iter()
    }

    /// Direct children of `parent`, following `first` then `next`.
    #[instrument(level = "trace", skip(self))]
    pub fn children(&self, parent: NodeId) -> Children<'_, T> {
        Children {
            arena: self,
            next: self.get_node(parent).and_then(|node| node.first),
        }
    }

    /// Depth-first pre-order walk of the subtree at `start`.
    #[instrument(level = "trace", skip(self))]
    pub fn pre_order(&self, start: NodeId) -> PreOrder<'_, T> {
        PreOrder {
            arena: self,
            start,
            next: self.contains(start).then_some(start),
        }
    }
}

pub struct Children<'a, T> {
    arena: &'a TreeArena<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let node = self.arena.get_node(current)?;
        self.next = node.next;
        Some((current, node))
    }
}

/// Pre-order iterator built from `first`, `next` and `parent` links alone.
///
/// Needs no stack: after a node without children it climbs the parent chain
/// until a node with a next sibling turns up. The walk never leaves the
/// subtree rooted at `start`.
pub struct PreOrder<'a, T> {
    arena: &'a TreeArena<T>,
    start: NodeId,
    next: Option<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    fn successor(&self, id: NodeId, node: &TreeNode<T>) -> Option<NodeId> {
        if let Some(first) = node.first {
            return Some(first);
        }
        let mut current = id;
        let mut current_node = node;
        loop {
            if current == self.start {
                return None;
            }
            if let Some(next) = current_node.next {
                return Some(next);
            }
            current = current_node.parent?;
            current_node = self.arena.get_node(current)?;
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let node = self.arena.get_node(current)?;
        self.next = self.successor(current, node);
        Some((current, node))
    }
}
