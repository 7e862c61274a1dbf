//! Node shapes and role links

use std::fmt;

use generational_arena::Index;
use serde::{Deserialize, Serialize};

/// Handle of a node inside a [`TreeArena`](crate::domain::TreeArena).
pub type NodeId = Index;

/// A capability a node shape may or may not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Owns a child list through `first`/`last`.
    Parent,
    /// Has a single `parent` back-reference.
    Child,
    /// Doubly linked to its neighbours via `next`/`prev`.
    Sibling,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Parent => "parent",
            Role::Child => "child",
            Role::Sibling => "sibling",
        };
        f.write_str(name)
    }
}

/// Concrete node shape, i.e. the combination of roles it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Parent + Child + Sibling.
    #[default]
    Node,
    /// Parent only: an entry point that can never be attached.
    Root,
    /// Child + Sibling: can never have children.
    Leaf,
}

impl NodeKind {
    pub fn has_role(self, role: Role) -> bool {
        match (self, role) {
            (NodeKind::Node, _) => true,
            (NodeKind::Root, Role::Parent) => true,
            (NodeKind::Root, _) => false,
            (NodeKind::Leaf, Role::Parent) => false,
            (NodeKind::Leaf, _) => true,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Node => "node",
            NodeKind::Root => "root",
            NodeKind::Leaf => "leaf",
        };
        f.write_str(name)
    }
}

/// Tree node stored in the arena.
///
/// Links are handles, never owning pointers. Fields that belong to a role the
/// node's kind lacks stay `None` for the node's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Caller payload
    pub data: T,
    kind: NodeKind,
    pub(crate) first: Option<NodeId>,
    pub(crate) last: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) fn detached(data: T, kind: NodeKind) -> Self {
        Self {
            data,
            kind,
            first: None,
            last: None,
            parent: None,
            next: None,
            prev: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.kind.has_role(role)
    }

    /// First child in sibling order.
    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    /// Last child in sibling order.
    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table() {
        assert!(NodeKind::Node.has_role(Role::Parent));
        assert!(NodeKind::Node.has_role(Role::Child));
        assert!(NodeKind::Node.has_role(Role::Sibling));

        assert!(NodeKind::Root.has_role(Role::Parent));
        assert!(!NodeKind::Root.has_role(Role::Child));
        assert!(!NodeKind::Root.has_role(Role::Sibling));

        assert!(!NodeKind::Leaf.has_role(Role::Parent));
        assert!(NodeKind::Leaf.has_role(Role::Child));
        assert!(NodeKind::Leaf.has_role(Role::Sibling));
    }

    #[test]
    fn test_kind_parses_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            kind: NodeKind,
        }
        let holder: Holder = toml::from_str(r#"kind = "leaf""#).unwrap();
        assert_eq!(holder.kind, NodeKind::Leaf);
    }
}
