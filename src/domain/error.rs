//! Linkage errors (no external dependencies beyond thiserror)

use thiserror::Error;

use crate::domain::node::{NodeId, Role};

/// Structural invariant violations.
///
/// Every variant is raised before any link is written, so a failed operation
/// leaves the arena exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid child {0:?}: sibling links set without a parent")]
    InvalidChild(NodeId),

    #[error("invalid parent {0:?}: first/last child presence differs")]
    InvalidParent(NodeId),

    #[error("node {0:?} is already attached to a parent")]
    AlreadyAttached(NodeId),

    #[error("node {0:?} is not a child: no parent to anchor a sibling splice")]
    NotAChild(NodeId),

    #[error("unknown node handle: {0:?}")]
    UnknownNode(NodeId),

    #[error("node {node:?} lacks the {role} role")]
    MissingRole { node: NodeId, role: Role },

    #[error("cycle detected: {0:?} is an ancestor of the insertion target")]
    CycleDetected(NodeId),

    #[error("inconsistent links at {node:?}: {detail}")]
    Inconsistent { node: NodeId, detail: &'static str },
}

/// Result type for linkage operations.
pub type LinkResult<T> = Result<T, LinkError>;
