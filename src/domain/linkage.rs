//! The four insertion primitives.
//!
//! Each operation runs its complete precondition check first and only then
//! writes links, so a rejected call never leaves a half-linked structure.

use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::node::{NodeId, Role, TreeNode};
use crate::domain::predicates::{is_root, is_valid_child, is_valid_parent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

impl<T> TreeArena<T> {
    /// Insert `node` as the head of `parent`'s child list.
    #[instrument(level = "trace", skip(self))]
    pub fn add_first(&mut self, parent: NodeId, node: NodeId) -> LinkResult<NodeId> {
        let (old_first, _) = self
            .check_insert(parent, node)
            .inspect_err(|e| debug!(error = %e, "add_first rejected"))?;

        if let Some(first) = old_first {
            self.arena[first].prev = Some(node);
        }
        let inserted = &mut self.arena[node];
        inserted.next = old_first;
        inserted.parent = Some(parent);

        let owner = &mut self.arena[parent];
        owner.first = Some(node);
        if owner.last.is_none() {
            owner.last = Some(node);
        }
        debug!(?parent, ?node, "add_first");
        Ok(node)
    }

    /// Insert `node` as the tail of `parent`'s child list.
    #[instrument(level = "trace", skip(self))]
    pub fn add_last(&mut self, parent: NodeId, node: NodeId) -> LinkResult<NodeId> {
        let (_, old_last) = self
            .check_insert(parent, node)
            .inspect_err(|e| debug!(error = %e, "add_last rejected"))?;

        if let Some(last) = old_last {
            self.arena[last].next = Some(node);
        }
        let inserted = &mut self.arena[node];
        inserted.prev = old_last;
        inserted.parent = Some(parent);

        let owner = &mut self.arena[parent];
        owner.last = Some(node);
        if owner.first.is_none() {
            owner.first = Some(node);
        }
        debug!(?parent, ?node, "add_last");
        Ok(node)
    }

    /// Insert `node` directly after the attached node `existing`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_after(&mut self, existing: NodeId, node: NodeId) -> LinkResult<NodeId> {
        let (parent, old_next) = self
            .check_splice(existing, node, Side::After)
            .inspect_err(|e| debug!(error = %e, "add_after rejected"))?;

        match old_next {
            Some(next) => {
                self.arena[next].prev = Some(node);
                self.arena[node].next = Some(next);
            }
            None => self.arena[parent].last = Some(node),
        }
        let inserted = &mut self.arena[node];
        inserted.prev = Some(existing);
        inserted.parent = Some(parent);
        self.arena[existing].next = Some(node);

        debug!(?existing, ?node, "add_after");
        Ok(node)
    }

    /// Insert `node` directly before the attached node `existing`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_before(&mut self, existing: NodeId, node: NodeId) -> LinkResult<NodeId> {
        let (parent, old_prev) = self
            .check_splice(existing, node, Side::Before)
            .inspect_err(|e| debug!(error = %e, "add_before rejected"))?;

        match old_prev {
            Some(prev) => {
                self.arena[prev].next = Some(node);
                self.arena[node].prev = Some(prev);
            }
            None => self.arena[parent].first = Some(node),
        }
        let inserted = &mut self.arena[node];
        inserted.next = Some(existing);
        inserted.parent = Some(parent);
        self.arena[existing].prev = Some(node);

        debug!(?existing, ?node, "add_before");
        Ok(node)
    }

    /// Checks for `add_first`/`add_last`. Returns the parent's current ends.
    fn check_insert(
        &self,
        parent: NodeId,
        node: NodeId,
    ) -> LinkResult<(Option<NodeId>, Option<NodeId>)> {
        let owner = self.node(parent)?;
        let inserted = self.node(node)?;
        require_role(parent, owner, Role::Parent)?;
        require_insertable(node, inserted)?;

        if !is_valid_child(inserted) {
            return Err(LinkError::InvalidChild(node));
        }
        if !is_valid_parent(owner) {
            return Err(LinkError::InvalidParent(parent));
        }
        if !is_root(inserted) {
            return Err(LinkError::AlreadyAttached(node));
        }
        self.check_acyclic(parent, node)?;

        for end in [owner.first, owner.last].into_iter().flatten() {
            self.node(end)?;
        }
        Ok((owner.first, owner.last))
    }

    /// Checks for `add_after`/`add_before`. Returns the anchor's parent and the
    /// neighbour on `side` that the new node is spliced against, if any.
    fn check_splice(
        &self,
        existing: NodeId,
        node: NodeId,
        side: Side,
    ) -> LinkResult<(NodeId, Option<NodeId>)> {
        let anchor = self.node(existing)?;
        let inserted = self.node(node)?;
        require_insertable(node, inserted)?;

        if !is_valid_child(inserted) {
            return Err(LinkError::InvalidChild(node));
        }
        let parent = anchor.parent.ok_or(LinkError::NotAChild(existing))?;
        let owner = self.node(parent)?;
        if !is_valid_parent(owner) {
            return Err(LinkError::InvalidParent(parent));
        }
        if !is_root(inserted) {
            return Err(LinkError::AlreadyAttached(node));
        }
        self.check_acyclic(parent, node)?;

        let (end, neighbour, detail) = match side {
            Side::After => (owner.last, anchor.next, "no next sibling but not the last child"),
            Side::Before => (owner.first, anchor.prev, "no previous sibling but not the first child"),
        };
        if end == Some(existing) {
            return Ok((parent, None));
        }
        let neighbour = neighbour.ok_or(LinkError::Inconsistent {
            node: existing,
            detail,
        })?;
        self.node(neighbour)?;
        Ok((parent, Some(neighbour)))
    }

    /// Rejects attaching `node` below itself or one of its own descendants.
    fn check_acyclic(&self, parent: NodeId, node: NodeId) -> LinkResult<()> {
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == node {
                return Err(LinkError::CycleDetected(node));
            }
            current = self.node(id)?.parent;
        }
        Ok(())
    }
}

fn require_role<T>(id: NodeId, node: &TreeNode<T>, role: Role) -> LinkResult<()> {
    if node.has_role(role) {
        Ok(())
    } else {
        Err(LinkError::MissingRole { node: id, role })
    }
}

fn require_insertable<T>(id: NodeId, node: &TreeNode<T>) -> LinkResult<()> {
    require_role(id, node, Role::Child)?;
    require_role(id, node, Role::Sibling)
}
