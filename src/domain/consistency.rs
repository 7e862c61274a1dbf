use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::node::NodeId;
use crate::domain::predicates::{is_valid_child, is_valid_parent};

impl<T> TreeArena<T> {
    /// Verifies every node of the subtree at `root`.
    ///
    /// Beyond the per-node predicates this checks that each child list is a
    /// proper doubly linked chain: children point back at their parent, `prev`
    /// mirrors `next`, and the chain ends exactly at the parent's `last`.
    #[instrument(level = "debug", skip(self))]
    pub fn check_tree(&self, root: NodeId) -> LinkResult<()> {
        self.node(root)?;
        let mut visited = 0usize;
        for (id, node) in self.pre_order(root) {
            visited += 1;
            if !is_valid_parent(node) {
                return Err(LinkError::InvalidParent(id));
            }
            if !is_valid_child(node) {
                return Err(LinkError::InvalidChild(id));
            }
            self.check_child_chain(id)?;
        }
        debug!(visited, "tree consistent");
        Ok(())
    }

    fn check_child_chain(&self, parent: NodeId) -> LinkResult<()> {
        let owner = self.node(parent)?;
        let mut expected_prev: Option<NodeId> = None;
        let mut current = owner.first;

        while let Some(id) = current {
            let child = self.node(id)?;
            if child.parent != Some(parent) {
                return Err(LinkError::Inconsistent {
                    node: id,
                    detail: "parent link does not point at the owning parent",
                });
            }
            if child.prev != expected_prev {
                return Err(LinkError::Inconsistent {
                    node: id,
                    detail: "previous sibling does not mirror next sibling",
                });
            }
            if child.next.is_some() && owner.last == Some(id) {
                return Err(LinkError::Inconsistent {
                    node: id,
                    detail: "last child has a next sibling",
                });
            }
            expected_prev = Some(id);
            current = child.next;
        }

        if owner.last != expected_prev {
            return Err(LinkError::Inconsistent {
                node: parent,
                detail: "child chain does not end at the last child",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (TreeArena<&'static str>, [NodeId; 4]) {
        let mut arena = TreeArena::new();
        let r = arena.create_root("r");
        let a = arena.create_leaf("a");
        let b = arena.create_leaf("b");
        let c = arena.create_leaf("c");
        for child in [a, b, c] {
            arena.add_last(r, child).unwrap();
        }
        (arena, [r, a, b, c])
    }

    #[test]
    fn test_well_formed_tree_passes() {
        let (arena, [r, ..]) = abc();
        assert_eq!(arena.check_tree(r), Ok(()));
    }

    #[test]
    fn test_broken_prev_link_detected() {
        let (mut arena, [r, a, _, c]) = abc();
        arena.arena[c].prev = Some(a);
        assert_eq!(
            arena.check_tree(r),
            Err(LinkError::Inconsistent {
                node: c,
                detail: "previous sibling does not mirror next sibling",
            })
        );
    }

    #[test]
    fn test_wrong_last_detected() {
        let (mut arena, [r, _, b, _]) = abc();
        arena.arena[r].last = Some(b);
        assert!(matches!(
            arena.check_tree(r),
            Err(LinkError::Inconsistent { node, .. }) if node == b
        ));
    }

    #[test]
    fn test_foreign_parent_link_detected() {
        let (mut arena, [r, a, b, _]) = abc();
        arena.arena[b].parent = Some(a);
        assert!(matches!(
            arena.check_tree(r),
            Err(LinkError::Inconsistent { node, .. }) if node == b
        ));
    }
}
