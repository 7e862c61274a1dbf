use std::fmt::Display;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeId, TreeArena};

/// Converts a subtree into printable forms.
pub trait TreeRender {
    fn to_tree_string(&self, root: NodeId) -> Tree<String>;

    /// Comma separated pre-order listing
    fn to_pre_order_string(&self, root: NodeId) -> String;
}

impl<T: Display> TreeRender for TreeArena<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: NodeId) -> Tree<String> {
        fn build<T: Display>(arena: &TreeArena<T>, id: NodeId, label: String) -> Tree<String> {
            let leaves: Vec<_> = arena
                .children(id)
                .map(|(child, node)| build(arena, child, node.data.to_string()))
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        match self.get_node(root) {
            Some(node) => build(self, root, node.data.to_string()),
            None => Tree::new("Empty tree".to_string()),
        }
    }

    fn to_pre_order_string(&self, root: NodeId) -> String {
        self.pre_order(root).map(|(_, node)| &node.data).join(",")
    }
}
