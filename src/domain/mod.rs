//! Domain layer: the linkage engine
//!
//! Pure structural operations over arena-allocated nodes (no I/O, no CLI, no config loading).

pub mod arena;
pub mod consistency;
pub mod error;
pub mod linkage;
pub mod node;
pub mod predicates;

pub use arena::{Children, PreOrder, TreeArena};
pub use error::{LinkError, LinkResult};
pub use node::{NodeId, NodeKind, Role, TreeNode};
pub use predicates::{is_child, is_parent, is_root, is_valid_child, is_valid_node, is_valid_parent};
