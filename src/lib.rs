//! Intrusive arena tree.
//!
//! Every node can play three roles at once: parent (owns a `first`/`last`
//! child list), child (one `parent` back-reference) and sibling (doubly linked
//! `next`/`prev`). All references are generational arena handles, so the
//! natural parent/child and sibling cycles never become ownership cycles.
//!
//! ```
//! use linktree::domain::TreeArena;
//!
//! let mut arena = TreeArena::new();
//! let root = arena.create_root("root");
//! let a = arena.create_leaf("a");
//! let c = arena.create_leaf("c");
//! let b = arena.create_leaf("b");
//! arena.add_last(root, a)?;
//! arena.add_last(root, c)?;
//! arena.add_before(c, b)?;
//!
//! let order: Vec<_> = arena.children(root).map(|(_, n)| n.data).collect();
//! assert_eq!(order, ["a", "b", "c"]);
//! # Ok::<(), linktree::domain::LinkError>(())
//! ```
//!
//! # Layers
//! - [`domain`]: the linkage engine (nodes, predicates, insertions, iteration)
//! - [`application`]: TOML tree descriptions, built-in scenarios, rendering
//! - [`config`]: layered settings
//! - [`cli`]: the `linktree` binary's argument parsing and dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
