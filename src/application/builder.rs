use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{NodeId, NodeKind, TreeArena};

/// TOML tree description: a nested node table plus an optional insertion script.
///
/// ```toml
/// [root]
/// name = "root"
///
/// [[root.children]]
/// name = "A"
/// kind = "leaf"
///
/// [[ops]]
/// op = "add_before"
/// target = "A"
/// name = "B"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TreeDescription {
    pub root: TreeSpec,
    #[serde(default)]
    pub ops: Vec<InsertOp>,
}

/// One node of a description. Children are attached with `add_last` in
/// document order.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeSpec {
    pub name: String,
    /// Defaults to `root` for the top node and `node` below it
    pub kind: Option<NodeKind>,
    #[serde(default)]
    pub children: Vec<TreeSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    AddFirst,
    AddLast,
    AddAfter,
    AddBefore,
}

/// Creates node `name` and links it relative to `target`.
///
/// For `add_first`/`add_last` the target is the parent, for
/// `add_after`/`add_before` it is the sibling anchor.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertOp {
    pub op: OpKind,
    pub target: String,
    pub name: String,
    pub kind: Option<NodeKind>,
}

impl InsertOp {
    pub fn new(op: OpKind, target: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            op,
            target: target.into(),
            name: name.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// A finished tree with its name index.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub arena: TreeArena<String>,
    pub root: NodeId,
    names: HashMap<String, NodeId>,
}

impl BuiltTree {
    pub fn id(&self, name: &str) -> ApplicationResult<NodeId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ApplicationError::UnknownName(name.to_string()))
    }

    pub fn pre_order_names(&self) -> Vec<&str> {
        self.arena
            .pre_order(self.root)
            .map(|(_, node)| node.data.as_str())
            .collect()
    }

    pub fn child_names(&self, name: &str) -> ApplicationResult<Vec<&str>> {
        let id = self.id(name)?;
        Ok(self
            .arena
            .children(id)
            .map(|(_, node)| node.data.as_str())
            .collect())
    }
}

/// Builds named trees through the linkage engine.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: TreeArena<String>,
    names: HashMap<String, NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build_from_file(&mut self, path: &Path) -> ApplicationResult<BuiltTree> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApplicationError::io(format!("read {}", path.display()), e))?;
        self.build_from_str(&content, path)
    }

    /// Parse and build; `origin` only labels parse errors.
    #[instrument(level = "debug", skip(self, content))]
    pub fn build_from_str(&mut self, content: &str, origin: &Path) -> ApplicationResult<BuiltTree> {
        let description: TreeDescription =
            toml::from_str(content).map_err(|e| ApplicationError::Parse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        self.build(&description)
    }

    #[instrument(level = "debug", skip_all, fields(root = %description.root.name))]
    pub fn build(&mut self, description: &TreeDescription) -> ApplicationResult<BuiltTree> {
        let root_kind = description.root.kind.unwrap_or(NodeKind::Root);
        let root = self.create(&description.root.name, root_kind)?;

        let mut stack: Vec<(&TreeSpec, NodeId)> = description
            .root
            .children
            .iter()
            .rev()
            .map(|child| (child, root))
            .collect();

        while let Some((spec, parent)) = stack.pop() {
            let id = self.create(&spec.name, spec.kind.unwrap_or_default())?;
            self.arena.add_last(parent, id)?;
            // Reverse push keeps document order when popping
            for child in spec.children.iter().rev() {
                stack.push((child, id));
            }
        }

        for op in &description.ops {
            self.apply(op)?;
        }
        Ok(self.finish(root))
    }

    /// Allocate a detached node under a fresh name.
    pub fn create(&mut self, name: &str, kind: NodeKind) -> ApplicationResult<NodeId> {
        if self.names.contains_key(name) {
            return Err(ApplicationError::DuplicateName(name.to_string()));
        }
        let id = match kind {
            NodeKind::Node => self.arena.create_node(name.to_string()),
            NodeKind::Root => self.arena.create_root(name.to_string()),
            NodeKind::Leaf => self.arena.create_leaf(name.to_string()),
        };
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Run one insertion step. The new node defaults to kind `node`.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, op: &InsertOp) -> ApplicationResult<NodeId> {
        let target = self.lookup(&op.target)?;
        let id = self.create(&op.name, op.kind.unwrap_or_default())?;
        let inserted = match op.op {
            OpKind::AddFirst => self.arena.add_first(target, id),
            OpKind::AddLast => self.arena.add_last(target, id),
            OpKind::AddAfter => self.arena.add_after(target, id),
            OpKind::AddBefore => self.arena.add_before(target, id),
        };
        debug!(name = %op.name, ok = inserted.is_ok(), "applied op");
        Ok(inserted?)
    }

    /// Link an already created node by name, without allocating.
    pub fn link(&mut self, op: OpKind, target: &str, name: &str) -> ApplicationResult<NodeId> {
        let target = self.lookup(target)?;
        let id = self.lookup(name)?;
        let inserted = match op {
            OpKind::AddFirst => self.arena.add_first(target, id),
            OpKind::AddLast => self.arena.add_last(target, id),
            OpKind::AddAfter => self.arena.add_after(target, id),
            OpKind::AddBefore => self.arena.add_before(target, id),
        }?;
        Ok(inserted)
    }

    /// Hand out the built tree and reset the builder.
    pub fn finish(&mut self, root: NodeId) -> BuiltTree {
        BuiltTree {
            arena: std::mem::take(&mut self.arena),
            root,
            names: std::mem::take(&mut self.names),
        }
    }

    fn lookup(&self, name: &str) -> ApplicationResult<NodeId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ApplicationError::UnknownName(name.to_string()))
    }
}
