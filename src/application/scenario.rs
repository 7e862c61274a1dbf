//! Built-in demonstration scenarios

use std::fmt;

use clap::ValueEnum;
use tracing::instrument;

use crate::application::builder::{BuiltTree, OpKind, TreeBuilder};
use crate::application::error::ApplicationResult;
use crate::domain::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Root with children 1..3, each with three children of its own
    ThreeLevel,
    /// Sibling chain [A, C], then B inserted before C
    Splice,
    /// All four primitives, including splices into the middle of a chain
    Mixed,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::ThreeLevel, Scenario::Splice, Scenario::Mixed];

    #[instrument(level = "debug")]
    pub fn build(self) -> ApplicationResult<BuiltTree> {
        let mut builder = TreeBuilder::new();
        let root = builder.create("root", NodeKind::Root)?;
        match self {
            Scenario::ThreeLevel => {
                for i in 1..=3 {
                    let name = i.to_string();
                    builder.create(&name, NodeKind::Node)?;
                    builder.link(OpKind::AddLast, "root", &name)?;
                    for j in 1..=3 {
                        let leaf = format!("{i}{j}");
                        builder.create(&leaf, NodeKind::Leaf)?;
                        builder.link(OpKind::AddLast, &name, &leaf)?;
                    }
                }
            }
            Scenario::Splice => {
                for name in ["A", "C", "B"] {
                    builder.create(name, NodeKind::Leaf)?;
                }
                builder.link(OpKind::AddLast, "root", "A")?;
                builder.link(OpKind::AddLast, "root", "C")?;
                builder.link(OpKind::AddBefore, "C", "B")?;
            }
            Scenario::Mixed => {
                for name in ["a", "b", "c", "d", "e"] {
                    builder.create(name, NodeKind::Leaf)?;
                }
                builder.link(OpKind::AddLast, "root", "c")?;
                builder.link(OpKind::AddFirst, "root", "a")?;
                builder.link(OpKind::AddAfter, "a", "b")?;
                builder.link(OpKind::AddLast, "root", "e")?;
                builder.link(OpKind::AddBefore, "e", "d")?;
            }
        }
        Ok(builder.finish(root))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::ThreeLevel => "three-level",
            Scenario::Splice => "splice",
            Scenario::Mixed => "mixed",
        };
        f.write_str(name)
    }
}
