//! Application layer: tree descriptions, scenarios and rendering
//!
//! This layer drives the linkage engine; it owns file reading and naming.

pub mod builder;
pub mod error;
pub mod render;
pub mod scenario;

pub use builder::{BuiltTree, InsertOp, OpKind, TreeBuilder, TreeDescription, TreeSpec};
pub use error::{ApplicationError, ApplicationResult};
pub use render::TreeRender;
pub use scenario::Scenario;
