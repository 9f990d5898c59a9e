//! Domain Layer
//!
//! Workflow nodes, their items and the errors the store can report.
//! This layer has no web dependencies.

mod error;
mod item;
mod node;

pub use error::{WorkflowError, WorkflowResult};
pub use item::{IconKey, NodeItem};
pub use node::{Node, NodeId, NodeKind, Placement};
