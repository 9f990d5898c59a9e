//! Domain Errors
//!
//! Errors returned by rejected store actions and bad editor config.

use thiserror::Error;

use super::node::NodeId;

/// Common result type for store and config operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A side node was requested for a parent that does not exist
    #[error("unknown parent node: {0}")]
    UnknownParent(NodeId),
    /// A side node was requested for a parent that is not on the main sequence
    #[error("node {0} cannot carry side branches")]
    InvalidParent(NodeId),
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
}
