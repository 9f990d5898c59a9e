//! Workflow Core
//!
//! Platform-independent state for the onboarding workflow editor:
//! - domain: nodes, kinds, items and errors
//! - store: editor state and its pure reducer
//! - layout: vertical offsets for side-branch connectors
//! - seed: the default onboarding chain
//! - config: editor configuration

pub mod config;
pub mod domain;
pub mod layout;
pub mod seed;
pub mod store;

pub use config::{EditorConfig, SideParentPolicy};
pub use domain::{
    IconKey, Node, NodeId, NodeItem, NodeKind, Placement, WorkflowError, WorkflowResult,
};
pub use layout::{offset_of, offsets, LayoutMetrics};
pub use seed::onboarding_workflow;
pub use store::{Action, EditDraft, EditorState};
