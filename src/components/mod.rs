//! UI Components
//!
//! Leptos components for the workflow canvas and its dialogs.

mod add_side_modal;
mod edit_node_modal;
mod icons;
mod node_card;
mod side_branch;
mod workflow_canvas;

pub use add_side_modal::AddSideModal;
pub use edit_node_modal::EditNodeModal;
pub use icons::{ItemIcon, KindIcon};
pub use node_card::{NodeCard, SentinelPill};
pub use side_branch::SideBranch;
pub use workflow_canvas::WorkflowCanvas;
