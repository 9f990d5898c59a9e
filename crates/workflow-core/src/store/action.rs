//! Store Actions
//!
//! Every user interaction is an `Action`; `EditorState::reduce` turns the
//! current state and an action into the next state.

use std::sync::Arc;

use tracing::debug;

use super::EditorState;
use crate::config::SideParentPolicy;
use crate::domain::{IconKey, Node, NodeId, NodeItem, NodeKind, WorkflowError, WorkflowResult};

const NEW_TASK_TITLE: &str = "New Task";
const NEW_SIDE_TITLE: &str = "New Side Task";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert a fresh task before the `end` sentinel
    AddMainNode,
    /// Attach a fresh reminder beside `parent_id`
    AddSideNode { parent_id: NodeId },
    UpdateTitle { node_id: NodeId, title: String },
    UpdateDescription { node_id: NodeId, description: String },
    /// Open (`Some`) or close (`None`) the edit dialog
    SelectForEditing(Option<NodeId>),
    /// Open (`Some`) or close (`None`) the add-side dialog
    SelectSideTarget(Option<NodeId>),
    /// Save the edit dialog and close it
    CommitEdit(EditDraft),
}

/// Unsaved contents of the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub node_id: NodeId,
    pub title: String,
    pub description: String,
}

impl EditDraft {
    pub fn from_node(node: &Node) -> Self {
        Self {
            node_id: node.id.clone(),
            title: node.title.clone(),
            description: node.description.clone().unwrap_or_default(),
        }
    }
}

impl EditorState {
    /// Apply `action` and return the resulting state.
    ///
    /// `self` is never modified. Edits against unknown ids return an
    /// unchanged copy; only `AddSideNode` can be rejected.
    pub fn reduce(&self, action: Action, policy: SideParentPolicy) -> WorkflowResult<Self> {
        debug!(?action, "reducing");
        let next = match action {
            Action::AddMainNode => self.add_main_node(),
            Action::AddSideNode { parent_id } => self.add_side_node(parent_id, policy)?,
            Action::UpdateTitle { node_id, title } => self
                .with_replaced(node_id.as_str(), |n| Node {
                    title,
                    ..n.clone()
                })
                .unwrap_or_else(|| self.clone()),
            Action::UpdateDescription {
                node_id,
                description,
            } => self
                .with_replaced(node_id.as_str(), |n| Node {
                    description: Some(description),
                    ..n.clone()
                })
                .unwrap_or_else(|| self.clone()),
            Action::SelectForEditing(id) => Self {
                editing: id,
                ..self.clone()
            },
            Action::SelectSideTarget(id) => Self {
                pending_side_parent: id,
                ..self.clone()
            },
            Action::CommitEdit(draft) => self.commit_edit(draft),
        };
        Ok(next)
    }

    fn add_main_node(&self) -> Self {
        let mut next = self.clone();
        let id = next.fresh_id("node");
        debug!(%id, "adding main node");
        let at = next.main_insert_index();
        next.body
            .insert(at, Arc::new(Node::main(id, NodeKind::Task, NEW_TASK_TITLE)));
        next
    }

    fn add_side_node(&self, parent_id: NodeId, policy: SideParentPolicy) -> WorkflowResult<Self> {
        if policy == SideParentPolicy::Strict {
            match self.node(parent_id.as_str()) {
                None => return Err(WorkflowError::UnknownParent(parent_id)),
                Some(parent) if parent.is_side() || parent.kind.is_sentinel() => {
                    return Err(WorkflowError::InvalidParent(parent_id));
                }
                Some(_) => {}
            }
        }

        let mut next = self.clone();
        let id = next.fresh_id("side");
        debug!(%id, parent = %parent_id, "adding side node");
        let node = Node::side(id, NodeKind::Reminder, NEW_SIDE_TITLE, parent_id)
            .with_items(vec![NodeItem::new(IconKey::Whatsapp, "New Action", "Action")]);
        next.sides.push(Arc::new(node));
        next.pending_side_parent = None;
        Ok(next)
    }

    fn commit_edit(&self, draft: EditDraft) -> Self {
        let EditDraft {
            node_id,
            title,
            description,
        } = draft;
        let mut next = self
            .with_replaced(node_id.as_str(), |n| Node {
                title,
                description: (!description.is_empty()).then_some(description),
                ..n.clone()
            })
            .unwrap_or_else(|| self.clone());
        next.editing = None;
        next
    }
}
