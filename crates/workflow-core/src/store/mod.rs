//! Workflow Store
//!
//! Editor state and the reducer that produces the next state from an
//! action. Nodes sit behind `Arc`, so a new state shares every node the
//! action did not touch with the state it came from.

mod action;

use std::sync::Arc;

use crate::domain::{Node, NodeId, NodeKind};

pub use action::{Action, EditDraft};

/// Snapshot of the editor
///
/// The main sequence is `body` followed by the `terminal` slot, which holds
/// the `end` sentinel when it closes the chain. New main nodes are pushed
/// onto `body`, so they always land before `end`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    body: Vec<Arc<Node>>,
    terminal: Option<Arc<Node>>,
    /// Side nodes in insertion order
    sides: Vec<Arc<Node>>,
    /// Node whose edit dialog is open
    editing: Option<NodeId>,
    /// Main node about to receive a side branch
    pending_side_parent: Option<NodeId>,
    /// Next suffix for generated ids
    next_seq: u64,
}

impl EditorState {
    /// Build a state from nodes in display order.
    ///
    /// Main nodes keep their input order. An `end` node takes the terminal
    /// slot only when it is the last main node; otherwise it stays in
    /// `body` and new main nodes are inserted in front of it.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut state = Self {
            next_seq: 1,
            ..Default::default()
        };
        for node in nodes {
            let node = Arc::new(node);
            if node.is_side() {
                state.sides.push(node);
            } else {
                state.body.push(node);
            }
        }
        if state.body.last().is_some_and(|n| n.kind == NodeKind::End) {
            state.terminal = state.body.pop();
        }
        state
    }

    /// Where a new main node goes: before the first `end` in `body` when
    /// there is no terminal, else at the tail of `body`
    fn main_insert_index(&self) -> usize {
        if self.terminal.is_some() {
            return self.body.len();
        }
        self.body
            .iter()
            .position(|n| n.kind == NodeKind::End)
            .unwrap_or(self.body.len())
    }

    /// Main-sequence nodes, top to bottom
    pub fn main_nodes(&self) -> Vec<Arc<Node>> {
        self.body.iter().chain(self.terminal.iter()).cloned().collect()
    }

    pub fn side_nodes(&self) -> &[Arc<Node>] {
        &self.sides
    }

    /// Side nodes attached to `parent_id`, in insertion order
    pub fn side_nodes_for(&self, parent_id: &str) -> Vec<Arc<Node>> {
        self.sides
            .iter()
            .filter(|n| n.parent_id().is_some_and(|p| p.as_str() == parent_id))
            .cloned()
            .collect()
    }

    fn iter_nodes(&self) -> impl Iterator<Item = &Arc<Node>> {
        self.body
            .iter()
            .chain(self.terminal.iter())
            .chain(self.sides.iter())
    }

    pub fn node(&self, id: &str) -> Option<&Arc<Node>> {
        self.iter_nodes().find(|n| n.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Total node count, main and side together
    pub fn len(&self) -> usize {
        self.body.len() + usize::from(self.terminal.is_some()) + self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn main_len(&self) -> usize {
        self.body.len() + usize::from(self.terminal.is_some())
    }

    pub fn editing(&self) -> Option<&NodeId> {
        self.editing.as_ref()
    }

    pub fn editing_node(&self) -> Option<&Arc<Node>> {
        self.editing.as_ref().and_then(|id| self.node(id.as_str()))
    }

    pub fn pending_side_parent(&self) -> Option<&NodeId> {
        self.pending_side_parent.as_ref()
    }

    pub fn pending_side_parent_node(&self) -> Option<&Arc<Node>> {
        self.pending_side_parent
            .as_ref()
            .and_then(|id| self.node(id.as_str()))
    }

    /// Next unused id of the form `<prefix>-<n>`
    fn fresh_id(&mut self, prefix: &str) -> NodeId {
        loop {
            let candidate = format!("{}-{}", prefix, self.next_seq);
            self.next_seq += 1;
            if !self.contains(&candidate) {
                return NodeId::new(candidate);
            }
        }
    }

    /// Replace the node `id` with `update(old)`. `None` if `id` is unknown.
    fn with_replaced(&self, id: &str, update: impl FnOnce(&Node) -> Node) -> Option<Self> {
        let mut next = self.clone();
        let slot = next
            .body
            .iter_mut()
            .chain(next.terminal.iter_mut())
            .chain(next.sides.iter_mut())
            .find(|n| n.id.as_str() == id)?;
        *slot = Arc::new(update(&**slot));
        Some(next)
    }
}
