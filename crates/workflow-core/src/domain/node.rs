//! Node Entity
//!
//! A stage of the onboarding workflow, either on the main sequence or
//! attached beside a main node as a side branch.

use std::fmt;

use super::item::NodeItem;

/// Unique node identifier, immutable after creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Node kind, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Chain start marker
    Start,
    /// Chain end marker
    End,
    #[default]
    Task,
    Reminder,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Task => "task",
            NodeKind::Reminder => "reminder",
        }
    }

    /// Sentinels mark chain boundaries and carry no items
    pub fn is_sentinel(&self) -> bool {
        matches!(self, NodeKind::Start | NodeKind::End)
    }
}

/// Where a node is drawn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Part of the primary vertical chain
    Main,
    /// Branch annotation beside the main node `parent_id`
    Side { parent_id: NodeId },
}

/// A workflow node
///
/// Only `title` and `description` change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    pub description: Option<String>,
    /// Display order, not reorderable
    pub items: Vec<NodeItem>,
    pub placement: Placement,
}

impl Node {
    /// Create a main-sequence node without description or items
    pub fn main(id: impl Into<NodeId>, kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: None,
            items: Vec::new(),
            placement: Placement::Main,
        }
    }

    /// Create a side node branching from `parent_id`
    pub fn side(
        id: impl Into<NodeId>,
        kind: NodeKind,
        title: impl Into<String>,
        parent_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: None,
            items: Vec::new(),
            placement: Placement::Side {
                parent_id: parent_id.into(),
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_items(mut self, items: Vec<NodeItem>) -> Self {
        self.items = items;
        self
    }

    /// True only for a present, non-empty description
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    pub fn is_side(&self) -> bool {
        matches!(self.placement, Placement::Side { .. })
    }

    pub fn parent_id(&self) -> Option<&NodeId> {
        match &self.placement {
            Placement::Side { parent_id } => Some(parent_id),
            Placement::Main => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IconKey;

    #[test]
    fn test_main_node_creation() {
        let node = Node::main("welcome", NodeKind::Task, "Welcome");
        assert_eq!(node.id.as_str(), "welcome");
        assert!(!node.is_side());
        assert!(node.parent_id().is_none());
        assert!(node.items.is_empty());
    }

    #[test]
    fn test_side_node_carries_parent() {
        let node = Node::side("r1", NodeKind::Reminder, "Remind", "personal");
        assert!(node.is_side());
        assert_eq!(node.parent_id().map(NodeId::as_str), Some("personal"));
    }

    #[test]
    fn test_has_description_ignores_empty() {
        let node = Node::main("a", NodeKind::Task, "A");
        assert!(!node.has_description());
        assert!(!node.clone().with_description("").has_description());
        assert!(node.with_description("runs daily").has_description());
    }

    #[test]
    fn test_with_items_keeps_order() {
        let node = Node::main("a", NodeKind::Task, "A").with_items(vec![
            NodeItem::new(IconKey::Kit, "first", "x"),
            NodeItem::new(IconKey::Media, "second", "y"),
        ]);
        assert_eq!(node.items[0].title, "first");
        assert_eq!(node.items[1].title, "second");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(NodeKind::End.as_str(), "end");
        assert_eq!(NodeKind::Reminder.as_str(), "reminder");
        assert!(NodeKind::Start.is_sentinel());
        assert!(!NodeKind::Reminder.is_sentinel());
    }
}
