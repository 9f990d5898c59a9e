//! Seed Workflow
//!
//! The default onboarding chain the editor opens with.

use crate::domain::{IconKey, Node, NodeItem, NodeKind};
use crate::store::EditorState;

/// Id of the trigger node, rendered with a "Who / When" block
pub const TRIGGER_NODE_ID: &str = "onboarding";

pub fn onboarding_workflow() -> EditorState {
    EditorState::from_nodes([
        Node::main(TRIGGER_NODE_ID, NodeKind::Task, "Basic Onboarding")
            .with_description("Runs automatically when a new user is added"),
        Node::main("start", NodeKind::Start, "Start"),
        Node::main("welcome", NodeKind::Task, "Welcome to Tesla").with_items(vec![
            NodeItem::new(IconKey::Document, "Company Information", "Visual Intro"),
            NodeItem::new(IconKey::Document, "Company Information", "Send Letter"),
        ]),
        Node::main("personal", NodeKind::Task, "Personal Details").with_items(vec![
            NodeItem::new(IconKey::Data, "Data Collection", "Basic Details"),
        ]),
        Node::side("reminder", NodeKind::Reminder, "Reminder Message", "personal")
            .with_items(vec![NodeItem::new(IconKey::Whatsapp, "WhatsApp", "Remind")]),
        Node::main("verifications", NodeKind::Task, "Verifications").with_items(vec![
            NodeItem::new(IconKey::Author, "Author Verification", "Welcome Message"),
            NodeItem::new(IconKey::Offer, "Offer Letter", "Welcome Message"),
            NodeItem::new(
                IconKey::Compliance,
                "Compliance and Acknowledgement",
                "Welcome Message",
            ),
        ]),
        Node::main("kit", NodeKind::Task, "Onboarding Kit").with_items(vec![NodeItem::new(
            IconKey::Kit,
            "Onboarding Kit",
            "Basic Kit",
        )]),
        Node::main("assets", NodeKind::Task, "Company Assets").with_items(vec![NodeItem::new(
            IconKey::Media,
            "Media Library",
            "Must Watch",
        )]),
        Node::main("end", NodeKind::End, "Ends"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_one_start_and_one_end() {
        let state = onboarding_workflow();
        let main = state.main_nodes();
        let starts = main.iter().filter(|n| n.kind == NodeKind::Start).count();
        let ends = main.iter().filter(|n| n.kind == NodeKind::End).count();
        assert_eq!((starts, ends), (1, 1));
        assert_eq!(main.last().map(|n| n.kind), Some(NodeKind::End));
    }

    #[test]
    fn test_seed_order() {
        let ids: Vec<String> = onboarding_workflow()
            .main_nodes()
            .iter()
            .map(|n| n.id.to_string())
            .collect();
        assert_eq!(
            ids,
            ["onboarding", "start", "welcome", "personal", "verifications", "kit", "assets", "end"]
        );
    }

    #[test]
    fn test_seed_side_branch() {
        let state = onboarding_workflow();
        let sides = state.side_nodes_for("personal");
        assert_eq!(sides.len(), 1);
        assert_eq!(sides[0].id.as_str(), "reminder");
        assert_eq!(state.len(), 9);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let state = onboarding_workflow();
        let mut ids: Vec<String> = state
            .main_nodes()
            .iter()
            .chain(state.side_nodes())
            .map(|n| n.id.to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.len());
    }
}
