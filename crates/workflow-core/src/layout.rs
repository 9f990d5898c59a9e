//! Layout Calculator
//!
//! Vertical offsets of main-sequence nodes, used to anchor side-branch
//! connectors beside the node they belong to.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Node, NodeId};

/// Row heights in layout units (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Offset of the first main node
    pub base_offset: u32,
    /// Height of a `start`/`end` pill row
    pub sentinel_row: u32,
    /// Height of a card without items or description
    pub task_row: u32,
    pub per_item: u32,
    /// Extra height of a non-empty description block
    pub description_block: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            base_offset: 180,
            sentinel_row: 80,
            task_row: 100,
            per_item: 40,
            description_block: 60,
        }
    }
}

impl LayoutMetrics {
    /// Height a node contributes to every node below it.
    ///
    /// Saturates at `u32::MAX`; metrics come from the host page.
    pub fn row_height(&self, node: &Node) -> u32 {
        if node.kind.is_sentinel() {
            return self.sentinel_row;
        }
        let item_count = u32::try_from(node.items.len()).unwrap_or(u32::MAX);
        let mut height = self
            .task_row
            .saturating_add(item_count.saturating_mul(self.per_item));
        if node.has_description() {
            height = height.saturating_add(self.description_block);
        }
        height
    }
}

/// Offset of `id` within `main`, summed over every node before it.
///
/// An id not on the main sequence is treated as position 0.
pub fn offset_of(main: &[Arc<Node>], id: &str, metrics: &LayoutMetrics) -> u32 {
    let Some(index) = main.iter().position(|n| n.id.as_str() == id) else {
        return metrics.base_offset;
    };
    main[..index]
        .iter()
        .fold(metrics.base_offset, |acc, n| acc.saturating_add(metrics.row_height(n)))
}

/// Offsets of every main node in one pass, in sequence order
pub fn offsets(main: &[Arc<Node>], metrics: &LayoutMetrics) -> Vec<(NodeId, u32)> {
    let mut running = metrics.base_offset;
    main.iter()
        .map(|n| {
            let here = running;
            running = running.saturating_add(metrics.row_height(n));
            (n.id.clone(), here)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IconKey, NodeItem, NodeKind};
    use crate::seed::onboarding_workflow;

    fn task(id: &str, items: usize) -> Arc<Node> {
        let items = (0..items)
            .map(|i| NodeItem::new(IconKey::Document, format!("item {}", i), "go"))
            .collect();
        Arc::new(Node::main(id, NodeKind::Task, id).with_items(items))
    }

    #[test]
    fn test_first_node_is_at_base() {
        let metrics = LayoutMetrics::default();
        let main = vec![task("a", 3), task("b", 0)];
        assert_eq!(offset_of(&main, "a", &metrics), 180);
    }

    #[test]
    fn test_unknown_id_is_base() {
        let metrics = LayoutMetrics::default();
        let main = vec![task("a", 3)];
        assert_eq!(offset_of(&main, "missing", &metrics), metrics.base_offset);
    }

    #[test]
    fn test_row_heights() {
        let metrics = LayoutMetrics::default();
        let start = Arc::new(Node::main("start", NodeKind::Start, "Start"));
        let described = Arc::new(
            Node::main("d", NodeKind::Task, "D")
                .with_description("when")
                .with_items(vec![NodeItem::new(IconKey::Kit, "kit", "basic")]),
        );
        let main = vec![start, described, task("two", 2), task("last", 0)];

        assert_eq!(offset_of(&main, "d", &metrics), 180 + 80);
        assert_eq!(offset_of(&main, "two", &metrics), 260 + 100 + 40 + 60);
        assert_eq!(offset_of(&main, "last", &metrics), 460 + 100 + 80);
    }

    #[test]
    fn test_empty_description_adds_nothing() {
        let metrics = LayoutMetrics::default();
        let blank = Arc::new(Node::main("b", NodeKind::Task, "B").with_description(""));
        let main = vec![blank, task("next", 0)];
        assert_eq!(offset_of(&main, "next", &metrics), 280);
    }

    #[test]
    fn test_offsets_match_per_node_queries() {
        let metrics = LayoutMetrics::default();
        let state = onboarding_workflow();
        let main = state.main_nodes();
        let all = offsets(&main, &metrics);

        assert_eq!(all.len(), main.len());
        for (id, offset) in &all {
            assert_eq!(*offset, offset_of(&main, id.as_str(), &metrics));
        }
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let metrics = LayoutMetrics::default();
        let state = onboarding_workflow();
        let all = offsets(&state.main_nodes(), &metrics);
        assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_huge_metrics_saturate() {
        let config = crate::config::EditorConfig::from_json(
            r#"{ "layout": { "per_item": 2000000000, "description_block": 4294967295 } }"#,
        )
        .unwrap();
        let main = onboarding_workflow().main_nodes();
        let all = offsets(&main, &config.layout);

        assert_eq!(all.len(), main.len());
        assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(all.last().map(|(_, top)| *top), Some(u32::MAX));
        assert_eq!(offset_of(&main, "end", &config.layout), u32::MAX);
    }

    #[test]
    fn test_seed_offsets() {
        let metrics = LayoutMetrics::default();
        let main = onboarding_workflow().main_nodes();
        // onboarding: 100 + 60 (description), start: 80, welcome: 100 + 2*40
        assert_eq!(offset_of(&main, "start", &metrics), 340);
        assert_eq!(offset_of(&main, "welcome", &metrics), 420);
        assert_eq!(offset_of(&main, "personal", &metrics), 600);
    }
}
