//! Editor Configuration
//!
//! Layout metrics and the side-branch parent policy. Every field has a
//! default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::domain::{WorkflowError, WorkflowResult};
use crate::layout::LayoutMetrics;

/// What to do when a side node is requested for a parent that is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideParentPolicy {
    /// Reject with `WorkflowError::UnknownParent` / `InvalidParent`
    #[default]
    Strict,
    /// Create the node anyway; it renders nowhere
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutMetrics,
    pub side_parent_policy: SideParentPolicy,
}

impl EditorConfig {
    pub fn from_json(raw: &str) -> WorkflowResult<Self> {
        serde_json::from_str(raw).map_err(|e| WorkflowError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.side_parent_policy, SideParentPolicy::Strict);
    }

    #[test]
    fn test_partial_layout_override() {
        let config = EditorConfig::from_json(
            r#"{ "layout": { "per_item": 48 }, "side_parent_policy": "permissive" }"#,
        )
        .unwrap();
        assert_eq!(config.layout.per_item, 48);
        assert_eq!(config.layout.base_offset, 180);
        assert_eq!(config.side_parent_policy, SideParentPolicy::Permissive);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let err = EditorConfig::from_json("{ layout: ").unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidConfig(_)));
    }
}
