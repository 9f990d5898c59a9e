//! Host Page Configuration
//!
//! Reads the optional `<script id="editor-config">` JSON block.

use tracing::{info, warn};
use workflow_core::EditorConfig;

const CONFIG_ELEMENT_ID: &str = "editor-config";

/// Config from the host page, or defaults when absent or malformed
pub fn load_config() -> EditorConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => parse_config(&raw),
        None => {
            info!("no editor config block, using defaults");
            EditorConfig::default()
        }
    }
}

fn parse_config(raw: &str) -> EditorConfig {
    if raw.trim().is_empty() {
        return EditorConfig::default();
    }
    match EditorConfig::from_json(raw) {
        Ok(config) => {
            info!(?config, "loaded editor config");
            config
        }
        Err(e) => {
            warn!(error = %e, "ignoring editor config");
            EditorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workflow_core::SideParentPolicy;

    #[test]
    fn test_blank_block_is_default() {
        assert_eq!(parse_config("  \n "), EditorConfig::default());
    }

    #[test]
    fn test_malformed_block_is_default() {
        assert_eq!(parse_config("{ nope"), EditorConfig::default());
    }

    #[test]
    fn test_policy_override() {
        let config = parse_config(r#"{ "side_parent_policy": "permissive" }"#);
        assert_eq!(config.side_parent_policy, SideParentPolicy::Permissive);
    }
}
