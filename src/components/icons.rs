//! Icons
//!
//! Glyphs and colour classes for item icons and node kinds.

use leptos::prelude::*;
use workflow_core::{IconKey, NodeKind};

/// WhatsApp logo, drawn inline since it has no glyph
const WHATSAPP_PATH: &str = "M10 0C4.5 0 0 4.5 0 10C0 11.8 0.5 13.5 1.3 15L0 20L5.1 18.7C6.6 19.5 8.2 19.9 10 19.9C15.5 19.9 20 15.4 20 9.9C20 7.3 19 4.8 17.1 2.9C15.2 1 12.7 0 10 0Z";

/// (glyph, colour class) for an item icon
pub fn item_icon(icon: IconKey) -> (&'static str, &'static str) {
    match icon {
        IconKey::Document | IconKey::Data | IconKey::Offer => ("📄", "icon-blue"),
        IconKey::Author => ("📄", "icon-yellow"),
        IconKey::Compliance => ("☑", "icon-blue"),
        IconKey::Kit => ("📦", "icon-purple"),
        IconKey::Media => ("🎞", "icon-blue"),
        IconKey::Whatsapp => ("", "icon-green"),
        IconKey::Other => ("📄", "icon-gray"),
    }
}

/// Header glyph for a node kind
pub fn kind_glyph(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Start | NodeKind::End => "→",
        NodeKind::Reminder => "🔔",
        NodeKind::Task => "☑",
    }
}

/// Accent colour class: sentinels purple, reminders green, tasks blue
pub fn kind_color_class(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Start | NodeKind::End => "accent-purple",
        NodeKind::Reminder => "accent-green",
        NodeKind::Task => "accent-blue",
    }
}

#[component]
pub fn ItemIcon(icon: IconKey) -> impl IntoView {
    let (glyph, class) = item_icon(icon);
    if icon == IconKey::Whatsapp {
        view! {
            <span class=format!("item-icon {}", class) data-icon={icon.as_str()}>
                <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
                    <path d=WHATSAPP_PATH fill="#25D366"/>
                </svg>
            </span>
        }
        .into_any()
    } else {
        view! { <span class=format!("item-icon {}", class) data-icon={icon.as_str()}>{glyph}</span> }.into_any()
    }
}

#[component]
pub fn KindIcon(kind: NodeKind) -> impl IntoView {
    view! {
        <span class=format!("kind-icon {}", kind_color_class(kind))>{kind_glyph(kind)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_class() {
        let keys = [
            IconKey::Document,
            IconKey::Data,
            IconKey::Whatsapp,
            IconKey::Author,
            IconKey::Offer,
            IconKey::Compliance,
            IconKey::Kit,
            IconKey::Media,
            IconKey::Other,
        ];
        for key in keys {
            assert!(item_icon(key).1.starts_with("icon-"));
        }
    }

    #[test]
    fn test_unknown_icon_uses_default() {
        assert_eq!(item_icon(IconKey::default()), ("📄", "icon-gray"));
    }

    #[test]
    fn test_kind_colors_are_distinct() {
        assert_eq!(kind_color_class(NodeKind::Start), kind_color_class(NodeKind::End));
        assert_ne!(kind_color_class(NodeKind::Task), kind_color_class(NodeKind::Reminder));
        assert_ne!(kind_color_class(NodeKind::Start), kind_color_class(NodeKind::Task));
    }
}
