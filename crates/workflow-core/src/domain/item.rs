//! Node Items
//!
//! Leaf action entries shown inside a node card.

/// Icon shown next to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconKey {
    Document,
    Data,
    Whatsapp,
    Author,
    Offer,
    Compliance,
    Kit,
    Media,
    /// Anything else renders with the generic document icon
    #[default]
    Other,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Document => "document",
            IconKey::Data => "data",
            IconKey::Whatsapp => "whatsapp",
            IconKey::Author => "author",
            IconKey::Offer => "offer",
            IconKey::Compliance => "compliance",
            IconKey::Kit => "kit",
            IconKey::Media => "media",
            IconKey::Other => "other",
        }
    }
}

/// An `{icon, title, action}` entry. Not independently addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeItem {
    pub icon: IconKey,
    pub title: String,
    /// Short action tag rendered as a pill
    pub action: String,
}

impl NodeItem {
    pub fn new(icon: IconKey, title: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            action: action.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        assert_eq!(IconKey::Whatsapp.as_str(), "whatsapp");
        assert_eq!(IconKey::Compliance.as_str(), "compliance");
        assert_eq!(IconKey::default().as_str(), "other");
    }
}
