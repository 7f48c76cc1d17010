//! Recognized node types.

use std::fmt;

/// Node types the mapper knows how to render. Anything else is a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Plain container with optional background.
    ContentView,
    /// Linear layout container.
    StackView,
    /// Text.
    Label,
    /// Named image.
    ImageView,
    /// Tappable control; binds an action by title.
    Button,
    /// Fixed icon/title/subtitle card.
    ServiceCard,
}

impl NodeType {
    /// Parse a wire type name. Matching is exact and case-sensitive.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "contentView" => Some(Self::ContentView),
            "stackView" => Some(Self::StackView),
            "label" => Some(Self::Label),
            "imageView" => Some(Self::ImageView),
            "button" => Some(Self::Button),
            "serviceCard" => Some(Self::ServiceCard),
            _ => None,
        }
    }

    /// Wire type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ContentView => "contentView",
            Self::StackView => "stackView",
            Self::Label => "label",
            Self::ImageView => "imageView",
            Self::Button => "button",
            Self::ServiceCard => "serviceCard",
        }
    }

    /// `content` keys this type reads.
    pub fn content_keys(self) -> &'static [&'static str] {
        match self {
            Self::ContentView => &["backgroundColor"],
            Self::StackView => &["axis", "spacing", "alignment", "padding"],
            Self::Label => &["text", "type", "alignment"],
            Self::ImageView => &["imageName", "tintColor", "height", "width"],
            Self::Button => &["text", "type", "isLoading", "height"],
            Self::ServiceCard => &["title", "subtitle", "iconName"],
        }
    }

    /// Every recognized type.
    pub fn all() -> &'static [Self] {
        &[
            Self::ContentView,
            Self::StackView,
            Self::Label,
            Self::ImageView,
            Self::Button,
            Self::ServiceCard,
        ]
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in NodeType::all() {
            assert_eq!(NodeType::from_wire(t.name()), Some(*t));
        }
        assert_eq!(NodeType::from_wire("Label"), None);
        assert_eq!(NodeType::from_wire("widgetXYZ"), None);
    }
}
