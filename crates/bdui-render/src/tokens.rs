//! Design tokens: the closed vocabularies documents may name in `content`.
//!
//! Each token type parses from its wire name with `from_wire`; callers fall back
//! to the type's `Default` when a name is absent or unrecognized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    /// Brand color; primary button fill and icon tint.
    Primary,
    /// Light brand tint; card borders.
    PrimaryLight,
    /// Destructive actions and error text.
    Error,
    /// Main text.
    TextPrimary,
    /// Captions and secondary text.
    TextSecondary,
    /// Screen and card background.
    Background,
    /// White.
    White,
    /// Fallback for unrecognized names.
    #[default]
    Black,
    /// Marks placeholders for unknown node types; not addressable by name.
    Red,
}

impl Color {
    /// Resolve a palette name. Unknown names are `None` (callers use black).
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "primaryLight" => Some(Self::PrimaryLight),
            "error" => Some(Self::Error),
            "textPrimary" => Some(Self::TextPrimary),
            "textSecondary" => Some(Self::TextSecondary),
            "background" => Some(Self::Background),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    /// Resolve a palette name, falling back to black.
    pub fn from_wire_or_default(name: &str) -> Self {
        Self::from_wire(name).unwrap_or_default()
    }

    /// RGBA components in `0.0..=1.0`.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Self::Primary => [0.2, 0.6, 0.2, 1.0],
            Self::PrimaryLight => [0.85, 1.0, 0.85, 1.0],
            Self::Error => [1.0, 0.231, 0.188, 1.0],
            Self::TextPrimary | Self::Black => [0.0, 0.0, 0.0, 1.0],
            Self::TextSecondary => [0.333, 0.333, 0.333, 1.0],
            Self::Background | Self::White => [1.0, 1.0, 1.0, 1.0],
            Self::Red => [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primaryLight",
            Self::Error => "error",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::Background => "background",
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
        };
        f.write_str(name)
    }
}

/// Spacing scale used for stack spacing and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Spacing {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl Spacing {
    /// Resolve a spacing name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xLarge" => Some(Self::XLarge),
            _ => None,
        }
    }

    /// Size in points.
    pub fn points(self) -> f64 {
        match self {
            Self::Small => 8.0,
            Self::Medium => 16.0,
            Self::Large => 24.0,
            Self::XLarge => 32.0,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xLarge",
        }
    }
}

/// Layout direction of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Only `horizontal` selects the horizontal axis.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Cross-axis alignment of stack children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum StackAlignment {
    #[default]
    Fill,
    Leading,
    Trailing,
    Center,
}

impl StackAlignment {
    /// Resolve an alignment name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "fill" => Some(Self::Fill),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Center => "center",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Resolve an alignment name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Font weight of a typography token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum FontWeight {
    Regular,
    Semibold,
    Bold,
}

/// Font size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Point size.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

/// Label typography variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum LabelVariant {
    LargeTitle,
    Title,
    #[default]
    Body,
    Caption,
    Error,
}

impl LabelVariant {
    /// Resolve a variant name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "largeTitle" => Some(Self::LargeTitle),
            "title" => Some(Self::Title),
            "body" => Some(Self::Body),
            "caption" => Some(Self::Caption),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LargeTitle => "largeTitle",
            Self::Title => "title",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Error => "error",
        }
    }

    /// Font for this variant. Error text uses the caption font.
    pub fn typography(self) -> Typography {
        let (size, weight) = match self {
            Self::LargeTitle => (24.0, FontWeight::Bold),
            Self::Title => (20.0, FontWeight::Semibold),
            Self::Body => (16.0, FontWeight::Regular),
            Self::Caption | Self::Error => (12.0, FontWeight::Regular),
        };
        Typography { size, weight }
    }

    /// Text color for this variant.
    pub fn color(self) -> Color {
        match self {
            Self::LargeTitle | Self::Title | Self::Body => Color::TextPrimary,
            Self::Caption => Color::TextSecondary,
            Self::Error => Color::Error,
        }
    }
}

/// Button variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Error,
}

/// Resolved colors of a button variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Fill color; `None` is transparent.
    pub fill: Option<Color>,
    /// Title color.
    pub text: Color,
    /// Border color, if bordered.
    pub border: Option<Color>,
}

impl ButtonVariant {
    /// Resolve a variant name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
        }
    }

    /// Colors for this variant.
    pub fn style(self) -> ButtonStyle {
        match self {
            Self::Primary => ButtonStyle {
                fill: Some(Color::Primary),
                text: Color::White,
                border: None,
            },
            Self::Secondary => ButtonStyle {
                fill: None,
                text: Color::Primary,
                border: Some(Color::Primary),
            },
            Self::Error => ButtonStyle {
                fill: Some(Color::Error),
                text: Color::White,
                border: None,
            },
        }
    }
}
