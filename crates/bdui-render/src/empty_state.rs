//! The widget shown when a screen's document cannot be loaded.

use crate::{
    tokens::{Axis, Color, LabelVariant, Spacing, StackAlignment, TextAlignment},
    widget::{ImageView, LabelView, StackView, Widget, WidgetKind},
};

/// Title, message and icon of a failure screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Headline.
    pub title: String,
    /// Explanation.
    pub message: String,
    /// Icon image name.
    pub image: String,
}

impl EmptyState {
    /// Icon used unless overridden.
    pub const DEFAULT_IMAGE: &'static str = "exclamationmark.triangle";

    /// An empty state with the default icon.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            image: Self::DEFAULT_IMAGE.to_string(),
        }
    }

    /// Centered icon, title and message.
    pub fn to_widget(&self) -> Widget {
        let stack = StackView {
            axis: Axis::Vertical,
            spacing: Spacing::Medium,
            alignment: StackAlignment::Center,
            padding: Some(Spacing::Large),
        };
        Widget::new(WidgetKind::Stack(stack))
            .with_child(Widget::new(WidgetKind::Image(ImageView {
                name: Some(self.image.clone()),
                tint: Some(Color::TextSecondary),
                width: None,
                height: None,
            })))
            .with_child(Widget::new(WidgetKind::Label(LabelView {
                text: self.title.clone(),
                variant: LabelVariant::Title,
                alignment: TextAlignment::Center,
            })))
            .with_child(Widget::new(WidgetKind::Label(LabelView {
                text: self.message.clone(),
                variant: LabelVariant::Body,
                alignment: TextAlignment::Center,
            })))
    }
}

impl Default for EmptyState {
    fn default() -> Self {
        Self::new("Failed to load", "Could not load services data")
    }
}
