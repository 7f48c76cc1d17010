//! The rendered widget tree.
//!
//! Widgets are plain data: a host toolkit (or the text outline below) draws
//! them. The only behavior a widget carries is a button's [`TapHandler`].

use std::{
    fmt::{self, Write as _},
    sync::Weak,
};

use bdui_protocol::ActionDescriptor;
use tracing::warn;

use crate::{
    mapper::ActionSink,
    tokens::{
        Axis, ButtonStyle, ButtonVariant, Color, LabelVariant, Spacing, StackAlignment,
        TextAlignment,
    },
};

/// How a widget is placed inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attachment {
    /// Top of a tree; the host decides placement.
    #[default]
    Root,
    /// Arranged by a parent stack along its axis.
    Arranged,
    /// Pinned to all four edges of a non-stack parent.
    FillParent,
}

/// A node of the rendered tree.
#[derive(Debug, Clone)]
pub struct Widget {
    /// What this widget draws.
    pub kind: WidgetKind,
    /// Placement within the parent.
    pub attachment: Attachment,
    /// Children in render order.
    pub children: Vec<Self>,
}

/// Widget variants, one per recognized node type plus a placeholder.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum WidgetKind {
    Container(ContainerView),
    Stack(StackView),
    Label(LabelView),
    Image(ImageView),
    Button(ButtonView),
    ServiceCard(ServiceCardView),
    Placeholder(PlaceholderView),
}

/// Plain container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerView {
    /// Background fill.
    pub background: Option<Color>,
}

/// Linear layout container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackView {
    /// Layout direction.
    pub axis: Axis,
    /// Gap between arranged children.
    pub spacing: Spacing,
    /// Cross-axis alignment.
    pub alignment: StackAlignment,
    /// Uniform inset around the children.
    pub padding: Option<Spacing>,
}

/// Text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelView {
    /// Text to show; empty when the document gives none.
    pub text: String,
    /// Typography variant.
    pub variant: LabelVariant,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

/// Named image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageView {
    /// Image name; `None` renders nothing.
    pub name: Option<String>,
    /// Tint color.
    pub tint: Option<Color>,
    /// Fixed width in points.
    pub width: Option<f64>,
    /// Fixed height in points.
    pub height: Option<f64>,
}

/// Tappable control.
#[derive(Debug, Clone, Default)]
pub struct ButtonView {
    /// Rendered title. `None` when the node has no content at all.
    pub title: Option<String>,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Shows a spinner instead of the title.
    pub loading: bool,
    /// Fixed height in points.
    pub height: Option<f64>,
    /// Bound action, if the title matched an entry in scope.
    pub on_tap: Option<TapHandler>,
}

/// Icon, title and subtitle laid out as a bordered card.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCardView {
    /// Icon image name.
    pub icon: String,
    /// Title line.
    pub title: String,
    /// Subtitle line.
    pub subtitle: String,
}

/// Stand-in for a node type the mapper does not know.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderView {
    /// The unrecognized type name.
    pub node_type: String,
}

impl ButtonView {
    /// Colors for this button's variant.
    pub fn style(&self) -> ButtonStyle {
        self.variant.style()
    }

    /// Invoke the bound action. Returns false when nothing is bound or the
    /// dispatcher is gone.
    pub fn tap(&self) -> bool {
        self.on_tap.as_ref().is_some_and(TapHandler::tap)
    }
}

impl ServiceCardView {
    /// Corner radius of the card.
    pub const CORNER_RADIUS: f64 = 12.0;
    /// Border width of the card.
    pub const BORDER_WIDTH: f64 = 1.0;
    /// Container fill.
    pub const BACKGROUND: Color = Color::Background;
    /// Border color.
    pub const BORDER: Color = Color::PrimaryLight;
    /// Icon edge length.
    pub const ICON_SIZE: f64 = 40.0;
    /// Icon tint.
    pub const ICON_TINT: Color = Color::Primary;
    /// Vertical inset.
    pub const INSET_VERTICAL: Spacing = Spacing::Large;
    /// Horizontal inset.
    pub const INSET_HORIZONTAL: Spacing = Spacing::Medium;

    /// The card's inner layout: a centered vertical stack of icon, title and subtitle.
    pub fn layout(&self) -> Widget {
        let stack = StackView {
            axis: Axis::Vertical,
            spacing: Spacing::Medium,
            alignment: StackAlignment::Center,
            padding: None,
        };
        Widget::new(WidgetKind::Stack(stack))
            .with_child(Widget::new(WidgetKind::Image(ImageView {
                name: Some(self.icon.clone()),
                tint: Some(Self::ICON_TINT),
                width: Some(Self::ICON_SIZE),
                height: Some(Self::ICON_SIZE),
            })))
            .with_child(Widget::new(WidgetKind::Label(LabelView {
                text: self.title.clone(),
                variant: LabelVariant::Body,
                alignment: TextAlignment::Center,
            })))
            .with_child(Widget::new(WidgetKind::Label(LabelView {
                text: self.subtitle.clone(),
                variant: LabelVariant::Caption,
                alignment: TextAlignment::Center,
            })))
    }
}

impl PlaceholderView {
    /// Placeholders are flagged in red.
    pub const COLOR: Color = Color::Red;
}

/// A button's binding to an action descriptor.
///
/// Holds the dispatcher weakly: a tree outliving its screen taps into nothing.
#[derive(Clone)]
pub struct TapHandler {
    /// Title the binding was resolved by.
    title: String,
    /// Bound action.
    action: ActionDescriptor,
    /// Receiver of taps.
    sink: Weak<dyn ActionSink>,
}

impl TapHandler {
    /// Bind `action` for the button titled `title`.
    pub fn new(title: impl Into<String>, action: ActionDescriptor, sink: Weak<dyn ActionSink>) -> Self {
        Self {
            title: title.into(),
            action,
            sink,
        }
    }

    /// The bound action.
    pub fn action(&self) -> &ActionDescriptor {
        &self.action
    }

    /// Button title this handler was bound by.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Deliver the bound action. Returns false if the receiver has been dropped.
    pub fn tap(&self) -> bool {
        match self.sink.upgrade() {
            Some(sink) => {
                sink.handle_action(&self.action);
                true
            }
            None => {
                warn!(title = %self.title, action = %self.action.kind, "tap after dispatcher dropped");
                false
            }
        }
    }
}

impl fmt::Debug for TapHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapHandler")
            .field("title", &self.title)
            .field("action", &self.action.kind)
            .field("live", &(self.sink.strong_count() > 0))
            .finish()
    }
}

impl Widget {
    /// A childless root widget.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attachment: Attachment::Root,
            children: Vec::new(),
        }
    }

    /// Attach `child`: arranged when `self` is a stack, pinned to the edges otherwise.
    pub fn attach(&mut self, mut child: Self) {
        child.attachment = match self.kind {
            WidgetKind::Stack(_) => Attachment::Arranged,
            _ => Attachment::FillParent,
        };
        self.children.push(child);
    }

    /// Builder form of [`Widget::attach`].
    pub fn with_child(mut self, child: Self) -> Self {
        self.attach(child);
        self
    }

    /// Number of widgets in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Pre-order traversal of this subtree.
    pub fn walk(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    /// Helper for [`Widget::walk`].
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Self>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }

    /// All buttons in pre-order.
    pub fn buttons(&self) -> Vec<&ButtonView> {
        self.walk()
            .into_iter()
            .filter_map(|w| match &w.kind {
                WidgetKind::Button(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// First button whose rendered title is `title`.
    pub fn find_button(&self, title: &str) -> Option<&ButtonView> {
        self.buttons()
            .into_iter()
            .find(|b| b.title.as_deref() == Some(title))
    }

    /// Number of placeholder widgets in this subtree.
    pub fn placeholder_count(&self) -> usize {
        self.walk()
            .iter()
            .filter(|w| matches!(w.kind, WidgetKind::Placeholder(_)))
            .count()
    }

    /// Indented one-line-per-widget description of the tree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    /// Helper for [`Widget::outline`].
    fn outline_into(&self, out: &mut String, depth: usize) {
        let _ignored = writeln!(out, "{:indent$}{}", "", self.kind, indent = depth * 2);
        for child in &self.children {
            child.outline_into(out, depth + 1);
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container(c) => {
                f.write_str("container")?;
                if let Some(bg) = c.background {
                    write!(f, " background={bg}")?;
                }
                Ok(())
            }
            Self::Stack(s) => {
                write!(
                    f,
                    "stack {} spacing={} align={}",
                    s.axis.name(),
                    s.spacing.name(),
                    s.alignment.name()
                )?;
                if let Some(p) = s.padding {
                    write!(f, " padding={}", p.name())?;
                }
                Ok(())
            }
            Self::Label(l) => write!(
                f,
                "label {:?} {} {}",
                l.text,
                l.variant.name(),
                l.alignment.name()
            ),
            Self::Image(i) => {
                match &i.name {
                    Some(name) => write!(f, "image {name:?}")?,
                    None => f.write_str("image (none)")?,
                }
                if let Some(tint) = i.tint {
                    write!(f, " tint={tint}")?;
                }
                if let Some(w) = i.width {
                    write!(f, " width={w}")?;
                }
                if let Some(h) = i.height {
                    write!(f, " height={h}")?;
                }
                Ok(())
            }
            Self::Button(b) => {
                match &b.title {
                    Some(t) => write!(f, "button {t:?}")?,
                    None => f.write_str("button (untitled)")?,
                }
                write!(f, " {}", b.variant.name())?;
                if b.loading {
                    f.write_str(" loading")?;
                }
                if let Some(h) = b.height {
                    write!(f, " height={h}")?;
                }
                if let Some(tap) = &b.on_tap {
                    write!(f, " -> {}", tap.action().kind)?;
                }
                Ok(())
            }
            Self::ServiceCard(c) => write!(
                f,
                "card {:?} / {:?} icon={:?}",
                c.title, c.subtitle, c.icon
            ),
            Self::Placeholder(p) => write!(f, "placeholder {}", p.node_type),
        }
    }
}
