//! View tree to widget tree mapping.
//!
//! Each node is built from its `content` with token fallbacks, then its
//! children are mapped and attached in order. Action maps flow downward:
//! the first map found on the way down from the root stays in effect for the
//! whole subtree, so a parent's bindings shadow a descendant's own.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use bdui_protocol::{ActionDescriptor, ActionMap, ViewNode};
use tracing::{debug, trace, warn};

use crate::{
    content::Content,
    registry::NodeType,
    tokens::{
        Axis, ButtonVariant, Color, LabelVariant, Spacing, StackAlignment, TextAlignment,
    },
    widget::{
        ButtonView, ContainerView, ImageView, LabelView, PlaceholderView, ServiceCardView,
        StackView, TapHandler, Widget, WidgetKind,
    },
};

/// Receives actions from tapped buttons.
pub trait ActionSink: Send + Sync {
    /// Handle one tapped action. Must not fail; problems are logged.
    fn handle_action(&self, action: &ActionDescriptor);
}

/// Sink used by detached mappers; never instantiated.
struct Detached;

impl ActionSink for Detached {
    fn handle_action(&self, _action: &ActionDescriptor) {}
}

/// The action map in effect at `node`: the inherited one if any, else the node's own.
pub fn effective_actions<'a>(
    inherited: Option<&'a ActionMap>,
    node: &'a ViewNode,
) -> Option<&'a ActionMap> {
    inherited.or(node.actions.as_ref())
}

/// Builds widget trees whose buttons deliver taps to one [`ActionSink`].
#[derive(Clone)]
pub struct ViewMapper {
    /// Tap receiver; weak so a tree never keeps its dispatcher alive.
    sink: Weak<dyn ActionSink>,
}

impl fmt::Debug for ViewMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMapper")
            .field("attached", &(self.sink.strong_count() > 0))
            .finish()
    }
}

impl ViewMapper {
    /// A mapper whose bound buttons deliver to `sink`.
    pub fn new(sink: &Arc<dyn ActionSink>) -> Self {
        Self {
            sink: Arc::downgrade(sink),
        }
    }

    /// A mapper with no receiver: bindings resolve, but taps go nowhere.
    pub fn detached() -> Self {
        let sink: Weak<dyn ActionSink> = Weak::<Detached>::new();
        Self { sink }
    }

    /// Map a root node.
    pub fn map(&self, node: &ViewNode) -> Widget {
        self.map_with(node, None)
    }

    /// Map `node` with `inherited` as the action map from its ancestors.
    pub fn map_with(&self, node: &ViewNode, inherited: Option<&ActionMap>) -> Widget {
        let actions = effective_actions(inherited, node);
        let mut widget = self.build(node, actions);
        for child in node.children() {
            widget.attach(self.map_with(child, actions));
        }
        widget
    }

    /// Build the widget for `node` alone.
    fn build(&self, node: &ViewNode, actions: Option<&ActionMap>) -> Widget {
        let content = Content::new(&node.kind, node.content.as_ref());
        let Some(node_type) = NodeType::from_wire(&node.kind) else {
            warn!(node_type = %node.kind, "unknown node type, rendering placeholder");
            return Widget::new(WidgetKind::Placeholder(PlaceholderView {
                node_type: node.kind.clone(),
            }));
        };
        trace!(%node_type, "mapping node");
        let kind = match node_type {
            NodeType::ContentView => WidgetKind::Container(container(&content)),
            NodeType::StackView => WidgetKind::Stack(stack(&content)),
            NodeType::Label => WidgetKind::Label(label(&content)),
            NodeType::ImageView => WidgetKind::Image(image(&content)),
            NodeType::Button => WidgetKind::Button(self.button(&content, actions)),
            NodeType::ServiceCard => match service_card(&content) {
                Some(card) => WidgetKind::ServiceCard(card),
                None => {
                    debug!("service card without content, rendering empty container");
                    WidgetKind::Container(ContainerView::default())
                }
            },
        };
        Widget::new(kind)
    }

    /// Build a button and bind its action by rendered title.
    fn button(&self, content: &Content<'_>, actions: Option<&ActionMap>) -> ButtonView {
        let mut button = ButtonView {
            title: content
                .is_present()
                .then(|| content.str("text").unwrap_or_default().to_string()),
            variant: content
                .str("type")
                .and_then(ButtonVariant::from_wire)
                .unwrap_or_default(),
            loading: content.flag("isLoading").unwrap_or(false),
            height: content.number("height"),
            on_tap: None,
        };
        let Some(title) = button.title.as_deref() else {
            debug!("button without content, no action bound");
            return button;
        };
        match actions.and_then(|m| m.get(title)) {
            Some(action) => {
                debug!(title, action = %action.kind, "bound button action");
                button.on_tap = Some(TapHandler::new(title, action.clone(), self.sink.clone()));
            }
            None => {
                let available: Vec<&str> = actions
                    .map(|m| m.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                debug!(title, ?available, "no action matches button title");
            }
        }
        button
    }
}

/// `contentView`.
fn container(content: &Content<'_>) -> ContainerView {
    ContainerView {
        background: content
            .str("backgroundColor")
            .map(Color::from_wire_or_default),
    }
}

/// `stackView`.
fn stack(content: &Content<'_>) -> StackView {
    StackView {
        axis: content
            .str("axis")
            .and_then(Axis::from_wire)
            .unwrap_or_default(),
        spacing: content
            .str("spacing")
            .and_then(Spacing::from_wire)
            .unwrap_or_default(),
        alignment: content
            .str("alignment")
            .and_then(StackAlignment::from_wire)
            .unwrap_or_default(),
        padding: content
            .str("padding")
            .map(|p| Spacing::from_wire(p).unwrap_or_default()),
    }
}

/// `label`.
fn label(content: &Content<'_>) -> LabelView {
    LabelView {
        text: content.str("text").unwrap_or_default().to_string(),
        variant: content
            .str("type")
            .and_then(LabelVariant::from_wire)
            .unwrap_or_default(),
        alignment: content
            .str("alignment")
            .and_then(TextAlignment::from_wire)
            .unwrap_or_default(),
    }
}

/// `imageView`.
fn image(content: &Content<'_>) -> ImageView {
    ImageView {
        name: content.str("imageName").map(str::to_string),
        tint: content.str("tintColor").map(Color::from_wire_or_default),
        width: content.number("width"),
        height: content.number("height"),
    }
}

/// `serviceCard`; `None` without content.
fn service_card(content: &Content<'_>) -> Option<ServiceCardView> {
    if !content.is_present() {
        return None;
    }
    let text = |key: &str| content.str(key).unwrap_or_default().to_string();
    Some(ServiceCardView {
        icon: text("iconName"),
        title: text("title"),
        subtitle: text("subtitle"),
    })
}
