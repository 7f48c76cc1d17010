//! Widget rendering for server-driven view trees.
//!
//! [`ViewMapper`] turns a parsed [`bdui_protocol::ViewNode`] into a [`Widget`]
//! tree. Unknown node types become red placeholders, content values fall back
//! to design-token defaults, and buttons are bound to the action whose key
//! equals their rendered title. Tapping a bound button hands the action
//! descriptor to an [`ActionSink`], normally the engine's dispatcher.

mod content;
mod empty_state;
mod mapper;
mod registry;
pub mod tokens;
mod widget;

#[cfg(test)]
mod test_mapper;
#[cfg(test)]
mod test_props;

pub use content::Content;
pub use empty_state::EmptyState;
pub use mapper::{ActionSink, ViewMapper, effective_actions};
pub use registry::NodeType;
pub use widget::{
    Attachment, ButtonView, ContainerView, ImageView, LabelView, PlaceholderView,
    ServiceCardView, StackView, TapHandler, Widget, WidgetKind,
};
