//! Wire model for server-driven UI documents.
//!
//! A document is a JSON tree of view nodes:
//!
//! ```json
//! {
//!   "type": "stackView",
//!   "content": { "axis": "vertical" },
//!   "subviews": [ { "type": "button", "content": { "text": "Go" } } ],
//!   "actions": { "Go": { "type": "dismiss" } }
//! }
//! ```
//!
//! Decoding happens in two stages: raw bytes become a schema-free
//! [`DynamicValue`] ([`DynamicValue::decode`]), which is then parsed against the
//! node envelope ([`ViewNode::parse`]). [`ViewNode::from_slice`] does both.

mod action;
mod error;
mod node;
mod path;
mod value;

#[cfg(test)]
mod test_parse;
#[cfg(test)]
mod test_roundtrip;

pub use action::{Action, ActionIssue, ActionKind};
pub use error::Error;
pub use node::{ActionDescriptor, ActionMap, ViewNode};
pub use path::FieldPath;
pub use value::{DecodePolicy, DynamicValue, ValueMap};
