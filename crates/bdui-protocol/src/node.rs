//! Typed view-tree nodes and action descriptors.
//!
//! Parsing is schema-first over a decoded [`DynamicValue`]: `type` is mandatory
//! on every node and every action, all other envelope fields are optional, and
//! unknown envelope fields are ignored. An explicit `null` for an optional field
//! is the same as the field being absent.

use std::collections::BTreeMap;

use crate::{
    ActionKind, DecodePolicy, DynamicValue, Error, ValueMap, path::FieldPath,
};

/// Action bindings of a node, keyed by the title of the control that triggers them.
pub type ActionMap = BTreeMap<String, ActionDescriptor>;

/// One node of a server-driven view tree.
///
/// The tree is immutable once parsed; a reload produces a new tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// Node type, e.g. `stackView` or `label`. Never empty.
    pub kind: String,
    /// Type-specific properties.
    pub content: Option<ValueMap>,
    /// Children in render order.
    pub subviews: Option<Vec<Self>>,
    /// Action bindings, inherited by descendants.
    pub actions: Option<ActionMap>,
}

/// Declarative description of a side effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    /// Action discriminant as it appears on the wire.
    pub kind: String,
    /// Action arguments.
    pub payload: Option<ValueMap>,
}

impl ViewNode {
    /// A node of the given type with no content, children or actions.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: None,
            subviews: None,
            actions: None,
        }
    }

    /// Builder: set one content entry.
    pub fn with_content(mut self, key: &str, value: impl Into<DynamicValue>) -> Self {
        self.content
            .get_or_insert_with(ValueMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// Builder: append a child.
    pub fn with_subview(mut self, child: Self) -> Self {
        self.subviews.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Builder: bind an action under `key`.
    pub fn with_action(mut self, key: &str, action: ActionDescriptor) -> Self {
        self.actions
            .get_or_insert_with(ActionMap::new)
            .insert(key.to_string(), action);
        self
    }

    /// Decode and parse raw JSON bytes in one step.
    pub fn from_slice(bytes: &[u8], policy: DecodePolicy) -> Result<Self, Error> {
        let value = DynamicValue::decode(bytes, policy)?;
        Self::parse(&value)
    }

    /// Parse a decoded value against the node envelope.
    pub fn parse(value: &DynamicValue) -> Result<Self, Error> {
        let mut path = FieldPath::root();
        parse_node(value, &mut path)
    }

    /// Children in render order (empty when `subviews` is absent).
    pub fn children(&self) -> &[Self] {
        self.subviews.as_deref().unwrap_or_default()
    }

    /// Look up a content entry.
    pub fn content_value(&self, key: &str) -> Option<&DynamicValue> {
        self.content.as_ref().and_then(|c| c.get(key))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of action bindings declared anywhere in this subtree.
    pub fn action_count(&self) -> usize {
        self.actions.as_ref().map_or(0, BTreeMap::len)
            + self.children().iter().map(Self::action_count).sum::<usize>()
    }

    /// Encode back to the wire shape as a dynamic value.
    pub fn to_value(&self) -> DynamicValue {
        let mut fields = ValueMap::new();
        fields.insert("type".into(), DynamicValue::String(self.kind.clone()));
        if let Some(content) = &self.content {
            fields.insert("content".into(), DynamicValue::Object(content.clone()));
        }
        if let Some(subviews) = &self.subviews {
            let items = subviews.iter().map(Self::to_value).collect();
            fields.insert("subviews".into(), DynamicValue::Array(items));
        }
        if let Some(actions) = &self.actions {
            let entries = actions
                .iter()
                .map(|(k, a)| (k.clone(), a.to_value()))
                .collect();
            fields.insert("actions".into(), DynamicValue::Object(entries));
        }
        DynamicValue::Object(fields)
    }

    /// Encode back to wire JSON, via [`ViewNode::to_value`].
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_value())
    }
}

impl ActionDescriptor {
    /// An action of the given type with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Builder: set one payload entry.
    pub fn with_payload(mut self, key: &str, value: impl Into<DynamicValue>) -> Self {
        self.payload
            .get_or_insert_with(ValueMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// The recognized discriminant, or `None` for types outside the vocabulary.
    pub fn action_kind(&self) -> Option<ActionKind> {
        ActionKind::from_wire(&self.kind)
    }

    /// String payload field, type-exact.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|p| p.get(key))
            .and_then(DynamicValue::as_str)
    }

    /// Encode back to the wire shape as a dynamic value.
    pub fn to_value(&self) -> DynamicValue {
        let mut fields = ValueMap::new();
        fields.insert("type".into(), DynamicValue::String(self.kind.clone()));
        if let Some(payload) = &self.payload {
            fields.insert("payload".into(), DynamicValue::Object(payload.clone()));
        }
        DynamicValue::Object(fields)
    }

    /// Parse one action entry; `type` is mandatory.
    pub fn parse(value: &DynamicValue) -> Result<Self, Error> {
        let mut path = FieldPath::root();
        parse_action(value, &mut path)
    }
}

/// Member `key` of `fields`, treating an explicit `null` as absent.
fn present<'a>(fields: &'a ValueMap, key: &str) -> Option<&'a DynamicValue> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Require `value` to be an object.
fn expect_object<'a>(value: &'a DynamicValue, path: &FieldPath) -> Result<&'a ValueMap, Error> {
    value.as_object().ok_or_else(|| {
        Error::schema(
            path,
            format!("expected an object, found {}", value.kind_name()),
        )
    })
}

/// The mandatory, non-empty `type` string of a node or action.
fn required_type(fields: &ValueMap, path: &FieldPath) -> Result<String, Error> {
    let at = path.child("type");
    match present(fields, "type") {
        None => Err(Error::schema(&at, "missing required field")),
        Some(DynamicValue::String(s)) if s.is_empty() => {
            Err(Error::schema(&at, "must not be empty"))
        }
        Some(DynamicValue::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::schema(
            &at,
            format!("expected a string, found {}", other.kind_name()),
        )),
    }
}

/// An optional object-valued member.
fn optional_map(
    fields: &ValueMap,
    key: &str,
    path: &FieldPath,
) -> Result<Option<ValueMap>, Error> {
    match present(fields, key) {
        None => Ok(None),
        Some(v) => expect_object(v, &path.child(key)).map(|m| Some(m.clone())),
    }
}

fn parse_node(value: &DynamicValue, path: &mut FieldPath) -> Result<ViewNode, Error> {
    let fields = expect_object(value, path)?;
    let kind = required_type(fields, path)?;
    let content = optional_map(fields, "content", path)?;

    let subviews = match present(fields, "subviews") {
        None => None,
        Some(DynamicValue::Array(items)) => {
            path.push_key("subviews");
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                path.push_index(idx);
                let child = parse_node(item, path);
                path.pop();
                out.push(child?);
            }
            path.pop();
            Some(out)
        }
        Some(other) => {
            return Err(Error::schema(
                &path.child("subviews"),
                format!("expected an array, found {}", other.kind_name()),
            ));
        }
    };

    let actions = match present(fields, "actions") {
        None => None,
        Some(v) => {
            path.push_key("actions");
            let parsed = parse_action_map(v, path);
            path.pop();
            Some(parsed?)
        }
    };

    Ok(ViewNode {
        kind,
        content,
        subviews,
        actions,
    })
}

/// All-or-nothing: one malformed entry fails the whole map.
fn parse_action_map(value: &DynamicValue, path: &mut FieldPath) -> Result<ActionMap, Error> {
    let entries = expect_object(value, path)?;
    let mut out = ActionMap::new();
    for (key, entry) in entries {
        path.push_key(key);
        let action = parse_action(entry, path);
        path.pop();
        out.insert(key.clone(), action?);
    }
    Ok(out)
}

fn parse_action(value: &DynamicValue, path: &mut FieldPath) -> Result<ActionDescriptor, Error> {
    let fields = expect_object(value, path)?;
    let kind = required_type(fields, path)?;
    let payload = optional_map(fields, "payload", path)?;
    Ok(ActionDescriptor { kind, payload })
}
