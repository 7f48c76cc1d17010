//! Loosely-typed values carried in node `content` and action `payload` maps.
//!
//! The decoder is type-exact: a JSON string is always a [`DynamicValue::String`],
//! never coerced into a number or boolean, and a JSON number is an `Int` when it
//! fits `i64` and a `Float` otherwise.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::trace;

use crate::{Error, path::FieldPath};

/// String-keyed map of dynamic values (`content`, `payload`).
pub type ValueMap = BTreeMap<String, DynamicValue>;

/// How the decoder treats members that match none of the recognized shapes.
///
/// Only nested members are affected; a bare top-level `null` always decodes to
/// [`DynamicValue::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Silently drop unrecognized members from their object or array.
    #[default]
    Lenient,
    /// Reject the whole input at the first unrecognized member.
    Strict,
    /// Keep `null` members as [`DynamicValue::Null`].
    Preserve,
}

/// A JSON-like value with no fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum DynamicValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Self>),
    Object(ValueMap),
}

impl DynamicValue {
    /// Decode raw JSON bytes.
    ///
    /// Fails with [`Error::MalformedInput`] when the bytes are not a JSON value,
    /// or, under [`DecodePolicy::Strict`], when a nested member is unrecognized.
    pub fn decode(bytes: &[u8], policy: DecodePolicy) -> Result<Self, Error> {
        let raw: Value = serde_json::from_slice(bytes).map_err(|e| Error::from_json(&e))?;
        Self::from_json(raw, policy)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_json(raw: Value, policy: DecodePolicy) -> Result<Self, Error> {
        if raw.is_null() {
            return Ok(Self::Null);
        }
        let mut path = FieldPath::root();
        Ok(decode_member(raw, policy, &mut path)?.unwrap_or(Self::Null))
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// True for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value of either number variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow an object's members.
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow an array's elements.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Decode one member. `Ok(None)` means the member is dropped.
fn decode_member(
    raw: Value,
    policy: DecodePolicy,
    path: &mut FieldPath,
) -> Result<Option<DynamicValue>, Error> {
    let value = match raw {
        Value::Bool(b) => DynamicValue::Bool(b),
        Value::String(s) => DynamicValue::String(s),
        Value::Number(n) => match number(&n) {
            Some(v) => v,
            None => return unrecognized(policy, path, "number"),
        },
        Value::Object(fields) => {
            let mut out = ValueMap::new();
            for (key, member) in fields {
                path.push_key(&key);
                let decoded = decode_member(member, policy, path);
                path.pop();
                if let Some(v) = decoded? {
                    out.insert(key, v);
                }
            }
            DynamicValue::Object(out)
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.into_iter().enumerate() {
                path.push_index(idx);
                let decoded = decode_member(item, policy, path);
                path.pop();
                if let Some(v) = decoded? {
                    out.push(v);
                }
            }
            DynamicValue::Array(out)
        }
        Value::Null => return unrecognized(policy, path, "null"),
    };
    Ok(Some(value))
}

/// Integers that fit `i64` stay integral; everything else becomes a float.
fn number(n: &Number) -> Option<DynamicValue> {
    match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => Some(DynamicValue::Int(i)),
        (None, Some(f)) if f.is_finite() => Some(DynamicValue::Float(f)),
        _ => None,
    }
}

/// Apply the policy to a member of shape `what`.
fn unrecognized(
    policy: DecodePolicy,
    path: &FieldPath,
    what: &str,
) -> Result<Option<DynamicValue>, Error> {
    match policy {
        DecodePolicy::Lenient => {
            trace!(path = %path, what, "dropping unrecognized member");
            Ok(None)
        }
        DecodePolicy::Strict => Err(Error::MalformedInput {
            message: format!("unsupported {what} value at {path}"),
            line: None,
            column: None,
        }),
        DecodePolicy::Preserve => Ok(Some(DynamicValue::Null)),
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for DynamicValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(v: Vec<DynamicValue>) -> Self {
        Self::Array(v)
    }
}

impl From<ValueMap> for DynamicValue {
    fn from(v: ValueMap) -> Self {
        Self::Object(v)
    }
}
