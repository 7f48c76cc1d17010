//! Type-exact reads from a node's `content` map.

use bdui_protocol::{DynamicValue, ValueMap};
use tracing::debug;

/// Read-only view over an optional `content` map.
///
/// A value of the wrong type reads as absent (and is logged at debug level),
/// so every lookup falls through to the caller's default.
#[derive(Debug, Clone, Copy)]
pub struct Content<'a> {
    /// The node's content, if any.
    map: Option<&'a ValueMap>,
    /// Node type, for diagnostics.
    node: &'a str,
}

impl<'a> Content<'a> {
    /// Wrap a node's content.
    pub fn new(node: &'a str, map: Option<&'a ValueMap>) -> Self {
        Self { map, node }
    }

    /// True when the node carries a `content` object at all.
    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    /// Raw lookup.
    fn get(&self, key: &str) -> Option<&'a DynamicValue> {
        self.map.and_then(|m| m.get(key))
    }

    /// Log a type mismatch and yield nothing.
    fn mismatch<T>(&self, key: &str, want: &str, got: &DynamicValue) -> Option<T> {
        debug!(
            node = self.node,
            key,
            want,
            got = got.kind_name(),
            "ignoring content value of wrong type"
        );
        None
    }

    /// String entry.
    pub fn str(&self, key: &str) -> Option<&'a str> {
        let v = self.get(key)?;
        match v.as_str() {
            Some(s) => Some(s),
            None => self.mismatch(key, "string", v),
        }
    }

    /// Numeric entry (integer or float).
    pub fn number(&self, key: &str) -> Option<f64> {
        let v = self.get(key)?;
        match v.as_f64() {
            Some(n) => Some(n),
            None => self.mismatch(key, "number", v),
        }
    }

    /// Boolean entry.
    pub fn flag(&self, key: &str) -> Option<bool> {
        let v = self.get(key)?;
        match v.as_bool() {
            Some(b) => Some(b),
            None => self.mismatch(key, "bool", v),
        }
    }
}
