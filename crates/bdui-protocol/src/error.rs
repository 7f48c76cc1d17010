//! Error types for decoding and parsing documents.

use thiserror::Error;

use crate::path::FieldPath;

/// Failures that make a document unusable as a whole.
///
/// Both variants are fatal to a render: hosts show an empty state instead of a
/// partial tree. Per-node anomalies (unknown node types, unknown action types,
/// unresolved button bindings) are not errors and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The payload is not a parseable JSON value, or (in strict mode) contains a
    /// member the decoder does not recognize.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Human-readable reason.
        message: String,
        /// 1-based line of the failure, when known.
        line: Option<usize>,
        /// 1-based column of the failure, when known.
        column: Option<usize>,
    },

    /// A structurally required field is missing or has the wrong shape.
    #[error("schema error at {path}: {message}")]
    Schema {
        /// Location of the offending field, e.g. `$.subviews[0].type`.
        path: String,
        /// Human-readable reason.
        message: String,
    },
}

impl Error {
    /// Wrap a JSON syntax error, keeping its location.
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        Self::MalformedInput {
            message: err.to_string(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }

    /// Build a schema error for the field at `path`.
    pub(crate) fn schema(path: &FieldPath, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// True for [`Error::Schema`].
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// True for [`Error::MalformedInput`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
