//! Locations inside a document, used to point schema errors at the offending field.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Object member.
    Key(String),
    /// Array element.
    Index(usize),
}

/// JSONPath-like location (`$.subviews[1].actions["Pay"].type`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    /// Steps from the document root.
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The document root (`$`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Descend into an object member.
    pub fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    /// Descend into an array element.
    pub fn push_index(&mut self, idx: usize) {
        self.segments.push(Segment::Index(idx));
    }

    /// Return to the parent location.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Path of a member of the current location, without mutating `self`.
    pub fn child(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.push_key(key);
        next
    }

    /// Number of steps below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

/// Keys made of identifier characters print in dotted form, others are quoted.
fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for seg in &self.segments {
            match seg {
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{k}")?,
                Segment::Key(k) => write!(f, "[{k:?}]")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}
