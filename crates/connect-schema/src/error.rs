//! # Validation Errors
//!
//! Every decode failure is reported as a [`ValidationError`] carrying three
//! things: the path from the root value to the offending field or array
//! element, a description of the shape the schema expected, and the JSON
//! kind that was actually found.
//!
//! Paths are accumulated while the error propagates outward: the failing
//! leaf reports an empty path and each enclosing `object`, `array` or `dict`
//! prepends its own segment.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step from a parent value into a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member, addressed by its wire key.
    Key(String),
    /// Array element, addressed by position.
    Index(usize),
}

/// Location of a value relative to the root of a decoded document.
///
/// Renders as a dotted/bracketed path, e.g. `refunds[2].amount_money.amount`.
/// The empty path renders as `(root)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The path of the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if this path points at the root value.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from the root outward.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Runtime kind of a JSON input, including the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The key was not present in the enclosing object.
    Missing,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify an input; `None` means the key was absent.
    pub fn of(input: Option<&Value>) -> Self {
        match input {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wire value did not match the shape its schema requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: expected {expected}, found {actual}")]
pub struct ValidationError {
    path: FieldPath,
    expected: Cow<'static, str>,
    actual: ValueKind,
}

impl ValidationError {
    /// A failure at the current value. Enclosing schemas add path segments.
    pub fn new(expected: impl Into<Cow<'static, str>>, actual: ValueKind) -> Self {
        Self {
            path: FieldPath::root(),
            expected: expected.into(),
            actual,
        }
    }

    /// Shorthand for a mismatch against a concrete input.
    pub fn mismatch(expected: impl Into<Cow<'static, str>>, input: Option<&Value>) -> Self {
        Self::new(expected, ValueKind::of(input))
    }

    /// Re-root this error under the object member `key`.
    #[must_use]
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.prepend(PathSegment::Key(key.into()));
        self
    }

    /// Re-root this error under the array element `index`.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> ValueKind {
        self.actual
    }
}

/// Error decoding a model from JSON text.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The text was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON did not match the schema.
    #[error("validation failed at {0}")]
    Validation(#[from] ValidationError),
}
