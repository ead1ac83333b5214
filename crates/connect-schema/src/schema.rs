//! # Schema Handles
//!
//! [`Schema<T>`] is the shared, immutable descriptor every combinator
//! produces. It wraps a [`Codec`] behind an `Arc`, so cloning a schema is a
//! reference-count bump and the same compiled schema can serve any number of
//! concurrent decode/encode calls.
//!
//! Codecs distinguish "absent" from "present" on both sides:
//!
//! - decode receives `None` when the enclosing object has no such key;
//! - encode returns `None` when the value is unset and the key must be
//!   omitted from the enclosing object.
//!
//! Only `optional` ever produces `None` on encode, and only `optional`
//! accepts `None` (or `null`) on decode.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{DecodeError, ValidationError};

/// Decode/encode behaviour for one logical type.
///
/// Implementations must be pure: the same input always produces the same
/// output, and no call mutates the codec.
pub trait Codec<T>: Send + Sync {
    /// Decode a wire value. `None` means the key was absent.
    fn decode(&self, input: Option<&Value>) -> Result<T, ValidationError>;

    /// Encode a value. `None` means "unset, omit the key".
    fn encode(&self, value: &T) -> Option<Value>;

    /// Short description of the expected wire shape, used in errors.
    fn describe(&self) -> Cow<'static, str>;
}

/// A reusable, composable bidirectional converter between wire JSON and `T`.
pub struct Schema<T> {
    codec: Arc<dyn Codec<T>>,
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Schema").field(&self.describe()).finish()
    }
}

impl<T> Schema<T> {
    /// Wrap a codec into a shareable schema.
    pub fn from_codec<C>(codec: C) -> Self
    where
        C: Codec<T> + 'static,
    {
        Self {
            codec: Arc::new(codec),
        }
    }

    /// Decode a present wire value into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] whose path locates the first mismatch.
    pub fn decode(&self, value: &Value) -> Result<T, ValidationError> {
        self.codec.decode(Some(value))
    }

    /// Decode a possibly-absent object member.
    pub fn decode_field(&self, input: Option<&Value>) -> Result<T, ValidationError> {
        self.codec.decode(input)
    }

    /// Parse JSON text and decode it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] for malformed text and
    /// [`DecodeError::Validation`] for a shape mismatch.
    pub fn decode_str(&self, text: &str) -> Result<T, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.decode(&value)?)
    }

    /// Encode `value` as wire JSON. An unset top-level value encodes as `null`.
    pub fn encode(&self, value: &T) -> Value {
        self.codec.encode(value).unwrap_or(Value::Null)
    }

    /// Encode an object member; `None` means the member is omitted.
    pub fn encode_field(&self, value: &T) -> Option<Value> {
        self.codec.encode(value)
    }

    /// Short description of the expected wire shape.
    pub fn describe(&self) -> Cow<'static, str> {
        self.codec.describe()
    }

    /// Returns true if both handles share the same underlying codec.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.codec, &other.codec)
    }
}

/// A type with a canonical wire schema.
///
/// Implementors usually memoize the schema in a `static OnceLock` and refer
/// to other models through [`lazy`](crate::lazy) so that no schema
/// initializer re-enters itself.
pub trait Model: Sized + Send + Sync + 'static {
    /// The canonical schema for this type.
    fn schema() -> Schema<Self>;

    /// Decode a wire value.
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::schema().decode(value)
    }

    /// Parse and decode JSON text.
    fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        Self::schema().decode_str(text)
    }

    /// Encode as a wire value.
    fn to_value(&self) -> Value {
        Self::schema().encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueKind;
    use serde_json::json;

    struct Upper;

    impl Codec<String> for Upper {
        fn decode(&self, input: Option<&Value>) -> Result<String, ValidationError> {
            match input {
                Some(Value::String(s)) => Ok(s.to_uppercase()),
                other => Err(ValidationError::mismatch("string", other)),
            }
        }

        fn encode(&self, value: &String) -> Option<Value> {
            Some(Value::String(value.to_lowercase()))
        }

        fn describe(&self) -> Cow<'static, str> {
            Cow::Borrowed("upper")
        }
    }

    #[test]
    fn custom_codec_plugs_into_schema() {
        let schema = Schema::from_codec(Upper);
        assert_eq!(schema.decode(&json!("abc")).unwrap(), "ABC");
        assert_eq!(schema.encode(&"ABC".to_string()), json!("abc"));
        assert_eq!(format!("{schema:?}"), "Schema(\"upper\")");
    }

    #[test]
    fn decode_field_reports_missing() {
        let schema = Schema::from_codec(Upper);
        let err = schema.decode_field(None).unwrap_err();
        assert_eq!(err.actual(), ValueKind::Missing);
    }

    #[test]
    fn decode_str_distinguishes_syntax_from_shape() {
        let schema = Schema::from_codec(Upper);
        assert!(matches!(schema.decode_str("{"), Err(DecodeError::Json(_))));
        assert!(matches!(schema.decode_str("12"), Err(DecodeError::Validation(_))));
        assert_eq!(schema.decode_str("\"ok\"").unwrap(), "OK");
    }

    #[test]
    fn clones_share_the_codec() {
        let schema = Schema::from_codec(Upper);
        let other = schema.clone();
        assert!(schema.ptr_eq(&other));
        assert!(!schema.ptr_eq(&Schema::from_codec(Upper)));
    }

    #[test]
    fn schema_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Schema<String>>();
    }
}
