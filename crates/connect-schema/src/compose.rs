//! # Wrapper Schemas
//!
//! Combinators that lift an inner schema: [`optional`], [`array`], [`dict`]
//! and [`boxed`].
//!
//! `optional` treats a missing key and an explicit `null` identically. A
//! payload cannot express "explicitly cleared" through these schemas.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{Codec, Schema};

struct OptionalCodec<T> {
    inner: Schema<T>,
}

impl<T> Codec<Option<T>> for OptionalCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<Option<T>, ValidationError> {
        match input {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.inner.decode(value).map(Some),
        }
    }

    fn encode(&self, value: &Option<T>) -> Option<Value> {
        value.as_ref().and_then(|v| self.inner.encode_field(v))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("optional<{}>", self.inner.describe()))
    }
}

struct ArrayCodec<T> {
    inner: Schema<T>,
}

impl<T> Codec<Vec<T>> for ArrayCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<Vec<T>, ValidationError> {
        let Some(Value::Array(items)) = input else {
            return Err(ValidationError::mismatch(self.describe(), input));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.inner.decode(item).map_err(|e| e.at_index(i)))
            .collect()
    }

    fn encode(&self, values: &Vec<T>) -> Option<Value> {
        // Unset elements become null so positions are preserved.
        let items = values
            .iter()
            .map(|v| self.inner.encode_field(v).unwrap_or(Value::Null))
            .collect();
        Some(Value::Array(items))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("array<{}>", self.inner.describe()))
    }
}

struct DictCodec<T> {
    inner: Schema<T>,
}

impl<T> Codec<BTreeMap<String, T>> for DictCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<BTreeMap<String, T>, ValidationError> {
        let Some(Value::Object(members)) = input else {
            return Err(ValidationError::mismatch(self.describe(), input));
        };
        members
            .iter()
            .map(|(key, item)| {
                self.inner
                    .decode(item)
                    .map(|v| (key.clone(), v))
                    .map_err(|e| e.at_key(key.as_str()))
            })
            .collect()
    }

    fn encode(&self, values: &BTreeMap<String, T>) -> Option<Value> {
        let mut members = Map::new();
        for (key, v) in values {
            if let Some(encoded) = self.inner.encode_field(v) {
                members.insert(key.clone(), encoded);
            }
        }
        Some(Value::Object(members))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("dict<{}>", self.inner.describe()))
    }
}

struct BoxedCodec<T> {
    inner: Schema<T>,
}

impl<T> Codec<Box<T>> for BoxedCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<Box<T>, ValidationError> {
        self.inner.decode_field(input).map(Box::new)
    }

    fn encode(&self, value: &Box<T>) -> Option<Value> {
        self.inner.encode_field(value)
    }

    fn describe(&self) -> Cow<'static, str> {
        self.inner.describe()
    }
}

/// Absent-tolerant wrapper: missing or `null` decodes to `None`, and `None`
/// is omitted when encoded inside an object.
pub fn optional<T: 'static>(inner: Schema<T>) -> Schema<Option<T>> {
    Schema::from_codec(OptionalCodec { inner })
}

/// Element-wise schema over a JSON array. The first bad element fails the
/// whole decode and its index is recorded in the error path.
pub fn array<T: 'static>(inner: Schema<T>) -> Schema<Vec<T>> {
    Schema::from_codec(ArrayCodec { inner })
}

/// Value-wise schema over a JSON object with arbitrary keys.
pub fn dict<T: 'static>(inner: Schema<T>) -> Schema<BTreeMap<String, T>> {
    Schema::from_codec(DictCodec { inner })
}

/// Heap indirection, transparent on the wire. Needed for recursive records.
pub fn boxed<T: 'static>(inner: Schema<T>) -> Schema<Box<T>> {
    Schema::from_codec(BoxedCodec { inner })
}
