//! # Primitive Schemas
//!
//! Leaf schemas for JSON scalars. Decoding checks the JSON kind and fails
//! with a [`ValidationError`] on mismatch; encoding passes the value through.
//! None of them accept a missing key or `null`: wrap in
//! [`optional`](crate::optional) for that.

use std::borrow::Cow;

use serde_json::{Number, Value};

use crate::error::ValidationError;
use crate::schema::{Codec, Schema};

struct StringCodec;

impl Codec<String> for StringCodec {
    fn decode(&self, input: Option<&Value>) -> Result<String, ValidationError> {
        match input {
            Some(Value::String(s)) => Ok(s.clone()),
            other => Err(ValidationError::mismatch("string", other)),
        }
    }

    fn encode(&self, value: &String) -> Option<Value> {
        Some(Value::String(value.clone()))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("string")
    }
}

struct NumberCodec;

impl Codec<f64> for NumberCodec {
    fn decode(&self, input: Option<&Value>) -> Result<f64, ValidationError> {
        match input {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| ValidationError::mismatch("number", input)),
            other => Err(ValidationError::mismatch("number", other)),
        }
    }

    fn encode(&self, value: &f64) -> Option<Value> {
        // JSON has no NaN or infinities.
        Some(Number::from_f64(*value).map_or(Value::Null, Value::Number))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("number")
    }
}

struct IntegerCodec;

impl Codec<i64> for IntegerCodec {
    fn decode(&self, input: Option<&Value>) -> Result<i64, ValidationError> {
        match input {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_f64))
                .ok_or_else(|| ValidationError::mismatch("integer", input)),
            other => Err(ValidationError::mismatch("integer", other)),
        }
    }

    fn encode(&self, value: &i64) -> Option<Value> {
        Some(Value::from(*value))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("integer")
    }
}

/// `10.0` on the wire is the integer 10. The bounds are exact powers of two.
fn integral_f64(f: f64) -> Option<i64> {
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    (f.fract() == 0.0 && (-BOUND..BOUND).contains(&f)).then_some(f as i64)
}

struct BooleanCodec;

impl Codec<bool> for BooleanCodec {
    fn decode(&self, input: Option<&Value>) -> Result<bool, ValidationError> {
        match input {
            Some(Value::Bool(b)) => Ok(*b),
            other => Err(ValidationError::mismatch("boolean", other)),
        }
    }

    fn encode(&self, value: &bool) -> Option<Value> {
        Some(Value::Bool(*value))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("boolean")
    }
}

struct UnknownCodec;

impl Codec<Value> for UnknownCodec {
    fn decode(&self, input: Option<&Value>) -> Result<Value, ValidationError> {
        input
            .cloned()
            .ok_or_else(|| ValidationError::mismatch("any value", input))
    }

    fn encode(&self, value: &Value) -> Option<Value> {
        Some(value.clone())
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("any value")
    }
}

/// JSON string.
pub fn string() -> Schema<String> {
    Schema::from_codec(StringCodec)
}

/// JSON number as `f64`.
pub fn number() -> Schema<f64> {
    Schema::from_codec(NumberCodec)
}

/// JSON number with an integral value that fits an `i64`. Integral floats
/// such as `10.0` are accepted; fractional values are rejected.
pub fn integer() -> Schema<i64> {
    Schema::from_codec(IntegerCodec)
}

/// JSON `true` / `false`.
pub fn boolean() -> Schema<bool> {
    Schema::from_codec(BooleanCodec)
}

/// Any present JSON value, `null` included, kept as-is.
pub fn unknown() -> Schema<Value> {
    Schema::from_codec(UnknownCodec)
}
