//! # Object Schemas
//!
//! Maps a record type to a JSON object through a table of field entries.
//! Each entry pairs a property of the record with an explicit wire key and
//! the schema for that property's value, plus plain `fn` accessors used to
//! read the property on encode and assign it on decode.
//!
//! ```
//! use connect_schema::{object, optional, string, Schema};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct IdMapping {
//!     client_object_id: Option<String>,
//!     object_id: Option<String>,
//! }
//!
//! let schema: Schema<IdMapping> = object!(IdMapping {
//!     client_object_id: "client_object_id" => optional(string()),
//!     object_id: "object_id" => optional(string()),
//! });
//!
//! let decoded = schema.decode(&serde_json::json!({"object_id": "abc123"})).unwrap();
//! assert_eq!(decoded.object_id.as_deref(), Some("abc123"));
//! ```
//!
//! Decoding starts from `T::default()` and assigns every declared field, so
//! each field is written exactly once. Wire keys the table does not declare
//! are ignored.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{Codec, Schema};

/// Type-erased field entry of an object schema.
trait FieldCodec<T>: Send + Sync {
    fn property(&self) -> &'static str;
    fn wire_key(&self) -> &'static str;
    fn decode_into(&self, members: &Map<String, Value>, record: &mut T)
        -> Result<(), ValidationError>;
    fn encode_from(&self, record: &T, members: &mut Map<String, Value>);
}

struct Field<T, F> {
    property: &'static str,
    wire_key: &'static str,
    schema: Schema<F>,
    get: fn(&T) -> &F,
    set: fn(&mut T, F),
}

impl<T, F> FieldCodec<T> for Field<T, F> {
    fn property(&self) -> &'static str {
        self.property
    }

    fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    fn decode_into(
        &self,
        members: &Map<String, Value>,
        record: &mut T,
    ) -> Result<(), ValidationError> {
        let value = self
            .schema
            .decode_field(members.get(self.wire_key))
            .map_err(|e| e.at_key(self.wire_key))?;
        (self.set)(record, value);
        Ok(())
    }

    fn encode_from(&self, record: &T, members: &mut Map<String, Value>) {
        if let Some(value) = self.schema.encode_field((self.get)(record)) {
            members.insert(self.wire_key.to_string(), value);
        }
    }
}

/// Builder for a record schema. Finish with [`ObjectSchema::build`].
pub struct ObjectSchema<T> {
    name: &'static str,
    fields: Vec<Box<dyn FieldCodec<T>>>,
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|field| (field.property(), field.wire_key()))
            .collect();
        f.debug_struct("ObjectSchema")
            .field("name", &self.name)
            .field("fields", &pairs)
            .finish()
    }
}

impl<T: Default + 'static> ObjectSchema<T> {
    /// Start an empty table for the record type called `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Declare one property ↔ wire key pairing.
    ///
    /// Declaring a property or wire key twice is a programming error and
    /// trips a debug assertion.
    #[must_use]
    pub fn field<F: 'static>(
        mut self,
        property: &'static str,
        wire_key: &'static str,
        schema: Schema<F>,
        get: fn(&T) -> &F,
        set: fn(&mut T, F),
    ) -> Self {
        debug_assert!(
            self.fields
                .iter()
                .all(|f| f.property() != property && f.wire_key() != wire_key),
            "duplicate field {property} / {wire_key} in object schema {}",
            self.name,
        );
        self.fields.push(Box::new(Field {
            property,
            wire_key,
            schema,
            get,
            set,
        }));
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field has been declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the table into a shareable schema.
    pub fn build(self) -> Schema<T> {
        Schema::from_codec(ObjectCodec {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Start an object schema for the record type called `name`.
pub fn object<T: Default + 'static>(name: &'static str) -> ObjectSchema<T> {
    ObjectSchema::new(name)
}

struct ObjectCodec<T> {
    name: &'static str,
    fields: Vec<Box<dyn FieldCodec<T>>>,
}

impl<T: Default> Codec<T> for ObjectCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<T, ValidationError> {
        let Some(Value::Object(members)) = input else {
            return Err(ValidationError::mismatch(self.describe(), input));
        };
        let mut record = T::default();
        for field in &self.fields {
            field.decode_into(members, &mut record)?;
        }
        Ok(record)
    }

    fn encode(&self, record: &T) -> Option<Value> {
        let mut members = Map::new();
        for field in &self.fields {
            field.encode_from(record, &mut members);
        }
        Some(Value::Object(members))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("object {}", self.name))
    }
}

/// Declare an object schema as a field table.
///
/// `object!(Record { property: "wire_key" => schema, ... })` expands to an
/// [`ObjectSchema`] with one [`field`](ObjectSchema::field) per row and
/// accessors generated from the property names.
#[macro_export]
macro_rules! object {
    ($record:ident { $($property:ident : $wire_key:literal => $schema:expr),* $(,)? }) => {
        $crate::ObjectSchema::<$record>::new(stringify!($record))
            $(
                .field(
                    stringify!($property),
                    $wire_key,
                    $schema,
                    |record| &record.$property,
                    |record, value| record.$property = value,
                )
            )*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{array, optional};
    use crate::error::{PathSegment, ValueKind};
    use crate::primitive::{integer, string};
    use serde_json::json;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Money {
        amount: Option<i64>,
        currency: Option<String>,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Refund {
        id: String,
        amount_money: Option<Money>,
        tags: Option<Vec<String>>,
    }

    fn money_schema() -> Schema<Money> {
        object!(Money {
            amount: "amount" => optional(integer()),
            currency: "currency" => optional(string()),
        })
    }

    fn refund_schema() -> Schema<Refund> {
        object!(Refund {
            id: "id" => string(),
            amount_money: "amount_money" => optional(money_schema()),
            tags: "tags" => optional(array(string())),
        })
    }

    #[test]
    fn decodes_declared_fields_by_wire_key() {
        let refund = refund_schema()
            .decode(&json!({
                "id": "r1",
                "amount_money": {"amount": 500, "currency": "USD"},
                "tags": ["a", "b"],
            }))
            .unwrap();
        assert_eq!(refund.id, "r1");
        assert_eq!(
            refund.amount_money,
            Some(Money {
                amount: Some(500),
                currency: Some("USD".into()),
            })
        );
        assert_eq!(refund.tags, Some(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn unknown_wire_keys_are_ignored() {
        let money = money_schema()
            .decode(&json!({"amount": 1, "surprise": {"deep": [1, 2]}}))
            .unwrap();
        assert_eq!(money.amount, Some(1));
        assert_eq!(money.currency, None);
    }

    #[test]
    fn absent_optionals_never_fail() {
        let money = money_schema().decode(&json!({})).unwrap();
        assert_eq!(money, Money::default());
    }

    #[test]
    fn missing_required_field_names_the_wire_key() {
        let err = refund_schema().decode(&json!({"tags": []})).unwrap_err();
        assert_eq!(err.path().segments(), &[PathSegment::Key("id".into())]);
        assert_eq!(err.actual(), ValueKind::Missing);
    }

    #[test]
    fn nested_failure_carries_full_path() {
        let err = refund_schema()
            .decode(&json!({"id": "r1", "amount_money": {"amount": "12"}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "amount_money.amount: expected integer, found string");
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = money_schema().decode(&json!([1])).unwrap_err();
        assert_eq!(err.expected(), "object Money");
        assert_eq!(err.actual(), ValueKind::Array);
    }

    #[test]
    fn encode_omits_unset_fields() {
        let refund = Refund {
            id: "r2".into(),
            amount_money: Some(Money {
                amount: Some(7),
                currency: None,
            }),
            tags: None,
        };
        assert_eq!(
            refund_schema().encode(&refund),
            json!({"id": "r2", "amount_money": {"amount": 7}})
        );
    }

    #[test]
    fn builder_without_macro() {
        let schema = object::<Money>("Money")
            .field("amount", "amount_cents", optional(integer()), |m| &m.amount, |m, v| m.amount = v)
            .build();
        let money = schema.decode(&json!({"amount_cents": 99, "amount": 1})).unwrap();
        assert_eq!(money.amount, Some(99));
        assert_eq!(schema.encode(&money), json!({"amount_cents": 99}));
    }

    #[test]
    fn builder_debug_lists_pairings() {
        let builder = object::<Money>("Money")
            .field("currency", "currency_code", optional(string()), |m| &m.currency, |m, v| m.currency = v);
        assert_eq!(builder.len(), 1);
        let debug = format!("{builder:?}");
        assert!(debug.contains("currency_code"));
    }

    #[test]
    #[should_panic(expected = "duplicate field")]
    #[cfg(debug_assertions)]
    fn duplicate_wire_key_is_rejected() {
        let _ = object::<Money>("Money")
            .field("amount", "amount", optional(integer()), |m| &m.amount, |m, v| m.amount = v)
            .field("currency", "amount", optional(string()), |m| &m.currency, |m, v| m.currency = v);
    }
}
