//! # Serde Bridge
//!
//! [`Wire<T>`] lets a [`Model`] travel through ordinary serde code. It
//! serializes through `T::schema()` encode and deserializes by buffering a
//! `serde_json::Value` and running `T::schema()` decode, so wire keys,
//! omission of unset fields and path-carrying validation all behave exactly
//! as they do through the schema directly.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::schema::Model;

/// A model in wire representation for serde.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Wire<T>(pub T);

impl<T> Wire<T> {
    /// Unwrap the model.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Model> Serialize for Wire<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        T::schema().encode(&self.0).serialize(serializer)
    }
}

impl<'de, T: Model> Deserialize<'de> for Wire<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        T::schema()
            .decode(&value)
            .map(Wire)
            .map_err(D::Error::custom)
    }
}
