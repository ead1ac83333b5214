//! # connect-schema: Bidirectional Wire Schemas
//!
//! A small combinator library that every Connect model is built from. Each
//! constructor returns a [`Schema<T>`]: a shared, immutable value that
//! decodes untyped wire JSON into `T` (validating as it goes) and encodes
//! `T` back into wire JSON.
//!
//! ## Constructors
//!
//! - Primitives: [`string`], [`number`], [`integer`], [`boolean`], [`unknown`].
//! - Wrappers: [`optional`], [`array`], [`dict`], [`boxed`].
//! - Records: [`object`] builder and the [`object!`] field-table macro, which
//!   pair each property with an explicit snake_case wire key.
//! - Cycles: [`lazy`], a memoizing indirection for mutually referencing
//!   record schemas.
//!
//! ## Error Contract
//!
//! Decoding fails with a [`ValidationError`] naming the path to the
//! offending value (`refunds[2].amount_money.amount`), the expected shape and
//! the JSON kind actually found. A failure anywhere fails the whole decode;
//! no partial records are returned.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Schemas are pure: no I/O, no global state apart from the one-time
//!   `lazy` resolution cache.

pub mod compose;
pub mod error;
pub mod lazy;
pub mod object;
pub mod primitive;
pub mod schema;
pub mod wire;

pub use compose::{array, boxed, dict, optional};
pub use error::{DecodeError, FieldPath, PathSegment, ValidationError, ValueKind};
pub use lazy::lazy;
pub use object::{object, ObjectSchema};
pub use primitive::{boolean, integer, number, string, unknown};
pub use schema::{Codec, Model, Schema};
pub use wire::Wire;
