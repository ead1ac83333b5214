//! # Deferred Schemas
//!
//! Record types that reference each other cannot build their schemas
//! eagerly: building `A` would need `B` which needs `A`. [`lazy`] stores a
//! plain `fn() -> Schema<T>` and calls it on the first decode or encode,
//! caching the result for every later call.
//!
//! The cache is a set-if-empty [`OnceLock`] fill, not a lock held around
//! the thunk. Concurrent first callers may each run the thunk; exactly one
//! result is stored and every caller then reads that one. Thunks must be
//! pure, so a discarded duplicate is indistinguishable from the kept one.

use std::borrow::Cow;
use std::sync::OnceLock;

use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::{Codec, Schema};

struct LazyCodec<T> {
    thunk: fn() -> Schema<T>,
    resolved: OnceLock<Schema<T>>,
}

impl<T> LazyCodec<T> {
    fn resolve(&self) -> &Schema<T> {
        if let Some(schema) = self.resolved.get() {
            return schema;
        }
        let schema = (self.thunk)();
        tracing::trace!(schema = %schema.describe(), "resolved lazy schema");
        // Losing the race drops our copy; the stored one wins.
        let _ = self.resolved.set(schema);
        self.resolved.get_or_init(self.thunk)
    }
}

impl<T> Codec<T> for LazyCodec<T> {
    fn decode(&self, input: Option<&Value>) -> Result<T, ValidationError> {
        self.resolve().decode_field(input)
    }

    fn encode(&self, value: &T) -> Option<Value> {
        self.resolve().encode_field(value)
    }

    // Object descriptions never recurse into their fields, so resolving
    // here cannot loop through a cycle.
    fn describe(&self) -> Cow<'static, str> {
        self.resolve().describe()
    }
}

/// Defer building a schema until it is first used.
pub fn lazy<T: 'static>(thunk: fn() -> Schema<T>) -> Schema<T> {
    Schema::from_codec(LazyCodec {
        thunk,
        resolved: OnceLock::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::string;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counted_string() -> Schema<String> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        string()
    }

    #[test]
    fn thunk_runs_on_first_use_only() {
        let schema = lazy(counted_string);
        let before = CALLS.load(Ordering::SeqCst);

        assert_eq!(schema.decode(&json!("a")).unwrap(), "a");
        assert_eq!(schema.decode(&json!("b")).unwrap(), "b");
        assert_eq!(schema.encode(&"c".to_string()), json!("c"));
        assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
        assert_eq!(schema.describe(), "string");
    }

    #[test]
    fn description_is_stable_across_first_use() {
        let schema = crate::compose::array(lazy(string));
        let before = schema.decode(&json!(5)).unwrap_err().to_string();
        assert_eq!(before, "(root): expected array<string>, found number");
        schema.decode(&json!(["a"])).unwrap();
        assert_eq!(schema.decode(&json!(5)).unwrap_err().to_string(), before);
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let err = lazy(string).decode(&json!(1)).unwrap_err();
        assert_eq!(err.expected(), "string");
        assert!(err.path().is_root());
    }
}
