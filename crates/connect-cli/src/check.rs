//! # Check CLI: validate a document against a named model.
//!
//! Decodes the document with the model's schema and, on success, prints the
//! canonical wire form (unknown keys and explicit nulls removed).
//!
//! ```bash
//! connect check --model list-payment-refunds-response refunds.json
//! connect check --model Payment payment.yaml --compact --report-unknown
//! ```
//!
//! Exit code 0 when the document is valid, 1 when it fails validation.
//! Unknown model names and unreadable documents are operational errors.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use serde_json::Value;

use connect_models::{find, ModelEntry};
use connect_schema::ValidationError;

use crate::config::CliConfig;
use crate::document::load_document;

/// Arguments for `connect check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Model to check against: kebab-case name (`payment`) or type name
    /// (`Payment`). See `connect models`.
    #[arg(long, short)]
    pub model: String,

    /// Path to a JSON or YAML document, or `-` for stdin.
    pub path: PathBuf,

    /// Print the normalized document on one line.
    #[arg(long)]
    pub compact: bool,

    /// List input keys the model does not recognize.
    #[arg(long)]
    pub report_unknown: bool,
}

/// Result of checking one document.
#[derive(Debug)]
pub enum CheckOutcome {
    Valid {
        normalized: Value,
        /// Paths of non-null input keys that were dropped by normalization.
        unknown: Vec<String>,
    },
    Invalid(ValidationError),
}

/// Execute `connect check`.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let entry = find(&args.model).ok_or_else(|| {
        anyhow!(
            "unknown model '{}'; run `connect models` to list models",
            args.model
        )
    })?;
    let document = load_document(&args.path)?;
    tracing::info!(model = entry.name, path = %args.path.display(), "checking document");

    match check_document(entry, &document) {
        CheckOutcome::Valid {
            normalized,
            unknown,
        } => {
            let rendered = if args.compact || config.compact {
                serde_json::to_string(&normalized)?
            } else {
                serde_json::to_string_pretty(&normalized)?
            };
            println!("{rendered}");
            if args.report_unknown {
                for path in &unknown {
                    eprintln!("unknown: {path}");
                }
            }
            eprintln!("OK: {} is a valid {}", args.path.display(), entry.type_name);
            Ok(0)
        }
        CheckOutcome::Invalid(err) => {
            println!("FAIL: {err}");
            Ok(1)
        }
    }
}

/// Decode `document` as `entry`'s model and compare against the input.
pub fn check_document(entry: &ModelEntry, document: &Value) -> CheckOutcome {
    match entry.normalize(document) {
        Ok(normalized) => {
            let mut unknown = Vec::new();
            collect_unknown(document, &normalized, String::new(), &mut unknown);
            CheckOutcome::Valid {
                normalized,
                unknown,
            }
        }
        Err(err) => {
            tracing::debug!(path = %err.path(), "validation failed");
            CheckOutcome::Invalid(err)
        }
    }
}

/// Walk `input` alongside `normalized`, recording non-null input keys that
/// have no counterpart in the normalized form.
fn collect_unknown(input: &Value, normalized: &Value, path: String, out: &mut Vec<String>) {
    match (input, normalized) {
        (Value::Object(input), Value::Object(normalized)) => {
            for (key, value) in input {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match normalized.get(key) {
                    Some(kept) => collect_unknown(value, kept, child, out),
                    None if value.is_null() => {}
                    None => out.push(child),
                }
            }
        }
        (Value::Array(input), Value::Array(normalized)) => {
            for (index, (value, kept)) in input.iter().zip(normalized).enumerate() {
                collect_unknown(value, kept, format!("{path}[{index}]"), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn entry(name: &str) -> &'static ModelEntry {
        find(name).unwrap()
    }

    #[test]
    fn valid_document_is_normalized() {
        let outcome = check_document(
            entry("catalog-id-mapping"),
            &json!({"object_id": "abc123", "client_object_id": null}),
        );
        match outcome {
            CheckOutcome::Valid {
                normalized,
                unknown,
            } => {
                assert_eq!(normalized, json!({"object_id": "abc123"}));
                assert!(unknown.is_empty());
            }
            CheckOutcome::Invalid(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[test]
    fn unknown_keys_are_reported_with_paths() {
        let outcome = check_document(
            entry("list-payment-refunds-response"),
            &json!({
                "refunds": [
                    {"id": "r0", "amount_money": {"amount": 1}},
                    {"id": "r1", "amount_money": {"amount": 2, "precision": 2}, "team_member_id": "T"}
                ],
                "next": null,
                "extra": true
            }),
        );
        let CheckOutcome::Valid { unknown, .. } = outcome else {
            panic!("expected a valid document");
        };
        assert_eq!(
            unknown,
            vec![
                "extra".to_string(),
                "refunds[1].amount_money.precision".to_string(),
                "refunds[1].team_member_id".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_document_keeps_the_error() {
        let outcome = check_document(
            entry("search-catalog-objects-request"),
            &json!({"object_types": ["ITEM", 3]}),
        );
        let CheckOutcome::Invalid(err) = outcome else {
            panic!("expected a validation failure");
        };
        assert_eq!(err.path().to_string(), "object_types[1]");
    }

    #[test]
    fn run_check_exit_codes() {
        let mut valid = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        valid.write_all(br#"{"limit": -5}"#).unwrap();
        let mut invalid = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        invalid.write_all(br#"{"limit": "five"}"#).unwrap();

        let args = |path: &std::path::Path| CheckArgs {
            model: "SearchCatalogObjectsRequest".into(),
            path: path.to_path_buf(),
            compact: true,
            report_unknown: false,
        };
        let config = CliConfig::default();
        assert_eq!(run_check(&args(valid.path()), &config).unwrap(), 0);
        assert_eq!(run_check(&args(invalid.path()), &config).unwrap(), 1);
    }

    #[test]
    fn unknown_model_is_an_operational_error() {
        let args = CheckArgs {
            model: "no-such-model".into(),
            path: PathBuf::from("-"),
            compact: false,
            report_unknown: false,
        };
        let err = run_check(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown model 'no-such-model'"));
    }
}
