//! Loading JSON and YAML documents into `serde_json::Value`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a document from `path`, or from stdin when `path` is `-`.
///
/// `.yaml`/`.yml` files are parsed as YAML and `.json` files as JSON.
/// Anything else, including stdin, is tried as JSON first and then as YAML.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("malformed JSON in {}", path.display())),
        Some("yaml" | "yml") => parse_yaml(&text)
            .with_context(|| format!("malformed YAML in {}", path.display())),
        _ => match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(json_err) => {
                tracing::debug!(error = %json_err, "not JSON, trying YAML");
                parse_yaml(&text)
                    .with_context(|| format!("{} is neither JSON nor YAML", path.display()))
            }
        },
    }
}

/// YAML documents deserialize straight into a JSON value tree. Map keys must
/// be strings, as they are in every wire document.
fn parse_yaml(text: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(text)?)
}
