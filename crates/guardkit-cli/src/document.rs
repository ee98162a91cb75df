//! Document loading.
//!
//! The format is chosen by file extension: `.yaml`/`.yml` are read as YAML,
//! everything else as JSON. Either way the result is a `serde_json::Value`
//! with mapping order preserved, converted into a guard [`Value`].

use std::path::Path;

use anyhow::{Context, Result};

use guardkit_core::Value;

/// On-disk encoding of a schema file or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Parse `content` as `format` into a JSON value.
pub fn parse_str(content: &str, format: Format) -> Result<serde_json::Value, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}")),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}")),
    }
}

/// Load the document at `path` as a guard value.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read document {}", path.display()))?;
    let json = parse_str(&content, Format::from_path(path))
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("cannot parse document {}", path.display()))?;
    Ok(Value::from(json))
}
