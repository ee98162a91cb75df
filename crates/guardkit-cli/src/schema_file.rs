//! # Schema Files
//!
//! A schema file declares a record shape by naming a library guard for each
//! property. Loading one and calling [`SchemaFile::build_guard`] produces the
//! same guard a hand-written `ValidatorBuilder` chain would.
//!
//! ## Format
//!
//! ```yaml
//! name: User
//! root: object            # optional whole-object guard
//! suppress_missing: true  # or a list of keys
//! properties:
//!   id: number
//!   username: string
//!   email: { type: string, nullable: true }
//!   tags: { type: array-of, items: string }
//!   status: { type: member-of, values: { Active: active, Disabled: disabled } }
//!   legacy: ignore
//! ```
//!
//! Property order in the file is registration order.
//!
//! ## Kinds
//!
//! `string`, `number`, `boolean`, `object`, `date`, `date-string`, `array`,
//! `array-of` (needs `items`), `member-of` and `key-of` (need `values`), and
//! `ignore`/`any` (accounted for, unconstrained). Documents loaded from JSON
//! or YAML never contain date values, so `date` only matches through
//! `nullable`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use guardkit_builder::ValidatorBuilder;
use guardkit_core::{Guard, Value};
use guardkit_predicates::{
    array, array_of, boolean, date, date_string, key_of, member_of, number, object, string,
    EnumDescriptor,
};

use crate::document::{self, Format};

/// Error while loading a schema file or resolving its guards.
#[derive(Error, Debug)]
pub enum SchemaFileError {
    /// The file could not be read.
    #[error("cannot read schema file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON/YAML or does not match the format.
    #[error("invalid schema file '{path}': {reason}")]
    Parse { path: String, reason: String },

    /// A property names a kind the library does not provide.
    #[error("property '{property}': unknown kind '{kind}'")]
    UnknownKind { property: String, kind: String },

    /// `array-of` without `items`.
    #[error("property '{property}': kind 'array-of' requires 'items'")]
    MissingItems { property: String },

    /// `member-of`/`key-of` without `values`.
    #[error("property '{property}': kind '{kind}' requires 'values'")]
    MissingValues { property: String, kind: String },
}

/// How one property (or the root) is validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    /// Bare kind name, e.g. `string`.
    Kind(String),
    /// Kind with options.
    Detailed(DetailedSpec),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedSpec {
    #[serde(rename = "type")]
    pub kind: String,
    /// Accept `null` (and absent markers) in addition to the kind.
    #[serde(default)]
    pub nullable: bool,
    /// Element spec for `array-of`.
    #[serde(default)]
    pub items: Option<Box<PropertySpec>>,
    /// Declared `key → value` pairs for `member-of`/`key-of`.
    #[serde(default)]
    pub values: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Which missing-validator diagnostics to silence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SuppressSpec {
    /// `true` silences everything; `false` nothing.
    All(bool),
    /// These keys only. An empty list silences everything.
    Keys(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchemaFile {
    name: String,
    #[serde(default)]
    root: Option<PropertySpec>,
    #[serde(default)]
    suppress_missing: Option<SuppressSpec>,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

/// A parsed schema file.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    pub name: String,
    pub root: Option<PropertySpec>,
    pub suppress_missing: Option<SuppressSpec>,
    /// Properties in file order.
    pub properties: Vec<(String, PropertySpec)>,
}

/// A resolved property spec.
enum Rule {
    Ignore,
    Check(Guard),
}

impl SchemaFile {
    /// Load and parse the schema file at `path`, choosing JSON or YAML by
    /// extension.
    pub fn load(path: &Path) -> Result<Self, SchemaFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, Format::from_path(path), &path.display().to_string())
    }

    /// Parse schema file `content`. `origin` names the source in errors.
    pub fn parse(content: &str, format: Format, origin: &str) -> Result<Self, SchemaFileError> {
        let parse_error = |reason: String| SchemaFileError::Parse {
            path: origin.to_string(),
            reason,
        };

        let json = document::parse_str(content, format).map_err(parse_error)?;
        let raw: RawSchemaFile =
            serde_json::from_value(json).map_err(|e| parse_error(e.to_string()))?;

        let properties = raw
            .properties
            .into_iter()
            .map(|(key, spec)| {
                serde_json::from_value::<PropertySpec>(spec)
                    .map(|spec| (key.clone(), spec))
                    .map_err(|e| parse_error(format!("property '{key}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: raw.name,
            root: raw.root,
            suppress_missing: raw.suppress_missing,
            properties,
        })
    }

    /// Build the record guard this file describes.
    ///
    /// # Errors
    ///
    /// Returns an error if any property names an unknown kind or lacks a
    /// required option.
    pub fn build_guard(&self) -> Result<Guard, SchemaFileError> {
        let mut builder = ValidatorBuilder::start(&self.name);

        if let Some(root) = &self.root {
            builder = match resolve("root", root)? {
                Rule::Ignore => builder.validate_root(Guard::always()),
                Rule::Check(guard) => builder.validate_root(guard),
            };
        }

        for (key, spec) in &self.properties {
            builder = match resolve(key, spec)? {
                Rule::Ignore => builder.ignore_property(key),
                Rule::Check(guard) => builder.validate_property(key, guard),
            };
        }

        builder = match &self.suppress_missing {
            Some(SuppressSpec::All(true)) => builder.suppress_all_missing_validator_warnings(),
            Some(SuppressSpec::Keys(keys)) => {
                builder.suppress_missing_validator_warnings(keys.iter().cloned())
            }
            Some(SuppressSpec::All(false)) | None => builder,
        };

        Ok(builder.build())
    }

    /// Human-readable summary: root, properties with their guard labels,
    /// and suppression settings.
    pub fn describe(&self) -> Result<String, SchemaFileError> {
        let mut out = format!("schema: {}\n", self.name);

        if let Some(root) = &self.root {
            out.push_str(&format!("root: {}\n", rule_label(&resolve("root", root)?)));
        }

        out.push_str("properties:\n");
        for (key, spec) in &self.properties {
            out.push_str(&format!("  {key}: {}\n", rule_label(&resolve(key, spec)?)));
        }

        let suppression = match &self.suppress_missing {
            Some(SuppressSpec::All(true)) => "all".to_string(),
            Some(SuppressSpec::Keys(keys)) if keys.is_empty() => "all".to_string(),
            Some(SuppressSpec::Keys(keys)) => keys.join(", "),
            Some(SuppressSpec::All(false)) | None => "none".to_string(),
        };
        out.push_str(&format!("suppressed missing-validator warnings: {suppression}\n"));
        Ok(out)
    }
}

fn rule_label(rule: &Rule) -> &str {
    match rule {
        Rule::Ignore => "ignored",
        Rule::Check(guard) => guard.label(),
    }
}

fn resolve(property: &str, spec: &PropertySpec) -> Result<Rule, SchemaFileError> {
    let (kind, nullable, items, values) = match spec {
        PropertySpec::Kind(kind) => (kind.as_str(), false, None, None),
        PropertySpec::Detailed(d) => (
            d.kind.as_str(),
            d.nullable,
            d.items.as_deref(),
            d.values.as_ref(),
        ),
    };

    let guard = match kind {
        "ignore" | "any" => return Ok(Rule::Ignore),
        "string" => string(),
        "number" => number(),
        "boolean" => boolean(),
        "object" => object(),
        "date" => date(),
        "date-string" => date_string(),
        "array" => array(),
        "array-of" => {
            let items = items.ok_or_else(|| SchemaFileError::MissingItems {
                property: property.to_string(),
            })?;
            match resolve(&format!("{property}[]"), items)? {
                Rule::Ignore => array(),
                Rule::Check(element) => array_of(element),
            }
        }
        "member-of" | "key-of" => {
            let values = values.ok_or_else(|| SchemaFileError::MissingValues {
                property: property.to_string(),
                kind: kind.to_string(),
            })?;
            let descriptor = EnumDescriptor::new(
                values
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.clone()))),
            );
            if kind == "member-of" {
                member_of(&descriptor)
            } else {
                key_of(&descriptor)
            }
        }
        other => {
            return Err(SchemaFileError::UnknownKind {
                property: property.to_string(),
                kind: other.to_string(),
            })
        }
    };

    Ok(Rule::Check(if nullable { guard.nullable([]) } else { guard }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USER_YAML: &str = r#"
name: User
properties:
  id: number
  username: string
  email: { type: string, nullable: true }
  tags: { type: array-of, items: string }
  status: { type: member-of, values: { Active: active, Disabled: disabled } }
  legacy: ignore
"#;

    fn user() -> SchemaFile {
        SchemaFile::parse(USER_YAML, Format::Yaml, "user.yaml").unwrap()
    }

    #[test]
    fn test_parse_keeps_property_order() {
        let binding = user();
        let keys: Vec<&str> = binding.properties.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "username", "email", "tags", "status", "legacy"]);
    }

    #[test]
    fn test_built_guard_classifies_documents() {
        let guard = user().build_guard().unwrap();
        let good = Value::from(json!({
            "id": 1,
            "username": "ana",
            "email": null,
            "tags": ["x"],
            "status": "active",
            "legacy": {"anything": true}
        }));
        assert!(guard.check(&good));

        let bad_status = Value::from(json!({"id": 1, "status": "Active"}));
        assert!(!guard.check(&bad_status));
    }

    #[test]
    fn test_key_of_uses_declared_names() {
        let schema = SchemaFile::parse(
            r#"{"name": "T", "properties": {"c": {"type": "key-of", "values": {"Red": "red"}}}}"#,
            Format::Json,
            "t.json",
        )
        .unwrap();
        let guard = schema.build_guard().unwrap();
        assert!(guard.check(&Value::from(json!({"c": "Red"}))));
        assert!(!guard.check(&Value::from(json!({"c": "red"}))));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let schema =
            SchemaFile::parse("name: T\nproperties:\n  a: uuid\n", Format::Yaml, "t").unwrap();
        let err = schema.build_guard().unwrap_err();
        assert!(matches!(err, SchemaFileError::UnknownKind { ref kind, .. } if kind == "uuid"));
    }

    #[test]
    fn test_array_of_without_items_is_an_error() {
        let schema =
            SchemaFile::parse("name: T\nproperties:\n  a: array-of\n", Format::Yaml, "t").unwrap();
        assert!(matches!(
            schema.build_guard().unwrap_err(),
            SchemaFileError::MissingItems { .. }
        ));
    }

    #[test]
    fn test_member_of_without_values_is_an_error() {
        let schema = SchemaFile::parse(
            "name: T\nproperties:\n  a: { type: member-of }\n",
            Format::Yaml,
            "t",
        )
        .unwrap();
        assert!(matches!(
            schema.build_guard().unwrap_err(),
            SchemaFileError::MissingValues { .. }
        ));
    }

    #[test]
    fn test_unknown_top_level_field_is_a_parse_error() {
        let err = SchemaFile::parse("name: T\nfields: {}\n", Format::Yaml, "t.yaml").unwrap_err();
        assert!(matches!(err, SchemaFileError::Parse { .. }));
        assert!(err.to_string().contains("t.yaml"));
    }

    #[test]
    fn test_root_any_allows_empty_documents() {
        let schema =
            SchemaFile::parse("name: T\nroot: any\nproperties:\n  a: string\n", Format::Yaml, "t")
                .unwrap();
        let guard = schema.build_guard().unwrap();
        assert!(guard.check(&Value::from(json!({}))));
    }

    #[test]
    fn test_describe_lists_labels_and_suppression() {
        let schema = SchemaFile::parse(
            "name: T\nroot: object\nsuppress_missing: [x, y]\nproperties:\n\
             \x20 a: { type: array-of, items: number, nullable: true }\n  b: ignore\n",
            Format::Yaml,
            "t",
        )
        .unwrap();
        let text = schema.describe().unwrap();
        assert!(text.contains("schema: T"));
        assert!(text.contains("root: object"));
        assert!(text.contains("  a: number[] | nullish"));
        assert!(text.contains("  b: ignored"));
        assert!(text.contains("suppressed missing-validator warnings: x, y"));
    }

    #[test]
    fn test_describe_renders_full_summary() {
        let schema = SchemaFile::parse(
            "name: User\nproperties:\n  id: number\n  tags: { type: array-of, items: string }\n",
            Format::Yaml,
            "user.yaml",
        )
        .unwrap();
        assert_eq!(
            schema.describe().unwrap(),
            "schema: User\n\
             properties:\n\
             \x20 id: number\n\
             \x20 tags: string[]\n\
             suppressed missing-validator warnings: none\n"
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SchemaFile::load(Path::new("/nonexistent/schema.yaml")).unwrap_err();
        assert!(matches!(err, SchemaFileError::Io { .. }));
    }
}
