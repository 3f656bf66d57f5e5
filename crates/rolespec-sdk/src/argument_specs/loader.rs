//! Load a role's `meta/argument_specs.yml` with structured error reporting.

use std::path::{Path, PathBuf};

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use super::{
    yaml11_bool, ParameterSchema, ParameterSpec, ParameterType, RoleArgumentSpecs,
    RoleIdentity, UnknownTypeName,
};

/// Location of the schema document relative to the role directory.
pub const ARGUMENT_SPECS_FILE: &str = "meta/argument_specs.yml";

/// Entry point read when none is configured.
pub const DEFAULT_ENTRY_POINT: &str = "main";

const INLINE_SOURCE: &str = "<inline>";

/// Error while loading a role's argument specs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read argument specs '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse argument specs YAML '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("'{}' has no mapping at '{section}'", path.display())]
    MissingSection { path: PathBuf, section: String },
    #[error("invalid parameter '{name}': {source}")]
    InvalidParameter {
        name: String,
        source: serde_yaml::Error,
    },
    #[error("parameter '{name}': {source}")]
    UnknownType {
        name: String,
        source: UnknownTypeName,
    },
}

/// Parameter entry as written in the document, before type resolution.
#[derive(Debug, Deserialize)]
struct RawParameter {
    #[serde(rename = "type")]
    declared_type: String,
    description: RawDescription,
    #[serde(default, deserialize_with = "present")]
    default: Option<Value>,
    #[serde(default)]
    choices: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "flag")]
    required: Option<bool>,
    #[serde(default)]
    example: Option<Value>,
    #[serde(default)]
    elements: Option<String>,
    #[serde(default)]
    options: Option<Mapping>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDescription {
    Lines(Vec<String>),
    Line(String),
}

impl From<RawDescription> for Vec<String> {
    fn from(raw: RawDescription) -> Self {
        match raw {
            RawDescription::Lines(lines) => lines,
            RawDescription::Line(line) => vec![line],
        }
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accepts `yes`/`no`/`on`/`off` alongside real booleans; `null` is absent.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    yaml11_bool(&value).map(Some).ok_or_else(|| {
        let unexpected = match &value {
            Value::String(s) => Unexpected::Str(s),
            _ => Unexpected::Other("non-boolean value"),
        };
        <D::Error as de::Error>::invalid_value(unexpected, &"a boolean")
    })
}

/// Load `argument_specs.<entry_point>.options` from the role in `role_dir`.
pub fn load_role(role_dir: &Path, entry_point: &str) -> Result<RoleArgumentSpecs, LoadError> {
    let path = role_dir.join(ARGUMENT_SPECS_FILE);
    let yaml = std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
        path: path.clone(),
        source: e,
    })?;

    let options = parse_options(&yaml, entry_point, &path)?;
    let role = RoleIdentity::from_role_dir(role_dir);
    tracing::debug!(
        path = %path.display(),
        role = %role,
        entry_point,
        parameters = options.len(),
        "Loaded argument specs"
    );

    Ok(RoleArgumentSpecs {
        role,
        role_dir: role_dir.to_path_buf(),
        entry_point: entry_point.to_string(),
        options,
    })
}

/// Parse the options of `entry_point` from an argument specs YAML string.
pub fn parse_options_str(yaml: &str, entry_point: &str) -> Result<ParameterSchema, LoadError> {
    parse_options(yaml, entry_point, Path::new(INLINE_SOURCE))
}

fn parse_options(yaml: &str, entry_point: &str, path: &Path) -> Result<ParameterSchema, LoadError> {
    let document: Value = serde_yaml::from_str(yaml).map_err(|e| LoadError::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;

    let options = document
        .get("argument_specs")
        .and_then(|specs| specs.get(entry_point))
        .and_then(|entry| entry.get("options"))
        .and_then(Value::as_mapping)
        .ok_or_else(|| LoadError::MissingSection {
            path: path.to_path_buf(),
            section: format!("argument_specs.{entry_point}.options"),
        })?;

    convert_schema(options, None)
}

/// Convert an options mapping, keeping its order. `scope` prefixes nested
/// parameter names in errors.
fn convert_schema(options: &Mapping, scope: Option<&str>) -> Result<ParameterSchema, LoadError> {
    let mut params = Vec::with_capacity(options.len());

    for (key, value) in options {
        let name: String =
            serde_yaml::from_value(key.clone()).map_err(|e| LoadError::InvalidParameter {
                name: format!("{key:?}"),
                source: e,
            })?;
        let qualified = match scope {
            Some(parent) => format!("{parent}.{name}"),
            None => name.clone(),
        };

        let raw: RawParameter =
            serde_yaml::from_value(value.clone()).map_err(|e| LoadError::InvalidParameter {
                name: qualified.clone(),
                source: e,
            })?;

        params.push(convert_parameter(name, &qualified, raw)?);
    }

    Ok(ParameterSchema::new(params))
}

fn convert_parameter(
    name: String,
    qualified: &str,
    raw: RawParameter,
) -> Result<ParameterSpec, LoadError> {
    let unknown_type = |source| LoadError::UnknownType {
        name: qualified.to_string(),
        source,
    };

    let declared_type: ParameterType = raw.declared_type.parse().map_err(unknown_type)?;
    let elements = raw
        .elements
        .as_deref()
        .map(str::parse::<ParameterType>)
        .transpose()
        .map_err(unknown_type)?;

    let example = raw
        .example
        .map(|value| example_text(value, qualified))
        .transpose()?;

    let options = raw
        .options
        .as_ref()
        .map(|nested| convert_schema(nested, Some(qualified)))
        .transpose()?;

    let spec = ParameterSpec {
        name,
        declared_type,
        default: raw.default,
        description: raw.description.into(),
        choices: raw.choices,
        required: raw.required,
        example,
        elements,
        options,
    };

    if spec.is_list_of_dicts() && spec.options.is_none() {
        tracing::warn!(
            parameter = qualified,
            "list of dicts declares no options; no element fields will be rendered"
        );
    }

    Ok(spec)
}

fn example_text(value: Value, qualified: &str) -> Result<String, LoadError> {
    match value {
        Value::String(text) => Ok(text),
        structured => serde_yaml::to_string(&structured).map_err(|e| LoadError::InvalidParameter {
            name: qualified.to_string(),
            source: e,
        }),
    }
}
