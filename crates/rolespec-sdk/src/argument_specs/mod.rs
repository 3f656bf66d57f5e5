//! Role argument specification model.
//!
//! A role declares its input parameters in `meta/argument_specs.yml` under
//! `argument_specs.<entry_point>.options`. [`loader`] turns that mapping into a
//! [`ParameterSchema`]: an ordered list of [`ParameterSpec`] values that keeps
//! the document order, since every renderer emits parameters in that order.

pub mod loader;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_yaml::Value;

pub use loader::{load_role, parse_options_str, LoadError, ARGUMENT_SPECS_FILE, DEFAULT_ENTRY_POINT};

/// Closed set of parameter types understood by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    Str,
    Int,
    Float,
    List,
    Dict,
    Path,
    Raw,
    Json,
    JsonArg,
    Bytes,
    Bits,
}

impl FromStr for TypeKind {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" | "boolean" => Ok(TypeKind::Bool),
            "str" | "string" => Ok(TypeKind::Str),
            "int" | "integer" => Ok(TypeKind::Int),
            "float" | "number" => Ok(TypeKind::Float),
            "list" => Ok(TypeKind::List),
            "dict" | "object" => Ok(TypeKind::Dict),
            "path" => Ok(TypeKind::Path),
            "raw" => Ok(TypeKind::Raw),
            "json" => Ok(TypeKind::Json),
            "jsonarg" => Ok(TypeKind::JsonArg),
            "bytes" => Ok(TypeKind::Bytes),
            "bits" => Ok(TypeKind::Bits),
            other => Err(UnknownTypeName(other.to_string())),
        }
    }
}

/// A type name outside [`TypeKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter type '{0}'")]
pub struct UnknownTypeName(pub String);

/// A declared parameter type: the recognized kind plus the spelling used in
/// the document, which is what gets displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterType {
    kind: TypeKind,
    declared: String,
}

impl ParameterType {
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.declared
    }
}

impl FromStr for ParameterType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            kind: s.parse()?,
            declared: s.to_string(),
        })
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declared)
    }
}

/// Read a YAML 1.1 boolean: a real bool, or one of the `y`/`yes`/`on`/`true`
/// and `n`/`no`/`off`/`false` spellings in any case.
///
/// `serde_yaml` follows YAML 1.2 and keeps `yes` or `off` as strings, while
/// role documents are routinely written with them.
pub fn yaml11_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "y" | "yes" | "on" | "true" => Some(true),
            "n" | "no" | "off" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Metadata for one named parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name, unique within its schema.
    pub name: String,

    pub declared_type: ParameterType,

    /// Default value. `Some(Value::Null)` means the document wrote
    /// `default: null`; `None` means there is no default at all.
    pub default: Option<Value>,

    /// Description, one entry per output line. May be empty.
    pub description: Vec<String>,

    /// Allowed values, in document order.
    pub choices: Option<Vec<Value>>,

    pub required: Option<bool>,

    /// Example text. Structured examples are stored as block YAML.
    pub example: Option<String>,

    /// Element type of a `list` parameter.
    pub elements: Option<ParameterType>,

    /// Fields of each element when the parameter is a list of dicts.
    pub options: Option<ParameterSchema>,
}

impl ParameterSpec {
    /// Whether the parameter is a list whose elements are structured records.
    pub fn is_list_of_dicts(&self) -> bool {
        self.declared_type.kind() == TypeKind::List
            && self
                .elements
                .as_ref()
                .is_some_and(|e| e.kind() == TypeKind::Dict)
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Nested fields, empty when the parameter has no `options`.
    pub fn nested(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.options.iter().flat_map(|schema| schema.iter())
    }
}

/// Parameters in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSchema {
    params: Vec<ParameterSpec>,
}

impl ParameterSchema {
    pub fn new(params: Vec<ParameterSpec>) -> Self {
        Self { params }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterSpec> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

impl<'a> IntoIterator for &'a ParameterSchema {
    type Item = &'a ParameterSpec;
    type IntoIter = std::slice::Iter<'a, ParameterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Role name used to label rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleIdentity(String);

impl RoleIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the role name from the last segment of the role directory.
    ///
    /// Trailing separators are ignored. Paths ending in `.` or `..` are
    /// resolved through the filesystem; if that fails the path is used as given.
    pub fn from_role_dir(role_dir: &Path) -> Self {
        if let Some(name) = role_dir.file_name() {
            return Self(name.to_string_lossy().into_owned());
        }
        role_dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .map(Self)
            .unwrap_or_else(|| Self(role_dir.display().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded role: its identity plus the options of one entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleArgumentSpecs {
    pub role: RoleIdentity,
    pub role_dir: PathBuf,
    pub entry_point: String,
    pub options: ParameterSchema,
}

impl RoleArgumentSpecs {
    /// Build from an already-parsed schema, labelled with `role`.
    pub fn new(role: RoleIdentity, options: ParameterSchema) -> Self {
        Self {
            role,
            role_dir: PathBuf::new(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_aliases() {
        assert_eq!("bool".parse::<TypeKind>().unwrap(), TypeKind::Bool);
        assert_eq!("boolean".parse::<TypeKind>().unwrap(), TypeKind::Bool);
        assert_eq!("integer".parse::<TypeKind>().unwrap(), TypeKind::Int);
        assert_eq!("object".parse::<TypeKind>().unwrap(), TypeKind::Dict);
        assert!("tuple".parse::<TypeKind>().is_err());
    }

    #[test]
    fn test_yaml11_bool_spellings() {
        for text in ["true", "True", "yes", "YES", "on", "On", "y"] {
            assert_eq!(yaml11_bool(&Value::String(text.into())), Some(true), "{text}");
        }
        for text in ["false", "no", "No", "off", "OFF", "n"] {
            assert_eq!(yaml11_bool(&Value::String(text.into())), Some(false), "{text}");
        }
        assert_eq!(yaml11_bool(&Value::Bool(false)), Some(false));
        assert_eq!(yaml11_bool(&Value::String("maybe".into())), None);
        let one: Value = serde_yaml::from_str("1").unwrap();
        assert_eq!(yaml11_bool(&one), None);
    }

    #[test]
    fn test_parameter_type_keeps_spelling() {
        let t: ParameterType = "integer".parse().unwrap();
        assert_eq!(t.kind(), TypeKind::Int);
        assert_eq!(t.to_string(), "integer");
    }

    #[test]
    fn test_role_identity_from_dir() {
        let id = RoleIdentity::from_role_dir(Path::new("/tmp/roles/sap_hana_install"));
        assert_eq!(id.as_str(), "sap_hana_install");

        let id = RoleIdentity::from_role_dir(Path::new("roles/sap_swpm/"));
        assert_eq!(id.as_str(), "sap_swpm");
    }

    #[test]
    fn test_role_identity_from_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let role = dir.path().join("my_role");
        std::fs::create_dir(&role).unwrap();

        let id = RoleIdentity::from_role_dir(&role.join(".."));
        let expected = dir
            .path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(id.as_str(), expected);
    }
}
