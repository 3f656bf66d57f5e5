//! Text renderers for a loaded [`RoleArgumentSpecs`](crate::RoleArgumentSpecs).
//!
//! All renderers are pure: they take the parsed schema (and for the README,
//! the existing document text) and return the complete output as a `String`.
//! Writing the result anywhere is the caller's job.

pub mod defaults;
pub mod listing;
pub mod readme;

use std::fmt;

use serde_yaml::Value;

use crate::argument_specs::{yaml11_bool, ParameterType, TypeKind};

pub use defaults::{render_defaults, write_defaults};
pub use listing::{render_listing, write_listing, ListingOptions};
pub use readme::{render_readme, README_BEGIN_MARKER, README_END_MARKER};

/// Substring that marks a Jinja2 template expression in a scalar.
pub const TEMPLATE_EXPRESSION_MARKER: &str = "{{";

/// Displays a YAML value as plain text: strings verbatim, scalars in their
/// YAML spelling, collections in flow style.
#[derive(Debug, Clone, Copy)]
pub struct ValueText<'a>(pub &'a Value);

impl fmt::Display for ValueText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", ValueText(item))?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", ValueText(key), ValueText(value))?;
                }
                f.write_str("}")
            }
            Value::Tagged(tagged) => write!(f, "{} {}", tagged.tag, ValueText(&tagged.value)),
        }
    }
}

/// How a default value is written as a YAML assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultLiteral {
    /// Written as-is after the key (`true`, `false`, `null`).
    Bare(String),
    /// Wrapped in double quotes; used for template expressions.
    DoubleQuoted(String),
    /// Wrapped in single quotes.
    SingleQuoted(String),
    /// One `- item` line per element, nothing after the key.
    Items(Vec<String>),
}

impl DefaultLiteral {
    /// Choose the literal form for `value` declared as `declared`.
    pub fn for_default(declared: &ParameterType, value: &Value) -> Self {
        match declared.kind() {
            TypeKind::Bool => Self::Bare(bool_text(value)),
            TypeKind::Str
            | TypeKind::Int
            | TypeKind::Float
            | TypeKind::List
            | TypeKind::Dict
            | TypeKind::Path
            | TypeKind::Raw
            | TypeKind::Json
            | TypeKind::JsonArg
            | TypeKind::Bytes
            | TypeKind::Bits => Self::from_shape(value),
        }
    }

    fn from_shape(value: &Value) -> Self {
        match value {
            Value::Null => Self::Bare("null".to_string()),
            Value::Sequence(items) => Self::Items(
                items
                    .iter()
                    .map(|item| ValueText(item).to_string())
                    .collect(),
            ),
            scalar => {
                let text = ValueText(scalar).to_string();
                if text.contains(TEMPLATE_EXPRESSION_MARKER) {
                    Self::DoubleQuoted(text)
                } else {
                    Self::SingleQuoted(text)
                }
            }
        }
    }
}

/// Default value as shown in documentation: booleans as `true`/`false`,
/// everything else literal.
pub(crate) fn documented_default(declared: &ParameterType, value: &Value) -> String {
    match declared.kind() {
        TypeKind::Bool => bool_text(value),
        _ => ValueText(value).to_string(),
    }
}

/// `true`/`false` for anything YAML 1.1 reads as a boolean; other values are
/// lowercased as written.
fn bool_text(value: &Value) -> String {
    match yaml11_bool(value) {
        Some(b) => b.to_string(),
        None => ValueText(value).to_string().to_lowercase(),
    }
}
