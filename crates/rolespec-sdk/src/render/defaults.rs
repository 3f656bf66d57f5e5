//! `defaults/main.yml` rendering.
//!
//! Every parameter gets an assignment line (or a commented placeholder when it
//! has no default) followed by its description, possible values, and a pointer
//! to the README example, all as YAML comments.

use std::fmt::{self, Write};

use super::DefaultLiteral;
use super::ValueText;
use crate::argument_specs::{ParameterSpec, RoleArgumentSpecs, RoleIdentity};

/// Opening marker line for `role`.
pub fn begin_marker(role: &RoleIdentity) -> String {
    format!("# BEGIN: Default Variables for {role}")
}

/// Closing marker line for `role`.
pub fn end_marker(role: &RoleIdentity) -> String {
    format!("# END: Default Variables for {role}")
}

/// Render the complete defaults document.
pub fn render_defaults(specs: &RoleArgumentSpecs) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_defaults(&mut out, specs).ok();
    out
}

pub fn write_defaults<W: Write>(w: &mut W, specs: &RoleArgumentSpecs) -> fmt::Result {
    writeln!(w, "---")?;
    writeln!(w, "{}", begin_marker(&specs.role))?;
    writeln!(w)?;

    for param in &specs.options {
        write_parameter(w, param)?;
    }

    writeln!(w, "{}", end_marker(&specs.role))
}

fn write_parameter<W: Write>(w: &mut W, param: &ParameterSpec) -> fmt::Result {
    match &param.default {
        Some(value) => match DefaultLiteral::for_default(&param.declared_type, value) {
            DefaultLiteral::Bare(text) => writeln!(w, "{}: {text}", param.name)?,
            DefaultLiteral::DoubleQuoted(text) => writeln!(w, "{}: \"{text}\"", param.name)?,
            DefaultLiteral::SingleQuoted(text) => writeln!(w, "{}: '{text}'", param.name)?,
            DefaultLiteral::Items(items) => {
                writeln!(w, "{}:", param.name)?;
                for item in items {
                    writeln!(w, "  - {item}")?;
                }
            }
        },
        None => writeln!(w, "# {}: (not defined by default)", param.name)?,
    }

    for line in &param.description {
        writeln!(w, "# {line}")?;
    }

    if let Some(choices) = &param.choices {
        writeln!(w, "# Possible Values:")?;
        for choice in choices {
            writeln!(w, "# - {}", ValueText(choice))?;
        }
    }

    if param.example.is_some() {
        writeln!(w, "# Example: See README.md")?;
    }

    writeln!(w)
}
