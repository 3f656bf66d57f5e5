//! Compact parameter inventory for the console.

use std::fmt::{self, Write};

use super::{documented_default, ValueText};
use crate::argument_specs::{ParameterSpec, RoleArgumentSpecs};

const INDENT: &str = "  ";

/// Rendering switches for [`render_listing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Print `<field>: None` for absent optional fields instead of omitting them.
    pub print_none: bool,
}

/// Render the compact listing of every parameter.
pub fn render_listing(specs: &RoleArgumentSpecs, options: ListingOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_listing(&mut out, specs, options).ok();
    out
}

pub fn write_listing<W: Write>(
    w: &mut W,
    specs: &RoleArgumentSpecs,
    options: ListingOptions,
) -> fmt::Result {
    for param in &specs.options {
        write_parameter(w, param, options)?;
    }
    Ok(())
}

// Section headers end in `: ` with a trailing space.
fn write_parameter<W: Write>(
    w: &mut W,
    param: &ParameterSpec,
    options: ListingOptions,
) -> fmt::Result {
    writeln!(w, "- {}", param.name)?;
    writeln!(w, "{INDENT}description: ")?;
    for line in &param.description {
        writeln!(w, "{INDENT}{INDENT}{line}")?;
    }
    writeln!(w, "{INDENT}required: {}", param.is_required())?;
    write!(w, "{INDENT}type: {}", param.declared_type)?;

    if param.is_list_of_dicts() {
        writeln!(w, " of dicts; elements:")?;
        for field in param.nested() {
            writeln!(w, "{INDENT}- {}.{}", param.name, field.name)?;
            writeln!(w, "{INDENT}{INDENT}description: ")?;
            for line in &field.description {
                writeln!(w, "{INDENT}{INDENT}{INDENT}{line}")?;
            }
            writeln!(w, "{INDENT}{INDENT}type: {}", field.declared_type)?;
        }
        return write_example(w, param, options);
    }

    writeln!(w)?;
    match &param.choices {
        Some(choices) => {
            writeln!(w, "{INDENT}choices: ")?;
            for choice in choices {
                writeln!(w, "{INDENT}{INDENT}- {}", ValueText(choice))?;
            }
        }
        None if options.print_none => writeln!(w, "{INDENT}choices: None")?,
        None => {}
    }

    match &param.default {
        Some(default) => writeln!(
            w,
            "{INDENT}default: {}",
            documented_default(&param.declared_type, default)
        )?,
        None if options.print_none => writeln!(w, "{INDENT}default: None")?,
        None => {}
    }

    write_example(w, param, options)
}

fn write_example<W: Write>(
    w: &mut W,
    param: &ParameterSpec,
    options: ListingOptions,
) -> fmt::Result {
    match &param.example {
        Some(example) => {
            writeln!(w, "{INDENT}example: ")?;
            for line in example.split('\n') {
                writeln!(w, "{INDENT}{INDENT}{line}")?;
            }
        }
        None if options.print_none => writeln!(w, "{INDENT}example: None")?,
        None => {}
    }
    Ok(())
}
