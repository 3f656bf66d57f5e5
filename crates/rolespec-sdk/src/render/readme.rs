//! README "Role Input Parameters" section rendering.
//!
//! The existing README is copied through unchanged except for the region
//! between [`README_BEGIN_MARKER`] and [`README_END_MARKER`], which is replaced
//! by a freshly generated parameter reference. The work happens in three
//! phases over the same line stream:
//!
//! ```text
//! copy until BEGIN  →  emit generated section  →  skip until END, copy the rest
//! ```

use std::fmt::{self, Write};

use super::{documented_default, ValueText};
use crate::argument_specs::{ParameterSchema, ParameterSpec, RoleArgumentSpecs};

pub const README_BEGIN_MARKER: &str = "<!-- BEGIN: Role Input Parameters -->";
pub const README_END_MARKER: &str = "<!-- END: Role Input Parameters -->";

const SECTION_HEADING: &str = "## Role Input Parameters";
const INDENT: &str = "  ";

/// Render `existing` with its parameter section regenerated from `specs`.
///
/// Both markers are expected on their own lines, BEGIN before END. A missing
/// marker is logged; the output then lacks the preamble tail or trailer.
pub fn render_readme(existing: &str, specs: &RoleArgumentSpecs) -> String {
    let mut out = String::with_capacity(existing.len());
    let mut lines = existing.split_inclusive('\n');

    let mut found_begin = false;
    for line in lines.by_ref() {
        if line.contains(README_BEGIN_MARKER) {
            found_begin = true;
            break;
        }
        out.push_str(line);
    }
    if !found_begin {
        tracing::warn!(
            role = %specs.role,
            marker = README_BEGIN_MARKER,
            "README has no begin marker; appending generated section at the end"
        );
    }

    // Writing into a String cannot fail.
    write_parameter_section(&mut out, &specs.options).ok();

    let mut found_end = false;
    for line in lines {
        if !found_end && line.contains(README_END_MARKER) {
            found_end = true;
        }
        if found_end {
            out.push_str(line);
        }
    }
    if !found_end {
        tracing::warn!(
            role = %specs.role,
            marker = README_END_MARKER,
            "README has no end marker after the begin marker; trailer dropped"
        );
    }

    out
}

/// Write the generated section, starting with the begin marker line.
pub fn write_parameter_section<W: Write>(w: &mut W, schema: &ParameterSchema) -> fmt::Result {
    writeln!(w, "{README_BEGIN_MARKER}")?;
    writeln!(w, "{SECTION_HEADING}")?;

    for param in schema {
        write_parameter(w, param)?;
    }
    Ok(())
}

fn write_parameter<W: Write>(w: &mut W, param: &ParameterSpec) -> fmt::Result {
    writeln!(w, "### {}", param.name)?;
    write!(w, "- _Type:_ `{}`", param.declared_type)?;

    if param.is_list_of_dicts() {
        writeln!(w, " of dicts; elements:")?;
        for field in param.nested() {
            writeln!(w, "{INDENT}#### {}", field.name)?;
            writeln!(w, "{INDENT}- _Type:_ {}", field.declared_type)?;
            writeln!(w)?;
            for line in &field.description {
                writeln!(w, "{INDENT}{line}")?;
            }
        }
    }
    writeln!(w)?;

    if let Some(default) = &param.default {
        writeln!(
            w,
            "- _Default:_ `{}`",
            documented_default(&param.declared_type, default)
        )?;
    }

    if let Some(choices) = &param.choices {
        writeln!(w, "- _Possible Values:_<br>")?;
        for choice in choices {
            writeln!(w, "{INDENT}- `{}`", ValueText(choice))?;
        }
    }

    writeln!(w)?;
    for line in &param.description {
        writeln!(w, "{line}<br>")?;
    }
    writeln!(w)?;

    if let Some(example) = &param.example {
        writeln!(w, "Example:")?;
        writeln!(w)?;
        writeln!(w, "```yaml")?;
        for line in example.split('\n') {
            writeln!(w, "{line}")?;
        }
        writeln!(w, "```")?;
        writeln!(w)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument_specs::{parse_options_str, RoleIdentity};

    const README: &str = "# sap_demo\n\
                          \n\
                          Intro text.\n\
                          \n\
                          <!-- BEGIN: Role Input Parameters -->\n\
                          <!-- END: Role Input Parameters -->\n\
                          \n\
                          ## License\n\
                          \n\
                          Apache-2.0\n";

    fn specs(options_yaml: &str) -> RoleArgumentSpecs {
        let yaml = format!("argument_specs:\n  main:\n    options:\n{options_yaml}");
        let options = parse_options_str(&yaml, "main").unwrap();
        RoleArgumentSpecs::new(RoleIdentity::new("sap_demo"), options)
    }

    #[test]
    fn test_preamble_and_trailer_preserved() {
        let specs = RoleArgumentSpecs::new(RoleIdentity::new("sap_demo"), Default::default());
        let out = render_readme(README, &specs);
        assert_eq!(
            out,
            "# sap_demo\n\
             \n\
             Intro text.\n\
             \n\
             <!-- BEGIN: Role Input Parameters -->\n\
             ## Role Input Parameters\n\
             <!-- END: Role Input Parameters -->\n\
             \n\
             ## License\n\
             \n\
             Apache-2.0\n"
        );
    }

    #[test]
    fn test_stale_section_replaced() {
        let readme = "intro\r\n\
                      <!-- BEGIN: Role Input Parameters -->\n\
                      ### stale_parameter\n\
                      old text\n\
                      <!-- END: Role Input Parameters -->\n\
                      tail without newline";
        let specs = specs(
            r#"      fresh:
        type: str
        description: []
"#,
        );
        let out = render_readme(readme, &specs);
        assert!(out.starts_with("intro\r\n<!-- BEGIN: Role Input Parameters -->\n"));
        assert!(!out.contains("stale_parameter"));
        assert!(out.contains("### fresh\n"));
        assert!(out.ends_with("<!-- END: Role Input Parameters -->\ntail without newline"));
    }

    #[test]
    fn test_parameter_block() {
        let specs = specs(
            r#"      sap_demo_enabled:
        type: bool
        default: True
        choices: [true, false]
        description:
          - Enable the demo.
        example: |
          sap_demo_enabled: true
"#,
        );
        let out = render_readme(README, &specs);
        let expected = "### sap_demo_enabled\n\
                        - _Type:_ `bool`\n\
                        - _Default:_ `true`\n\
                        - _Possible Values:_<br>\n\
                        \x20 - `true`\n\
                        \x20 - `false`\n\
                        \n\
                        Enable the demo.<br>\n\
                        \n\
                        Example:\n\
                        \n\
                        ```yaml\n\
                        sap_demo_enabled: true\n\
                        \n\
                        ```\n\
                        \n\
                        <!-- END: Role Input Parameters -->\n";
        assert!(out.contains(expected), "unexpected output:\n{out}");
    }

    #[test]
    fn test_yaml11_bool_default_documented_as_literal() {
        let specs = specs(
            r#"      sap_demo_enabled:
        type: bool
        default: yes
        description: []
      sap_demo_verbose:
        type: bool
        default: off
        description: []
"#,
        );
        let out = render_readme(README, &specs);
        assert!(out.contains("### sap_demo_enabled\n- _Type:_ `bool`\n- _Default:_ `true`\n"));
        assert!(out.contains("### sap_demo_verbose\n- _Type:_ `bool`\n- _Default:_ `false`\n"));
    }

    #[test]
    fn test_example_split_on_every_line_break() {
        let specs = specs(
            r#"      plain:
        type: str
        description: []
        example: "a: x"
      block:
        type: str
        description: []
        example: |
          a: x
"#,
        );
        let out = render_readme(README, &specs);
        assert!(out.contains("### plain\n- _Type:_ `str`\n\n\nExample:\n\n```yaml\na: x\n```\n"));
        assert!(out.contains("```yaml\na: x\n\n```\n\n<!-- END"));
    }

    #[test]
    fn test_list_of_dicts_block() {
        let specs = specs(
            r#"      sap_demo_hosts:
        type: list
        elements: dict
        description:
          - Hosts.
        options:
          host:
            type: str
            description:
              - Host name.
          port:
            type: int
            description: []
"#,
        );
        let out = render_readme(README, &specs);
        let expected = "### sap_demo_hosts\n\
                        - _Type:_ `list` of dicts; elements:\n\
                        \x20 #### host\n\
                        \x20 - _Type:_ str\n\
                        \n\
                        \x20 Host name.\n\
                        \x20 #### port\n\
                        \x20 - _Type:_ int\n\
                        \n\
                        \n\
                        \n\
                        Hosts.<br>\n\
                        \n";
        assert!(out.contains(expected), "unexpected output:\n{out}");
    }

    #[test]
    fn test_no_description_is_not_an_error() {
        let specs = specs(
            r#"      quiet:
        type: str
        default: x
        description: []
"#,
        );
        let out = render_readme(README, &specs);
        assert!(out.contains("### quiet\n- _Type:_ `str`\n- _Default:_ `x`\n\n\n"));
    }

    #[test]
    fn test_missing_markers_keep_document() {
        let specs = RoleArgumentSpecs::new(RoleIdentity::new("sap_demo"), Default::default());
        let out = render_readme("no markers here\n", &specs);
        assert_eq!(
            out,
            "no markers here\n<!-- BEGIN: Role Input Parameters -->\n## Role Input Parameters\n"
        );
    }
}
