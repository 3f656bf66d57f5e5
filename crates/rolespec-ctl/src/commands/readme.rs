//! `readme`: regenerate the parameter section of the role's README.

use rolespec_sdk::{load_role, render_readme};

use super::{emit, print_usage, RunContext};
use crate::error::{CliError, CliResult};
use crate::RenderArgs;

const README_FILE: &str = "README.md";

pub(crate) fn handle_readme_command(args: RenderArgs, ctx: &RunContext) -> CliResult<()> {
    let Some(role_dir) = args.role.role_directory else {
        print_usage("readme");
        return Ok(());
    };

    let readme_path = role_dir.join(README_FILE);
    let existing = std::fs::read_to_string(&readme_path).map_err(|e| CliError::ReadFile {
        path: readme_path.clone(),
        source: e,
    })?;

    let specs = load_role(&role_dir, &ctx.entry_point)?;
    let rendered = render_readme(&existing, &specs);
    tracing::debug!(
        role = %specs.role,
        readme = %readme_path.display(),
        parameters = specs.options.len(),
        "Rendered README"
    );

    emit(&rendered, args.output.as_deref())
}
