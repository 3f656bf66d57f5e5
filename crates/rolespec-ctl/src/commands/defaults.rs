//! `defaults`: render `defaults/main.yml` content from the argument specs.

use rolespec_sdk::{load_role, render_defaults};

use super::{emit, print_usage, RunContext};
use crate::error::CliResult;
use crate::RenderArgs;

pub(crate) fn handle_defaults_command(args: RenderArgs, ctx: &RunContext) -> CliResult<()> {
    let Some(role_dir) = args.role.role_directory else {
        print_usage("defaults");
        return Ok(());
    };

    let specs = load_role(&role_dir, &ctx.entry_point)?;
    let rendered = render_defaults(&specs);
    tracing::debug!(role = %specs.role, bytes = rendered.len(), "Rendered defaults");

    emit(&rendered, args.output.as_deref())
}
