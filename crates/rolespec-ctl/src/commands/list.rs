//! `list`: compact parameter inventory.

use rolespec_sdk::{load_role, render_listing};

use super::{emit, print_usage, RunContext};
use crate::error::CliResult;
use crate::RoleArgs;

pub(crate) fn handle_list_command(args: RoleArgs, ctx: &RunContext) -> CliResult<()> {
    let Some(role_dir) = args.role_directory else {
        print_usage("list");
        return Ok(());
    };

    let specs = load_role(&role_dir, &ctx.entry_point)?;
    emit(&render_listing(&specs, ctx.listing), None)
}
