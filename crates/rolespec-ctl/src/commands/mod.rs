//! Command handlers for `rolespec-ctl`.
//!
//! Each handler loads the role, renders in memory, and only then writes, so a
//! failing run never leaves partial output behind.

pub(crate) mod defaults;
pub(crate) mod list;
pub(crate) mod readme;

pub(crate) use defaults::handle_defaults_command;
pub(crate) use list::handle_list_command;
pub(crate) use readme::handle_readme_command;

use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use rolespec_sdk::ListingOptions;

use crate::error::{CliError, CliResult};
use crate::{output, Cli};

/// Settings shared by all commands, merged from flags and config.
#[derive(Debug, Clone)]
pub(crate) struct RunContext {
    pub entry_point: String,
    pub listing: ListingOptions,
}

/// Print the help of `subcommand`; used when no role directory is given.
pub(crate) fn print_usage(subcommand: &str) {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
        sub.print_help().ok();
    }
}

/// Write rendered text to `output`, or to stdout when no file is given.
pub(crate) fn emit(rendered: &str, output: Option<&Path>) -> CliResult<()> {
    let Some(path) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::Stdout)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::WriteFile {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, rendered).map_err(|e| CliError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    output::success(format!("Written to {}", path.display()));
    Ok(())
}
