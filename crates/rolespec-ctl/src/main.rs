//! Render a role's `meta/argument_specs.yml` into `defaults/main.yml` content,
//! the README parameter section, or a compact parameter listing.
//!
//! ```text
//! rolespec-ctl defaults <role_directory>   # defaults/main.yml to stdout
//! rolespec-ctl readme   <role_directory>   # README.md with regenerated parameters
//! rolespec-ctl list     <role_directory>   # compact inventory
//! ```

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use rolespec_sdk::argument_specs::{ARGUMENT_SPECS_FILE, DEFAULT_ENTRY_POINT};
use rolespec_sdk::{ListingOptions, LoadError};
use tracing_subscriber::EnvFilter;

use commands::RunContext;
use error::CliError;

const README_NOTE: &str = "\
Note: A README.md file must already exist, and it must contain at least the following two lines:
<!-- BEGIN: Role Input Parameters -->
<!-- END: Role Input Parameters -->
These two lines indicate the start and end of the variables section, which is created dynamically.
The rest of the README.md file is displayed without modification.";

const DEFAULTS_NOTE: &str = "Note: The file defaults/main.yml is fully created by this program.";

#[derive(Debug, Parser)]
#[command(name = "rolespec-ctl", version, styles = output::clap_styles())]
#[command(about = "Generate role defaults, README parameter docs, and listings from meta/argument_specs.yml")]
pub(crate) struct Cli {
    /// Entry point under `argument_specs` to read [default: config `entry-point`, else `main`]
    #[arg(long, global = true, value_name = "NAME")]
    entry_point: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Display a role's defaults/main.yml file generated from meta/argument_specs.yml
    #[command(after_help = DEFAULTS_NOTE)]
    Defaults(RenderArgs),

    /// Display a role's README.md with its parameter section generated from meta/argument_specs.yml
    #[command(after_help = README_NOTE)]
    Readme(RenderArgs),

    /// Parse meta/argument_specs.yml and display it in a compact way, keeping the order unchanged
    List(RoleArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RoleArgs {
    /// Root directory of the role
    pub role_directory: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub role: RoleArgs,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cli_config = cli_config::load_cli_config();
    let ctx = RunContext {
        entry_point: cli
            .entry_point
            .or(cli_config.entry_point)
            .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string()),
        listing: ListingOptions {
            print_none: cli_config.print_none,
        },
    };

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        return ExitCode::SUCCESS;
    };

    let result = match command {
        Commands::Defaults(args) => commands::handle_defaults_command(args, &ctx),
        Commands::Readme(args) => commands::handle_readme_command(args, &ctx),
        Commands::List(args) => commands::handle_list_command(args, &ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e);
            if let CliError::Load(LoadError::Io { .. }) = e {
                output::hint(format!(
                    "The role directory must contain {ARGUMENT_SPECS_FILE}."
                ));
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
