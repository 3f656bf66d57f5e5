//! Tool preferences read from `.rolespec-ctl.toml`.
//!
//! Nothing here changes what a role's argument specs mean. `print-none` is
//! only available here; `entry-point` is overridden by `--entry-point`.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

/// CLI-specific configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Print `None` placeholders for absent fields in `list` output.
    #[serde(default)]
    pub print_none: bool,

    /// Entry point under `argument_specs` when `--entry-point` is not given.
    pub entry_point: Option<String>,
}
