//! Config file discovery and loading for `.rolespec-ctl.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.rolespec-ctl.toml` (project-local)
//! 2. `~/.config/rolespec-ctl.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".rolespec-ctl.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "rolespec-ctl.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    let home = home_dir();
    match find_config_file(Path::new("."), home.as_deref()) {
        Some(path) => load_config_file(&path),
        None => CliConfig::default(),
    }
}

/// Read one config file; unreadable or invalid files fall back to defaults.
pub(crate) fn load_config_file(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                return config;
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
        }
    }
    CliConfig::default()
}

/// Search for a config file in precedence order.
fn find_config_file(work_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = work_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
