//! Command handlers

pub mod clean;
pub mod merge_deps;
pub mod reconcile;

use anyhow::Result;

use ccsync::Config;

/// Load `./ccsync.toml` (or the user config) with env overrides, reporting unknown keys
pub(crate) fn load_config(json: bool) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&cwd))?;
    crate::ui::output::print_config_warnings(&warnings, json);
    Ok(config)
}
