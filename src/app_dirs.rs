//! Where `minisel` looks for its user configuration.
//!
//! `MINISEL_CONFIG_DIR` wins when set and non-empty; otherwise the platform
//! config directory from `directories` is used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "MINISEL_CONFIG_DIR";

/// Non-empty override value, if any.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}

	ProjectDirs::from("io", "minisel", "minisel")
		.map(|dirs| dirs.config_local_dir().to_path_buf())
		.ok_or_else(|| anyhow!("no home directory to place the minisel config in"))
}
