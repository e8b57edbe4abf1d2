use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use minisel::app_dirs;

use crate::cli::CliArgs;

/// Stack every configuration layer below the CLI overrides.
///
/// Later layers win: optional default files, then `--config` files, then
/// `MINISEL__*` variables.
pub(super) fn layered_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder.add_source(environment()).build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration layers were already built"),
		other => other.into(),
	})
}

/// `MINISEL__WIDGET__PLACEHOLDER` maps to `widget.placeholder`.
///
/// No list separator: labels and the JSON `data.value` may contain commas.
fn environment() -> Environment {
	Environment::with_prefix("minisel")
		.separator("__")
		.try_parsing(true)
}

/// Config files read when present: the user config directory, then the
/// working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".minisel.toml"), dir.join("minisel.toml")]);

	user.into_iter().chain(local).collect()
}
