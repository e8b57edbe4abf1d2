use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::layered_config;
use crate::cli::CliArgs;

/// Files and environment first, then command-line flags, then validation.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = layered_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected sections")?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}
