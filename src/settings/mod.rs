//! Configuration loading and resolution.
//!
//! `load` layers the default config files, explicit `--config` files,
//! `MINISEL__*` environment variables and CLI overrides, then validates the
//! result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
