use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use minisel::{Fields, MultiselectConfig, OptionsLimit};
use serde::Deserialize;
use serde_json::Value;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	widget: WidgetSection,
	data: DataSection,
}

/// Component props as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetSection {
	value_field: Option<String>,
	#[serde(alias = "label")]
	text_field: Option<String>,
	placeholder: Option<String>,
	no_results: Option<String>,
	options_limit: Option<usize>,
	create: Option<bool>,
	blur_delay_ms: Option<u64>,
}

/// Where the options and the initial selection come from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	options: Option<PathBuf>,
	/// Initial selection as JSON text.
	#[serde(alias = "selected")]
	value: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.value_field.clone() {
			self.widget.value_field = Some(value);
		}
		if let Some(value) = cli.text_field.clone() {
			self.widget.text_field = Some(value);
		}
		if let Some(value) = cli.placeholder.clone() {
			self.widget.placeholder = Some(value);
		}
		if let Some(value) = cli.no_results.clone() {
			self.widget.no_results = Some(value);
		}
		if let Some(value) = cli.options_limit {
			self.widget.options_limit = Some(value);
		}
		if let Some(value) = cli.create {
			self.widget.create = Some(value);
		}
		if let Some(value) = cli.blur_delay_ms {
			self.widget.blur_delay_ms = Some(value);
		}
		if let Some(path) = cli.options.clone() {
			self.data.options = Some(path);
		}
		if let Some(value) = cli.value.clone() {
			self.data.value = Some(value);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = Fields::default();
		let fields = Fields::new(
			sanitize_key(self.widget.value_field).unwrap_or(defaults.value_field),
			sanitize_key(self.widget.text_field).unwrap_or(defaults.text_field),
		);
		ensure!(
			fields.value_field != fields.text_field,
			"value field and text field must differ (both are '{}')",
			fields.value_field
		);

		let mut widget = MultiselectConfig::default().with_fields(fields);
		if let Some(placeholder) = self.widget.placeholder {
			widget = widget.with_placeholder(placeholder);
		}
		if let Some(label) = self.widget.no_results {
			widget = widget.with_no_results(label);
		}
		if let Some(limit) = self.widget.options_limit {
			let limit =
				OptionsLimit::new(limit).ok_or_else(|| anyhow!("options-limit must be at least 1"))?;
			widget = widget.with_options_limit(limit);
		}
		if let Some(create) = self.widget.create {
			widget = widget.with_create_listener(create);
		}
		if let Some(millis) = self.widget.blur_delay_ms {
			widget = widget.with_blur_delay(Duration::from_millis(millis));
		}

		let options_path = self
			.data
			.options
			.ok_or_else(|| anyhow!("no options file given; pass --options or set data.options"))?;

		let value = match self.data.value.as_deref().map(str::trim) {
			None | Some("") => Value::Array(Vec::new()),
			Some(text) => serde_json::from_str(text)
				.with_context(|| format!("failed to parse initial value as JSON: {text}"))?,
		};
		ensure!(value.is_array(), "initial value must be a JSON array");

		Ok(ResolvedConfig {
			widget,
			options_path,
			value,
		})
	}
}

/// Trim a configured key, treating blank values as unset.
fn sanitize_key(key: Option<String>) -> Option<String> {
	key.map(|key| key.trim().to_string())
		.filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use config::{Config, File, FileFormat};
	use serde_json::json;

	use super::*;

	fn raw_from_toml(source: &str) -> RawConfig {
		Config::builder()
			.add_source(File::from_str(source, FileFormat::Toml))
			.build()
			.expect("builds")
			.try_deserialize()
			.expect("deserializes")
	}

	#[test]
	fn defaults_fill_missing_values() {
		let resolved = raw_from_toml("[data]\noptions = \"people.json\"\n")
			.resolve()
			.expect("resolves");
		assert_eq!(resolved.widget, MultiselectConfig::default());
		assert_eq!(resolved.options_path, PathBuf::from("people.json"));
		assert_eq!(resolved.value, json!([]));
	}

	#[test]
	fn file_values_are_read() {
		let resolved = raw_from_toml(
			r#"
			[widget]
			value_field = "key"
			label = "title"
			options_limit = 5
			create = true
			blur_delay_ms = 50

			[data]
			options = "tags.json"
			selected = "[1, {\"title\": \"x\"}]"
			"#,
		)
		.resolve()
		.expect("resolves");

		assert_eq!(resolved.widget.fields, Fields::new("key", "title"));
		assert_eq!(resolved.widget.options_limit.get(), 5);
		assert!(resolved.widget.create);
		assert_eq!(resolved.widget.blur_delay, Duration::from_millis(50));
		assert_eq!(resolved.value, json!([1, {"title": "x"}]));
	}

	#[test]
	fn cli_overrides_file_values() {
		let mut raw = raw_from_toml("[widget]\noptions_limit = 5\n[data]\noptions = \"a.json\"\n");
		let cli = CliArgs::parse_from(["minisel", "--options-limit", "9", "--options", "b.json"]);
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve().expect("resolves");
		assert_eq!(resolved.widget.options_limit.get(), 9);
		assert_eq!(resolved.options_path, PathBuf::from("b.json"));
	}

	#[test]
	fn zero_limit_is_rejected() {
		let err = raw_from_toml("[widget]\noptions_limit = 0\n[data]\noptions = \"a.json\"\n")
			.resolve()
			.expect_err("zero limit");
		assert!(err.to_string().contains("options-limit"));
	}

	#[test]
	fn identical_fields_are_rejected() {
		let err = raw_from_toml(
			"[widget]\nvalue_field = \"name\"\n[data]\noptions = \"a.json\"\n",
		)
		.resolve()
		.expect_err("same keys");
		assert!(err.to_string().contains("must differ"));
	}

	#[test]
	fn missing_options_file_is_an_error() {
		let err = RawConfig::default().resolve().expect_err("no options");
		assert!(err.to_string().contains("--options"));
	}

	#[test]
	fn non_array_value_is_rejected() {
		let err = raw_from_toml("[data]\noptions = \"a.json\"\nvalue = \"{}\"\n")
			.resolve()
			.expect_err("object value");
		assert!(err.to_string().contains("JSON array"));
	}

	#[test]
	fn config_files_load_through_the_builder() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[widget]\nplaceholder = \"Pick\"\n[data]\noptions = \"x.json\"\n")
			.expect("write config");

		let path = path.to_str().expect("utf-8 temp path");
		let cli = CliArgs::parse_from(["minisel", "--no-config", "--config", path]);
		let resolved = crate::settings::load(&cli).expect("loads");
		assert_eq!(resolved.widget.placeholder.as_deref(), Some("Pick"));
		assert_eq!(resolved.options_path, PathBuf::from("x.json"));
	}
}
