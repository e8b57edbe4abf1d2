use std::path::PathBuf;

use minisel::MultiselectConfig;
use serde_json::Value;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) widget: MultiselectConfig,
	pub(crate) options_path: PathBuf,
	/// Initial selection, always a JSON array.
	pub(crate) value: Value,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration to stderr.
	pub(crate) fn print_summary(&self) {
		let widget = &self.widget;
		eprintln!("Effective configuration:");
		eprintln!("  Options file: {}", self.options_path.display());
		eprintln!("  Value field: {}", widget.fields.value_field);
		eprintln!("  Text field: {}", widget.fields.text_field);
		eprintln!(
			"  Placeholder: {}",
			widget.placeholder.as_deref().unwrap_or("(none)")
		);
		eprintln!("  No results label: {}", widget.no_results);
		eprintln!("  Options limit: {}", widget.options_limit.get());
		eprintln!("  Create listener: {}", bool_to_word(widget.create));
		eprintln!("  Blur delay: {}ms", widget.blur_delay.as_millis());
		eprintln!("  Initial value: {}", self.value);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
