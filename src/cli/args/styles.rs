use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use minisel::app_dirs;

/// `--version` text: the crate version plus the resolved config directory.
pub(super) fn long_version() -> &'static str {
	let config_dir = app_dirs::get_config_dir()
		.map_or_else(|err| format!("unavailable ({err})"), |dir| dir.display().to_string());
	let text = format!(
		"minisel {}\nconfig directory: {config_dir}\n",
		env!("CARGO_PKG_VERSION")
	);

	// clap wants a 'static string; this runs once per process.
	Box::leak(text.into_boxed_str())
}

/// Help colours: bold green headings, cyan flags, yellow value names.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Green.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
