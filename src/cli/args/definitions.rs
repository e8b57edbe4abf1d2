use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `minisel` binary.
#[derive(Parser, Debug)]
#[command(
	name = "minisel",
	version,
	long_version = long_version(),
	about = "Headless driver for the minisel multiselect component",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MINISEL_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the effective configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		global = true,
		help = "JSON file holding the array of options (default: from configuration)"
	)]
	pub(crate) options: Option<PathBuf>,
	#[arg(
		long,
		value_name = "JSON",
		global = true,
		help = "Initial selection as a JSON array (default: [])"
	)]
	pub(crate) value: Option<String>,
	#[arg(
		long = "value-field",
		value_name = "KEY",
		global = true,
		help = "Key holding option identifiers (default: id)"
	)]
	pub(crate) value_field: Option<String>,
	#[arg(
		long = "text-field",
		alias = "label",
		value_name = "KEY",
		global = true,
		help = "Key holding option display text (default: name)"
	)]
	pub(crate) text_field: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		global = true,
		help = "Placeholder shown while nothing is selected (default: none)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "no-results",
		value_name = "TEXT",
		global = true,
		help = "Label shown when a query matches nothing (default: \"Option not found, press enter to add\")"
	)]
	pub(crate) no_results: Option<String>,
	#[arg(
		short = 'l',
		long = "options-limit",
		value_name = "COUNT",
		global = true,
		help = "Maximum number of options listed (default: 1000)"
	)]
	pub(crate) options_limit: Option<usize>,
	#[arg(
		long,
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Hand typed entries to a create handler instead of adding free-text tags (default: false)"
	)]
	pub(crate) create: Option<bool>,
	#[arg(
		long = "blur-delay-ms",
		value_name = "MILLIS",
		global = true,
		help = "Delay before a focus loss closes the dropdown (default: 200)"
	)]
	pub(crate) blur_delay_ms: Option<u64>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity on stderr (repeatable)"
	)]
	pub(crate) verbose: u8,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

/// What the driver should do with the loaded component.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Print the options listed for a query.
	Filter {
		#[arg(short, long, default_value = "", help = "Search query")]
		query: String,
	},
	/// Replay an interaction script and print the emitted events.
	Run {
		#[arg(
			short,
			long,
			value_name = "FILE",
			help = "Script to replay (default: read from stdin)"
		)]
		script: Option<PathBuf>,
	},
}

impl CliArgs {
	/// The requested command, listing all options when none was given.
	pub(crate) fn command_or_default(&self) -> Command {
		self.command.clone().unwrap_or(Command::Filter {
			query: String::new(),
		})
	}
}
