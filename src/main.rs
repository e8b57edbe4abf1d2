mod cli;
mod script;
mod settings;
mod workflow;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use cli::{Command, OutputFormat, Report, parse_cli, print_json, print_plain};
use script::{Step, parse_script};
use workflow::SessionWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	minisel::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let fields = resolved.widget.fields.clone();
	let workflow = SessionWorkflow::from_config(resolved)?;

	let report = match cli.command_or_default() {
		Command::Filter { query } => Report::Filter(workflow.filter(&query)),
		Command::Run { script } => {
			let steps = read_script(script.as_deref())?;
			Report::Run(workflow.run(&steps))
		}
	};

	match cli.output {
		OutputFormat::Plain => print_plain(&report, &fields),
		OutputFormat::Json => print_json(&report, &fields)?,
	}

	Ok(())
}

/// Read and parse the interaction script from `path`, or stdin when absent.
fn read_script(path: Option<&Path>) -> Result<Vec<Step>> {
	let (source, origin) = match path {
		Some(path) => (
			fs::read_to_string(path)
				.with_context(|| format!("failed to read script {}", path.display()))?,
			path.display().to_string(),
		),
		None => {
			let mut source = String::new();
			io::stdin()
				.read_to_string(&mut source)
				.context("failed to read script from stdin")?;
			(source, "stdin".to_string())
		}
	};

	parse_script(&source).with_context(|| format!("invalid script in {origin}"))
}
