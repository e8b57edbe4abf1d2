use anyhow::Result;
use minisel::{CatalogOption, Fields, MultiselectEvent};
use serde_json::{Value, json};

use crate::workflow::{FilterReport, RunReport};

/// Anything the driver can print.
pub(crate) enum Report {
	Filter(FilterReport),
	Run(RunReport),
}

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report, fields: &Fields) {
	print!("{}", format_plain(report, fields));
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report, fields: &Fields) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(&report_json(report, fields))?);
	Ok(())
}

pub(crate) fn format_plain(report: &Report, fields: &Fields) -> String {
	let mut out = String::new();
	match report {
		Report::Filter(filter) => {
			for option in &filter.options {
				out.push_str(&option_line(option, fields));
				out.push('\n');
			}
			if let Some(label) = &filter.no_results {
				out.push_str(label);
				out.push('\n');
			}
		}
		Report::Run(run) => {
			for event in &run.events {
				out.push_str(&event_line(event, fields));
				out.push('\n');
			}
			out.push_str(&format!("value: {}\n", run.value.to_json(fields)));
			out.push_str(&format!("tags: {}\n", run.tags.join(", ")));
			out.push_str(&format!("open: {}\n", run.open));
			out.push_str(&format!("query: {:?}\n", run.query));
		}
	}
	out
}

pub(crate) fn report_json(report: &Report, fields: &Fields) -> Value {
	match report {
		Report::Filter(filter) => json!({
			"query": filter.query,
			"options": options_json(&filter.options),
			"no_results": filter.no_results,
		}),
		Report::Run(run) => json!({
			"events": run
				.events
				.iter()
				.map(|event| event.to_json(fields))
				.collect::<Vec<_>>(),
			"value": run.value.to_json(fields),
			"tags": run.tags,
			"query": run.query,
			"open": run.open,
			"options": options_json(&run.filtered),
		}),
	}
}

fn options_json(options: &[CatalogOption]) -> Vec<Value> {
	options.iter().map(CatalogOption::to_json).collect()
}

fn option_line(option: &CatalogOption, fields: &Fields) -> String {
	let id = option
		.value(fields)
		.map_or_else(|| "-".to_string(), |value| value.to_string());
	format!("{id}\t{}", option.text(fields))
}

fn event_line(event: &MultiselectEvent, fields: &Fields) -> String {
	match event {
		MultiselectEvent::Input(selection) => {
			format!("{} {}", event.name(), selection.to_json(fields))
		}
		MultiselectEvent::Create(query) => format!("{} {query:?}", event.name()),
	}
}
