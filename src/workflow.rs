use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use minisel::{CatalogOption, Fields, Multiselect, MultiselectEvent, Selection, SelectionEntry};
use serde_json::Value;
use tracing::{debug, info};

use crate::script::Step;
use crate::settings::ResolvedConfig;

/// Options listed for a single query.
#[derive(Debug)]
pub(crate) struct FilterReport {
	pub(crate) query: String,
	pub(crate) options: Vec<CatalogOption>,
	pub(crate) no_results: Option<String>,
}

/// Events emitted while replaying a script, and the state it left behind.
#[derive(Debug)]
pub(crate) struct RunReport {
	pub(crate) events: Vec<MultiselectEvent>,
	pub(crate) value: Selection,
	pub(crate) tags: Vec<String>,
	pub(crate) query: String,
	pub(crate) open: bool,
	pub(crate) filtered: Vec<CatalogOption>,
}

/// Drives a [`Multiselect`] the way an embedding application would.
///
/// `input` events are written back as the new value. `create` events add a
/// catalog option for the typed text and select it.
pub(crate) struct SessionWorkflow {
	widget: Multiselect,
}

impl SessionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			widget,
			options_path,
			value,
		} = config;

		let source = fs::read_to_string(&options_path)
			.with_context(|| format!("failed to read options from {}", options_path.display()))?;
		let options: Value = serde_json::from_str(&source)
			.with_context(|| format!("failed to parse options in {}", options_path.display()))?;
		let widget = Multiselect::from_json(widget, options, value)
			.with_context(|| format!("invalid options in {}", options_path.display()))?;

		info!(
			options = widget.options().len(),
			selected = widget.value().len(),
			"loaded component"
		);
		Ok(Self::new(widget))
	}

	pub(crate) fn new(widget: Multiselect) -> Self {
		Self { widget }
	}

	pub(crate) fn filter(mut self, query: &str) -> FilterReport {
		self.widget.input(query);
		FilterReport {
			query: query.to_string(),
			options: self.widget.filtered_options().into_iter().cloned().collect(),
			no_results: self.widget.no_results_label().map(str::to_string),
		}
	}

	pub(crate) fn run(mut self, steps: &[Step]) -> RunReport {
		let mut clock = Instant::now();
		let mut events = Vec::new();

		for step in steps {
			debug!(?step, "replaying step");
			match step {
				Step::Type(text) => self.widget.input(text.as_str()),
				Step::Enter => self.widget.press_enter(),
				Step::Pick(index) => {
					self.widget.pick_filtered(*index);
				}
				Step::Remove(index) => {
					self.widget.remove_tag(*index);
				}
				Step::Add => self.widget.add_option(),
				Step::Toggle => self.widget.click_select(),
				Step::Open => self.widget.click_tags(),
				Step::Close => self.widget.clear_dropdown(),
				Step::Blur => self.widget.focus_lost(clock),
				Step::Wait(duration) => {
					clock += *duration;
					self.widget.tick(clock);
				}
			}

			for event in self.widget.take_events() {
				self.handle_event(&event);
				events.push(event);
			}
		}

		let filtered = self.widget.filtered_options().into_iter().cloned().collect();
		let tags = self
			.widget
			.tags()
			.into_iter()
			.map(|tag| tag.text.into_owned())
			.collect();

		RunReport {
			events,
			value: self.widget.value().clone(),
			tags,
			query: self.widget.query().to_string(),
			open: self.widget.is_open(),
			filtered,
		}
	}

	fn handle_event(&mut self, event: &MultiselectEvent) {
		match event {
			MultiselectEvent::Input(next) => self.widget.set_value(next.clone()),
			MultiselectEvent::Create(query) => {
				let fields = self.widget.engine().fields().clone();
				let id = next_id(self.widget.options(), &fields, query);
				info!(%query, %id, "creating option");

				let mut options = self.widget.options().to_vec();
				options.push(CatalogOption::keyed(&fields, id.clone(), query.as_str()));
				self.widget.set_options(options);

				let value = self.widget.value().appended(SelectionEntry::Id(id));
				self.widget.set_value(value);
			}
		}
	}
}

/// Identifier for a newly created option: one past the largest integer id,
/// or the text itself when the catalog has no integer ids.
fn next_id(options: &[CatalogOption], fields: &Fields, text: &str) -> Value {
	options
		.iter()
		.filter_map(|option| option.value(fields).and_then(Value::as_i64))
		.max()
		.map_or_else(
			|| Value::String(text.to_string()),
			|max| Value::from(max.saturating_add(1)),
		)
}
