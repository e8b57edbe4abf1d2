use std::time::Instant;

use minisel_engine::{
	AddAction, BoundaryError, CatalogOption, DropdownState, EnterAction, Selection,
	SelectionEngine, SelectionEntry,
};
use serde_json::Value;
use tracing::{debug, trace};

use super::blur::BlurClose;
use super::config::MultiselectConfig;
use super::events::MultiselectEvent;

/// State of one mounted multiselect.
///
/// Options and value are props: the component reads them but never writes
/// them. Selection changes are emitted as [`MultiselectEvent::Input`] and the
/// owner hands the new value back through [`Multiselect::set_value`].
#[derive(Debug, Clone)]
pub struct Multiselect {
	engine: SelectionEngine,
	options: Vec<CatalogOption>,
	value: Selection,
	dropdown: DropdownState,
	placeholder: Option<String>,
	no_results: String,
	blur: BlurClose,
	events: Vec<MultiselectEvent>,
}

impl Multiselect {
	#[must_use]
	pub fn new(config: MultiselectConfig, options: Vec<CatalogOption>, value: Selection) -> Self {
		Self {
			engine: config.engine(),
			options,
			value,
			dropdown: DropdownState::closed(),
			placeholder: config.placeholder,
			no_results: config.no_results,
			blur: BlurClose::new(config.blur_delay),
			events: Vec::new(),
		}
	}

	/// Build from JSON props, resolving options and value through the
	/// configured fields.
	///
	/// # Errors
	///
	/// Returns an error when either document is not a JSON array.
	pub fn from_json(
		config: MultiselectConfig,
		options: Value,
		value: Value,
	) -> Result<Self, BoundaryError> {
		let options = CatalogOption::list_from_json(options, &config.fields)?;
		let value = Selection::from_json(value, &config.fields)?;
		Ok(Self::new(config, options, value))
	}

	#[must_use]
	pub fn engine(&self) -> &SelectionEngine {
		&self.engine
	}

	#[must_use]
	pub fn options(&self) -> &[CatalogOption] {
		&self.options
	}

	#[must_use]
	pub fn value(&self) -> &Selection {
		&self.value
	}

	#[must_use]
	pub fn dropdown(&self) -> &DropdownState {
		&self.dropdown
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.dropdown.query()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.dropdown.is_open()
	}

	#[must_use]
	pub fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	pub(super) fn no_results(&self) -> &str {
		&self.no_results
	}

	/// Replace the options prop.
	pub fn set_options(&mut self, options: Vec<CatalogOption>) {
		self.options = options;
	}

	/// Replace the value prop, typically after an `input` event.
	pub fn set_value(&mut self, value: Selection) {
		self.value = value;
	}

	/// Options to list in the dropdown for the current query and value.
	#[must_use]
	pub fn filtered_options(&self) -> Vec<&CatalogOption> {
		let filtered = self
			.engine
			.filtered_options(&self.options, &self.value, self.dropdown.query());
		trace!(
			query = self.dropdown.query(),
			options = self.options.len(),
			matched = filtered.len(),
			"filtered options"
		);
		filtered
	}

	/// Drain the events emitted since the last call.
	pub fn take_events(&mut self) -> Vec<MultiselectEvent> {
		std::mem::take(&mut self.events)
	}

	/// Click on the toggle arrow: open when closed, close when open.
	pub fn click_select(&mut self) {
		self.blur.cancel();
		self.dropdown.toggle();
		debug!(open = self.dropdown.is_open(), "toggled dropdown");
	}

	/// Click on the tag area: always opens.
	pub fn click_tags(&mut self) {
		self.blur.cancel();
		self.dropdown.open();
	}

	/// Text typed into the search field.
	pub fn input(&mut self, text: impl Into<String>) {
		self.blur.cancel();
		self.dropdown.set_query(text);
	}

	/// Select a catalog option.
	pub fn pick(&mut self, option: &CatalogOption) {
		self.blur.cancel();
		let next = self.engine.pick_option(option, &self.value);
		self.emit_input(next);
		self.clear_dropdown();
	}

	/// Select the option at `index` in the filtered list.
	///
	/// Returns `false` when there is no such option.
	pub fn pick_filtered(&mut self, index: usize) -> bool {
		self.blur.cancel();
		let next = {
			let filtered = self.filtered_options();
			let Some(option) = filtered.get(index) else {
				debug!(index, available = filtered.len(), "pick outside filtered options");
				return false;
			};
			self.engine.pick_option(option, &self.value)
		};
		self.emit_input(next);
		self.clear_dropdown();
		true
	}

	/// Add the current query as a new entry.
	pub fn add_option(&mut self) {
		self.blur.cancel();
		let action = self.engine.add_option(self.dropdown.query(), &self.value);
		self.apply_add(action);
	}

	/// Remove `entry` from the value.
	pub fn remove(&mut self, entry: &SelectionEntry) {
		self.blur.cancel();
		let next = self.engine.remove_option(entry, &self.value);
		self.emit_input(next);
		self.clear_dropdown();
	}

	/// Remove the tag at `index` in display order.
	///
	/// Returns `false` when there is no such tag.
	pub fn remove_tag(&mut self, index: usize) -> bool {
		let Some(entry) = self.value.get(index).cloned() else {
			debug!(index, tags = self.value.len(), "remove outside tags");
			return false;
		};
		self.remove(&entry);
		true
	}

	/// Enter pressed in the search field.
	pub fn press_enter(&mut self) {
		self.blur.cancel();
		let action = {
			let filtered = self.filtered_options();
			self.engine
				.input_enter(&filtered, self.dropdown.query(), &self.value)
		};

		match action {
			EnterAction::Add(add) => self.apply_add(add),
			EnterAction::Pick(next) => {
				self.emit_input(next);
				self.clear_dropdown();
			}
			EnterAction::Nothing => debug!("enter ignored, several options match"),
		}
	}

	/// Close the dropdown and clear the query.
	pub fn clear_dropdown(&mut self) {
		self.blur.cancel();
		self.dropdown = self.engine.clear_dropdown();
	}

	/// Focus left the widget: close after the blur delay.
	pub fn focus_lost(&mut self, now: Instant) {
		self.blur.schedule(now);
	}

	/// Run a pending blur close whose delay has elapsed.
	///
	/// Returns `true` when the dropdown was closed.
	pub fn tick(&mut self, now: Instant) -> bool {
		if self.blur.fire_if_due(now) {
			debug!("closing dropdown after focus loss");
			self.clear_dropdown();
			return true;
		}
		false
	}

	#[must_use]
	pub fn blur_pending(&self) -> bool {
		self.blur.is_pending()
	}

	fn apply_add(&mut self, action: AddAction) {
		let clears = action.clears_dropdown();
		match action {
			AddAction::Ignored(reason) => debug!(?reason, "add ignored"),
			AddAction::CreateRequested(query) => {
				debug!(%query, "create requested");
				self.events.push(MultiselectEvent::Create(query));
			}
			AddAction::InputRequested(next) => self.emit_input(next),
		}
		if clears {
			self.clear_dropdown();
		}
	}

	fn emit_input(&mut self, next: Selection) {
		debug!(before = self.value.len(), after = next.len(), "selection changed");
		self.events.push(MultiselectEvent::Input(next));
	}
}
