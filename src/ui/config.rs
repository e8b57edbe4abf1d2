use std::time::Duration;

use minisel_engine::{CreateMode, Fields, OptionsLimit, SelectionEngine};

use super::blur::BLUR_CLOSE_DELAY;

/// Label shown when a query matches nothing.
pub const DEFAULT_NO_RESULTS: &str = "Option not found, press enter to add";

/// Props of one multiselect instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiselectConfig {
	pub fields: Fields,
	pub placeholder: Option<String>,
	pub no_results: String,
	pub options_limit: OptionsLimit,
	/// Whether the owner listens for create requests.
	pub create: bool,
	/// How long a lost focus waits before closing the dropdown.
	pub blur_delay: Duration,
}

impl Default for MultiselectConfig {
	fn default() -> Self {
		Self {
			fields: Fields::default(),
			placeholder: None,
			no_results: DEFAULT_NO_RESULTS.to_string(),
			options_limit: OptionsLimit::DEFAULT,
			create: false,
			blur_delay: BLUR_CLOSE_DELAY,
		}
	}
}

impl MultiselectConfig {
	#[must_use]
	pub fn with_fields(mut self, fields: Fields) -> Self {
		self.fields = fields;
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	#[must_use]
	pub fn with_no_results(mut self, label: impl Into<String>) -> Self {
		self.no_results = label.into();
		self
	}

	#[must_use]
	pub fn with_options_limit(mut self, limit: OptionsLimit) -> Self {
		self.options_limit = limit;
		self
	}

	/// Register (or drop) a create listener.
	#[must_use]
	pub fn with_create_listener(mut self, create: bool) -> Self {
		self.create = create;
		self
	}

	#[must_use]
	pub fn with_blur_delay(mut self, delay: Duration) -> Self {
		self.blur_delay = delay;
		self
	}

	/// Engine configured with these props.
	#[must_use]
	pub fn engine(&self) -> SelectionEngine {
		SelectionEngine::new(self.fields.clone())
			.with_limit(self.options_limit)
			.with_create_mode(CreateMode::from_listener(self.create))
	}
}
