//! [`SelectionEngine`] bundles the per-widget configuration with the
//! filtering and selection operations.

use crate::dropdown::DropdownState;
use crate::filter::compute_filtered_options;
use crate::ops::{self, AddAction, CreateMode, EnterAction};
use crate::types::{CatalogOption, Fields, OptionsLimit, Selection, SelectionEntry};

/// Configuration-carrying front end for the engine operations.
///
/// The engine holds no selection or dropdown state of its own; callers pass
/// the current values in and get new values back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionEngine {
	fields: Fields,
	limit: OptionsLimit,
	create: CreateMode,
}

impl SelectionEngine {
	#[must_use]
	pub fn new(fields: Fields) -> Self {
		Self {
			fields,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_limit(mut self, limit: OptionsLimit) -> Self {
		self.limit = limit;
		self
	}

	#[must_use]
	pub fn with_create_mode(mut self, create: CreateMode) -> Self {
		self.create = create;
		self
	}

	#[must_use]
	pub fn fields(&self) -> &Fields {
		&self.fields
	}

	#[must_use]
	pub fn limit(&self) -> OptionsLimit {
		self.limit
	}

	#[must_use]
	pub fn create_mode(&self) -> CreateMode {
		self.create
	}

	/// See [`compute_filtered_options`].
	#[must_use]
	pub fn filtered_options<'a>(
		&self,
		options: &'a [CatalogOption],
		selection: &Selection,
		query: &str,
	) -> Vec<&'a CatalogOption> {
		compute_filtered_options(options, selection, query, self.limit, &self.fields)
	}

	/// See [`ops::pick_option`].
	#[must_use]
	pub fn pick_option(&self, option: &CatalogOption, selection: &Selection) -> Selection {
		ops::pick_option(option, selection, &self.fields)
	}

	/// See [`ops::add_option`].
	#[must_use]
	pub fn add_option(&self, query: &str, selection: &Selection) -> AddAction {
		ops::add_option(query, selection, self.create)
	}

	/// See [`ops::remove_option`].
	#[must_use]
	pub fn remove_option(&self, entry: &SelectionEntry, selection: &Selection) -> Selection {
		ops::remove_option(entry, selection)
	}

	/// See [`ops::clear_dropdown`].
	#[must_use]
	pub fn clear_dropdown(&self) -> DropdownState {
		ops::clear_dropdown()
	}

	/// See [`ops::input_enter`].
	#[must_use]
	pub fn input_enter(
		&self,
		filtered: &[&CatalogOption],
		query: &str,
		selection: &Selection,
	) -> EnterAction {
		ops::input_enter(filtered, query, selection, &self.fields, self.create)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uses_configured_fields_for_picks() {
		let fields = Fields::new("key", "title");
		let engine = SelectionEngine::new(fields.clone());
		let option = CatalogOption::keyed(&fields, "k1", "First");
		assert_eq!(
			engine.pick_option(&option, &Selection::new()),
			vec![SelectionEntry::id("k1")].into()
		);
	}

	#[test]
	fn create_mode_switches_add_behavior() {
		let engine = SelectionEngine::default().with_create_mode(CreateMode::Listener);
		assert_eq!(
			engine.add_option("new", &Selection::new()),
			AddAction::CreateRequested("new".into())
		);
	}

	#[test]
	fn limit_applies_to_filtering() {
		let fields = Fields::default();
		let options: Vec<_> = (0..5)
			.map(|id| CatalogOption::keyed(&fields, id, "x"))
			.collect();
		let engine = SelectionEngine::new(fields).with_limit(OptionsLimit::new(3).expect("non-zero"));
		assert_eq!(engine.filtered_options(&options, &Selection::new(), "x").len(), 3);
	}
}
