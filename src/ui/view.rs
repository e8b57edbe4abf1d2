use std::borrow::Cow;

use minisel_engine::{CatalogOption, SelectionEntry, same_id};

use super::state::Multiselect;

/// A selected entry as the rendering layer should show it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
	/// Display text of the tag.
	pub text: Cow<'a, str>,
	/// Entry to pass back to [`Multiselect::remove`].
	pub entry: &'a SelectionEntry,
	/// Catalog option the entry refers to, when it is in the catalog.
	pub option: Option<&'a CatalogOption>,
}

impl Multiselect {
	/// Selected entries in display order, resolved to display text.
	///
	/// Identifiers are looked up in the options by value field. Identifiers
	/// missing from the catalog fall back to their own text.
	#[must_use]
	pub fn tags(&self) -> Vec<Tag<'_>> {
		let fields = self.engine().fields();
		self.value()
			.iter()
			.map(|entry| match entry {
				SelectionEntry::Id(id) => {
					let option = self
						.options()
						.iter()
						.find(|option| option.value(fields).is_some_and(|value| same_id(value, id)));
					let text = match option {
						Some(option) => option.text(fields),
						None => match id {
							serde_json::Value::String(text) => Cow::Borrowed(text.as_str()),
							other => Cow::Owned(other.to_string()),
						},
					};
					Tag { text, entry, option }
				}
				SelectionEntry::FreeText(text) => Tag {
					text: Cow::Borrowed(text.as_str()),
					entry,
					option: None,
				},
			})
			.collect()
	}

	/// Whether the placeholder should be shown in place of tags.
	#[must_use]
	pub fn show_placeholder(&self) -> bool {
		!self.is_open() && self.value().is_empty()
	}

	/// The "no results" entry, shown only while a query matches nothing.
	#[must_use]
	pub fn no_results_label(&self) -> Option<&str> {
		if self.query().is_empty() || !self.filtered_options().is_empty() {
			return None;
		}
		Some(self.no_results())
	}
}
