use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Fields, display_text};
use crate::error::{BoundaryError, kind_of};

/// A selectable catalog entry: an ordered mapping of keys to JSON values.
///
/// Which keys carry the identifier and the display text is decided by
/// [`Fields`]; the option itself keeps whatever the caller supplied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogOption(IndexMap<String, Value>);

impl CatalogOption {
	/// Create an option with no keys.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Return a copy of the option with `key` set to `value`.
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Build the usual `{value_field: id, text_field: text}` option.
	#[must_use]
	pub fn keyed(fields: &Fields, id: impl Into<Value>, text: impl Into<String>) -> Self {
		Self::new()
			.with(fields.value_field.clone(), id)
			.with(fields.text_field.clone(), Value::String(text.into()))
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Identifier stored under the value field, if any.
	///
	/// `null` counts as missing.
	#[must_use]
	pub fn value(&self, fields: &Fields) -> Option<&Value> {
		self.0
			.get(&fields.value_field)
			.filter(|value| !value.is_null())
	}

	/// Display text stored under the text field, or `""` when missing.
	#[must_use]
	pub fn text(&self, fields: &Fields) -> Cow<'_, str> {
		self.0
			.get(&fields.text_field)
			.map_or(Cow::Borrowed(""), display_text)
	}

	/// Case-insensitive substring test against the display text.
	///
	/// `needle` must already be lowercased.
	#[must_use]
	pub fn text_contains(&self, needle: &str, fields: &Fields) -> bool {
		self.text(fields).to_lowercase().contains(needle)
	}

	/// Resolve one JSON element into an option.
	///
	/// Objects are taken as-is. Any other value is wrapped as
	/// `{text_field: value}` so that it still renders and filters.
	#[must_use]
	pub fn from_json(value: Value, fields: &Fields) -> Self {
		match value {
			Value::Object(map) => Self(map.into_iter().collect()),
			other => Self::new().with(fields.text_field.clone(), other),
		}
	}

	/// Resolve a JSON array into a list of options.
	///
	/// # Errors
	///
	/// Returns [`BoundaryError::OptionsNotArray`] when `value` is not an array.
	pub fn list_from_json(value: Value, fields: &Fields) -> Result<Vec<Self>, BoundaryError> {
		match value {
			Value::Array(items) => Ok(items
				.into_iter()
				.map(|item| Self::from_json(item, fields))
				.collect()),
			other => Err(BoundaryError::OptionsNotArray {
				found: kind_of(&other),
			}),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::Object(
			self.0
				.iter()
				.map(|(key, value)| (key.clone(), value.clone()))
				.collect(),
		)
	}
}

impl FromIterator<(String, Value)> for CatalogOption {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
