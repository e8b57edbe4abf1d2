use serde_json::{Map, Value};

use super::{Fields, display_text, same_id};
use crate::error::{BoundaryError, kind_of};

/// One selected entry: a catalog identifier or a free-text tag.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEntry {
	/// Identifier of a catalog option (the option's value field).
	Id(Value),
	/// A tag typed by the user that does not reference the catalog.
	FreeText(String),
}

impl SelectionEntry {
	#[must_use]
	pub fn id(value: impl Into<Value>) -> Self {
		Self::Id(value.into())
	}

	#[must_use]
	pub fn free_text(text: impl Into<String>) -> Self {
		Self::FreeText(text.into())
	}

	#[must_use]
	pub fn as_id(&self) -> Option<&Value> {
		match self {
			Self::Id(value) => Some(value),
			Self::FreeText(_) => None,
		}
	}

	#[must_use]
	pub fn as_free_text(&self) -> Option<&str> {
		match self {
			Self::Id(_) => None,
			Self::FreeText(text) => Some(text),
		}
	}

	/// Resolve one JSON selection element.
	///
	/// Scalars are identifiers. Objects carrying the value field are treated
	/// as that identifier; other objects are free-text tags read from the text
	/// field. Anything else becomes a free-text tag of its display text.
	///
	/// Free text is always a string: a non-string text field such as
	/// `{"name": 5}` is stored as `"5"` and written back as `{"name": "5"}`.
	#[must_use]
	pub fn from_json(value: Value, fields: &Fields) -> Self {
		match value {
			Value::Number(_) | Value::String(_) | Value::Bool(_) => Self::Id(value),
			Value::Object(mut map) => match map.remove(&fields.value_field) {
				Some(id) if !id.is_null() => Self::Id(id),
				_ => Self::FreeText(
					map.get(&fields.text_field)
						.map(|text| display_text(text).into_owned())
						.unwrap_or_default(),
				),
			},
			other => Self::FreeText(display_text(&other).into_owned()),
		}
	}

	/// Entry equality used by removal and lookups.
	///
	/// Identifiers compare with [`same_id`], so `1` matches `1.0`. Free text
	/// compares exactly. An identifier never matches free text.
	#[must_use]
	pub fn matches(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Id(left), Self::Id(right)) => same_id(left, right),
			(Self::FreeText(left), Self::FreeText(right)) => left == right,
			_ => false,
		}
	}

	/// JSON form: the raw identifier, or `{text_field: text}` for free text.
	#[must_use]
	pub fn to_json(&self, fields: &Fields) -> Value {
		match self {
			Self::Id(value) => value.clone(),
			Self::FreeText(text) => {
				let mut map = Map::new();
				map.insert(fields.text_field.clone(), Value::String(text.clone()));
				Value::Object(map)
			}
		}
	}
}

/// Ordered list of selected entries.
///
/// Order is the tag display order. Duplicates are kept; callers are expected
/// not to add an entry twice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection(Vec<SelectionEntry>);

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn entries(&self) -> &[SelectionEntry] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SelectionEntry> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&SelectionEntry> {
		self.0.get(index)
	}

	/// Whether a catalog identifier equal to `id` is selected.
	#[must_use]
	pub fn contains_id(&self, id: &Value) -> bool {
		self.0
			.iter()
			.any(|entry| entry.as_id().is_some_and(|selected| same_id(selected, id)))
	}

	/// Whether a free-text tag with exactly `text` is selected.
	#[must_use]
	pub fn contains_free_text(&self, text: &str) -> bool {
		self.0.iter().any(|entry| entry.as_free_text() == Some(text))
	}

	/// New selection with `entry` appended at the end.
	#[must_use]
	pub fn appended(&self, entry: SelectionEntry) -> Self {
		let mut entries = Vec::with_capacity(self.0.len() + 1);
		entries.extend(self.0.iter().cloned());
		entries.push(entry);
		Self(entries)
	}

	/// New selection without the first entry equal to `entry`.
	///
	/// Returns an unchanged copy when nothing matches.
	#[must_use]
	pub fn without_first(&self, entry: &SelectionEntry) -> Self {
		let mut entries = self.0.clone();
		if let Some(position) = entries.iter().position(|candidate| candidate.matches(entry)) {
			entries.remove(position);
		}
		Self(entries)
	}

	/// Resolve a JSON array into a selection.
	///
	/// # Errors
	///
	/// Returns [`BoundaryError::SelectionNotArray`] when `value` is not an array.
	pub fn from_json(value: Value, fields: &Fields) -> Result<Self, BoundaryError> {
		match value {
			Value::Array(items) => Ok(items
				.into_iter()
				.map(|item| SelectionEntry::from_json(item, fields))
				.collect()),
			other => Err(BoundaryError::SelectionNotArray {
				found: kind_of(&other),
			}),
		}
	}

	#[must_use]
	pub fn to_json(&self, fields: &Fields) -> Value {
		Value::Array(self.0.iter().map(|entry| entry.to_json(fields)).collect())
	}
}

impl From<Vec<SelectionEntry>> for Selection {
	fn from(entries: Vec<SelectionEntry>) -> Self {
		Self(entries)
	}
}

impl FromIterator<SelectionEntry> for Selection {
	fn from_iter<I: IntoIterator<Item = SelectionEntry>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Selection {
	type Item = &'a SelectionEntry;
	type IntoIter = std::slice::Iter<'a, SelectionEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
