//! Selection mutations.
//!
//! None of these functions modify their inputs. They return the selection the
//! rendering layer should emit, or an action describing what it should do.

use crate::dropdown::DropdownState;
use crate::types::{CatalogOption, Fields, Selection, SelectionEntry};

/// Whether the owner of the widget handles creation of new entries itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreateMode {
	/// Typed text is added to the selection as a free-text tag.
	#[default]
	FreeText,
	/// Typed text is handed to the owner through a create request.
	Listener,
}

impl CreateMode {
	#[must_use]
	pub fn from_listener(has_listener: bool) -> Self {
		if has_listener {
			Self::Listener
		} else {
			Self::FreeText
		}
	}
}

/// Why an add request produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
	/// A free-text tag with the same text is already selected.
	Duplicate,
	/// There was nothing typed to add.
	EmptyQuery,
}

/// Outcome of [`add_option`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddAction {
	Ignored(IgnoreReason),
	/// The owner should create an entry for this text.
	CreateRequested(String),
	/// The owner should replace its selection with this one.
	InputRequested(Selection),
}

impl AddAction {
	/// Whether the dropdown should be cleared after this action.
	#[must_use]
	pub fn clears_dropdown(&self) -> bool {
		!matches!(self, Self::Ignored(_))
	}
}

/// Outcome of [`input_enter`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnterAction {
	/// Nothing matched, so the query was treated as an add request.
	Add(AddAction),
	/// Exactly one option matched and was picked.
	Pick(Selection),
	/// More than one option matched.
	Nothing,
}

/// Append `option`'s identifier to `selection`.
///
/// An option without a value field is appended as a free-text tag of its
/// display text instead.
#[must_use]
pub fn pick_option(option: &CatalogOption, selection: &Selection, fields: &Fields) -> Selection {
	let entry = match option.value(fields) {
		Some(value) => SelectionEntry::Id(value.clone()),
		None => SelectionEntry::FreeText(option.text(fields).into_owned()),
	};
	selection.appended(entry)
}

/// Turn the typed `query` into a new entry.
///
/// Free-text tags are stored as [`SelectionEntry::FreeText`], so the text
/// field only comes into play when the selection is written back as JSON.
#[must_use]
pub fn add_option(query: &str, selection: &Selection, mode: CreateMode) -> AddAction {
	if query.is_empty() {
		return AddAction::Ignored(IgnoreReason::EmptyQuery);
	}
	if selection.contains_free_text(query) {
		return AddAction::Ignored(IgnoreReason::Duplicate);
	}

	match mode {
		CreateMode::Listener => AddAction::CreateRequested(query.to_string()),
		CreateMode::FreeText => {
			AddAction::InputRequested(selection.appended(SelectionEntry::FreeText(query.to_string())))
		}
	}
}

/// Remove the first entry equal to `entry`.
///
/// Identifiers compare by JSON value and free-text tags by their text; an
/// identifier never equals a free-text tag.
#[must_use]
pub fn remove_option(entry: &SelectionEntry, selection: &Selection) -> Selection {
	selection.without_first(entry)
}

/// The reset dropdown state: closed with an empty query.
#[must_use]
pub fn clear_dropdown() -> DropdownState {
	DropdownState::closed()
}

/// Resolve the enter key against the currently filtered options.
#[must_use]
pub fn input_enter(
	filtered: &[&CatalogOption],
	query: &str,
	selection: &Selection,
	fields: &Fields,
	mode: CreateMode,
) -> EnterAction {
	match filtered {
		[] => EnterAction::Add(add_option(query, selection, mode)),
		[only] => EnterAction::Pick(pick_option(only, selection, fields)),
		_ => EnterAction::Nothing,
	}
}
