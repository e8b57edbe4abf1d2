//! Data types shared by the filtering and selection operations.

mod fields;
mod limit;
mod option;
mod selection;

pub use fields::{DEFAULT_TEXT_FIELD, DEFAULT_VALUE_FIELD, Fields};
pub use limit::OptionsLimit;
pub use option::CatalogOption;
pub use selection::{Selection, SelectionEntry};

use std::borrow::Cow;

use serde_json::Value;

/// Render a JSON value as display text.
///
/// Strings are borrowed as-is, `null` becomes the empty string and every
/// other value uses its JSON representation.
pub(crate) fn display_text(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(text) => Cow::Borrowed(text.as_str()),
		Value::Null => Cow::Borrowed(""),
		other => Cow::Owned(other.to_string()),
	}
}

/// Identifier equality with numbers compared by value, so `1` equals `1.0`.
///
/// Everything else uses plain JSON equality.
#[must_use]
pub fn same_id(left: &Value, right: &Value) -> bool {
	match (left, right) {
		(Value::Number(left), Value::Number(right)) => {
			if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
				return left == right;
			}
			if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
				return left == right;
			}
			left.as_f64() == right.as_f64()
		}
		_ => left == right,
	}
}
