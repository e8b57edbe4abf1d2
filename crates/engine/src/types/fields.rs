use serde::{Deserialize, Serialize};

/// Default key holding an option's identifier.
pub const DEFAULT_VALUE_FIELD: &str = "id";
/// Default key holding an option's display text.
pub const DEFAULT_TEXT_FIELD: &str = "name";

/// Names of the keys used to read identifiers and display text from options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fields {
	pub value_field: String,
	#[serde(alias = "label")]
	pub text_field: String,
}

impl Fields {
	/// Create a field mapping from explicit key names.
	#[must_use]
	pub fn new(value_field: impl Into<String>, text_field: impl Into<String>) -> Self {
		Self {
			value_field: value_field.into(),
			text_field: text_field.into(),
		}
	}
}

impl Default for Fields {
	fn default() -> Self {
		Self::new(DEFAULT_VALUE_FIELD, DEFAULT_TEXT_FIELD)
	}
}
