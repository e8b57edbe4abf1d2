use thiserror::Error;

/// Errors raised while turning caller-supplied JSON into engine types.
///
/// The engine operations themselves never fail; only documents whose overall
/// shape is unusable are rejected here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
	/// The options document was not a JSON array.
	#[error("options must be a JSON array, found {found}")]
	OptionsNotArray { found: &'static str },

	/// The selection document was not a JSON array.
	#[error("selection must be a JSON array, found {found}")]
	SelectionNotArray { found: &'static str },

	/// An options limit of zero was supplied.
	#[error("options limit must be at least 1")]
	ZeroLimit,
}

/// Name of a JSON value's kind for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "a boolean",
		serde_json::Value::Number(_) => "a number",
		serde_json::Value::String(_) => "a string",
		serde_json::Value::Array(_) => "an array",
		serde_json::Value::Object(_) => "an object",
	}
}
