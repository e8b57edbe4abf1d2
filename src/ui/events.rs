use minisel_engine::{Fields, Selection};
use serde_json::{Value, json};

/// Notification the owner of a [`Multiselect`](super::Multiselect) must act on.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiselectEvent {
	/// The selection should be replaced with this one.
	Input(Selection),
	/// The owner should create an entry for the typed text.
	Create(String),
}

impl MultiselectEvent {
	/// Event name as seen by the owning application.
	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			Self::Input(_) => "input",
			Self::Create(_) => "create",
		}
	}

	/// JSON payload, with free-text tags written through `fields`.
	#[must_use]
	pub fn to_json(&self, fields: &Fields) -> Value {
		match self {
			Self::Input(selection) => json!({
				"event": self.name(),
				"value": selection.to_json(fields),
			}),
			Self::Create(query) => json!({
				"event": self.name(),
				"query": query,
			}),
		}
	}
}
