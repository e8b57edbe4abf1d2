//! Transient dropdown state: the search query and the open flag.

/// Query text and open flag for one widget instance.
///
/// The two are reset together: every transition to closed also clears the
/// query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
	query: String,
	open: bool,
}

impl DropdownState {
	/// A closed dropdown with an empty query.
	#[must_use]
	pub fn closed() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn open(&mut self) {
		self.open = true;
	}

	/// Open a closed dropdown, or close an open one.
	pub fn toggle(&mut self) {
		if self.open {
			self.clear();
		} else {
			self.open = true;
		}
	}

	/// Replace the search query. The open flag is left alone.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	/// Close the dropdown and clear the query.
	pub fn clear(&mut self) {
		*self = Self::closed();
	}
}
