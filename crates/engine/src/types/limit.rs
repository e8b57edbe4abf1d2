use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// Upper bound on the number of filtered options produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct OptionsLimit(NonZeroUsize);

impl OptionsLimit {
	/// Limit applied when the caller does not configure one.
	pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(999));

	/// Build a limit, rejecting zero.
	#[must_use]
	pub fn new(limit: usize) -> Option<Self> {
		NonZeroUsize::new(limit).map(Self)
	}

	#[must_use]
	pub fn get(self) -> usize {
		self.0.get()
	}
}

impl Default for OptionsLimit {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl TryFrom<usize> for OptionsLimit {
	type Error = BoundaryError;

	fn try_from(limit: usize) -> Result<Self, Self::Error> {
		Self::new(limit).ok_or(BoundaryError::ZeroLimit)
	}
}

impl From<OptionsLimit> for usize {
	fn from(limit: OptionsLimit) -> Self {
		limit.get()
	}
}
