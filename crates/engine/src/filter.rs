//! Computing the options shown in the dropdown.

use crate::types::{CatalogOption, Fields, OptionsLimit, Selection};

/// Options to list for the current query and selection.
///
/// With no query and nothing selected this is simply the first `limit`
/// options. Otherwise options are scanned in order, skipping those whose text
/// does not contain `query` (case-insensitively) and those already selected,
/// and the scan stops as soon as `limit` options have been collected. The
/// result keeps the catalog order; it is not ranked.
#[must_use]
pub fn compute_filtered_options<'a>(
	options: &'a [CatalogOption],
	selection: &Selection,
	query: &str,
	limit: OptionsLimit,
	fields: &Fields,
) -> Vec<&'a CatalogOption> {
	let limit = limit.get();

	if query.is_empty() && selection.is_empty() {
		return options.iter().take(limit).collect();
	}

	let needle = query.to_lowercase();
	options
		.iter()
		.filter(|option| needle.is_empty() || option.text_contains(&needle, fields))
		.filter(|option| {
			option
				.value(fields)
				.is_none_or(|value| !selection.contains_id(value))
		})
		.take(limit)
		.collect()
}
