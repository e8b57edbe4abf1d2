//! Option filtering and selection state for multiselect widgets.
//!
//! The crate knows nothing about rendering. A rendering layer hands it the
//! catalog of options, the current selection and the search query, and gets
//! back plain data: the options to list, or the selection it should emit.
//!
//! ```
//! use minisel_engine::{CatalogOption, Fields, Selection, SelectionEngine};
//! use serde_json::json;
//!
//! let fields = Fields::default();
//! let options = CatalogOption::list_from_json(
//! 	json!([{"id": 1, "name": "Harry"}, {"id": 2, "name": "Sjaak"}]),
//! 	&fields,
//! )
//! .unwrap();
//! let engine = SelectionEngine::new(fields);
//! let filtered = engine.filtered_options(&options, &Selection::new(), "ha");
//! assert_eq!(filtered.len(), 1);
//! ```

pub mod dropdown;
pub mod engine;
pub mod error;
pub mod filter;
pub mod ops;
pub mod types;

pub use dropdown::DropdownState;
pub use engine::SelectionEngine;
pub use error::BoundaryError;
pub use filter::compute_filtered_options;
pub use ops::{
	AddAction, CreateMode, EnterAction, IgnoreReason, add_option, clear_dropdown, input_enter,
	pick_option, remove_option,
};
pub use types::{CatalogOption, Fields, OptionsLimit, Selection, SelectionEntry, same_id};
