//! Core crate exports for embedding the `minisel` multiselect component.
//!
//! Filtering and selection rules live in [`minisel_engine`]; this crate adds
//! the per-instance component state a rendering layer drives, plus the
//! logging and directory helpers used by the `minisel` binary.

pub mod app_dirs;
pub mod logging;
pub mod ui;

pub use minisel_engine as engine;
pub use minisel_engine::{
	AddAction, BoundaryError, CatalogOption, CreateMode, DropdownState, EnterAction, Fields,
	IgnoreReason, OptionsLimit, Selection, SelectionEngine, SelectionEntry,
};
pub use ui::{
	BLUR_CLOSE_DELAY, BlurClose, DEFAULT_NO_RESULTS, Multiselect, MultiselectConfig,
	MultiselectEvent, Tag,
};
