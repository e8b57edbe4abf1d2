//! Per-instance component state for a multiselect widget.
//!
//! A rendering layer owns one [`Multiselect`] per mounted widget, forwards
//! user interactions to its handlers, re-renders from its view accessors and
//! relays the [`MultiselectEvent`]s it emits to the owning application.

mod blur;
mod config;
mod events;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use blur::{BLUR_CLOSE_DELAY, BlurClose};
pub use config::{DEFAULT_NO_RESULTS, MultiselectConfig};
pub use events::MultiselectEvent;
pub use state::Multiselect;
pub use view::Tag;
