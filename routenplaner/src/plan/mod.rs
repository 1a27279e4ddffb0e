//! Itinerary assembly and rendering.
//!
//! Turns the flat segments produced by [`crate::efa::extract`] into
//! per-suggestion itineraries, renders them as text, and derives map
//! markers for the stops they touch.

mod assemble;
mod format;
mod markers;

pub use assemble::group_itineraries;
pub use format::format_plan;
pub use markers::{MapMarker, build_markers, station_names, station_names_from_json};
