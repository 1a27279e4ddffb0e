//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent
//! transit data. The identifier and time types enforce their invariants at
//! construction, so code that receives a [`Diva`] or [`ClockTime`] can
//! trust its validity; the route records are plain data shaped by the
//! extractor.

mod diva;
mod route;
mod time;

pub use diva::{Diva, InvalidDiva};
pub use route::{Itinerary, RouteSegment, StopPoint, TransportLeg};
pub use time::{ClockTime, TimeError};
