//! Vienna public transit trip planner core.
//!
//! Resolves stop names against the Wiener Linien station table, fetches
//! trip suggestions from the EFA routing service, and turns the XML
//! answers into structured itineraries with a plain-text rendering.

pub mod domain;
pub mod efa;
pub mod plan;
pub mod stations;
