//! Wiener Linien EFA routing client.
//!
//! This module provides an HTTP client for the EFA trip endpoint used by
//! Wiener Linien, plus the extraction of route segments from its XML
//! responses.
//!
//! Key characteristics of the endpoint:
//! - A trip query is a single GET against `XML_TRIP_REQUEST2`; stops are
//!   addressed by **DIVA** identifier with `stopID` typing
//! - Route suggestions arrive as repeated `itdPartialRouteList` blocks,
//!   each holding the `itdPartialRoute` segments of one suggestion
//! - Stop times come as separate `hour`/`minute` attributes, with exactly
//!   00:00 standing in for "no time available"
//! - The first two points of every segment describe the boarding situation
//!   rather than ride stops; [`LeadingPointPolicy`] decides their fate

mod client;
mod error;
mod extract;
mod mock;

pub use client::{EfaClient, EfaConfig};
pub use error::EfaError;
pub use extract::{
    ExtractError, ExtractOptions, Extraction, LeadingPointPolicy, StopRef, extract,
};
pub use mock::MockEfaClient;
