//! Route record types.
//!
//! These represent the structured output of itinerary extraction: a flat,
//! ordered list of route segments that the assembler later groups into
//! complete itineraries. The records serialize to JSON so a rendering layer
//! can consume them without touching the XML.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// One mode-of-transport annotation on a route segment.
///
/// A segment can carry several of these (for example where the payload
/// annotates a mode change within one segment). Field values come from the
/// source attributes; `mode`, `name` and `destination` fall back to the
/// literal `"N/A"` when the attribute is missing or empty, `short_name` and
/// `symbol` fall back to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportLeg {
    /// Mode tag, e.g. bus/tram/U-Bahn.
    pub mode: String,
    /// Line name.
    pub name: String,
    /// Short line name.
    pub short_name: String,
    /// Icon symbol.
    pub symbol: String,
    /// Destination label shown on the vehicle.
    pub destination: String,
}

/// One stop reference within a route segment.
///
/// All fields are optional: absent source attributes stay absent here and
/// are rendered as `"N/A"` only at formatting time. A time is also absent
/// when the source carried the "no time available" sentinel 00:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPoint {
    pub name: Option<String>,
    pub stop_id: Option<String>,
    pub platform: Option<String>,
    pub time: Option<ClockTime>,
}

/// One segment of an itinerary.
///
/// `index` is the 1-based position within the segment's source block and
/// restarts at 1 for every outer route-list block; the assembler relies on
/// that restart to find itinerary boundaries. `duration_minutes` is either
/// the payload's explicit duration or a value inferred from stop times, and
/// absent when neither is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub index: u32,
    pub duration_minutes: Option<u32>,
    pub legs: Vec<TransportLeg>,
    pub points: Vec<StopPoint>,
}

/// One complete suggested trip: a contiguous run of segments.
///
/// Produced by [`crate::plan::group_itineraries`], which guarantees every
/// itinerary holds at least one segment and that itineraries partition the
/// flat segment list in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub segments: Vec<RouteSegment>,
}
