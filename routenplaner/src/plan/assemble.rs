//! Grouping of flat segments into itineraries.

use crate::domain::{Itinerary, RouteSegment};

/// Group extracted segments into itineraries.
///
/// The extractor yields segments in document order with indices that
/// restart at 1 for each suggested trip. A segment with index 1 therefore
/// opens a new itinerary and every other segment extends the current one.
/// A leading segment without index 1 still opens an itinerary, so every
/// input segment ends up in exactly one itinerary in its original order.
pub fn group_itineraries(segments: Vec<RouteSegment>) -> Vec<Itinerary> {
    let mut itineraries: Vec<Itinerary> = Vec::new();

    for segment in segments {
        match itineraries.last_mut() {
            Some(current) if segment.index != 1 => current.segments.push(segment),
            _ => itineraries.push(Itinerary {
                segments: vec![segment],
            }),
        }
    }

    itineraries
}
