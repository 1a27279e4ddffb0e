//! Itinerary extraction from EFA trip responses.
//!
//! The trip endpoint answers with an XML document whose route suggestions
//! live in repeated `itdPartialRouteList` blocks. Each block holds
//! `itdPartialRoute` elements (the segments of one suggested trip), which in
//! turn carry transport legs, an optional explicit duration, and the stop
//! points with their times. This module walks that structure with a
//! streaming reader and produces flat [`RouteSegment`] records; grouping
//! into itineraries happens later in [`crate::plan`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::domain::{ClockTime, RouteSegment, StopPoint, TransportLeg};

/// How to treat the leading stop points of each segment.
///
/// The payload opens every segment with two points describing the boarding
/// situation rather than ride stops. Whether they belong in the output
/// depends on the consumer, and the choice changes behavior for short
/// segments, so it is explicit configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingPointPolicy {
    /// Keep every point; duration fallback uses the first and second
    /// point times.
    KeepAll,
    /// Drop the first two points of each segment as boarding metadata;
    /// duration fallback uses the first and last kept point times.
    #[default]
    SkipBoarding,
}

/// Extraction configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub leading_points: LeadingPointPolicy,
}

/// A flat reference to one kept stop point, for map display.
///
/// Duplicates are preserved in document order; deduplication is the marker
/// builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRef {
    pub name: Option<String>,
    pub stop_id: Option<String>,
}

/// Result of one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Segments in document order, with indices restarting at 1 for each
    /// route-list block.
    pub segments: Vec<RouteSegment>,
    /// Kept stop points of all segments, flattened in document order.
    pub stop_refs: Vec<StopRef>,
}

/// Errors from itinerary extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The document contains no route-list block at all. Distinct from a
    /// present-but-empty block, which extracts to zero segments.
    #[error("no route list found in response")]
    RouteListMissing,

    /// The document is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract route segments from an EFA trip response.
///
/// Pure function of its inputs: the same document and options always yield
/// the same output. A single missing or malformed attribute degrades to
/// that field's documented default and never aborts the rest of the
/// document.
///
/// # Examples
///
/// ```
/// use routenplaner::efa::{ExtractOptions, LeadingPointPolicy, extract};
///
/// let xml = r#"
/// <itdPartialRouteList>
///   <itdPartialRoute>
///     <itdMeansOfTransport type="U-Bahn" name="U1" shortName="U1" symbol="U1" destination="Leopoldau"/>
///     <itdDuration timeMinute="4"/>
///     <itdPoint name="Karlsplatz" stopID="60200815" platform="2">
///       <itdDateTime><itdTime hour="8" minute="0"/></itdDateTime>
///     </itdPoint>
///   </itdPartialRoute>
/// </itdPartialRouteList>"#;
///
/// let options = ExtractOptions {
///     leading_points: LeadingPointPolicy::KeepAll,
/// };
/// let extraction = extract(xml, &options).unwrap();
///
/// assert_eq!(extraction.segments.len(), 1);
/// assert_eq!(extraction.segments[0].index, 1);
/// assert_eq!(extraction.segments[0].duration_minutes, Some(4));
/// assert_eq!(extraction.segments[0].legs[0].name, "U1");
/// ```
pub fn extract(xml: &str, options: &ExtractOptions) -> Result<Extraction, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut segments: Vec<RouteSegment> = Vec::new();
    let mut stop_refs: Vec<StopRef> = Vec::new();

    let mut route_list_seen = false;
    let mut in_route_list = false;
    let mut block_index: u32 = 0;
    let mut segment: Option<SegmentBuilder> = None;
    let mut point: Option<StopPoint> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"itdPartialRouteList" => {
                    route_list_seen = true;
                    in_route_list = true;
                    block_index = 0;
                }
                b"itdPartialRoute" if in_route_list => {
                    block_index += 1;
                    segment = Some(SegmentBuilder::new(block_index));
                }
                b"itdMeansOfTransport" => {
                    if let Some(seg) = segment.as_mut() {
                        seg.legs.push(leg_from_attrs(&e));
                    }
                }
                b"itdDuration" => {
                    if let Some(seg) = segment.as_mut() {
                        seg.note_duration(&e);
                    }
                }
                b"itdPoint" => {
                    if segment.is_some() {
                        point = Some(point_from_attrs(&e));
                    }
                }
                b"itdTime" => {
                    if let Some(p) = point.as_mut() {
                        if p.time.is_none() {
                            p.time = time_from_attrs(&e);
                        }
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"itdPartialRouteList" => route_list_seen = true,
                b"itdPartialRoute" if in_route_list => {
                    block_index += 1;
                    let empty = SegmentBuilder::new(block_index);
                    segments.push(empty.finish(options.leading_points, &mut stop_refs));
                }
                b"itdMeansOfTransport" => {
                    if let Some(seg) = segment.as_mut() {
                        seg.legs.push(leg_from_attrs(&e));
                    }
                }
                b"itdDuration" => {
                    if let Some(seg) = segment.as_mut() {
                        seg.note_duration(&e);
                    }
                }
                b"itdPoint" => {
                    if let Some(seg) = segment.as_mut() {
                        seg.points.push(point_from_attrs(&e));
                    }
                }
                b"itdTime" => {
                    if let Some(p) = point.as_mut() {
                        if p.time.is_none() {
                            p.time = time_from_attrs(&e);
                        }
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"itdPartialRouteList" => in_route_list = false,
                b"itdPartialRoute" => {
                    if let Some(seg) = segment.take() {
                        segments.push(seg.finish(options.leading_points, &mut stop_refs));
                    }
                }
                b"itdPoint" => {
                    if let Some(p) = point.take() {
                        if let Some(seg) = segment.as_mut() {
                            seg.points.push(p);
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !route_list_seen {
        return Err(ExtractError::RouteListMissing);
    }

    Ok(Extraction { segments, stop_refs })
}

/// Accumulator for one segment while its block is being read.
struct SegmentBuilder {
    index: u32,
    duration_minutes: Option<u32>,
    legs: Vec<TransportLeg>,
    points: Vec<StopPoint>,
}

impl SegmentBuilder {
    fn new(index: u32) -> Self {
        Self {
            index,
            duration_minutes: None,
            legs: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Record an explicit duration; the first parseable `timeMinute` wins.
    fn note_duration(&mut self, e: &BytesStart<'_>) {
        if self.duration_minutes.is_some() {
            return;
        }
        if let Some(minutes) = attr_value(e, b"timeMinute").and_then(|v| v.parse().ok()) {
            self.duration_minutes = Some(minutes);
        }
    }

    /// Close the segment: apply the leading-point policy, fill in the
    /// duration fallback, and record the kept points as stop references.
    fn finish(self, policy: LeadingPointPolicy, stop_refs: &mut Vec<StopRef>) -> RouteSegment {
        let SegmentBuilder {
            index,
            duration_minutes,
            legs,
            points,
        } = self;

        let (points, fallback_start, fallback_end) = match policy {
            LeadingPointPolicy::KeepAll => {
                let start = points.first().and_then(|p| p.time);
                let end = points.get(1).and_then(|p| p.time);
                (points, start, end)
            }
            LeadingPointPolicy::SkipBoarding => {
                let kept: Vec<StopPoint> = points.into_iter().skip(2).collect();
                let start = kept.first().and_then(|p| p.time);
                let end = kept.last().and_then(|p| p.time);
                (kept, start, end)
            }
        };

        // An explicit duration always wins; stop times only fill absence.
        let duration_minutes = duration_minutes.or_else(|| match (fallback_start, fallback_end) {
            (Some(start), Some(end)) => Some(start.minutes_until(end)),
            _ => None,
        });

        for p in &points {
            stop_refs.push(StopRef {
                name: p.name.clone(),
                stop_id: p.stop_id.clone(),
            });
        }

        RouteSegment {
            index,
            duration_minutes,
            legs,
            points,
        }
    }
}

/// Build a transport leg from an `itdMeansOfTransport` element.
fn leg_from_attrs(e: &BytesStart<'_>) -> TransportLeg {
    TransportLeg {
        mode: attr_or_na(e, b"type"),
        name: attr_or_na(e, b"name"),
        short_name: attr_value(e, b"shortName").unwrap_or_default(),
        symbol: attr_value(e, b"symbol").unwrap_or_default(),
        destination: attr_or_na(e, b"destination"),
    }
}

/// Build a stop point from an `itdPoint` element's attributes.
///
/// The time stays empty here; it is filled by the first usable `itdTime`
/// child while the point is open.
fn point_from_attrs(e: &BytesStart<'_>) -> StopPoint {
    StopPoint {
        name: attr_value(e, b"name"),
        stop_id: attr_value(e, b"stopID"),
        platform: attr_value(e, b"platform"),
        time: None,
    }
}

/// Read a time candidate from an `itdTime` element.
///
/// Returns `None` when either attribute is missing, unparseable or out of
/// range, and for exactly 00:00, which the payload uses for "no time
/// available".
fn time_from_attrs(e: &BytesStart<'_>) -> Option<ClockTime> {
    let hour: u32 = attr_value(e, b"hour")?.parse().ok()?;
    let minute: u32 = attr_value(e, b"minute")?.parse().ok()?;
    let time = ClockTime::from_hm(hour, minute)?;
    if time.is_midnight() { None } else { Some(time) }
}

/// Look up an attribute by local name, ignoring malformed attributes.
fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name {
            return attr.unescape_value().ok().map(|v| v.into_owned());
        }
    }
    None
}

/// Attribute value, substituting `"N/A"` when missing or empty.
fn attr_or_na(e: &BytesStart<'_>, name: &[u8]) -> String {
    match attr_value(e, name) {
        Some(v) if !v.is_empty() => v,
        _ => "N/A".to_string(),
    }
}
