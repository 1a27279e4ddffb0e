//! Station name collection and map markers.
//!
//! Route segments mention stops by display name; the station table knows
//! their coordinates. This module bridges the two for map display.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Diva, RouteSegment};
use crate::efa::StopRef;
use crate::stations::{StationDirectory, strip_wien_prefix};

/// Collect the distinct station names mentioned by the segments' points.
///
/// First-seen document order; points without a name are skipped.
pub fn station_names(segments: &[RouteSegment]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for segment in segments {
        for point in &segment.points {
            if let Some(name) = &point.name {
                if seen.insert(name.clone()) {
                    names.push(name.clone());
                }
            }
        }
    }

    names
}

/// Collect distinct station names from a JSON array of segments.
///
/// Accepts the serialized form of [`RouteSegment`] so callers holding a
/// JSON hand-off need not rebuild the typed values themselves.
pub fn station_names_from_json(json: &str) -> Result<Vec<String>, serde_json::Error> {
    let segments: Vec<RouteSegment> = serde_json::from_str(json)?;
    Ok(station_names(&segments))
}

/// A map marker for one resolved stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
}

/// Build map markers for the stops a plan touches.
///
/// Each stop is resolved against the station table by name, with the
/// lookup tolerating a `Wien ` display prefix; when the name misses but
/// the response carried a stop id, that id is tried against the table's
/// DIVA column instead. One marker per resolved station, first-seen order,
/// deduplicated on the station's DIVA so mixed spellings of the same stop
/// collapse to a single marker. Stops the table does not know are skipped;
/// the marker title keeps the name exactly as the response spelled it.
pub fn build_markers(stop_refs: &[StopRef], directory: &StationDirectory) -> Vec<MapMarker> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();

    for stop in stop_refs {
        let Some(name) = stop.name.as_deref() else {
            continue;
        };

        let station = directory.get(strip_wien_prefix(name)).or_else(|| {
            stop.stop_id
                .as_deref()
                .and_then(|id| Diva::parse(id).ok())
                .and_then(|diva| directory.find_by_diva(diva))
        });

        match station {
            Some(station) => {
                if !seen.insert(station.diva) {
                    continue;
                }
                markers.push(MapMarker {
                    latitude: station.latitude,
                    longitude: station.longitude,
                    title: name.to_string(),
                    description: format!("DIVA {}", station.diva),
                });
            }
            None => tracing::debug!(name, "stop not in station table, skipping marker"),
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopPoint;

    fn segment_with_names(names: &[Option<&str>]) -> RouteSegment {
        RouteSegment {
            index: 1,
            duration_minutes: None,
            legs: Vec::new(),
            points: names
                .iter()
                .map(|name| StopPoint {
                    name: name.map(str::to_string),
                    stop_id: Some("60000001".to_string()),
                    platform: None,
                    time: None,
                })
                .collect(),
        }
    }

    fn test_directory() -> StationDirectory {
        StationDirectory::from_json_str(
            r#"[
                {"PlatformText": "Karlsplatz", "DIVA": 60200815, "Longitude": 16.369688, "Latitude": 48.200391},
                {"PlatformText": "Stephansplatz", "DIVA": 60201040, "Longitude": 16.372134, "Latitude": 48.208369}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn station_names_dedupe_in_first_seen_order() {
        let segments = vec![
            segment_with_names(&[Some("Karlsplatz"), Some("Stephansplatz")]),
            segment_with_names(&[Some("Stephansplatz"), None, Some("Schwedenplatz")]),
        ];

        assert_eq!(
            station_names(&segments),
            vec!["Karlsplatz", "Stephansplatz", "Schwedenplatz"]
        );
    }

    #[test]
    fn station_names_from_json_matches_typed_path() {
        let segments = vec![segment_with_names(&[
            Some("Karlsplatz"),
            Some("Stephansplatz"),
        ])];
        let json = serde_json::to_string(&segments).unwrap();

        assert_eq!(
            station_names_from_json(&json).unwrap(),
            station_names(&segments)
        );
    }

    #[test]
    fn station_names_from_json_rejects_malformed_input() {
        assert!(station_names_from_json("not json").is_err());
        assert!(station_names_from_json(r#"{"index": 1}"#).is_err());
    }

    #[test]
    fn markers_resolve_known_stops() {
        let directory = test_directory();
        let stop_refs = vec![
            StopRef {
                name: Some("Karlsplatz".to_string()),
                stop_id: Some("60200815".to_string()),
            },
            StopRef {
                name: Some("Stephansplatz".to_string()),
                stop_id: Some("60201040".to_string()),
            },
        ];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].title, "Karlsplatz");
        assert_eq!(markers[0].longitude, 16.369688);
        assert_eq!(markers[0].latitude, 48.200391);
        assert_eq!(markers[0].description, "DIVA 60200815");
    }

    #[test]
    fn markers_skip_unknown_and_unnamed_stops() {
        let directory = test_directory();
        let stop_refs = vec![
            StopRef {
                name: Some("Atlantis".to_string()),
                stop_id: None,
            },
            StopRef {
                name: None,
                stop_id: Some("60200815".to_string()),
            },
            StopRef {
                name: Some("Karlsplatz".to_string()),
                stop_id: Some("60200815".to_string()),
            },
        ];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Karlsplatz");
    }

    #[test]
    fn markers_dedupe_repeated_stops() {
        let directory = test_directory();
        let karlsplatz = StopRef {
            name: Some("Karlsplatz".to_string()),
            stop_id: Some("60200815".to_string()),
        };
        let stop_refs = vec![karlsplatz.clone(), karlsplatz];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn markers_tolerate_wien_display_prefix() {
        let directory = test_directory();
        let stop_refs = vec![StopRef {
            name: Some("Wien Karlsplatz".to_string()),
            stop_id: Some("60200815".to_string()),
        }];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 1);
        // The marker keeps the response spelling
        assert_eq!(markers[0].title, "Wien Karlsplatz");
        assert_eq!(markers[0].description, "DIVA 60200815");
    }

    #[test]
    fn markers_dedupe_across_wien_prefix_spellings() {
        // Header points say "Wien Karlsplatz", stop-sequence points say
        // "Karlsplatz"; both resolve to the same station and must yield
        // one marker
        let directory = test_directory();
        let stop_refs = vec![
            StopRef {
                name: Some("Wien Karlsplatz".to_string()),
                stop_id: Some("60200815".to_string()),
            },
            StopRef {
                name: Some("Karlsplatz".to_string()),
                stop_id: Some("60200815".to_string()),
            },
        ];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Wien Karlsplatz");
        assert_eq!(markers[0].description, "DIVA 60200815");
    }

    #[test]
    fn markers_fall_back_to_stop_id_when_name_unknown() {
        let directory = test_directory();
        let stop_refs = vec![StopRef {
            name: Some("Karlsplatz (Oper)".to_string()),
            stop_id: Some("60200815".to_string()),
        }];

        let markers = build_markers(&stop_refs, &directory);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Karlsplatz (Oper)");
        assert_eq!(markers[0].description, "DIVA 60200815");
        assert_eq!(markers[0].longitude, 16.369688);
    }

    #[test]
    fn marker_serializes_with_plain_field_names() {
        let marker = MapMarker {
            latitude: 48.200391,
            longitude: 16.369688,
            title: "Karlsplatz".to_string(),
            description: "DIVA 60200815".to_string(),
        };

        let json = serde_json::to_string(&marker).unwrap();
        assert!(json.contains("\"latitude\""));
        assert!(json.contains("\"longitude\""));
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"description\""));
    }
}
