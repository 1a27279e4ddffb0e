//! Stop name lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use crate::domain::Diva;

use super::error::{DirectoryError, EndpointError};
use super::records::StationRecord;

/// A stop from the reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Platform display name (the lookup key).
    pub name: String,
    /// Numeric stop identifier.
    pub diva: Diva,
    pub longitude: f64,
    pub latitude: f64,
}

/// Immutable stop name → station lookup.
///
/// Built once at startup from the reference table and only read afterwards.
/// Lookup is an exact, case-sensitive match on the platform name; callers
/// that hold names with a leading "Wien " prefix strip it themselves via
/// [`strip_wien_prefix`] before looking up.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: HashMap<String, Station>,
}

impl StationDirectory {
    /// Build a directory from reference table records.
    ///
    /// Records whose DIVA is the 0 sentinel are skipped; they cannot name a
    /// real stop. On duplicate platform names the first record wins.
    pub fn from_records(records: Vec<StationRecord>) -> Self {
        let mut stations = HashMap::with_capacity(records.len());

        for record in records {
            let diva = match Diva::new(record.diva) {
                Ok(diva) => diva,
                Err(_) => {
                    tracing::warn!(name = %record.platform_text, "skipping record with sentinel DIVA");
                    continue;
                }
            };

            match stations.entry(record.platform_text.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(Station {
                        name: record.platform_text,
                        diva,
                        longitude: record.longitude,
                        latitude: record.latitude,
                    });
                }
                Entry::Occupied(_) => {
                    tracing::warn!(name = %record.platform_text, "duplicate platform name, keeping first");
                }
            }
        }

        Self { stations }
    }

    /// Build a directory from the reference table's JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<StationRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Build a directory from a reference table file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_str(&json)?;
        tracing::debug!(count = directory.len(), path = %path.display(), "loaded station table");
        Ok(directory)
    }

    /// Look up the full station record for a platform name.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Resolve a platform name to its stop identifier.
    pub fn resolve_diva(&self, name: &str) -> Option<Diva> {
        self.stations.get(name).map(|s| s.diva)
    }

    /// Resolve a platform name to its `(longitude, latitude)` pair.
    ///
    /// Field order follows the reference table's own field names.
    pub fn coordinates(&self, name: &str) -> Option<(f64, f64)> {
        self.stations.get(name).map(|s| (s.longitude, s.latitude))
    }

    /// Check if a platform name exists in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Look up a station by its stop identifier.
    ///
    /// The table is keyed by platform name; this scans the values and is
    /// meant for the occasional fallback when a response spells a stop
    /// name the table does not know, not for hot-path resolution.
    pub fn find_by_diva(&self, diva: Diva) -> Option<&Station> {
        self.stations.values().find(|s| s.diva == diva)
    }

    /// Number of stops in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Resolve an origin/destination pair, reporting which side is unknown.
    ///
    /// Called before any trip request goes out, so a typo never reaches the
    /// routing API.
    pub fn validate_endpoints(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<(Diva, Diva), EndpointError> {
        match (self.resolve_diva(origin), self.resolve_diva(destination)) {
            (Some(from), Some(to)) => Ok((from, to)),
            (None, Some(_)) => Err(EndpointError::UnknownOrigin(origin.to_string())),
            (Some(_), None) => Err(EndpointError::UnknownDestination(destination.to_string())),
            (None, None) => Err(EndpointError::BothUnknown {
                origin: origin.to_string(),
                destination: destination.to_string(),
            }),
        }
    }
}

/// Strip a leading "Wien " prefix from a stop name.
///
/// The routing API labels stops city-first ("Wien Karlsplatz") while the
/// reference table stores bare platform names ("Karlsplatz"). This is an
/// explicit caller-side step; directory lookups themselves never normalize.
///
/// # Examples
///
/// ```
/// use routenplaner::stations::strip_wien_prefix;
///
/// assert_eq!(strip_wien_prefix("Wien Karlsplatz"), "Karlsplatz");
/// assert_eq!(strip_wien_prefix("Karlsplatz"), "Karlsplatz");
/// ```
pub fn strip_wien_prefix(name: &str) -> &str {
    name.strip_prefix("Wien ").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(name: &str, diva: u32, longitude: f64, latitude: f64) -> StationRecord {
        StationRecord {
            platform_text: name.to_string(),
            diva,
            longitude,
            latitude,
        }
    }

    fn sample_directory() -> StationDirectory {
        StationDirectory::from_records(vec![
            record("Karlsplatz", 60200815, 16.369688, 48.200391),
            record("Stephansplatz", 60201040, 16.372134, 48.208369),
            record("Westbahnhof", 60201468, 16.337081, 48.196534),
        ])
    }

    #[test]
    fn resolve_known_name() {
        let directory = sample_directory();
        let diva = directory.resolve_diva("Karlsplatz").unwrap();
        assert_eq!(diva.get(), 60200815);
    }

    #[test]
    fn resolve_unknown_name() {
        let directory = sample_directory();
        assert_eq!(directory.resolve_diva("Nirgendwo"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let directory = sample_directory();
        assert!(directory.contains("Karlsplatz"));
        assert!(!directory.contains("karlsplatz"));
        assert!(!directory.contains("KARLSPLATZ"));
    }

    #[test]
    fn lookup_does_not_normalize_prefixes() {
        let directory = sample_directory();
        assert!(!directory.contains("Wien Karlsplatz"));
        assert!(directory.contains(strip_wien_prefix("Wien Karlsplatz")));
    }

    #[test]
    fn coordinates_keep_table_field_order() {
        let directory = sample_directory();
        let (longitude, latitude) = directory.coordinates("Karlsplatz").unwrap();
        assert!((longitude - 16.369688).abs() < 1e-9);
        assert!((latitude - 48.200391).abs() < 1e-9);
    }

    #[test]
    fn find_by_diva_scans_the_table() {
        let directory = sample_directory();
        let station = directory.find_by_diva(Diva::new(60201040).unwrap()).unwrap();
        assert_eq!(station.name, "Stephansplatz");
        assert!(directory.find_by_diva(Diva::new(12345678).unwrap()).is_none());
    }

    #[test]
    fn sentinel_diva_records_are_skipped() {
        let directory = StationDirectory::from_records(vec![
            record("Karlsplatz", 60200815, 16.37, 48.2),
            record("Kaputt", 0, 16.0, 48.0),
        ]);
        assert_eq!(directory.len(), 1);
        assert!(!directory.contains("Kaputt"));
    }

    #[test]
    fn duplicate_names_keep_first() {
        let directory = StationDirectory::from_records(vec![
            record("Karlsplatz", 60200815, 16.37, 48.2),
            record("Karlsplatz", 99999999, 0.0, 0.0),
        ]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve_diva("Karlsplatz").unwrap().get(), 60200815);
    }

    #[test]
    fn validate_endpoints_ok() {
        let directory = sample_directory();
        let (from, to) = directory
            .validate_endpoints("Karlsplatz", "Stephansplatz")
            .unwrap();
        assert_eq!(from.get(), 60200815);
        assert_eq!(to.get(), 60201040);
    }

    #[test]
    fn validate_endpoints_reports_which_side() {
        let directory = sample_directory();

        assert_eq!(
            directory.validate_endpoints("Nirgendwo", "Stephansplatz"),
            Err(EndpointError::UnknownOrigin("Nirgendwo".into()))
        );
        assert_eq!(
            directory.validate_endpoints("Karlsplatz", "Nirgendwo"),
            Err(EndpointError::UnknownDestination("Nirgendwo".into()))
        );
        assert_eq!(
            directory.validate_endpoints("Hier", "Dort"),
            Err(EndpointError::BothUnknown {
                origin: "Hier".into(),
                destination: "Dort".into(),
            })
        );
    }

    #[test]
    fn from_json_str_parses_table() {
        let json = r#"[
            {"PlatformText": "Karlsplatz", "DIVA": 60200815, "Longitude": 16.37, "Latitude": 48.2}
        ]"#;
        let directory = StationDirectory::from_json_str(json).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.contains("Karlsplatz"));
    }

    #[test]
    fn from_json_str_rejects_malformed() {
        assert!(StationDirectory::from_json_str("not json").is_err());
        assert!(StationDirectory::from_json_str("{\"PlatformText\": \"x\"}").is_err());
    }

    #[test]
    fn from_json_file_loads_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haltestellen.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"PlatformText": "Stephansplatz", "DIVA": 60201040, "Longitude": 16.372, "Latitude": 48.208}}]"#
        )
        .unwrap();

        let directory = StationDirectory::from_json_file(&path).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(
            directory.resolve_diva("Stephansplatz").unwrap().get(),
            60201040
        );
    }

    #[test]
    fn from_json_file_missing_is_io_error() {
        let result = StationDirectory::from_json_file("/no/such/haltestellen.json");
        assert!(matches!(result, Err(DirectoryError::Io { .. })));
    }

    #[test]
    fn strip_prefix_cases() {
        assert_eq!(strip_wien_prefix("Wien Westbahnhof"), "Westbahnhof");
        assert_eq!(strip_wien_prefix("Westbahnhof"), "Westbahnhof");
        // Only the exact "Wien " prefix is stripped
        assert_eq!(strip_wien_prefix("Wien"), "Wien");
        assert_eq!(strip_wien_prefix("Wiener Linien"), "Wiener Linien");
        assert_eq!(strip_wien_prefix("Wien  Mitte"), " Mitte");
    }
}
