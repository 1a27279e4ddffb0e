//! Mock EFA client for testing without network access.
//!
//! Loads recorded trip responses from XML files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{ClockTime, Diva};

use super::error::EfaError;

/// Mock EFA client that serves recorded responses from XML files.
///
/// Useful for development and tests: the files hold raw endpoint output,
/// so the extraction path is exercised exactly as with live data.
#[derive(Clone)]
pub struct MockEfaClient {
    /// Pre-loaded responses, keyed by `{origin}-{destination}`.
    responses: Arc<HashMap<String, String>>,
}

impl MockEfaClient {
    /// Create a new mock client by loading XML files from a directory.
    ///
    /// Expects files named `{origin}-{destination}.xml` with the DIVA
    /// identifiers of the two stops (e.g. `60200815-60201040.xml`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, EfaError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| EfaError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| EfaError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("xml") {
                continue;
            }

            // Key from filename (e.g. "60200815-60201040.xml")
            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| EfaError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let xml = std::fs::read_to_string(&path).map_err(|e| EfaError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            responses.insert(key.to_string(), xml);
        }

        if responses.is_empty() {
            return Err(EfaError::Api {
                status: 0,
                message: format!("No mock trip files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Request trip suggestions between two stops.
    ///
    /// Mimics the real `EfaClient::trip_request` interface. Date and time
    /// are ignored - mock data is static.
    pub async fn trip_request(
        &self,
        origin: Diva,
        destination: Diva,
        _date: NaiveDate,
        _time: ClockTime,
    ) -> Result<String, EfaError> {
        let key = format!("{}-{}", origin, destination);

        let xml = self.responses.get(&key).ok_or_else(|| EfaError::Api {
            status: 404,
            message: format!(
                "No mock trip for {}. Available: {:?}",
                key,
                self.available_pairs()
            ),
        })?;

        Ok(xml.clone())
    }

    /// List available origin-destination pairs in the mock data.
    pub fn available_pairs(&self) -> Vec<String> {
        let mut pairs: Vec<String> = self.responses.keys().cloned().collect();
        pairs.sort();
        pairs
    }
}
