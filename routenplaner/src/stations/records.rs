//! Station reference table DTOs.

use serde::{Deserialize, Serialize};

/// One row of the stop reference table.
///
/// The table ships as a JSON array using the upstream export's field names;
/// `DIVA` is fully capitalized there, so it needs its own rename.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    /// Platform display name, used as the lookup key.
    pub platform_text: String,
    /// Numeric stop identifier. The export uses 0 for "unknown".
    #[serde(rename = "DIVA")]
    pub diva: u32,
    pub longitude: f64,
    pub latitude: f64,
}
