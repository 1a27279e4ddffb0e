//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur while loading the station reference table.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Reading the table file failed
    #[error("failed to read station table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the table JSON
    #[error("failed to parse station table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation failure for a requested origin/destination pair.
///
/// Raised before any network request is made, so the caller can show the
/// user which side of the trip needs fixing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("unknown origin stop: {0}")]
    UnknownOrigin(String),

    #[error("unknown destination stop: {0}")]
    UnknownDestination(String),

    #[error("unknown origin and destination stops: {origin}, {destination}")]
    BothUnknown { origin: String, destination: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_error_display() {
        let err = EndpointError::UnknownOrigin("Nirgendwo".into());
        assert_eq!(err.to_string(), "unknown origin stop: Nirgendwo");

        let err = EndpointError::BothUnknown {
            origin: "A".into(),
            destination: "B".into(),
        };
        assert_eq!(err.to_string(), "unknown origin and destination stops: A, B");
    }
}
