//! Station reference directory.
//!
//! Provides platform name → DIVA/coordinate mapping, loaded once at
//! startup from the bundled stop reference table and read-only afterwards.

mod directory;
mod error;
mod records;

pub use directory::{Station, StationDirectory, strip_wien_prefix};
pub use error::{DirectoryError, EndpointError};
pub use records::StationRecord;
