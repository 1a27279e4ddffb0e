//! Stop identifier types.

use std::fmt;

/// Error returned when parsing an invalid DIVA identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid DIVA: {reason}")]
pub struct InvalidDiva {
    reason: &'static str,
}

/// A valid DIVA stop identifier.
///
/// DIVA numbers are the routing API's stable identifiers for stops. They are
/// always positive; the reference data uses `0` as its own "no such stop"
/// marker, so zero is rejected at construction and any `Diva` value can be
/// trusted to name a real stop.
///
/// # Examples
///
/// ```
/// use routenplaner::domain::Diva;
///
/// let diva = Diva::parse("60200815").unwrap();
/// assert_eq!(diva.get(), 60200815);
/// assert_eq!(diva.to_string(), "60200815");
///
/// // Zero is the not-found marker, never a real stop
/// assert!(Diva::parse("0").is_err());
/// assert!(Diva::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diva(u32);

impl Diva {
    /// Create a DIVA from a raw number.
    ///
    /// Rejects zero, which the reference data reserves as a sentinel.
    pub fn new(id: u32) -> Result<Self, InvalidDiva> {
        if id == 0 {
            return Err(InvalidDiva {
                reason: "zero is the not-found marker",
            });
        }
        Ok(Diva(id))
    }

    /// Parse a DIVA from a decimal string.
    pub fn parse(s: &str) -> Result<Self, InvalidDiva> {
        let id: u32 = s.parse().map_err(|_| InvalidDiva {
            reason: "must be a decimal number",
        })?;
        Self::new(id)
    }

    /// Returns the raw numeric identifier.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Diva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diva({})", self.0)
    }
}

impl fmt::Display for Diva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
