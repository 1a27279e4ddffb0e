//! EFA client error types.

use std::fmt;

/// Errors from the EFA HTTP client.
#[derive(Debug)]
pub enum EfaError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// API returned an error status code
    Api { status: u16, message: String },
}

impl fmt::Display for EfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfaError::Http(e) => write!(f, "HTTP error: {e}"),
            EfaError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for EfaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EfaError::Http(e) => Some(e),
            EfaError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for EfaError {
    fn from(err: reqwest::Error) -> Self {
        EfaError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EfaError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = EfaError::Api {
            status: 0,
            message: "no mock data".into(),
        };
        assert_eq!(err.to_string(), "API error 0: no mock data");
    }
}
