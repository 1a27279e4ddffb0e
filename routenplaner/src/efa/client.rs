//! EFA trip request client.
//!
//! Issues trip queries against the Wiener Linien EFA routing endpoint and
//! returns the raw XML body. Parsing lives in [`super::extract`] so that
//! recorded responses can go through the identical code path.

use chrono::NaiveDate;

use crate::domain::{ClockTime, Diva};

use super::error::EfaError;

/// Default base URL for the Wiener Linien EFA routing service.
const DEFAULT_BASE_URL: &str = "http://www.wienerlinien.at/ogd_routing";

/// Configuration for the EFA client.
#[derive(Debug, Clone)]
pub struct EfaConfig {
    /// Base URL for the routing service (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EfaConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EfaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// EFA routing API client.
///
/// The endpoint is anonymous; a trip query is a single GET whose answer is
/// an XML document regardless of outcome, so anything non-2xx is surfaced
/// with its body for diagnosis.
#[derive(Debug, Clone)]
pub struct EfaClient {
    http: reqwest::Client,
    base_url: String,
}

impl EfaClient {
    /// Create a new EFA client with the given configuration.
    pub fn new(config: EfaConfig) -> Result<Self, EfaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Request trip suggestions between two stops.
    ///
    /// Both endpoints are addressed by DIVA identifier. Returns the raw XML
    /// response body; feed it to [`super::extract`] to obtain segments.
    pub async fn trip_request(
        &self,
        origin: Diva,
        destination: Diva,
        date: NaiveDate,
        time: ClockTime,
    ) -> Result<String, EfaError> {
        let url = format!("{}/XML_TRIP_REQUEST2", self.base_url);

        tracing::debug!(origin = %origin, destination = %destination, "requesting trip");

        let response = self
            .http
            .get(&url)
            .query(&trip_query_params(origin, destination, date, time))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EfaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Query parameters for a trip request.
///
/// `stopID` addressing with the DIVA as the name is the only combination
/// the endpoint resolves unambiguously; free-text names go through a
/// disambiguation dialogue this client does not speak.
fn trip_query_params(
    origin: Diva,
    destination: Diva,
    date: NaiveDate,
    time: ClockTime,
) -> [(&'static str, String); 7] {
    [
        ("type_origin", "stopID".to_string()),
        ("name_origin", origin.to_string()),
        ("type_destination", "stopID".to_string()),
        ("name_destination", destination.to_string()),
        ("itdDate", date.format("%Y%m%d").to_string()),
        ("itdTime", format!("{:02}{:02}", time.hour(), time.minute())),
        ("outputFormat", "XML".to_string()),
    ]
}
