//! IP geolocation client.
//!
//! A thin JSON client for an ip-api style lookup service: IP in, country
//! code and timezone out. The locale fallback chain lives with the HTTP
//! handler; this module only resolves addresses.

use std::net::IpAddr;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Configuration for the geolocation lookup service.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    /// Lookup service base URL, e.g. `"http://ip-api.com/json"`.
    pub base_url: String,
}

/// What the lookup service resolved for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 country code, e.g. `"GB"`.
    pub country_code: String,

    /// IANA timezone name, e.g. `"Europe/London"`.
    pub timezone: Option<String>,
}

/// Errors that can occur during a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeoError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup service could not resolve the address.
    #[error("address could not be resolved: {0}")]
    Unresolved(String),
}

/// HTTP client for the geolocation lookup service.
#[derive(Debug, Clone)]
pub struct HttpGeoClient {
    config: GeoConfig,
    http: Client,
}

impl HttpGeoClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: GeoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl GeoService for HttpGeoClient {
    async fn lookup(&self, ip: IpAddr) -> Result<GeoLocation, GeoError> {
        let url = format!(
            "{}/{ip}?fields=status,message,countryCode,timezone",
            self.config.base_url
        );

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();

            return Err(GeoError::Unresolved(format!(
                "lookup request failed with status {status}"
            )));
        }

        let parsed: LookupResponse = response.json().await?;

        if parsed.status != "success" {
            return Err(GeoError::Unresolved(
                parsed.message.unwrap_or_else(|| "unknown failure".to_string()),
            ));
        }

        let country_code = parsed
            .country_code
            .ok_or_else(|| GeoError::Unresolved("response carried no country code".to_string()))?;

        Ok(GeoLocation {
            country_code,
            timezone: parsed.timezone,
        })
    }
}

/// Resolve an IP address to a coarse location.
#[automock]
#[async_trait]
pub trait GeoService: Send + Sync {
    async fn lookup(&self, ip: IpAddr) -> Result<GeoLocation, GeoError>;
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    message: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    timezone: Option<String>,
}
