//! Geolocation Config

use clap::Args;

/// IP geolocation lookup settings.
#[derive(Debug, Args)]
pub struct GeolocationConfig {
    /// Geolocation lookup service base URL
    #[arg(long, env = "GEO_BASE_URL", default_value = "http://ip-api.com/json")]
    pub base_url: String,
}
