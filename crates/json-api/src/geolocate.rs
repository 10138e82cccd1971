//! Geolocation Handler

use std::{net::IpAddr, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use vacfinder_app::domain::regions::Region;

use crate::{extensions::*, state::State};

/// Geolocation response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GeolocateResponse {
    /// ISO 3166-1 alpha-2 country code, when the address resolved
    pub country_code: Option<String>,

    /// Region serving the client
    pub region: String,

    /// Canonical currency for that region
    pub currency: String,

    /// IANA timezone name, when the address resolved
    pub timezone: Option<String>,
}

/// Geolocation Handler
///
/// Resolves the client's region and currency from its IP address, falling
/// back to the `Accept-Language` header and finally to `us`/`usd`.
#[endpoint(tags("geolocation"), summary = "Geolocate Client")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<GeolocateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let lookup = match client_ip(req) {
        Some(ip) => match state.app.geo.lookup(ip).await {
            Ok(location) => Some(location),
            Err(error) => {
                warn!(%ip, "geolocation lookup failed: {error}");

                None
            }
        },
        None => None,
    };

    let country_code = lookup.as_ref().map(|location| location.country_code.clone());
    let timezone = lookup.as_ref().and_then(|location| location.timezone.clone());

    let region = country_code
        .as_deref()
        .and_then(Region::from_country_code)
        .or_else(|| {
            req.header::<String>("accept-language")
                .as_deref()
                .and_then(region_from_accept_language)
        })
        .unwrap_or(Region::Us);

    Ok(Json(GeolocateResponse {
        country_code,
        region: region.to_string(),
        currency: region.currency().to_string(),
        timezone,
    }))
}

/// The client address: the first `X-Forwarded-For` hop when present,
/// otherwise the socket peer address.
fn client_ip(req: &Request) -> Option<IpAddr> {
    if let Some(forwarded) = req.header::<String>("x-forwarded-for")
        && let Some(first) = forwarded.split(',').next()
        && let Ok(ip) = first.trim().parse::<IpAddr>()
    {
        return Some(ip);
    }

    let remote = req.remote_addr();

    if let Some(addr) = remote.as_ipv4() {
        return Some(IpAddr::V4(*addr.ip()));
    }

    if let Some(addr) = remote.as_ipv6() {
        return Some(IpAddr::V6(*addr.ip()));
    }

    None
}

/// The region implied by the first language tag's country subtag.
fn region_from_accept_language(header: &str) -> Option<Region> {
    let tag = header.split(',').next()?.split(';').next()?.trim();
    let subtag = tag.split(['-', '_']).nth(1)?;

    Region::from_country_code(subtag)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vacfinder_app::geo::{GeoError, GeoLocation, MockGeoService};

    use crate::test_helpers::state_with_geo;

    use super::*;

    fn make_service(geo: MockGeoService) -> Service {
        Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(state_with_geo(geo)))
                .push(Router::with_path("geolocate").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_geolocate_resolves_region_from_ip() -> TestResult {
        let mut geo = MockGeoService::new();

        geo.expect_lookup()
            .once()
            .withf(|ip| *ip == IpAddr::from([81, 2, 69, 142]))
            .return_once(|_| {
                Ok(GeoLocation {
                    country_code: "GB".to_string(),
                    timezone: Some("Europe/London".to_string()),
                })
            });

        let response: GeolocateResponse = TestClient::get("http://example.com/geolocate")
            .add_header("x-forwarded-for", "81.2.69.142", true)
            .send(&make_service(geo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.country_code.as_deref(), Some("GB"));
        assert_eq!(response.region, "uk");
        assert_eq!(response.currency, "gbp");
        assert_eq!(response.timezone.as_deref(), Some("Europe/London"));

        Ok(())
    }

    #[tokio::test]
    async fn test_geolocate_falls_back_to_accept_language() -> TestResult {
        let mut geo = MockGeoService::new();

        geo.expect_lookup()
            .once()
            .return_once(|_| Err(GeoError::Unresolved("private range".to_string())));

        let response: GeolocateResponse = TestClient::get("http://example.com/geolocate")
            .add_header("x-forwarded-for", "10.0.0.1", true)
            .add_header("accept-language", "de-DE,de;q=0.9", true)
            .send(&make_service(geo))
            .await
            .take_json()
            .await?;

        assert!(response.country_code.is_none());
        assert_eq!(response.region, "eu");
        assert_eq!(response.currency, "eur");
        assert!(response.timezone.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_geolocate_defaults_to_us() -> TestResult {
        let mut geo = MockGeoService::new();

        geo.expect_lookup()
            .once()
            .return_once(|_| Err(GeoError::Unresolved("private range".to_string())));

        let response: GeolocateResponse = TestClient::get("http://example.com/geolocate")
            .add_header("x-forwarded-for", "10.0.0.1", true)
            .send(&make_service(geo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.region, "us");
        assert_eq!(response.currency, "usd");

        Ok(())
    }

    #[test]
    fn accept_language_region_parsing() {
        assert_eq!(
            region_from_accept_language("en-GB,en;q=0.9"),
            Some(Region::Uk)
        );
        assert_eq!(
            region_from_accept_language("fr_FR"),
            Some(Region::Eu)
        );
        assert_eq!(region_from_accept_language("en"), None);
        assert_eq!(region_from_accept_language(""), None);
    }
}
