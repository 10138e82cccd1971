//! Update Vacuum Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use vacfinder_app::domain::{
    links::data::ReplacementLink,
    regions::{Currency, Region},
    vacuums::{
        data::VacuumUpdate,
        records::{MappingTechnology, VacuumSpecs},
    },
};

use crate::{
    extensions::*,
    state::State,
    vacuums::{errors::into_status_error, get::VacuumResponse},
};

/// One replacement affiliate link carried by a vacuum update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LinkPayload {
    /// Region the link is priced for
    pub region: String,

    /// Currency override; defaults to the region's canonical currency
    pub currency: Option<String>,

    /// Price in minor units (cents/pence)
    pub price: u64,

    /// Destination purchase URL
    pub url: String,
}

/// Update Vacuum Request
///
/// When `links` is present, the vacuum's affiliate links are replaced
/// wholesale with the given set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateVacuumRequest {
    pub brand: String,
    pub model: String,
    pub battery_minutes: Option<i32>,
    pub suction_pascals: Option<i32>,
    pub noise_decibels: Option<i32>,
    pub dustbin_ml: Option<i32>,
    pub water_tank_ml: Option<i32>,
    pub mopping: Option<bool>,
    pub self_emptying: Option<bool>,
    pub zone_cleaning: Option<bool>,
    pub multi_floor_mapping: Option<bool>,
    pub virtual_walls: Option<bool>,
    pub app_control: Option<bool>,
    pub voice_control: Option<bool>,
    pub manual_control: Option<bool>,
    pub child_lock: Option<bool>,

    /// Mapping technology (`laser` or `camera`)
    pub mapping_technology: Option<String>,

    pub image_url: Option<String>,

    /// Replacement affiliate link set
    pub links: Option<SmallVec<[LinkPayload; 3]>>,
}

impl UpdateVacuumRequest {
    fn into_vacuum_update(self) -> Result<VacuumUpdate, StatusError> {
        let mapping_technology = self
            .mapping_technology
            .as_deref()
            .map(str::parse::<MappingTechnology>)
            .transpose()
            .or_400("invalid mapping technology")?;

        let links = self
            .links
            .map(|links| {
                links
                    .into_iter()
                    .map(LinkPayload::into_replacement_link)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(VacuumUpdate {
            brand: self.brand,
            model: self.model,
            specs: VacuumSpecs {
                battery_minutes: self.battery_minutes,
                suction_pascals: self.suction_pascals,
                noise_decibels: self.noise_decibels,
                dustbin_ml: self.dustbin_ml,
                water_tank_ml: self.water_tank_ml,
                mopping: self.mopping,
                self_emptying: self.self_emptying,
                zone_cleaning: self.zone_cleaning,
                multi_floor_mapping: self.multi_floor_mapping,
                virtual_walls: self.virtual_walls,
                app_control: self.app_control,
                voice_control: self.voice_control,
                manual_control: self.manual_control,
                child_lock: self.child_lock,
                mapping_technology,
            },
            image_url: self.image_url,
            links,
        })
    }
}

impl LinkPayload {
    fn into_replacement_link(self) -> Result<ReplacementLink, StatusError> {
        let region = self.region.parse::<Region>().or_400("invalid region")?;

        let currency = self
            .currency
            .as_deref()
            .map(str::parse::<Currency>)
            .transpose()
            .or_400("invalid currency")?
            .unwrap_or_else(|| region.currency());

        Ok(ReplacementLink {
            region,
            currency,
            price: self.price,
            url: self.url,
        })
    }
}

/// Update Vacuum Handler
#[endpoint(
    tags("vacuums"),
    summary = "Update Vacuum",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Vacuum updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Vacuum not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    vacuum: PathParam<Uuid>,
    json: JsonBody<UpdateVacuumRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VacuumResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let vacuum = vacuum.into_inner();

    let update = json.into_inner().into_vacuum_update()?;

    let detail = state
        .app
        .vacuums
        .update_vacuum(user, vacuum.into(), update)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/vacuums/{vacuum}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(vacuum_uuid = %vacuum, "updated vacuum");

    Ok(Json(detail.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vacfinder_app::domain::{
        links::records::{AffiliateLinkRecord, AffiliateLinkUuid},
        vacuums::{
            MockVacuumsService, VacuumsServiceError,
            records::{VacuumDetail, VacuumUuid},
        },
    };

    use crate::{
        test_helpers::{TEST_USER_UUID, vacuums_service},
        vacuums::handlers::tests::make_vacuum,
    };

    use super::*;

    fn make_service(vacuums: MockVacuumsService) -> Service {
        vacuums_service(vacuums, Router::with_path("vacuums/{uuid}").put(handler))
    }

    #[tokio::test]
    async fn test_update_vacuum_success() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums
            .expect_update_vacuum()
            .once()
            .withf(move |user, v, update| {
                *user == TEST_USER_UUID
                    && *v == uuid
                    && update.model == "S8 MaxV"
                    && update.specs.self_emptying == Some(true)
                    && update.links.is_none()
            })
            .return_once(move |_, _, _| {
                let mut vacuum = make_vacuum(uuid);

                vacuum.model = "S8 MaxV".to_string();
                vacuum.specs.self_emptying = Some(true);

                Ok(VacuumDetail {
                    vacuum,
                    links: vec![],
                })
            });

        vacuums.expect_create_vacuum().never();
        vacuums.expect_delete_vacuum().never();

        let mut res = TestClient::put(format!("http://example.com/vacuums/{uuid}"))
            .json(&json!({
                "brand": "Roborock",
                "model": "S8 MaxV",
                "self_emptying": true
            }))
            .send(&make_service(vacuums))
            .await;

        let body: VacuumResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(location, Some(format!("/vacuums/{uuid}").as_str()));
        assert_eq!(body.model, "S8 MaxV");
        assert_eq!(body.self_emptying, Some(true));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_vacuum_replaces_links() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums
            .expect_update_vacuum()
            .once()
            .withf(move |user, v, update| {
                let links = update.links.as_deref().unwrap_or_default();

                *user == TEST_USER_UUID
                    && *v == uuid
                    && links.len() == 1
                    && links.first().is_some_and(|link| {
                        link.region == vacfinder_app::domain::regions::Region::Uk
                            && link.currency == vacfinder_app::domain::regions::Currency::Gbp
                            && link.price == 34_900
                    })
            })
            .return_once(move |_, _, _| {
                Ok(VacuumDetail {
                    vacuum: make_vacuum(uuid),
                    links: vec![AffiliateLinkRecord {
                        uuid: AffiliateLinkUuid::new(),
                        vacuum_uuid: uuid,
                        user_uuid: TEST_USER_UUID,
                        region: vacfinder_app::domain::regions::Region::Uk,
                        currency: vacfinder_app::domain::regions::Currency::Gbp,
                        price: 34_900,
                        url: "https://example.com/uk".to_string(),
                        created_at: jiff::Timestamp::UNIX_EPOCH,
                        updated_at: jiff::Timestamp::UNIX_EPOCH,
                    }],
                })
            });

        let mut res = TestClient::put(format!("http://example.com/vacuums/{uuid}"))
            .json(&json!({
                "brand": "Roborock",
                "model": "S8",
                "links": [
                    { "region": "uk", "price": 34_900, "url": "https://example.com/uk" }
                ]
            }))
            .send(&make_service(vacuums))
            .await;

        let body: VacuumResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.links.len(), 1, "expected the replacement link set");
        assert_eq!(body.links[0].region, "uk");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_vacuum_unknown_region_in_links_returns_400() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums.expect_update_vacuum().never();

        let res = TestClient::put(format!("http://example.com/vacuums/{uuid}"))
            .json(&json!({
                "brand": "Roborock",
                "model": "S8",
                "links": [
                    { "region": "atlantis", "price": 100, "url": "https://example.com" }
                ]
            }))
            .send(&make_service(vacuums))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_vacuum_not_found_returns_404() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums
            .expect_update_vacuum()
            .once()
            .return_once(|_, _, _| Err(VacuumsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/vacuums/{uuid}"))
            .json(&json!({ "brand": "Roborock", "model": "S8" }))
            .send(&make_service(vacuums))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
