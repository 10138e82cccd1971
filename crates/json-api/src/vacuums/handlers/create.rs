//! Create Vacuum Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vacfinder_app::domain::vacuums::{
    data::NewVacuum,
    records::{MappingTechnology, VacuumSpecs},
};

use crate::{extensions::*, state::State, vacuums::errors::into_status_error};

/// Create Vacuum Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateVacuumRequest {
    pub uuid: Uuid,
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
}

impl CreateVacuumRequest {
    fn into_new_vacuum(self) -> Result<NewVacuum, StatusError> {
        let mapping_technology = self
            .mapping_technology
            .as_deref()
            .map(str::parse::<MappingTechnology>)
            .transpose()
            .or_400("invalid mapping technology")?;

        Ok(NewVacuum {
            uuid: self.uuid.into(),
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
        })
    }
}

/// Vacuum Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VacuumCreatedResponse {
    /// Created vacuum UUID
    pub uuid: Uuid,
}

/// Create Vacuum Handler
#[endpoint(
    tags("vacuums"),
    summary = "Create Vacuum",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Vacuum created"),
        (status_code = StatusCode::CONFLICT, description = "Vacuum already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateVacuumRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VacuumCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let new_vacuum = json.into_inner().into_new_vacuum()?;

    let uuid = state
        .app
        .vacuums
        .create_vacuum(user, new_vacuum)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/vacuums/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(VacuumCreatedResponse { uuid: uuid.into() }))
}
