//! Get Vacuum Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vacfinder_app::domain::vacuums::records::{VacuumDetail, VacuumRecord};

use crate::{
    extensions::*, links::LinkResponse, state::State, vacuums::errors::into_status_error,
};

/// Vacuum Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VacuumResponse {
    /// The unique identifier of the vacuum
    pub uuid: Uuid,

    /// Manufacturer brand name
    pub brand: String,

    /// Model designation within the brand
    pub model: String,

    /// Battery runtime in minutes
    pub battery_minutes: Option<i32>,

    /// Suction power in pascals
    pub suction_pascals: Option<i32>,

    /// Noise level in decibels
    pub noise_decibels: Option<i32>,

    /// Dustbin capacity in millilitres
    pub dustbin_ml: Option<i32>,

    /// Water tank capacity in millilitres
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

    /// Product image URL
    pub image_url: Option<String>,

    /// The date and time the vacuum was created
    pub created_at: String,

    /// The date and time the vacuum was last updated
    pub updated_at: String,

    /// Affiliate links for this vacuum
    #[serde(default)]
    pub links: Vec<LinkResponse>,
}

impl From<VacuumRecord> for VacuumResponse {
    fn from(vacuum: VacuumRecord) -> Self {
        let specs = vacuum.specs;

        VacuumResponse {
            uuid: vacuum.uuid.into(),
            brand: vacuum.brand,
            model: vacuum.model,
            battery_minutes: specs.battery_minutes,
            suction_pascals: specs.suction_pascals,
            noise_decibels: specs.noise_decibels,
            dustbin_ml: specs.dustbin_ml,
            water_tank_ml: specs.water_tank_ml,
            mopping: specs.mopping,
            self_emptying: specs.self_emptying,
            zone_cleaning: specs.zone_cleaning,
            multi_floor_mapping: specs.multi_floor_mapping,
            virtual_walls: specs.virtual_walls,
            app_control: specs.app_control,
            voice_control: specs.voice_control,
            manual_control: specs.manual_control,
            child_lock: specs.child_lock,
            mapping_technology: specs.mapping_technology.as_ref().map(ToString::to_string),
            image_url: vacuum.image_url,
            created_at: vacuum.created_at.to_string(),
            updated_at: vacuum.updated_at.to_string(),
            links: Vec::new(),
        }
    }
}

impl From<VacuumDetail> for VacuumResponse {
    fn from(detail: VacuumDetail) -> Self {
        let mut response = VacuumResponse::from(detail.vacuum);

        response.links = detail.links.into_iter().map(Into::into).collect();

        response
    }
}

/// Get Vacuum Handler
///
/// Returns a vacuum together with its affiliate links.
#[endpoint(tags("vacuums"), summary = "Get Vacuum")]
pub(crate) async fn handler(
    vacuum: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VacuumResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let detail = state
        .app
        .vacuums
        .get_vacuum(vacuum.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(detail.into()))
}
