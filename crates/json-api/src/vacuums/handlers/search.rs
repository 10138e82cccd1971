//! Search Vacuums Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vacfinder_app::domain::{
    regions::{Currency, Region},
    vacuums::{
        filters::Filters,
        records::{MappingTechnology, VacuumMatch},
    },
};

use crate::{
    extensions::*,
    state::State,
    vacuums::{errors::into_status_error, get::VacuumResponse},
};

/// Search Vacuums Request
///
/// Every field is optional; omitted fields constrain nothing.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchVacuumsRequest {
    /// Maximum affiliate price in minor units; requires `region`
    pub budget: Option<u64>,

    /// Number of pets in the household
    pub pets: Option<u8>,

    /// Region whose affiliate prices the search is scoped to
    pub region: Option<String>,

    /// Currency override; defaults to the region's canonical currency
    pub currency: Option<String>,

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

    /// Inclusive battery runtime floor in minutes
    pub min_battery_minutes: Option<i32>,

    /// Inclusive noise ceiling in decibels
    pub max_noise_decibels: Option<i32>,

    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl SearchVacuumsRequest {
    fn into_filters(self) -> Result<Filters, StatusError> {
        let region = self
            .region
            .as_deref()
            .map(str::parse::<Region>)
            .transpose()
            .or_400("invalid region")?;

        let currency = self
            .currency
            .as_deref()
            .map(str::parse::<Currency>)
            .transpose()
            .or_400("invalid currency")?;

        let mapping_technology = self
            .mapping_technology
            .as_deref()
            .map(str::parse::<MappingTechnology>)
            .transpose()
            .or_400("invalid mapping technology")?;

        Ok(Filters {
            budget: self.budget,
            pets: self.pets,
            region,
            currency,
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
            min_battery_minutes: self.min_battery_minutes,
            max_noise_decibels: self.max_noise_decibels,
            offset: self.offset,
            limit: self.limit,
        })
    }
}

/// One search result with its regional price, when one exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VacuumMatchResponse {
    /// The matching vacuum
    pub vacuum: VacuumResponse,

    /// Price in minor units for the requested region
    pub price: Option<u64>,

    /// Denomination of `price`
    pub currency: Option<String>,

    /// Purchase URL for the requested region
    pub url: Option<String>,
}

impl From<VacuumMatch> for VacuumMatchResponse {
    fn from(m: VacuumMatch) -> Self {
        VacuumMatchResponse {
            vacuum: m.vacuum.into(),
            price: m.price,
            currency: m.currency.map(|currency| currency.to_string()),
            url: m.url,
        }
    }
}

/// Search Vacuums Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchVacuumsResponse {
    /// Matching vacuums, cheapest first when a region is given
    pub vacuums: Vec<VacuumMatchResponse>,
}

/// Search Vacuums Handler
///
/// Runs a filter search over the catalog.
#[endpoint(
    tags("vacuums"),
    summary = "Search Vacuums",
    responses(
        (status_code = StatusCode::OK, description = "Search results"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SearchVacuumsRequest>,
    depot: &mut Depot,
) -> Result<Json<SearchVacuumsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filters = json.into_inner().into_filters()?;

    let matches = state
        .app
        .vacuums
        .search_vacuums(filters)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SearchVacuumsResponse {
        vacuums: matches.into_iter().map(Into::into).collect(),
    }))
}
