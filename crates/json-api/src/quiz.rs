//! Quiz Recommendations Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vacfinder_app::domain::{
    quiz::{ControlPreference, HomeSize, QuizAnswers, filters_for_answers},
    regions::Region,
    vacuums::filters::Filters,
};

use crate::{
    extensions::*,
    state::State,
    vacuums::{errors::into_status_error, search::VacuumMatchResponse},
};

/// Quiz Recommendations Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuizRequest {
    /// Rough floor area (`small`, `medium`, `large`)
    pub home_size: String,

    /// Number of floors the vacuum should cover
    #[serde(default = "default_floors")]
    pub floors: u8,

    /// Number of pets in the household
    #[serde(default)]
    pub pets: u8,

    /// Maximum spend in minor units
    pub budget: Option<u64>,

    #[serde(default)]
    pub noise_sensitive: bool,

    #[serde(default)]
    pub wants_mopping: bool,

    #[serde(default)]
    pub wants_self_empty: bool,

    #[serde(default)]
    pub has_problem_areas: bool,

    #[serde(default)]
    pub has_no_go_zones: bool,

    /// Preferred way to drive the vacuum (`app`, `voice`, `manual`)
    pub control: String,

    /// Region the shopper is buying in
    pub region: Option<String>,
}

fn default_floors() -> u8 {
    1
}

impl QuizRequest {
    fn into_answers(self) -> Result<QuizAnswers, StatusError> {
        let home_size = self
            .home_size
            .parse::<HomeSize>()
            .or_400("invalid home size")?;

        let control = self
            .control
            .parse::<ControlPreference>()
            .or_400("invalid control preference")?;

        let region = self
            .region
            .as_deref()
            .map(str::parse::<Region>)
            .transpose()
            .or_400("invalid region")?;

        Ok(QuizAnswers {
            home_size,
            floors: self.floors,
            pets: self.pets,
            budget: self.budget,
            noise_sensitive: self.noise_sensitive,
            wants_mopping: self.wants_mopping,
            wants_self_empty: self.wants_self_empty,
            has_problem_areas: self.has_problem_areas,
            has_no_go_zones: self.has_no_go_zones,
            control,
            region,
        })
    }
}

/// The filters the quiz mapped the answers onto, echoed back so the search
/// UI can be pre-filled with them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FiltersResponse {
    pub budget: Option<u64>,
    pub pets: Option<u8>,
    pub region: Option<String>,
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
    pub mapping_technology: Option<String>,
    pub min_battery_minutes: Option<i32>,
    pub max_noise_decibels: Option<i32>,
}

impl From<&Filters> for FiltersResponse {
    fn from(filters: &Filters) -> Self {
        FiltersResponse {
            budget: filters.budget,
            pets: filters.pets,
            region: filters.region.as_ref().map(ToString::to_string),
            currency: filters.price_currency().map(|currency| currency.to_string()),
            mopping: filters.mopping,
            self_emptying: filters.self_emptying,
            zone_cleaning: filters.zone_cleaning,
            multi_floor_mapping: filters.multi_floor_mapping,
            virtual_walls: filters.virtual_walls,
            app_control: filters.app_control,
            voice_control: filters.voice_control,
            manual_control: filters.manual_control,
            child_lock: filters.child_lock,
            mapping_technology: filters.mapping_technology.as_ref().map(ToString::to_string),
            min_battery_minutes: filters.min_battery_minutes,
            max_noise_decibels: filters.max_noise_decibels,
        }
    }
}

/// Quiz Recommendations Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuizResponse {
    /// The filters derived from the answers
    pub filters: FiltersResponse,

    /// Vacuums matching those filters
    pub vacuums: Vec<VacuumMatchResponse>,
}

/// Quiz Recommendations Handler
///
/// Maps quiz answers onto search filters and runs the search.
#[endpoint(
    tags("quiz"),
    summary = "Quiz Recommendations",
    responses(
        (status_code = StatusCode::OK, description = "Recommendations"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<QuizRequest>,
    depot: &mut Depot,
) -> Result<Json<QuizResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let answers = json.into_inner().into_answers()?;
    let filters = filters_for_answers(&answers);

    let matches = state
        .app
        .vacuums
        .search_vacuums(filters.clone())
        .await
        .map_err(into_status_error)?;

    Ok(Json(QuizResponse {
        filters: (&filters).into(),
        vacuums: matches.into_iter().map(Into::into).collect(),
    }))
}
