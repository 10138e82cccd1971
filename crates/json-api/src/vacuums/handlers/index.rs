//! Vacuum Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, vacuums::get::VacuumResponse};

/// Vacuum catalog response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VacuumsResponse {
    /// The list of vacuums
    pub vacuums: Vec<VacuumResponse>,
}

/// Vacuum Index Handler
///
/// Returns the full catalog ordered by brand and model.
#[endpoint(tags("vacuums"), summary = "List Vacuums")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<VacuumsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let vacuums = state
        .app
        .vacuums
        .list_vacuums()
        .await
        .or_500("failed to fetch vacuums")?;

    Ok(Json(VacuumsResponse {
        vacuums: vacuums.into_iter().map(Into::into).collect(),
    }))
}
