//! Brand Listing Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Brand listing response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandsResponse {
    /// Distinct brand names, sorted
    pub brands: Vec<String>,
}

/// Brand Listing Handler
///
/// Returns the distinct brands in the catalog.
#[endpoint(tags("vacuums"), summary = "List Brands")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BrandsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brands = state
        .app
        .vacuums
        .list_brands()
        .await
        .or_500("failed to fetch brands")?;

    Ok(Json(BrandsResponse { brands }))
}
