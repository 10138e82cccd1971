//! Update Affiliate Link Handler

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
use uuid::Uuid;

use vacfinder_app::domain::{
    links::data::AffiliateLinkUpdate,
    regions::{Currency, Region},
};

use crate::{
    extensions::*,
    links::{errors::into_status_error, handlers::LinkResponse},
    state::State,
};

/// Update Affiliate Link Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateLinkRequest {
    /// Region the link is priced for
    pub region: String,

    /// Currency override; defaults to the region's canonical currency
    pub currency: Option<String>,

    /// Price in minor units (cents/pence)
    pub price: u64,

    /// Destination purchase URL
    pub url: String,
}

/// Update Affiliate Link Handler
#[endpoint(
    tags("links"),
    summary = "Update Affiliate Link",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Affiliate link updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Affiliate link not found"),
        (status_code = StatusCode::CONFLICT, description = "Link already exists for this region"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    link: PathParam<Uuid>,
    json: JsonBody<UpdateLinkRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LinkResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();
    let link = link.into_inner();

    let region = request.region.parse::<Region>().or_400("invalid region")?;

    let currency = request
        .currency
        .as_deref()
        .map(str::parse::<Currency>)
        .transpose()
        .or_400("invalid currency")?
        .unwrap_or_else(|| region.currency());

    let updated = state
        .app
        .links
        .update_link(
            user,
            link.into(),
            AffiliateLinkUpdate {
                region,
                currency,
                price: request.price,
                url: request.url,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/links/{link}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    Ok(Json(updated.into()))
}
