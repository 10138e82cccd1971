//! Affiliate Link Errors

use salvo::http::StatusError;
use tracing::error;

use vacfinder_app::domain::links::LinksServiceError;

pub(crate) fn into_status_error(error: LinksServiceError) -> StatusError {
    match error {
        LinksServiceError::AlreadyExists => {
            StatusError::conflict().brief("Affiliate link already exists for this region")
        }
        LinksServiceError::InvalidReference
        | LinksServiceError::MissingRequiredData
        | LinksServiceError::InvalidData
        | LinksServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid affiliate link payload")
        }
        LinksServiceError::Sql(source) => {
            error!("affiliate link storage error: {source}");

            StatusError::internal_server_error()
        }
        LinksServiceError::NotFound => StatusError::not_found(),
    }
}
