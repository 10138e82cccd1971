//! Vacuum Errors

use salvo::http::StatusError;
use tracing::error;

use vacfinder_app::domain::vacuums::VacuumsServiceError;

pub(crate) fn into_status_error(error: VacuumsServiceError) -> StatusError {
    match error {
        VacuumsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Vacuum already exists")
        }
        VacuumsServiceError::InvalidReference
        | VacuumsServiceError::MissingRequiredData
        | VacuumsServiceError::InvalidData
        | VacuumsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid vacuum payload")
        }
        VacuumsServiceError::Sql(source) => {
            error!("vacuum storage error: {source}");

            StatusError::internal_server_error()
        }
        VacuumsServiceError::NotFound => StatusError::not_found(),
    }
}
