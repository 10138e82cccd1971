//! Delete Vacuum Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State, vacuums::errors::into_status_error};

/// Delete Vacuum Handler
///
/// Deletes a vacuum; its affiliate links are removed with it.
#[endpoint(
    tags("vacuums"),
    summary = "Delete Vacuum",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Vacuum deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Vacuum not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .vacuums
        .delete_vacuum(user, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vacfinder_app::domain::vacuums::{
        MockVacuumsService, VacuumsServiceError, records::VacuumUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, vacuums_service};

    use super::*;

    fn make_service(vacuums: MockVacuumsService) -> Service {
        vacuums_service(vacuums, Router::with_path("vacuums/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_vacuum_success() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums
            .expect_delete_vacuum()
            .once()
            .withf(move |user, v| *user == TEST_USER_UUID && *v == uuid)
            .return_once(|_, _| Ok(()));

        vacuums.expect_create_vacuum().never();
        vacuums.expect_update_vacuum().never();

        let res = TestClient::delete(format!("http://example.com/vacuums/{uuid}"))
            .send(&make_service(vacuums))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_vacuum_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/vacuums/123")
            .send(&make_service(MockVacuumsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_vacuum_not_found_returns_404() -> TestResult {
        let uuid = VacuumUuid::new();

        let mut vacuums = MockVacuumsService::new();

        vacuums
            .expect_delete_vacuum()
            .once()
            .return_once(|_, _| Err(VacuumsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/vacuums/{uuid}"))
            .send(&make_service(vacuums))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
