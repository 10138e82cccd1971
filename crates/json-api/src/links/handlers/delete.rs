//! Delete Affiliate Link Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, links::errors::into_status_error, state::State};

/// Delete Affiliate Link Handler
#[endpoint(
    tags("links"),
    summary = "Delete Affiliate Link",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Affiliate link deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Affiliate link not found"),
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
        .links
        .delete_link(user, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vacfinder_app::domain::links::{
        LinksServiceError, MockLinksService, records::AffiliateLinkUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, links_service};

    use super::*;

    fn make_service(links: MockLinksService) -> Service {
        links_service(links, Router::with_path("links/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_link_success() -> TestResult {
        let uuid = AffiliateLinkUuid::new();

        let mut links = MockLinksService::new();

        links
            .expect_delete_link()
            .once()
            .withf(move |user, link| *user == TEST_USER_UUID && *link == uuid)
            .return_once(|_, _| Ok(()));

        links.expect_create_link().never();
        links.expect_update_link().never();

        let res = TestClient::delete(format!("http://example.com/links/{uuid}"))
            .send(&make_service(links))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_link_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/links/123")
            .send(&make_service(MockLinksService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_link_not_found_returns_404() -> TestResult {
        let uuid = AffiliateLinkUuid::new();

        let mut links = MockLinksService::new();

        links
            .expect_delete_link()
            .once()
            .return_once(|_, _| Err(LinksServiceError::NotFound));

        links.expect_create_link().never();
        links.expect_update_link().never();

        let res = TestClient::delete(format!("http://example.com/links/{uuid}"))
            .send(&make_service(links))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
