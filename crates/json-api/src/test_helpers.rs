//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use vacfinder_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        links::MockLinksService, users::records::UserUuid, vacuums::MockVacuumsService,
    },
    geo::MockGeoService,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_vacuums_mock() -> MockVacuumsService {
    let mut vacuums = MockVacuumsService::new();

    vacuums.expect_list_vacuums().never();
    vacuums.expect_get_vacuum().never();
    vacuums.expect_search_vacuums().never();
    vacuums.expect_list_brands().never();
    vacuums.expect_create_vacuum().never();
    vacuums.expect_update_vacuum().never();
    vacuums.expect_delete_vacuum().never();

    vacuums
}

fn strict_links_mock() -> MockLinksService {
    let mut links = MockLinksService::new();

    links.expect_create_link().never();
    links.expect_update_link().never();
    links.expect_delete_link().never();

    links
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_geo_mock() -> MockGeoService {
    let mut geo = MockGeoService::new();

    geo.expect_lookup().never();

    geo
}

fn make_state(
    vacuums: MockVacuumsService,
    links: MockLinksService,
    auth: MockAuthService,
    geo: MockGeoService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        vacuums: Arc::new(vacuums),
        links: Arc::new(links),
        auth: Arc::new(auth),
        geo: Arc::new(geo),
    }))
}

pub(crate) fn state_with_vacuums(vacuums: MockVacuumsService) -> Arc<State> {
    make_state(
        vacuums,
        strict_links_mock(),
        strict_auth_mock(),
        strict_geo_mock(),
    )
}

pub(crate) fn state_with_links(links: MockLinksService) -> Arc<State> {
    make_state(
        strict_vacuums_mock(),
        links,
        strict_auth_mock(),
        strict_geo_mock(),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(
        strict_vacuums_mock(),
        strict_links_mock(),
        auth,
        strict_geo_mock(),
    )
}

pub(crate) fn state_with_geo(geo: MockGeoService) -> Arc<State> {
    make_state(
        strict_vacuums_mock(),
        strict_links_mock(),
        strict_auth_mock(),
        geo,
    )
}

/// Mount `route` with the given vacuums mock and an already-authenticated user.
pub(crate) fn vacuums_service(vacuums: MockVacuumsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_vacuums(vacuums)))
            .hoop(inject_user)
            .push(route),
    )
}

/// Mount `route` with the given links mock and an already-authenticated user.
pub(crate) fn links_service(links: MockLinksService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_links(links)))
            .hoop(inject_user)
            .push(route),
    )
}
