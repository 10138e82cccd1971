//! App Router

use salvo::Router;

use crate::{auth, brands, geolocate, healthcheck, links, observability, quiz, vacuums};

/// Public catalog routes plus the bearer-authenticated admin subtree.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("vacuums")
                .get(vacuums::index::handler)
                .push(Router::with_path("search").post(vacuums::search::handler))
                .push(Router::with_path("{uuid}").get(vacuums::get::handler)),
        )
        .push(Router::with_path("brands").get(brands::handler))
        .push(Router::with_path("geolocate").get(geolocate::handler))
        .push(Router::with_path("quiz/recommendations").post(quiz::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("vacuums")
                        .post(vacuums::create::handler)
                        .push(
                            Router::with_path("{uuid}")
                                .put(vacuums::update::handler)
                                .delete(vacuums::delete::handler)
                                .push(
                                    Router::with_path("links").post(links::create::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("links/{uuid}")
                        .put(links::update::handler)
                        .delete(links::delete::handler),
                ),
        )
}
