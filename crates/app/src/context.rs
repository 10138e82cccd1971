//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        links::{LinksService, PgLinksService},
        vacuums::{PgVacuumsService, VacuumsService},
    },
    geo::{GeoConfig, GeoService, HttpGeoClient},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub vacuums: Arc<dyn VacuumsService>,
    pub links: Arc<dyn LinksService>,
    pub auth: Arc<dyn AuthService>,
    pub geo: Arc<dyn GeoService>,
}

impl AppContext {
    /// Build application context from a database URL and geolocation config.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, geo: GeoConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            vacuums: Arc::new(PgVacuumsService::new(db.clone())),
            links: Arc::new(PgLinksService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
            geo: Arc::new(HttpGeoClient::new(geo)),
        })
    }
}
