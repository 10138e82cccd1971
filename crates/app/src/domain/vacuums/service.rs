//! Vacuums service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        links::repository::PgLinksRepository,
        users::records::UserUuid,
        vacuums::{
            data::{NewVacuum, VacuumUpdate},
            errors::VacuumsServiceError,
            filters::Filters,
            records::{VacuumDetail, VacuumMatch, VacuumRecord, VacuumUuid},
            repository::PgVacuumsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgVacuumsService {
    db: Db,
    repository: PgVacuumsRepository,
    links: PgLinksRepository,
}

impl PgVacuumsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgVacuumsRepository::new(),
            links: PgLinksRepository::new(),
        }
    }
}

#[async_trait]
impl VacuumsService for PgVacuumsService {
    async fn list_vacuums(&self) -> Result<Vec<VacuumRecord>, VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let vacuums = self.repository.list_vacuums(&mut tx).await?;

        tx.commit().await?;

        Ok(vacuums)
    }

    async fn get_vacuum(&self, vacuum: VacuumUuid) -> Result<VacuumDetail, VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_vacuum(&mut tx, vacuum).await?;
        let links = self.links.list_links_for_vacuum(&mut tx, vacuum).await?;

        tx.commit().await?;

        Ok(VacuumDetail {
            vacuum: record,
            links,
        })
    }

    async fn search_vacuums(
        &self,
        filters: Filters,
    ) -> Result<Vec<VacuumMatch>, VacuumsServiceError> {
        // A budget is a bound on a regional price; without a region there is
        // no price to bound.
        if filters.budget.is_some() && filters.region.is_none() {
            return Err(VacuumsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let matches = self.repository.search_vacuums(&mut tx, &filters).await?;

        tx.commit().await?;

        Ok(matches)
    }

    async fn list_brands(&self) -> Result<Vec<String>, VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let brands = self.repository.list_brands(&mut tx).await?;

        tx.commit().await?;

        Ok(brands)
    }

    async fn create_vacuum(
        &self,
        user: UserUuid,
        vacuum: NewVacuum,
    ) -> Result<VacuumRecord, VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_vacuum(&mut tx, user, vacuum).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_vacuum(
        &self,
        user: UserUuid,
        vacuum: VacuumUuid,
        update: VacuumUpdate,
    ) -> Result<VacuumDetail, VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_vacuum(&mut tx, user, vacuum, &update)
            .await?;

        let links = match update.links {
            Some(links) => {
                self.links
                    .replace_links_for_vacuum(&mut tx, user, vacuum, links)
                    .await?
            }
            None => self.links.list_links_for_vacuum(&mut tx, vacuum).await?,
        };

        tx.commit().await?;

        Ok(VacuumDetail {
            vacuum: updated,
            links,
        })
    }

    async fn delete_vacuum(
        &self,
        user: UserUuid,
        vacuum: VacuumUuid,
    ) -> Result<(), VacuumsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_vacuum(&mut tx, user, vacuum).await?;

        if rows_affected == 0 {
            return Err(VacuumsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait VacuumsService: Send + Sync {
    /// Retrieves the full catalog.
    async fn list_vacuums(&self) -> Result<Vec<VacuumRecord>, VacuumsServiceError>;

    /// Retrieves a single vacuum together with its affiliate links.
    async fn get_vacuum(&self, vacuum: VacuumUuid) -> Result<VacuumDetail, VacuumsServiceError>;

    /// Runs a filter search over the catalog.
    async fn search_vacuums(
        &self,
        filters: Filters,
    ) -> Result<Vec<VacuumMatch>, VacuumsServiceError>;

    /// Lists the distinct brands in the catalog.
    async fn list_brands(&self) -> Result<Vec<String>, VacuumsServiceError>;

    /// Creates a new catalog entry owned by `user`.
    async fn create_vacuum(
        &self,
        user: UserUuid,
        vacuum: NewVacuum,
    ) -> Result<VacuumRecord, VacuumsServiceError>;

    /// Updates a catalog entry owned by `user`, optionally replacing its
    /// affiliate links wholesale.
    async fn update_vacuum(
        &self,
        user: UserUuid,
        vacuum: VacuumUuid,
        update: VacuumUpdate,
    ) -> Result<VacuumDetail, VacuumsServiceError>;

    /// Deletes a catalog entry owned by `user`; its links cascade.
    async fn delete_vacuum(
        &self,
        user: UserUuid,
        vacuum: VacuumUuid,
    ) -> Result<(), VacuumsServiceError>;
}
