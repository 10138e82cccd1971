//! Affiliate links service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        links::{
            data::{AffiliateLinkUpdate, NewAffiliateLink},
            errors::LinksServiceError,
            records::{AffiliateLinkRecord, AffiliateLinkUuid},
            repository::PgLinksRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgLinksService {
    db: Db,
    repository: PgLinksRepository,
}

impl PgLinksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgLinksRepository::new(),
        }
    }
}

#[async_trait]
impl LinksService for PgLinksService {
    async fn create_link(
        &self,
        user: UserUuid,
        link: NewAffiliateLink,
    ) -> Result<AffiliateLinkRecord, LinksServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_link(&mut tx, user, link).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_link(
        &self,
        user: UserUuid,
        link: AffiliateLinkUuid,
        update: AffiliateLinkUpdate,
    ) -> Result<AffiliateLinkRecord, LinksServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_link(&mut tx, user, link, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_link(
        &self,
        user: UserUuid,
        link: AffiliateLinkUuid,
    ) -> Result<(), LinksServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_link(&mut tx, user, link).await?;

        if rows_affected == 0 {
            return Err(LinksServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait LinksService: Send + Sync {
    /// Creates an affiliate link on a vacuum owned by `user`.
    async fn create_link(
        &self,
        user: UserUuid,
        link: NewAffiliateLink,
    ) -> Result<AffiliateLinkRecord, LinksServiceError>;

    /// Updates an affiliate link owned by `user`.
    async fn update_link(
        &self,
        user: UserUuid,
        link: AffiliateLinkUuid,
        update: AffiliateLinkUpdate,
    ) -> Result<AffiliateLinkRecord, LinksServiceError>;

    /// Deletes an affiliate link owned by `user`.
    async fn delete_link(
        &self,
        user: UserUuid,
        link: AffiliateLinkUuid,
    ) -> Result<(), LinksServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            regions::{Currency, Region},
            vacuums::VacuumsService,
        },
        test::{TestContext, helpers::sample_vacuum},
    };

    use super::*;

    fn new_link(vacuum: crate::domain::vacuums::records::VacuumUuid) -> NewAffiliateLink {
        NewAffiliateLink {
            uuid: AffiliateLinkUuid::new(),
            vacuum_uuid: vacuum,
            region: Region::Us,
            currency: Currency::Usd,
            price: 39_900,
            url: "https://example.com/buy/us".to_string(),
        }
    }

    #[tokio::test]
    async fn create_link_returns_created_record() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Roborock", "S8"))
            .await?;

        let link = new_link(vacuum.uuid);
        let uuid = link.uuid;

        let created = ctx.links.create_link(ctx.user_uuid, link).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.vacuum_uuid, vacuum.uuid);
        assert_eq!(created.user_uuid, ctx.user_uuid);
        assert_eq!(created.region, Region::Us);
        assert_eq!(created.currency, Currency::Usd);
        assert_eq!(created.price, 39_900);

        Ok(())
    }

    #[tokio::test]
    async fn create_link_on_unknown_vacuum_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .links
            .create_link(
                ctx.user_uuid,
                new_link(crate::domain::vacuums::records::VacuumUuid::new()),
            )
            .await;

        assert!(
            matches!(result, Err(LinksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_link_on_other_users_vacuum_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Eufy", "X10"))
            .await?;

        let other_user = ctx.create_user("Other Admin").await;

        let result = ctx.links.create_link(other_user, new_link(vacuum.uuid)).await;

        assert!(
            matches!(result, Err(LinksServiceError::NotFound)),
            "expected NotFound for cross-user create, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_link_duplicate_region_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Dreame", "L20"))
            .await?;

        ctx.links
            .create_link(ctx.user_uuid, new_link(vacuum.uuid))
            .await?;

        let result = ctx
            .links
            .create_link(ctx.user_uuid, new_link(vacuum.uuid))
            .await;

        assert!(
            matches!(result, Err(LinksServiceError::AlreadyExists)),
            "expected AlreadyExists for duplicate region, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_link_reflects_new_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Roomba", "j7"))
            .await?;

        let created = ctx
            .links
            .create_link(ctx.user_uuid, new_link(vacuum.uuid))
            .await?;

        let updated = ctx
            .links
            .update_link(
                ctx.user_uuid,
                created.uuid,
                AffiliateLinkUpdate {
                    region: Region::Uk,
                    currency: Currency::Gbp,
                    price: 34_900,
                    url: "https://example.com/buy/uk".to_string(),
                },
            )
            .await?;

        assert_eq!(updated.uuid, created.uuid);
        assert_eq!(updated.region, Region::Uk);
        assert_eq!(updated.currency, Currency::Gbp);
        assert_eq!(updated.price, 34_900);
        assert_eq!(updated.url, "https://example.com/buy/uk");

        Ok(())
    }

    #[tokio::test]
    async fn update_link_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .links
            .update_link(
                ctx.user_uuid,
                AffiliateLinkUuid::new(),
                AffiliateLinkUpdate {
                    region: Region::Us,
                    currency: Currency::Usd,
                    price: 100,
                    url: "https://example.com".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(LinksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_link_removes_it() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Shark", "AV2501"))
            .await?;

        let created = ctx
            .links
            .create_link(ctx.user_uuid, new_link(vacuum.uuid))
            .await?;

        ctx.links.delete_link(ctx.user_uuid, created.uuid).await?;

        let detail = ctx.vacuums.get_vacuum(vacuum.uuid).await?;

        assert!(
            detail.links.is_empty(),
            "deleted link should not be returned with the vacuum"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_link_by_non_owner_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let vacuum = ctx
            .vacuums
            .create_vacuum(ctx.user_uuid, sample_vacuum("Ecovacs", "T30"))
            .await?;

        let created = ctx
            .links
            .create_link(ctx.user_uuid, new_link(vacuum.uuid))
            .await?;

        let other_user = ctx.create_user("Other Admin").await;

        let result = ctx.links.delete_link(other_user, created.uuid).await;

        assert!(
            matches!(result, Err(LinksServiceError::NotFound)),
            "expected NotFound for cross-user delete, got {result:?}"
        );

        Ok(())
    }
}
