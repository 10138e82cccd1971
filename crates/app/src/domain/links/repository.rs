//! Affiliate Links Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    links::{
        data::{AffiliateLinkUpdate, NewAffiliateLink, ReplacementLink},
        records::{AffiliateLinkRecord, AffiliateLinkUuid},
    },
    regions::{Currency, Region},
    users::records::UserUuid,
    vacuums::records::VacuumUuid,
};

const CREATE_LINK_SQL: &str = include_str!("sql/create_link.sql");
const UPDATE_LINK_SQL: &str = include_str!("sql/update_link.sql");
const DELETE_LINK_SQL: &str = include_str!("sql/delete_link.sql");
const LIST_LINKS_FOR_VACUUM_SQL: &str = include_str!("sql/list_links_for_vacuum.sql");
const DELETE_LINKS_FOR_VACUUM_SQL: &str = include_str!("sql/delete_links_for_vacuum.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLinksRepository;

impl PgLinksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        link: NewAffiliateLink,
    ) -> Result<AffiliateLinkRecord, sqlx::Error> {
        query_as::<Postgres, AffiliateLinkRecord>(CREATE_LINK_SQL)
            .bind(link.uuid.into_uuid())
            .bind(link.vacuum_uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(link.region.as_str())
            .bind(link.currency.as_str())
            .bind(encode_price(link.price)?)
            .bind(link.url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        link: AffiliateLinkUuid,
        update: AffiliateLinkUpdate,
    ) -> Result<AffiliateLinkRecord, sqlx::Error> {
        query_as::<Postgres, AffiliateLinkRecord>(UPDATE_LINK_SQL)
            .bind(link.into_uuid())
            .bind(user.into_uuid())
            .bind(update.region.as_str())
            .bind(update.currency.as_str())
            .bind(encode_price(update.price)?)
            .bind(update.url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        link: AffiliateLinkUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINK_SQL)
            .bind(link.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_links_for_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vacuum: VacuumUuid,
    ) -> Result<Vec<AffiliateLinkRecord>, sqlx::Error> {
        query_as::<Postgres, AffiliateLinkRecord>(LIST_LINKS_FOR_VACUUM_SQL)
            .bind(vacuum.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Discard the vacuum's current link set and insert `links` in its place.
    pub(crate) async fn replace_links_for_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        vacuum: VacuumUuid,
        links: Vec<ReplacementLink>,
    ) -> Result<Vec<AffiliateLinkRecord>, sqlx::Error> {
        query(DELETE_LINKS_FOR_VACUUM_SQL)
            .bind(vacuum.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?;

        let mut created = Vec::with_capacity(links.len());

        for link in links {
            let record = self
                .create_link(
                    tx,
                    user,
                    NewAffiliateLink {
                        uuid: AffiliateLinkUuid::new(),
                        vacuum_uuid: vacuum,
                        region: link.region,
                        currency: link.currency,
                        price: link.price,
                        url: link.url,
                    },
                )
                .await?;

            created.push(record);
        }

        Ok(created)
    }
}

fn encode_price(price: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for AffiliateLinkRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: AffiliateLinkUuid::from_uuid(row.try_get("uuid")?),
            vacuum_uuid: VacuumUuid::from_uuid(row.try_get("vacuum_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            region: decode_region(row.try_get("region")?)?,
            currency: decode_currency(row.try_get("currency")?)?,
            price,
            url: row.try_get("url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

pub(crate) fn decode_region(raw: String) -> sqlx::Result<Region> {
    raw.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "region".to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn decode_currency(raw: String) -> sqlx::Result<Currency> {
    raw.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "currency".to_string(),
        source: Box::new(e),
    })
}
