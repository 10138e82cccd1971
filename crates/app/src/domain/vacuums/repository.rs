//! Vacuums Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};

use crate::domain::{
    links::repository::decode_currency,
    users::records::UserUuid,
    vacuums::{
        data::{NewVacuum, VacuumUpdate},
        filters::Filters,
        records::{MappingTechnology, VacuumMatch, VacuumRecord, VacuumSpecs, VacuumUuid},
    },
};

const LIST_VACUUMS_SQL: &str = include_str!("sql/list_vacuums.sql");
const GET_VACUUM_SQL: &str = include_str!("sql/get_vacuum.sql");
const CREATE_VACUUM_SQL: &str = include_str!("sql/create_vacuum.sql");
const UPDATE_VACUUM_SQL: &str = include_str!("sql/update_vacuum.sql");
const DELETE_VACUUM_SQL: &str = include_str!("sql/delete_vacuum.sql");
const LIST_BRANDS_SQL: &str = include_str!("sql/list_brands.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVacuumsRepository;

impl PgVacuumsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_vacuums(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<VacuumRecord>, sqlx::Error> {
        query_as::<Postgres, VacuumRecord>(LIST_VACUUMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vacuum: VacuumUuid,
    ) -> Result<VacuumRecord, sqlx::Error> {
        query_as::<Postgres, VacuumRecord>(GET_VACUUM_SQL)
            .bind(vacuum.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        vacuum: NewVacuum,
    ) -> Result<VacuumRecord, sqlx::Error> {
        let specs = &vacuum.specs;

        query_as::<Postgres, VacuumRecord>(CREATE_VACUUM_SQL)
            .bind(vacuum.uuid.into_uuid())
            .bind(&vacuum.brand)
            .bind(&vacuum.model)
            .bind(specs.battery_minutes)
            .bind(specs.suction_pascals)
            .bind(specs.noise_decibels)
            .bind(specs.dustbin_ml)
            .bind(specs.water_tank_ml)
            .bind(specs.mopping)
            .bind(specs.self_emptying)
            .bind(specs.zone_cleaning)
            .bind(specs.multi_floor_mapping)
            .bind(specs.virtual_walls)
            .bind(specs.app_control)
            .bind(specs.voice_control)
            .bind(specs.manual_control)
            .bind(specs.child_lock)
            .bind(specs.mapping_technology.map(MappingTechnology::as_str))
            .bind(&vacuum.image_url)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        vacuum: VacuumUuid,
        update: &VacuumUpdate,
    ) -> Result<VacuumRecord, sqlx::Error> {
        let specs = &update.specs;

        query_as::<Postgres, VacuumRecord>(UPDATE_VACUUM_SQL)
            .bind(vacuum.into_uuid())
            .bind(user.into_uuid())
            .bind(&update.brand)
            .bind(&update.model)
            .bind(specs.battery_minutes)
            .bind(specs.suction_pascals)
            .bind(specs.noise_decibels)
            .bind(specs.dustbin_ml)
            .bind(specs.water_tank_ml)
            .bind(specs.mopping)
            .bind(specs.self_emptying)
            .bind(specs.zone_cleaning)
            .bind(specs.multi_floor_mapping)
            .bind(specs.virtual_walls)
            .bind(specs.app_control)
            .bind(specs.voice_control)
            .bind(specs.manual_control)
            .bind(specs.child_lock)
            .bind(specs.mapping_technology.map(MappingTechnology::as_str))
            .bind(&update.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_vacuum(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        vacuum: VacuumUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_VACUUM_SQL)
            .bind(vacuum.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_brands(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_BRANDS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Run the filter search. The WHERE clause is assembled from whichever
    /// filters are set; prices come from the affiliate link matching the
    /// requested region and currency.
    pub(crate) async fn search_vacuums(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filters: &Filters,
    ) -> Result<Vec<VacuumMatch>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT v.*, ");

        if let Some(region) = filters.region {
            let currency = filters.currency.unwrap_or_else(|| region.currency());

            builder.push(
                "al.price AS link_price, al.url AS link_url, al.currency AS link_currency \
                 FROM vacuums v \
                 LEFT JOIN affiliate_links al \
                   ON al.vacuum_uuid = v.uuid AND al.region = ",
            );
            builder.push_bind(region.as_str());
            builder.push(" AND al.currency = ");
            builder.push_bind(currency.as_str());
        } else {
            builder.push(
                "NULL::BIGINT AS link_price, NULL::TEXT AS link_url, NULL::TEXT AS link_currency \
                 FROM vacuums v",
            );
        }

        builder.push(" WHERE TRUE");

        for (column, value) in [
            ("mopping", filters.mopping),
            ("self_emptying", filters.self_emptying),
            ("zone_cleaning", filters.zone_cleaning),
            ("multi_floor_mapping", filters.multi_floor_mapping),
            ("virtual_walls", filters.virtual_walls),
            ("app_control", filters.app_control),
            ("voice_control", filters.voice_control),
            ("manual_control", filters.manual_control),
            ("child_lock", filters.child_lock),
        ] {
            if value == Some(true) {
                builder.push(" AND v.");
                builder.push(column);
                builder.push(" = TRUE");
            }
        }

        if let Some(technology) = filters.mapping_technology {
            builder.push(" AND v.mapping_technology = ");
            builder.push_bind(technology.as_str());
        }

        if let Some(min_battery) = filters.min_battery_minutes {
            builder.push(" AND v.battery_minutes >= ");
            builder.push_bind(min_battery);
        }

        if let Some(max_noise) = filters.max_noise_decibels {
            builder.push(" AND v.noise_decibels <= ");
            builder.push_bind(max_noise);
        }

        if let Some(min_suction) = filters.min_suction_pascals() {
            builder.push(" AND v.suction_pascals >= ");
            builder.push_bind(min_suction);
        }

        if let Some(budget) = filters.budget {
            let budget = i64::try_from(budget).map_err(|e| sqlx::Error::ColumnDecode {
                index: "budget".to_string(),
                source: Box::new(e),
            })?;

            builder.push(" AND al.price IS NOT NULL AND al.price <= ");
            builder.push_bind(budget);
        }

        if filters.region.is_some() {
            builder.push(" ORDER BY al.price ASC NULLS LAST, v.brand, v.model");
        } else {
            builder.push(" ORDER BY v.brand, v.model");
        }

        builder.push(" LIMIT ");
        builder.push_bind(filters.page_limit());
        builder.push(" OFFSET ");
        builder.push_bind(filters.page_offset());

        builder
            .build_query_as::<VacuumMatch>()
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VacuumRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let mapping_technology = row
            .try_get::<Option<String>, _>("mapping_technology")?
            .map(|raw| {
                raw.parse::<MappingTechnology>()
                    .map_err(|e| sqlx::Error::ColumnDecode {
                        index: "mapping_technology".to_string(),
                        source: Box::new(e),
                    })
            })
            .transpose()?;

        Ok(Self {
            uuid: VacuumUuid::from_uuid(row.try_get("uuid")?),
            brand: row.try_get("brand")?,
            model: row.try_get("model")?,
            specs: VacuumSpecs {
                battery_minutes: row.try_get("battery_minutes")?,
                suction_pascals: row.try_get("suction_pascals")?,
                noise_decibels: row.try_get("noise_decibels")?,
                dustbin_ml: row.try_get("dustbin_ml")?,
                water_tank_ml: row.try_get("water_tank_ml")?,
                mopping: row.try_get("mopping")?,
                self_emptying: row.try_get("self_emptying")?,
                zone_cleaning: row.try_get("zone_cleaning")?,
                multi_floor_mapping: row.try_get("multi_floor_mapping")?,
                virtual_walls: row.try_get("virtual_walls")?,
                app_control: row.try_get("app_control")?,
                voice_control: row.try_get("voice_control")?,
                manual_control: row.try_get("manual_control")?,
                child_lock: row.try_get("child_lock")?,
                mapping_technology,
            },
            image_url: row.try_get("image_url")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for VacuumMatch {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let vacuum = VacuumRecord::from_row(row)?;

        let price = row
            .try_get::<Option<i64>, _>("link_price")?
            .map(|raw| {
                u64::try_from(raw).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "link_price".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        let currency = row
            .try_get::<Option<String>, _>("link_currency")?
            .map(decode_currency)
            .transpose()?;

        Ok(Self {
            vacuum,
            price,
            url: row.try_get("link_url")?,
            currency,
        })
    }
}
