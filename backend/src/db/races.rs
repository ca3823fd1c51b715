//! Race database repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use futures::stream::BoxStream;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tokio::sync::OnceCell;
use tracing::debug;

use super::filter::apply_filter;
use super::order_by::apply_order_by;
use super::queries::RaceQuery;
use super::seed;
use super::sqlite_helpers::{int_to_bool, str_to_datetime};
use crate::error::CatalogError;
use crate::rpc::{ListRacesRequest, Race, RaceStatus};
use crate::services::RacesRepo;

/// Repository over the races relation.
///
/// Cloning is cheap; clones share the pool and the one-time seeding guard.
#[derive(Clone)]
pub struct RaceRepository {
    pool: SqlitePool,
    seeded: Arc<OnceCell<u64>>,
}

impl RaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            seeded: Arc::new(OnceCell::new()),
        }
    }

    /// Seed the demo races. Runs at most once per repository, even when
    /// called concurrently; later calls return the first run's row count.
    pub async fn init(&self) -> Result<u64, CatalogError> {
        let inserted = self
            .seeded
            .get_or_try_init(|| async { seed::seed_races(&self.pool, Utc::now()).await })
            .await?;
        Ok(*inserted)
    }

    /// Number of stored races. Used as the readiness check.
    pub async fn count(&self) -> Result<i64, CatalogError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List races matching the request's filter, in the requested order.
    ///
    /// The ordering directive is validated before anything is sent to the store.
    pub async fn list(&self, req: &ListRacesRequest) -> Result<Vec<Race>, CatalogError> {
        let (query, args) = apply_filter(RaceQuery::List.sql(), req.filter.as_ref());
        let query = apply_order_by(query, &req.order_by)?;

        debug!(query = RaceQuery::List.name(), sql = %query, args = ?args, "Races query");

        let mut q = sqlx::query_as::<_, RaceRecord>(&query);
        for arg in &args {
            q = q.bind(*arg);
        }

        scan_races(q.fetch(&self.pool)).await
    }

    /// Get a race by ID
    pub async fn get(&self, id: i64) -> Result<Race, CatalogError> {
        let query = RaceQuery::Get.sql();
        debug!(query = RaceQuery::Get.name(), sql = %query, id, "Race query");

        let record = sqlx::query_as::<_, RaceRecord>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match record {
            Some(record) => record.into_race(),
            None => Err(CatalogError::not_found(format!(
                "Race with ID {id} does not exist."
            ))),
        }
    }
}

#[async_trait]
impl RacesRepo for RaceRepository {
    async fn list(&self, req: &ListRacesRequest) -> Result<Vec<Race>, CatalogError> {
        RaceRepository::list(self, req).await
    }

    async fn get(&self, id: i64) -> Result<Race, CatalogError> {
        RaceRepository::get(self, id).await
    }
}

/// Drain a result stream into races. End of stream is success; an empty
/// stream yields an empty collection.
async fn scan_races(
    mut rows: BoxStream<'_, Result<RaceRecord, sqlx::Error>>,
) -> Result<Vec<Race>, CatalogError> {
    let mut races = Vec::new();

    while let Some(record) = rows.try_next().await? {
        races.push(record.into_race()?);
    }

    Ok(races)
}

/// Race row as stored, before the timestamp is converted.
#[derive(Debug, Clone)]
pub struct RaceRecord {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: String,
    pub status: RaceStatus,
}

/// Decoded positionally, in the column order of [RaceQuery].
impl sqlx::FromRow<'_, SqliteRow> for RaceRecord {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get(0)?,
            meeting_id: row.try_get(1)?,
            name: row.try_get(2)?,
            number: row.try_get(3)?,
            visible: int_to_bool(row.try_get(4)?),
            advertised_start_time: row.try_get(5)?,
            status: RaceStatus::from_sql(row.try_get(6)?),
        })
    }
}

impl RaceRecord {
    pub fn into_race(self) -> Result<Race, CatalogError> {
        let advertised_start_time = str_to_datetime(&self.advertised_start_time).map_err(|e| {
            CatalogError::Timestamp {
                value: self.advertised_start_time.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Race {
            id: self.id,
            meeting_id: self.meeting_id,
            name: self.name,
            number: self.number,
            visible: self.visible,
            advertised_start_time,
            status: self.status,
        })
    }
}
