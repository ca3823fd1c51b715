//! Demo data for the races relation.
//!
//! Inserts a deterministic set of races spread across ten meetings, with
//! advertised start times around `now` so both open and closed races exist.
//! Uses INSERT OR IGNORE so re-runs are idempotent (existing rows are preserved).

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::queries::CREATE_RACES_TABLE;
use super::sqlite_helpers::{bool_to_int, datetime_to_str};

/// Number of races inserted by [seed_races].
pub const DEMO_RACE_COUNT: i64 = 100;

/// Number of distinct meetings the demo races are spread over.
pub const DEMO_MEETING_COUNT: i64 = 10;

const PLACES: &[&str] = &[
    "Michigan",
    "Mississippi",
    "Nebraska",
    "Oregon",
    "Vermont",
    "Georgia",
    "Idaho",
    "Kansas",
    "Montana",
    "Texas",
    "Utah",
];

const MASCOTS: &[&str] = &[
    "buffalo", "ducks", "giants", "hawks", "wolves", "rangers", "bears", "comets", "owls",
];

/// One demo race row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRace {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

/// The demo races, generated relative to `now`.
pub fn demo_races(now: DateTime<Utc>) -> Vec<DemoRace> {
    (1..=DEMO_RACE_COUNT)
        .map(|id| {
            let i = id as usize;
            DemoRace {
                id,
                meeting_id: (id - 1) % DEMO_MEETING_COUNT + 1,
                name: format!(
                    "{} {}",
                    PLACES[i % PLACES.len()],
                    MASCOTS[(i * 7) % MASCOTS.len()]
                ),
                number: (id * 3) % 12 + 1,
                visible: id % 4 != 0,
                advertised_start_time: now + Duration::minutes((id - DEMO_RACE_COUNT / 2) * 37),
            }
        })
        .collect()
}

/// Create the races table if it does not exist.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_RACES_TABLE).execute(pool).await?;
    debug!("races schema ready");
    Ok(())
}

/// Seed the demo races. Returns the number of rows inserted.
pub async fn seed_races(pool: &SqlitePool, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for race in demo_races(now) {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(bool_to_int(race.visible))
        .bind(datetime_to_str(race.advertised_start_time))
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    info!(inserted, "Seeded demo races");
    Ok(inserted)
}
