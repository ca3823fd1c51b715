//! Base SELECT statements for the races relation, keyed by operation.
//!
//! `status` is derived at read time: 1 (open) when the advertised start is at
//! or after the store's current time, 2 (closed) otherwise. Comparing inside
//! the statement keeps it consistent with the rows read.

macro_rules! race_select {
    () => {
        "SELECT id, meeting_id, name, number, visible, advertised_start_time, \
         CASE WHEN julianday(advertised_start_time) >= julianday('now') \
         THEN 1 ELSE 2 END AS status \
         FROM races"
    };
}

/// Operations with a base race statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceQuery {
    List,
    Get,
}

impl RaceQuery {
    pub fn name(self) -> &'static str {
        match self {
            RaceQuery::List => "list",
            RaceQuery::Get => "get",
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            RaceQuery::List => race_select!(),
            RaceQuery::Get => concat!(race_select!(), " WHERE id = ?"),
        }
    }
}

/// Schema of the races relation.
pub const CREATE_RACES_TABLE: &str = "CREATE TABLE IF NOT EXISTS races (
  id INTEGER PRIMARY KEY,
  meeting_id INTEGER NOT NULL,
  name TEXT NOT NULL,
  number INTEGER NOT NULL,
  visible INTEGER NOT NULL DEFAULT 0,
  advertised_start_time TEXT NOT NULL
)";
