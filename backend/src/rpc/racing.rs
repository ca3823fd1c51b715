//! Racing RPC: listing and fetching scheduled races.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CallContext, RpcError};

/// Narrows a race listing. An absent filter and an empty one are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequestFilter {
    /// Only races belonging to one of these meetings.
    pub meeting_ids: Vec<i64>,
    /// Only races flagged visible.
    pub visible_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequest {
    pub filter: Option<ListRacesRequestFilter>,
    /// `"field"` or `"field ASC|DESC"`; empty keeps the store's order.
    pub order_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceRequest {
    pub id: i64,
}

/// Whether a race is still to run, relative to when it was read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    #[default]
    Open,
    Closed,
}

impl RaceStatus {
    /// Decode the `status` column computed by the race queries (1 open, 2 closed).
    pub fn from_sql(value: i64) -> Self {
        if value == 1 {
            RaceStatus::Open
        } else {
            RaceStatus::Closed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: RaceStatus,
}

#[async_trait]
pub trait Racing: Send + Sync + 'static {
    /// List races matching the request's filter, in the requested order.
    async fn list_races(
        &self,
        ctx: &CallContext,
        req: ListRacesRequest,
    ) -> Result<ListRacesResponse, RpcError>;

    /// Fetch a single race by id.
    async fn get_race(&self, ctx: &CallContext, req: GetRaceRequest) -> Result<Race, RpcError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_request_fields_are_optional() {
        let req: ListRacesRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, ListRacesRequest::default());

        let req: ListRacesRequest = serde_json::from_str(
            r#"{"filter": {"meetingIds": [9, 3]}, "orderBy": "number desc"}"#,
        )
        .unwrap();
        assert_eq!(
            req,
            ListRacesRequest {
                filter: Some(ListRacesRequestFilter {
                    meeting_ids: vec![9, 3],
                    visible_only: false,
                }),
                order_by: "number desc".to_string(),
            }
        );
    }

    #[test]
    fn test_race_json_shape() {
        let race = Race {
            id: 1,
            meeting_id: 2,
            name: "3".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: "2000-01-01T00:00:00Z".parse().unwrap(),
            status: RaceStatus::Closed,
        };

        assert_eq!(
            serde_json::to_value(&race).unwrap(),
            serde_json::json!({
                "id": 1,
                "meetingId": 2,
                "name": "3",
                "number": 4,
                "visible": true,
                "advertisedStartTime": "2000-01-01T00:00:00Z",
                "status": "CLOSED"
            })
        );
    }

    #[test]
    fn test_status_from_sql() {
        assert_eq!(RaceStatus::from_sql(1), RaceStatus::Open);
        assert_eq!(RaceStatus::from_sql(2), RaceStatus::Closed);
    }
}
