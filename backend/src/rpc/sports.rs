//! Sports RPC: a small, static catalog of events.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CallContext, RpcError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub advertised_start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEventRequest {
    pub id: i64,
}

#[async_trait]
pub trait Sports: Send + Sync + 'static {
    async fn list_events(
        &self,
        ctx: &CallContext,
        req: ListEventsRequest,
    ) -> Result<ListEventsResponse, RpcError>;

    async fn get_event(&self, ctx: &CallContext, req: GetEventRequest) -> Result<Event, RpcError>;
}
