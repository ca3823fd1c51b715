//! Sports service backed by a small static catalog of events.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use super::reject;
use crate::error::CatalogError;
use crate::rpc::{
    CallContext, Event, GetEventRequest, ListEventsRequest, ListEventsResponse, RpcError, Sports,
};

/// In-memory event catalog. All access goes through one lock and callers
/// always receive copies.
pub struct EventStore {
    events: Mutex<Vec<Event>>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }

    /// The demo catalog: three events on consecutive days of January 2000.
    pub fn demo() -> Self {
        let events = (1..=3)
            .map(|id| Event {
                id,
                name: format!("Event {id}"),
                advertised_start_time: Utc
                    .with_ymd_and_hms(2000, 1, id as u32, 0, 0, 0)
                    .single()
                    .unwrap_or_default(),
            })
            .collect();
        Self::new(events)
    }

    pub fn list(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn get(&self, id: i64) -> Option<Event> {
        self.events.lock().iter().find(|e| e.id == id).cloned()
    }
}

pub struct SportsService {
    store: EventStore,
}

impl SportsService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }
}

impl Default for SportsService {
    fn default() -> Self {
        Self::new(EventStore::demo())
    }
}

#[async_trait]
impl Sports for SportsService {
    async fn list_events(
        &self,
        _ctx: &CallContext,
        _req: ListEventsRequest,
    ) -> Result<ListEventsResponse, RpcError> {
        Ok(ListEventsResponse {
            events: self.store.list(),
        })
    }

    async fn get_event(&self, _ctx: &CallContext, req: GetEventRequest) -> Result<Event, RpcError> {
        self.store.get(req.id).ok_or_else(|| {
            reject(
                "sports",
                "GetEvent",
                CatalogError::not_found(format!("Event with ID {} does not exist.", req.id)),
            )
        })
    }
}
