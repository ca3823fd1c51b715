//! Racing service: validates nothing itself, delegates to the races repository
//! and translates whatever it returns.

use async_trait::async_trait;

use super::reject;
use crate::error::CatalogError;
use crate::rpc::{
    CallContext, GetRaceRequest, ListRacesRequest, ListRacesResponse, Race, Racing, RpcError,
};

/// Repository access to races.
#[async_trait]
pub trait RacesRepo: Send + Sync + 'static {
    /// List races for the request.
    async fn list(&self, req: &ListRacesRequest) -> Result<Vec<Race>, CatalogError>;

    /// Get one race, or [CatalogError::NotFound].
    async fn get(&self, id: i64) -> Result<Race, CatalogError>;
}

pub struct RacingService<R> {
    races: R,
}

impl<R: RacesRepo> RacingService<R> {
    pub fn new(races: R) -> Self {
        Self { races }
    }
}

#[async_trait]
impl<R: RacesRepo> Racing for RacingService<R> {
    async fn list_races(
        &self,
        ctx: &CallContext,
        req: ListRacesRequest,
    ) -> Result<ListRacesResponse, RpcError> {
        let races = ctx
            .run(self.races.list(&req))
            .await
            .map_err(|e| reject("racing", "ListRaces", e))?;

        Ok(ListRacesResponse { races })
    }

    async fn get_race(&self, ctx: &CallContext, req: GetRaceRequest) -> Result<Race, RpcError> {
        ctx.run(self.races.get(req.id))
            .await
            .map_err(|e| reject("racing", "GetRace", e))
    }
}
