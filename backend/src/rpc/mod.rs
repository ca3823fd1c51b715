//! RPC surface of the catalog: request/response types, the service traits the
//! gateway dispatches to, call deadlines and the wire error shape.

pub mod deadline;
pub mod racing;
pub mod sports;
pub mod status;

pub use deadline::{CallContext, parse_grpc_timeout};
pub use racing::{
    GetRaceRequest, ListRacesRequest, ListRacesRequestFilter, ListRacesResponse, Race, RaceStatus,
    Racing,
};
pub use sports::{Event, GetEventRequest, ListEventsRequest, ListEventsResponse, Sports};
pub use status::{BadRequest, Code, FieldViolation, RpcError, Status, StatusDetail, translate};
