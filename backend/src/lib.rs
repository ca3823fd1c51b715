//! Catalog Backend - racing and sports lookup services
//!
//! Each service is an async RPC trait in [rpc]; [services] implements them over
//! the store in [db], and [api] exposes them as HTTP/JSON routes.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod services;
