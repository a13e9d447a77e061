//! HTTP API: server wiring, per-session inventories, request/response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod sessions;
