//! HTTP API: server, routing, and request/response mapping.
//!
//! This is the thin shell the Presentation Shell talks to. All business
//! rules live below in `larder-inventory`; all durability lives in
//! `larder-store`.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod telemetry;
