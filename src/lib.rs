//! Library half of the `hostinfo-server` service.
//!
//! The binary in `main.rs` owns process setup (configuration, tracing,
//! binding); everything a request touches lives here so the router can be
//! mounted on any listener, including ephemeral ones in tests.
//!
//! Modules follow the Explicit Module Boundary Pattern (EMBP): routes only
//! see the types re-exported from this gateway, not sibling modules.

pub mod config;
mod models;
pub mod routes;

pub use config::Config;
pub use models::{HealthResponse, MetricsResponse, ServerInfo};
