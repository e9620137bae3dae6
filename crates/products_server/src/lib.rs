//! products_server: HTTP surface for the product catalogue.
//!
//! The router is exposed as a library so integration tests can drive it
//! in-process with `tower::ServiceExt::oneshot`.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod telemetry;
