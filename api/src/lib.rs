//! # Verimail API
//!
//! Actix-web surface for the verification service. The library half exists
//! so the HTTP layer can be exercised from integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod telemetry;
