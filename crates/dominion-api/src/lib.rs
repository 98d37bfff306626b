//! Governance API server (Axum HTTP) for the Dominion service.
//!
//! This crate is the request/response boundary between presentation
//! clients and the consistency core: agent registration, nation founding,
//! policy reads/saves, and election nominations. Handlers validate input
//! locally before any store call, then delegate to the `dominion-db`
//! stores.
//!
//! # Modules
//!
//! - [`state`] -- Shared application state (the database pool)
//! - [`handlers`] -- REST endpoint handlers
//! - [`router`] -- Axum router assembly (CORS + tracing layers)
//! - [`server`] -- HTTP server lifecycle
//! - [`error`] -- API error taxonomy and HTTP mapping

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
