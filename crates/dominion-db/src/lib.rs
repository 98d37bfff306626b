//! Data layer for the Dominion governance service (`PostgreSQL`).
//!
//! `PostgreSQL` is the single persistent store: agent identities, nation
//! records, per-nation policies, and election nominations. This crate
//! provides the connection pool and one store per table. The store's
//! uniqueness constraints are the source of truth for the consistency
//! rules the service depends on:
//!
//! - `agents.name` unique -- duplicate registration resolves to the
//!   existing record instead of creating a second one.
//! - `nations.slug` unique -- concurrent creations of colliding names let
//!   exactly one insert win; the loser observes a conflict.
//! - `policies.nation_slug` primary key -- saves are upserts, never a
//!   second row.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`agent_store`] -- Idempotent agent registration
//! - [`nation_store`] -- Slug-addressed nation directory
//! - [`policy_store`] -- Per-nation policy upsert with default fallback
//! - [`election_store`] -- Append-only nominations and ranked reads
//! - [`error`] -- Shared error types

pub mod agent_store;
pub mod election_store;
pub mod error;
pub mod nation_store;
pub mod policy_store;
pub mod postgres;

// Re-export primary types for convenience.
pub use agent_store::AgentStore;
pub use election_store::ElectionStore;
pub use error::DbError;
pub use nation_store::NationStore;
pub use policy_store::PolicyStore;
pub use postgres::{PostgresConfig, PostgresPool};
