//! Shared type definitions for the Dominion governance service.
//!
//! This crate is the single source of truth for all types used across the
//! Dominion workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`slug`] -- Canonical nation slug derivation
//! - [`records`] -- Core entity records (agents, nations, policies, candidates)

pub mod ids;
pub mod records;
pub mod slug;

// Re-export all public types at crate root for convenience.
pub use ids::{AgentId, NationId};
pub use records::{Agent, Candidate, Nation, NationDraft, Policy};
pub use slug::NationSlug;

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::AgentId::export_all();
        let _ = crate::ids::NationId::export_all();

        // Slug
        let _ = crate::slug::NationSlug::export_all();

        // Records
        let _ = crate::records::Agent::export_all();
        let _ = crate::records::Nation::export_all();
        let _ = crate::records::NationDraft::export_all();
        let _ = crate::records::Policy::export_all();
        let _ = crate::records::Candidate::export_all();
    }
}
