//! Core entity records for the Dominion governance service.
//!
//! Covers the four persisted entities (`Agent`, `Nation`, `Policy`,
//! `Candidate`) plus the `NationDraft` creation payload. These are the
//! shapes the API serves and the `TypeScript` client consumes; the data
//! layer maps its table rows into them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{AgentId, NationId};
use crate::slug::NationSlug;

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// A registered caller identity.
///
/// Agents are created on first registration and never mutated or deleted.
/// `name` is the natural key: registering the same name again returns the
/// existing record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Agent {
    /// Row identity.
    pub id: AgentId,
    /// Display identity and natural key. Unique across all agents.
    pub name: String,
    /// External identifier supplied by the caller; defaults to `name`
    /// when omitted at registration.
    pub agent_id: String,
    /// When the agent first registered.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Nation
// ---------------------------------------------------------------------------

/// A named collective founded by an agent.
///
/// The `slug` is derived from `name` once at creation and never changes;
/// it is the addressable key for policies and candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Nation {
    /// Row identity.
    pub id: NationId,
    /// Canonical addressable key, unique across all nations.
    pub slug: NationSlug,
    /// Display name as the founder typed it.
    pub name: String,
    /// Primary language declared at founding.
    pub language: String,
    /// Free-text description.
    pub description: String,
    /// Free-text perks / advantages.
    pub perks: String,
    /// Name of the founding agent.
    pub created_by: String,
    /// When the nation was founded.
    pub created_at: DateTime<Utc>,
}

/// Payload for founding a nation.
///
/// `language` and `dialect` also seed the nation's initial policy record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NationDraft {
    /// Free-text nation name; the slug is derived from it. An omitted or
    /// empty name is rejected by the directory, not by deserialization.
    #[serde(default)]
    pub name: String,
    /// Name of the founding agent.
    #[serde(default)]
    pub founder: String,
    /// Primary language. Defaults to `"English"` when omitted.
    #[serde(default = "default_language")]
    pub language: String,
    /// Dialect / accent, seeded into the policy record.
    #[serde(default)]
    pub dialect: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Free-text perks / advantages.
    #[serde(default)]
    pub perks: String,
}

fn default_language() -> String {
    String::from(policy_defaults::LANGUAGE)
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Well-known default values for a nation's policy record.
///
/// A nation with no stored policy row is read as having exactly these
/// values; persistence happens only on an explicit save.
pub mod policy_defaults {
    /// Default official language.
    pub const LANGUAGE: &str = "English";
    /// Default dialect / accent.
    pub const DIALECT: &str = "Standard";
    /// Default government type.
    pub const GOVERNMENT_TYPE: &str = "Federal Republic";
    /// Default economic model.
    pub const ECONOMIC_MODEL: &str = "Market Economy";
    /// Default voting system.
    pub const VOTING_SYSTEM: &str = "Direct Representation";
    /// Default representation scheme.
    pub const REPRESENTATION: &str = "proportional";
}

/// Governance and economic choices for a single nation.
///
/// At most one policy row exists per nation; zero rows is a valid state
/// meaning "use defaults". Saves are upserts keyed on `nation_slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Policy {
    /// The owning nation's slug -- the upsert key.
    pub nation_slug: NationSlug,
    /// Official language.
    pub language: String,
    /// Dialect / accent.
    pub dialect: String,
    /// Government type.
    pub government_type: String,
    /// Economic model.
    pub economic_model: String,
    /// Voting system.
    pub voting_system: String,
    /// Representation scheme.
    pub representation: String,
    /// Free-text custom perks.
    pub custom_perks: String,
}

impl Policy {
    /// The synthesized default policy for a nation with no stored row.
    pub fn default_for(nation_slug: NationSlug) -> Self {
        Self {
            nation_slug,
            language: String::from(policy_defaults::LANGUAGE),
            dialect: String::from(policy_defaults::DIALECT),
            government_type: String::from(policy_defaults::GOVERNMENT_TYPE),
            economic_model: String::from(policy_defaults::ECONOMIC_MODEL),
            voting_system: String::from(policy_defaults::VOTING_SYSTEM),
            representation: String::from(policy_defaults::REPRESENTATION),
            custom_perks: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A leadership nominee within a nation's election.
///
/// Nominations are append-only and never deleted. Two nominations with the
/// same name are distinct records. Votes accrue through external
/// increments; a candidate that has never received one reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Candidate {
    /// Identity column, ascending in nomination order. Doubles as the
    /// deterministic tie-break when candidates have equal votes.
    pub id: i64,
    /// The nation this nomination belongs to.
    pub nation_slug: NationSlug,
    /// Nominee display name.
    pub name: String,
    /// Accrued vote count (never negative; absent counts read as 0).
    pub votes: i32,
    /// Name of the nominating agent.
    pub nominated_by: String,
    /// When the nomination was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_documented_values() {
        let slug = NationSlug::normalize("Atlantis");
        let policy = Policy::default_for(slug.clone());
        assert_eq!(policy.nation_slug, slug);
        assert_eq!(policy.language, "English");
        assert_eq!(policy.dialect, "Standard");
        assert_eq!(policy.government_type, "Federal Republic");
        assert_eq!(policy.economic_model, "Market Economy");
        assert_eq!(policy.voting_system, "Direct Representation");
        assert_eq!(policy.representation, "proportional");
        assert_eq!(policy.custom_perks, "");
    }

    #[test]
    fn nation_draft_fills_defaults() {
        let parsed: Result<NationDraft, _> =
            serde_json::from_str(r#"{"name": "Atlantis", "founder": "Atlas"}"#);
        assert!(parsed.is_ok());
        if let Ok(draft) = parsed {
            assert_eq!(draft.name, "Atlantis");
            assert_eq!(draft.founder, "Atlas");
            assert_eq!(draft.language, "English");
            assert_eq!(draft.dialect, "");
            assert_eq!(draft.perks, "");
        }
    }
}
