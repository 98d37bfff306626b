//! Per-nation policy persistence against the `policies` table.
//!
//! Exactly zero or one policy row exists per nation. Zero is a valid,
//! meaningful state: the read path synthesizes the documented defaults
//! without persisting them, so a nation whose policy seed was lost (the
//! create-nation sequence is not transactional) still reads coherently.
//! Rows are materialized only by an explicit save, which is an upsert
//! keyed on `nation_slug` -- last write wins, never a duplicate row.

use dominion_types::{NationSlug, Policy};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `policies` table.
pub struct PolicyStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PolicyStore<'a> {
    /// Create a new policy store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the policy for a nation, or synthesize the defaults.
    ///
    /// "No row found" is not an error: it returns
    /// [`Policy::default_for`] without writing anything, so a subsequent
    /// raw read still reports no row. Any other store failure is
    /// propagated verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_or_default(&self, slug: &NationSlug) -> Result<Policy, DbError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r"SELECT nation_slug, language, dialect, government_type, economic_model,
                     voting_system, representation, custom_perks
              FROM policies
              WHERE nation_slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map_or_else(|| Policy::default_for(slug.clone()), Into::into))
    }

    /// Upsert the single policy row for a nation.
    ///
    /// Insert-or-replace keyed on `nation_slug`: safe to call repeatedly,
    /// converging to the last-written value. No optimistic concurrency
    /// check -- a concurrent save silently wins or loses whole.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the upsert fails (including a
    /// foreign-key failure for a slug with no nation).
    pub async fn save(&self, policy: &Policy) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO policies (nation_slug, language, dialect, government_type,
                                    economic_model, voting_system, representation, custom_perks)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
              ON CONFLICT (nation_slug) DO UPDATE SET
                  language = EXCLUDED.language,
                  dialect = EXCLUDED.dialect,
                  government_type = EXCLUDED.government_type,
                  economic_model = EXCLUDED.economic_model,
                  voting_system = EXCLUDED.voting_system,
                  representation = EXCLUDED.representation,
                  custom_perks = EXCLUDED.custom_perks",
        )
        .bind(policy.nation_slug.as_str())
        .bind(&policy.language)
        .bind(&policy.dialect)
        .bind(&policy.government_type)
        .bind(&policy.economic_model)
        .bind(&policy.voting_system)
        .bind(&policy.representation)
        .bind(&policy.custom_perks)
        .execute(self.pool)
        .await?;

        tracing::debug!(slug = %policy.nation_slug, "Policy saved");
        Ok(())
    }

    /// Raw existence check for a policy row.
    ///
    /// Used by tests to verify that the default-synthesizing read path
    /// never persists anything.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn exists(&self, slug: &NationSlug) -> Result<bool, DbError> {
        let row: Option<(i64,)> =
            sqlx::query_as(r"SELECT 1::BIGINT FROM policies WHERE nation_slug = $1")
                .bind(slug.as_str())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.is_some())
    }
}

/// A row from the `policies` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PolicyRow {
    nation_slug: String,
    language: String,
    dialect: String,
    government_type: String,
    economic_model: String,
    voting_system: String,
    representation: String,
    custom_perks: String,
}

impl From<PolicyRow> for Policy {
    fn from(row: PolicyRow) -> Self {
        Self {
            nation_slug: NationSlug::from_raw(row.nation_slug),
            language: row.language,
            dialect: row.dialect,
            government_type: row.government_type,
            economic_model: row.economic_model,
            voting_system: row.voting_system,
            representation: row.representation,
            custom_perks: row.custom_perks,
        }
    }
}
