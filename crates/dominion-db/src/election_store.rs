//! Leadership nominations against the `candidates` table.
//!
//! Nominations are append-only: no dedup by name, no rate limiting, no
//! deletion. Vote counts accrue through external increments against the
//! `votes` column; a row whose votes were never touched holds NULL, which
//! every read coalesces to 0 before it can reach an ordering comparison.
//!
//! The ranked view orders by votes descending with the identity column
//! ascending as the tie-break. Identity columns ascend in insertion
//! order, so equal-vote candidates rank in nomination order -- a
//! deterministic, reproducible secondary key.

use dominion_types::{Candidate, NationSlug};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `candidates` table.
pub struct ElectionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ElectionStore<'a> {
    /// Create a new election store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a nomination for a nation.
    ///
    /// The new row's `votes` is left NULL (read as 0). The caller is
    /// responsible for rejecting empty nominee names before this call.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn nominate(
        &self,
        slug: &NationSlug,
        name: &str,
        nominated_by: &str,
    ) -> Result<Candidate, DbError> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r"INSERT INTO candidates (nation_slug, name, nominated_by)
              VALUES ($1, $2, $3)
              RETURNING id, nation_slug, name, COALESCE(votes, 0) AS votes,
                        nominated_by, created_at",
        )
        .bind(slug.as_str())
        .bind(name)
        .bind(nominated_by)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(%slug, candidate = name, nominated_by, "Candidate nominated");

        Ok(row.into())
    }

    /// List all candidates for a nation, ranked by votes.
    ///
    /// Ordered by coalesced vote count descending, then by nomination
    /// order ascending. An empty list is a normal result for a nation
    /// with no nominations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_ranked(&self, slug: &NationSlug) -> Result<Vec<Candidate>, DbError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r"SELECT id, nation_slug, name, COALESCE(votes, 0) AS votes,
                     nominated_by, created_at
              FROM candidates
              WHERE nation_slug = $1
              ORDER BY COALESCE(votes, 0) DESC, id ASC",
        )
        .bind(slug.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// A row from the `candidates` table, with `votes` already coalesced.
#[derive(Debug, Clone, sqlx::FromRow)]
struct CandidateRow {
    id: i64,
    nation_slug: String,
    name: String,
    votes: i32,
    nominated_by: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Self {
            id: row.id,
            nation_slug: NationSlug::from_raw(row.nation_slug),
            name: row.name,
            votes: row.votes,
            nominated_by: row.nominated_by,
            created_at: row.created_at,
        }
    }
}
