//! Slug-addressed nation directory against the `nations` table.
//!
//! A nation's slug is derived from its display name once, at creation,
//! and never changes. The directory does not pre-check slugs before
//! inserting -- that would race with concurrent creations. The unique
//! constraint on `nations.slug` is the sole collision arbiter: exactly
//! one caller's insert succeeds, the other observes
//! [`DbError::Conflict`] and must pick a different name.
//!
//! Founders relate to nations one-to-many. The directory exposes the
//! enumerable relation (newest first) and leaves "which one to show" to
//! the caller.

use dominion_types::{Nation, NationDraft, NationId, NationSlug};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `nations` table.
pub struct NationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> NationStore<'a> {
    /// Create a new nation store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a nation under the given slug.
    ///
    /// The caller derives the slug from the draft's name and rejects
    /// empty slugs before this call. Seeding the nation's policy record
    /// is a separate, non-transactional step owned by the caller; if it
    /// fails, the policy read path falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Conflict`] if the slug is already taken, or
    /// [`DbError::Postgres`] for any other store failure.
    pub async fn create(&self, slug: &NationSlug, draft: &NationDraft) -> Result<Nation, DbError> {
        let row = sqlx::query_as::<_, NationRow>(
            r"INSERT INTO nations (id, slug, name, language, description, perks, created_by)
              VALUES ($1, $2, $3, $4, $5, $6, $7)
              RETURNING id, slug, name, language, description, perks, created_by, created_at",
        )
        .bind(NationId::new().into_inner())
        .bind(slug.as_str())
        .bind(draft.name.trim())
        .bind(&draft.language)
        .bind(&draft.description)
        .bind(&draft.perks)
        .bind(draft.founder.trim())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::on_conflict(e, format!("nation slug '{slug}' already exists")))?;

        tracing::info!(%slug, founder = draft.founder, "Nation founded");

        Ok(row.into())
    }

    /// Look up a nation by its canonical slug.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_by_slug(&self, slug: &NationSlug) -> Result<Option<Nation>, DbError> {
        let row = sqlx::query_as::<_, NationRow>(
            r"SELECT id, slug, name, language, description, perks, created_by, created_at
              FROM nations
              WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List the nations founded by an agent, newest first.
    ///
    /// An empty list means the agent has not founded anything yet.
    /// Callers wanting the "current" nation take the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_by_founder(&self, founder: &str) -> Result<Vec<Nation>, DbError> {
        let rows = sqlx::query_as::<_, NationRow>(
            r"SELECT id, slug, name, language, description, perks, created_by, created_at
              FROM nations
              WHERE created_by = $1
              ORDER BY created_at DESC, id DESC",
        )
        .bind(founder)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List the most recently founded nations across all founders.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Nation>, DbError> {
        let rows = sqlx::query_as::<_, NationRow>(
            r"SELECT id, slug, name, language, description, perks, created_by, created_at
              FROM nations
              ORDER BY created_at DESC, id DESC
              LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// A row from the `nations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct NationRow {
    id: Uuid,
    slug: String,
    name: String,
    language: String,
    description: String,
    perks: String,
    created_by: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<NationRow> for Nation {
    fn from(row: NationRow) -> Self {
        Self {
            id: NationId::from(row.id),
            slug: NationSlug::from_raw(row.slug),
            name: row.name,
            language: row.language,
            description: row.description,
            perks: row.perks,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}
