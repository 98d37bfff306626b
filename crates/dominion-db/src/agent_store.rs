//! Idempotent agent registration against the `agents` table.
//!
//! An agent is a caller identity claimed by name, with no authentication.
//! Registration must resolve duplicate attempts to the one stored record:
//! connecting twice with the same name returns the same agent both times,
//! with no field updates and no second row. The `agents.name` unique
//! constraint enforces this even when two connects race.

use dominion_types::{Agent, AgentId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `agents` table.
pub struct AgentStore<'a> {
    pool: &'a PgPool,
}

impl<'a> AgentStore<'a> {
    /// Create a new agent store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up an agent by exact name, or create it if absent.
    ///
    /// An existing record is returned unchanged -- a different `agent_id`
    /// on a later connect does not overwrite the stored one. When the
    /// record is created, `agent_id` defaults to `name` if omitted or
    /// empty.
    ///
    /// Two concurrent connects for the same new name both succeed and
    /// return the same record: the insert uses `ON CONFLICT DO NOTHING`,
    /// and the loser re-reads the winner's row.
    ///
    /// The caller is responsible for rejecting empty names before this
    /// call; the store assumes `name` is non-empty and trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the lookup or insert fails.
    pub async fn connect(&self, name: &str, agent_id: Option<&str>) -> Result<Agent, DbError> {
        if let Some(existing) = self.find_by_name(name).await? {
            tracing::debug!(name, "Agent connect resolved to existing record");
            return Ok(existing);
        }

        let external_id = agent_id.filter(|id| !id.is_empty()).unwrap_or(name);

        let inserted = sqlx::query_as::<_, AgentRow>(
            r"INSERT INTO agents (id, name, agent_id)
              VALUES ($1, $2, $3)
              ON CONFLICT (name) DO NOTHING
              RETURNING id, name, agent_id, created_at",
        )
        .bind(AgentId::new().into_inner())
        .bind(name)
        .bind(external_id)
        .fetch_optional(self.pool)
        .await?;

        if let Some(row) = inserted {
            tracing::info!(name, "Agent registered");
            return Ok(row.into());
        }

        // Lost a concurrent registration race; the winner's record is
        // authoritative. Agents are never deleted, so the re-read finds it.
        self.find_by_name(name)
            .await?
            .ok_or_else(|| DbError::Postgres(sqlx::Error::RowNotFound))
    }

    /// Look up an agent by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Agent>, DbError> {
        let row = sqlx::query_as::<_, AgentRow>(
            r"SELECT id, name, agent_id, created_at
              FROM agents
              WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}

/// A row from the `agents` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct AgentRow {
    id: Uuid,
    name: String,
    agent_id: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AgentRow> for Agent {
    fn from(row: AgentRow) -> Self {
        Self {
            id: AgentId::from(row.id),
            name: row.name,
            agent_id: row.agent_id,
            created_at: row.created_at,
        }
    }
}
