//! REST API endpoint handlers for the governance server.
//!
//! Every handler validates its input locally before touching the store,
//! then delegates to the `dominion-db` stores through the shared
//! [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/agents/connect` | Connect or register an agent |
//! | `GET` | `/api/agents/{name}/nations` | Nations founded by an agent |
//! | `POST` | `/api/nations` | Found a nation |
//! | `GET` | `/api/nations` | Recently founded nations |
//! | `GET` | `/api/nations/{slug}` | Single nation by slug |
//! | `GET` | `/api/nations/{slug}/policy` | Policy (defaults when absent) |
//! | `PUT` | `/api/nations/{slug}/policy` | Save policy (upsert) |
//! | `POST` | `/api/nations/{slug}/candidates` | Nominate a leader |
//! | `GET` | `/api/nations/{slug}/candidates` | Ranked candidates |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use dominion_db::{AgentStore, ElectionStore, NationStore, PolicyStore};
use dominion_types::records::policy_defaults;
use dominion_types::{NationDraft, NationSlug, Policy};

use crate::error::ApiError;
use crate::state::AppState;

/// Default page size for the recent-nations listing.
const DEFAULT_NATIONS_LIMIT: i64 = 50;

/// Upper bound for the recent-nations listing.
const MAX_NATIONS_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Request payload structs
// ---------------------------------------------------------------------------

/// Body for the `POST /api/agents/connect` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ConnectRequest {
    /// Display name claimed by the caller. An omitted name is treated as
    /// empty and rejected with a 400, not a deserialization failure.
    #[serde(default)]
    pub name: String,
    /// Optional external identifier; defaults to `name` when omitted.
    #[serde(default)]
    pub agent_id: Option<String>,
}

/// Query parameters for the `GET /api/nations` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct NationsQuery {
    /// Maximum number of nations to return (default 50, max 200).
    pub limit: Option<i64>,
}

/// Body for the `POST /api/nations/{slug}/candidates` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct NominateRequest {
    /// Nominee display name. An omitted name is treated as empty and
    /// rejected with a 400.
    #[serde(default)]
    pub name: String,
    /// Name of the nominating agent.
    #[serde(default = "default_nominator")]
    pub nominated_by: String,
}

fn default_nominator() -> String {
    String::from("Agent")
}

/// Body for the `PUT /api/nations/{slug}/policy` endpoint.
///
/// Saves are whole-document: fields omitted by the client fall back to
/// the documented defaults, not to the previously stored values.
#[derive(Debug, serde::Deserialize)]
pub struct PolicyPayload {
    /// Official language.
    #[serde(default = "payload_defaults::language")]
    pub language: String,
    /// Dialect / accent.
    #[serde(default = "payload_defaults::dialect")]
    pub dialect: String,
    /// Government type.
    #[serde(default = "payload_defaults::government_type")]
    pub government_type: String,
    /// Economic model.
    #[serde(default = "payload_defaults::economic_model")]
    pub economic_model: String,
    /// Voting system.
    #[serde(default = "payload_defaults::voting_system")]
    pub voting_system: String,
    /// Representation scheme.
    #[serde(default = "payload_defaults::representation")]
    pub representation: String,
    /// Free-text custom perks.
    #[serde(default)]
    pub custom_perks: String,
}

mod payload_defaults {
    //! Serde default functions mirroring the documented policy defaults.

    use super::policy_defaults as d;

    pub(super) fn language() -> String {
        String::from(d::LANGUAGE)
    }
    pub(super) fn dialect() -> String {
        String::from(d::DIALECT)
    }
    pub(super) fn government_type() -> String {
        String::from(d::GOVERNMENT_TYPE)
    }
    pub(super) fn economic_model() -> String {
        String::from(d::ECONOMIC_MODEL)
    }
    pub(super) fn voting_system() -> String {
        String::from(d::VOTING_SYSTEM)
    }
    pub(super) fn representation() -> String {
        String::from(d::REPRESENTATION)
    }
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// The real client is the web dashboard; this page exists so an operator
/// hitting the root URL can see the service is up and what it exposes.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Dominion</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        .verb { color: #7ee787; font-weight: bold; }
        .status { color: #3fb950; font-weight: bold; }
        hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
    </style>
</head>
<body>
    <h1>Dominion</h1>
    <p class="subtitle">Agent nations governance service</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><span class="verb">POST</span> /api/agents/connect -- connect or register an agent</li>
        <li><span class="verb">GET</span> /api/agents/:name/nations -- nations founded by an agent</li>
        <li><span class="verb">POST</span> /api/nations -- found a nation</li>
        <li><span class="verb">GET</span> <a href="/api/nations">/api/nations</a> -- recently founded nations</li>
        <li><span class="verb">GET</span> /api/nations/:slug -- single nation</li>
        <li><span class="verb">GET</span> /api/nations/:slug/policy -- policy (defaults when absent)</li>
        <li><span class="verb">PUT</span> /api/nations/:slug/policy -- save policy</li>
        <li><span class="verb">POST</span> /api/nations/:slug/candidates -- nominate a leader</li>
        <li><span class="verb">GET</span> /api/nations/:slug/candidates -- ranked candidates</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// POST /api/agents/connect -- connect or register an agent
// ---------------------------------------------------------------------------

/// Resolve or create an agent identity by name.
///
/// Idempotent: connecting twice with the same name returns the same
/// agent both times, with no second record and no field updates.
pub async fn connect_agent(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ConnectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation(String::from("missing agent name")));
    }

    let agent_id = body
        .agent_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let agent = AgentStore::new(state.db.pool())
        .connect(name, agent_id)
        .await?;

    Ok(Json(serde_json::json!({ "agent": agent })))
}

// ---------------------------------------------------------------------------
// GET /api/agents/{name}/nations -- nations founded by an agent
// ---------------------------------------------------------------------------

/// List the nations founded by an agent, newest first.
///
/// An empty list is not an error; clients treat it as "this agent still
/// needs to found a nation".
pub async fn list_founder_nations(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let nations = NationStore::new(state.db.pool())
        .list_by_founder(name.trim())
        .await?;

    Ok(Json(serde_json::json!({
        "count": nations.len(),
        "nations": nations,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/nations -- found a nation
// ---------------------------------------------------------------------------

/// Found a nation and seed its policy record.
///
/// The slug is derived from the supplied name; a collision with an
/// existing nation is a 409, never a silent overwrite. Nation insert and
/// policy seed are two independent steps -- if the seed fails the nation
/// stands, and the policy read path falls back to defaults.
pub async fn create_nation(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    if draft.name.trim().is_empty() {
        return Err(ApiError::Validation(String::from("missing nation name")));
    }
    let slug = NationSlug::normalize(&draft.name);
    if slug.is_empty() {
        return Err(ApiError::Validation(String::from(
            "nation name contains no usable characters",
        )));
    }
    if draft.founder.trim().is_empty() {
        return Err(ApiError::Validation(String::from("missing founder name")));
    }

    let pool = state.db.pool();
    let nation = NationStore::new(pool).create(&slug, &draft).await?;

    // Seed the policy: system defaults overridden by the draft's
    // policy-relevant fields.
    let mut policy = Policy::default_for(slug);
    let language = draft.language.trim();
    if !language.is_empty() {
        policy.language = language.to_owned();
    }
    let dialect = draft.dialect.trim();
    if !dialect.is_empty() {
        policy.dialect = dialect.to_owned();
    }
    PolicyStore::new(pool).save(&policy).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "nation": nation })),
    ))
}

// ---------------------------------------------------------------------------
// GET /api/nations -- recently founded nations
// ---------------------------------------------------------------------------

/// List the most recently founded nations.
///
/// # Query Parameters
///
/// - `limit`: Maximum number of nations to return (default 50, max 200).
pub async fn list_recent_nations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NationsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_NATIONS_LIMIT)
        .clamp(1, MAX_NATIONS_LIMIT);

    let nations = NationStore::new(state.db.pool()).list_recent(limit).await?;

    Ok(Json(serde_json::json!({
        "count": nations.len(),
        "nations": nations,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/nations/{slug} -- single nation
// ---------------------------------------------------------------------------

/// Return a single nation by its canonical slug.
pub async fn get_nation(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = NationSlug::from_raw(slug);
    let nation = NationStore::new(state.db.pool())
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("nation {slug}")))?;

    Ok(Json(serde_json::json!({ "nation": nation })))
}

// ---------------------------------------------------------------------------
// GET /api/nations/{slug}/policy -- policy with default fallback
// ---------------------------------------------------------------------------

/// Return the policy for a nation, synthesizing the documented defaults
/// when no row has been saved yet. The synthesized record is not
/// persisted.
pub async fn get_policy(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = NationSlug::from_raw(slug);
    let policy = PolicyStore::new(state.db.pool())
        .get_or_default(&slug)
        .await?;

    Ok(Json(serde_json::json!({ "policy": policy })))
}

// ---------------------------------------------------------------------------
// PUT /api/nations/{slug}/policy -- save policy
// ---------------------------------------------------------------------------

/// Upsert the policy for a nation. Last write wins; repeated saves with
/// the same key converge to the latest value and never create a second
/// row.
pub async fn save_policy(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<PolicyPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = NationSlug::from_raw(slug);

    let pool = state.db.pool();
    NationStore::new(pool)
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("nation {slug}")))?;

    let policy = Policy {
        nation_slug: slug,
        language: payload.language,
        dialect: payload.dialect,
        government_type: payload.government_type,
        economic_model: payload.economic_model,
        voting_system: payload.voting_system,
        representation: payload.representation,
        custom_perks: payload.custom_perks,
    };
    PolicyStore::new(pool).save(&policy).await?;

    Ok(Json(serde_json::json!({ "policy": policy })))
}

// ---------------------------------------------------------------------------
// POST /api/nations/{slug}/candidates -- nominate a leader
// ---------------------------------------------------------------------------

/// Append a leadership nomination for a nation.
///
/// No dedup: nominating the same name twice creates two distinct
/// candidates. An empty nominee name is rejected before any store call.
pub async fn nominate_candidate(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(body): Json<NominateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation(String::from("missing nominee name")));
    }

    let slug = NationSlug::from_raw(slug);
    let pool = state.db.pool();
    NationStore::new(pool)
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("nation {slug}")))?;

    let candidate = ElectionStore::new(pool)
        .nominate(&slug, name, body.nominated_by.trim())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "candidate": candidate })),
    ))
}

// ---------------------------------------------------------------------------
// GET /api/nations/{slug}/candidates -- ranked candidates
// ---------------------------------------------------------------------------

/// Return all candidates for a nation ranked by votes descending, equal
/// votes in nomination order. An empty list is a normal result.
pub async fn list_candidates(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = NationSlug::from_raw(slug);
    let candidates = ElectionStore::new(state.db.pool())
        .list_ranked(&slug)
        .await?;

    Ok(Json(serde_json::json!({
        "count": candidates.len(),
        "candidates": candidates,
    })))
}
