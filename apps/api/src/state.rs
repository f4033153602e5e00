use std::sync::Arc;

use sqlx::MySqlPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::skills::oracle::SkillOracle;

/// Shared application state injected into all route handlers via Axum
/// extractors. Every field is a cheap clone; nothing here carries per-request
/// state, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub llm: LlmClient,
    /// Pluggable skill-matching backend. Default: `LlmSkillOracle`; tests
    /// swap in stub oracles with fixed mappings.
    pub skill_oracle: Arc<dyn SkillOracle>,
    /// Dedicated client for the internal file server (invalid-cert
    /// acceptance, 30s transfer bound) — see `store::attachments`.
    pub file_server: reqwest::Client,
    pub config: Config,
}
