//! Persistence layer: the document-store seam.
//!
//! [`Store`] abstracts the two logical collections the service uses,
//! `status_checks` and `llm_configs`. [`PostgresStore`] is the production
//! backend; [`MemoryStore`] backs `PERSISTENCE_ENABLED=false` and tests.
//! Services receive the store as an `Arc<dyn Store>` at construction.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{LlmConfigDraft, LlmConfigPatch, ProjectLlmConfig, StatusCheck};
use crate::error::GatewayError;

/// Maximum number of records returned by a list operation.
pub const LIST_LIMIT: usize = 1000;

/// Storage operations for status checks and project LLM configurations.
///
/// Every method is a single store operation. List results come back in
/// storage iteration order; no sort is defined.
#[async_trait]
pub trait Store: fmt::Debug + Send + Sync {
    /// Appends a status check record.
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), GatewayError>;

    /// Returns up to `limit` status check records.
    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, GatewayError>;

    /// Looks up the configuration stored for `project_id`.
    async fn find_llm_config(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError>;

    /// Inserts a configuration for `draft.project_id`, or replaces the
    /// mutable fields of the existing one. `id` and `created_at` of an
    /// existing record are preserved.
    async fn upsert_llm_config(
        &self,
        draft: &LlmConfigDraft,
        now: DateTime<Utc>,
    ) -> Result<ProjectLlmConfig, GatewayError>;

    /// Merges `patch` into the record for `project_id` if one exists.
    /// Returns `None` when nothing matched.
    async fn update_llm_config(
        &self,
        project_id: &str,
        patch: &LlmConfigPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError>;

    /// Deletes the record for `project_id`. Returns `true` if a record
    /// was removed.
    async fn delete_llm_config(&self, project_id: &str) -> Result<bool, GatewayError>;

    /// Returns up to `limit` configuration records.
    async fn list_llm_configs(&self, limit: usize)
    -> Result<Vec<ProjectLlmConfig>, GatewayError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), GatewayError>;
}
