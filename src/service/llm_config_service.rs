//! Project LLM configuration: create-or-update, fetch, patch, delete.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{LlmConfigDraft, LlmConfigPatch, ProjectLlmConfig};
use crate::error::GatewayError;
use crate::persistence::{LIST_LIMIT, Store};

/// Manages [`ProjectLlmConfig`] records keyed by `project_id`.
///
/// Reads of an unknown project fall back to
/// [`ProjectLlmConfig::fallback`]; updates and deletes of an unknown
/// project fail with [`GatewayError::ConfigNotFound`].
#[derive(Debug, Clone)]
pub struct LlmConfigService {
    store: Arc<dyn Store>,
}

impl LlmConfigService {
    /// Creates a new `LlmConfigService`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates the configuration for `draft.project_id`, or replaces the
    /// project name, provider list and default provider of the existing
    /// one. `created_at` and `id` survive a replace; `updated_at` is
    /// always refreshed.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store write fails.
    pub async fn upsert(&self, draft: &LlmConfigDraft) -> Result<ProjectLlmConfig, GatewayError> {
        self.upsert_at(draft, Utc::now()).await
    }

    /// [`Self::upsert`] with an explicit write time.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store write fails.
    pub async fn upsert_at(
        &self,
        draft: &LlmConfigDraft,
        now: DateTime<Utc>,
    ) -> Result<ProjectLlmConfig, GatewayError> {
        let config = self.store.upsert_llm_config(draft, now).await?;
        tracing::info!(
            project_id = %config.project_id,
            id = %config.id,
            providers = config.llm_providers.len(),
            "llm config saved"
        );
        Ok(config)
    }

    /// Returns the stored configuration for `project_id`, or the unsaved
    /// fallback configuration if there is none.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store read fails.
    /// An absent record is not an error.
    pub async fn get(&self, project_id: &str) -> Result<ProjectLlmConfig, GatewayError> {
        match self.store.find_llm_config(project_id).await? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!(project_id, "no llm config stored, returning fallback");
                Ok(ProjectLlmConfig::fallback(project_id))
            }
        }
    }

    /// Returns up to [`LIST_LIMIT`] stored configurations.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store read fails.
    pub async fn list(&self) -> Result<Vec<ProjectLlmConfig>, GatewayError> {
        self.store.list_llm_configs(LIST_LIMIT).await
    }

    /// Merges the present fields of `patch` into the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ConfigNotFound`] if no configuration is
    /// stored for `project_id`.
    pub async fn update(
        &self,
        project_id: &str,
        patch: &LlmConfigPatch,
    ) -> Result<ProjectLlmConfig, GatewayError> {
        self.update_at(project_id, patch, Utc::now()).await
    }

    /// [`Self::update`] with an explicit write time.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ConfigNotFound`] if no configuration is
    /// stored for `project_id`.
    pub async fn update_at(
        &self,
        project_id: &str,
        patch: &LlmConfigPatch,
        now: DateTime<Utc>,
    ) -> Result<ProjectLlmConfig, GatewayError> {
        let Some(config) = self
            .store
            .update_llm_config(project_id, patch, now)
            .await?
        else {
            tracing::warn!(project_id, "update of unknown llm config");
            return Err(GatewayError::ConfigNotFound(project_id.to_string()));
        };
        tracing::info!(project_id, id = %config.id, "llm config updated");
        Ok(config)
    }

    /// Deletes the configuration for `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ConfigNotFound`] if no configuration is
    /// stored for `project_id`.
    pub async fn delete(&self, project_id: &str) -> Result<(), GatewayError> {
        if !self.store.delete_llm_config(project_id).await? {
            tracing::warn!(project_id, "delete of unknown llm config");
            return Err(GatewayError::ConfigNotFound(project_id.to_string()));
        }
        tracing::info!(project_id, "llm config deleted");
        Ok(())
    }
}
