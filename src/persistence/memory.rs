//! In-process store with the same semantics as the PostgreSQL backend.
//!
//! Records live in insertion-ordered vectors behind a
//! [`tokio::sync::RwLock`]. Each trait method takes the lock once, so
//! create-or-update and update-if-exists are atomic with respect to
//! other callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::Store;
use crate::domain::{LlmConfigDraft, LlmConfigPatch, ProjectLlmConfig, StatusCheck};
use crate::error::GatewayError;

/// Volatile [`Store`] implementation. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    status_checks: RwLock<Vec<StatusCheck>>,
    llm_configs: RwLock<Vec<ProjectLlmConfig>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored configurations.
    pub async fn llm_config_count(&self) -> usize {
        self.llm_configs.read().await.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), GatewayError> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, GatewayError> {
        let checks = self.status_checks.read().await;
        Ok(checks.iter().take(limit).cloned().collect())
    }

    async fn find_llm_config(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError> {
        let configs = self.llm_configs.read().await;
        Ok(configs.iter().find(|c| c.project_id == project_id).cloned())
    }

    async fn upsert_llm_config(
        &self,
        draft: &LlmConfigDraft,
        now: DateTime<Utc>,
    ) -> Result<ProjectLlmConfig, GatewayError> {
        let mut configs = self.llm_configs.write().await;
        if let Some(existing) = configs
            .iter_mut()
            .find(|c| c.project_id == draft.project_id)
        {
            existing.replace_with(draft, now);
            return Ok(existing.clone());
        }
        let created = ProjectLlmConfig::from_draft(draft, now);
        configs.push(created.clone());
        Ok(created)
    }

    async fn update_llm_config(
        &self,
        project_id: &str,
        patch: &LlmConfigPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError> {
        let mut configs = self.llm_configs.write().await;
        Ok(configs
            .iter_mut()
            .find(|c| c.project_id == project_id)
            .map(|existing| {
                existing.apply_patch(patch, now);
                existing.clone()
            }))
    }

    async fn delete_llm_config(&self, project_id: &str) -> Result<bool, GatewayError> {
        let mut configs = self.llm_configs.write().await;
        match configs.iter().position(|c| c.project_id == project_id) {
            Some(idx) => {
                configs.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_llm_configs(
        &self,
        limit: usize,
    ) -> Result<Vec<ProjectLlmConfig>, GatewayError> {
        let configs = self.llm_configs.read().await;
        Ok(configs.iter().take(limit).cloned().collect())
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
