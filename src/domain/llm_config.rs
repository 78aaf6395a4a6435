//! Per-project LLM provider configuration.
//!
//! A [`ProjectLlmConfig`] is keyed by its caller-supplied `project_id`.
//! The store keeps at most one record per project; writes come in two
//! shapes: a full [`LlmConfigDraft`] (create-or-replace) and a partial
//! [`LlmConfigPatch`] (merge only the fields that are present).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Provider name used by the fabricated default configuration.
pub const DEFAULT_PROVIDER: &str = "gemini";

/// Model used by the fabricated default configuration.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Project name used by the fabricated default configuration.
pub const DEFAULT_PROJECT_NAME: &str = "Default Project";

/// One provider/model/key entry of a project configuration.
///
/// Provider and model names are free-form; nothing checks them against a
/// catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LlmProvider {
    /// Provider name, e.g. `"gemini"`, `"openai"`, `"anthropic"`.
    pub provider: String,
    /// Model name, e.g. `"gpt-4"`.
    pub model: String,
    /// API key for the provider. Treated as a secret: never logged.
    pub api_key: String,
    /// Whether this provider may be used.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Stored LLM configuration for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectLlmConfig {
    /// Record identifier (UUID v4), assigned on first write.
    pub id: Uuid,
    /// Logical key of the record.
    pub project_id: String,
    /// Human-readable project name.
    pub project_name: String,
    /// Ordered provider entries.
    pub llm_providers: Vec<LlmProvider>,
    /// Name of the provider to use by default. Not validated against
    /// `llm_providers`.
    pub default_provider: String,
    /// Time of first write. Never changes afterwards.
    pub created_at: DateTime<Utc>,
    /// Time of the most recent write.
    pub updated_at: DateTime<Utc>,
}

impl ProjectLlmConfig {
    /// Builds a new record from a draft, stamping both timestamps with `now`.
    #[must_use]
    pub fn from_draft(draft: &LlmConfigDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id: draft.project_id.clone(),
            project_name: draft.project_name.clone(),
            llm_providers: draft.llm_providers.clone(),
            default_provider: draft.default_provider.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Fabricates the configuration returned for a project with no stored
    /// record: a single enabled Gemini provider with an empty key.
    ///
    /// The result is never persisted.
    #[must_use]
    pub fn fallback(project_id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id: project_id.to_string(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            llm_providers: vec![LlmProvider {
                provider: DEFAULT_PROVIDER.to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key: String::new(),
                enabled: true,
            }],
            default_provider: DEFAULT_PROVIDER.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field with the draft's values.
    ///
    /// `id`, `project_id` and `created_at` are left untouched.
    pub fn replace_with(&mut self, draft: &LlmConfigDraft, now: DateTime<Utc>) {
        self.project_name.clone_from(&draft.project_name);
        self.llm_providers.clone_from(&draft.llm_providers);
        self.default_provider.clone_from(&draft.default_provider);
        self.updated_at = now;
    }

    /// Merges the fields present in `patch`. `updated_at` always moves to
    /// `now`, even for an empty patch.
    pub fn apply_patch(&mut self, patch: &LlmConfigPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.project_name {
            self.project_name.clone_from(name);
        }
        if let Some(providers) = &patch.llm_providers {
            self.llm_providers.clone_from(providers);
        }
        if let Some(default_provider) = &patch.default_provider {
            self.default_provider.clone_from(default_provider);
        }
        self.updated_at = now;
    }
}

/// Full configuration supplied to create-or-update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfigDraft {
    /// Logical key of the record.
    pub project_id: String,
    /// Human-readable project name.
    pub project_name: String,
    /// Ordered provider entries.
    pub llm_providers: Vec<LlmProvider>,
    /// Name of the default provider.
    pub default_provider: String,
}

/// Partial configuration update. `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmConfigPatch {
    /// New project name.
    pub project_name: Option<String>,
    /// New provider list (replaces the whole list).
    pub llm_providers: Option<Vec<LlmProvider>>,
    /// New default provider name.
    pub default_provider: Option<String>,
}
