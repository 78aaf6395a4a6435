//! LLM configuration DTOs for create-or-update, partial update, and delete.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LlmConfigDraft, LlmConfigPatch, LlmProvider};

/// Request body for `POST /api/llm-config`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectLlmConfigCreate {
    /// Logical key of the configuration.
    pub project_id: String,
    /// Human-readable project name.
    pub project_name: String,
    /// Ordered provider entries.
    pub llm_providers: Vec<LlmProvider>,
    /// Provider to use by default.
    pub default_provider: String,
}

impl From<ProjectLlmConfigCreate> for LlmConfigDraft {
    fn from(req: ProjectLlmConfigCreate) -> Self {
        Self {
            project_id: req.project_id,
            project_name: req.project_name,
            llm_providers: req.llm_providers,
            default_provider: req.default_provider,
        }
    }
}

/// Request body for `PUT /api/llm-config/{project_id}`. Absent or `null`
/// fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProjectLlmConfigUpdate {
    /// New project name.
    #[serde(default)]
    pub project_name: Option<String>,
    /// Replacement provider list.
    #[serde(default)]
    pub llm_providers: Option<Vec<LlmProvider>>,
    /// New default provider.
    #[serde(default)]
    pub default_provider: Option<String>,
}

impl From<ProjectLlmConfigUpdate> for LlmConfigPatch {
    fn from(req: ProjectLlmConfigUpdate) -> Self {
        Self {
            project_name: req.project_name,
            llm_providers: req.llm_providers,
            default_provider: req.default_provider,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn update_with_nulls_is_empty_patch() {
        let json = r#"{"project_name":null,"default_provider":null}"#;
        let Ok(req) = serde_json::from_str::<ProjectLlmConfigUpdate>(json) else {
            panic!("update should deserialize");
        };
        assert_eq!(LlmConfigPatch::from(req), LlmConfigPatch::default());
    }

    #[test]
    fn create_requires_providers() {
        let json = r#"{"project_id":"p","project_name":"n","default_provider":"gemini"}"#;
        assert!(serde_json::from_str::<ProjectLlmConfigCreate>(json).is_err());
    }
}
