//! LLM configuration handlers: upsert, get, list, patch, delete.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{MessageResponse, ProjectLlmConfigCreate, ProjectLlmConfigUpdate};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::{LlmConfigDraft, LlmConfigPatch, ProjectLlmConfig};
use crate::error::{ErrorResponse, GatewayError};

/// `POST /llm-config` — Create or update a project's LLM configuration.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the record cannot be stored.
#[utoipa::path(
    post,
    path = "/api/llm-config",
    tag = "LLM Config",
    summary = "Create or update a project configuration",
    description = "Creates the configuration for `project_id`, or replaces the name, providers and default provider of the existing one.",
    request_body = ProjectLlmConfigCreate,
    responses(
        (status = 200, description = "Stored configuration", body = ProjectLlmConfig),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn upsert_llm_config(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProjectLlmConfigCreate>,
) -> Result<impl IntoResponse, GatewayError> {
    let config = state
        .llm_config_service
        .upsert(&LlmConfigDraft::from(req))
        .await?;
    Ok(Json(config))
}

/// `GET /llm-config/{project_id}` — Get a project's configuration.
///
/// Unknown projects get a default Gemini configuration that is not saved.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/llm-config/{project_id}",
    tag = "LLM Config",
    summary = "Get a project configuration",
    description = "Returns the stored configuration, or an unsaved default (Gemini, gemini-1.5-pro) if none exists.",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
    ),
    responses(
        (status = 200, description = "Stored or default configuration", body = ProjectLlmConfig),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_llm_config(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let config = state.llm_config_service.get(&project_id).await?;
    Ok(Json(config))
}

/// `GET /llm-config` — List all stored configurations.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/llm-config",
    tag = "LLM Config",
    summary = "List project configurations",
    description = "Returns up to 1000 stored configurations in storage order.",
    responses(
        (status = 200, description = "Stored configurations", body = Vec<ProjectLlmConfig>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_llm_configs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let configs = state.llm_config_service.list().await?;
    Ok(Json(configs))
}

/// `PUT /llm-config/{project_id}` — Partially update a configuration.
///
/// # Errors
///
/// Returns [`GatewayError::ConfigNotFound`] if the project has no stored
/// configuration.
#[utoipa::path(
    put,
    path = "/api/llm-config/{project_id}",
    tag = "LLM Config",
    summary = "Update a project configuration",
    description = "Merges the non-null fields of the body into the stored configuration.",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
    ),
    request_body = ProjectLlmConfigUpdate,
    responses(
        (status = 200, description = "Updated configuration", body = ProjectLlmConfig),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse),
    )
)]
pub async fn update_llm_config(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ApiJson(req): ApiJson<ProjectLlmConfigUpdate>,
) -> Result<impl IntoResponse, GatewayError> {
    let config = state
        .llm_config_service
        .update(&project_id, &LlmConfigPatch::from(req))
        .await?;
    Ok(Json(config))
}

/// `DELETE /llm-config/{project_id}` — Delete a configuration.
///
/// # Errors
///
/// Returns [`GatewayError::ConfigNotFound`] if the project has no stored
/// configuration.
#[utoipa::path(
    delete,
    path = "/api/llm-config/{project_id}",
    tag = "LLM Config",
    summary = "Delete a project configuration",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
    ),
    responses(
        (status = 200, description = "Configuration deleted", body = MessageResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse),
    )
)]
pub async fn delete_llm_config(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    state.llm_config_service.delete(&project_id).await?;
    Ok(Json(MessageResponse {
        message: "Configuration deleted successfully".to_string(),
    }))
}

/// LLM configuration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/llm-config", post(upsert_llm_config).get(list_llm_configs))
        .route(
            "/llm-config/{project_id}",
            get(get_llm_config)
                .put(update_llm_config)
                .delete(delete_llm_config),
        )
}
