//! Status check handlers: append and list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::StatusCheckCreate;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::StatusCheck;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /status` — Record a client check-in.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the record cannot be stored.
#[utoipa::path(
    post,
    path = "/api/status",
    tag = "Status",
    summary = "Record a status check",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_status_check(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<StatusCheckCreate>,
) -> Result<impl IntoResponse, GatewayError> {
    let check = state.status_service.append(&req.client_name).await?;
    Ok(Json(check))
}

/// `GET /status` — List recorded check-ins.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    summary = "List status checks",
    description = "Returns up to 1000 status checks in storage order.",
    responses(
        (status = 200, description = "Stored status checks", body = Vec<StatusCheck>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let checks = state.status_service.list().await?;
    Ok(Json(checks))
}

/// Status log routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/status", post(create_status_check).get(list_status_checks))
}
