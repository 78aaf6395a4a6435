//! Code-review notification handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::TelegramNotificationRequest;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::ReviewReport;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::NotificationReceipt;

/// `POST /send-telegram-notification` — Forward a review result to Telegram.
///
/// # Errors
///
/// Returns [`GatewayError::Configuration`] when the bot token or chat id is
/// missing, [`GatewayError::Delivery`] when Telegram rejects or cannot be
/// reached, and [`GatewayError::Internal`] otherwise.
#[utoipa::path(
    post,
    path = "/api/send-telegram-notification",
    tag = "Notifications",
    summary = "Send a code-review notification",
    description = "Renders the review as an HTML message (top 5 issues itemized) and posts it to the configured Telegram chat. No retries.",
    request_body = TelegramNotificationRequest,
    responses(
        (status = 200, description = "Message delivered", body = NotificationReceipt),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 500, description = "Missing configuration or delivery failure", body = ErrorResponse),
    )
)]
pub async fn send_telegram_notification(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TelegramNotificationRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let report = ReviewReport::from(req);
    let receipt = state.notification_service.notify(&report).await?;
    Ok(Json(receipt))
}

/// Notification routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/send-telegram-notification",
        post(send_telegram_notification),
    )
}
