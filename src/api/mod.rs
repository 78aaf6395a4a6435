//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Resource endpoints are mounted under `/api`; `/health` sits at the root.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "review-gateway",
        description = "Project LLM configuration and code-review notifications"
    ),
    paths(
        handlers::system::root_handler,
        handlers::system::health_handler,
        handlers::status::create_status_check,
        handlers::status::list_status_checks,
        handlers::llm_config::upsert_llm_config,
        handlers::llm_config::get_llm_config,
        handlers::llm_config::list_llm_configs,
        handlers::llm_config::update_llm_config,
        handlers::llm_config::delete_llm_config,
        handlers::notification::send_telegram_notification,
    ),
    tags(
        (name = "System", description = "Liveness and API root"),
        (name = "Status", description = "Client status check log"),
        (name = "LLM Config", description = "Per-project LLM provider configuration"),
        (name = "Notifications", description = "Code-review notifications to Telegram"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature, Swagger UI is served at `/api/docs` and
/// the OpenAPI document at `/api/docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/api/docs")
            .url("/api/docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/",
            "/health",
            "/api/status",
            "/api/llm-config",
            "/api/llm-config/{project_id}",
            "/api/send-telegram-notification",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
