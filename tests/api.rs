//! End-to-end tests of the REST surface against an in-memory store.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use review_gateway::api;
use review_gateway::app_state::AppState;
use review_gateway::config::TelegramConfig;
use review_gateway::persistence::MemoryStore;

fn app_with(telegram: &TelegramConfig) -> Router {
    let Ok(state) = AppState::new(Arc::new(MemoryStore::new()), telegram) else {
        panic!("state build failed");
    };
    api::build_router().with_state(state)
}

fn app() -> Router {
    app_with(&TelegramConfig::default())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("request build failed");
    };
    let response = app
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});
    let status = response.status();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body read failed");
    };
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn config_body(project_id: &str, name: &str) -> Value {
    json!({
        "project_id": project_id,
        "project_name": name,
        "llm_providers": [
            {"provider": "openai", "model": "gpt-4", "api_key": "sk-x", "enabled": true},
            {"provider": "anthropic", "model": "claude-3-sonnet", "api_key": "sk-y"}
        ],
        "default_provider": "openai"
    })
}

fn review_body(issue_count: usize) -> Value {
    let issues: Vec<Value> = (0..issue_count)
        .map(|n| {
            json!({
                "id": format!("i{n}"),
                "file": "src/lib.rs",
                "line": n,
                "severity": "warning",
                "message": "check this",
                "rule": "style"
            })
        })
        .collect();
    json!({
        "mrTitle": "Add feature",
        "mrUrl": "https://gitlab.example.com/mr/3",
        "author": "kim",
        "filesChanged": 1,
        "linesAdded": 2,
        "linesRemoved": 3,
        "reviewTime": "5s",
        "status": "warnings",
        "issues": issues,
        "summary": "Fine."
    })
}

#[tokio::test]
async fn api_root_greets() {
    let (status, body) = call(&app(), Method::GET, "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello World");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = call(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn status_append_and_list() {
    let app = app();
    let (status, created) = call(
        &app,
        Method::POST,
        "/api/status",
        Some(json!({"client_name": "web"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["client_name"], "web");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(created["timestamp"].is_string());

    let (status, listed) = call(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn missing_config_returns_default_without_saving() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/llm-config/unknown", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project_id"], "unknown");
    assert_eq!(body["project_name"], "Default Project");
    assert_eq!(body["default_provider"], "gemini");
    assert_eq!(body["llm_providers"][0]["model"], "gemini-1.5-pro");
    assert_eq!(body["llm_providers"][0]["api_key"], "");
    assert_eq!(body["llm_providers"][0]["enabled"], true);

    let (_, all) = call(&app, Method::GET, "/api/llm-config", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn upsert_twice_keeps_one_record() {
    let app = app();
    let (status, first) = call(
        &app,
        Method::POST,
        "/api/llm-config",
        Some(config_body("shop", "Shop")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["llm_providers"][1]["enabled"], true);

    let (_, second) = call(
        &app,
        Method::POST,
        "/api/llm-config",
        Some(config_body("shop", "Shop")),
    )
    .await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["created_at"], first["created_at"]);
    assert_eq!(second["llm_providers"], first["llm_providers"]);

    let (_, all) = call(&app, Method::GET, "/api/llm-config", None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (_, fetched) = call(&app, Method::GET, "/api/llm-config/shop", None).await;
    assert_eq!(fetched["project_name"], "Shop");
}

#[tokio::test]
async fn partial_update_merges_name_only() {
    let app = app();
    let (_, created) = call(
        &app,
        Method::POST,
        "/api/llm-config",
        Some(config_body("blog", "Blog")),
    )
    .await;

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/api/llm-config/blog",
        Some(json!({"project_name": "Blog 2", "default_provider": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["project_name"], "Blog 2");
    assert_eq!(updated["default_provider"], "openai");
    assert_eq!(updated["llm_providers"], created["llm_providers"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn update_and_delete_unknown_are_not_found() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/llm-config/ghost",
        Some(json!({"project_name": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Configuration not found");

    let (status, _) = call(&app, Method::DELETE, "/api/llm-config/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = call(&app, Method::GET, "/api/llm-config", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn delete_existing_confirms() {
    let app = app();
    let _ = call(
        &app,
        Method::POST,
        "/api/llm-config",
        Some(config_body("tmp", "Tmp")),
    )
    .await;

    let (status, body) = call(&app, Method::DELETE, "/api/llm-config/tmp", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Configuration deleted successfully");

    let (_, fetched) = call(&app, Method::GET, "/api/llm-config/tmp", None).await;
    assert_eq!(fetched["project_name"], "Default Project");
}

#[tokio::test]
async fn config_body_missing_field_is_bad_request() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/llm-config",
        Some(json!({"project_id": "p"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
    assert!(
        body["error"]["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("invalid request: ") && m.contains("project_name"))
    );

    let (_, all) = call(&app, Method::GET, "/api/llm-config", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn malformed_json_bodies_are_bad_request() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/status",
        Some(json!({"client_name": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/send-telegram-notification",
        Some(json!({"mrTitle": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn notification_without_credentials_is_server_error() {
    let (status, body) = call(
        &app(),
        Method::POST,
        "/api/send-telegram-notification",
        Some(review_body(1)),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "TELEGRAM_BOT_TOKEN is not configured");
}

#[tokio::test]
async fn notification_is_delivered() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/botbot-token/sendMessage")
        .match_body(mockito::Matcher::Regex("and 2 more issues".to_string()))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":{"message_id":101}}"#)
        .create_async()
        .await;

    let app = app_with(&TelegramConfig {
        bot_token: Some("bot-token".to_string()),
        chat_id: Some("777".to_string()),
        api_base: server.url(),
        timeout_secs: 2,
    });
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/send-telegram-notification",
        Some(review_body(7)),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "messageId": "101"}));
}

#[tokio::test]
async fn notification_rejected_by_telegram() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/botbot-token/sendMessage")
        .with_status(403)
        .with_body(r#"{"ok":false,"description":"Forbidden: bot was blocked by the user"}"#)
        .create_async()
        .await;

    let app = app_with(&TelegramConfig {
        bot_token: Some("bot-token".to_string()),
        chat_id: Some("777".to_string()),
        api_base: server.url(),
        timeout_secs: 2,
    });
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/send-telegram-notification",
        Some(review_body(0)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"]["message"],
        "Telegram API error: Forbidden: bot was blocked by the user"
    );
}
