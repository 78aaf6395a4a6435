//! REST endpoint handlers organized by resource.

pub mod llm_config;
pub mod notification;
pub mod status;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(llm_config::routes())
        .merge(notification::routes())
}
