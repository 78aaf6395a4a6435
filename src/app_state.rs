//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::TelegramConfig;
use crate::error::GatewayError;
use crate::persistence::Store;
use crate::service::{LlmConfigService, NotificationService, StatusService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store handle, used directly only by the health check.
    pub store: Arc<dyn Store>,
    /// Status log operations.
    pub status_service: Arc<StatusService>,
    /// Project LLM configuration operations.
    pub llm_config_service: Arc<LlmConfigService>,
    /// Review notification delivery.
    pub notification_service: Arc<NotificationService>,
}

impl AppState {
    /// Wires every service to the shared `store`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the Telegram HTTP client
    /// cannot be built.
    pub fn new(store: Arc<dyn Store>, telegram: &TelegramConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            status_service: Arc::new(StatusService::new(Arc::clone(&store))),
            llm_config_service: Arc::new(LlmConfigService::new(Arc::clone(&store))),
            notification_service: Arc::new(NotificationService::new(telegram)?),
            store,
        })
    }
}
