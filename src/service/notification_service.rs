//! Review notifications: render a [`ReviewReport`] and post it to Telegram.

use serde::Serialize;
use utoipa::ToSchema;

use super::telegram::TelegramClient;
use crate::config::TelegramConfig;
use crate::domain::{ReviewReport, render_review_message};
use crate::error::GatewayError;

/// Outcome of a delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NotificationReceipt {
    /// Always `true` for a returned receipt; failures are errors.
    pub success: bool,
    /// Telegram message id, when reported.
    #[serde(rename = "messageId")]
    pub message_id: Option<String>,
}

/// Formats code-review results and forwards them to a Telegram chat.
///
/// The bot token and chat id are checked on every call; nothing is sent
/// unless both are configured.
#[derive(Clone)]
pub struct NotificationService {
    client: TelegramClient,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("client", &self.client)
            .field("bot_token_set", &self.bot_token.is_some())
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl NotificationService {
    /// Creates a new `NotificationService` from Telegram settings.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &TelegramConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: TelegramClient::new(config)?,
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Renders `report` and sends it.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Configuration`] if the bot token or chat id is
    ///   missing; no request is made.
    /// - [`GatewayError::Delivery`] / [`GatewayError::Internal`] from
    ///   [`TelegramClient::send_message`].
    pub async fn notify(&self, report: &ReviewReport) -> Result<NotificationReceipt, GatewayError> {
        let Some(bot_token) = self.bot_token.as_deref() else {
            tracing::error!("TELEGRAM_BOT_TOKEN is not configured");
            return Err(GatewayError::Configuration(
                "TELEGRAM_BOT_TOKEN is not configured".to_string(),
            ));
        };
        let Some(chat_id) = self.chat_id.as_deref() else {
            tracing::error!("TELEGRAM_CHAT_ID is not configured");
            return Err(GatewayError::Configuration(
                "TELEGRAM_CHAT_ID is not configured".to_string(),
            ));
        };

        tracing::info!(title = %report.title, issues = report.issues.len(), "sending telegram notification");

        let text = render_review_message(report);
        let message_id = self.client.send_message(bot_token, chat_id, &text).await?;

        tracing::info!(message_id = ?message_id, "telegram notification sent");
        Ok(NotificationReceipt {
            success: true,
            message_id,
        })
    }
}
