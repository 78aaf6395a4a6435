//! Minimal Telegram Bot API client: one `sendMessage` call, no retries.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::TelegramConfig;
use crate::error::GatewayError;

/// Body of a `sendMessage` request.
#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

/// Subset of the Bot API response envelope the gateway reads.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    #[serde(default)]
    message_id: Option<i64>,
}

/// HTTP client for the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
}

impl TelegramClient {
    /// Builds a client with the configured base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// constructed (e.g. TLS backend initialisation failure).
    pub fn new(config: &TelegramConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Posts `text` to `chat_id` in HTML parse mode.
    ///
    /// Returns the id of the sent message when Telegram reports one.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Delivery`] if Telegram answers with a non-success
    ///   status (carrying its `description`), or if the request never
    ///   completes (connection failure, timeout).
    /// - [`GatewayError::Internal`] if a success response cannot be decoded.
    pub async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<Option<String>, GatewayError> {
        let url = format!("{}/bot{bot_token}/sendMessage", self.api_base);
        let body = SendMessageBody {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: false,
        };

        // `without_url` keeps the bot token out of error messages.
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e.without_url()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e.without_url()))?;
        let parsed = serde_json::from_slice::<ApiResponse>(&bytes);

        if !status.is_success() {
            let description = parsed
                .ok()
                .and_then(|r| r.description)
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::error!(%status, %description, "telegram api rejected message");
            return Err(GatewayError::Delivery(format!(
                "Telegram API error: {description}"
            )));
        }

        let parsed = parsed.map_err(|e| {
            GatewayError::Internal(format!("unreadable telegram response: {e}"))
        })?;
        Ok(parsed
            .result
            .and_then(|m| m.message_id)
            .map(|id| id.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    tracing::error!(error = %err, "request error sending telegram notification");
    GatewayError::Delivery(format!("Failed to send Telegram notification: {err}"))
}
