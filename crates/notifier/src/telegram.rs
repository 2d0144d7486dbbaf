//! Telegram Bot API delivery (`sendMessage`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use homework_common::config::AppConfig;

use crate::{Notifier, NotifyError};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    description: Option<String>,
}

/// Sends every message to one fixed chat.
pub struct TelegramNotifier {
    client: Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// `api_url` is the Bot API base, e.g. `https://api.telegram.org`.
    pub fn new(
        api_url: &str,
        token: &str,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            send_url: format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), token),
            chat_id: chat_id.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            config.telegram_chat_id.clone(),
            config.request_timeout,
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        // The request URL embeds the bot token, keep it out of error messages.
        let response = self
            .client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        match serde_json::from_str::<BotApiReply>(&raw) {
            Ok(reply) if reply.ok && status.is_success() => {
                tracing::debug!(chat_id = %self.chat_id, "Telegram accepted message");
                Ok(())
            }
            Ok(reply) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: raw,
            }),
        }
    }
}
