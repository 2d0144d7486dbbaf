use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "homework.log";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL (without the `/bot<token>` suffix)
    pub telegram_api_url: String,

    /// Pause between two polls, applied after every iteration
    pub retry_interval: Duration,

    /// Per-request timeout for both the review API and Telegram
    pub request_timeout: Duration,

    /// Initial cursor override; `None` means "now"
    pub from_date: Option<i64>,

    /// File the log is appended to, in addition to stdout
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// All missing required variables are reported at once. Empty values
    /// count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let practicum_token = get("PRACTICUM_TOKEN");
        let telegram_token = get("TELEGRAM_TOKEN");
        let telegram_chat_id = get("TELEGRAM_CHAT_ID");

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token.clone(), telegram_token.clone(), telegram_chat_id.clone())
        else {
            let missing = [
                ("PRACTICUM_TOKEN", practicum_token.is_none()),
                ("TELEGRAM_TOKEN", telegram_token.is_none()),
                ("TELEGRAM_CHAT_ID", telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(ConfigError::Missing(missing));
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval: Duration::from_secs(parse_or(
                "RETRY_INTERVAL_SECS",
                get("RETRY_INTERVAL_SECS"),
                DEFAULT_RETRY_INTERVAL_SECS,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            from_date: get("FROM_DATE")
                .map(|raw| {
                    raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                        var: "FROM_DATE",
                        value: raw,
                    })
                })
                .transpose()?,
            log_file: get("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }

    /// Log file path, resolved before the rest of the configuration so the
    /// configuration check itself can be logged.
    pub fn log_file_from_env() -> PathBuf {
        dotenvy::dotenv().ok();
        std::env::var("LOG_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

fn parse_or(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

// Tokens never reach the logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .field("log_file", &self.log_file)
            .finish()
    }
}
