use std::time::Duration;

use serde_json::Value;

use homework_common::config::AppConfig;
use homework_common::error::HomeworkError;
use homework_common::types::PollCursor;
use homework_engine::dedup::NotificationState;
use homework_engine::{formatter, validator};
use homework_notifier::Notifier;

use crate::client::HomeworkApi;

/// Prefix of every error notification.
pub const ERROR_PREFIX: &str = "Сбой в работе программы";

/// Result of a single poll iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The status changed and the new status was delivered.
    Notified,
    /// Same record as the previous poll; nothing formatted.
    Unchanged,
    /// The record changed but rendered to the text already sent.
    Suppressed,
    /// The status changed but the notifier failed. Delivery is best-effort:
    /// the text still counts as sent and is not retried.
    DeliveryFailed,
    /// The iteration failed. An error notification was attempted unless it
    /// repeated the last sent text.
    Failed(HomeworkError),
}

/// Polls the homework API on a fixed interval and relays status changes.
///
/// Every iteration runs fetch → validate → compare → notify, then sleeps for
/// `retry_interval` regardless of the outcome. Errors never leave the loop.
pub struct HomeworkPoller<A, N> {
    api: A,
    notifier: N,
    retry_interval: Duration,
    cursor: PollCursor,
    state: NotificationState,
}

impl<A: HomeworkApi, N: Notifier> HomeworkPoller<A, N> {
    pub fn new(api: A, notifier: N, cursor: PollCursor, retry_interval: Duration) -> Self {
        Self {
            api,
            notifier,
            retry_interval,
            cursor,
            state: NotificationState::new(),
        }
    }

    /// Build a poller starting at `FROM_DATE` when configured, otherwise now.
    pub fn from_config(api: A, notifier: N, config: &AppConfig) -> Self {
        let cursor = config
            .from_date
            .map(PollCursor::new)
            .unwrap_or_else(PollCursor::now);
        Self::new(api, notifier, cursor, config.retry_interval)
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Run the polling loop. Never returns; stop it by dropping the future.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = %self.cursor,
            retry_interval_secs = self.retry_interval.as_secs(),
            "Homework poller started"
        );

        loop {
            let outcome = self.poll_once().await;
            tracing::debug!(?outcome, cursor = %self.cursor, "Poll iteration finished");
            tokio::time::sleep(self.retry_interval).await;
        }
    }

    /// One iteration without the trailing sleep.
    pub async fn poll_once(&mut self) -> PollOutcome {
        let response = match self.api.fetch(self.cursor).await {
            Ok(response) => response,
            Err(error) => return self.handle_error(error).await,
        };
        tracing::debug!(%response, "Fetched homework statuses");

        let outcome = match self.process(&response).await {
            Ok(outcome) => outcome,
            Err(error) => self.handle_error(error).await,
        };

        if self.cursor.advance_from(&response) {
            tracing::debug!(cursor = %self.cursor, "Cursor advanced");
        }

        outcome
    }

    async fn process(&mut self, response: &Value) -> Result<PollOutcome, HomeworkError> {
        let homework = validator::latest_homework(response)?;
        let record = formatter::parse_record(homework)?;

        if self.state.is_unchanged(&record) {
            tracing::info!(homework = %record.name, status = %record.status, "No status change");
            return Ok(PollOutcome::Unchanged);
        }

        let text = formatter::format_status(&record);
        if !self.state.should_send(&text) {
            tracing::info!(homework = %record.name, "Status text already sent, skipping");
            self.state.record_seen(record);
            return Ok(PollOutcome::Suppressed);
        }

        tracing::info!(homework = %record.name, status = %record.status, "Homework status changed");
        let delivered = self.deliver(&text).await;
        self.state.record_sent(text);
        self.state.record_seen(record);

        if delivered {
            Ok(PollOutcome::Notified)
        } else {
            Ok(PollOutcome::DeliveryFailed)
        }
    }

    async fn handle_error(&mut self, error: HomeworkError) -> PollOutcome {
        let message = format!("{}: {}", ERROR_PREFIX, error);
        tracing::error!(kind = error.kind(), error = %error, "Poll iteration failed");

        if self.state.should_send(&message) {
            self.deliver(&message).await;
            self.state.record_sent(message);
        } else {
            tracing::debug!(kind = error.kind(), "Repeated error, notification suppressed");
        }

        PollOutcome::Failed(error)
    }

    /// Send `text` once, logging either way. Returns `true` on delivery.
    async fn deliver(&self, text: &str) -> bool {
        match self.notifier.send(text).await {
            Ok(()) => {
                tracing::info!(text, "Message sent");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, text, "Failed to send message");
                false
            }
        }
    }
}
