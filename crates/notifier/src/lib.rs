//! Notification delivery.
//!
//! Delivery is best-effort: a failed send is reported to the caller and never
//! retried here.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use telegram::TelegramNotifier;

/// Why a message did not reach the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Delivery rejected (HTTP {status}): {description}")]
    Rejected { status: u16, description: String },
}

/// A destination for text notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message to the configured destination.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
