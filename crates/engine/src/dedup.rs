//! Dedup state: suppresses repeated notifications.
//!
//! Two independent checks, both by value:
//! - the newest homework record is compared with the last one seen, so an
//!   unchanged submission is not even formatted;
//! - the rendered text (status message or error message) is compared with the
//!   last text sent, so the chat never receives the same line twice in a row.
//!
//! State lives in memory only. A restart forgets it, at the cost of one
//! repeated message after the restart.

use homework_common::types::HomeworkRecord;

/// What the bot remembers between two polls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    last_seen_record: Option<HomeworkRecord>,
    last_sent_text: Option<String>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `record` equals the record seen on the last successful poll.
    pub fn is_unchanged(&self, record: &HomeworkRecord) -> bool {
        self.last_seen_record.as_ref() == Some(record)
    }

    /// `true` if `text` differs from the last sent text.
    pub fn should_send(&self, text: &str) -> bool {
        self.last_sent_text.as_deref() != Some(text)
    }

    /// Remember the record of a successful poll.
    pub fn record_seen(&mut self, record: HomeworkRecord) {
        self.last_seen_record = Some(record);
    }

    /// Remember a text handed to the notifier, delivered or not.
    pub fn record_sent(&mut self, text: String) {
        self.last_sent_text = Some(text);
    }

    pub fn last_seen_record(&self) -> Option<&HomeworkRecord> {
        self.last_seen_record.as_ref()
    }

    pub fn last_sent_text(&self) -> Option<&str> {
        self.last_sent_text.as_deref()
    }
}
