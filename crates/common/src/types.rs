use chrono::Utc;
use serde::Deserialize;

/// Review status reported by the homework API.
///
/// Deserialized from the lowercase wire code; any other value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The newest homework entry of an API response, after shape checks.
///
/// Compared by value: two polls returning the same name and status are the
/// same record, regardless of any other fields in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

/// Start of the next query window, as unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Cursor positioned at the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Move the cursor to the server-supplied `current_date` of a response.
    ///
    /// Leaves the cursor untouched when the field is absent or not an integer.
    /// Returns `true` if the cursor moved.
    pub fn advance_from(&mut self, response: &serde_json::Value) -> bool {
        match response.get("current_date").and_then(serde_json::Value::as_i64) {
            Some(next) if next != self.0 => {
                self.0 = next;
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
