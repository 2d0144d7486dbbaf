//! Status formatter: turns one homework entry into the chat message.

use serde::Deserialize;
use serde_json::Value;

use homework_common::error::HomeworkError;
use homework_common::types::{HomeworkRecord, HomeworkStatus};

/// Human-readable verdict for a review status.
pub fn verdict(status: HomeworkStatus) -> &'static str {
    match status {
        HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
        HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
        HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
    }
}

/// Check the shape of a raw homework entry and extract the typed record.
///
/// Fields other than `homework_name` and `status` are ignored.
pub fn parse_record(homework: &Value) -> Result<HomeworkRecord, HomeworkError> {
    let fields = homework
        .as_object()
        .ok_or(HomeworkError::RecordNotAMapping)?;

    let name = fields
        .get("homework_name")
        .ok_or(HomeworkError::MissingName)?;
    let status = fields.get("status").ok_or(HomeworkError::MissingStatus)?;

    let name = raw_text(name);
    let status = HomeworkStatus::deserialize(status)
        .map_err(|_| HomeworkError::UnknownStatus(raw_text(status)))?;

    Ok(HomeworkRecord { name, status })
}

// Non-string values are rendered as JSON so the error text still shows them.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the notification text for a record.
pub fn format_status(record: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        verdict(record.status)
    )
}

/// Parse a raw homework entry and render its notification text.
pub fn parse_status(homework: &Value) -> Result<String, HomeworkError> {
    parse_record(homework).map(|record| format_status(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_verdict() {
        let text = parse_status(&json!({ "homework_name": "diploma", "status": "approved" }));
        assert_eq!(
            text.unwrap(),
            "Изменился статус проверки работы \"diploma\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing_verdict() {
        let text = parse_status(&json!({ "homework_name": "diploma", "status": "reviewing" }));
        assert_eq!(
            text.unwrap(),
            "Изменился статус проверки работы \"diploma\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected_verdict() {
        let text = parse_status(&json!({ "homework_name": "diploma", "status": "rejected" }));
        assert_eq!(
            text.unwrap(),
            "Изменился статус проверки работы \"diploma\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            parse_status(&json!({ "homework_name": "diploma", "status": "lost" })),
            Err(HomeworkError::UnknownStatus("lost".to_string()))
        );
        assert_eq!(
            parse_status(&json!({ "homework_name": "diploma", "status": 3 })),
            Err(HomeworkError::UnknownStatus("3".to_string()))
        );
    }

    #[test]
    fn test_status_codes_are_case_sensitive() {
        for status in [json!("Approved"), json!("REJECTED"), json!(""), json!(null)] {
            let expected = match &status {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            assert_eq!(
                parse_record(&json!({ "homework_name": "diploma", "status": status })),
                Err(HomeworkError::UnknownStatus(expected))
            );
        }
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            parse_status(&json!({ "status": "approved" })),
            Err(HomeworkError::MissingName)
        );
    }

    #[test]
    fn test_missing_status() {
        assert_eq!(
            parse_status(&json!({ "homework_name": "diploma" })),
            Err(HomeworkError::MissingStatus)
        );
    }

    #[test]
    fn test_missing_name_reported_before_missing_status() {
        assert_eq!(parse_status(&json!({})), Err(HomeworkError::MissingName));
    }

    #[test]
    fn test_record_not_a_mapping() {
        assert_eq!(
            parse_status(&json!(["diploma", "approved"])),
            Err(HomeworkError::RecordNotAMapping)
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = parse_record(&json!({
            "id": 124,
            "homework_name": "diploma",
            "status": "rejected",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект"
        }))
        .unwrap();
        assert_eq!(
            record,
            HomeworkRecord {
                name: "diploma".to_string(),
                status: HomeworkStatus::Rejected,
            }
        );
    }
}
