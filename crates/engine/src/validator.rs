//! Response validator: structural checks on a decoded API response.
//!
//! The API answers with `{"homeworks": [...], "current_date": <ts>}`, newest
//! homework first. Only the leading element is ever consumed downstream.

use serde_json::Value;

use homework_common::error::HomeworkError;

/// Verify the response shape and return the `homeworks` sequence unchanged.
///
/// - root is not an object, or has no `homeworks` key → `MalformedResponse`
/// - `homeworks` is not an array → `NotASequence`
/// - `homeworks` is empty → `EmptySequence`
pub fn check_response(response: &Value) -> Result<&[Value], HomeworkError> {
    let homeworks = response
        .as_object()
        .and_then(|root| root.get("homeworks"))
        .ok_or(HomeworkError::MalformedResponse)?;

    let homeworks = homeworks.as_array().ok_or(HomeworkError::NotASequence)?;

    if homeworks.is_empty() {
        return Err(HomeworkError::EmptySequence);
    }

    tracing::debug!(count = homeworks.len(), "Response passed validation");
    Ok(homeworks.as_slice())
}

/// Validate the response and return its newest homework entry.
pub fn latest_homework(response: &Value) -> Result<&Value, HomeworkError> {
    check_response(response)?
        .first()
        .ok_or(HomeworkError::EmptySequence)
}
