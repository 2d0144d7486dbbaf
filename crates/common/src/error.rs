use thiserror::Error;

/// Everything that can go wrong during one poll iteration.
///
/// Display strings are user-facing: they end up in the chat as the detail of
/// an error notification, so they are written in the bot's language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeworkError {
    #[error("Запрос к API не отправлен: {0}")]
    Fetch(String),

    #[error("Код ответа API не 200: {0}")]
    BadStatusCode(u16),

    #[error("Ответ API не является корректным JSON: {0}")]
    Decode(String),

    #[error("В ответе API отсутствует ключ homeworks")]
    MalformedResponse,

    #[error("Перечень homeworks не является списком")]
    NotASequence,

    #[error("Вы ничего не отправляли на ревью")]
    EmptySequence,

    #[error("Запись о работе не является словарём")]
    RecordNotAMapping,

    #[error("Нет ключа homework_name в ответе API")]
    MissingName,

    #[error("Нет ключа status в ответе API")]
    MissingStatus,

    #[error("Неизвестный статус работы: {0}")]
    UnknownStatus(String),
}

impl HomeworkError {
    /// Short machine-readable name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            HomeworkError::Fetch(_) => "fetch",
            HomeworkError::BadStatusCode(_) => "bad_status_code",
            HomeworkError::Decode(_) => "decode",
            HomeworkError::MalformedResponse => "malformed_response",
            HomeworkError::NotASequence => "not_a_sequence",
            HomeworkError::EmptySequence => "empty_sequence",
            HomeworkError::RecordNotAMapping => "record_not_a_mapping",
            HomeworkError::MissingName => "missing_name",
            HomeworkError::MissingStatus => "missing_status",
            HomeworkError::UnknownStatus(_) => "unknown_status",
        }
    }
}

/// Startup configuration failures. Fatal: the bot never enters its loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
