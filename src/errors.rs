use reqwest::StatusCode;
use thiserror::Error;

/// Exit code for a notification that was delivered.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a required environment variable that is missing or empty.
pub const EXIT_CONFIGURATION: i32 = 1;
/// Exit code for a message that could not be delivered.
pub const EXIT_DELIVERY: i32 = 2;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("{0} is required")]
    MissingVariable(&'static str),

    #[error("Failed to serialize message: {0}")]
    SerializationError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("error on message: {0}")]
    StatusError(StatusCode),
}

impl NotifyError {
    /// Whether the error stems from missing configuration rather than delivery.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, NotifyError::MissingVariable(_))
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration() {
            EXIT_CONFIGURATION
        } else {
            EXIT_DELIVERY
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(error: serde_json::Error) -> Self {
        NotifyError::SerializationError(error.to_string())
    }
}
