use ci_slack_notify::errors::{EXIT_CONFIGURATION, EXIT_DELIVERY, NotifyError};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_notify_error_implements_error_trait() {
    // Verify NotifyError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = NotifyError::MissingVariable("SLACK_WEBHOOK");
    assert_error(&error);
}

#[test]
fn test_notify_error_display() {
    let error = NotifyError::MissingVariable("SLACK_MESSAGE");
    assert_eq!(format!("{error}"), "SLACK_MESSAGE is required");

    let error = NotifyError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = NotifyError::StatusError(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        format!("{error}"),
        "error on message: 500 Internal Server Error"
    );
}

#[test]
fn test_exit_codes_distinguish_configuration_from_delivery() {
    let config = NotifyError::MissingVariable("SLACK_WEBHOOK");
    assert!(config.is_configuration());
    assert_eq!(config.exit_code(), EXIT_CONFIGURATION);

    for delivery in [
        NotifyError::SerializationError("bad".to_string()),
        NotifyError::HttpError("refused".to_string()),
        NotifyError::StatusError(StatusCode::BAD_REQUEST),
    ] {
        assert!(!delivery.is_configuration());
        assert_eq!(delivery.exit_code(), EXIT_DELIVERY);
    }
}

#[test]
fn test_notify_error_from_reqwest() {
    // Build a reqwest::Error without doing any network I/O.
    let req_err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let err: NotifyError = req_err.into();
    assert!(matches!(err, NotifyError::HttpError(_)));
}
