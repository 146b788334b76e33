//! Process-level entry points: configuration in, one webhook call out.

use tracing::{error, info};

use crate::core::config::NotifyConfig;
use crate::errors::{EXIT_SUCCESS, NotifyError};
use crate::slack::client::{DeliveryStatus, WebhookClient};
use crate::slack::message_builder::build_message;

/// Build the message for `config` and deliver it.
///
/// # Errors
///
/// Propagates any delivery failure from [`WebhookClient::post_message`].
pub async fn notify(config: &NotifyConfig) -> Result<DeliveryStatus, NotifyError> {
    let message = build_message(config);
    info!(
        "Sending notification with {} field(s) to channel {:?}",
        message
            .attachments
            .first()
            .map_or(0, |attachment| attachment.fields.len()),
        config.slack.channel
    );
    WebhookClient::new()
        .post_message(&config.webhook_url, &message)
        .await
}

/// Read configuration through `lookup`, send the notification and return the
/// process exit code.
///
/// The status line sent by the webhook goes to stdout on success; failures
/// are reported on stderr.
pub async fn run<F>(lookup: F) -> i32
where
    F: Fn(&str) -> Option<String>,
{
    let result = match NotifyConfig::from_lookup(lookup) {
        Ok(config) => notify(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(status) => {
            println!("{status}");
            EXIT_SUCCESS
        }
        Err(e) => {
            if e.is_configuration() {
                eprintln!("{e}");
            } else {
                eprintln!("Error sending message: {e}");
            }
            error!("Notification failed: {}", e);
            e.exit_code()
        }
    }
}
