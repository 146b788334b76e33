//! ci-slack-notify - posts CI pipeline results to a Slack incoming webhook.
//!
//! The crate reads the pipeline's environment once into a
//! [`crate::core::config::NotifyConfig`], turns it into a single-attachment Slack
//! message and delivers it with one HTTP POST.
//!
//! # Architecture
//!
//! - `core::config` holds the explicit configuration read at startup
//! - `core::models` holds the serializable webhook payload
//! - `slack::message_builder` decides fields, colour and fallback text
//! - `slack::client` performs the POST with reqwest
//! - `notifier` ties them together and maps failures to exit codes
//!
//! # Example
//!
//! ```no_run
//! use ci_slack_notify::core::config::NotifyConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     ci_slack_notify::setup_logging();
//!
//!     let config = NotifyConfig::from_env()?;
//!     let status = ci_slack_notify::notifier::notify(&config).await?;
//!     println!("{status}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod notifier;
pub mod slack;

pub use errors::NotifyError;
pub use notifier::{notify, run};

/// Configure structured logging on stderr.
///
/// Stdout is reserved for the response status line. Verbosity follows
/// `RUST_LOG` and defaults to `info`. Calling this more than once is a no-op.
///
/// # Example
///
/// ```
/// ci_slack_notify::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
