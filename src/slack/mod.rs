//! All Slack-specific functionality

pub mod client;
pub mod message_builder;

// Re-export main types for convenience
pub use client::{DeliveryStatus, WebhookClient};
pub use message_builder::build_message;
