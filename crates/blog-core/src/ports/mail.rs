//! Outbound mail port.

use async_trait::async_trait;

/// Sends plain-text email through some relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("Transport error: {0}")]
    Transport(String),
}
