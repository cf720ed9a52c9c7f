//! In-memory mailer that keeps every message instead of delivering it.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::ports::{MailError, Mailer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records outgoing mail. Can be switched into a failing relay.
#[derive(Default)]
pub struct RecordingMailer {
    sent: RwLock<Vec<SentMail>>,
    failing: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `send` fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }

    /// Most recent message addressed to `to`.
    pub async fn last_to(&self, to: &str) -> Option<SentMail> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|m| m.to == to)
            .cloned()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Transport("relay unavailable".to_string()));
        }

        tracing::debug!(to = %crate::mask_email(to), subject, "Recording outgoing mail");
        self.sent.write().await.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_messages() {
        let mailer = RecordingMailer::new();
        mailer.send("a@x.com", "Hi", "one").await.unwrap();
        mailer.send("a@x.com", "Hi", "two").await.unwrap();

        assert_eq!(mailer.sent().await.len(), 2);
        assert_eq!(mailer.last_to("a@x.com").await.unwrap().body, "two");
        assert!(mailer.last_to("b@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_failing_relay() {
        let mailer = RecordingMailer::new();
        mailer.set_failing(true);

        assert!(mailer.send("a@x.com", "Hi", "body").await.is_err());
        assert!(mailer.sent().await.is_empty());
    }
}
