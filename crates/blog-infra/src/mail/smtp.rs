//! SMTP mailer built on lettre's async tokio transport.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;

use blog_core::ports::{MailError, Mailer};

/// How the connection to the relay is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// Implicit TLS, usually port 465.
    #[default]
    Tls,
    /// Plaintext connect upgraded with STARTTLS, usually port 587.
    Starttls,
    /// No encryption. Only for local relays such as mailpit.
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub from: String,
    #[serde(default)]
    pub tls: SmtpTls,
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::Address(e.to_string()))?;

        let builder = match config.tls {
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)
                .map_err(|e| MailError::Transport(e.to_string()))?,
            SmtpTls::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
                    .map_err(|e| MailError::Transport(e.to_string()))?
            }
            SmtpTls::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_server)
            }
        };

        let mut builder = builder.port(config.smtp_port);
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        tracing::info!(
            server = %config.smtp_server,
            port = config.smtp_port,
            tls = ?config.tls,
            "SMTP mailer configured"
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let to: Mailbox = to
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::Address(e.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!("Mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tls: SmtpTls) -> SmtpConfig {
        SmtpConfig {
            smtp_server: "localhost".to_string(),
            smtp_port: 1025,
            username: String::new(),
            password: String::new(),
            from: "Blog <noreply@example.com>".to_string(),
            tls,
        }
    }

    #[tokio::test]
    async fn test_builds_for_every_tls_mode() {
        for tls in [SmtpTls::Tls, SmtpTls::Starttls, SmtpTls::None] {
            assert!(SmtpMailer::new(&config(tls)).is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_from_address() {
        let mut config = config(SmtpTls::None);
        config.from = "not an address".to_string();

        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn test_tls_mode_parses_lowercase() {
        let parsed: SmtpConfig = serde_json::from_str(
            r#"{"smtp_server":"h","smtp_port":25,"from":"a@x.com","tls":"starttls"}"#,
        )
        .unwrap();

        assert_eq!(parsed.tls, SmtpTls::Starttls);
    }
}
