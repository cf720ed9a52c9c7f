//! Mail delivery - SMTP relay and an in-memory recorder.

mod recording;

#[cfg(feature = "smtp")]
mod smtp;

pub use recording::{RecordingMailer, SentMail};

#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpMailer, SmtpTls};
