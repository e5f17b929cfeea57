//! Notification dispatch over an HTTP mail relay.
//!
//! The relay performs the actual mail-transport handshake; this side
//! posts a JSON message with bearer-token auth and checks the outcome.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::config::MailConfig;
use crate::error::CasewatchError;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// A formatted notification ready for dispatch.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub text: String,
    pub html: String,
    pub recipients: Vec<String>,
}

/// Boundary for sending notifications; the report pipeline only knows
/// this trait.
pub trait Notifier {
    fn send(&self, notification: &Notification) -> Result<(), CasewatchError>;
}

/// JSON message shape accepted by the relay.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: String,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct RelayMailer {
    client: reqwest::blocking::Client,
    config: MailConfig,
}

impl RelayMailer {
    pub fn new(config: MailConfig) -> Result<Self, CasewatchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        let scheme = if self.config.use_tls { "https" } else { "http" };
        format!("{}://{}:{}/emails", scheme, self.config.host, self.config.port)
    }

    fn from_line(&self) -> String {
        format!("{} <{}>", self.config.sender_name, self.config.from_address)
    }
}

impl Notifier for RelayMailer {
    fn send(&self, notification: &Notification) -> Result<(), CasewatchError> {
        let payload = RelayPayload {
            from: self.from_line(),
            to: &notification.recipients,
            subject: &notification.subject,
            html: &notification.html,
            text: &notification.text,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_token)
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RelayErrorBody>()
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(CasewatchError::Mail(format!("relay returned {status}: {message}")));
        }

        info!(
            recipients = notification.recipients.len(),
            "notification dispatched"
        );
        Ok(())
    }
}
