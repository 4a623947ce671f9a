//! HTTP transactional mail implementation.
//!
//! Posts a JSON payload to a configured transactional mail endpoint
//! (SES-compatible gateways, Mailgun-style APIs, or an internal relay).

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{Res, Void},
};

use super::{GenericMailClient, MailClient};

// Extra methods on `MailClient` applied by the http implementation.

impl MailClient {
    pub fn http(config: &Config) -> Res<Self> {
        let client = HttpMailClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Outbound message payload for the mail endpoint.
#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Transactional mail client posting to an HTTP endpoint.
#[derive(Clone)]
pub struct HttpMailClient {
    http: reqwest::Client,
    config: Config,
}

impl HttpMailClient {
    /// Create a new HTTP mail client.
    #[instrument(name = "HttpMailClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, config: config.clone() })
    }
}

#[async_trait]
impl GenericMailClient for HttpMailClient {
    #[instrument(name = "HttpMailClient::send_email", skip(self, body))]
    async fn send_email(&self, sender: &str, recipient: &str, subject: &str, body: &str) -> Void {
        let payload = OutboundEmail {
            from: sender,
            to: recipient,
            subject,
            text: body,
        };

        let response = self
            .http
            .post(&self.config.mail_endpoint)
            .bearer_auth(&self.config.mail_api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Mail provider rejected send ({status}): {detail}"));
        }

        info!("Mail provider accepted send to `{}`.", recipient);

        Ok(())
    }
}
