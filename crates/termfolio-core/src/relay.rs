use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::RelayConfig;
use crate::contact::ContactMessage;
use crate::{Error, Result};

/// Client for an EmailJS-compatible email relay.
///
/// Sends a contact message as one JSON POST; nothing is retried.
pub struct RelayClient {
    client: Client,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// True when all three relay parameters are configured
    pub fn is_configured(&self) -> bool {
        !self.config.service_id.is_empty()
            && !self.config.template_id.is_empty()
            && !self.config.public_key.is_empty()
    }

    /// Deliver a message through the relay.
    /// A non-success status surfaces as a relay error carrying the
    /// response body.
    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        if !self.is_configured() {
            return Err(Error::Config(
                "email relay is not configured; set relay.service_id, \
                 relay.template_id and relay.public_key"
                    .to_string(),
            ));
        }

        let payload = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": message.name,
                "from_email": message.email,
                "subject": message.subject,
                "message": message.message,
            },
        });

        debug!("Sending contact message via {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Relay(format!("{}: {}", status, body)))
        }
    }
}
