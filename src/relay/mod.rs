// src/relay/mod.rs
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

use crate::models::Result;

/// Third-party form relay endpoint used by the live site.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xqelqeel";

/// Payload the relay accepts. `_subject` becomes the notification email's
/// subject line; the chat variant fills `message`, the audit variant
/// `website`.
#[derive(Debug, Clone, Serialize)]
pub struct RelayMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "_subject")]
    pub subject: String,
}

pub struct FormRelay {
    endpoint: String,
    client: Client,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        debug!("Created FormRelay for endpoint: {}", endpoint);
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// One shot, no retry. The relay is opaque: anything non-2xx is a
    /// failure with whatever text the service returned.
    pub async fn notify(&self, message: &RelayMessage) -> Result<()> {
        debug!("Relaying submission from {}: {}", message.email, message.subject);

        let response = self.client.post(&self.endpoint).json(message).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!("✅ Relay accepted submission ({})", status);
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("❌ Form relay error ({}): {}", status, error_text);
            Err(format!("form relay rejected submission: {}", status).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_payload_shape() {
        let message = RelayMessage {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: Some("How can we help?".to_string()),
            website: None,
            subject: "Quick Chat: Jane".to_string(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["message"], "How can we help?");
        assert_eq!(value["_subject"], "Quick Chat: Jane");
        assert!(value.get("website").is_none());
        assert!(value.get("subject").is_none());
    }

    #[test]
    fn audit_payload_shape() {
        let message = RelayMessage {
            name: "Omar".to_string(),
            email: "omar@x.com".to_string(),
            message: None,
            website: Some("https://omarplumbing.co.uk".to_string()),
            subject: "Free Audit Request: https://omarplumbing.co.uk".to_string(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["website"], "https://omarplumbing.co.uk");
        assert!(value.get("message").is_none());
    }
}
