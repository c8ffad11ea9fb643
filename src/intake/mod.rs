// src/intake/mod.rs
//
// The public intake contract: three form variants, local required-field
// validation, then a create against the lead store and (for the chat and
// audit variants) a second notification post to the form relay. The two
// calls run sequentially and share one pass/fail signal; a resubmission
// after a transient failure can create a duplicate lead.
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::api::stats::ApiResponse;
use crate::models::{Lead, NewLead};
use crate::relay::{FormRelay, RelayMessage};

/// Notice shown whenever a required field is missing.
pub const VALIDATION_NOTICE: &str = "Please fill in all fields";

/// Trades offered on the contact form.
pub const TRADES: [&str; 9] = [
    "Plumber",
    "Electrician",
    "Builder",
    "Heating Engineer",
    "Landscaper",
    "Roofer",
    "Painter & Decorator",
    "Carpenter",
    "Other",
];

/// Seconds the chat widget stays on its success screen before closing.
pub const CHAT_CLOSE_DELAY_SECS: u64 = 3;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Caught before any network call; the form stays populated for retry.
    #[error("{0}")]
    Validation(String),
    /// Any network or backend failure on either the store write or the
    /// relay post. The cause is deliberately not distinguished.
    #[error("submission failed: {0}")]
    Submission(String),
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

fn require_filled(fields: &[&str]) -> IntakeResult<()> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(IntakeError::Validation(VALIDATION_NOTICE.to_string()));
    }
    Ok(())
}

/// The full contact-page form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub trade: String,
    pub areas: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> IntakeResult<()> {
        require_filled(&[
            self.name.as_str(),
            self.email.as_str(),
            self.trade.as_str(),
            self.areas.as_str(),
            self.message.as_str(),
        ])
    }

    pub fn into_payload(self) -> NewLead {
        NewLead {
            name: self.name,
            email: self.email,
            trade: self.trade,
            areas: self.areas,
            message: self.message,
        }
    }
}

/// The chat widget's short form. Trade and areas are fixed labels so the
/// lead slots into the same pipeline as everything else.
#[derive(Debug, Clone)]
pub struct QuickChatForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QuickChatForm {
    pub fn validate(&self) -> IntakeResult<()> {
        require_filled(&[self.name.as_str(), self.email.as_str(), self.message.as_str()])
    }

    pub fn subject(&self) -> String {
        format!("Quick Chat: {}", self.name)
    }

    pub fn relay_message(&self) -> RelayMessage {
        RelayMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: Some(self.message.clone()),
            website: None,
            subject: self.subject(),
        }
    }

    pub fn into_payload(self) -> NewLead {
        NewLead {
            name: self.name,
            email: self.email,
            trade: "Quick Chat".to_string(),
            areas: "Not specified".to_string(),
            message: self.message,
        }
    }
}

/// The free-audit form. The areas field carries the website URL and the
/// message is derived from it.
#[derive(Debug, Clone)]
pub struct AuditRequestForm {
    pub name: String,
    pub email: String,
    pub website: String,
}

impl AuditRequestForm {
    pub fn validate(&self) -> IntakeResult<()> {
        require_filled(&[self.name.as_str(), self.email.as_str(), self.website.as_str()])
    }

    pub fn subject(&self) -> String {
        format!("Free Audit Request: {}", self.website)
    }

    pub fn relay_message(&self) -> RelayMessage {
        RelayMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: None,
            website: Some(self.website.clone()),
            subject: self.subject(),
        }
    }

    pub fn into_payload(self) -> NewLead {
        let message = format!("Free website audit request for: {}", self.website);
        NewLead {
            name: self.name,
            email: self.email,
            trade: "Website Audit Request".to_string(),
            areas: self.website,
            message,
        }
    }
}

pub struct IntakeClient {
    base: Url,
    http: Client,
    relay: FormRelay,
}

impl IntakeClient {
    pub fn new(base_url: &str, relay: FormRelay) -> crate::models::Result<Self> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            base,
            http: Client::new(),
            relay,
        })
    }

    async fn create_lead(&self, payload: &NewLead) -> IntakeResult<Lead> {
        let url = self
            .base
            .join("api/leads")
            .map_err(|e| IntakeError::Submission(e.to_string()))?;

        debug!("Creating lead for {} via {}", payload.email, url);

        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| IntakeError::Submission(e.to_string()))?;

        let envelope: ApiResponse<Lead> = response
            .json()
            .await
            .map_err(|e| IntakeError::Submission(e.to_string()))?;

        envelope.into_result().map_err(IntakeError::Submission)
    }

    async fn relay_notify(&self, message: &RelayMessage) -> IntakeResult<()> {
        self.relay
            .notify(message)
            .await
            .map_err(|e| IntakeError::Submission(e.to_string()))
    }

    /// Contact page: store write only, no relay.
    pub async fn submit_contact(&self, form: ContactForm) -> IntakeResult<Lead> {
        form.validate()?;
        let lead = self.create_lead(&form.into_payload()).await?;
        debug!("✅ Contact form stored as lead {}", lead.id);
        Ok(lead)
    }

    /// Chat widget: store write, then relay notification. Both must succeed
    /// for the submission to count as sent.
    pub async fn submit_quick_chat(&self, form: QuickChatForm) -> IntakeResult<Lead> {
        form.validate()?;
        let relay_message = form.relay_message();
        let lead = self.create_lead(&form.into_payload()).await?;
        if let Err(e) = self.relay_notify(&relay_message).await {
            error!("Relay failed after lead {} was stored: {}", lead.id, e);
            return Err(e);
        }
        Ok(lead)
    }

    /// Audit request: store write, then relay notification.
    pub async fn submit_audit_request(&self, form: AuditRequestForm) -> IntakeResult<Lead> {
        form.validate()?;
        let relay_message = form.relay_message();
        let lead = self.create_lead(&form.into_payload()).await?;
        if let Err(e) = self.relay_notify(&relay_message).await {
            error!("Relay failed after lead {} was stored: {}", lead.id, e);
            return Err(e);
        }
        Ok(lead)
    }
}
