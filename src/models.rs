use chrono::{DateTime, Utc};
use rocket::FromFormField;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{config::Config, content::ContentCatalog, db::DbPool};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Pipeline position of a captured lead. Stored as lowercase text and used
/// verbatim as the `status` query value on the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[field(value = "new")]
    New,
    #[field(value = "contacted")]
    Contacted,
    #[field(value = "converted")]
    Converted,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Converted => "converted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "converted" => Some(LeadStatus::Converted),
            _ => None,
        }
    }

    pub const ALL: [LeadStatus; 3] = [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Converted];
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub trade: String,
    pub areas: String,
    pub message: String,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: everything the visitor supplies. The store assigns id,
/// created_at and the initial `new` status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub trade: String,
    pub areas: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeadStats {
    pub total: i64,
    pub new: i64,
    pub contacted: i64,
    pub converted: i64,
}

/// Uptime-ping record kept alongside the leads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

pub struct CliApp {
    pub config: Config,
    pub db_pool: DbPool,
    pub catalog: ContentCatalog,
    pub backend_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(LeadStatus::parse("archived"), None);
        assert_eq!(LeadStatus::parse("New"), None);
        assert_eq!(LeadStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&LeadStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");

        let back: LeadStatus = serde_json::from_str("\"converted\"").unwrap();
        assert_eq!(back, LeadStatus::Converted);
    }
}
