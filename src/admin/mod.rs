// src/admin/mod.rs
//
// HTTP client side of the admin console. Every mutation is followed by a
// wholesale re-fetch of both the filtered list and the aggregate stats;
// there is no local patching and no optimistic update. In-flight fetches
// are never cancelled, so a fast filter change can in principle be
// overtaken by a stale response.
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::api::leads::{DeleteReceipt, StatusUpdate};
use crate::api::stats::ApiResponse;
use crate::models::{Lead, LeadStats, LeadStatus, Result};

/// One wholesale snapshot of the console's view: the current filtered list
/// plus the filter-independent aggregate counts.
#[derive(Debug)]
pub struct LeadBoard {
    pub leads: Vec<Lead>,
    pub stats: LeadStats,
}

impl LeadBoard {
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The operator declined the confirmation prompt; no call was issued.
    Cancelled,
}

pub struct AdminConsole {
    base: Url,
    http: Client,
}

impl AdminConsole {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    /// List and stats are fetched together and joined before the view is
    /// replaced.
    pub async fn fetch_board(&self, filter: Option<LeadStatus>) -> Result<LeadBoard> {
        let (leads, stats) = tokio::join!(self.list_leads(filter), self.lead_stats());
        Ok(LeadBoard {
            leads: leads?,
            stats: stats?,
        })
    }

    pub async fn list_leads(&self, filter: Option<LeadStatus>) -> Result<Vec<Lead>> {
        let mut url = self.base.join("api/leads")?;
        if let Some(status) = filter {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }

        debug!("GET {}", url);
        let envelope: ApiResponse<Vec<Lead>> = self.http.get(url).send().await?.json().await?;
        envelope.into_result().map_err(Into::into)
    }

    pub async fn lead_stats(&self) -> Result<LeadStats> {
        let url = self.base.join("api/leads/stats")?;
        let envelope: ApiResponse<LeadStats> = self.http.get(url).send().await?.json().await?;
        envelope.into_result().map_err(Into::into)
    }

    pub async fn update_status(&self, id: &str, status: LeadStatus) -> Result<()> {
        let mut url = self.base.join(&format!("api/leads/{}/status", id))?;
        url.query_pairs_mut().append_pair("status", status.as_str());

        debug!("PATCH {}", url);
        let envelope: ApiResponse<StatusUpdate> =
            self.http.patch(url).send().await?.json().await?;
        envelope.into_result().map_err(Into::into).map(|_| ())
    }

    /// The confirmation decision is made by the caller (the console prompt);
    /// without it this is a no-op and nothing goes over the wire.
    pub async fn delete_lead(&self, id: &str, confirmed: bool) -> Result<DeleteOutcome> {
        if !confirmed {
            debug!("Deletion of {} cancelled at the prompt", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let url = self.base.join(&format!("api/leads/{}", id))?;
        debug!("DELETE {}", url);
        let envelope: ApiResponse<DeleteReceipt> =
            self.http.delete(url).send().await?.json().await?;
        envelope.into_result()?;
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn unconfirmed_delete_issues_no_call() {
        // Nothing listens on this port; a network attempt would error.
        let console = AdminConsole::new("http://127.0.0.1:9").unwrap();
        let outcome = console.delete_lead("abc", false).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
    }

    #[test]
    fn board_reports_empty_state() {
        let stats = LeadStats {
            total: 0,
            new: 0,
            contacted: 0,
            converted: 0,
        };
        let board = LeadBoard {
            leads: Vec::new(),
            stats,
        };
        assert!(board.is_empty());

        let board = LeadBoard {
            leads: vec![Lead {
                id: "1".to_string(),
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                trade: "Plumber".to_string(),
                areas: "Reading".to_string(),
                message: "Need a quote".to_string(),
                status: LeadStatus::New,
                created_at: Utc::now(),
            }],
            stats,
        };
        assert!(!board.is_empty());
    }
}
