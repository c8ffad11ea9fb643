use tracing::info;

use crate::config::Config;
use crate::content::ContentCatalog;
use crate::db::DbPool;
use crate::models::{CliApp, Result};

#[derive(Debug, Clone)]
pub enum MenuAction {
    StartApiServer,
    ManageLeads,
    SubmitContactForm,
    QuickChatMessage,
    RequestWebsiteAudit,
    ShowLeadStats,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::StartApiServer => {
                write!(f, "🚀 Start the leads API server")
            }
            MenuAction::ManageLeads => {
                write!(f, "🗂️  Manage captured leads (admin console)")
            }
            MenuAction::SubmitContactForm => {
                write!(f, "📬 Submit a contact form enquiry")
            }
            MenuAction::QuickChatMessage => {
                write!(f, "💬 Send a quick chat message")
            }
            MenuAction::RequestWebsiteAudit => {
                write!(f, "🔍 Request a free website audit")
            }
            MenuAction::ShowLeadStats => write!(f, "📊 Show lead statistics"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub async fn new(config: Config, db_pool: DbPool) -> Result<Self> {
        // Static site content, built once for the lifetime of the process
        let catalog = ContentCatalog::load();

        // The backend base URL is the one env-driven setting
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| config.backend.base_url.clone());
        info!("Backend base URL: {}", backend_url);

        Ok(Self {
            config,
            db_pool,
            catalog,
            backend_url,
        })
    }
}
