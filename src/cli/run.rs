use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🧲 Welcome to Swift Leads!");
        println!("═══════════════════════════════════════");

        // Show the pipeline before the first prompt
        self.show_lead_stats().await?;

        loop {
            let actions = vec![
                MenuAction::StartApiServer,
                MenuAction::ManageLeads,
                MenuAction::SubmitContactForm,
                MenuAction::QuickChatMessage,
                MenuAction::RequestWebsiteAudit,
                MenuAction::ShowLeadStats,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::StartApiServer => {
                    if let Err(e) = self.run_server().await {
                        error!("API server exited with an error: {}", e);
                    }
                }
                MenuAction::ManageLeads => {
                    if let Err(e) = self.run_manage_leads().await {
                        error!("Admin console failed: {}", e);
                    }
                }
                MenuAction::SubmitContactForm => {
                    if let Err(e) = self.run_contact_form().await {
                        error!("Contact form failed: {}", e);
                    }
                }
                MenuAction::QuickChatMessage => {
                    if let Err(e) = self.run_quick_chat().await {
                        error!("Quick chat failed: {}", e);
                    }
                }
                MenuAction::RequestWebsiteAudit => {
                    if let Err(e) = self.run_audit_request().await {
                        error!("Audit request failed: {}", e);
                    }
                }
                MenuAction::ShowLeadStats => {
                    if let Err(e) = self.show_lead_stats().await {
                        error!("Failed to show stats: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Swift Leads!");
                    break;
                }
            }
        }

        Ok(())
    }
}
