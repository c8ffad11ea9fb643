use dialoguer::{theme::ColorfulTheme, Input};

use crate::intake::{AuditRequestForm, IntakeClient, IntakeError};
use crate::models::{CliApp, Result};
use crate::relay::FormRelay;

impl CliApp {
    pub async fn run_audit_request(&self) -> Result<()> {
        println!("\n🔍 Free website audit - find out why you aren't ranking");

        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your name")
            .allow_empty(true)
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("your@email.com")
            .allow_empty(true)
            .interact_text()?;
        let website: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your website URL")
            .allow_empty(true)
            .interact_text()?;

        let form = AuditRequestForm {
            name,
            email,
            website,
        };

        let client = IntakeClient::new(
            &self.backend_url,
            FormRelay::new(self.config.relay.endpoint.clone()),
        )?;

        match client.submit_audit_request(form).await {
            Ok(_) => {
                println!("✅ Request submitted! We'll review your website and send your audit within 48 hours.");
            }
            Err(IntakeError::Validation(notice)) => {
                println!("⚠️  {}", notice);
            }
            Err(IntakeError::Submission(_)) => {
                println!("❌ Something went wrong. Please try again.");
            }
        }

        Ok(())
    }
}
