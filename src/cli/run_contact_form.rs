use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::intake::{ContactForm, IntakeClient, IntakeError, TRADES};
use crate::models::{CliApp, Result};
use crate::relay::FormRelay;

impl CliApp {
    pub async fn run_contact_form(&self) -> Result<()> {
        println!("\n📬 Contact form - get a free audit");

        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?;

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Trade")
            .default(0)
            .items(&TRADES)
            .interact()?;
        let trade = TRADES[picked].to_string();

        let areas: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Areas you target (e.g. London, Surrey, Kent)")
            .allow_empty(true)
            .interact_text()?;
        let message: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Message")
            .allow_empty(true)
            .interact_text()?;

        let form = ContactForm {
            name,
            email,
            trade,
            areas,
            message,
        };

        let client = IntakeClient::new(
            &self.backend_url,
            FormRelay::new(self.config.relay.endpoint.clone()),
        )?;

        match client.submit_contact(form).await {
            Ok(lead) => {
                println!("✅ Message sent! We'll be in touch soon. (lead {})", lead.id);
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
