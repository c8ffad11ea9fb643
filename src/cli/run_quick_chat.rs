use dialoguer::{theme::ColorfulTheme, Input};
use tokio::time::{sleep, Duration};

use crate::intake::{IntakeClient, IntakeError, QuickChatForm, CHAT_CLOSE_DELAY_SECS};
use crate::models::{CliApp, Result};
use crate::relay::FormRelay;

impl CliApp {
    pub async fn run_quick_chat(&self) -> Result<()> {
        println!("\n💬 Quick message - we typically reply within a few hours");

        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your name")
            .allow_empty(true)
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("your@email.com")
            .allow_empty(true)
            .interact_text()?;
        let message: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("How can we help?")
            .allow_empty(true)
            .interact_text()?;

        let form = QuickChatForm {
            name,
            email,
            message,
        };

        let client = IntakeClient::new(
            &self.backend_url,
            FormRelay::new(self.config.relay.endpoint.clone()),
        )?;

        match client.submit_quick_chat(form).await {
            Ok(_) => {
                println!("✅ Message sent! We'll get back to you soon.");
                // The widget closes itself shortly after the success screen
                sleep(Duration::from_secs(CHAT_CLOSE_DELAY_SECS)).await;
                println!("💬 Chat closed.");
            }
            Err(IntakeError::Validation(notice)) => {
                println!("⚠️  {}", notice);
            }
            Err(IntakeError::Submission(_)) => {
                println!("❌ Failed to send. Try again.");
            }
        }

        Ok(())
    }
}
