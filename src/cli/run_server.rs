use tracing::info;

use crate::models::{CliApp, Result};
use crate::server::build_rocket;

impl CliApp {
    /// Runs the Rocket server until shutdown (Ctrl+C). Blocks the menu, so
    /// intake and admin actions are expected to run from a second instance.
    pub async fn run_server(&self) -> Result<()> {
        info!(
            "Starting leads API server on {}:{}",
            self.config.server.host, self.config.server.port
        );

        let rocket = build_rocket(
            self.config.clone(),
            self.db_pool.clone(),
            self.catalog.clone(),
        );
        rocket.launch().await?;

        Ok(())
    }
}
