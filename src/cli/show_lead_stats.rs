use crate::db;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn show_lead_stats(&self) -> Result<()> {
        let stats = db::lead_stats(&self.db_pool).await?;

        println!("\n📊 Lead pipeline");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("👥 Total:      {}", stats.total);
        println!("🆕 New:        {}", stats.new);
        println!("📞 Contacted:  {}", stats.contacted);
        println!("✅ Converted:  {}", stats.converted);

        if stats.total > 0 {
            let conversion = (stats.converted as f64 / stats.total as f64) * 100.0;
            println!("📈 Conversion rate: {:.1}%", conversion);
        }

        Ok(())
    }
}
