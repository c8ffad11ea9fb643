use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use tracing::error;

use crate::admin::{AdminConsole, DeleteOutcome, LeadBoard};
use crate::models::{CliApp, LeadStatus, Result};

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn filter_label(filter: Option<LeadStatus>) -> &'static str {
    match filter {
        None => "all leads",
        Some(LeadStatus::New) => "new",
        Some(LeadStatus::Contacted) => "contacted",
        Some(LeadStatus::Converted) => "converted",
    }
}

fn render_board(board: &LeadBoard, filter: Option<LeadStatus>) {
    let stats = &board.stats;
    println!("\n🗂️  Lead management ({})", filter_label(filter));
    println!("═══════════════════════════════════════════════════════════════");
    println!(
        "📊 Total: {}  |  🆕 New: {}  |  📞 Contacted: {}  |  ✅ Converted: {}",
        stats.total, stats.new, stats.contacted, stats.converted
    );

    if board.is_empty() {
        println!("\nNo leads found");
        return;
    }

    println!(
        "\n{:<22} {:<26} {:<22} {:<12} {}",
        "NAME", "EMAIL", "TRADE", "STATUS", "DATE"
    );
    for lead in &board.leads {
        println!(
            "{:<22} {:<26} {:<22} {:<12} {}",
            truncate(&lead.name, 20),
            truncate(&lead.email, 24),
            truncate(&lead.trade, 20),
            lead.status.as_str(),
            lead.created_at.format("%d %b %Y %H:%M")
        );
    }
}

impl CliApp {
    pub async fn run_manage_leads(&self) -> Result<()> {
        let admin = AdminConsole::new(&self.backend_url)?;
        let mut filter: Option<LeadStatus> = None;

        loop {
            // Wholesale refresh of list + stats on every pass
            let board = match admin.fetch_board(filter).await {
                Ok(board) => board,
                Err(e) => {
                    error!("Failed to fetch leads: {}", e);
                    println!("❌ Failed to fetch leads. Is the API server running?");
                    return Ok(());
                }
            };

            render_board(&board, filter);

            let choices = [
                "🔄 Refresh",
                "🔎 Change filter",
                "✏️  Update a lead's status",
                "🗑️  Delete a lead",
                "⬅️  Back to main menu",
            ];
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Admin console")
                .default(0)
                .items(&choices)
                .interact()?;

            match choice {
                0 => continue,
                1 => {
                    let filters = ["All leads", "New", "Contacted", "Converted"];
                    let picked = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt("Filter by status")
                        .default(0)
                        .items(&filters)
                        .interact()?;
                    filter = match picked {
                        1 => Some(LeadStatus::New),
                        2 => Some(LeadStatus::Contacted),
                        3 => Some(LeadStatus::Converted),
                        _ => None,
                    };
                }
                2 => {
                    if board.is_empty() {
                        println!("Nothing to update.");
                        continue;
                    }
                    let Some(index) = pick_lead(&board, "Which lead?")? else {
                        continue;
                    };
                    let lead = &board.leads[index];

                    let statuses = ["New", "Contacted", "Converted"];
                    let picked = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(format!("New status for {}", lead.name))
                        .default(0)
                        .items(&statuses)
                        .interact()?;
                    let status = LeadStatus::ALL[picked];

                    match admin.update_status(&lead.id, status).await {
                        Ok(()) => println!("✅ Status updated"),
                        Err(e) => {
                            error!("Status update failed: {}", e);
                            println!("❌ Failed to update status");
                        }
                    }
                }
                3 => {
                    if board.is_empty() {
                        println!("Nothing to delete.");
                        continue;
                    }
                    let Some(index) = pick_lead(&board, "Delete which lead?")? else {
                        continue;
                    };
                    let lead = &board.leads[index];

                    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(format!(
                            "Are you sure you want to delete the lead from {}?",
                            lead.name
                        ))
                        .default(false)
                        .interact()?;

                    match admin.delete_lead(&lead.id, confirmed).await {
                        Ok(DeleteOutcome::Deleted) => println!("🗑️  Lead deleted"),
                        Ok(DeleteOutcome::Cancelled) => println!("Deletion cancelled"),
                        Err(e) => {
                            error!("Delete failed: {}", e);
                            println!("❌ Failed to delete lead");
                        }
                    }
                }
                _ => break,
            }
        }

        Ok(())
    }
}

fn pick_lead(board: &LeadBoard, prompt: &str) -> Result<Option<usize>> {
    let mut labels: Vec<String> = board
        .leads
        .iter()
        .map(|lead| {
            format!(
                "{} <{}> - {} [{}]",
                lead.name, lead.email, lead.trade, lead.status
            )
        })
        .collect();
    labels.push("⬅️  Never mind".to_string());

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(&labels)
        .interact()?;

    if picked == board.leads.len() {
        Ok(None)
    } else {
        Ok(Some(picked))
    }
}
