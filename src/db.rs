use chrono::{DateTime, Utc};
use mobc::{Manager, Pool};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::path::Path;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::models::{Lead, LeadStats, LeadStatus, NewLead, Result, StatusCheck};

/// Hard cap on list sizes returned to the admin console.
pub const MAX_LIST_LIMIT: i64 = 500;
pub const DEFAULT_LIST_LIMIT: i64 = 100;

fn log_rusqlite_error(context: &str, err: &rusqlite::Error) {
    error!("🔥 SQLite error in {}: {:?}", context, err);
}

pub struct SqliteManager {
    db_path: String,
}

impl SqliteManager {
    pub fn new(db_path: String) -> Self {
        debug!("🔧 Creating SqliteManager for path: {}", db_path);
        Self { db_path }
    }
}

#[async_trait::async_trait]
impl Manager for SqliteManager {
    type Connection = Connection;
    type Error = rusqlite::Error;

    async fn connect(&self) -> std::result::Result<Self::Connection, Self::Error> {
        debug!("🔌 Opening database: {}", self.db_path);
        let conn = match Connection::open(&self.db_path) {
            Ok(c) => c,
            Err(e) => {
                log_rusqlite_error("Connection::open", &e);
                return Err(e);
            }
        };

        // execute_batch tolerates PRAGMAs that echo a result row
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA foreign_keys=ON;",
        )?;

        if let Err(e) = init_database(&conn) {
            log_rusqlite_error("init_database", &e);
            return Err(e);
        }

        Ok(conn)
    }

    async fn check(&self, conn: Self::Connection) -> std::result::Result<Self::Connection, Self::Error> {
        match conn.query_row("SELECT 1", [], |_| Ok(())) {
            Ok(_) => Ok(conn),
            Err(e) => {
                log_rusqlite_error("connection check", &e);
                Err(e)
            }
        }
    }
}

fn init_database(conn: &Connection) -> SqliteResult<()> {
    create_leads_table(conn)?;
    create_status_checks_table(conn)?;
    create_indexes(conn)?;
    Ok(())
}

pub type DbPool = Pool<SqliteManager>;

pub async fn create_db_pool(db_path: &str) -> Result<DbPool> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let manager = SqliteManager::new(db_path.to_string());
    let pool = Pool::builder().max_open(10).max_idle(5).build(manager);

    info!("✓ SQLite connection pool created: {}", db_path);
    Ok(pool)
}

fn create_leads_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS leads (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            trade TEXT NOT NULL,
            areas TEXT NOT NULL,
            message TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'new',
            created_at TEXT NOT NULL
        )
        "#,
        [],
    )?;
    Ok(())
}

fn create_status_checks_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS status_checks (
            id TEXT PRIMARY KEY,
            client_name TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )
        "#,
        [],
    )?;
    Ok(())
}

fn create_indexes(conn: &Connection) -> SqliteResult<()> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_leads_status ON leads(status)",
        "CREATE INDEX IF NOT EXISTS idx_leads_created_at ON leads(created_at DESC)",
        "CREATE INDEX IF NOT EXISTS idx_status_checks_timestamp ON status_checks(timestamp DESC)",
    ];

    for index_sql in indexes.iter() {
        if let Err(e) = conn.execute(index_sql, []) {
            log_rusqlite_error("create index", &e);
            return Err(e);
        }
    }
    Ok(())
}

fn row_to_lead(row: &Row<'_>) -> rusqlite::Result<Lead> {
    let status_str: String = row.get(6)?;
    let status = LeadStatus::parse(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(6, status_str.clone(), rusqlite::types::Type::Text)
    })?;

    let created_at_str: String = row.get(7)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                7,
                created_at_str.clone(),
                rusqlite::types::Type::Text,
            )
        })?
        .with_timezone(&Utc);

    Ok(Lead {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        trade: row.get(3)?,
        areas: row.get(4)?,
        message: row.get(5)?,
        status,
        created_at,
    })
}

/// Persists a new lead. The store owns identity assignment: id, created_at
/// and the initial `new` status are decided here, never by the caller.
pub async fn insert_lead(pool: &DbPool, payload: NewLead) -> Result<Lead> {
    debug!("💾 insert_lead() - {} <{}>", payload.name, payload.email);

    let conn = pool.get().await?;
    let lead = Lead {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        trade: payload.trade,
        areas: payload.areas,
        message: payload.message,
        status: LeadStatus::New,
        created_at: Utc::now(),
    };

    conn.execute(
        r#"
        INSERT INTO leads (id, name, email, trade, areas, message, status, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            lead.id,
            lead.name,
            lead.email,
            lead.trade,
            lead.areas,
            lead.message,
            lead.status.as_str(),
            lead.created_at.to_rfc3339(),
        ],
    )?;

    debug!("✅ Lead stored: {}", lead.id);
    Ok(lead)
}

/// Newest-first listing with an optional status filter. No pagination; the
/// limit is clamped to [1, MAX_LIST_LIMIT].
pub async fn list_leads(
    pool: &DbPool,
    status: Option<LeadStatus>,
    limit: i64,
) -> Result<Vec<Lead>> {
    let conn = pool.get().await?;
    let limit = limit.clamp(1, MAX_LIST_LIMIT);

    let mut leads = Vec::new();
    match status {
        Some(status) => {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, trade, areas, message, status, created_at
                 FROM leads WHERE status = ?1 ORDER BY created_at DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![status.as_str(), limit], row_to_lead)?;
            for lead in rows {
                leads.push(lead?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, trade, areas, message, status, created_at
                 FROM leads ORDER BY created_at DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], row_to_lead)?;
            for lead in rows {
                leads.push(lead?);
            }
        }
    }

    debug!("✅ Listed {} leads (filter: {:?})", leads.len(), status);
    Ok(leads)
}

/// Aggregate counts over the whole table, independent of any list filter.
pub async fn lead_stats(pool: &DbPool) -> Result<LeadStats> {
    let conn = pool.get().await?;

    let total: i64 = conn.query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?;
    let count_for = |status: LeadStatus| -> SqliteResult<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM leads WHERE status = ?1",
            [status.as_str()],
            |row| row.get(0),
        )
    };

    Ok(LeadStats {
        total,
        new: count_for(LeadStatus::New)?,
        contacted: count_for(LeadStatus::Contacted)?,
        converted: count_for(LeadStatus::Converted)?,
    })
}

/// Unconditional status transition; any of the three values is reachable
/// from any other. Returns false when no lead matches the id.
pub async fn update_lead_status(pool: &DbPool, id: &str, status: LeadStatus) -> Result<bool> {
    debug!("✏️  update_lead_status() - {} -> {}", id, status);

    let conn = pool.get().await?;
    let changed = conn.execute(
        "UPDATE leads SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;

    Ok(changed > 0)
}

/// Permanent removal. Returns false when no lead matches the id.
pub async fn delete_lead(pool: &DbPool, id: &str) -> Result<bool> {
    debug!("🗑️  delete_lead() - {}", id);

    let conn = pool.get().await?;
    let removed = conn.execute("DELETE FROM leads WHERE id = ?1", params![id])?;

    Ok(removed > 0)
}

pub async fn insert_status_check(pool: &DbPool, client_name: String) -> Result<StatusCheck> {
    let conn = pool.get().await?;
    let check = StatusCheck {
        id: Uuid::new_v4().to_string(),
        client_name,
        timestamp: Utc::now(),
    };

    conn.execute(
        "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
        params![check.id, check.client_name, check.timestamp.to_rfc3339()],
    )?;

    Ok(check)
}

pub async fn list_status_checks(pool: &DbPool, limit: i64) -> Result<Vec<StatusCheck>> {
    let conn = pool.get().await?;

    let mut stmt = conn.prepare(
        "SELECT id, client_name, timestamp FROM status_checks ORDER BY timestamp DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        let timestamp_str: String = row.get(2)?;
        let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    2,
                    timestamp_str.clone(),
                    rusqlite::types::Type::Text,
                )
            })?
            .with_timezone(&Utc);

        Ok(StatusCheck {
            id: row.get(0)?,
            client_name: row.get(1)?,
            timestamp,
        })
    })?;

    let mut checks = Vec::new();
    for check in rows {
        checks.push(check?);
    }
    Ok(checks)
}
