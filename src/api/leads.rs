// src/api/leads.rs
use rocket::{delete, get, patch, post, serde::json::Json, State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::stats::ApiResponse;
use crate::db;
use crate::models::{Lead, LeadStatus, NewLead};
use crate::server::ServerState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub message: String,
    pub lead_id: String,
    pub status: LeadStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub message: String,
    pub lead_id: String,
}

fn valid_email(email: &str) -> bool {
    regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .unwrap()
        .is_match(email)
}

#[post("/leads", data = "<payload>")]
pub async fn create_lead(
    state: &State<ServerState>,
    payload: Json<NewLead>,
) -> Json<ApiResponse<Lead>> {
    let payload = payload.into_inner();

    if !valid_email(&payload.email) {
        return Json(ApiResponse::error(format!(
            "Invalid email address: {}",
            payload.email
        )));
    }

    match db::insert_lead(&state.db_pool, payload).await {
        Ok(lead) => {
            info!("📥 New lead captured: {} ({})", lead.name, lead.trade);
            Json(ApiResponse::success(lead))
        }
        Err(e) => {
            error!("Failed to store lead: {}", e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[get("/leads?<status>&<limit>")]
pub async fn get_leads(
    state: &State<ServerState>,
    status: Option<LeadStatus>,
    limit: Option<i64>,
) -> Json<ApiResponse<Vec<Lead>>> {
    let limit = limit.unwrap_or(db::DEFAULT_LIST_LIMIT);

    match db::list_leads(&state.db_pool, status, limit).await {
        Ok(leads) => Json(ApiResponse::success(leads)),
        Err(e) => {
            error!("Failed to list leads: {}", e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[patch("/leads/<id>/status?<status>")]
pub async fn update_lead_status(
    state: &State<ServerState>,
    id: &str,
    status: LeadStatus,
) -> Json<ApiResponse<StatusUpdate>> {
    match db::update_lead_status(&state.db_pool, id, status).await {
        Ok(true) => Json(ApiResponse::success(StatusUpdate {
            message: "Status updated".to_string(),
            lead_id: id.to_string(),
            status,
        })),
        Ok(false) => Json(ApiResponse::error("Lead not found".to_string())),
        Err(e) => {
            error!("Failed to update lead {}: {}", id, e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[delete("/leads/<id>")]
pub async fn delete_lead(state: &State<ServerState>, id: &str) -> Json<ApiResponse<DeleteReceipt>> {
    match db::delete_lead(&state.db_pool, id).await {
        Ok(true) => {
            info!("🗑️  Lead deleted: {}", id);
            Json(ApiResponse::success(DeleteReceipt {
                message: "Lead deleted".to_string(),
                lead_id: id.to_string(),
            }))
        }
        Ok(false) => Json(ApiResponse::error("Lead not found".to_string())),
        Err(e) => {
            error!("Failed to delete lead {}: {}", id, e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(valid_email("jane@x.com"));
        assert!(valid_email("trade.owner+quotes@business.co.uk"));
        assert!(!valid_email("janex.com"));
        assert!(!valid_email("jane@"));
        assert!(!valid_email("jane@x"));
        assert!(!valid_email("jane smith@x.com"));
        assert!(!valid_email(""));
    }
}
