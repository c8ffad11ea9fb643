// src/api/status.rs
use rocket::{get, post, serde::json::Json, State};
use serde::Deserialize;
use tracing::error;

use crate::api::stats::ApiResponse;
use crate::db;
use crate::models::StatusCheck;
use crate::server::ServerState;

#[derive(Debug, Deserialize)]
pub struct StatusCheckRequest {
    pub client_name: String,
}

#[post("/status", data = "<payload>")]
pub async fn create_status_check(
    state: &State<ServerState>,
    payload: Json<StatusCheckRequest>,
) -> Json<ApiResponse<StatusCheck>> {
    match db::insert_status_check(&state.db_pool, payload.into_inner().client_name).await {
        Ok(check) => Json(ApiResponse::success(check)),
        Err(e) => {
            error!("Failed to store status check: {}", e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[get("/status")]
pub async fn get_status_checks(state: &State<ServerState>) -> Json<ApiResponse<Vec<StatusCheck>>> {
    match db::list_status_checks(&state.db_pool, 1000).await {
        Ok(checks) => Json(ApiResponse::success(checks)),
        Err(e) => {
            error!("Failed to list status checks: {}", e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}
