// src/api/stats.rs
use rocket::{get, serde::json::Json, State};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db;
use crate::models::LeadStats;
use crate::server::ServerState;

/// Envelope every endpoint answers with. Deserializable too because the
/// admin console and the intake client consume the same surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }

    /// Client-side unwrap: a success envelope without data is treated as a
    /// backend fault, not a client bug.
    pub fn into_result(self) -> std::result::Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "backend response missing data".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "backend reported a failure".to_string()))
        }
    }
}

#[get("/leads/stats")]
pub async fn get_lead_stats(state: &State<ServerState>) -> Json<ApiResponse<LeadStats>> {
    match db::lead_stats(&state.db_pool).await {
        Ok(stats) => Json(ApiResponse::success(stats)),
        Err(e) => {
            error!("Failed to aggregate lead stats: {}", e);
            Json(ApiResponse::error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_unwraps_success() {
        let envelope = ApiResponse::success(7);
        assert_eq!(envelope.into_result().unwrap(), 7);
    }

    #[test]
    fn into_result_surfaces_backend_error() {
        let envelope: ApiResponse<i32> = ApiResponse::error("Lead not found".to_string());
        assert_eq!(envelope.into_result().unwrap_err(), "Lead not found");
    }

    #[test]
    fn into_result_rejects_empty_success() {
        let envelope: ApiResponse<i32> = ApiResponse {
            success: true,
            data: None,
            error: None,
        };
        assert!(envelope.into_result().is_err());
    }
}
