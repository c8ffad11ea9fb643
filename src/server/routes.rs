// src/server/routes.rs
// Health and service-banner routes; everything else lives in the api modules.

pub mod health {
    use rocket::{get, serde::json::Json};
    use serde_json::{json, Value};

    #[get("/health")]
    pub async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "service": "swift-leads-api"
        }))
    }

    #[get("/")]
    pub async fn index() -> Json<Value> {
        Json(json!({
            "name": "Swift Website & SEO Services API",
            "version": "0.1.0",
            "description": "Lead intake and management for the agency site",
            "endpoints": {
                "health": "/api/health",
                "leads": "/api/leads",
                "lead_stats": "/api/leads/stats",
                "status_checks": "/api/status",
                "locations": "/api/content/locations",
                "industries": "/api/content/industries",
                "posts": "/api/content/posts",
                "pricing": "/api/content/pricing"
            }
        }))
    }
}
