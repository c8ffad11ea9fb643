// src/server/mod.rs - Rocket wiring for the lead store and content API
use rocket::{routes, Build, Rocket};

use crate::api::*;
use crate::config::Config;
use crate::content::ContentCatalog;
use crate::db::DbPool;

pub mod routes;

pub struct ServerState {
    pub config: Config,
    pub db_pool: DbPool,
    pub catalog: ContentCatalog,
}

pub fn build_rocket(config: Config, db_pool: DbPool, catalog: ContentCatalog) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    let state = ServerState {
        config,
        db_pool,
        catalog,
    };

    rocket::custom(figment).manage(state).mount(
        "/api",
        routes![
            // Health and info endpoints
            routes::health::health_check,
            routes::health::index,
            // Lead store endpoints
            create_lead,
            get_leads,
            get_lead_stats,
            update_lead_status,
            delete_lead,
            // Status check endpoints
            create_status_check,
            get_status_checks,
            // Content endpoints
            list_locations,
            get_location,
            list_industries,
            get_industry,
            list_posts,
            get_post,
            get_pricing,
        ],
    )
}
