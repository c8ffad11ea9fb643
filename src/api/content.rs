// src/api/content.rs
//
// Content-selection endpoints over the static catalog. The parametric
// routes mirror the site's landing pages: unknown location and industry
// slugs fall back to the defaults, unknown blog posts are an error.
use rocket::{get, serde::json::Json, State};

use crate::api::stats::ApiResponse;
use crate::content::{BlogPost, IndustryPage, LocationPage, PricingPlan};
use crate::server::ServerState;

#[get("/content/locations")]
pub async fn list_locations(state: &State<ServerState>) -> Json<ApiResponse<Vec<LocationPage>>> {
    let pages = state.catalog.locations().into_iter().cloned().collect();
    Json(ApiResponse::success(pages))
}

#[get("/content/locations/<slug>")]
pub async fn get_location(
    state: &State<ServerState>,
    slug: &str,
) -> Json<ApiResponse<LocationPage>> {
    Json(ApiResponse::success(state.catalog.location(slug).clone()))
}

#[get("/content/industries")]
pub async fn list_industries(state: &State<ServerState>) -> Json<ApiResponse<Vec<IndustryPage>>> {
    let pages = state.catalog.industries().into_iter().cloned().collect();
    Json(ApiResponse::success(pages))
}

#[get("/content/industries/<slug>")]
pub async fn get_industry(
    state: &State<ServerState>,
    slug: &str,
) -> Json<ApiResponse<IndustryPage>> {
    Json(ApiResponse::success(state.catalog.industry(slug).clone()))
}

#[get("/content/posts")]
pub async fn list_posts(state: &State<ServerState>) -> Json<ApiResponse<Vec<BlogPost>>> {
    let posts = state.catalog.posts().into_iter().cloned().collect();
    Json(ApiResponse::success(posts))
}

#[get("/content/posts/<slug>")]
pub async fn get_post(state: &State<ServerState>, slug: &str) -> Json<ApiResponse<BlogPost>> {
    match state.catalog.post(slug) {
        Some(post) => Json(ApiResponse::success(post.clone())),
        None => Json(ApiResponse::error("Post not found".to_string())),
    }
}

#[get("/content/pricing")]
pub async fn get_pricing(state: &State<ServerState>) -> Json<ApiResponse<Vec<PricingPlan>>> {
    Json(ApiResponse::success(state.catalog.pricing().to_vec()))
}
