pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as job_roles;
use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job Roles API
        .route(
            "/api/v1/job-roles",
            get(job_roles::handle_list_job_roles).post(job_roles::handle_create_job_role),
        )
        .route(
            "/api/v1/job-roles/categories",
            get(job_roles::handle_list_categories),
        )
        .route("/api/v1/job-roles/:id", get(job_roles::handle_get_job_role))
        // Matching API
        .route("/api/v1/matches", post(matching::handle_find_matches))
        .route("/api/v1/matches/score", post(matching::handle_score))
        .route(
            "/api/v1/matches/level/:score",
            get(matching::handle_match_level),
        )
        .route("/api/v1/vocabulary", get(matching::handle_vocabulary))
        .fallback(route_not_found)
        .with_state(state)
}
