//! Axum route handlers for the Job Roles API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::envelope::ApiResponse;
use crate::models::job_role::{JobRole, NewJobRole};
use crate::state::AppState;

/// GET /api/v1/job-roles
pub async fn handle_list_job_roles(State(state): State<AppState>) -> Json<ApiResponse<Vec<JobRole>>> {
    let roles = state.catalog.read().await.list();
    Json(ApiResponse::list(roles))
}

/// GET /api/v1/job-roles/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let categories = state.catalog.read().await.categories();
    Json(ApiResponse::list(categories))
}

/// GET /api/v1/job-roles/:id
pub async fn handle_get_job_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<JobRole>>, AppError> {
    let catalog = state.catalog.read().await;
    let role = catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Job role not found".to_string()))?;
    Ok(Json(ApiResponse::data(role)))
}

/// POST /api/v1/job-roles
pub async fn handle_create_job_role(
    State(state): State<AppState>,
    Json(request): Json<NewJobRole>,
) -> Result<(StatusCode, Json<ApiResponse<JobRole>>), AppError> {
    let role = state.catalog.write().await.create(request)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(role).with_message("Job role created successfully")),
    ))
}
