//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::level::{match_level, MatchLevel};
use crate::matching::ranker::RoleMatch;
use crate::matching::scorer::SkillBreakdown;
use crate::models::candidate::Candidate;
use crate::models::envelope::ApiResponse;
use crate::models::job_role::JobRole;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FindMatchesRequest {
    #[serde(default)]
    pub candidate: Candidate,
    /// Roles to rank. When absent the in-memory catalog is used.
    #[serde(default, alias = "jobRoles")]
    pub job_roles: Option<Vec<JobRole>>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, alias = "candidateSkills")]
    pub candidate_skills: Option<Vec<String>>,
    #[serde(default, alias = "requirementSkills")]
    pub requirement_skills: Option<Vec<String>>,
    /// Role whose text is scanned for requirement skills. Takes precedence
    /// over `requirement_skills`.
    #[serde(default)]
    pub role: Option<JobRole>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Top three roles for a candidate. Missing skills yield an empty list, not an error.
pub async fn handle_find_matches(
    State(state): State<AppState>,
    Json(request): Json<FindMatchesRequest>,
) -> Json<ApiResponse<Vec<RoleMatch>>> {
    let matches = match request.job_roles {
        Some(roles) => state.matcher.find_best_matches(&request.candidate, &roles),
        None => {
            let roles = state.catalog.read().await.list();
            state.matcher.find_best_matches(&request.candidate, &roles)
        }
    };
    Json(ApiResponse::list(matches))
}

/// POST /api/v1/matches/score
///
/// Score breakdown for one role, or for an explicit requirement skill list.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ApiResponse<SkillBreakdown>>, AppError> {
    let requirement_skills = match (&request.role, request.requirement_skills) {
        (Some(role), _) => state.matcher.vocabulary().extract_requirement_skills(role),
        (None, Some(skills)) => skills,
        (None, None) => {
            return Err(AppError::Validation(
                "Either role or requirement_skills is required".to_string(),
            ))
        }
    };

    let breakdown = SkillBreakdown::compute(request.candidate_skills.as_deref(), requirement_skills);
    Ok(Json(ApiResponse::data(breakdown)))
}

/// GET /api/v1/matches/level/:score
pub async fn handle_match_level(Path(score): Path<u32>) -> Result<Json<ApiResponse<MatchLevel>>, AppError> {
    if score > 100 {
        return Err(AppError::Validation(format!(
            "score must be between 0 and 100, got {score}"
        )));
    }
    Ok(Json(ApiResponse::data(match_level(score))))
}

/// GET /api/v1/vocabulary
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::list(state.matcher.vocabulary().tokens().to_vec()))
}
