use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use sg_common::api::{JobMatchRequest, JobMatchResponse, RoleMatchRequest, RoleMatchResponse};
use sg_common::catalog;
use sg_common::selection::SelectedSkills;

use crate::error::ApiError;
use crate::SharedState;

/// Dashboard match for a completed role/level selection.
pub async fn role_match(
    Json(request): Json<RoleMatchRequest>,
) -> Result<Json<RoleMatchResponse>, ApiError> {
    let skills = catalog::skills_for(&request.selection.role_id, request.selection.level)
        .ok_or_else(|| {
            ApiError::NotFound(format!("role not found: {}", request.selection.role_id))
        })?;

    let selected: SelectedSkills = request.selected_skills.iter().map(String::as_str).collect();

    Ok(Json(RoleMatchResponse::build(
        request.selection,
        skills,
        &selected,
        Utc::now(),
    )))
}

/// Uniform match against one posting's skill-name list.
pub async fn job_match(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchResponse>, ApiError> {
    let job = state
        .jobs
        .iter()
        .find(|job| job.id == job_id)
        .ok_or_else(|| ApiError::NotFound(format!("job not found: {job_id}")))?;

    let checked: SelectedSkills = request.checked_skills.iter().map(String::as_str).collect();

    Ok(Json(JobMatchResponse::build(job, &checked, Utc::now())))
}
