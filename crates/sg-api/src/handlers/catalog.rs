use axum::{extract::Path, Json};
use serde::Serialize;

use sg_common::{catalog, ExperienceLevel, Skill};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub async fn list_roles() -> Json<Vec<RoleSummary>> {
    let roles = catalog::roles()
        .iter()
        .map(|role| RoleSummary {
            id: role.id.as_str(),
            title: role.title.as_str(),
            description: role.description.as_str(),
            icon: role.icon.as_str(),
        })
        .collect();

    Json(roles)
}

pub async fn role_skills(
    Path((role_id, level)): Path<(String, String)>,
) -> Result<Json<&'static [Skill]>, ApiError> {
    let level = ExperienceLevel::from_code(&level)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown level: {level}")))?;

    let skills = catalog::skills_for(&role_id, level)
        .ok_or_else(|| ApiError::NotFound(format!("role not found: {role_id}")))?;

    Ok(Json(skills))
}
