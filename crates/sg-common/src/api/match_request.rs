use serde::Deserialize;

use crate::Selection;

/// Match request for a role/level dashboard.
///
/// Carries the whole 4-step selection — the engine only scores role+level,
/// but the response echoes the market context back to the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatchRequest {
    pub selection: Selection,
    #[serde(default)]
    pub selected_skills: Vec<String>,
}

/// Match request against one job posting's unweighted skill-name list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    #[serde(default)]
    pub checked_skills: Vec<String>,
}
