use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::{self, SkillSummary};
use crate::matching::{
    aggregate_by_category, uniform_match, weighted_match, MatchBand, DASHBOARD_BANDS,
    JOB_VIEW_BANDS,
};
use crate::selection::SelectedSkills;
use crate::{JobListing, Selection, Skill, SkillCategory};

/// One radar axis: how demanding the category is vs how much of that demand
/// the user already covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub label: String,
    pub required: u8,
    pub achieved: u8,
    pub full_mark: u8,
}

/// Dashboard match result for a role/level selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatchResponse {
    pub selection: Selection,
    /// Weighted coverage of the role's skill demand (0–100).
    pub match_percent: u8,
    pub band: MatchBand,
    pub summary: SkillSummary,
    pub categories: Vec<CategoryScore>,
    /// Unselected high-priority skills with the highest demand (max 3).
    pub impact_skills: Vec<Skill>,
    /// Portfolio-ready checklist (max 6, catalog order).
    pub portfolio: Vec<Skill>,
    pub projected_coverage: u8,
    pub analyzed_at: DateTime<Utc>,
}

impl RoleMatchResponse {
    /// Runs the full dashboard computation over one immutable selection
    /// snapshot.
    pub fn build(
        selection: Selection,
        skills: &[Skill],
        selected: &SelectedSkills,
        analyzed_at: DateTime<Utc>,
    ) -> Self {
        let match_percent = weighted_match(skills, selected);
        let categories = aggregate_by_category(skills, selected)
            .into_iter()
            .map(|row| CategoryScore {
                category: row.category,
                label: row.category.label().to_string(),
                required: row.required_avg,
                achieved: row.achieved_avg,
                full_mark: 100,
            })
            .collect();

        Self {
            match_percent,
            band: DASHBOARD_BANDS.classify(match_percent),
            summary: insights::summarize(skills, selected),
            categories,
            impact_skills: insights::impact_skills(skills, selected)
                .into_iter()
                .cloned()
                .collect(),
            portfolio: insights::portfolio_checklist(skills, selected)
                .into_iter()
                .cloned()
                .collect(),
            projected_coverage: insights::projected_coverage(match_percent),
            analyzed_at,
            selection,
        }
    }
}

/// Match result against one job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub job_id: String,
    /// Uniform coverage of the posting's skill names (0–100).
    pub match_percent: u8,
    pub band: MatchBand,
    pub total_skills: usize,
    pub mastered: usize,
    pub remaining: usize,
    pub analyzed_at: DateTime<Utc>,
}

impl JobMatchResponse {
    pub fn build(job: &JobListing, checked: &SelectedSkills, analyzed_at: DateTime<Utc>) -> Self {
        let match_percent = uniform_match(&job.skills, checked);
        let mastered = job
            .skills
            .iter()
            .filter(|name| checked.contains(name))
            .count();

        Self {
            job_id: job.id.clone(),
            match_percent,
            band: JOB_VIEW_BANDS.classify(match_percent),
            total_skills: job.skills.len(),
            mastered,
            remaining: job.skills.len() - mastered,
            analyzed_at,
        }
    }
}
