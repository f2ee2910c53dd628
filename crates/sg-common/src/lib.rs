pub mod api;
pub mod catalog;
pub mod db;
pub mod filtering;
pub mod insights;
pub mod logging;
pub mod matching;
pub mod run_id;
pub mod selection;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// Commonly used data models for the matching and filtering functions.

/// The five fixed skill groupings used for comparative breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SkillCategory {
    Languages,
    Tools,
    Concepts,
    SoftSkills,
    Projects,
}

impl SkillCategory {
    /// Display label (the catalog ships Spanish copy).
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Lenguajes",
            SkillCategory::Tools => "Herramientas",
            SkillCategory::Concepts => "Conceptos",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Projects => "Proyectos",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "💻",
            SkillCategory::Tools => "🔧",
            SkillCategory::Concepts => "📚",
            SkillCategory::SoftSkills => "🤝",
            SkillCategory::Projects => "📁",
        }
    }
}

/// Editorial emphasis on a skill, independent of its market demand weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Parses a level code. Unknown codes yield `None`, never an error.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "junior" => Some(ExperienceLevel::Junior),
            "mid" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }

    pub fn all() -> [ExperienceLevel; 3] {
        [
            ExperienceLevel::Junior,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Modality {
    Remote,
    Hybrid,
    Onsite,
}

impl Modality {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "remote" => Some(Modality::Remote),
            "hybrid" => Some(Modality::Hybrid),
            "onsite" => Some(Modality::Onsite),
            _ => None,
        }
    }

    pub fn all() -> [Modality; 3] {
        [Modality::Remote, Modality::Hybrid, Modality::Onsite]
    }
}

/// Recommended learning material attached to a catalog skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub duration: String,
    pub level: String,
}

/// Hands-on project suggestion attached to a catalog skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedProject {
    pub title: String,
    pub description: String,
}

/// One weighted skill inside a role+level list.
///
/// `demand_percent` is the fraction of analyzed market postings requiring the
/// skill (a weight in 0–100, not a probability that sums to 100 across a
/// list). Catalog skills are immutable; ids are unique within one list but
/// NOT across lists, so selection snapshots must be reset when the active
/// list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub demand_percent: u8,
    pub priority: Priority,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<LearningResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<SuggestedProject>,
}

/// Skill lists per experience level for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSkills {
    pub junior: Vec<Skill>,
    pub mid: Vec<Skill>,
    pub senior: Vec<Skill>,
}

impl RoleSkills {
    pub fn for_level(&self, level: ExperienceLevel) -> &[Skill] {
        match level {
            ExperienceLevel::Junior => &self.junior,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub skills: RoleSkills,
}

impl JobRole {
    pub fn skills_for(&self, level: ExperienceLevel) -> &[Skill] {
        self.skills.for_level(level)
    }
}

/// The user's completed 4-step choice: role, level, market and weekly time.
///
/// Never partially valid — all four fields are required before any match
/// computation uses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub role_id: String,
    pub level: ExperienceLevel,
    pub country: String,
    pub hours_per_week: u8,
}

/// One externally supplied job posting.
///
/// `skills` are plain name strings without weights or categories.
/// `demand_percent` here is a job-level market indicator, unrelated in scale
/// semantics to the per-skill weight of the same name. Read-only within the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub region: String,
    pub modality: Modality,
    pub level: ExperienceLevel,
    pub skills: Vec<String>,
    pub demand_percent: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    pub posted_days: u32,
    pub role_id: String,
}
