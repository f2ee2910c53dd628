use serde::{Deserialize, Serialize};

use crate::selection::SelectedSkills;
use crate::{Priority, Skill};

/// Quick-stats block of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub total: usize,
    pub mastered: usize,
    pub remaining: usize,
    pub high_priority_missing: usize,
}

pub fn summarize(skills: &[Skill], selected: &SelectedSkills) -> SkillSummary {
    let mastered = skills.iter().filter(|s| selected.contains(&s.id)).count();
    let high_priority_missing = skills
        .iter()
        .filter(|s| s.priority == Priority::High && !selected.contains(&s.id))
        .count();

    SkillSummary {
        total: skills.len(),
        mastered,
        remaining: skills.len() - mastered,
        high_priority_missing,
    }
}

/// The three unselected high-priority skills with the highest demand —
/// the "mayor impacto inmediato" chips.
pub fn impact_skills<'a>(skills: &'a [Skill], selected: &SelectedSkills) -> Vec<&'a Skill> {
    let mut missing: Vec<&Skill> = skills
        .iter()
        .filter(|s| s.priority == Priority::High && !selected.contains(&s.id))
        .collect();
    missing.sort_by(|a, b| b.demand_percent.cmp(&a.demand_percent));
    missing.truncate(3);
    missing
}

/// Portfolio-ready checklist: unselected high-priority skills in catalog
/// order, capped at six entries.
pub fn portfolio_checklist<'a>(skills: &'a [Skill], selected: &SelectedSkills) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| s.priority == Priority::High && !selected.contains(&s.id))
        .take(6)
        .collect()
}

/// Coverage the user would reach after completing the checklist, capped at
/// 95 so the copy never promises a perfect profile.
pub fn projected_coverage(match_percent: u8) -> u8 {
    (match_percent + 20).min(95)
}
