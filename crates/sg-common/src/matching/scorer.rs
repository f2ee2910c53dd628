use crate::selection::SelectedSkills;
use crate::Skill;

/// Coverage of total item weight achieved by the selected items, rounded
/// half-up to an integer percent.
///
/// Both public scoring modes are instances of this one function with a
/// different weight extractor, so monotonicity under selection growth holds
/// identically in both. An empty list and an all-zero total weight both
/// score 0 instead of dividing by zero.
fn coverage_percent<T>(
    items: &[T],
    selected: impl Fn(&T) -> bool,
    weight: impl Fn(&T) -> f64,
) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let total: f64 = items.iter().map(&weight).sum();
    if total <= 0.0 {
        return 0;
    }

    let achieved: f64 = items.iter().filter(|item| selected(item)).map(&weight).sum();
    ((achieved / total) * 100.0).round() as u8
}

/// Match percent for a role/level dashboard: skills weighted by market
/// demand, so mastering one high-demand skill contributes more than a
/// low-demand one.
///
/// Selected ids that do not appear in `skills` contribute nothing — a stale
/// selection is an expected transient state, not an error.
pub fn weighted_match(skills: &[Skill], selected: &SelectedSkills) -> u8 {
    coverage_percent(
        skills,
        |skill| selected.contains(&skill.id),
        |skill| f64::from(skill.demand_percent),
    )
}

/// Match percent for a raw job posting's skill-name list, which carries no
/// weights: every name counts the same.
pub fn uniform_match(skill_names: &[String], checked: &SelectedSkills) -> u8 {
    coverage_percent(skill_names, |name| checked.contains(name), |_| 1.0)
}
