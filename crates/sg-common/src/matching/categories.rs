use serde::{Deserialize, Serialize};

use crate::selection::SelectedSkills;
use crate::{Skill, SkillCategory};

/// Declared display order of the five categories.
pub const CATEGORY_ORDER: [SkillCategory; 5] = [
    SkillCategory::Languages,
    SkillCategory::Tools,
    SkillCategory::Concepts,
    SkillCategory::SoftSkills,
    SkillCategory::Projects,
];

/// Required-vs-achieved pair for one category, both on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: SkillCategory,
    pub required_avg: u8,
    pub achieved_avg: u8,
}

/// Groups a skill list by category for the comparative radar.
///
/// `required_avg` is the mean demand over the category ("how demanding is
/// this category overall"). `achieved_avg` divides the selected skills'
/// demand by the count of ALL skills in the category ("how much of that
/// demand is already covered") — the asymmetric denominator is intentional
/// and keeps `achieved_avg <= required_avg`. Categories with no skills in
/// the input are omitted; output follows `CATEGORY_ORDER`.
pub fn aggregate_by_category(
    skills: &[Skill],
    selected: &SelectedSkills,
) -> Vec<CategoryBreakdown> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let in_category: Vec<&Skill> =
                skills.iter().filter(|s| s.category == category).collect();
            if in_category.is_empty() {
                return None;
            }

            let count = in_category.len() as f64;
            let required: f64 = in_category
                .iter()
                .map(|s| f64::from(s.demand_percent))
                .sum::<f64>()
                / count;
            let achieved: f64 = in_category
                .iter()
                .filter(|s| selected.contains(&s.id))
                .map(|s| f64::from(s.demand_percent))
                .sum::<f64>()
                / count;

            Some(CategoryBreakdown {
                category,
                required_avg: required.round() as u8,
                achieved_avg: achieved.round() as u8,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;

    fn skill(id: &str, category: SkillCategory, demand: u8) -> Skill {
        Skill {
            id: id.into(),
            name: id.into(),
            category,
            demand_percent: demand,
            priority: Priority::Medium,
            description: String::new(),
            resource: None,
            project: None,
        }
    }

    fn sample_skills() -> Vec<Skill> {
        vec![
            skill("python", SkillCategory::Languages, 92),
            skill("sql", SkillCategory::Languages, 95),
            skill("git", SkillCategory::Tools, 88),
            skill("communication", SkillCategory::SoftSkills, 65),
        ]
    }

    #[test]
    fn omits_categories_absent_from_the_input() {
        let rows = aggregate_by_category(&sample_skills(), &SelectedSkills::new());

        assert_eq!(rows.len(), 3);
        assert!(rows
            .iter()
            .all(|r| r.category != SkillCategory::Concepts && r.category != SkillCategory::Projects));
    }

    #[test]
    fn follows_declared_category_order() {
        let rows = aggregate_by_category(&sample_skills(), &SelectedSkills::new());
        let order: Vec<SkillCategory> = rows.iter().map(|r| r.category).collect();

        assert_eq!(
            order,
            vec![
                SkillCategory::Languages,
                SkillCategory::Tools,
                SkillCategory::SoftSkills
            ]
        );
    }

    #[test]
    fn required_is_the_rounded_category_mean() {
        let rows = aggregate_by_category(&sample_skills(), &SelectedSkills::new());

        // (92 + 95) / 2 = 93.5 -> 94
        assert_eq!(rows[0].required_avg, 94);
        assert_eq!(rows[0].achieved_avg, 0);
    }

    #[test]
    fn achieved_divides_by_the_full_category_count() {
        let picked: SelectedSkills = ["python"].into_iter().collect();
        let rows = aggregate_by_category(&sample_skills(), &picked);

        // 92 / 2 = 46, not 92: coverage of category demand, not mean of owned.
        assert_eq!(rows[0].achieved_avg, 46);
    }

    #[test]
    fn achieved_never_exceeds_required() {
        let picked: SelectedSkills = ["python", "sql", "git", "communication"]
            .into_iter()
            .collect();

        for row in aggregate_by_category(&sample_skills(), &picked) {
            assert!(row.achieved_avg <= row.required_avg);
        }
    }

    #[test]
    fn empty_input_produces_no_rows() {
        assert!(aggregate_by_category(&[], &SelectedSkills::new()).is_empty());
    }
}
