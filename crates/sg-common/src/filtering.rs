use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::{ExperienceLevel, JobListing, Modality};

/// Region code that matches every job. It doubles as a legitimate region
/// value on listings, but as a filter it means "no constraint".
pub const GLOBAL_REGION: &str = "global";

/// Complete filter configuration for the job board.
///
/// Every field empty/`None` disables that predicate. The UI always submits a
/// whole `FilterState` — updates replace the previous snapshot, they are
/// never merged field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub role: String,
    pub skills: Vec<String>,
    pub modality: Option<Modality>,
    pub region: String,
    pub level: Option<ExperienceLevel>,
}

impl FilterState {
    /// The no-constraint state ("limpiar filtros").
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Conjunction of all active predicates.
    fn matches(&self, job: &JobListing) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
                || job.skills.iter().any(|s| s.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if !self.role.is_empty() && job.role_id != self.role {
            return false;
        }

        // The job must carry every required skill, not just one of them.
        if !self.skills.is_empty() {
            let has_all = self.skills.iter().all(|wanted| {
                job.skills
                    .iter()
                    .any(|offered| offered.eq_ignore_ascii_case(wanted))
            });
            if !has_all {
                return false;
            }
        }

        if let Some(modality) = self.modality {
            if job.modality != modality {
                return false;
            }
        }

        if !self.region.is_empty() && self.region != GLOBAL_REGION && job.region != self.region {
            return false;
        }

        if let Some(level) = self.level {
            if job.level != level {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Demand,
    Salary,
    Recent,
}

impl SortKey {
    /// Unknown codes fall back to the board's default ordering.
    pub fn from_code(code: &str) -> Self {
        match code {
            "salary" => SortKey::Salary,
            "recent" => SortKey::Recent,
            _ => SortKey::Demand,
        }
    }
}

/// Applies the filter configuration and orders the survivors.
///
/// Pure: the input slice is never mutated. The underlying sort is stable, so
/// ties keep their upstream order.
pub fn filter_and_sort(jobs: &[JobListing], filters: &FilterState, sort: SortKey) -> Vec<JobListing> {
    let mut result: Vec<JobListing> = jobs
        .iter()
        .filter(|job| filters.matches(job))
        .cloned()
        .collect();

    match sort {
        // TODO: sort by salary once listings carry a numeric salary field;
        // until then the key is an alias for demand.
        SortKey::Demand | SortKey::Salary => {
            result.sort_by(|a, b| b.demand_percent.cmp(&a.demand_percent));
        }
        SortKey::Recent => result.sort_by(|a, b| a.posted_days.cmp(&b.posted_days)),
    }

    result
}

/// Splits a comma-separated skill string into trimmed, non-empty names.
/// Shared by the job source row mapping and the filter query parsing.
pub fn split_skill_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, skills: &[&str]) -> JobListing {
        JobListing {
            id: id.into(),
            title: format!("Job {id}"),
            company: "Acme".into(),
            location: "Madrid".into(),
            region: "eu".into(),
            modality: Modality::Remote,
            level: ExperienceLevel::Mid,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            demand_percent: 50,
            salary_range: None,
            posted_days: 1,
            role_id: "backend-developer".into(),
        }
    }

    fn board() -> Vec<JobListing> {
        let mut a = job("a", &["Python", "SQL", "AWS"]);
        a.title = "Data Engineer".into();
        a.company = "DataCorp".into();
        a.demand_percent = 60;
        a.posted_days = 5;
        a.region = "us".into();
        a.role_id = "data-engineer".into();

        let mut b = job("b", &["Python"]);
        b.title = "Backend Developer".into();
        b.company = "WebWorks".into();
        b.demand_percent = 90;
        b.posted_days = 1;
        b.modality = Modality::Hybrid;
        b.level = ExperienceLevel::Junior;

        let mut c = job("c", &["Rust", "Kubernetes"]);
        c.title = "Platform Engineer".into();
        c.company = "CloudNine".into();
        c.demand_percent = 75;
        c.posted_days = 10;
        c.region = "latam".into();
        c.modality = Modality::Onsite;
        c.level = ExperienceLevel::Senior;

        vec![a, b, c]
    }

    #[test]
    fn empty_filters_keep_every_job() {
        let jobs = board();
        let result = filter_and_sort(&jobs, &FilterState::cleared(), SortKey::Demand);

        assert_eq!(result.len(), jobs.len());
        let mut ids: Vec<&str> = result.iter().map(|j| j.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn search_matches_title_company_or_skill_case_insensitively() {
        let jobs = board();

        let by_title = FilterState {
            search: "data eng".into(),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&jobs, &by_title, SortKey::Demand).len(), 1);

        let by_company = FilterState {
            search: "webworks".into(),
            ..Default::default()
        };
        assert_eq!(
            filter_and_sort(&jobs, &by_company, SortKey::Demand)[0].id,
            "b"
        );

        let by_skill = FilterState {
            search: "KUBER".into(),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&jobs, &by_skill, SortKey::Demand)[0].id, "c");
    }

    #[test]
    fn skills_filter_requires_the_full_set() {
        let jobs = board();
        let filters = FilterState {
            skills: vec!["Python".into(), "SQL".into()],
            ..Default::default()
        };

        let result = filter_and_sort(&jobs, &filters, SortKey::Demand);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn skill_names_compare_case_insensitively() {
        let jobs = board();
        let filters = FilterState {
            skills: vec!["python".into(), "sql".into()],
            ..Default::default()
        };

        assert_eq!(filter_and_sort(&jobs, &filters, SortKey::Demand).len(), 1);
    }

    #[test]
    fn predicates_compose_as_a_conjunction() {
        let jobs = board();
        let filters = FilterState {
            search: "engineer".into(),
            region: "latam".into(),
            ..Default::default()
        };

        // "engineer" matches a and c; region keeps only c.
        let result = filter_and_sort(&jobs, &filters, SortKey::Demand);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "c");
    }

    #[test]
    fn role_modality_and_level_filter_exactly() {
        let jobs = board();

        let by_role = FilterState {
            role: "data-engineer".into(),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&jobs, &by_role, SortKey::Demand)[0].id, "a");

        let by_modality = FilterState {
            modality: Some(Modality::Onsite),
            ..Default::default()
        };
        assert_eq!(
            filter_and_sort(&jobs, &by_modality, SortKey::Demand)[0].id,
            "c"
        );

        let by_level = FilterState {
            level: Some(ExperienceLevel::Junior),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&jobs, &by_level, SortKey::Demand)[0].id, "b");
    }

    #[test]
    fn global_region_behaves_like_no_region() {
        let jobs = board();
        let global = FilterState {
            region: GLOBAL_REGION.into(),
            ..Default::default()
        };

        assert_eq!(
            filter_and_sort(&jobs, &global, SortKey::Demand),
            filter_and_sort(&jobs, &FilterState::cleared(), SortKey::Demand)
        );
    }

    #[test]
    fn demand_sorts_descending() {
        let result = filter_and_sort(&board(), &FilterState::cleared(), SortKey::Demand);
        let demands: Vec<u8> = result.iter().map(|j| j.demand_percent).collect();
        assert_eq!(demands, vec![90, 75, 60]);
    }

    #[test]
    fn recent_sorts_by_ascending_age() {
        let result = filter_and_sort(&board(), &FilterState::cleared(), SortKey::Recent);
        let ages: Vec<u32> = result.iter().map(|j| j.posted_days).collect();
        assert_eq!(ages, vec![1, 5, 10]);
    }

    #[test]
    fn salary_is_an_alias_for_demand() {
        let jobs = board();
        assert_eq!(
            filter_and_sort(&jobs, &FilterState::cleared(), SortKey::Salary),
            filter_and_sort(&jobs, &FilterState::cleared(), SortKey::Demand)
        );
    }

    #[test]
    fn unknown_sort_code_falls_back_to_demand() {
        assert_eq!(SortKey::from_code("relevance"), SortKey::Demand);
        assert_eq!(SortKey::from_code(""), SortKey::Demand);
        assert_eq!(SortKey::from_code("recent"), SortKey::Recent);
    }

    #[test]
    fn split_skill_csv_trims_and_drops_empties() {
        assert_eq!(
            split_skill_csv(" Python , SQL,,AWS "),
            vec!["Python", "SQL", "AWS"]
        );
        assert!(split_skill_csv("  ").is_empty());
    }

    #[test]
    fn input_slice_is_left_untouched() {
        let jobs = board();
        let before = jobs.clone();
        let _ = filter_and_sort(&jobs, &FilterState::cleared(), SortKey::Recent);
        assert_eq!(jobs, before);
    }
}
