use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use sg_common::filtering::{filter_and_sort, split_skill_csv, FilterState, SortKey};
use sg_common::{catalog, ExperienceLevel, JobListing, Modality};

use crate::SharedState;

/// Query-string mirror of `FilterState` plus the sort key. Unknown codes
/// disable their predicate rather than failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobQuery {
    pub search: String,
    pub role: String,
    /// Comma-separated skill names; the job must carry all of them.
    pub skills: String,
    pub modality: String,
    pub region: String,
    pub level: String,
    pub sort: String,
}

impl JobQuery {
    fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone(),
            role: self.role.clone(),
            skills: split_skill_csv(&self.skills),
            modality: Modality::from_code(&self.modality),
            region: self.region.clone(),
            level: ExperienceLevel::from_code(&self.level),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub count: usize,
    pub jobs: Vec<JobListing>,
}

pub async fn search_jobs(
    State(state): State<SharedState>,
    Query(query): Query<JobQuery>,
) -> Json<JobSearchResponse> {
    let jobs = filter_and_sort(
        &state.jobs,
        &query.filter_state(),
        SortKey::from_code(&query.sort),
    );

    Json(JobSearchResponse {
        count: jobs.len(),
        jobs,
    })
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const MODALITY_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "remote", label: "Remoto" },
    FilterOption { value: "hybrid", label: "Híbrido" },
    FilterOption { value: "onsite", label: "Presencial" },
];

const LEVEL_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "junior", label: "Junior" },
    FilterOption { value: "mid", label: "Mid" },
    FilterOption { value: "senior", label: "Senior" },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub roles: Vec<FilterOption>,
    pub regions: Vec<FilterOption>,
    pub modalities: &'static [FilterOption],
    pub levels: &'static [FilterOption],
    pub skill_tags: &'static [&'static str],
}

/// The vocabulary the filter UI renders its selects and chips from.
pub async fn filter_options() -> Json<FilterOptions> {
    Json(FilterOptions {
        roles: catalog::ROLE_FILTER_OPTIONS
            .iter()
            .map(|&(value, label)| FilterOption { value, label })
            .collect(),
        regions: catalog::REGIONS
            .iter()
            .map(|region| FilterOption {
                value: region.code,
                label: region.name,
            })
            .collect(),
        modalities: MODALITY_OPTIONS,
        levels: LEVEL_OPTIONS,
        skill_tags: catalog::SKILL_TAGS,
    })
}
