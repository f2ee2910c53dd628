use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::{Error as PgError, Row};
use tracing::{instrument, warn};

use crate::db::PgPool;
use crate::filtering::{split_skill_csv, GLOBAL_REGION};
use crate::{ExperienceLevel, JobListing, Modality};

#[derive(Debug, Error)]
pub enum JobFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const JOB_QUERY: &str = "SELECT index, title, company, location, modality, skills FROM jobs";

/// One-shot read of the job board.
///
/// The upstream table only carries the columns in `JOB_QUERY` so far; the
/// remaining listing fields get the same transitional defaults the frontend
/// used while those columns land (global region, mid level, zero demand and
/// age, unknown role). Callers treat a failure as "no jobs available" — the
/// engine never retries.
#[instrument(skip(pool))]
pub async fn fetch_job_listings(pool: &PgPool) -> Result<Vec<JobListing>, JobFetchError> {
    let client = pool.get().await?;
    let rows = client.query(JOB_QUERY, &[]).await?;

    Ok(rows.into_iter().map(map_row).collect())
}

fn map_row(row: Row) -> JobListing {
    let id: i64 = row.get("index");
    let modality_raw: String = row.get("modality");
    let skills_raw: Option<String> = row.get("skills");

    JobListing {
        id: id.to_string(),
        title: row.get("title"),
        company: row.get("company"),
        location: row.get("location"),
        region: GLOBAL_REGION.to_string(),
        modality: parse_modality(&modality_raw),
        level: ExperienceLevel::Mid,
        skills: skills_raw.as_deref().map(split_skill_csv).unwrap_or_default(),
        demand_percent: 0,
        salary_range: None,
        posted_days: 0,
        role_id: "unknown".to_string(),
    }
}

/// Unrecognized modality values keep the row and fall back to onsite.
fn parse_modality(raw: &str) -> Modality {
    Modality::from_code(raw).unwrap_or_else(|| {
        warn!(modality = raw, "unrecognized job modality, defaulting to onsite");
        Modality::Onsite
    })
}
