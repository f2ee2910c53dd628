//! Compiled-in catalog: roles with weighted skill lists, plus the static
//! vocabularies the filter UI offers (countries, regions, skill tags).
//!
//! The catalog is loaded once per process and never mutated at runtime.

mod roles;

use crate::{ExperienceLevel, JobRole, Skill};

/// Market country option for the selection wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "US", name: "Estados Unidos" },
    Country { code: "ES", name: "España" },
    Country { code: "MX", name: "México" },
    Country { code: "AR", name: "Argentina" },
    Country { code: "CO", name: "Colombia" },
    Country { code: "CL", name: "Chile" },
    Country { code: "PE", name: "Perú" },
    Country { code: "BR", name: "Brasil" },
    Country { code: "DE", name: "Alemania" },
    Country { code: "UK", name: "Reino Unido" },
];

/// Region option for the job board. "global" is also the filter sentinel
/// that disables the region predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

pub const REGIONS: &[Region] = &[
    Region { code: "global", name: "Global" },
    Region { code: "us", name: "Estados Unidos" },
    Region { code: "latam", name: "Latinoamérica" },
    Region { code: "eu", name: "Europa" },
    Region { code: "asia", name: "Asia" },
];

/// Skill vocabulary offered by the job-board filter.
pub const SKILL_TAGS: &[&str] = &[
    "Python", "JavaScript", "TypeScript", "SQL", "Java", "Go", "Rust", "C++",
    "React", "Node.js", "AWS", "Docker", "Kubernetes", "Git", "PostgreSQL", "MongoDB",
    "TensorFlow", "PyTorch", "Spark", "Airflow", "Linux", "GraphQL", "REST APIs",
    "CI/CD", "Terraform", "Redis", "Kafka", "Elasticsearch", "Vue.js", "Angular",
];

/// Role options on the job board. A superset of the skills catalog: the
/// board lists roles whose skill roadmaps are not published yet.
pub const ROLE_FILTER_OPTIONS: &[(&str, &str)] = &[
    ("data-engineer", "Data Engineer"),
    ("frontend-developer", "Frontend Developer"),
    ("backend-developer", "Backend Developer"),
    ("data-scientist", "Data Scientist"),
    ("devops-engineer", "DevOps Engineer"),
    ("ai-engineer", "AI/ML Engineer"),
    ("cybersecurity-analyst", "Cybersecurity Analyst"),
    ("fullstack-developer", "Full Stack Developer"),
];

/// All selectable roles with their per-level skill lists.
pub fn roles() -> &'static [JobRole] {
    roles::all()
}

pub fn find_role(role_id: &str) -> Option<&'static JobRole> {
    roles().iter().find(|role| role.id == role_id)
}

/// The skill list for one role and level, or `None` for an unknown role.
pub fn skills_for(role_id: &str, level: ExperienceLevel) -> Option<&'static [Skill]> {
    find_role(role_id).map(|role| role.skills_for(level))
}

pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}
