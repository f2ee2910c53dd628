use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use sg_common::{ExperienceLevel, JobListing, Modality};

fn job(id: &str, title: &str, skills: &[&str], demand: u8, posted_days: u32) -> JobListing {
    JobListing {
        id: id.into(),
        title: title.into(),
        company: "Acme".into(),
        location: "Madrid".into(),
        region: "eu".into(),
        modality: Modality::Remote,
        level: ExperienceLevel::Mid,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        demand_percent: demand,
        salary_range: None,
        posted_days,
        role_id: "data-engineer".into(),
    }
}

fn fixture_jobs() -> Vec<JobListing> {
    vec![
        job("1", "Data Engineer", &["Python", "SQL", "AWS"], 60, 5),
        job("2", "Backend Developer", &["Python"], 90, 1),
        job("3", "Platform Engineer", &["Rust", "Kubernetes"], 75, 10),
    ]
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_loaded_jobs() {
    let app = sg_api::create_router(sg_api::test_state(fixture_jobs()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["jobsLoaded"], 3);
}

#[tokio::test]
async fn job_search_requires_every_filter_skill() {
    let app = sg_api::create_router(sg_api::test_state(fixture_jobs()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/jobs?skills=Python,SQL")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["jobs"][0]["id"], "1");
}

#[tokio::test]
async fn job_search_sorts_by_recency() {
    let app = sg_api::create_router(sg_api::test_state(fixture_jobs()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/jobs?sort=recent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    let ages: Vec<i64> = json["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["postedDays"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![1, 5, 10]);
}

#[tokio::test]
async fn filter_options_expose_the_vocabulary() {
    let app = sg_api::create_router(sg_api::test_state(Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/jobs/filters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["regions"].as_array().unwrap().len(), 5);
    assert_eq!(json["skillTags"].as_array().unwrap().len(), 30);
    assert_eq!(json["modalities"][0]["value"], "remote");
}

#[tokio::test]
async fn role_match_computes_the_dashboard_payload() {
    let app = sg_api::create_router(sg_api::test_state(Vec::new()));

    let body = json!({
        "selection": {
            "roleId": "data-engineer",
            "level": "junior",
            "country": "MX",
            "hoursPerWeek": 10
        },
        "selectedSkills": ["python", "sql", "git"]
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/match/role")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let percent = json["matchPercent"].as_u64().unwrap();
    assert!(percent > 0 && percent < 100);
    assert_eq!(json["summary"]["mastered"], 3);
    assert_eq!(json["selection"]["country"], "MX");
    assert!(json["categories"].as_array().unwrap().len() <= 5);
    assert!(json["impactSkills"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
async fn role_match_rejects_unknown_roles() {
    let app = sg_api::create_router(sg_api::test_state(Vec::new()));

    let body = json!({
        "selection": {
            "roleId": "astronaut",
            "level": "junior",
            "country": "MX",
            "hoursPerWeek": 10
        }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/match/role")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "not_found");
    assert!(json["request_id"].is_string());
}

#[tokio::test]
async fn job_match_scores_checked_names_uniformly() {
    let app = sg_api::create_router(sg_api::test_state(fixture_jobs()));

    let body = json!({ "checkedSkills": ["Python", "SQL"] });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/jobs/1/match")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["matchPercent"], 67);
    assert_eq!(json["band"], "medium");
    assert_eq!(json["mastered"], 2);
    assert_eq!(json["remaining"], 1);
}

#[tokio::test]
async fn job_match_on_unknown_id_is_not_found() {
    let app = sg_api::create_router(sg_api::test_state(fixture_jobs()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/jobs/999/match")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_endpoints_serve_roles_and_skills() {
    let app = sg_api::create_router(sg_api::test_state(Vec::new()));

    let roles = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/catalog/roles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(roles.status(), StatusCode::OK);
    let roles_json = body_json(roles).await;
    assert_eq!(roles_json.as_array().unwrap().len(), 5);

    let skills = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/catalog/roles/data-engineer/skills/junior")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(skills.status(), StatusCode::OK);
    let skills_json = body_json(skills).await;
    assert!(skills_json
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"] == "python"));

    let bad_level = app
        .oneshot(
            Request::builder()
                .uri("/api/catalog/roles/data-engineer/skills/staff")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad_level.status(), StatusCode::BAD_REQUEST);
}
