use std::sync::Arc;

use axum::{
    extract::Request,
    http::header::CONTENT_TYPE,
    http::{HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use sg_common::{run_id, JobListing};

pub mod error;
pub mod handlers;

use handlers::{catalog, health, jobs, matches};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            cors_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

/// Shared request state. The job collection is fetched once at startup and
/// held immutably — handlers only ever read it.
pub struct AppState {
    pub jobs: Vec<JobListing>,
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Scopes a fresh request id so error responses can be correlated with logs.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    error::with_request_id(Some(run_id::generate()), next.run(request)).await
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/catalog/roles", get(catalog::list_roles))
        .route(
            "/catalog/roles/:role_id/skills/:level",
            get(catalog::role_skills),
        )
        .route("/match/role", post(matches::role_match))
        .route("/jobs", get(jobs::search_jobs))
        .route("/jobs/filters", get(jobs::filter_options))
        .route("/jobs/:job_id/match", post(matches::job_match));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// State with an injected job collection, for router tests.
pub fn test_state(jobs: Vec<JobListing>) -> SharedState {
    Arc::new(AppState {
        jobs,
        config: AppConfig::default(),
    })
}
