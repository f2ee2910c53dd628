use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info, warn};

use sg_api::{create_router, AppConfig, AppState};
use sg_common::{db, logging, run_id, JobListing};

#[derive(Debug, Clone, Parser)]
#[command(name = "sg-api", about = "HTTP API serving the skillgap engine to the web UI")]
struct Cli {
    /// PostgreSQL connection string of the job source; unset starts an
    /// empty job board
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "SG_CORS_ORIGINS", default_value = "http://localhost:5173")]
    cors_origins: String,
}

/// The one fetch of the job collection. Any failure is logged once and the
/// service starts with no jobs — there is no retry path.
async fn load_jobs(database_url: Option<&str>) -> Vec<JobListing> {
    let Some(url) = database_url else {
        warn!("DATABASE_URL not set; job board starts empty");
        return Vec::new();
    };

    let pool = match db::create_pool_from_url(url) {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "job source pool creation failed; continuing without jobs");
            return Vec::new();
        }
    };

    match db::fetch_job_listings(&pool).await {
        Ok(jobs) => {
            info!(count = jobs.len(), "job listings loaded");
            jobs
        }
        Err(err) => {
            error!(error = %err, "job listing fetch failed; continuing without jobs");
            Vec::new()
        }
    }
}

async fn run() -> Result<(), std::io::Error> {
    dotenv().ok();
    logging::init_tracing_subscriber("sg-api");
    logging::install_tracing_panic_hook("sg-api");

    let cli = Cli::parse();
    let config = AppConfig {
        port: cli.port,
        cors_origins: cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
    };

    let jobs = load_jobs(cli.database_url.as_deref()).await;
    let state = Arc::new(AppState {
        jobs,
        config: config.clone(),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state);

    info!(%addr, run_id = run_id::get(), "sg-api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!(error = %err, "sg-api failed");
        std::process::exit(1);
    }
}
