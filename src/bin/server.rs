//! Outcomes HTTP Server Binary
//!
//! Entry point for the career outcomes REST API server. It loads the seed
//! datasets, sets up the HTTP router, and starts serving requests.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_DIR`: Directory with the seed JSON files (default: compiled-in seed data)
//! - `RULES_FILE`: TOML file with risk-rule keyword sets (default: built-in lists)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use outcomes_rust::data::Datasets;
use outcomes_rust::http::{create_router, AppState};
use outcomes_rust::rules::RiskRuleConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting outcomes HTTP server");

    // Load datasets once; they are immutable for the life of the process.
    let datasets = match env::var("DATA_DIR") {
        Ok(dir) => {
            info!("Loading datasets from {dir}");
            Datasets::load_from_dir(&dir)?
        }
        Err(_) => {
            info!("Loading compiled-in seed datasets");
            Datasets::builtin()?
        }
    };
    info!(
        "Datasets loaded: {} schools, {} majors, {} occupations, {} cohorts",
        datasets.schools.all().len(),
        datasets.majors.all().len(),
        datasets.occupations.all().len(),
        datasets.cohorts.all().len()
    );

    let risk_rules = match env::var("RULES_FILE") {
        Ok(path) => {
            info!("Loading risk rule config from {path}");
            RiskRuleConfig::load_from_file(&path)?
        }
        Err(_) => RiskRuleConfig::default(),
    };

    // Create application state and router
    let state = AppState::new(Arc::new(datasets), risk_rules);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
