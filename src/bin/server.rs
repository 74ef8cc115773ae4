//! Launchboard HTTP server binary.
//!
//! Loads the launch dataset once, builds the application state, and serves
//! the dashboard. A missing or malformed dataset is fatal: the process does
//! not start without data.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: Launch records CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchboard::http::{create_router, AppState};
use launchboard::parsing;

const DEFAULT_DATASET_PATH: &str = "data/spacex_launch_dash.csv";

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

    info!("Starting Launchboard HTTP Server");

    // Load the dataset once; everything downstream reads it immutably.
    let dataset_path: PathBuf = env::var("DATASET_PATH")
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
        .into();
    let dataset = parsing::load_dataset(&dataset_path)?;

    // Create application state
    let state = AppState::new(Arc::new(dataset));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Dashboard available at http://{}/", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
