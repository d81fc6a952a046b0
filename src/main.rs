// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::published_sheet_repository::PublishedSheetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    current_dashboard, health_check, list_tabs, sync_dashboard, vehicle_positions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(PublishedSheetRepository::new(config.sheets.clone()));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository, config.animation.tick());

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/tabs", get(list_tabs))
        .route("/dashboards/:tab", get(sync_dashboard))
        .route("/dashboard/current", get(current_dashboard))
        .route("/dashboard/vehicles", get(vehicle_positions))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting city-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
