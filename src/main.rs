// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::application::launch_source::LaunchSource;
use crate::application::layout_service::build_layout;
use crate::domain::table::LaunchTable;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_source::CsvLaunchSource;
use crate::infrastructure::page::render_page;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("launch_dashboard=info,tower_http=debug")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Load the launch table once; it is read-only from here on
    let source = CsvLaunchSource::new(config.dataset.source.clone());
    tracing::info!("Loading launch records from {}", source.location());
    let table = Arc::new(LaunchTable::new(source.load_records().await?)?);
    let (min_payload, max_payload) = table.payload_bounds();
    tracing::info!(
        "Loaded {} launches from {} sites, payload {}..{} kg",
        table.len(),
        table.sites().len(),
        min_payload,
        max_payload
    );

    // Build layout and services (application layer)
    let layout = build_layout(&table, &config.dashboard);
    let page_html = render_page(&layout)?;
    let chart_service = ChartService::new(table);

    // Create application state
    let state = Arc::new(AppState {
        chart_service,
        layout,
        page_html,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting launch dashboard on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
