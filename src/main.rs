// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::page_views::ViewRegistry;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_store::InMemorySessionStore;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("erp_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    let generator_settings = config.data.resolve(chrono::Local::now().date_naive());
    tracing::info!(
        seed = generator_settings.seed,
        as_of = %generator_settings.as_of,
        "Loaded configuration"
    );

    // Session storage (infrastructure layer)
    let store = Arc::new(InMemorySessionStore::new(config.session.max_sessions));

    // Services (application layer)
    let dashboard_service =
        DashboardService::new(store, ViewRegistry::standard(), generator_settings)
            .with_settings_summary(config.summary()?);

    let state = Arc::new(AppState {
        dashboard_service,
        cookie_name: config.session.cookie_name.clone(),
    });

    // Router (presentation layer)
    let router = build_router(state);

    let addr = config.server.socket_addr()?;
    tracing::info!("Starting erp-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
