// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::auth_service::AuthService;
use crate::application::dashboard_service::DashboardService;
use crate::application::page_service::PageService;
use crate::application::session::{MemorySessionStore, SessionStore};
use crate::infrastructure::config::{PortalConfig, load_portal_config};
use crate::infrastructure::portal_client::PortalClient;
use crate::infrastructure::session_store::FileSessionStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

fn session_store(config: &PortalConfig) -> Arc<dyn SessionStore> {
    match &config.session.token_path {
        Some(path) => {
            tracing::info!("Persisting session token in {}", path.display());
            Arc::new(FileSessionStore::new(path.clone()))
        }
        None => Arc::new(MemorySessionStore::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("franchise_portal=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_portal_config()?;

    // Backend client and session (infrastructure layer)
    let api = Arc::new(PortalClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?);
    let session = session_store(&config);

    // Create services (application layer)
    let state = Arc::new(AppState {
        auth_service: AuthService::new(api.clone(), session.clone()),
        dashboard_service: DashboardService::new(api, session, config.watermark.enabled),
        page_service: PageService::new(),
    });

    // Start server (presentation layer)
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting franchise portal on {} (backend {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
