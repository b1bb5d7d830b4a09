use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dinta::adapters::http::{app_router, AnalysisAppState};
use dinta::adapters::{OrchestrateClient, OrchestrateClientConfig};
use dinta::application::handlers::AnalyzeProblemHandler;
use dinta::config::{AppConfig, ServerConfig};
use dinta::ports::WorkflowService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let workflow: Option<Arc<dyn WorkflowService>> =
        match OrchestrateClientConfig::from_settings(&config.orchestrate) {
            Some(client_config) => {
                tracing::info!(url = %client_config.url, "Workflow service enabled");
                let client = OrchestrateClient::new(client_config)?;
                Some(Arc::new(client) as Arc<dyn WorkflowService>)
            }
            None => {
                tracing::warn!("Workflow service not configured, answering locally");
                None
            }
        };

    let analyze = Arc::new(AnalyzeProblemHandler::from_config(&config.analysis));
    let state = AnalysisAppState::new(analyze, workflow);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable text elsewhere.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_filter()));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
