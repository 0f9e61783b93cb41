use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum::{Router, serve};
use dotenv::dotenv;
use rmcp::transport::{
    StreamableHttpServerConfig, StreamableHttpService,
    streamable_http_server::session::local::LocalSessionManager,
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod mcp;
use mcp::{
    HrMcpFactory,
    config::{BIND_ADDRESS, LOG_FORMAT, LogFormat, MCP_PATH},
    dataset::Dataset,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing
    let log_format = LOG_FORMAT
        .as_ref()
        .map_err(|e| anyhow!("Failed to load HR_LOG_FORMAT: {e}"))?;
    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".to_string().into()),
    );
    match log_format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }

    let bind_address = BIND_ADDRESS
        .as_ref()
        .map_err(|e| anyhow!("Failed to load HR_BIND_ADDRESS: {e}"))?;
    let mcp_path = MCP_PATH
        .as_ref()
        .map_err(|e| anyhow!("Failed to load HR_MCP_PATH: {e}"))?;

    // Build the dataset once; every session shares it read-only
    let dataset = Arc::new(Dataset::seed()?);
    info!(
        company = %dataset.company().name,
        employees = dataset.employees().len(),
        "Loaded HR dataset"
    );

    // Setting up the Streamable HTTP Service
    info!("Setting up the Streamable HTTP Service for the HR MCP Factory");
    let service = StreamableHttpService::new(
        move || Ok(HrMcpFactory::new(Arc::clone(&dataset))),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    // Starting the server... Setting up the router and TCP listener
    info!("Starting server on {bind_address}{mcp_path}");
    let router = Router::new().nest_service(mcp_path, service);
    let tcp_listener = TcpListener::bind(*bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            eprintln!("failed to install CTRL+C handler: {e}");
        });
    };

    // Finally start the server with graceful shutdown
    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
