use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_mcp::client::NotesClient;
use notes_mcp::config::McpConfig;
use notes_mcp::server::{mcp_router, NotesToolServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_mcp=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = McpConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        host = %config.host,
        port = config.port,
        path = %config.path,
        "Loaded tool server configuration",
    );

    let client = NotesClient::new(
        config.api_url.clone(),
        Duration::from_secs(config.tool_http_timeout_secs),
    )
    .context("Failed to build HTTP client")?;
    let server = NotesToolServer::new(client);

    // --- Start server ---
    let ct = CancellationToken::new();
    let app = mcp_router(server, &config.path, &ct);

    let addr = SocketAddr::new(
        config.host.parse().context("Invalid MCP_HOST address")?,
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, path = %config.path, "Starting tool server");

    let shutdown = ct.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(ct.cancelled_owned())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT (Ctrl-C), shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
