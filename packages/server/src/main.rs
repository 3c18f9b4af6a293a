use anyhow::Context;
use matrix_wellknown::{AppState, ServerConfig, create_router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix_wellknown=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Discovery values are looked up per request, never cached at startup.
    let app = create_router(AppState::from_env());

    info!("Starting a server to serve .well-known files at {}", config.bind_address);
    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to run axum server")?;

    info!("Well-known server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal, stopping server...");
}
