use std::time::Duration;

use anyhow::Context;
use db::DBService;
use server::{AppState, file_logging, routes};

/// Grace period for releasing store connections after the listener drains.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    // The guard must be held for the lifetime of the application to ensure
    // logs are flushed
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _file_log_guard = file_logging::init_logging(&log_level);

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL is not set; refusing to serve")?;

    // Establish the store connection before accepting any traffic. The
    // connect timeout lives in DBService; failure here is fatal.
    let db = DBService::new(&database_url)
        .await
        .context("failed to connect to the task store")?;

    let app = routes::router(AppState::new(db.clone()));

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;

    tracing::info!("Server running on http://{host}:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-flight requests have drained; release the store within the grace
    // period rather than waiting on stragglers forever.
    if tokio::time::timeout(SHUTDOWN_GRACE, db.pool.close())
        .await
        .is_err()
    {
        tracing::warn!("store connections did not close within the grace period");
    }

    tracing::info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    // Always wait for Ctrl+C
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        // Try to install SIGTERM handler, but don't panic if it fails
        let terminate = async {
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
            } else {
                tracing::error!("Failed to install SIGTERM handler");
                // Fallback: never resolves
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    #[cfg(not(unix))]
    {
        // Only ctrl_c is available, so just await it
        ctrl_c.await;
    }
}
