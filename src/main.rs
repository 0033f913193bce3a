//! Last Modified - demo server
//!
//! Serves a couple of endpoints behind the freshness and validation stages.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use last_modified::{api::create_router, CacheHeaders, Config, FileMtimeResolver, FixedResolver};

/// Main entry point for the demo server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache header stages (fails without a resolver)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "last_modified=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Last Modified demo server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: validation={}, freshness={}, max_age={}s, shared_max_age={}s, port={}",
        !config.disable_validation,
        !config.disable_freshness,
        config.max_age,
        config.shared_max_age,
        config.server_port
    );

    let mut builder = CacheHeaders::builder(config.clone());
    if let Some(path) = &config.last_modified_file {
        info!("Last-Modified follows the mtime of {}", path.display());
        builder = builder.resolver(FileMtimeResolver::new(path));
    } else if let Some(secs) = config.last_modified_timestamp {
        info!("Last-Modified fixed at timestamp {}", secs);
        builder = builder.resolver(FixedResolver::from_timestamp(secs));
    }
    let cache_headers = builder
        .build()
        .context("set LAST_MODIFIED_FILE or LAST_MODIFIED_TIMESTAMP, or DISABLE_LAST_MODIFIED=1")?;

    let app = create_router(&cache_headers);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
