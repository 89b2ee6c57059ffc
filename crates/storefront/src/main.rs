//! Optimistics Storefront server.
//!
//! Serves the shop on `STOREFRONT_HOST:STOREFRONT_PORT` and keeps the
//! session, cart and wishlist snapshots under `STOREFRONT_DATA_DIR`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::borrow::Cow;
use std::sync::Arc;

use optimistics_storefront::config::{ConfigError, StorefrontConfig};
use optimistics_storefront::state::AppState;
use optimistics_storefront::storage::{FileStorage, StorageError};
use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "optimistics_storefront=info,tower_http=debug";

/// Reasons the server fails to come up or stops unexpectedly.
#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot storage: {0}")]
    Storage(#[from] StorageError),

    #[error("listener on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server: {0}")]
    Serve(std::io::Error),
}

/// Start Sentry (when a DSN is configured) and the tracing subscriber.
///
/// Warnings and errors become Sentry events; info and debug lines become
/// breadcrumbs. The returned guard flushes Sentry when dropped.
fn init_observability(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: config.sentry_environment.clone().map(Cow::Owned),
                sample_rate: config.sentry_sample_rate,
                traces_sample_rate: config.sentry_traces_sample_rate,
                attach_stacktrace: true,
                ..Default::default()
            },
        ))
    });

    let sentry_layer = sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer)
        .init();

    if sentry_guard.is_some() {
        tracing::info!("Sentry reporting enabled");
    }
    sentry_guard
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = StorefrontConfig::from_env()?;
    let _sentry = init_observability(&config);

    let storage = FileStorage::open(&config.data_dir)?;
    tracing::info!(data_dir = %config.data_dir.display(), "Snapshot storage ready");

    let addr = config.socket_addr();
    let app = optimistics_storefront::app(AppState::new(Arc::new(storage)));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(%addr, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Storefront stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
///
/// If a handler cannot be installed the failure is logged and that signal
/// is simply never observed.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Interrupted, draining connections"),
        () = terminate => tracing::info!("Terminated, draining connections"),
    }
}
