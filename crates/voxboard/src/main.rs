mod error;
mod fmt;
mod http;
mod render;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use voxboard_core::{Config, SnapshotStore, poller};

use crate::error::AppError;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let store = Arc::new(SnapshotStore::new());
    let cancel = CancellationToken::new();

    let poller_handle = tokio::spawn(poller::run(
        config.clone(),
        Arc::clone(&store),
        cancel.clone(),
    ));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;
    info!(addr = %config.listen_addr, "dashboard listening");

    let shutdown = {
        let cancel = cancel.clone();
        async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
            cancel.cancel();
        }
    };

    let result = axum::serve(listener, http::router(store))
        .with_graceful_shutdown(shutdown)
        .await;

    // Stop the poller on any exit path, then wait for it to drain.
    cancel.cancel();
    let _ = poller_handle.await;

    result.map_err(AppError::Serve)
}
