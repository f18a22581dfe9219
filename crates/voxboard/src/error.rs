//! Startup error types with miette diagnostics.
//!
//! Poll-cycle errors never reach this type; they are logged and
//! suppressed inside the poller. Only failures that prevent the
//! process from starting are reported here.

use miette::Diagnostic;
use thiserror::Error;

use voxboard_core::ConfigError;

#[derive(Debug, Error, Diagnostic)]
pub enum AppError {
    #[error("configuration error")]
    #[diagnostic(
        code(voxboard::config),
        help(
            "voxboard is configured entirely from VOXBOARD_* environment variables.\n\
             Required: VOXBOARD_HOST, VOXBOARD_PORT, VOXBOARD_USERNAME,\n\
             VOXBOARD_PASSWORD, VOXBOARD_SERVER_ID.\n\
             Optional: VOXBOARD_LISTEN_ADDR, VOXBOARD_POLL_INTERVAL_SECS,\n\
             VOXBOARD_QUERY_TIMEOUT_SECS."
        )
    )]
    Config(#[from] ConfigError),

    #[error("cannot listen on {addr}")]
    #[diagnostic(
        code(voxboard::bind),
        help("Another process may already be bound to this address.\n\
              Override with VOXBOARD_LISTEN_ADDR.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error")]
    #[diagnostic(code(voxboard::serve))]
    Serve(#[source] std::io::Error),
}
