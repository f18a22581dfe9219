// ── Cycle-level error types ──
//
// A poll cycle fails as a unit; the variant names which step gave out.
// Wire-level detail stays attached as the error source.

use thiserror::Error;

/// Error from one poll cycle.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot connect to {addr}: {source}")]
    ConnectionFailed {
        addr: String,
        #[source]
        source: voxboard_query::Error,
    },

    #[error("authentication failed: {source}")]
    AuthenticationFailed {
        #[source]
        source: voxboard_query::Error,
    },

    #[error("query command '{command}' failed: {source}")]
    CommandFailed {
        command: &'static str,
        #[source]
        source: voxboard_query::Error,
    },
}
