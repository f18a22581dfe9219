use thiserror::Error;

/// Top-level error type for the `voxboard-query` crate.
///
/// Covers every failure mode of a ServerQuery exchange: transport,
/// deadlines, server-side command rejection, and malformed responses.
/// `voxboard-core` maps these into cycle-level diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Socket-level error (connection refused, reset, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A read or write did not complete within the configured deadline.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The server closed the connection mid-exchange.
    #[error("connection closed by server")]
    ConnectionClosed,

    // ── Protocol ────────────────────────────────────────────────────
    /// The server rejected a command (parsed from the `error id= msg=`
    /// terminator line). Id 0 is success and never surfaces here.
    #[error("server rejected command (error id {id}): {msg}")]
    Query { id: i64, msg: String },

    /// The response did not match the protocol's expected shape.
    #[error("protocol error: {message}")]
    Protocol { message: String },
}
