// voxboard-core: Polling and snapshot layer between voxboard-query and the web frontend.

pub mod builder;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod poller;
pub mod snapshot;

// ── Primary re-exports ──────────────────────────────────────────────
pub use builder::build_snapshot;
pub use config::{Config, ConfigError};
pub use error::CoreError;
pub use model::{Channel, Client, ServerStatus};
pub use snapshot::{Snapshot, SnapshotStore};
