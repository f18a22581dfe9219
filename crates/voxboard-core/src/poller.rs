// ── Background poller ──
//
// Runs the snapshot builder on a fixed interval until cancelled. A
// failed cycle is logged and the previous snapshot stays published; a
// successful cycle replaces it. The sleep is the same length whether
// the cycle was fast or slow, with no jitter and no backoff.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::builder::build_snapshot;
use crate::config::Config;
use crate::snapshot::SnapshotStore;

/// Poll forever, publishing into `store`, until `cancel` fires.
pub async fn run(config: Config, store: Arc<SnapshotStore>, cancel: CancellationToken) {
    info!(
        addr = %config.query_addr(),
        interval_secs = config.poll_interval_secs,
        "poller started"
    );

    loop {
        match build_snapshot(&config).await {
            Ok(snapshot) => {
                debug!(
                    channels = snapshot.channels.len(),
                    clients = snapshot.clients.len(),
                    "poll cycle complete"
                );
                store.publish(snapshot);
            }
            Err(e) => warn!(error = %e, "poll cycle failed, keeping previous snapshot"),
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(config.poll_interval()) => {}
        }
    }

    debug!("poller stopped");
}
