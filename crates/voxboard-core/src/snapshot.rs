// ── Snapshot and its publication slot ──
//
// One immutable capture per successful poll cycle, published by
// reference replacement. Readers see either the previous or the next
// snapshot, never a partial one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{Channel, Client, ServerStatus};

/// An immutable, timestamped capture of channel and client state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub server: Option<ServerStatus>,
    pub channels: Vec<Channel>,
    pub clients: Vec<Client>,
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Occupants of one channel, in published (nickname) order.
    pub fn clients_in(&self, channel_id: i64) -> impl Iterator<Item = &Client> {
        self.clients
            .iter()
            .filter(move |c| c.channel_id == channel_id)
    }
}

/// Shared slot holding the most recently published snapshot.
///
/// `None` until the first successful poll cycle. Owned explicitly and
/// passed as `Arc` to both the poller and the HTTP state; publication
/// is a single reference replacement inside the watch channel.
pub struct SnapshotStore {
    slot: watch::Sender<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot }
    }

    /// Atomically replace the published snapshot.
    pub fn publish(&self, snapshot: Snapshot) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.slot.send_modify(|current| *current = Some(Arc::new(snapshot)));
    }

    /// The most recently published snapshot (cheap `Arc` clone).
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot.borrow().clone()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snapshot_with_client_count(n: usize) -> Snapshot {
        let clients = (0..n)
            .map(|i| Client {
                id: i as i64,
                database_id: 0,
                channel_id: 1,
                nickname: format!("client-{i}"),
                phonetic_nickname: None,
                platform: "Linux".into(),
                version: String::new(),
                input_muted: false,
                output_muted: false,
                output_only_muted: false,
                has_input_hardware: true,
                has_output_hardware: true,
                is_recording: false,
                away: false,
                away_message: None,
                talk_power: 0,
                idle: std::time::Duration::ZERO,
                month_bytes_up: 0,
                month_bytes_down: 0,
                total_bytes_up: 0,
                total_bytes_down: 0,
            })
            .collect();
        Snapshot {
            server: None,
            channels: Vec::new(),
            clients,
            taken_at: Utc::now(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = SnapshotStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn publish_replaces_whole_snapshot() {
        let store = SnapshotStore::new();

        store.publish(snapshot_with_client_count(1));
        let first = store.current().unwrap();
        assert_eq!(first.clients.len(), 1);

        store.publish(snapshot_with_client_count(3));
        let second = store.current().unwrap();
        assert_eq!(second.clients.len(), 3);

        // A reader holding the old Arc still sees the old capture.
        assert_eq!(first.clients.len(), 1);
    }

    #[test]
    fn clients_in_filters_by_channel() {
        let mut snapshot = snapshot_with_client_count(3);
        snapshot.clients[2].channel_id = 9;

        assert_eq!(snapshot.clients_in(1).count(), 2);
        assert_eq!(snapshot.clients_in(9).count(), 1);
        assert_eq!(snapshot.clients_in(42).count(), 0);
    }
}
