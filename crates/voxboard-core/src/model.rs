// ── Domain model ──
//
// What the dashboard actually renders. Wire models from
// `voxboard-query` never leak past this crate; `convert.rs` maps them
// here.

use std::time::Duration;

/// One channel on the virtual server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub parent_id: i64,
    pub order: i64,
    pub name: String,
    pub client_count: i64,
    pub needed_subscribe_power: i64,
}

/// One connected voice client, in full detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub database_id: i64,
    pub channel_id: i64,
    pub nickname: String,
    pub phonetic_nickname: Option<String>,
    pub platform: String,
    pub version: String,
    pub input_muted: bool,
    pub output_muted: bool,
    pub output_only_muted: bool,
    pub has_input_hardware: bool,
    pub has_output_hardware: bool,
    pub is_recording: bool,
    pub away: bool,
    pub away_message: Option<String>,
    pub talk_power: i64,
    pub idle: Duration,
    pub month_bytes_up: u64,
    pub month_bytes_down: u64,
    pub total_bytes_up: u64,
    pub total_bytes_down: u64,
}

impl Client {
    /// The server's own administrative connections identify themselves
    /// through the platform string and are never shown on the board.
    pub fn is_query_connection(&self) -> bool {
        self.platform.contains("ServerQuery")
    }
}

/// Server-wide metadata shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    pub name: String,
    pub welcome_message: String,
    pub platform: String,
    pub version: String,
    pub uptime: Duration,
    pub clients_online: i64,
    pub max_clients: i64,
}
