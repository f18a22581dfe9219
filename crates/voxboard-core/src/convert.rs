// ── Wire → domain conversions ──

use std::time::Duration;

use crate::model::{Channel, Client, ServerStatus};

/// Wire integers are signed; counters and durations clamp at zero.
fn as_u64(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl From<voxboard_query::Channel> for Channel {
    fn from(ch: voxboard_query::Channel) -> Self {
        Self {
            id: ch.id,
            parent_id: ch.parent_id,
            order: ch.order,
            name: ch.name,
            client_count: ch.total_clients,
            needed_subscribe_power: ch.needed_subscribe_power,
        }
    }
}

impl From<voxboard_query::ClientInfo> for Client {
    fn from(info: voxboard_query::ClientInfo) -> Self {
        Self {
            id: info.id,
            database_id: info.database_id,
            channel_id: info.channel_id,
            nickname: info.nickname,
            phonetic_nickname: non_empty(info.nickname_phonetic),
            platform: info.platform,
            version: info.version,
            input_muted: info.input_muted,
            output_muted: info.output_muted,
            output_only_muted: info.outputonly_muted,
            has_input_hardware: info.input_hardware,
            has_output_hardware: info.output_hardware,
            is_recording: info.is_recording,
            away: info.away,
            away_message: non_empty(info.away_message),
            talk_power: info.talk_power,
            idle: Duration::from_millis(as_u64(info.idle_time_ms)),
            month_bytes_up: as_u64(info.month_bytes_uploaded),
            month_bytes_down: as_u64(info.month_bytes_downloaded),
            total_bytes_up: as_u64(info.total_bytes_uploaded),
            total_bytes_down: as_u64(info.total_bytes_downloaded),
        }
    }
}

impl From<voxboard_query::ServerInfo> for ServerStatus {
    fn from(info: voxboard_query::ServerInfo) -> Self {
        Self {
            name: info.name,
            welcome_message: info.welcome_message,
            platform: info.platform,
            version: info.version,
            uptime: Duration::from_secs(as_u64(info.uptime_secs)),
            clients_online: info.clients_online,
            max_clients: info.max_clients,
        }
    }
}
