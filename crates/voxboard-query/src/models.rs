// ServerQuery response models.
//
// Decoded from `key=value` pair entries. Identity fields (`cid`,
// `clid`) are required; everything else defaults liberally because the
// server omits fields it considers empty and field sets drift across
// server versions.

use crate::error::Error;
use crate::wire::Pairs;

/// One channel from `channellist`.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: i64,
    pub parent_id: i64,
    pub order: i64,
    pub name: String,
    pub total_clients: i64,
    pub needed_subscribe_power: i64,
}

impl Channel {
    pub(crate) fn from_pairs(pairs: &Pairs) -> Result<Self, Error> {
        Ok(Self {
            id: pairs.require_int("cid")?,
            parent_id: pairs.int("pid"),
            order: pairs.int("channel_order"),
            name: pairs.str("channel_name"),
            total_clients: pairs.int("total_clients"),
            needed_subscribe_power: pairs.int("channel_needed_subscribe_power"),
        })
    }
}

/// One connected client from `clientlist -away` (summary form).
#[derive(Debug, Clone)]
pub struct OnlineClient {
    pub id: i64,
    pub database_id: i64,
    pub nickname: String,
    /// 0 = voice client, 1 = query connection.
    pub client_type: i64,
    pub away: bool,
    pub away_message: String,
}

impl OnlineClient {
    pub(crate) fn from_pairs(pairs: &Pairs) -> Result<Self, Error> {
        Ok(Self {
            id: pairs.require_int("clid")?,
            database_id: pairs.int("client_database_id"),
            nickname: pairs.str("client_nickname"),
            client_type: pairs.int("client_type"),
            away: pairs.flag("client_away"),
            away_message: pairs.str("client_away_message"),
        })
    }
}

/// Full per-client detail from `clientinfo clid=<n>`.
///
/// The response does not echo `clid` back, so the id is carried over
/// from the request.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub id: i64,
    pub channel_id: i64,
    pub database_id: i64,
    pub nickname: String,
    pub nickname_phonetic: String,
    /// 0 = voice client, 1 = query connection.
    pub client_type: i64,
    pub version: String,
    pub platform: String,
    pub input_muted: bool,
    pub output_muted: bool,
    pub outputonly_muted: bool,
    pub input_hardware: bool,
    pub output_hardware: bool,
    /// Idle time in milliseconds.
    pub idle_time_ms: i64,
    pub away: bool,
    pub away_message: String,
    pub talk_power: i64,
    pub is_recording: bool,
    pub month_bytes_uploaded: i64,
    pub month_bytes_downloaded: i64,
    pub total_bytes_uploaded: i64,
    pub total_bytes_downloaded: i64,
}

impl ClientInfo {
    pub(crate) fn from_pairs(id: i64, pairs: &Pairs) -> Self {
        Self {
            id,
            channel_id: pairs.int("cid"),
            database_id: pairs.int("client_database_id"),
            nickname: pairs.str("client_nickname"),
            nickname_phonetic: pairs.str("client_nickname_phonetic"),
            client_type: pairs.int("client_type"),
            version: pairs.str("client_version"),
            platform: pairs.str("client_platform"),
            input_muted: pairs.flag("client_input_muted"),
            output_muted: pairs.flag("client_output_muted"),
            outputonly_muted: pairs.flag("client_outputonly_muted"),
            input_hardware: pairs.flag("client_input_hardware"),
            output_hardware: pairs.flag("client_output_hardware"),
            idle_time_ms: pairs.int("client_idle_time"),
            away: pairs.flag("client_away"),
            away_message: pairs.str("client_away_message"),
            talk_power: pairs.int("client_talk_power"),
            is_recording: pairs.flag("client_is_recording"),
            month_bytes_uploaded: pairs.int("client_month_bytes_uploaded"),
            month_bytes_downloaded: pairs.int("client_month_bytes_downloaded"),
            total_bytes_uploaded: pairs.int("client_total_bytes_uploaded"),
            total_bytes_downloaded: pairs.int("client_total_bytes_downloaded"),
        }
    }
}

/// Server-wide metadata from `serverinfo`.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub welcome_message: String,
    pub platform: String,
    pub version: String,
    pub uptime_secs: i64,
    pub clients_online: i64,
    pub max_clients: i64,
}

impl ServerInfo {
    pub(crate) fn from_pairs(pairs: &Pairs) -> Self {
        Self {
            name: pairs.str("virtualserver_name"),
            welcome_message: pairs.str("virtualserver_welcomemessage"),
            platform: pairs.str("virtualserver_platform"),
            version: pairs.str("virtualserver_version"),
            uptime_secs: pairs.int("virtualserver_uptime"),
            clients_online: pairs.int("virtualserver_clientsonline"),
            max_clients: pairs.int("virtualserver_maxclients"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn channel_from_pairs() {
        let p = Pairs::parse(
            "cid=2 pid=0 channel_order=1 channel_name=AFK\\sLounge \
             total_clients=0 channel_needed_subscribe_power=0",
        );
        let ch = Channel::from_pairs(&p).unwrap();
        assert_eq!(ch.id, 2);
        assert_eq!(ch.name, "AFK Lounge");
        assert_eq!(ch.total_clients, 0);
    }

    #[test]
    fn channel_requires_cid() {
        let p = Pairs::parse("pid=0 channel_name=Broken");
        assert!(Channel::from_pairs(&p).is_err());
    }

    #[test]
    fn client_info_defaults_missing_fields() {
        let p = Pairs::parse("cid=1 client_nickname=Ann client_input_muted=1");
        let info = ClientInfo::from_pairs(7, &p);
        assert_eq!(info.id, 7);
        assert_eq!(info.channel_id, 1);
        assert!(info.input_muted);
        assert!(!info.output_muted);
        assert_eq!(info.platform, "");
        assert_eq!(info.total_bytes_downloaded, 0);
    }

    #[test]
    fn server_info_from_pairs() {
        let p = Pairs::parse(
            "virtualserver_name=Vox\\sHQ virtualserver_uptime=86500 \
             virtualserver_clientsonline=4 virtualserver_maxclients=32",
        );
        let info = ServerInfo::from_pairs(&p);
        assert_eq!(info.name, "Vox HQ");
        assert_eq!(info.uptime_secs, 86500);
        assert_eq!(info.max_clients, 32);
    }
}
