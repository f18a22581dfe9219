// ── Snapshot builder ──
//
// One poll cycle: connect, select server, authenticate, fetch, filter,
// sort, timestamp. Any step failure aborts the whole cycle; nothing
// partial is ever returned. The connection is closed on every exit
// path.

use chrono::Utc;
use secrecy::ExposeSecret;
use voxboard_query::QueryClient;

use crate::config::Config;
use crate::error::CoreError;
use crate::model::{Channel, Client, ServerStatus};
use crate::snapshot::Snapshot;

/// Run one full poll cycle against the configured server.
pub async fn build_snapshot(config: &Config) -> Result<Snapshot, CoreError> {
    let addr = config.query_addr();
    let mut client = QueryClient::connect(&addr, config.query_timeout())
        .await
        .map_err(|source| CoreError::ConnectionFailed { addr, source })?;

    let result = fetch(&mut client, config).await;
    client.quit().await;
    result
}

async fn fetch(client: &mut QueryClient, config: &Config) -> Result<Snapshot, CoreError> {
    client
        .use_server(config.server_id)
        .await
        .map_err(step("use"))?;

    client
        .login(&config.username, config.password.expose_secret())
        .await
        .map_err(|source| CoreError::AuthenticationFailed { source })?;

    let server = client.server_info().await.map_err(step("serverinfo"))?;

    // An empty client list is a legitimate state, not a failure: the
    // cycle proceeds and publishes populated channels with no clients.
    let summaries = client.client_list().await.map_err(step("clientlist"))?;

    let channels = client.channel_list().await.map_err(step("channellist"))?;

    let mut details = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        let info = client
            .client_info(summary.id)
            .await
            .map_err(step("clientinfo"))?;
        details.push(Client::from(info));
    }

    Ok(assemble(
        Some(ServerStatus::from(server)),
        channels.into_iter().map(Channel::from).collect(),
        details,
    ))
}

fn step(command: &'static str) -> impl FnOnce(voxboard_query::Error) -> CoreError {
    move |source| CoreError::CommandFailed { command, source }
}

/// Assemble the final snapshot: drop the server's own query
/// connections, order clients by nickname (ascending, ordinal), stamp.
pub fn assemble(
    server: Option<ServerStatus>,
    channels: Vec<Channel>,
    clients: Vec<Client>,
) -> Snapshot {
    let mut clients: Vec<Client> = clients
        .into_iter()
        .filter(|c| !c.is_query_connection())
        .collect();
    clients.sort_by(|a, b| a.nickname.cmp(&b.nickname));

    Snapshot {
        server,
        channels,
        clients,
        taken_at: Utc::now(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn client(nickname: &str, channel_id: i64, platform: &str) -> Client {
        Client {
            id: 0,
            database_id: 0,
            channel_id,
            nickname: nickname.into(),
            phonetic_nickname: None,
            platform: platform.into(),
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
            idle: Duration::ZERO,
            month_bytes_up: 0,
            month_bytes_down: 0,
            total_bytes_up: 0,
            total_bytes_down: 0,
        }
    }

    #[test]
    fn sorts_clients_by_nickname_ordinal() {
        let snapshot = assemble(
            None,
            Vec::new(),
            vec![
                client("zoe", 1, "Linux"),
                client("Ann", 1, "Windows"),
                client("Bob", 2, "macOS"),
            ],
        );

        let names: Vec<&str> = snapshot.clients.iter().map(|c| c.nickname.as_str()).collect();
        // Ordinal comparison: uppercase sorts before lowercase.
        assert_eq!(names, vec!["Ann", "Bob", "zoe"]);
    }

    #[test]
    fn drops_query_connections_by_platform() {
        let snapshot = assemble(
            None,
            Vec::new(),
            vec![
                client("watcher", 1, "ServerQuery"),
                client("Ann", 1, "Windows"),
            ],
        );

        assert_eq!(snapshot.clients.len(), 1);
        assert_eq!(snapshot.clients[0].nickname, "Ann");
    }

    #[test]
    fn empty_client_list_is_a_valid_snapshot() {
        let channels = vec![Channel {
            id: 1,
            parent_id: 0,
            order: 0,
            name: "Lobby".into(),
            client_count: 0,
            needed_subscribe_power: 0,
        }];

        let snapshot = assemble(None, channels, Vec::new());
        assert_eq!(snapshot.channels.len(), 1);
        assert!(snapshot.clients.is_empty());
    }
}
