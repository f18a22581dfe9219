// ServerQuery TCP client
//
// Wraps a `tokio::net::TcpStream` with command serialization, response
// accumulation, and per-call deadlines. One command is in flight at a
// time; the protocol is strictly request/response over a line stream.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time;
use tracing::debug;

use crate::error::Error;
use crate::escape::escape;
use crate::models::{Channel, ClientInfo, OnlineClient, ServerInfo};
use crate::wire::{ErrorLine, Pairs};

/// Client for a server's ServerQuery admin endpoint.
///
/// Every read and write is bounded by the deadline given at connect
/// time; an expired deadline surfaces as [`Error::Timeout`]. Dropping
/// the client closes the socket; [`quit`](Self::quit) disconnects
/// politely first.
#[derive(Debug)]
pub struct QueryClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    timeout: Duration,
}

impl QueryClient {
    /// Open a connection and consume the protocol greeting.
    ///
    /// The server announces itself with a `TS3` magic line followed by
    /// a welcome banner; anything else is not a ServerQuery endpoint.
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self, Error> {
        let stream = time::timeout(timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::Timeout {
                timeout_secs: timeout.as_secs(),
            })??;

        let (read_half, write_half) = stream.into_split();
        let mut client = Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            timeout,
        };

        let magic = client.read_line().await?;
        if magic != "TS3" {
            return Err(Error::Protocol {
                message: format!("unexpected greeting: {magic:?}"),
            });
        }
        let _banner = client.read_line().await?;

        debug!(addr, "connected to query endpoint");
        Ok(client)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select the virtual server to operate on: `use sid=<id>`
    pub async fn use_server(&mut self, sid: u64) -> Result<(), Error> {
        self.exec(&format!("use sid={sid}")).await.map(|_| ())
    }

    /// Authenticate: `login client_login_name=<u> client_login_password=<p>`
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), Error> {
        self.exec(&format!(
            "login client_login_name={} client_login_password={}",
            escape(username),
            escape(password)
        ))
        .await
        .map(|_| ())
    }

    /// Fetch server-wide metadata: `serverinfo`
    pub async fn server_info(&mut self) -> Result<ServerInfo, Error> {
        let entries = self.exec("serverinfo").await?;
        let first = entries.first().ok_or_else(|| Error::Protocol {
            message: "serverinfo returned no data".into(),
        })?;
        Ok(ServerInfo::from_pairs(first))
    }

    /// List connected clients in summary form: `clientlist -away`
    pub async fn client_list(&mut self) -> Result<Vec<OnlineClient>, Error> {
        self.exec("clientlist -away")
            .await?
            .iter()
            .map(OnlineClient::from_pairs)
            .collect()
    }

    /// List channels: `channellist`
    pub async fn channel_list(&mut self) -> Result<Vec<Channel>, Error> {
        self.exec("channellist")
            .await?
            .iter()
            .map(Channel::from_pairs)
            .collect()
    }

    /// Fetch full detail for one client: `clientinfo clid=<id>`
    pub async fn client_info(&mut self, clid: i64) -> Result<ClientInfo, Error> {
        let entries = self.exec(&format!("clientinfo clid={clid}")).await?;
        let first = entries.first().ok_or_else(|| Error::Protocol {
            message: format!("clientinfo returned no data for clid {clid}"),
        })?;
        Ok(ClientInfo::from_pairs(clid, first))
    }

    /// Disconnect politely. Errors are ignored: the socket closes when
    /// the client drops regardless of whether `quit` reached the server.
    pub async fn quit(mut self) {
        let _ = time::timeout(self.timeout, self.writer.write_all(b"quit\n")).await;
        debug!("disconnected from query endpoint");
    }

    // ── Wire mechanics ───────────────────────────────────────────────

    /// Send one command and accumulate data entries until the
    /// terminator line. A non-zero error id becomes [`Error::Query`].
    async fn exec(&mut self, command: &str) -> Result<Vec<Pairs>, Error> {
        // Log only the command word: login lines carry credentials.
        let word = command.split(' ').next().unwrap_or(command);
        debug!(command = word, "sending query command");

        let line = format!("{command}\n");
        time::timeout(self.timeout, self.writer.write_all(line.as_bytes()))
            .await
            .map_err(|_| Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            })??;

        let mut entries = Vec::new();
        loop {
            let line = self.read_line().await?;
            if line.is_empty() {
                continue;
            }
            if let Some(terminator) = ErrorLine::parse(&line) {
                if terminator.is_ok() {
                    return Ok(entries);
                }
                return Err(Error::Query {
                    id: terminator.id,
                    msg: terminator.msg,
                });
            }
            entries.extend(Pairs::parse_list(&line));
        }
    }

    /// Read one line within the deadline, with the trailing `\r\n`
    /// stripped. A zero-byte read means the server hung up.
    async fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        let n = time::timeout(self.timeout, self.reader.read_line(&mut line))
            .await
            .map_err(|_| Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            })??;
        if n == 0 {
            return Err(Error::ConnectionClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
