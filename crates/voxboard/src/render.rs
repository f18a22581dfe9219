// ── Presenter ──
//
// Renders the current snapshot into a response body. One code path,
// parameterized by output format; rendering never fails, including on
// the initial empty state before the first successful poll.

use std::fmt::Write as _;

use serde::Deserialize;
use voxboard_core::{Channel, Client, Snapshot};

use crate::fmt::{fmt_bytes, fmt_uptime, yes_no};

/// Output format selected by the `format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Html,
    Text,
}

/// Render the snapshot (or the no-data state) in the requested format.
pub fn render(snapshot: Option<&Snapshot>, format: PageFormat) -> String {
    match format {
        PageFormat::Html => render_html(snapshot),
        PageFormat::Text => render_text(snapshot),
    }
}

// ── HTML ─────────────────────────────────────────────────────────────

fn render_html(snapshot: Option<&Snapshot>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>voxboard</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n",
    );

    match snapshot {
        None => {
            out.push_str("<h1>voxboard</h1>\n<p class=\"empty\">no data yet</p>\n");
        }
        Some(snapshot) => {
            render_header(&mut out, snapshot);
            for channel in &snapshot.channels {
                render_channel(&mut out, channel, snapshot);
            }
            let _ = writeln!(
                out,
                "<footer>updated {}</footer>",
                snapshot.taken_at.format("%a, %d %b %Y %H:%M:%S UTC")
            );
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, snapshot: &Snapshot) {
    match &snapshot.server {
        Some(server) => {
            let _ = writeln!(out, "<h1>{}</h1>", escape_html(&server.name));
            let _ = writeln!(
                out,
                "<p class=\"server-meta\">up {} &middot; {}/{} clients &middot; {}</p>",
                fmt_uptime(server.uptime.as_secs()),
                server.clients_online,
                server.max_clients,
                escape_html(&server.version),
            );
        }
        None => out.push_str("<h1>voxboard</h1>\n"),
    }
}

fn render_channel(out: &mut String, channel: &Channel, snapshot: &Snapshot) {
    let _ = writeln!(
        out,
        "<section class=\"channel\">\n<h2>{}</h2>",
        escape_html(&channel.name)
    );

    let occupants: Vec<&Client> = snapshot.clients_in(channel.id).collect();
    if occupants.is_empty() {
        out.push_str("<p class=\"empty\">nobody likes this channel</p>\n");
    } else {
        out.push_str(
            "<table>\n<tr><th>Nickname</th><th>Platform</th><th>Mic muted</th>\
             <th>Speakers muted</th><th>Idle</th><th>Traffic month (up/down)</th>\
             <th>Traffic total (up/down)</th></tr>\n",
        );
        for client in occupants {
            render_client_row(out, client);
        }
        out.push_str("</table>\n");
    }

    out.push_str("</section>\n");
}

fn render_client_row(out: &mut String, client: &Client) {
    let mut name = escape_html(&client.nickname);
    if let Some(phonetic) = &client.phonetic_nickname {
        let _ = write!(name, " <small>({})</small>", escape_html(phonetic));
    }
    if client.away {
        match &client.away_message {
            Some(msg) => {
                let _ = write!(name, " <em>away: {}</em>", escape_html(msg));
            }
            None => name.push_str(" <em>away</em>"),
        }
    }
    if client.is_recording {
        name.push_str(" <em>recording</em>");
    }

    let _ = writeln!(
        out,
        "<tr><td>{name}</td><td>{platform} {version}</td><td>{mic}</td><td>{speakers}</td>\
         <td>{idle}</td><td>{month_up}/{month_down}</td><td>{total_up}/{total_down}</td></tr>",
        platform = escape_html(&client.platform),
        version = escape_html(&client.version),
        mic = yes_no(client.input_muted),
        speakers = yes_no(client.output_muted),
        idle = fmt_uptime(client.idle.as_secs()),
        month_up = fmt_bytes(client.month_bytes_up),
        month_down = fmt_bytes(client.month_bytes_down),
        total_up = fmt_bytes(client.total_bytes_up),
        total_down = fmt_bytes(client.total_bytes_down),
    );
}

/// Minimal HTML entity escaping for user-supplied strings.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Plain text ───────────────────────────────────────────────────────

fn render_text(snapshot: Option<&Snapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return "no data yet\n".to_owned();
    };

    let mut out = String::with_capacity(1024);
    if let Some(server) = &snapshot.server {
        let _ = writeln!(out, "{}", server.name);
    }
    let _ = writeln!(
        out,
        "updated {}\n",
        snapshot.taken_at.format("%a, %d %b %Y %H:%M:%S UTC")
    );

    for channel in &snapshot.channels {
        let occupants: Vec<&Client> = snapshot
            .clients_in(channel.id)
            .filter(|c| !c.nickname.contains("serveradmin"))
            .collect();

        let _ = writeln!(out, "{} ({})", channel.name, occupants.len());
        for client in occupants {
            let _ = writeln!(
                out,
                "  {} [mic: {}] [speakers: {}]",
                client.nickname,
                if client.input_muted { "muted" } else { "on" },
                if client.output_muted { "muted" } else { "on" },
            );
        }
    }

    out
}
