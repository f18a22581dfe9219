//! Human-readable formatting helpers for the dashboard.

use bytesize::ByteSize;

/// Boolean flags render as "yes"/"no" on the page.
pub fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

/// Format a byte count into a human-readable string (e.g., "1.2 MB").
pub fn fmt_bytes(bytes: u64) -> String {
    ByteSize(bytes).to_string()
}

/// Format seconds into a compact human duration (e.g., "47d", "4h 23m", "12m").
pub fn fmt_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{days}d")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
