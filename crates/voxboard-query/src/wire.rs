// ServerQuery response parsing.
//
// A response is zero or more data lines followed by an
// `error id=<n> msg=<text>` terminator. Data lines hold `key=value`
// tokens separated by spaces; list responses pack multiple entries into
// one line separated by `|`. Values are escaped per `escape.rs`.

use std::collections::HashMap;

use crate::error::Error;
use crate::escape::unescape;

/// One decoded response entry: a map of keys to unescaped values.
///
/// Keys without a `=` (bare flags) are stored with an empty value.
/// Typed getters default missing or malformed values the same way the
/// server omits fields it considers empty.
#[derive(Debug, Clone, Default)]
pub struct Pairs(HashMap<String, String>);

impl Pairs {
    /// Parse a single entry (one `|`-delimited segment of a data line).
    pub fn parse(entry: &str) -> Self {
        let mut map = HashMap::new();
        for token in entry.split(' ') {
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) => map.insert(key.to_owned(), unescape(value)),
                None => map.insert(token.to_owned(), String::new()),
            };
        }
        Self(map)
    }

    /// Split a data line into its `|`-delimited entries and parse each.
    pub fn parse_list(line: &str) -> Vec<Self> {
        line.split('|').map(Self::parse).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// String value, empty if absent.
    pub fn str(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_owned()
    }

    /// Integer value, 0 if absent or malformed.
    pub fn int(&self, key: &str) -> i64 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    /// Boolean flag: the server encodes these as `0`/`1`.
    pub fn flag(&self, key: &str) -> bool {
        self.int(key) != 0
    }

    /// Integer value that must be present and well-formed.
    pub fn require_int(&self, key: &str) -> Result<i64, Error> {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::Protocol {
                message: format!("missing or malformed field '{key}'"),
            })
    }
}

/// The `error id=<n> msg=<text>` terminator line.
#[derive(Debug, Clone)]
pub struct ErrorLine {
    pub id: i64,
    pub msg: String,
}

impl ErrorLine {
    /// Parse a line as a terminator; `None` if it is a data line.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix("error ")?;
        let pairs = Pairs::parse(rest);
        Some(Self {
            id: pairs.int("id"),
            msg: pairs.str("msg"),
        })
    }

    pub fn is_ok(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_tokens() {
        let p = Pairs::parse("cid=5 pid=0 channel_name=Main\\sHall total_clients=3");
        assert_eq!(p.int("cid"), 5);
        assert_eq!(p.str("channel_name"), "Main Hall");
        assert_eq!(p.int("total_clients"), 3);
    }

    #[test]
    fn missing_fields_default() {
        let p = Pairs::parse("clid=1");
        assert_eq!(p.str("client_nickname"), "");
        assert_eq!(p.int("client_talk_power"), 0);
        assert!(!p.flag("client_away"));
    }

    #[test]
    fn bare_flags_are_recorded() {
        let p = Pairs::parse("clid=1 -away");
        assert!(p.get("-away").is_some());
    }

    #[test]
    fn require_int_rejects_absent_field() {
        let p = Pairs::parse("pid=0");
        assert!(p.require_int("cid").is_err());
    }

    #[test]
    fn splits_list_entries_on_pipe() {
        let entries = Pairs::parse_list("clid=1 client_nickname=Ann|clid=2 client_nickname=Bob");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].int("clid"), 1);
        assert_eq!(entries[1].str("client_nickname"), "Bob");
    }

    #[test]
    fn error_line_roundtrip() {
        let ok = ErrorLine::parse("error id=0 msg=ok").unwrap();
        assert!(ok.is_ok());

        let denied = ErrorLine::parse("error id=520 msg=invalid\\sloginname\\sor\\spassword").unwrap();
        assert!(!denied.is_ok());
        assert_eq!(denied.msg, "invalid loginname or password");
    }

    #[test]
    fn data_lines_are_not_error_lines() {
        assert!(ErrorLine::parse("clid=1 client_nickname=error").is_none());
    }
}
