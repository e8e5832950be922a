//! PII-safe log formatting.
//!
//! Emails must never appear verbatim in logs. `Redacted` keeps enough of the
//! value to correlate log lines without reconstructing the original.

use std::fmt;

/// Display wrapper that masks a sensitive value.
///
/// Emails keep the first character of the local part and the full domain
/// (`a***@example.com`); anything else keeps at most the first four
/// characters (`abcd***`).
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        match value.find('@') {
            Some(at) if at > 0 => {
                let local = &value[..at];
                let domain = &value[at..];
                let first = &local[..local.chars().next().map_or(0, char::len_utf8)];
                write!(f, "{first}***{domain}")
            }
            _ => {
                let keep: String = value.chars().take(4).collect();
                write!(f, "{keep}***")
            }
        }
    }
}
