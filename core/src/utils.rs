//! Helpers shared by the service crates.

use std::fmt::Debug;

/// Keys shorter than this are hidden completely.
const REDACT_MIN_CHARS: usize = 12;
/// Chars kept visible on each side of a long key.
const REDACT_VISIBLE_CHARS: usize = 3;

/// Debug view of a credential that keeps only its edges.
///
/// Unset or empty values print as `EMPTY`, short ones as `***` and longer
/// ones as `AKI***PLE`, enough to tell two keys apart.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Redact<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Redact(value)
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.0 {
            Some(v) if !v.is_empty() => v,
            _ => return f.write_str("EMPTY"),
        };

        let chars = value.chars().count();
        if chars < REDACT_MIN_CHARS {
            return f.write_str("***");
        }

        let head: String = value.chars().take(REDACT_VISIBLE_CHARS).collect();
        let tail: String = value.chars().skip(chars - REDACT_VISIBLE_CHARS).collect();
        write!(f, "{head}***{tail}")
    }
}
