//! Parsing of the cookie header string.
//!
//! The header is the platform's `name=value` pairs joined by `"; "`. Chunks
//! are split on the first `=`; a chunk without one is a name with an empty
//! value. Empty chunks are ignored.

use crate::base::config::ReadOrder;
use crate::cookies::directive;

pub const SEPARATOR: &str = "; ";

/// A single `name=value` pair taken from the header string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieEntry {
    pub name: String,
    /// Raw value, as stored.
    pub value: String,
}

impl CookieEntry {
    pub fn decoded_value(&self) -> String {
        directive::decode_value(&self.value)
    }
}

fn split_chunk(chunk: &str) -> (&str, &str) {
    match chunk.find('=') {
        Some(eq) => (&chunk[..eq], &chunk[eq + 1..]),
        None => (chunk, ""),
    }
}

/// Iterate over `(name, value)` pairs in order of appearance.
pub fn pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(SEPARATOR)
        .filter(|chunk| !chunk.is_empty())
        .map(split_chunk)
}

pub fn parse(raw: &str) -> Vec<CookieEntry> {
    pairs(raw)
        .map(|(name, value)| CookieEntry {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Every raw value stored under `key`.
pub fn values_for(raw: &str, key: &str, order: ReadOrder) -> Vec<String> {
    let mut values: Vec<String> = pairs(raw)
        .filter(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
        .collect();

    if order == ReadOrder::Reversed {
        values.reverse();
    }

    values
}
