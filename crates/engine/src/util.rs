//! Internal helpers for list encoding and id parsing.
//!
//! These utilities are **not** part of the public API. The database stores
//! ingredient lists and `required_for` sets as a single `", "`-joined
//! column; the split/join pair below is the only place that encoding is
//! known, so the rest of the engine works with `Vec<String>`.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Split a stored `", "`-joined list back into its entries.
///
/// Entries are trimmed and blanks dropped, so a hand-edited or legacy value
/// with stray separators still round-trips cleanly.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Join list entries into the stored representation.
pub(crate) fn join_list(entries: &[String]) -> String {
    entries.join(", ")
}

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::InvalidId(format!("invalid {label} id")))
}
