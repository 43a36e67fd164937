//! World order files.
//!
//! A world keeps its enabled packs in `world_resource_packs.json` and
//! `world_behavior_packs.json`: JSON arrays of `{ "pack_id", "version" }`
//! objects. The array position is the pack's ordinal; nothing else is
//! stored.
//!
//! Loading is forgiving about single entries (a bad entry is logged and
//! skipped) but strict about the file as a whole: a file that is not a JSON
//! array is an error, because the whole active set of that category would
//! be wrong.

pub mod persist;

pub use persist::{PersistReport, persist};

use crate::error::OrderError;
use crate::pack::manifest::parse_version;
use crate::pack::{ManifestRecord, PackId, PackVersion};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// One element of an order file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Pack identity
    pub pack_id: PackId,
    /// Pack version at the time it was enabled
    pub version: PackVersion,
}

impl OrderEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(pack_id: PackId, version: PackVersion) -> Self {
        Self { pack_id, version }
    }
}

impl From<&ManifestRecord> for OrderEntry {
    fn from(record: &ManifestRecord) -> Self {
        Self::new(record.id, record.version.clone())
    }
}

/// Loads an order file, creating it as `[]` when it does not exist.
///
/// # Errors
///
/// Returns [`OrderError::Io`] if the file cannot be read or created and
/// [`OrderError::Parse`] if it is not a JSON array.
pub fn load(path: &Path) -> Result<Vec<OrderEntry>, OrderError> {
    if !path.exists() {
        fs::write(path, "[]").map_err(|source| OrderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Created order file as it was not found");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| OrderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&content).map_err(|reason| {
        tracing::error!(path = %path.display(), "{reason}");
        OrderError::Parse {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    tracing::debug!(path = %path.display(), count = entries.len(), "order file loaded");
    Ok(entries)
}

/// Parses order file text. Whitespace-only text is an empty order.
///
/// # Errors
///
/// Returns the parser message when the text is not a JSON array.
pub fn parse_entries(content: &str) -> Result<Vec<OrderEntry>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Array(items) = root else {
        return Err(format!("expected a JSON array, found {}", json_kind(&root)));
    };

    let entries = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match parse_entry(item) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                tracing::warn!(index, "Skipping order entry: {reason}");
                None
            }
        })
        .collect();

    Ok(entries)
}

/// Reads one `{ "pack_id", "version" }` object.
fn parse_entry(item: &Value) -> Result<OrderEntry, String> {
    let pack_id = item
        .get("pack_id")
        .ok_or("missing pack_id")?
        .as_str()
        .ok_or("pack_id is not a string")?
        .parse::<PackId>()
        .map_err(|e| format!("malformed pack_id: {e}"))?;

    let version = item.get("version").ok_or("missing version")?;
    let version = parse_version(version).map_err(|e| e.to_string())?;

    Ok(OrderEntry::new(pack_id, version))
}

/// Human name of a JSON value's type, for error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Overwrites an order file with `entries`, in order.
///
/// The text is written to a temporary file next to the target and renamed
/// over it, so a failed save leaves the previous file intact.
///
/// # Errors
///
/// Returns [`OrderError::Io`] if writing or replacing the file fails.
pub fn save(path: &Path, entries: &[OrderEntry]) -> Result<(), OrderError> {
    let io_error = |source| OrderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| io_error(std::io::Error::other(e)))?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    temp.write_all(json.as_bytes()).map_err(io_error)?;
    temp.flush().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    tracing::info!(path = %path.display(), count = entries.len(), "order file written");
    Ok(())
}
