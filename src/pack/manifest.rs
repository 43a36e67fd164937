//! `manifest.json` parsing.
//!
//! Only the header and the first module's type are read. Every header field
//! is optional and falls back to a default; the manifest is rejected only
//! when it is not a JSON object, has no `header`, or declares a version that
//! cannot be read.

use super::{ManifestRecord, NO_DESCRIPTION, PackId, PackKind, PackVersion, UNKNOWN_NAME};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Bedrock formatting codes (`§` followed by one character).
static FORMAT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new("§.").expect("valid regex"));

/// Why a manifest was skipped.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Not valid JSON, or not an object
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No `header` object
    #[error("manifest has no header")]
    MissingHeader,

    /// `header.version` is neither an integer array nor a dotted string
    #[error("unreadable version: {0}")]
    BadVersion(String),
}

/// Top level of `manifest.json`.
#[derive(Debug, Deserialize)]
struct RawManifest {
    /// Pack header
    header: Option<RawHeader>,
    /// Module declarations
    modules: Option<Vec<RawModule>>,
}

/// The `header` object. Values stay loosely typed so a wrong type on one
/// field only defaults that field.
#[derive(Debug, Deserialize)]
struct RawHeader {
    /// Display name
    name: Option<Value>,
    /// Display description
    description: Option<Value>,
    /// Pack uuid
    uuid: Option<Value>,
    /// Version array or string
    version: Option<Value>,
}

/// One entry of `modules`.
#[derive(Debug, Deserialize)]
struct RawModule {
    /// Module type, e.g. `resources`, `data`, `script`
    #[serde(rename = "type")]
    module_type: Option<Value>,
}

/// Parses manifest text into a record for the pack at `source_path`.
///
/// The record gets the fallback icon; the scanner loads the real one.
///
/// # Errors
///
/// Returns a [`ManifestError`] when the manifest must be skipped.
pub fn parse_manifest(source_path: PathBuf, content: &str) -> Result<ManifestRecord, ManifestError> {
    let raw: RawManifest = serde_json::from_str(content)?;
    let header = raw.header.ok_or(ManifestError::MissingHeader)?;

    let id = header
        .uuid
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<PackId>().ok())
        .unwrap_or(PackId::NIL);

    let version = match &header.version {
        None | Some(Value::Null) => PackVersion::default(),
        Some(value) => parse_version(value)?,
    };

    let mut record = ManifestRecord::new(source_path, id, version);
    record.name = string_or(header.name.as_ref(), UNKNOWN_NAME);
    record.description = string_or(header.description.as_ref(), NO_DESCRIPTION);
    record.kind = raw
        .modules
        .as_deref()
        .and_then(<[RawModule]>::first)
        .and_then(|m| m.module_type.as_ref())
        .and_then(Value::as_str)
        .map(PackKind::from_module_type);

    Ok(record)
}

/// Reads a version from an integer array (`[1, 0, 0]`) or a dotted string
/// (`"1.0.0"`).
///
/// # Errors
///
/// Returns [`ManifestError::BadVersion`] for any other shape or for
/// negative or oversized components.
pub fn parse_version(value: &Value) -> Result<PackVersion, ManifestError> {
    match value {
        Value::Array(parts) => parts
            .iter()
            .map(|part| {
                part.as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| ManifestError::BadVersion(value.to_string()))
            })
            .collect::<Result<Vec<u32>, _>>()
            .map(PackVersion),
        Value::String(s) => s
            .parse::<PackVersion>()
            .map_err(|_| ManifestError::BadVersion(s.clone())),
        other => Err(ManifestError::BadVersion(other.to_string())),
    }
}

/// Removes `§x` formatting codes from a display string.
#[must_use]
pub fn strip_format_codes(text: &str) -> String {
    FORMAT_CODE.replace_all(text, "").into_owned()
}

/// String value of a field, or the default when missing or not a string.
fn string_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .map_or_else(|| default.to_string(), str::to_string)
}
