//! Pack root scanner.
//!
//! Every immediate subdirectory of a pack root is a candidate pack. The
//! candidates are parsed in parallel on the Rayon pool and each parsed
//! record is sent over a channel; the channel is drained only once the
//! parallel loop has returned, so callers never see a partial scan.
//!
//! A candidate that cannot be read is dropped and logged. Nothing a single
//! candidate does can fail the scan.

use super::manifest::{parse_manifest, strip_format_codes};
use super::{ManifestRecord, PackCategory, PackIcon, folder_name};
use crate::{ICON_FILE, MANIFEST_FILE};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use walkdir::WalkDir;

/// Options applied to every scanned record.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Strip `§x` formatting codes from names and descriptions
    pub clean_names: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { clean_names: true }
    }
}

/// Complete scan result for both pack roots.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Every parsed resource pack, sorted by folder path
    pub resource: Vec<ManifestRecord>,
    /// Every parsed behavior pack, sorted by folder path
    pub behavior: Vec<ManifestRecord>,
}

impl Inventory {
    /// Records of one category.
    #[must_use]
    pub fn get(&self, category: PackCategory) -> &[ManifestRecord] {
        match category {
            PackCategory::Resource => &self.resource,
            PackCategory::Behavior => &self.behavior,
        }
    }

    /// Total number of records across both categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resource.len() + self.behavior.len()
    }

    /// Whether no pack was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource.is_empty() && self.behavior.is_empty()
    }
}

/// Scans both pack roots concurrently and waits for both to finish.
#[must_use]
pub fn scan_both(resource_root: &Path, behavior_root: &Path, options: &ScanOptions) -> Inventory {
    let (resource, behavior) = crate::utils::thread_pool::run_in_pool(|| {
        rayon::join(
            || scan(resource_root, options),
            || scan(behavior_root, options),
        )
    });

    tracing::info!(
        resource = resource.len(),
        behavior = behavior.len(),
        "pack folders parsed"
    );

    Inventory { resource, behavior }
}

/// Scans one pack root and returns its records sorted by folder path.
///
/// A missing root is logged and yields no records.
#[must_use]
pub fn scan(pack_root: &Path, options: &ScanOptions) -> Vec<ManifestRecord> {
    if !pack_root.is_dir() {
        tracing::error!(path = %pack_root.display(), "Pack directory not found");
        return Vec::new();
    }

    let candidates = candidate_dirs(pack_root);
    let (tx, rx) = mpsc::channel();

    candidates.par_iter().for_each_with(tx, |tx, dir| {
        if let Some(record) = scan_candidate(dir) {
            // The receiver outlives the loop, so sending cannot fail
            let _ = tx.send(record);
        }
    });

    // Every sender was dropped with the loop; this drains and ends.
    let mut records: Vec<ManifestRecord> = rx.into_iter().collect();
    records.sort_by(|a, b| a.source_path.cmp(&b.source_path));

    if options.clean_names {
        for record in &mut records {
            record.name = strip_format_codes(&record.name);
            record.description = strip_format_codes(&record.description);
        }
    }

    tracing::debug!(
        path = %pack_root.display(),
        candidates = candidates.len(),
        parsed = records.len(),
        "pack root scanned"
    );

    records
}

/// Immediate subdirectories of the pack root.
fn candidate_dirs(pack_root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(pack_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => dirs.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %pack_root.display(), "Failed to read pack folder entry: {e}");
            }
        }
    }

    dirs
}

/// Parses one candidate folder.
///
/// Returns `None` when there is no manifest (silently) or when the
/// manifest cannot be used (with a warning).
fn scan_candidate(dir: &Path) -> Option<ManifestRecord> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        tracing::debug!(path = %dir.display(), "no manifest, skipping folder");
        return None;
    }

    let content = match std::fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                path = %manifest_path.display(),
                "Could not read manifest in '{}': {e}",
                folder_name(dir)
            );
            return None;
        }
    };

    match parse_manifest(dir.to_path_buf(), &content) {
        Ok(mut record) => {
            record.icon = PackIcon::load_or_fallback(&dir.join(ICON_FILE), &record.name);
            Some(record)
        }
        Err(e) => {
            tracing::warn!(
                path = %manifest_path.display(),
                "Invalid manifest file found in '{}', it could not be parsed: {e}",
                folder_name(dir)
            );
            None
        }
    }
}
