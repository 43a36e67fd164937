//! Writing active pack lists back to the world.

use super::{OrderEntry, save};
use crate::error::{OrderError, PersistError};
use crate::pack::{ManifestRecord, PackCategory};
use std::path::Path;

/// Outcome of writing both order files.
///
/// Each category is written independently; one failing does not undo the
/// other.
#[derive(Debug)]
pub struct PersistReport {
    /// Result of writing `world_resource_packs.json`
    pub resource: Result<(), OrderError>,
    /// Result of writing `world_behavior_packs.json`
    pub behavior: Result<(), OrderError>,
}

impl PersistReport {
    /// Whether both files were written.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.resource.is_ok() && self.behavior.is_ok()
    }

    /// Collapses the report into one result.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] listing every file that failed.
    pub fn into_result(self) -> Result<(), PersistError> {
        let failures: Vec<OrderError> = [self.resource, self.behavior]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PersistError { failures })
        }
    }
}

/// Projects a list to order entries, keeping its order.
#[must_use]
pub fn to_entries(active: &[ManifestRecord]) -> Vec<OrderEntry> {
    active.iter().map(OrderEntry::from).collect()
}

/// Writes both active lists to the world's order files.
pub fn persist(
    world_dir: &Path,
    resource_active: &[ManifestRecord],
    behavior_active: &[ManifestRecord],
) -> PersistReport {
    let write = |category: PackCategory, active: &[ManifestRecord]| {
        let result = save(&world_dir.join(category.order_file()), &to_entries(active));
        if let Err(e) = &result {
            tracing::error!(category = category.as_str(), "{e}");
        }
        result
    };

    PersistReport {
        resource: write(PackCategory::Resource, resource_active),
        behavior: write(PackCategory::Behavior, behavior_active),
    }
}
