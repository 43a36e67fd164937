//! Active/inactive reconciliation.
//!
//! The scanned inventory is the ground truth for what exists; the order
//! file is the ground truth for what is enabled and in which order.
//! Reconciling them gives:
//!
//! - **active**: packs whose id is in the order file, in order-file order
//! - **inactive**: every other pack, in inventory order
//!
//! Order entries for packs that are no longer on disk disappear. Packs with
//! the nil id (no usable uuid) are always inactive.

use crate::order::OrderEntry;
use crate::pack::{ManifestRecord, PackId};
use std::collections::{HashMap, HashSet};

/// The two partitions of one category.
///
/// Every record of the inventory is in exactly one of them.
#[derive(Debug, Clone, Default)]
pub struct Partitions {
    /// Enabled packs, in load order
    pub active: Vec<ManifestRecord>,
    /// Installed but disabled packs
    pub inactive: Vec<ManifestRecord>,
}

impl Partitions {
    /// Number of records across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.inactive.len()
    }

    /// Whether both partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }
}

/// Splits `all` into active and inactive packs according to `order`.
///
/// When `order` names the same id twice, the later position wins. The
/// result depends only on the inputs.
#[must_use]
pub fn reconcile(all: &[ManifestRecord], order: &[OrderEntry]) -> Partitions {
    let ordinals: HashMap<PackId, usize> = order
        .iter()
        .enumerate()
        .map(|(ordinal, entry)| (entry.pack_id, ordinal))
        .collect();

    let mut active: Vec<(usize, &ManifestRecord)> = Vec::new();
    let mut inactive = Vec::new();

    for record in all {
        match ordinals.get(&record.id) {
            Some(&ordinal) if !record.id.is_nil() => active.push((ordinal, record)),
            _ => inactive.push(record.clone()),
        }
    }

    // Stable, so duplicate ids in `all` keep their inventory order
    active.sort_by_key(|(ordinal, _)| *ordinal);

    let installed: HashSet<PackId> = all.iter().map(|r| r.id).collect();
    let stale = ordinals.keys().filter(|id| !installed.contains(id)).count();
    if stale > 0 {
        tracing::debug!(count = stale, "order entries without an installed pack were dropped");
    }

    Partitions {
        active: active.into_iter().map(|(_, r)| r.clone()).collect(),
        inactive,
    }
}
