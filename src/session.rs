//! The reconciliation session.
//!
//! A [`PackSession`] is built once per command: it scans both pack roots,
//! loads both order files and reconciles them. Commands then edit the
//! in-memory lists and call [`PackSession::persist`] to write the active
//! lists back. Nothing is shared between sessions except the files on disk.

use crate::error::PackError;
use crate::order::{self, OrderEntry, PersistReport};
use crate::pack::scanner::{Inventory, scan_both};
use crate::pack::{ManifestRecord, PackCategory, PackId};
use crate::reconcile::{Partitions, reconcile};
use crate::{AddonContext, reorder, world};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Active or inactive half of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Enabled, ordered
    Active,
    /// Installed, not enabled
    Inactive,
}

/// The four lists a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackList {
    /// Enabled resource packs
    ResourceActive,
    /// Disabled resource packs
    ResourceInactive,
    /// Enabled behavior packs
    BehaviorActive,
    /// Disabled behavior packs
    BehaviorInactive,
}

impl PackList {
    /// All four lists.
    pub const ALL: [Self; 4] = [
        Self::ResourceActive,
        Self::ResourceInactive,
        Self::BehaviorActive,
        Self::BehaviorInactive,
    ];

    /// The list for a category and partition.
    #[must_use]
    pub const fn new(category: PackCategory, partition: Partition) -> Self {
        match (category, partition) {
            (PackCategory::Resource, Partition::Active) => Self::ResourceActive,
            (PackCategory::Resource, Partition::Inactive) => Self::ResourceInactive,
            (PackCategory::Behavior, Partition::Active) => Self::BehaviorActive,
            (PackCategory::Behavior, Partition::Inactive) => Self::BehaviorInactive,
        }
    }

    /// Category of the list.
    #[must_use]
    pub const fn category(self) -> PackCategory {
        match self {
            Self::ResourceActive | Self::ResourceInactive => PackCategory::Resource,
            Self::BehaviorActive | Self::BehaviorInactive => PackCategory::Behavior,
        }
    }

    /// Partition of the list.
    #[must_use]
    pub const fn partition(self) -> Partition {
        match self {
            Self::ResourceActive | Self::BehaviorActive => Partition::Active,
            Self::ResourceInactive | Self::BehaviorInactive => Partition::Inactive,
        }
    }

    /// Name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResourceActive => "active resource packs",
            Self::ResourceInactive => "inactive resource packs",
            Self::BehaviorActive => "active behavior packs",
            Self::BehaviorInactive => "inactive behavior packs",
        }
    }
}

/// Scanned and reconciled packs of one world.
#[derive(Debug, Clone)]
pub struct PackSession {
    /// World whose order files are read and written
    world_dir: PathBuf,
    /// Resource pack partitions
    resource: Partitions,
    /// Behavior pack partitions
    behavior: Partitions,
}

impl PackSession {
    /// Opens a session for the world configured in `ctx`.
    ///
    /// Both pack roots are scanned concurrently and the call returns only
    /// once both scans are complete.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No world or pack roots are configured or detectable
    /// - The world folder has no `level.dat`
    /// - An order file cannot be read or is not a JSON array
    pub fn open(ctx: &AddonContext) -> Result<Self> {
        let world_dir = ctx.world_dir()?;
        world::validate_world(world_dir)?;

        let resource_root = ctx.pack_root(PackCategory::Resource)?;
        let behavior_root = ctx.pack_root(PackCategory::Behavior)?;
        world::check_pack_root(&resource_root, PackCategory::Resource);
        world::check_pack_root(&behavior_root, PackCategory::Behavior);

        let resource_order = order::load(&world_dir.join(PackCategory::Resource.order_file()))
            .map_err(PackError::from)?;
        let behavior_order = order::load(&world_dir.join(PackCategory::Behavior.order_file()))
            .map_err(PackError::from)?;
        tracing::info!("Active world pack configurations have been parsed");

        let inventory = scan_both(&resource_root, &behavior_root, &ctx.scan_options());

        Ok(Self::from_parts(
            world_dir.to_path_buf(),
            &inventory,
            &resource_order,
            &behavior_order,
        ))
    }

    /// Builds a session from an inventory and both orders.
    #[must_use]
    pub fn from_parts(
        world_dir: PathBuf,
        inventory: &Inventory,
        resource_order: &[OrderEntry],
        behavior_order: &[OrderEntry],
    ) -> Self {
        let resource = reconcile(&inventory.resource, resource_order);
        let behavior = reconcile(&inventory.behavior, behavior_order);
        tracing::debug!(
            resource_active = resource.active.len(),
            behavior_active = behavior.active.len(),
            "pack lists reconciled"
        );

        Self {
            world_dir,
            resource,
            behavior,
        }
    }

    /// World folder of this session.
    #[must_use]
    pub fn world_dir(&self) -> &Path {
        &self.world_dir
    }

    /// Both partitions of a category.
    #[must_use]
    pub const fn partitions(&self, category: PackCategory) -> &Partitions {
        match category {
            PackCategory::Resource => &self.resource,
            PackCategory::Behavior => &self.behavior,
        }
    }

    /// Mutable partitions of a category.
    fn partitions_mut(&mut self, category: PackCategory) -> &mut Partitions {
        match category {
            PackCategory::Resource => &mut self.resource,
            PackCategory::Behavior => &mut self.behavior,
        }
    }

    /// Records of one list, in list order.
    #[must_use]
    pub fn list(&self, list: PackList) -> &[ManifestRecord] {
        let parts = self.partitions(list.category());
        match list.partition() {
            Partition::Active => &parts.active,
            Partition::Inactive => &parts.inactive,
        }
    }

    /// Mutable records of one list.
    fn list_mut(&mut self, list: PackList) -> &mut Vec<ManifestRecord> {
        let parts = self.partitions_mut(list.category());
        match list.partition() {
            Partition::Active => &mut parts.active,
            Partition::Inactive => &mut parts.inactive,
        }
    }

    /// Finds a pack of a category by id.
    ///
    /// Returns the list holding it and its index there. Active packs are
    /// searched first.
    #[must_use]
    pub fn find(&self, category: PackCategory, id: PackId) -> Option<(PackList, usize)> {
        [Partition::Active, Partition::Inactive]
            .into_iter()
            .map(|partition| PackList::new(category, partition))
            .find_map(|list| reorder::position(self.list(list), id).map(|index| (list, index)))
    }

    /// Moves the record at `from` to `to` within one list.
    ///
    /// Out-of-range indices change nothing and return `false`.
    pub fn reposition(&mut self, list: PackList, from: usize, to: usize) -> bool {
        let moved = reorder::reposition(self.list_mut(list), from, to);
        if moved {
            tracing::info!(list = list.as_str(), from, to, "pack moved");
        }
        moved
    }

    /// Moves the record at `index` one place up.
    pub fn move_up(&mut self, list: PackList, index: usize) -> bool {
        let moved = reorder::move_up(self.list_mut(list), index);
        if moved {
            tracing::info!(list = list.as_str(), from = index, to = index - 1, "pack moved");
        }
        moved
    }

    /// Moves the record at `index` one place down.
    pub fn move_down(&mut self, list: PackList, index: usize) -> bool {
        let moved = reorder::move_down(self.list_mut(list), index);
        if moved {
            tracing::info!(list = list.as_str(), from = index, to = index + 1, "pack moved");
        }
        moved
    }

    /// Moves records with the given ids from `source` to the end of
    /// `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidTransfer`] unless the lists are the two
    /// partitions of the same category.
    pub fn transfer(
        &mut self,
        source: PackList,
        destination: PackList,
        ids: &[PackId],
    ) -> Result<usize, PackError> {
        if source.category() != destination.category()
            || source.partition() == destination.partition()
        {
            return Err(PackError::InvalidTransfer {
                from: source.as_str(),
                to: destination.as_str(),
            });
        }

        let parts = self.partitions_mut(source.category());
        let moved = match source.partition() {
            Partition::Active => reorder::transfer(&mut parts.active, &mut parts.inactive, ids),
            Partition::Inactive => reorder::transfer(&mut parts.inactive, &mut parts.active, ids),
        };

        tracing::info!(
            from = source.as_str(),
            to = destination.as_str(),
            count = moved,
            "packs transferred"
        );
        Ok(moved)
    }

    /// Enables packs, appending them to the end of the active list.
    pub fn activate(&mut self, category: PackCategory, ids: &[PackId]) -> usize {
        let parts = self.partitions_mut(category);
        reorder::transfer(&mut parts.inactive, &mut parts.active, ids)
    }

    /// Disables packs, appending them to the inactive list.
    pub fn deactivate(&mut self, category: PackCategory, ids: &[PackId]) -> usize {
        let parts = self.partitions_mut(category);
        reorder::transfer(&mut parts.active, &mut parts.inactive, ids)
    }

    /// Deletes a pack folder from disk and drops its record.
    ///
    /// Returns the removed record and the list it was in.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No pack with `id` exists in the category
    /// - The folder is already gone (the record is dropped anyway)
    /// - Removing the folder fails (the record is kept)
    pub fn delete(
        &mut self,
        category: PackCategory,
        id: PackId,
    ) -> Result<(PackList, ManifestRecord), PackError> {
        let (list, index) = self
            .find(category, id)
            .ok_or(PackError::NotFound { category, id })?;
        let path = self.list(list)[index].source_path.clone();

        if !path.is_dir() {
            let record = self.list_mut(list).remove(index);
            tracing::warn!(pack = %record.name, "Pack folder not found, it was likely removed manually");
            return Err(PackError::PackFolderMissing {
                name: record.name,
                path,
            });
        }

        std::fs::remove_dir_all(&path).map_err(|source| PackError::Delete {
            path: path.clone(),
            source,
        })?;

        let record = self.list_mut(list).remove(index);
        tracing::info!(pack = %record.name, "Pack was deleted from the disk");
        Ok((list, record))
    }

    /// Writes both active lists to the world's order files.
    pub fn persist(&self) -> PersistReport {
        order::persist(&self.world_dir, &self.resource.active, &self.behavior.active)
    }
}
