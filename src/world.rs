//! World folder helpers.
//!
//! A dedicated server keeps its worlds under `worlds/` and its packs in
//! `resource_packs/` and `behavior_packs/` next to it:
//!
//! ```text
//! server/
//!   behavior_packs/
//!   resource_packs/
//!   worlds/
//!     Bedrock level/
//!       level.dat
//!       levelname.txt
//!       world_behavior_packs.json
//!       world_resource_packs.json
//! ```

use crate::error::PackError;
use crate::pack::PackCategory;
use crate::{LEVEL_DAT_FILE, LEVEL_NAME_FILE};
use std::path::{Path, PathBuf};

/// Name reported when `levelname.txt` is missing.
pub const UNKNOWN_WORLD: &str = "Unknown World";

/// Name of the directory holding a server's worlds.
const WORLDS_DIR: &str = "worlds";

/// Pack roots belonging to one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRoots {
    /// `resource_packs/`
    pub resource: PathBuf,
    /// `behavior_packs/`
    pub behavior: PathBuf,
}

impl PackRoots {
    /// The root for a category.
    #[must_use]
    pub fn root(&self, category: PackCategory) -> &Path {
        match category {
            PackCategory::Resource => &self.resource,
            PackCategory::Behavior => &self.behavior,
        }
    }
}

/// Checks that `world_dir` is a world folder (it contains `level.dat`).
///
/// # Errors
///
/// Returns [`PackError::InvalidWorld`] otherwise.
pub fn validate_world(world_dir: &Path) -> Result<(), PackError> {
    if world_dir.is_dir() && world_dir.join(LEVEL_DAT_FILE).is_file() {
        Ok(())
    } else {
        tracing::error!(path = %world_dir.display(), "level.dat not found in the world directory");
        Err(PackError::InvalidWorld(world_dir.to_path_buf()))
    }
}

/// Reads the world's display name from `levelname.txt`.
#[must_use]
pub fn world_name(world_dir: &Path) -> String {
    let path = world_dir.join(LEVEL_NAME_FILE);
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "levelname.txt not found, using default name");
        return UNKNOWN_WORLD.to_string();
    }

    match std::fs::read_to_string(&path) {
        Ok(name) => name.trim().to_string(),
        Err(e) => {
            tracing::error!(path = %path.display(), "Could not read world name: {e}");
            UNKNOWN_WORLD.to_string()
        }
    }
}

/// Finds the server's pack roots from a world folder.
///
/// Works only for the standard layout, where the world's parent is named
/// `worlds` and both pack roots exist next to it.
#[must_use]
pub fn detect_pack_roots(world_dir: &Path) -> Option<PackRoots> {
    let worlds = world_dir.parent()?;
    let is_worlds_dir = worlds
        .file_name()
        .is_some_and(|name| name.to_string_lossy().eq_ignore_ascii_case(WORLDS_DIR));
    if !is_worlds_dir {
        return None;
    }

    let server_root = worlds.parent()?;
    let roots = PackRoots {
        resource: server_root.join(PackCategory::Resource.root_dir_name()),
        behavior: server_root.join(PackCategory::Behavior.root_dir_name()),
    };

    if roots.resource.is_dir() && roots.behavior.is_dir() {
        tracing::info!(server = %server_root.display(), "Auto-detected resource and behavior pack paths");
        Some(roots)
    } else {
        None
    }
}

/// Warns when a pack root does not look like the folder of its category.
///
/// Returns whether the root looks right. A mismatch is not an error; the
/// root is still scanned.
pub fn check_pack_root(root: &Path, category: PackCategory) -> bool {
    let named_right = root
        .file_name()
        .is_some_and(|n| n.to_string_lossy().eq_ignore_ascii_case(category.root_dir_name()));
    let looks_right = root.is_dir() && named_right;

    if !looks_right {
        tracing::warn!(
            path = %root.display(),
            "The selected {} pack path does not appear to be a '{}' folder",
            category.as_str(),
            category.root_dir_name()
        );
    }
    looks_right
}
