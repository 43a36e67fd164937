#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::indexing_slicing)] // Bounds checked by logic

//! # Addonman - Bedrock Pack Manager
//!
//! Addonman manages which resource and behavior packs are enabled for a
//! Bedrock dedicated server world, and in which order.
//!
//! ## Features
//!
//! - **Parallel Scanning**: Pack folders are parsed on a Rayon pool, both pack roots at once
//! - **Tolerant Parsing**: Broken manifests, icons and order entries are logged and skipped
//! - **Stable Ordering**: The world's order files are the single source of the active order
//! - **Filesystem as Ground Truth**: Packs removed from disk silently drop out of the order
//!
//! ## Architecture
//!
//! - [`pack`]: Manifest records and the pack-root scanner
//! - [`order`]: World order files (`world_*_packs.json`) and persisting
//! - [`reconcile`]: Splitting the scanned inventory into active and inactive packs
//! - [`reorder`]: Pure list operations used to reorder and move packs
//! - [`session`]: The in-memory session a command works against
//! - [`world`]: World folder helpers (validation, name, pack root detection)
//! - [`commands`]: CLI command implementations
//! - [`config`]: Configuration parsing and validation
//! - [`output`]: Output formatting and verbosity
//! - [`utils`]: Utility functions and helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use addonman::{AddonContext, PackCategory, session::PackSession};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = AddonContext::new()?;
//! let mut session = PackSession::open(&ctx)?;
//!
//! let id = "8f3c9c9e-3d5b-4a3f-9a4f-2b2a1f0c6d11".parse()?;
//! session.activate(PackCategory::Behavior, &[id]);
//! session.persist().into_result()?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing, validation, and management.
pub mod config;

/// Error types shared by the library layers.
pub mod error;

/// World order files and persisting of the active ordering.
pub mod order;

/// Output formatting and verbosity control.
pub mod output;

/// Pack manifests, icons and the pack-root scanner.
pub mod pack;

/// Active/inactive reconciliation of a scanned inventory.
pub mod reconcile;

/// Pure reorder and transfer operations over pack lists.
pub mod reorder;

/// The reconciliation session owned by a command.
pub mod session;

/// Utility functions and helpers.
pub mod utils;

/// World folder helpers.
pub mod world;

#[cfg(test)]
pub mod test_utils;

pub use error::{OrderError, PackError, PersistError};
pub use pack::{ManifestRecord, PackCategory, PackId, PackKind, PackVersion};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Current version of the addon binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/addonman/config";

/// Manifest file name inside every pack folder.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Icon file name inside every pack folder.
pub const ICON_FILE: &str = "pack_icon.png";

/// Order file holding the world's active resource packs.
pub const RESOURCE_ORDER_FILE: &str = "world_resource_packs.json";

/// Order file holding the world's active behavior packs.
pub const BEHAVIOR_ORDER_FILE: &str = "world_behavior_packs.json";

/// File whose presence marks a directory as a world.
pub const LEVEL_DAT_FILE: &str = "level.dat";

/// File holding the world's display name.
pub const LEVEL_NAME_FILE: &str = "levelname.txt";

/// Central context for all addonman operations.
///
/// Holds the configuration and the resolved world and pack root paths.
/// Paths come from the config file, then `ADDON_*` environment variables,
/// then explicit overrides (CLI flags), in increasing priority.
#[derive(Debug, Clone)]
pub struct AddonContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl AddonContext {
    /// Creates a new `AddonContext` by loading the configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or if the configuration
    /// file cannot be read or created.
    pub fn new() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("ADDON_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let mut config = config::Config::load(&config_path)?;
        config.apply_env_overrides();

        let validator = config::validator::ConfigValidator::new();
        if let Err(e) = validator.validate_config_file(&config_path) {
            tracing::warn!("Configuration validation failed: {e}");
        }

        if let Err(e) = utils::thread_pool::configure_from_config(&config) {
            tracing::warn!("Failed to configure thread pool: {e}");
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Creates a new `AddonContext` from an explicit config path, without
    /// consulting the environment. Used by tests.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Applies per-invocation path overrides on top of the loaded config.
    pub fn override_paths(
        &mut self,
        world: Option<PathBuf>,
        resource_packs: Option<PathBuf>,
        behavior_packs: Option<PathBuf>,
    ) {
        if world.is_some() {
            self.config.paths.world = world;
        }
        if resource_packs.is_some() {
            self.config.paths.resource_packs = resource_packs;
        }
        if behavior_packs.is_some() {
            self.config.paths.behavior_packs = behavior_packs;
        }
    }

    /// Returns the configured world directory.
    ///
    /// # Errors
    /// Returns an error if no world has been configured.
    pub fn world_dir(&self) -> Result<&Path> {
        self.config.paths.world.as_deref().context(
            "No world configured: set one with 'addon config paths.world <dir>' or --world",
        )
    }

    /// Returns the pack root directory for a category.
    ///
    /// Falls back to auto-detection from the world location when the root
    /// has not been configured.
    ///
    /// # Errors
    /// Returns an error if the root is neither configured nor detectable.
    pub fn pack_root(&self, category: PackCategory) -> Result<PathBuf> {
        let configured = match category {
            PackCategory::Resource => &self.config.paths.resource_packs,
            PackCategory::Behavior => &self.config.paths.behavior_packs,
        };
        if let Some(path) = configured {
            return Ok(path.clone());
        }

        let world = self.world_dir()?;
        let roots = world::detect_pack_roots(world).with_context(|| {
            format!(
                "No {} pack folder configured and none could be detected next to {}",
                category.as_str(),
                world.display()
            )
        })?;
        Ok(roots.root(category).to_path_buf())
    }

    /// Builds the scan options from the display configuration.
    #[must_use]
    pub const fn scan_options(&self) -> pack::scanner::ScanOptions {
        pack::scanner::ScanOptions {
            clean_names: self.config.display.clean_names,
        }
    }
}
