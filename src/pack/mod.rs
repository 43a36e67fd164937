//! Pack records and the types that identify them.
//!
//! A pack is a folder under a pack root (`resource_packs/` or
//! `behavior_packs/`) carrying a `manifest.json`. The scanner turns each one
//! into a [`ManifestRecord`]; everything downstream works on those records.
//!
//! # Usage
//!
//! ```no_run
//! use addonman::pack::scanner::{ScanOptions, scan};
//! use std::path::Path;
//!
//! let records = scan(Path::new("/srv/bedrock/resource_packs"), &ScanOptions::default());
//! for record in &records {
//!     println!("{} {} ({})", record.name, record.version, record.id);
//! }
//! ```

pub mod icon;
pub mod manifest;
pub mod scanner;

pub use icon::PackIcon;
pub use scanner::Inventory;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

/// Name shown for packs whose manifest has no name.
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// Description shown for packs whose manifest has no description.
pub const NO_DESCRIPTION: &str = "No description.";

/// Which pack root (and which order file) a pack belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackCategory {
    /// Packs under `resource_packs/`
    Resource,
    /// Packs under `behavior_packs/`
    Behavior,
}

impl PackCategory {
    /// Both categories, resource first.
    pub const ALL: [Self; 2] = [Self::Resource, Self::Behavior];

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Behavior => "behavior",
        }
    }

    /// Name of the world order file for this category.
    #[must_use]
    pub const fn order_file(self) -> &'static str {
        match self {
            Self::Resource => crate::RESOURCE_ORDER_FILE,
            Self::Behavior => crate::BEHAVIOR_ORDER_FILE,
        }
    }

    /// Conventional name of the pack root folder on a dedicated server.
    #[must_use]
    pub const fn root_dir_name(self) -> &'static str {
        match self {
            Self::Resource => "resource_packs",
            Self::Behavior => "behavior_packs",
        }
    }
}

impl fmt::Display for PackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pack identity, the manifest's header `uuid`.
///
/// Manifests without a usable uuid get the nil id, which never matches an
/// order entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PackId(pub Uuid);

impl PackId {
    /// The nil id given to packs without a valid uuid.
    pub const NIL: Self = Self(Uuid::nil());

    /// Whether this is the nil id.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PackId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl From<Uuid> for PackId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Pack version, normally `[major, minor, patch]`.
///
/// Empty when the manifest declares none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackVersion(pub Vec<u32>);

impl PackVersion {
    /// Creates a `major.minor.patch` version.
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self(vec![major, minor, patch])
    }

    /// Whether no version was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.iter();
        if let Some(first) = parts.next() {
            write!(f, "{first}")?;
            for part in parts {
                write!(f, ".{part}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for PackVersion {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()
            .map(Self)
    }
}

/// Kind of the first module a manifest declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackKind {
    /// `resources` module (resource pack)
    Resources,
    /// `data` module (behavior pack)
    Data,
    /// `script` module (behavior pack)
    Script,
    /// Any other module type (skin packs, world templates, ...)
    Other(String),
}

impl PackKind {
    /// Maps a manifest module `type` string.
    #[must_use]
    pub fn from_module_type(module_type: &str) -> Self {
        match module_type {
            "resources" => Self::Resources,
            "data" => Self::Data,
            "script" => Self::Script,
            other => Self::Other(other.to_string()),
        }
    }

    /// The pack category this module kind belongs in, if any.
    #[must_use]
    pub const fn category(&self) -> Option<PackCategory> {
        match self {
            Self::Resources => Some(PackCategory::Resource),
            Self::Data | Self::Script => Some(PackCategory::Behavior),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resources => f.write_str("resources"),
            Self::Data => f.write_str("data"),
            Self::Script => f.write_str("script"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// One discovered pack.
#[derive(Debug, Clone)]
pub struct ManifestRecord {
    /// Pack folder; authoritative for delete and open-folder.
    pub source_path: PathBuf,
    /// Header uuid, nil when missing or invalid
    pub id: PackId,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Header version
    pub version: PackVersion,
    /// Kind of the first declared module, `None` without modules
    pub kind: Option<PackKind>,
    /// Decoded `pack_icon.png` or the shared fallback
    pub icon: PackIcon,
}

impl ManifestRecord {
    /// Creates a record with default metadata and the fallback icon.
    #[must_use]
    pub fn new(source_path: PathBuf, id: PackId, version: PackVersion) -> Self {
        Self {
            source_path,
            id,
            name: UNKNOWN_NAME.to_string(),
            description: NO_DESCRIPTION.to_string(),
            version,
            kind: None,
            icon: PackIcon::fallback(),
        }
    }

    /// Folder name of the pack, used in log messages.
    #[must_use]
    pub fn folder_name(&self) -> String {
        folder_name(&self.source_path)
    }

    /// Whether the pack's module kind belongs to the other category.
    ///
    /// A pack with no modules, or an unrecognised module, is never a
    /// mismatch.
    #[must_use]
    pub fn is_kind_mismatch(&self, category: PackCategory) -> bool {
        self.kind
            .as_ref()
            .and_then(PackKind::category)
            .is_some_and(|kind_category| kind_category != category)
    }
}

/// Last path component as a lossy string.
pub(crate) fn folder_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
