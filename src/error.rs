//! Error types for the library layers.
//!
//! Per-item problems (a broken manifest, a bad order entry, an unreadable
//! icon) never show up here: they are logged and the item is skipped. These
//! types only cover failures that invalidate a whole operation.

use crate::pack::{PackCategory, PackId};
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing a world order file.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The file exists but is not a JSON array.
    #[error("Failed to parse order file {}: {reason}", path.display())]
    Parse {
        /// Order file that failed to parse
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Reading, creating or writing the file failed.
    #[error("Failed to access order file {}: {source}", path.display())]
    Io {
        /// Order file being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failures of session-level pack operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// The world directory does not contain `level.dat`.
    #[error("'level.dat' not found in {}: not a valid world folder", .0.display())]
    InvalidWorld(PathBuf),

    /// An order file could not be loaded.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// No pack with this id exists in the category.
    #[error("No {} pack with id {id}", category.as_str())]
    NotFound {
        /// Category searched
        category: PackCategory,
        /// Requested id
        id: PackId,
    },

    /// The pack's manifest has no usable uuid, so no order entry can name it.
    #[error("Pack '{name}' has no valid uuid and cannot be enabled")]
    MissingId {
        /// Display name of the pack
        name: String,
    },

    /// A transfer between lists of different categories, or onto itself.
    #[error("Cannot move packs from {from} to {to}")]
    InvalidTransfer {
        /// Source list name
        from: &'static str,
        /// Destination list name
        to: &'static str,
    },

    /// The pack folder was already gone when deleting.
    #[error("The folder for pack '{name}' does not exist: {}", path.display())]
    PackFolderMissing {
        /// Display name of the pack
        name: String,
        /// Folder that was expected
        path: PathBuf,
    },

    /// Removing the pack folder failed.
    #[error("Failed to delete pack folder {}: {source}", path.display())]
    Delete {
        /// Folder being removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// One or both order files could not be written.
///
/// A failed category never rolls back the other; `failures` lists only the
/// files that were not written.
#[derive(Debug, Error)]
#[error("{}", describe_failures(.failures))]
pub struct PersistError {
    /// Failed writes, resource before behavior
    pub failures: Vec<OrderError>,
}

/// Joins failure messages into one line.
fn describe_failures(failures: &[OrderError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
