//! Utility functions and helpers.
//!
//! - Path helpers (tilde expansion)
//! - Default-pack detection for listings
//!
//! # Submodules
//!
//! - [`formatters`]: Output formatting
//! - [`thread_pool`]: Thread pool configuration
//!
//! # Examples
//!
//! ```
//! use addonman::utils::{expand_tilde, is_default_pack};
//!
//! # fn main() -> anyhow::Result<()> {
//! let world = expand_tilde("~/bedrock/worlds/Bedrock level")?;
//!
//! assert!(is_default_pack("resourcePack.vanilla.001"));
//! # Ok(())
//! # }
//! ```

/// Output formatting and colorization
pub mod formatters;
/// Thread pool configuration for parallel operations
pub mod thread_pool;

use anyhow::Result;
use std::path::PathBuf;

/// Name prefixes of the packs every server ships with.
const DEFAULT_PACK_PREFIXES: &[&str] = &[
    "resourcepack.education",
    "resourcepack.vanilla",
    "behaviorpack.education",
    "behaviorpack.vanilla",
    "experimental",
];

/// Expands a path starting with `~` to the user's home directory.
///
/// # Errors
///
/// Returns an error if the path is empty.
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        anyhow::bail!("Path cannot be empty");
    }
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Ok(home.join(&path[2..]));
    }
    Ok(PathBuf::from(path))
}

/// Whether a pack name belongs to a built-in vanilla, education or
/// experimental pack.
#[must_use]
pub fn is_default_pack(name: &str) -> bool {
    let name = name.trim_start().to_ascii_lowercase();
    DEFAULT_PACK_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
