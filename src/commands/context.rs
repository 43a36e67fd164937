use anyhow::{Context, Result};

use crate::AddonContext;
use crate::pack::{ManifestRecord, PackCategory, PackId};
use crate::session::{PackList, PackSession};

/// Trait providing common operations for command modules
pub trait CommandContext {
    /// Scans the packs and reconciles them with the world's order files
    ///
    /// # Errors
    ///
    /// Returns an error if the world is not configured or invalid, or an
    /// order file cannot be parsed
    fn open_session(&self) -> Result<PackSession>;

    /// Writes the session's active lists to the world
    ///
    /// # Errors
    ///
    /// Returns an error naming every order file that could not be written
    fn save_session(&self, session: &PackSession) -> Result<()>;

    /// Whether listings should hide the built-in packs
    fn hides_default_packs(&self) -> bool;
}

impl CommandContext for AddonContext {
    fn open_session(&self) -> Result<PackSession> {
        PackSession::open(self).context("Failed to load the world's packs")
    }

    fn save_session(&self, session: &PackSession) -> Result<()> {
        session
            .persist()
            .into_result()
            .context("Failed to save the pack order")
    }

    fn hides_default_packs(&self) -> bool {
        self.config.display.hide_default_packs
    }
}

/// Looks a pack up in one category and returns where it is with its record.
///
/// # Errors
///
/// Returns an error if no pack with `id` is installed in `category`.
pub fn find_pack(
    session: &PackSession,
    category: PackCategory,
    id: PackId,
) -> Result<(PackList, usize, &ManifestRecord)> {
    let (list, index) = session
        .find(category, id)
        .ok_or(crate::PackError::NotFound { category, id })?;
    Ok((list, index, &session.list(list)[index]))
}
