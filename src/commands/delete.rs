use super::context::{CommandContext, find_pack};
use crate::pack::{PackCategory, PackId};
use crate::session::Partition;
use crate::{AddonContext, PackError};
use anyhow::Result;
use colored::Colorize;

/// Execute delete command - remove a pack folder from the server
///
/// Without `yes` this only shows what would be removed. Deleting an enabled
/// pack also drops it from the world's order file.
///
/// # Errors
///
/// Returns an error if:
/// - The pack is not installed in `category`
/// - The folder cannot be removed
/// - The order file cannot be saved
pub fn execute(ctx: &AddonContext, category: PackCategory, id: PackId, yes: bool) -> Result<()> {
    let mut session = ctx.open_session()?;
    let (list, _, record) = find_pack(&session, category, id)?;

    if !yes {
        println!("\n{}", "Would delete:".yellow().bold());
        println!("  {} {}", record.name.bold(), record.source_path.display());
        if list.partition() == Partition::Active {
            println!("  {}", "(currently enabled, it will be disabled)".dimmed());
        }
        println!();
        super::print_info("Run with --yes to delete the pack folder");
        return Ok(());
    }

    let was_active = list.partition() == Partition::Active;
    let name = match session.delete(category, id) {
        Ok((_, record)) => {
            super::print_success(&format!("Deleted '{}'", record.name));
            record.name
        }
        Err(PackError::PackFolderMissing { name, path }) => {
            super::print_warning(&format!(
                "The folder of '{name}' was already gone: {}",
                path.display()
            ));
            name
        }
        Err(e) => return Err(e.into()),
    };

    if was_active {
        ctx.save_session(&session)?;
        super::print_info(&format!("Removed '{name}' from the {category} pack order"));
    }
    Ok(())
}
