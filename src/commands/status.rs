use super::context::CommandContext;
use crate::AddonContext;
use crate::pack::PackCategory;
use crate::session::{PackList, PackSession, Partition};
use crate::utils::formatters::capitalize;
use crate::utils::is_default_pack;
use crate::world;
use anyhow::Result;
use colored::Colorize;

/// Pack counts of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub active: usize,
    pub inactive: usize,
    /// Built-in packs among both
    pub default_packs: usize,
    /// Packs whose module belongs to the other category
    pub mismatched: usize,
}

impl CategoryCounts {
    #[must_use]
    pub fn of(session: &PackSession, category: PackCategory) -> Self {
        let parts = session.partitions(category);
        let all = || parts.active.iter().chain(&parts.inactive);
        Self {
            active: parts.active.len(),
            inactive: parts.inactive.len(),
            default_packs: all().filter(|r| is_default_pack(&r.name)).count(),
            mismatched: all().filter(|r| r.is_kind_mismatch(category)).count(),
        }
    }
}

/// Execute status command - show the world, its pack folders and counts
///
/// # Errors
///
/// Returns an error if the world or pack folders cannot be resolved, or an
/// order file cannot be parsed
pub fn execute(ctx: &AddonContext) -> Result<()> {
    let session = ctx.open_session()?;
    let world_dir = session.world_dir();

    println!(
        "{} {}",
        "World:".bold(),
        world::world_name(world_dir).green().bold()
    );
    println!("  {}", world_dir.display().to_string().dimmed());

    for category in PackCategory::ALL {
        let root = ctx.pack_root(category)?;
        let counts = CategoryCounts::of(&session, category);

        println!(
            "\n{} {}",
            format!("{} packs:", capitalize(category.as_str())).bold(),
            root.display().to_string().dimmed()
        );
        println!(
            "  {} active, {} inactive",
            counts.active.to_string().green(),
            counts.inactive
        );
        if counts.default_packs > 0 {
            println!("  {} built-in", counts.default_packs.to_string().dimmed());
        }
        if counts.mismatched > 0 {
            super::print_warning(&format!(
                "{} pack(s) in {} belong in the other folder",
                counts.mismatched,
                category.root_dir_name()
            ));
        }

        if let Some(first) = session
            .list(PackList::new(category, Partition::Active))
            .first()
        {
            println!("  loads first: {}", first.name);
        }
    }

    Ok(())
}
