use crate::pack::PackCategory;
use crate::world;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute detect command - print the pack folders found next to a world
///
/// # Errors
///
/// Returns an error if the world is not inside a server's `worlds` folder
/// with both pack folders present
pub fn execute(world_dir: &Path) -> Result<()> {
    if world::validate_world(world_dir).is_err() {
        super::print_warning(&format!(
            "{} has no level.dat; it may not be a world folder",
            world_dir.display()
        ));
    }

    let roots = world::detect_pack_roots(world_dir).ok_or_else(|| {
        anyhow::anyhow!(
            "Could not detect pack folders for {}: expected <server>/worlds/<world> with {} and {} in <server>",
            world_dir.display(),
            PackCategory::Resource.root_dir_name(),
            PackCategory::Behavior.root_dir_name()
        )
    })?;

    println!(
        "{} {}",
        "World:".bold(),
        world::world_name(world_dir).green()
    );
    for category in PackCategory::ALL {
        println!(
            "{} {}",
            format!("{}:", category.root_dir_name()).bold(),
            roots.root(category).display()
        );
    }
    println!();
    super::print_info(&format!(
        "Save it with: addon config paths.world \"{}\"",
        world_dir.display()
    ));

    Ok(())
}
