use crate::AddonContext;
use crate::config::{Config, KEYS};
use crate::output;
use anyhow::Result;
use colored::Colorize;

/// Execute config command to get/set configuration values
///
/// Reads show the effective configuration. Writes go to the file as it is
/// on disk, so `ADDON_*` variables and path flags are never saved.
///
/// # Errors
///
/// Returns an error if:
/// - Failed to set or unset configuration value
/// - Failed to save configuration
pub fn execute(
    ctx: &mut AddonContext,
    key: Option<&str>,
    value: Option<&str>,
    unset: bool,
    list: bool,
) -> Result<()> {
    // If --list flag is set or no key is provided, show all configuration
    let Some(key) = key.filter(|_| !list) else {
        show_all_config(ctx);
        return Ok(());
    };

    if unset {
        let mut stored = Config::load(&ctx.config_path)?;
        stored.unset(key)?;
        stored.save(&ctx.config_path)?;
        ctx.config.unset(key)?;
        output::success(&format!("Unset {key}"));
    } else if let Some(val) = value {
        let mut stored = Config::load(&ctx.config_path)?;
        stored.set(key, val)?;
        stored.save(&ctx.config_path)?;
        ctx.config.set(key, val)?;
        let stored = stored.get(key).unwrap_or_else(|| val.to_string());
        output::success(&format!("Set {key} = {stored}"));
    } else if let Some(val) = ctx.config.get(key) {
        println!("{val}");
    } else if KEYS.contains(&key) {
        output::warning(&format!("Configuration key '{key}' is not set"));
    } else {
        anyhow::bail!("Unknown configuration key: {key}");
    }

    Ok(())
}

/// Show all configuration values, grouped by section
fn show_all_config(ctx: &AddonContext) {
    let mut section = "";
    for key in KEYS {
        let Some((prefix, name)) = key.split_once('.') else {
            continue;
        };
        if prefix != section {
            if !section.is_empty() {
                println!();
            }
            println!("{}", format!("[{prefix}]").bold());
            section = prefix;
        }
        match ctx.config.get(key) {
            Some(value) => println!("  {name} = {value}"),
            None => println!("  {name} = {}", "(unset)".dimmed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn context() -> Result<(TempDir, AddonContext)> {
        let temp_dir = TempDir::new()?;
        let ctx = AddonContext::new_explicit(temp_dir.path().join("config"))?;
        Ok((temp_dir, ctx))
    }

    #[test]
    fn test_set_saves_to_disk() -> Result<()> {
        let (_temp, mut ctx) = context()?;
        execute(&mut ctx, Some("paths.world"), Some("/srv/worlds/w"), false, false)?;

        let reloaded = Config::load(&ctx.config_path)?;
        assert_eq!(reloaded.paths.world, Some(PathBuf::from("/srv/worlds/w")));
        Ok(())
    }

    #[test]
    fn test_unset_saves_to_disk() -> Result<()> {
        let (_temp, mut ctx) = context()?;
        execute(&mut ctx, Some("display.clean_names"), Some("false"), false, false)?;
        execute(&mut ctx, Some("display.clean_names"), None, true, false)?;

        assert!(Config::load(&ctx.config_path)?.display.clean_names);
        Ok(())
    }

    #[test]
    fn test_set_keeps_path_overrides_out_of_file() -> Result<()> {
        let (_temp, mut ctx) = context()?;
        ctx.override_paths(
            Some(PathBuf::from("/srv/worlds/flag")),
            Some(PathBuf::from("/srv/resource_packs")),
            None,
        );

        execute(&mut ctx, Some("display.clean_names"), Some("false"), false, false)?;
        execute(&mut ctx, Some("display.hide_default_packs"), None, true, false)?;

        let reloaded = Config::load(&ctx.config_path)?;
        assert!(!reloaded.display.clean_names);
        assert_eq!(reloaded.paths.world, None);
        assert_eq!(reloaded.paths.resource_packs, None);
        // The running context still sees its overrides
        assert_eq!(ctx.config.paths.world, Some(PathBuf::from("/srv/worlds/flag")));
        Ok(())
    }

    #[test]
    fn test_get_and_list() -> Result<()> {
        let (_temp, mut ctx) = context()?;
        execute(&mut ctx, Some("paths.world"), None, false, false)?;
        execute(&mut ctx, None, None, false, true)?;
        assert!(execute(&mut ctx, Some("paths.server_root"), None, false, false).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_value_is_not_saved() -> Result<()> {
        let (_temp, mut ctx) = context()?;
        let result = execute(
            &mut ctx,
            Some("performance.parallel_threads"),
            Some("0"),
            false,
            false,
        );
        assert!(result.is_err());
        assert!(Config::load(&ctx.config_path)?.performance.parallel_threads > 0);
        Ok(())
    }
}
