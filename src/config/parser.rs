use super::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads and validates a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML or holds
/// out-of-range values.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content)
}

fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse TOML config")?;

    // Validate and return validation errors directly without wrapping
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.performance.parallel_threads == 0 {
        anyhow::bail!("Parallel threads must be at least 1");
    }

    let paths = [
        ("paths.world", &config.paths.world),
        ("paths.resource_packs", &config.paths.resource_packs),
        ("paths.behavior_packs", &config.paths.behavior_packs),
    ];
    for (key, path) in paths {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            anyhow::bail!("{key} cannot be empty");
        }
    }

    Ok(())
}
