pub mod parser;
pub mod validator;

use crate::utils::expand_tilde;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "paths.world",
    "paths.resource_packs",
    "paths.behavior_packs",
    "display.hide_default_packs",
    "display.clean_names",
    "performance.parallel_threads",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the world and its packs live
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Unset roots are detected from the world location.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_packs: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_packs: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Hide the built-in vanilla, education and experimental packs
    #[serde(default = "default_true")]
    pub hide_default_packs: bool,
    /// Strip `§` formatting codes from pack names
    #[serde(default = "default_true")]
    pub clean_names: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_default_packs: true,
            clean_names: true,
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threads: default_parallel_threads(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot read or parse the configuration file
    /// - Configuration file contains invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Create default config if it doesn't exist
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        parser::parse_config_file(path)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Applies `ADDON_WORLD`, `ADDON_RESOURCE_PACKS` and
    /// `ADDON_BEHAVIOR_PACKS` on top of the loaded file.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies path overrides looked up by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides = [
            ("ADDON_WORLD", &mut self.paths.world),
            ("ADDON_RESOURCE_PACKS", &mut self.paths.resource_packs),
            ("ADDON_BEHAVIOR_PACKS", &mut self.paths.behavior_packs),
        ];

        for (name, slot) in overrides {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                match expand_tilde(value.trim()) {
                    Ok(path) => *slot = Some(path),
                    Err(e) => tracing::warn!("Ignoring {name}: {e}"),
                }
            }
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let (section, name) = key.split_once('.')?;
        let show = |path: &Option<PathBuf>| path.as_ref().map(|p| p.display().to_string());

        match (section, name) {
            ("paths", "world") => show(&self.paths.world),
            ("paths", "resource_packs") => show(&self.paths.resource_packs),
            ("paths", "behavior_packs") => show(&self.paths.behavior_packs),
            ("display", "hide_default_packs") => Some(self.display.hide_default_packs.to_string()),
            ("display", "clean_names") => Some(self.display.clean_names.to_string()),
            ("performance", "parallel_threads") => {
                Some(self.performance.parallel_threads.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Paths are stored as given after tilde expansion; they do not have to
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key format is invalid (must be section.key)
    /// - The key is unknown
    /// - The value is invalid for the key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (section, name) = key
            .split_once('.')
            .with_context(|| format!("Invalid configuration key: {key}"))?;

        match (section, name) {
            ("paths", "world") => self.paths.world = Some(expand_tilde(value)?),
            ("paths", "resource_packs") => self.paths.resource_packs = Some(expand_tilde(value)?),
            ("paths", "behavior_packs") => self.paths.behavior_packs = Some(expand_tilde(value)?),
            ("display", "hide_default_packs") => {
                self.display.hide_default_packs = value
                    .parse()
                    .with_context(|| format!("Invalid boolean: {value}"))?;
            }
            ("display", "clean_names") => {
                self.display.clean_names = value
                    .parse()
                    .with_context(|| format!("Invalid boolean: {value}"))?;
            }
            ("performance", "parallel_threads") => {
                let threads: usize = value
                    .parse()
                    .with_context(|| format!("Invalid number: {value}"))?;
                if threads == 0 {
                    anyhow::bail!("Parallel threads must be at least 1");
                }
                self.performance.parallel_threads = threads;
            }
            _ => anyhow::bail!("Unknown configuration key: {key}"),
        }
        Ok(())
    }

    /// Unset a configuration value by key
    ///
    /// Path keys become unset; other keys return to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "paths.world" => self.paths.world = None,
            "paths.resource_packs" => self.paths.resource_packs = None,
            "paths.behavior_packs" => self.paths.behavior_packs = None,
            "display.hide_default_packs" => {
                self.display.hide_default_packs = DisplayConfig::default().hide_default_packs;
            }
            "display.clean_names" => {
                self.display.clean_names = DisplayConfig::default().clean_names;
            }
            "performance.parallel_threads" => {
                self.performance.parallel_threads = default_parallel_threads();
            }
            _ => anyhow::bail!("Cannot unset configuration key: {key}"),
        }
        Ok(())
    }
}

const fn default_true() -> bool {
    true
}

fn default_parallel_threads() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
        .min(8)
}
