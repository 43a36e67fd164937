use super::KEYS;
use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;

/// Keys that older configs may still carry, with what replaced them.
const DEPRECATED: &[(&str, &str)] = &[
    (
        "paths.server",
        "Pack folders are detected from paths.world; set paths.resource_packs and paths.behavior_packs to override.",
    ),
    (
        "display.show_icons",
        "This field has no effect. Icon sources are shown by 'addon show'.",
    ),
];

/// Warns about configuration keys addonman does not read
pub struct ConfigValidator {
    /// Set of valid configuration fields
    known_fields: HashSet<&'static str>,
    /// Fields that should trigger a deprecation warning
    deprecated_fields: HashSet<&'static str>,
}

/// Problems found in a configuration file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys that are not recognized
    pub unknown: Vec<String>,
    /// Keys that are recognized but no longer used
    pub deprecated: Vec<String>,
}

impl ValidationReport {
    /// Whether nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.deprecated.is_empty()
    }
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        Self {
            known_fields: KEYS.iter().copied().collect(),
            deprecated_fields: DEPRECATED.iter().map(|(key, _)| *key).collect(),
        }
    }

    /// Validate a configuration file and print warnings to stderr
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn validate_config_file(&self, config_path: &Path) -> Result<()> {
        if !config_path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(config_path)?;
        let report = self.validate_str(&content)?;
        if report.is_clean() {
            return Ok(());
        }

        eprintln!("{}", "Configuration warnings:".yellow().bold());
        for field in &report.unknown {
            eprintln!("  Unknown configuration field: {}", field.yellow());
        }
        for field in &report.deprecated {
            let suggestion = DEPRECATED
                .iter()
                .find(|(key, _)| key == field)
                .map_or("This field is deprecated.", |(_, hint)| hint);
            eprintln!("  Deprecated field '{}': {}", field.yellow(), suggestion.dimmed());
        }
        eprintln!();

        Ok(())
    }

    /// Checks TOML content and returns the unknown and deprecated keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML.
    pub fn validate_str(&self, content: &str) -> Result<ValidationReport> {
        let parsed: toml::Value = toml::from_str(content)?;
        let mut report = ValidationReport::default();
        self.check_table(&parsed, "", &mut report);
        report.unknown.sort();
        report.deprecated.sort();
        Ok(report)
    }

    /// Recursively checks a TOML table for unknown and deprecated fields
    fn check_table(&self, table: &toml::Value, prefix: &str, report: &mut ValidationReport) {
        let toml::Value::Table(map) = table else {
            return;
        };

        for (key, value) in map {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if self.deprecated_fields.contains(full_key.as_str()) {
                report.deprecated.push(full_key);
            } else if self.known_fields.contains(full_key.as_str()) {
                continue;
            } else if let toml::Value::Table(_) = value {
                self.check_table(value, &full_key, report);
            } else {
                report.unknown.push(full_key);
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
