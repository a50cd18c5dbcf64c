//! blueprint.toml parsing and validation

use crate::error::{CliError, CliResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "blueprint.toml";

/// blueprint.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Defaults applied when the matching command-line flag is absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Base path of generated features
    #[serde(default)]
    pub path: Option<String>,

    /// Group generated files into per-kind folders
    #[serde(default)]
    pub group: Option<bool>,

    /// Put generated files directly in the feature folder
    #[serde(default)]
    pub flat: Option<bool>,

    /// Folder name used when grouping
    #[serde(default)]
    pub group_name: Option<String>,
}

impl BlueprintConfig {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit config file, or `blueprint.toml` from `dir` if present.
    ///
    /// A missing default file yields the empty configuration; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::from_file(default_path)
        } else {
            debug!("no config file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CliResult<()> {
        if let Some(path) = &self.defaults.path
            && path.is_empty()
        {
            return Err(CliError::InvalidConfig(
                "defaults.path cannot be empty".to_string(),
            ));
        }

        if let Some(group_name) = &self.defaults.group_name
            && group_name.contains('/')
        {
            return Err(CliError::InvalidConfig(format!(
                "defaults.group_name must be a single folder name, got {group_name:?}"
            )));
        }

        Ok(())
    }
}
