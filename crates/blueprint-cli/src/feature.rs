//! Path command implementation
//!
//! Resolves where a generated file sits relative to its feature, merging
//! command-line flags over blueprint.toml defaults.

use crate::config::Defaults;
use anyhow::Result;
use blueprint_strings::{feature_path, group};
use tracing::debug;

/// Base path used when neither the flag nor the config sets one
pub const DEFAULT_PATH: &str = "src/app";

/// Layout flags for the path command; `None` defers to config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub path: Option<String>,
    pub group: Option<bool>,
    pub flat: Option<bool>,
    pub group_name: Option<String>,
}

impl LayoutOptions {
    /// Fill every unset option from `defaults`
    pub fn merge(self, defaults: &Defaults) -> Self {
        Self {
            path: self.path.or_else(|| defaults.path.clone()),
            group: self.group.or(defaults.group),
            flat: self.flat.or(defaults.flat),
            group_name: self.group_name.or_else(|| defaults.group_name.clone()),
        }
    }
}

/// Resolved paths for one feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    /// Relative path back to the feature folder
    pub feature_path: String,
    /// Name prefixed with its group folder, if grouped
    pub grouped_name: String,
}

impl FeatureLayout {
    pub fn resolve(name: &str, options: &LayoutOptions) -> Self {
        let path = options.path.as_deref().unwrap_or(DEFAULT_PATH);
        Self {
            feature_path: feature_path(options.group, options.flat, path, name),
            grouped_name: group(name, options.group_name.as_deref()),
        }
    }
}

/// Collapse a `--x` / `--no-x` flag pair into an optional value
pub fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Run the path command
pub fn run(name: &str, options: LayoutOptions, defaults: &Defaults) -> Result<()> {
    let options = options.merge(defaults);
    debug!(?options, "resolving feature layout");

    let layout = FeatureLayout::resolve(name, &options);

    println!("{}", layout.feature_path);
    if options.group_name.is_some() {
        println!("{}", layout.grouped_name);
    }

    Ok(())
}
