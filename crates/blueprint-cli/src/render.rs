//! Render command implementation
//!
//! Substitutes `{{placeholder}}` tokens in a template with names derived from
//! one identifier. A placeholder is one of:
//!
//! - `{{name}}`: the identifier as given
//! - `{{<case>}}`: any [`Case`] name or alias, e.g. `{{classify}}`, `{{kebab}}`
//! - `{{feature-path}}`: relative path back to the feature folder
//! - `{{group-path}}`: the name under its group folder

use crate::config::Defaults;
use crate::error::{CliError, CliResult};
use crate::feature::{FeatureLayout, LayoutOptions};
use crate::names::NameSet;
use anyhow::{Context, Result};
use blueprint_strings::Case;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

// ============================================================================
// Template Context
// ============================================================================

/// Values available to a template
pub struct TemplateContext {
    names: NameSet,
    layout: FeatureLayout,
}

impl TemplateContext {
    pub fn new(name: &str, options: &LayoutOptions) -> Self {
        Self {
            names: NameSet::new(name),
            layout: FeatureLayout::resolve(name, options),
        }
    }

    /// Value for a placeholder key, if the key is known
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(self.names.name.as_str()),
            "feature-path" => Some(self.layout.feature_path.as_str()),
            "group-path" => Some(self.layout.grouped_name.as_str()),
            _ => key.parse::<Case>().ok().map(|case| self.names.get(case)),
        }
    }

    /// Apply placeholder substitutions to template content
    pub fn apply(&self, template: &str) -> CliResult<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            let body = &rest[start + OPEN.len()..];
            let end = body
                .find(CLOSE)
                .ok_or(CliError::UnterminatedPlaceholder {
                    offset: offset + start,
                })?;

            let key = body[..end].trim();
            let value = self
                .lookup(key)
                .ok_or_else(|| CliError::UnknownPlaceholder {
                    key: key.to_string(),
                    offset: offset + start,
                })?;

            rendered.push_str(&rest[..start]);
            rendered.push_str(value);

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Run the render command
pub fn run(
    template: &Path,
    name: &str,
    output: Option<&Path>,
    options: LayoutOptions,
    defaults: &Defaults,
) -> Result<()> {
    let content = fs::read_to_string(template)
        .with_context(|| format!("Failed to read template: {}", template.display()))?;

    let ctx = TemplateContext::new(name, &options.merge(defaults));
    let rendered = ctx
        .apply(&content)
        .with_context(|| format!("Failed to render template: {}", template.display()))?;
    debug!(template = %template.display(), bytes = rendered.len(), "rendered template");

    match output {
        Some(path) => {
            write_new(path, &rendered)?;
            info!(output = %path.display(), "wrote rendered template");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Write `content` to a file that must not exist yet
fn write_new(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            return Err(CliError::OutputExists(path.to_path_buf()).into());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}
