//! Names command implementation
//!
//! Derives every case form of one identifier.

use anyhow::{Context, Result};
use blueprint_strings::Case;
use serde::Serialize;
use tracing::debug;

/// Every derived form of one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    /// Identifier as given (e.g., "user profile")
    pub name: String,
    /// e.g., "user_profile"
    pub decamelized: String,
    /// e.g., "user-profile"
    pub dasherized: String,
    /// e.g., "userProfile"
    pub camelized: String,
    /// e.g., "UserProfile"
    pub classified: String,
    /// e.g., "user_profile"
    pub underscored: String,
    /// e.g., "User profile"
    pub capitalized: String,
    /// e.g., "userProfiles"
    pub pluralized: String,
}

impl NameSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            decamelized: Case::Decamelize.apply(name),
            dasherized: Case::Dasherize.apply(name),
            camelized: Case::Camelize.apply(name),
            classified: Case::Classify.apply(name),
            underscored: Case::Underscore.apply(name),
            capitalized: Case::Capitalize.apply(name),
            pluralized: Case::Pluralize.apply(name),
        }
    }

    /// The form produced by `case`
    pub fn get(&self, case: Case) -> &str {
        match case {
            Case::Decamelize => &self.decamelized,
            Case::Dasherize => &self.dasherized,
            Case::Camelize => &self.camelized,
            Case::Classify => &self.classified,
            Case::Underscore => &self.underscored,
            Case::Capitalize => &self.capitalized,
            Case::Pluralize => &self.pluralized,
        }
    }

    /// Plain-text listing, one `case: value` line per conversion
    pub fn to_text(&self) -> String {
        let mut text = format!("name: {}\n", self.name);
        for case in Case::ALL {
            text.push_str(&format!("{case}: {}\n", self.get(case)));
        }
        text
    }
}

/// Run the names command
pub fn run(name: &str, json: bool) -> Result<()> {
    debug!(name, json, "deriving names");
    let names = NameSet::new(name);

    if json {
        let output = serde_json::to_string_pretty(&names).context("Failed to encode names")?;
        println!("{output}");
    } else {
        print!("{}", names.to_text());
    }

    Ok(())
}
