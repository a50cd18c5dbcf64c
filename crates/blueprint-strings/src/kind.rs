//! Runtime selection of a conversion by name

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a case name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCaseError {
    #[error("unknown case: {0} (expected one of: {expected})", expected = Case::names())]
    Unknown(String),
}

/// A named string conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Decamelize,
    Dasherize,
    Camelize,
    Classify,
    Underscore,
    Capitalize,
    Pluralize,
}

impl Case {
    /// Every conversion, in declaration order
    pub const ALL: [Case; 7] = [
        Case::Decamelize,
        Case::Dasherize,
        Case::Camelize,
        Case::Classify,
        Case::Underscore,
        Case::Capitalize,
        Case::Pluralize,
    ];

    /// Canonical name, matching the function that implements the conversion
    pub fn name(self) -> &'static str {
        match self {
            Case::Decamelize => "decamelize",
            Case::Dasherize => "dasherize",
            Case::Camelize => "camelize",
            Case::Classify => "classify",
            Case::Underscore => "underscore",
            Case::Capitalize => "capitalize",
            Case::Pluralize => "pluralize",
        }
    }

    /// Apply the conversion to `input`
    pub fn apply(self, input: &str) -> String {
        match self {
            Case::Decamelize => crate::decamelize(input),
            Case::Dasherize => crate::dasherize(Some(input)),
            Case::Camelize => crate::camelize(input),
            Case::Classify => crate::classify(input),
            Case::Underscore => crate::underscore(input),
            Case::Capitalize => crate::capitalize(input),
            Case::Pluralize => crate::pluralize(input),
        }
    }

    fn names() -> String {
        Case::ALL
            .iter()
            .map(|case| case.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decamelize" => Ok(Case::Decamelize),
            "dasherize" | "kebab" => Ok(Case::Dasherize),
            "camelize" | "camel" => Ok(Case::Camelize),
            "classify" | "class" | "pascal" => Ok(Case::Classify),
            "underscore" | "snake" => Ok(Case::Underscore),
            "capitalize" => Ok(Case::Capitalize),
            "pluralize" | "plural" => Ok(Case::Pluralize),
            _ => Err(ParseCaseError::Unknown(s.to_string())),
        }
    }
}
