//! Project name validation
//!
//! Rules are checked in order and the first match wins:
//! 1. `.` is rejected with a pointer to `hatch init`
//! 2. Reserved names (case-insensitive)
//! 3. Names containing a period
//! 4. Names starting with a digit

/// Names that collide with tooling directories or packages
const RESERVED_NAMES: &[&str] = &["test", "ember", "ember-cli", "vendor"];

/// Message for `hatch new .`
pub const IN_PLACE_MESSAGE: &str =
    "Trying to generate an application structure in this directory? Use `hatch init` instead.";

/// Outcome of validating a project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameVerdict {
    Valid,
    Invalid(String),
}

impl NameVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate a project name exactly as the user typed it
pub fn validate_project_name(name: &str) -> NameVerdict {
    if name == "." {
        return NameVerdict::Invalid(IN_PLACE_MESSAGE.to_string());
    }

    let lowered = name.to_lowercase();
    if RESERVED_NAMES.contains(&lowered.as_str())
        || name.contains('.')
        || name.starts_with(|c: char| c.is_ascii_digit())
    {
        return NameVerdict::Invalid(unsupported_name_message(name));
    }

    NameVerdict::Valid
}

fn unsupported_name_message(name: &str) -> String {
    format!("We currently do not support a name of `{}`.", name)
}
