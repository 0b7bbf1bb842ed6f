//! Option schema and option value types
//!
//! An [`OptionSchema`] is the ordered set of options a command recognizes.
//! Parsing an invocation against a schema yields [`CommandOptions`], keyed by
//! the camel-cased form of each option name (`skip-git` becomes `skipGit`).

use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declared type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Free-form string value
    #[default]
    String,
    /// Flag; `--flag`, `--no-flag` or `--flag=false`
    Boolean,
    /// Integer value
    Number,
    /// Filesystem path, kept as a string
    Path,
}

impl OptionType {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed (or default) option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(i64),
    String(String),
}

impl OptionValue {
    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a bool, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Declaration of a single command-line option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Dashed option name as typed on the command line (without `--`)
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: OptionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<OptionValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionSpec {
    /// Create an option with no default, aliases or description
    pub fn new(name: impl Into<String>, kind: OptionType) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            aliases: Vec::new(),
            description: None,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Add a short alias (`b` for `-b`)
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the help description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Key under which a parsed value of this option is stored
    pub fn key(&self) -> String {
        option_key(&self.name)
    }

    /// Check whether `token` names this option, directly or through an alias
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }
}

/// Camel-case key for a dashed option name
pub fn option_key(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Ordered set of options with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSchema {
    options: Vec<OptionSpec>,
}

impl OptionSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option unless one with the same name is already declared
    ///
    /// Returns `false` when the option was dropped as a duplicate.
    pub fn push(&mut self, option: OptionSpec) -> bool {
        if self.contains(&option.name) {
            return false;
        }
        self.options.push(option);
        true
    }

    /// Builder form of [`push`](Self::push)
    pub fn with(mut self, option: OptionSpec) -> Self {
        self.push(option);
        self
    }

    /// Check whether an option with this exact name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.options.iter().any(|o| o.name == name)
    }

    /// Get an option by exact name
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Resolve a command-line token to an option by name, then by alias
    pub fn resolve(&self, token: &str) -> Option<&OptionSpec> {
        self.get(token)
            .or_else(|| self.options.iter().find(|o| o.matches(token)))
    }

    /// Iterate options in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter()
    }

    /// Option names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<OptionSpec> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = OptionSpec>>(iter: I) -> Self {
        let mut schema = Self::new();
        for option in iter {
            schema.push(option);
        }
        schema
    }
}

/// Option values handed to a command's `run`, keyed by camel-cased option name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandOptions(BTreeMap<String, OptionValue>);

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for that key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get a string value; `None` when absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(OptionValue::as_str)
    }

    /// Get a bool value; absent or non-bool values read as `false`
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, OptionValue)> for CommandOptions {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
