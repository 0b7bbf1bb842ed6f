//! Blueprint descriptors and the registry they are looked up from

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::option_types::OptionSpec;
use crate::error::Result;

/// A resolved blueprint, as reported by a [`BlueprintRegistry`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintDescriptor {
    /// Canonical blueprint name (aliases already resolved)
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Extra options the blueprint adds to the invoking command
    #[serde(default)]
    pub available_options: Vec<OptionSpec>,

    /// Relative path template → content template
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

/// Options controlling a registry lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Tolerate arguments in `extra_args` the blueprint does not declare
    pub ignore_extra_args: bool,

    /// Raw invocation arguments, checked against the blueprint's options
    /// unless `ignore_extra_args` is set
    pub extra_args: Vec<String>,
}

impl LookupOptions {
    /// Lookup that never fails because of unrelated flags on the invocation
    pub fn ignoring_extra_args() -> Self {
        Self {
            ignore_extra_args: true,
            extra_args: Vec::new(),
        }
    }

    /// Attach the raw invocation arguments
    pub fn with_extra_args(mut self, args: &[String]) -> Self {
        self.extra_args = args.to_vec();
        self
    }
}

/// Source of blueprints, queried by name
///
/// Implementations are read-only from the caller's point of view and may be
/// shared across invocations.
pub trait BlueprintRegistry: Send + Sync {
    /// Look up a blueprint by name or alias
    ///
    /// `Ok(None)` means no blueprint of that name exists.
    fn lookup(&self, name: &str, options: &LookupOptions) -> Result<Option<BlueprintDescriptor>>;

    /// All known blueprints, sorted by name
    fn list(&self) -> Vec<BlueprintDescriptor>;
}
