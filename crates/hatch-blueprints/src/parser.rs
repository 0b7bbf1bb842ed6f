//! YAML blueprint parsing and structure definitions.
//!
//! Parses blueprint files into strongly-typed Rust structures.

use hatch_core::{BlueprintDescriptor, Error, OptionSchema, OptionSpec, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A blueprint file: one or more named blueprints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintFile {
    pub version: String,
    #[serde(default)]
    pub blueprints: BTreeMap<String, BlueprintDefinition>,
}

/// Individual blueprint definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlueprintDefinition {
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, rename = "available-options")]
    pub available_options: Vec<OptionSpec>,
    /// Relative path template → content template
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl BlueprintFile {
    /// Parse and validate a blueprint file from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: Self = serde_yaml_ng::from_str(yaml)?;
        for (name, blueprint) in &file.blueprints {
            blueprint.validate(name)?;
        }
        Ok(file)
    }
}

impl BlueprintDefinition {
    /// Reject definitions that would produce an ambiguous option schema
    pub fn validate(&self, name: &str) -> Result<()> {
        let mut seen = OptionSchema::new();
        for option in &self.available_options {
            if option.name.is_empty() || option.name.starts_with('-') {
                return Err(Error::invalid_blueprint(
                    name,
                    format!("invalid option name '{}'", option.name),
                ));
            }
            if !seen.push(option.clone()) {
                return Err(Error::invalid_blueprint(
                    name,
                    format!("option '{}' declared twice", option.name),
                ));
            }
        }
        Ok(())
    }

    /// Descriptor handed out by the registry
    pub fn to_descriptor(&self, name: &str) -> BlueprintDescriptor {
        BlueprintDescriptor {
            name: name.to_string(),
            description: self.description.clone(),
            available_options: self.available_options.clone(),
            files: self.files.clone(),
        }
    }

    /// Check whether `flag` (without dashes) names one of this blueprint's options
    pub fn declares(&self, flag: &str) -> bool {
        self.available_options.iter().any(|o| o.matches(flag))
    }
}
