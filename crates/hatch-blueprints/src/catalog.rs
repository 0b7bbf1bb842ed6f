//! Blueprint catalog loaded from embedded and on-disk YAML files.
//!
//! Loads blueprints from:
//! - Embedded blueprints.yaml (compiled into binary)
//! - Every `*.yaml` file in the configured blueprint directories, in order;
//!   a later definition replaces an earlier one of the same name

use camino::Utf8Path;
use hatch_core::{BlueprintDescriptor, BlueprintRegistry, Error, LookupOptions, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::parser::{BlueprintDefinition, BlueprintFile};

/// Embedded default blueprints
const EMBEDDED_YAML: &str = include_str!("../templates/blueprints.yaml");

/// Name-keyed blueprint catalog
#[derive(Debug, Clone, Default)]
pub struct BlueprintCatalog {
    blueprints: BTreeMap<String, BlueprintDefinition>,
}

impl BlueprintCatalog {
    /// Load blueprints from embedded resources
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_YAML)
    }

    /// Load blueprints from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut catalog = Self::default();
        catalog.overlay(BlueprintFile::from_yaml(yaml)?);
        Ok(catalog)
    }

    /// Load embedded blueprints, then every `*.yaml` file in `dirs`
    pub fn load<P: AsRef<Utf8Path>>(dirs: &[P]) -> Result<Self> {
        let mut catalog = Self::from_embedded()?;
        for dir in dirs {
            catalog.load_dir(dir.as_ref())?;
        }
        info!("Loaded {} blueprints", catalog.blueprints.len());
        Ok(catalog)
    }

    /// Overlay every `*.yaml` file in `dir`, in file-name order
    ///
    /// A directory that does not exist is skipped.
    pub fn load_dir(&mut self, dir: &Utf8Path) -> Result<()> {
        if !dir.is_dir() {
            debug!("Blueprint directory {} does not exist, skipping", dir);
            return Ok(());
        }

        let mut files = Vec::new();
        for entry in dir.read_dir_utf8()? {
            let path = entry?.into_path();
            if path.extension() == Some("yaml") && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        for path in files {
            debug!("Loading blueprints from {}", path);
            let yaml = std::fs::read_to_string(&path)?;
            let file = BlueprintFile::from_yaml(&yaml).map_err(|e| {
                Error::invalid_blueprint(path.as_str(), e.to_string())
            })?;
            self.overlay(file);
        }
        Ok(())
    }

    /// Add or replace blueprints from a parsed file
    pub fn overlay(&mut self, file: BlueprintFile) {
        for (name, blueprint) in file.blueprints {
            if self.blueprints.insert(name.clone(), blueprint).is_some() {
                debug!("Blueprint '{}' overridden", name);
            }
        }
    }

    /// Resolve a name or alias (case-insensitive) to its canonical name
    pub fn resolve_name(&self, input: &str) -> Option<String> {
        let wanted = input.to_lowercase();

        if let Some(name) = self.blueprints.keys().find(|k| k.to_lowercase() == wanted) {
            return Some(name.clone());
        }

        self.blueprints
            .iter()
            .find(|(_, b)| b.aliases.iter().any(|a| a.to_lowercase() == wanted))
            .map(|(name, _)| name.clone())
    }

    /// Get a blueprint definition by name or alias
    pub fn get(&self, input: &str) -> Option<(String, &BlueprintDefinition)> {
        let name = self.resolve_name(input)?;
        let blueprint = self.blueprints.get(&name)?;
        Some((name, blueprint))
    }

    /// Canonical names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.blueprints.keys().map(String::as_str).collect()
    }
}

impl BlueprintRegistry for BlueprintCatalog {
    fn lookup(&self, name: &str, options: &LookupOptions) -> Result<Option<BlueprintDescriptor>> {
        let Some((canonical, blueprint)) = self.get(name) else {
            return Ok(None);
        };

        if !options.ignore_extra_args {
            let undeclared = options
                .extra_args
                .iter()
                .filter_map(|arg| arg.strip_prefix("--"))
                .map(|flag| flag.split_once('=').map_or(flag, |(f, _)| f))
                .find(|flag| !flag.is_empty() && !blueprint.declares(flag));
            if let Some(flag) = undeclared {
                return Err(Error::unknown_blueprint_argument(
                    &canonical,
                    format!("--{}", flag),
                ));
            }
        }

        Ok(Some(blueprint.to_descriptor(&canonical)))
    }

    fn list(&self) -> Vec<BlueprintDescriptor> {
        self.blueprints
            .iter()
            .map(|(name, b)| b.to_descriptor(name))
            .collect()
    }
}
