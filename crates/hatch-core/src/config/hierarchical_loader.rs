//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Global config (~/.hatch/config.yaml), or an explicit file passed by the caller
//! 3. Environment variables (HATCH_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use tracing::debug;

/// Name of the global config file inside the config directory
const CONFIG_FILE: &str = "config.yaml";

/// Resolved hatch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HatchConfig {
    /// Blueprint used by `hatch new` when `--blueprint` is not given
    pub default_blueprint: String,

    /// Extra directories scanned for `*.yaml` blueprint files
    pub blueprint_paths: Vec<Utf8PathBuf>,

    /// Skip `git init` in freshly generated projects
    pub skip_git: bool,
}

impl Default for HatchConfig {
    fn default() -> Self {
        Self {
            default_blueprint: "app".to_string(),
            blueprint_paths: Vec::new(),
            skip_git: false,
        }
    }
}

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at ~/.hatch
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the standard config directory (~/.hatch)
    ///
    /// HOME wins over `dirs::home_dir()` so containers and tests can redirect it.
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;

        Ok(home.join(".hatch"))
    }

    /// Load configuration: defaults, then the global file if present, then env overrides
    pub fn load(&self) -> Result<HatchConfig> {
        let path = self.config_dir.join(CONFIG_FILE);
        let config = if path.exists() {
            self.load_yaml_file(&path)?
        } else {
            debug!("No global config at {}, using defaults", path);
            HatchConfig::default()
        };

        self.apply_env_overrides(config)
    }

    /// Load configuration from an explicit file, then apply env overrides
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from(&self, path: &Utf8Path) -> Result<HatchConfig> {
        if !path.exists() {
            return Err(Error::config_not_found(path.as_str()));
        }
        let config = self.load_yaml_file(path)?;
        self.apply_env_overrides(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(&self, path: &Utf8Path) -> Result<HatchConfig> {
        debug!("Loading config from {}", path);
        let content = fs::read_to_string(path)?;
        let config: HatchConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: HatchConfig) -> Result<HatchConfig> {
        if let Ok(val) = env::var("HATCH_DEFAULT_BLUEPRINT") {
            if !val.trim().is_empty() {
                config.default_blueprint = val.trim().to_string();
            }
        }

        if let Some(val) = env::var_os("HATCH_BLUEPRINT_PATHS") {
            config.blueprint_paths = env::split_paths(&val)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| {
                    Utf8PathBuf::from_path_buf(p).map_err(|p| {
                        Error::invalid_config(format!(
                            "HATCH_BLUEPRINT_PATHS contains a non UTF-8 path: {}",
                            p.display()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
        }

        if let Ok(val) = env::var("HATCH_SKIP_GIT") {
            config.skip_git = val
                .parse()
                .map_err(|_| Error::invalid_config("HATCH_SKIP_GIT must be true or false"))?;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
