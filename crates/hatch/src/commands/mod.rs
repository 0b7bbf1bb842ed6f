//! CLI command implementations

pub mod blueprint;
pub mod init;
pub mod new;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use hatch_blueprints::BlueprintCatalog;
use hatch_commands::{CommandRegistry, INIT_COMMAND};
use hatch_core::{find_project_root, BlueprintRegistry, HatchConfig, HierarchicalConfigLoader};
use std::sync::Arc;

use crate::init_command::InitCommand;

/// Configuration and blueprints shared by every command
pub(crate) struct CommandContext {
    pub config: HatchConfig,
    pub blueprints: Arc<BlueprintCatalog>,
}

impl CommandContext {
    /// Load config (explicit file or ~/.hatch/config.yaml) and the blueprint catalog
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let loader = HierarchicalConfigLoader::new()?;
        let config = match config_path {
            Some(path) => loader.load_from(path)?,
            None => loader.load()?,
        };

        let blueprints = BlueprintCatalog::load(&config.blueprint_paths)
            .context("Failed to load blueprints")?;

        Ok(Self {
            config,
            blueprints: Arc::new(blueprints),
        })
    }

    /// Commands reachable by delegation
    pub fn command_registry(&self) -> CommandRegistry {
        let blueprints: Arc<dyn BlueprintRegistry> = self.blueprints.clone();
        CommandRegistry::new().with(INIT_COMMAND, Arc::new(InitCommand::new(blueprints)))
    }
}

/// Whether the working directory is inside a generated project
pub(crate) fn inside_project() -> bool {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| Utf8PathBuf::from_path_buf(cwd).ok())
        .and_then(|cwd| find_project_root(&cwd))
        .is_some()
}
