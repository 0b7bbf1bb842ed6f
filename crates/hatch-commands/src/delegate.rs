//! Command-to-command delegation through a name-keyed registry

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use hatch_core::CommandOptions;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Registry name of the command `new` hands off to
pub const INIT_COMMAND: &str = "init";

/// Value a command resolves with
pub type CommandOutput = serde_json::Value;

/// A command that can be invoked with a composed option set
#[async_trait]
pub trait Invocable: Send + Sync {
    async fn run(&self, options: CommandOptions) -> Result<CommandOutput>;
}

/// Commands available for delegation, keyed by name
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Invocable>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any previous one with the same name
    pub fn register(&mut self, name: impl Into<String>, command: Arc<dyn Invocable>) {
        self.commands.insert(name.into(), command);
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, name: impl Into<String>, command: Arc<dyn Invocable>) -> Self {
        self.register(name, command);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Invocable>> {
        self.commands.get(name).cloned()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

/// Invoke `target` with `options` and return its outcome as-is
pub async fn delegate(
    registry: &CommandRegistry,
    target: &str,
    options: CommandOptions,
) -> Result<CommandOutput> {
    let command = registry
        .resolve(target)
        .ok_or_else(|| anyhow!("Unknown command: {}", target))?;

    debug!("Delegating to '{}' with {} options", target, options.len());
    command.run(options).await
}
