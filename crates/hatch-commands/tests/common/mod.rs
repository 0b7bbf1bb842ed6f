//! Common test utilities for hatch-commands
//!
//! Mock implementations of the pipeline's collaborators that record what they
//! were asked to do instead of touching the filesystem.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use hatch_commands::{
    CommandOutput, CommandPipeline, CommandRegistry, DirectoryRequest, Invocable, Task,
    INIT_COMMAND,
};
use hatch_core::{
    BlueprintDescriptor, BlueprintRegistry, CommandOptions, LookupOptions, OptionSpec, OptionType,
};
use std::sync::{Arc, Mutex};

/// Turn string literals into an argv vector
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Blueprint registry returning a fixed descriptor for a single name
pub struct StubBlueprints {
    name: String,
    descriptor: Option<BlueprintDescriptor>,
    lookups: Mutex<Vec<(String, LookupOptions)>>,
}

impl StubBlueprints {
    /// Registry that knows nothing
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            descriptor: None,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Registry where `name` declares the given options
    pub fn with_options(name: &str, options: Vec<OptionSpec>) -> Self {
        Self {
            name: name.to_string(),
            descriptor: Some(BlueprintDescriptor {
                name: name.to_string(),
                available_options: options,
                ..Default::default()
            }),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// `app` blueprint declaring `custom-blueprint-option`
    pub fn custom_app() -> Self {
        Self::with_options(
            "app",
            vec![OptionSpec::new("custom-blueprint-option", OptionType::String)],
        )
    }

    pub fn lookups(&self) -> Vec<(String, LookupOptions)> {
        self.lookups.lock().unwrap().clone()
    }
}

impl BlueprintRegistry for StubBlueprints {
    fn lookup(
        &self,
        name: &str,
        options: &LookupOptions,
    ) -> hatch_core::Result<Option<BlueprintDescriptor>> {
        self.lookups
            .lock()
            .unwrap()
            .push((name.to_string(), options.clone()));
        if name == self.name {
            Ok(self.descriptor.clone())
        } else {
            Ok(None)
        }
    }

    fn list(&self) -> Vec<BlueprintDescriptor> {
        self.descriptor.iter().cloned().collect()
    }
}

/// Shared journal of which stages ran, in order
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Directory task that records its request and optionally fails
pub struct MockDirectoryTask {
    request: DirectoryRequest,
    journal: Journal,
    fail_with: Option<String>,
}

#[async_trait]
impl Task for MockDirectoryTask {
    fn name(&self) -> &str {
        "create-and-step-into-directory"
    }

    async fn run(&self) -> Result<()> {
        self.journal.record(format!(
            "task:{}:{}",
            self.request.directory, self.request.dry_run
        ));
        match &self.fail_with {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

/// Delegate command that records the options it received
pub struct MockInit {
    journal: Journal,
    received: Mutex<Option<CommandOptions>>,
    result: std::result::Result<CommandOutput, String>,
}

impl MockInit {
    pub fn resolving(journal: Journal, value: CommandOutput) -> Arc<Self> {
        Arc::new(Self {
            journal,
            received: Mutex::new(None),
            result: Ok(value),
        })
    }

    pub fn rejecting(journal: Journal, message: &str) -> Arc<Self> {
        Arc::new(Self {
            journal,
            received: Mutex::new(None),
            result: Err(message.to_string()),
        })
    }

    pub fn received(&self) -> Option<CommandOptions> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invocable for MockInit {
    async fn run(&self, options: CommandOptions) -> Result<CommandOutput> {
        self.journal.record("init");
        *self.received.lock().unwrap() = Some(options);
        match &self.result {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(anyhow!(message.clone())),
        }
    }
}

/// Pipeline wired to mocks
pub struct Harness {
    pub pipeline: CommandPipeline,
    pub blueprints: Arc<StubBlueprints>,
    pub init: Arc<MockInit>,
    pub journal: Journal,
}

/// Build a pipeline whose directory task succeeds (or fails with `task_error`)
pub fn harness(
    blueprints: StubBlueprints,
    init: impl FnOnce(Journal) -> Arc<MockInit>,
    task_error: Option<&str>,
) -> Harness {
    let journal = Journal::default();
    let blueprints = Arc::new(blueprints);
    let init = init(journal.clone());

    let task_journal = journal.clone();
    let fail_with = task_error.map(str::to_string);
    let factory = move |request: DirectoryRequest| -> Box<dyn Task> {
        Box::new(MockDirectoryTask {
            request,
            journal: task_journal.clone(),
            fail_with: fail_with.clone(),
        })
    };

    let registry: Arc<dyn BlueprintRegistry> = blueprints.clone();
    let commands = CommandRegistry::new().with(INIT_COMMAND, init.clone());
    let pipeline = CommandPipeline::new(registry, commands, Arc::new(factory));

    Harness {
        pipeline,
        blueprints,
        init,
        journal,
    }
}
