//! The `new` command pipeline
//!
//! One [`CommandPipeline`] serves one invocation:
//!
//! ```text
//! Created → SchemaFinalized → Validating → TaskRunning → Delegating → Completed
//!                                  │             │             │
//!                                  └─────────────┴─────────────┴──→ Rejected
//! ```
//!
//! Stages never overlap and the first failure ends the run with that failure.

use hatch_core::{BlueprintRegistry, OptionSchema, OptionSpec, OptionType};
use std::sync::Arc;
use tracing::{debug, info};

use crate::args::{blueprint_from_args, parse_args};
use crate::compose::compose_options;
use crate::delegate::{delegate, CommandOutput, CommandRegistry, INIT_COMMAND};
use crate::error::{PipelineError, Result};
use crate::task::{run_task, DirectoryRequest, DirectoryTaskFactory};
use crate::validation::{validate_project_name, NameVerdict};

/// Where a pipeline is in its single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Created,
    SchemaFinalized,
    Validating,
    TaskRunning,
    Delegating,
    Completed,
    Rejected,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

/// Tells whether the working directory already belongs to a generated project
///
/// Closures `Fn() -> bool` implement this directly.
pub trait ProjectDetector: Send + Sync {
    fn inside_project(&self) -> bool;
}

impl<F> ProjectDetector for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn inside_project(&self) -> bool {
        self()
    }
}

/// Base options declared by `hatch new` itself
pub fn new_command_options(default_blueprint: &str, skip_git: bool) -> OptionSchema {
    OptionSchema::new()
        .with(
            OptionSpec::new("dry-run", OptionType::Boolean)
                .with_default(false)
                .with_alias("d")
                .with_description("Show what would be generated without writing anything"),
        )
        .with(
            OptionSpec::new("verbose", OptionType::Boolean)
                .with_default(false)
                .with_alias("v"),
        )
        .with(
            OptionSpec::new("blueprint", OptionType::String)
                .with_default(default_blueprint)
                .with_alias("b")
                .with_description("Blueprint to generate the project from"),
        )
        .with(
            OptionSpec::new("skip-git", OptionType::Boolean)
                .with_default(skip_git)
                .with_alias("sg")
                .with_description("Do not initialize a git repository"),
        )
        .with(
            OptionSpec::new("directory", OptionType::Path)
                .with_alias("dir")
                .with_description("Directory to create (defaults to the project name)"),
        )
        .with(
            OptionSpec::new("force", OptionType::Boolean)
                .with_default(false)
                .with_description("Overwrite files that already exist"),
        )
}

/// Validation and delegation pipeline behind `hatch new`
pub struct CommandPipeline {
    base: OptionSchema,
    schema: OptionSchema,
    blueprints: Arc<dyn BlueprintRegistry>,
    commands: CommandRegistry,
    directory_task: Arc<dyn DirectoryTaskFactory>,
    project_detector: Option<Arc<dyn ProjectDetector>>,
    state: PipelineState,
}

impl CommandPipeline {
    /// Create a pipeline with the default `new` options
    pub fn new(
        blueprints: Arc<dyn BlueprintRegistry>,
        commands: CommandRegistry,
        directory_task: Arc<dyn DirectoryTaskFactory>,
    ) -> Self {
        let base = new_command_options("app", false);
        Self {
            schema: base.clone(),
            base,
            blueprints,
            commands,
            directory_task,
            project_detector: None,
            state: PipelineState::Created,
        }
    }

    /// Replace the base option schema (e.g. with configured defaults)
    pub fn with_base_options(mut self, base: OptionSchema) -> Self {
        self.schema = base.clone();
        self.base = base;
        self
    }

    /// Refuse to run when `detector` reports an enclosing project
    pub fn with_project_detector(mut self, detector: Arc<dyn ProjectDetector>) -> Self {
        self.project_detector = Some(detector);
        self
    }

    /// Options recognized for this invocation
    pub fn available_options(&self) -> &OptionSchema {
        &self.schema
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Finalize the option schema before any argument is interpreted
    ///
    /// Looks up the blueprint named by `--blueprint` (or the base default) and
    /// merges its options. Safe to repeat: the schema is rebuilt from the base
    /// options each time.
    pub fn before_run(&mut self, argv: &[String]) {
        let blueprint = blueprint_from_args(argv).or_else(|| self.default_blueprint());

        self.schema = match blueprint {
            Some(name) => compose_options(&self.base, &name, argv, self.blueprints.as_ref()),
            None => self.base.clone(),
        };
        if !self.state.is_terminal() {
            self.transition(PipelineState::SchemaFinalized);
        }
    }

    /// Validate the invocation, create the project directory and hand off to `init`
    ///
    /// Resolves with whatever `init` resolves with. Runs [`before_run`](Self::before_run)
    /// first if the schema has not been finalized yet.
    pub async fn validate_and_run(&mut self, argv: &[String]) -> Result<CommandOutput> {
        if self.state.is_terminal() {
            return Err(PipelineError::AlreadyRun);
        }
        if self.state == PipelineState::Created {
            self.before_run(argv);
        }

        let outcome = self.execute(argv).await;
        match &outcome {
            Ok(_) => self.transition(PipelineState::Completed),
            Err(e) => {
                debug!("Pipeline rejected: {}", e);
                self.transition(PipelineState::Rejected);
            }
        }
        outcome
    }

    async fn execute(&mut self, argv: &[String]) -> Result<CommandOutput> {
        self.transition(PipelineState::Validating);

        if self
            .project_detector
            .as_ref()
            .is_some_and(|d| d.inside_project())
        {
            return Err(PipelineError::InsideProject);
        }

        let parsed = parse_args(&self.schema, argv)?;
        let project_name = parsed
            .positionals
            .first()
            .cloned()
            .ok_or(PipelineError::MissingName)?;

        if let NameVerdict::Invalid(message) = validate_project_name(&project_name) {
            return Err(PipelineError::invalid_name(message));
        }

        let mut options = parsed.options;
        options.insert("name", project_name.as_str());
        let directory = match options.get_str("directory") {
            Some(dir) if !dir.is_empty() => dir.to_string(),
            _ => {
                options.insert("directory", project_name.as_str());
                project_name.clone()
            }
        };

        let request = DirectoryRequest {
            project_name: project_name.clone(),
            directory,
            dry_run: options.flag("dryRun"),
        };

        self.transition(PipelineState::TaskRunning);
        let task = self.directory_task.create(request);
        run_task(task.as_ref()).await.map_err(PipelineError::Task)?;

        self.transition(PipelineState::Delegating);
        info!("Generating project '{}'", project_name);
        delegate(&self.commands, INIT_COMMAND, options)
            .await
            .map_err(PipelineError::Delegation)
    }

    fn default_blueprint(&self) -> Option<String> {
        self.base
            .get("blueprint")
            .and_then(|o| o.default.as_ref())
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command_options_order() {
        let schema = new_command_options("app", false);
        assert_eq!(
            schema.names(),
            vec!["dry-run", "verbose", "blueprint", "skip-git", "directory", "force"]
        );
    }

    #[test]
    fn test_new_command_options_use_configured_defaults() {
        let schema = new_command_options("library", true);
        let blueprint = schema.get("blueprint").and_then(|o| o.default.clone());
        let skip_git = schema.get("skip-git").and_then(|o| o.default.clone());

        assert_eq!(blueprint, Some("library".into()));
        assert_eq!(skip_git, Some(true.into()));
    }

    #[test]
    fn test_terminal_states() {
        assert!(PipelineState::Completed.is_terminal());
        assert!(PipelineState::Rejected.is_terminal());
        assert!(!PipelineState::Delegating.is_terminal());
        assert!(!PipelineState::Created.is_terminal());
    }
}
