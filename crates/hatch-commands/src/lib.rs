//! # hatch-commands
//!
//! The validation and delegation pipeline behind `hatch new`:
//! - Project name validation ([`validation`]) and the enclosing-project guard
//! - Blueprint option composition ([`compose`]) and argv parsing ([`args`])
//! - Single-task execution ([`task`]) and command delegation ([`delegate`])
//! - The [`CommandPipeline`] that runs them in order, stopping at the first failure
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use hatch_commands::{CommandPipeline, CommandRegistry, DirectoryRequest, Task};
//! use hatch_core::BlueprintRegistry;
//!
//! # async fn example(
//! #     blueprints: Arc<dyn BlueprintRegistry>,
//! #     commands: CommandRegistry,
//! #     make_task: fn(DirectoryRequest) -> Box<dyn Task>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = CommandPipeline::new(blueprints, commands, Arc::new(make_task));
//! let argv = vec!["my-app".to_string(), "--skip-git".to_string()];
//! let output = pipeline.validate_and_run(&argv).await?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod compose;
pub mod delegate;
pub mod error;
pub mod pipeline;
pub mod task;
pub mod validation;

pub use delegate::{CommandOutput, CommandRegistry, Invocable, INIT_COMMAND};
pub use error::{PipelineError, Result};
pub use pipeline::{new_command_options, CommandPipeline, PipelineState, ProjectDetector};
pub use task::{DirectoryRequest, DirectoryTaskFactory, Task};
pub use validation::{validate_project_name, NameVerdict};
