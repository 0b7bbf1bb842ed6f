//! `hatch new` command handler

use anyhow::Result;
use camino::Utf8Path;
use hatch_commands::{new_command_options, CommandOutput, CommandPipeline, DirectoryRequest, Task};
use std::sync::Arc;

use super::{inside_project, CommandContext};
use crate::cli::NewArgs;
use crate::output;
use crate::tasks::CreateAndStepIntoDirectory;

/// Create a project directory and generate a blueprint into it
pub async fn run(args: NewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let ctx = CommandContext::load(config_path)?;
    let summary = generate(&ctx, &args.args).await?;

    output::summary(&summary);
    if summary["dryRun"].as_bool() == Some(true) {
        output::info("Dry run: nothing was written");
    } else {
        output::success("Project created");
        if let Some(directory) = summary["directory"].as_str() {
            println!();
            println!("Next steps:");
            println!("  cd {}", directory);
        }
    }
    Ok(())
}

/// Run the `new` pipeline with configured defaults and the real collaborators
pub(crate) async fn generate(ctx: &CommandContext, argv: &[String]) -> Result<CommandOutput> {
    let make_task = |request: DirectoryRequest| -> Box<dyn Task> {
        Box::new(CreateAndStepIntoDirectory::from(request))
    };
    let mut pipeline = CommandPipeline::new(
        ctx.blueprints.clone(),
        ctx.command_registry(),
        Arc::new(make_task),
    )
    .with_base_options(new_command_options(
        &ctx.config.default_blueprint,
        ctx.config.skip_git,
    ))
    .with_project_detector(Arc::new(inside_project));

    pipeline.before_run(argv);
    Ok(pipeline.validate_and_run(argv).await?)
}
