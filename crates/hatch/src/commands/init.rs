//! `hatch init` command handler

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use hatch_commands::args::{blueprint_from_args, parse_args};
use hatch_commands::compose::compose_options;
use hatch_commands::delegate::delegate;
use hatch_commands::{
    new_command_options, validate_project_name, CommandOutput, NameVerdict, PipelineError,
    INIT_COMMAND,
};
use hatch_core::OptionSchema;
use tracing::debug;

use super::CommandContext;
use crate::cli::InitArgs;
use crate::output;

/// Generate a blueprint into the current directory
pub async fn run(args: InitArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let ctx = CommandContext::load(config_path)?;
    let summary = initialize(&ctx, &args.args).await?;

    output::summary(&summary);
    if summary["dryRun"].as_bool() == Some(true) {
        output::info("Dry run: nothing was written");
    } else {
        output::success("Project initialized");
    }
    Ok(())
}

/// Compose options for the chosen blueprint and invoke the init delegate in place
pub(crate) async fn initialize(ctx: &CommandContext, argv: &[String]) -> Result<CommandOutput> {
    let base = init_command_options(&ctx.config.default_blueprint, ctx.config.skip_git);
    let blueprint =
        blueprint_from_args(argv).unwrap_or_else(|| ctx.config.default_blueprint.clone());
    let schema = compose_options(&base, &blueprint, argv, ctx.blueprints.as_ref());

    let parsed = parse_args(&schema, argv)?;
    let name = match parsed.positionals.first() {
        Some(name) => name.clone(),
        None => current_dir_name()?,
    };
    if let NameVerdict::Invalid(message) = validate_project_name(&name) {
        return Err(PipelineError::invalid_name(message).into());
    }
    debug!("Initializing '{}' with blueprint '{}'", name, blueprint);

    let mut options = parsed.options;
    options.insert("name", name.as_str());

    delegate(&ctx.command_registry(), INIT_COMMAND, options).await
}

/// `new` options without `--directory`; init always works in place
fn init_command_options(default_blueprint: &str, skip_git: bool) -> OptionSchema {
    new_command_options(default_blueprint, skip_git)
        .iter()
        .filter(|o| o.name != "directory")
        .cloned()
        .collect()
}

fn current_dir_name() -> Result<String> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    cwd.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Cannot derive a project name from {}", cwd.display()))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{args, context, enter};
    use super::*;
    use hatch_core::{ProjectMarker, PROJECT_MARKER};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_init_options_drop_directory() {
        let schema = init_command_options("app", false);
        assert!(!schema.contains("directory"));
        assert!(schema.contains("skip-git"));
        assert!(schema.contains("force"));
    }

    #[tokio::test]
    #[serial]
    async fn test_name_defaults_to_current_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("my-lib");
        std::fs::create_dir(&dir).unwrap();
        let _cwd = enter(&dir);

        let summary = initialize(&context(), &args(&["-b", "lib"])).await.unwrap();

        assert_eq!(summary["project"], "my-lib");
        assert_eq!(summary["blueprint"], "library");
        assert!(dir.join("src/my_lib.txt").is_file());
        assert!(dir.join(PROJECT_MARKER).is_file());
    }

    #[tokio::test]
    #[serial]
    async fn test_positional_name_is_validated() {
        let temp = TempDir::new().unwrap();
        let _cwd = enter(temp.path());

        let err = initialize(&context(), &args(&["123-app"])).await.unwrap_err();

        assert_eq!(err.to_string(), "We currently do not support a name of `123-app`.");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_init_works_inside_existing_project() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("my-app");
        std::fs::create_dir(&dir).unwrap();
        let root = camino::Utf8PathBuf::from_path_buf(dir.clone()).unwrap();
        ProjectMarker::new("my-app", "app").write(&root).unwrap();
        let _cwd = enter(&dir);

        let summary = initialize(&context(), &args(&["--blueprint", "library"]))
            .await
            .unwrap();

        assert_eq!(summary["blueprint"], "library");
        assert_eq!(ProjectMarker::read(&root).unwrap().blueprint, "library");
    }
}
