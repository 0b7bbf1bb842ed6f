//! The `init` delegate: render a blueprint into the project directory

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use hatch_blueprints::BlueprintRenderer;
use hatch_commands::{CommandOutput, Invocable};
use hatch_core::{BlueprintRegistry, CommandOptions, Error, LookupOptions, ProjectMarker, PROJECT_MARKER};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::output::{self, FileAction};

/// Generates a blueprint's files into a directory
///
/// Understands `name`, `blueprint`, `directory`, `dryRun`, `force` and
/// `skipGit`; every other option is only visible to the blueprint's templates.
/// A successful run leaves a `.hatch.yaml` marker at the project root.
pub struct InitCommand {
    blueprints: Arc<dyn BlueprintRegistry>,
    renderer: BlueprintRenderer,
    /// `None` writes into the current working directory
    target_dir: Option<Utf8PathBuf>,
}

impl InitCommand {
    pub fn new(blueprints: Arc<dyn BlueprintRegistry>) -> Self {
        Self {
            blueprints,
            renderer: BlueprintRenderer::new(),
            target_dir: None,
        }
    }

    /// Write into `dir` instead of the current working directory
    #[cfg(test)]
    pub fn with_target_dir(mut self, dir: Utf8PathBuf) -> Self {
        self.target_dir = Some(dir);
        self
    }

    /// Directory the blueprint is generated into
    ///
    /// A dry run of `new` never steps into the project directory, so the
    /// `directory` option is resolved against the working directory instead.
    fn root(&self, options: &CommandOptions) -> Result<Utf8PathBuf> {
        let base = match &self.target_dir {
            Some(dir) => dir.clone(),
            None => {
                let cwd = std::env::current_dir().context("Failed to read working directory")?;
                Utf8PathBuf::from_path_buf(cwd)
                    .map_err(|p| anyhow!("Working directory is not UTF-8: {}", p.display()))?
            }
        };

        match options.get_str("directory") {
            Some(dir) if options.flag("dryRun") && !dir.is_empty() && dir != "." => {
                Ok(base.join(dir))
            }
            _ => Ok(base),
        }
    }
}

#[async_trait]
impl Invocable for InitCommand {
    async fn run(&self, options: CommandOptions) -> Result<CommandOutput> {
        let name = options
            .get_str("name")
            .ok_or_else(|| anyhow!("The `init` command requires a project name"))?;
        let blueprint = options.get_str("blueprint").unwrap_or("app");

        let descriptor = self
            .blueprints
            .lookup(blueprint, &LookupOptions::ignoring_extra_args())?
            .ok_or_else(|| Error::blueprint_not_found(blueprint))?;

        let dry_run = options.flag("dryRun");
        let force = options.flag("force");
        let root = self.root(&options)?;
        let files = self.renderer.render(&descriptor, &options)?;
        info!(
            "Rendering blueprint '{}' ({} files) into {}",
            descriptor.name,
            files.len(),
            root
        );

        let mut created = Vec::new();
        let mut skipped = Vec::new();
        for file in files {
            let path = root.join(&file.path);
            if path.exists() && !force {
                output::file_action(FileAction::Skip, &file.path);
                skipped.push(file.path);
                continue;
            }

            let action = if path.exists() {
                FileAction::Overwrite
            } else {
                FileAction::Create
            };
            output::file_action(action, &file.path);
            if !dry_run {
                write_file(&path, &file.contents).await?;
            }
            created.push(file.path);
        }

        let marker = ProjectMarker::new(name, &descriptor.name);
        if root.join(PROJECT_MARKER).exists() {
            output::file_action(FileAction::Overwrite, PROJECT_MARKER);
        } else {
            output::file_action(FileAction::Create, PROJECT_MARKER);
        }
        if !dry_run {
            marker.write(&root)?;
        }
        created.push(PROJECT_MARKER.to_string());

        if !dry_run && !options.flag("skipGit") {
            init_git(&root).await;
        }

        Ok(json!({
            "project": name,
            "blueprint": descriptor.name,
            "directory": root.as_str(),
            "dryRun": dry_run,
            "files": created,
            "skipped": skipped,
        }))
    }
}

async fn write_file(path: &Utf8Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path))?;
    debug!("Wrote {}", path);
    Ok(())
}

/// Initialize a git repository; failures are reported, not fatal
async fn init_git(root: &Utf8Path) {
    let pb = output::spinner("Initializing git repository...");
    let status = tokio::process::Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(root)
        .status()
        .await;
    pb.finish_and_clear();

    match status {
        Ok(s) if s.success() => info!("Initialized git repository in {}", root),
        Ok(s) => {
            warn!("git init exited with {}", s);
            output::warning("Could not initialize a git repository");
        }
        Err(e) => {
            warn!("Failed to run git: {}", e);
            output::warning("git not found, skipping repository initialization");
        }
    }
}
