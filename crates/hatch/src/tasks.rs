//! Filesystem tasks scheduled by the `new` pipeline

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use camino::Utf8PathBuf;
use hatch_commands::{DirectoryRequest, Task};
use tracing::{debug, info};

use crate::output;

/// Create the project directory and make it the working directory
///
/// Fails if the directory already exists with content. A dry run only reports.
#[derive(Debug, Clone)]
pub struct CreateAndStepIntoDirectory {
    project_name: String,
    directory: Utf8PathBuf,
    dry_run: bool,
}

impl From<DirectoryRequest> for CreateAndStepIntoDirectory {
    fn from(request: DirectoryRequest) -> Self {
        Self {
            project_name: request.project_name,
            directory: Utf8PathBuf::from(request.directory),
            dry_run: request.dry_run,
        }
    }
}

#[async_trait]
impl Task for CreateAndStepIntoDirectory {
    fn name(&self) -> &str {
        "create-and-step-into-directory"
    }

    async fn run(&self) -> Result<()> {
        if self.dry_run {
            info!("Dry run: would create {}", self.directory);
            output::info(&format!(
                "Creating a new project '{}' in {} (dry run)",
                self.project_name, self.directory
            ));
            return Ok(());
        }

        if self.directory.exists() {
            let occupied = !self.directory.is_dir()
                || self
                    .directory
                    .read_dir()
                    .with_context(|| format!("Failed to read directory {}", self.directory))?
                    .next()
                    .is_some();
            if occupied {
                bail!("Directory '{}' already exists.", self.directory);
            }
        }

        tokio::fs::create_dir_all(&self.directory)
            .await
            .with_context(|| format!("Failed to create directory {}", self.directory))?;
        std::env::set_current_dir(&self.directory)
            .with_context(|| format!("Failed to enter directory {}", self.directory))?;

        debug!("Working directory is now {}", self.directory);
        output::info(&format!(
            "Creating a new project '{}' in {}",
            self.project_name, self.directory
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn task(directory: Utf8PathBuf, dry_run: bool) -> CreateAndStepIntoDirectory {
        CreateAndStepIntoDirectory::from(DirectoryRequest {
            project_name: "foo".to_string(),
            directory: directory.into_string(),
            dry_run,
        })
    }

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path")
    }

    #[tokio::test]
    #[serial]
    async fn test_creates_and_enters_directory() {
        let temp = TempDir::new().unwrap();
        let original = std::env::current_dir().unwrap();
        let target = utf8_dir(&temp).join("foo");

        let result = task(target.clone(), false).run().await;
        let cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(&original).unwrap();

        result.unwrap();
        assert!(target.is_dir());
        assert_eq!(
            cwd.canonicalize().unwrap(),
            target.as_std_path().canonicalize().unwrap()
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_existing_directory_is_reused() {
        let temp = TempDir::new().unwrap();
        let original = std::env::current_dir().unwrap();
        let target = utf8_dir(&temp).join("foo");
        std::fs::create_dir(&target).unwrap();

        let result = task(target, false).run().await;
        std::env::set_current_dir(&original).unwrap();

        result.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_non_empty_directory_fails() {
        let temp = TempDir::new().unwrap();
        let target = utf8_dir(&temp).join("foo");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("README.md"), "hi").unwrap();

        let err = task(target.clone(), false).run().await.unwrap_err();
        assert_eq!(err.to_string(), format!("Directory '{}' already exists.", target));
    }

    #[tokio::test]
    #[serial]
    async fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let original = std::env::current_dir().unwrap();
        let target = utf8_dir(&temp).join("foo");

        task(target.clone(), true).run().await.unwrap();

        assert!(!target.exists());
        assert_eq!(std::env::current_dir().unwrap(), original);
    }
}
