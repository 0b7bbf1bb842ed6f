//! Units of asynchronous work scheduled by the pipeline

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// A single step of work with no inputs beyond what it was built with
#[async_trait]
pub trait Task: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Run the task to completion
    async fn run(&self) -> Result<()>;
}

/// Run a task, surfacing its failure unchanged
///
/// No retries and no timeout: the task owns its own failure handling and cleanup.
pub async fn run_task(task: &dyn Task) -> Result<()> {
    debug!("Running task: {}", task.name());
    task.run().await?;
    debug!("Task finished: {}", task.name());
    Ok(())
}

/// What the directory step of `new` needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRequest {
    pub project_name: String,
    /// Directory to create and step into, relative to the working directory
    pub directory: String,
    pub dry_run: bool,
}

/// Builds the create-and-step-into-directory task for one invocation
///
/// Closures `Fn(DirectoryRequest) -> Box<dyn Task>` implement this directly.
pub trait DirectoryTaskFactory: Send + Sync {
    fn create(&self, request: DirectoryRequest) -> Box<dyn Task>;
}

impl<F> DirectoryTaskFactory for F
where
    F: Fn(DirectoryRequest) -> Box<dyn Task> + Send + Sync,
{
    fn create(&self, request: DirectoryRequest) -> Box<dyn Task> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingTask {
        runs: AtomicU32,
        fail_with: Option<&'static str>,
    }

    #[async_trait]
    impl Task for CountingTask {
        fn name(&self) -> &str {
            "counting"
        }

        async fn run(&self) -> Result<()> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(message) => Err(anyhow!(message)),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_run_task_success() {
        let task = CountingTask {
            runs: AtomicU32::new(0),
            fail_with: None,
        };
        run_task(&task).await.unwrap();
        assert_eq!(task.runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_task_failure_is_not_retried() {
        let task = CountingTask {
            runs: AtomicU32::new(0),
            fail_with: Some("Directory 'foo' already exists."),
        };
        let err = run_task(&task).await.unwrap_err();

        assert_eq!(err.to_string(), "Directory 'foo' already exists.");
        assert_eq!(task.runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_closure_is_a_factory() {
        let factory = |request: DirectoryRequest| -> Box<dyn Task> {
            Box::new(CountingTask {
                runs: AtomicU32::new(0),
                fail_with: if request.dry_run { None } else { Some("nope") },
            })
        };
        let task = factory.create(DirectoryRequest {
            project_name: "foo".into(),
            directory: "foo".into(),
            dry_run: true,
        });
        assert_eq!(task.name(), "counting");
    }
}
