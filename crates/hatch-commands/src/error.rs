//! Error types for hatch-commands

use thiserror::Error;

/// Result type alias using hatch-commands's error type
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failure of a single pipeline invocation
///
/// Task and delegation failures are transparent: their message is exactly the
/// message of the error the stage produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Project name rejected by validation
    #[error("{message}")]
    InvalidName { message: String },

    /// `new` invoked from inside an existing hatch project
    #[error("You cannot use the `hatch new` command inside a hatch project.")]
    InsideProject,

    /// No project name on the command line
    #[error("The `hatch new` command requires a name to be specified. For more details, use `hatch help`.")]
    MissingName,

    /// Option value could not be coerced to the declared type
    #[error("Invalid value '{value}' for option --{option}")]
    InvalidOptionValue { option: String, value: String },

    /// Non-flag option given without a value
    #[error("Option --{option} requires a value")]
    MissingOptionValue { option: String },

    /// Directory task failed
    #[error(transparent)]
    Task(anyhow::Error),

    /// Delegate command failed
    #[error(transparent)]
    Delegation(anyhow::Error),

    /// The pipeline already reached a terminal state
    #[error("Command pipeline has already run; create a new pipeline per invocation")]
    AlreadyRun,
}

impl PipelineError {
    /// Create an invalid name error
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }

    /// Create an invalid option value error
    pub fn invalid_option_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOptionValue {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Create a missing option value error
    pub fn missing_option_value(option: impl Into<String>) -> Self {
        Self::MissingOptionValue {
            option: option.into(),
        }
    }
}
