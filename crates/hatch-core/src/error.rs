//! Error types for hatch-core

use thiserror::Error;

/// Result type alias using hatch-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for hatch
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Blueprint not found
    #[error("Unknown blueprint: {name}")]
    BlueprintNotFound { name: String },

    /// Blueprint definition is malformed
    #[error("Invalid blueprint '{name}': {message}")]
    InvalidBlueprint { name: String, message: String },

    /// Argument passed to a blueprint lookup that the blueprint does not declare
    #[error("Blueprint '{blueprint}' does not accept the argument '{argument}'")]
    UnknownBlueprintArgument { blueprint: String, argument: String },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a blueprint not found error
    pub fn blueprint_not_found(name: impl Into<String>) -> Self {
        Self::BlueprintNotFound { name: name.into() }
    }

    /// Create an invalid blueprint error
    pub fn invalid_blueprint(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBlueprint {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an unknown blueprint argument error
    pub fn unknown_blueprint_argument(
        blueprint: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self::UnknownBlueprintArgument {
            blueprint: blueprint.into(),
            argument: argument.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }
}
