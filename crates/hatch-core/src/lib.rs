//! # hatch-core
//!
//! Core library for the hatch CLI providing:
//! - Option schemas and parsed option values shared by every command
//! - Blueprint descriptors and the registry seam blueprints are looked up through
//! - Hierarchical configuration loading (`~/.hatch/config.yaml` + `HATCH_*` env)
//! - The `.hatch.yaml` marker that identifies a generated project

pub mod config;
pub mod error;
pub mod project;
pub mod types;

pub use config::{HatchConfig, HierarchicalConfigLoader};
pub use error::{Error, Result};
pub use project::{find_project_root, ProjectMarker, PROJECT_MARKER};
pub use types::{
    BlueprintDescriptor, BlueprintRegistry, CommandOptions, LookupOptions, OptionSchema,
    OptionSpec, OptionType, OptionValue,
};
