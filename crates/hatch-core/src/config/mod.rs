//! Configuration loading and management

mod hierarchical_loader;

pub use hierarchical_loader::{HatchConfig, HierarchicalConfigLoader};
