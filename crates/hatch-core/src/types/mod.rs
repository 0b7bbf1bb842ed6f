//! Type definitions for command options and blueprints

mod blueprint_types;
mod option_types;

pub use blueprint_types::*;
pub use option_types::*;
