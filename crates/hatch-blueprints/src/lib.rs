//! # hatch-blueprints
//!
//! Blueprint catalog for the hatch CLI providing:
//! - Blueprint definitions parsed from YAML (embedded defaults plus user directories)
//! - Name and alias lookup through the [`BlueprintRegistry`](hatch_core::BlueprintRegistry) seam
//! - Tera rendering of a blueprint's files for a composed option set
//!
//! # Example
//!
//! ```no_run
//! use hatch_blueprints::BlueprintCatalog;
//! use hatch_core::{BlueprintRegistry, LookupOptions};
//!
//! # fn example() -> hatch_core::Result<()> {
//! let catalog = BlueprintCatalog::from_embedded()?;
//! let app = catalog.lookup("app", &LookupOptions::ignoring_extra_args())?;
//! assert!(app.is_some());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod parser;
pub mod renderer;

pub use catalog::BlueprintCatalog;
pub use parser::{BlueprintDefinition, BlueprintFile};
pub use renderer::{BlueprintRenderer, RenderedFile};
