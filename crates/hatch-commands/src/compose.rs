//! Blueprint option composition
//!
//! A command's recognized options are its own base schema plus whatever the
//! selected blueprint declares. Base options always win on a name clash.

use hatch_core::{BlueprintDescriptor, BlueprintRegistry, LookupOptions, OptionSchema};
use tracing::{debug, warn};

/// Compose the option schema for an invocation
///
/// Queries `registry` once for `blueprint_name`. A missing blueprint, or a
/// registry error, leaves `base` unchanged; reporting an absent blueprint is
/// up to whichever stage actually needs one.
///
/// The result is always derived from `base`, so calling this again yields the
/// same schema rather than accumulating options.
pub fn compose_options(
    base: &OptionSchema,
    blueprint_name: &str,
    raw_args: &[String],
    registry: &dyn BlueprintRegistry,
) -> OptionSchema {
    let lookup = LookupOptions::ignoring_extra_args().with_extra_args(raw_args);

    match registry.lookup(blueprint_name, &lookup) {
        Ok(Some(descriptor)) => merge_blueprint_options(base, &descriptor),
        Ok(None) => {
            debug!("Blueprint '{}' not found, using base options", blueprint_name);
            base.clone()
        }
        Err(e) => {
            warn!("Blueprint lookup for '{}' failed: {}", blueprint_name, e);
            base.clone()
        }
    }
}

/// Append a blueprint's options to `base`, skipping names already declared
pub fn merge_blueprint_options(
    base: &OptionSchema,
    descriptor: &BlueprintDescriptor,
) -> OptionSchema {
    let mut merged = base.clone();

    for option in &descriptor.available_options {
        if !merged.push(option.clone()) {
            debug!(
                "Blueprint '{}' option --{} shadowed by command option",
                descriptor.name, option.name
            );
        }
    }

    debug!(
        "Composed {} options ({} from blueprint '{}')",
        merged.len(),
        merged.len() - base.len(),
        descriptor.name
    );
    merged
}
