//! `hatch blueprint` command handlers

use anyhow::Result;
use camino::Utf8Path;
use hatch_commands::compose::merge_blueprint_options;
use hatch_commands::new_command_options;
use hatch_core::{BlueprintRegistry, Error, LookupOptions, OptionSpec};

use super::CommandContext;
use crate::cli::BlueprintCommands;
use crate::output;

pub fn run(cmd: BlueprintCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    let ctx = CommandContext::load(config_path)?;

    match cmd {
        BlueprintCommands::List => list(&ctx),
        BlueprintCommands::Show(args) => show(&ctx, &args.name),
    }
}

fn list(ctx: &CommandContext) -> Result<()> {
    output::header("Available blueprints");

    for blueprint in ctx.blueprints.list() {
        let marker = if blueprint.name == ctx.config.default_blueprint {
            " (default)"
        } else {
            ""
        };
        output::kv(
            &format!("{}{}", blueprint.name, marker),
            &blueprint.description,
        );
    }
    Ok(())
}

fn show(ctx: &CommandContext, name: &str) -> Result<()> {
    let descriptor = ctx
        .blueprints
        .lookup(name, &LookupOptions::ignoring_extra_args())?
        .ok_or_else(|| Error::blueprint_not_found(name))?;

    let base = new_command_options(&ctx.config.default_blueprint, ctx.config.skip_git);
    let schema = merge_blueprint_options(&base, &descriptor);

    output::header(&format!("Blueprint: {}", descriptor.name));
    if !descriptor.description.is_empty() {
        println!("  {}", descriptor.description);
    }

    output::header("Options");
    for option in schema.iter() {
        println!("  {}", describe(option));
        if let Some(description) = &option.description {
            println!("      {}", description);
        }
    }

    output::header("Files");
    for path in descriptor.files.keys() {
        println!("  {}", path);
    }
    Ok(())
}

/// `--name, -alias <type> [default: x]`
fn describe(option: &OptionSpec) -> String {
    let mut line = format!("--{}", option.name);
    for alias in &option.aliases {
        line.push_str(&format!(", -{}", alias));
    }
    line.push_str(&format!(" <{}>", option.kind));
    if let Some(default) = &option.default {
        line.push_str(&format!(" [default: {}]", default));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_core::OptionType;

    #[test]
    fn test_describe_option() {
        let option = OptionSpec::new("skip-git", OptionType::Boolean)
            .with_default(false)
            .with_alias("sg");
        assert_eq!(describe(&option), "--skip-git, -sg <boolean> [default: false]");
    }

    #[test]
    fn test_describe_option_without_default() {
        let option = OptionSpec::new("directory", OptionType::Path);
        assert_eq!(describe(&option), "--directory <path>");
    }
}
