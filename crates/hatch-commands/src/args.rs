//! Invocation argument parsing against a composed option schema
//!
//! Supported forms: `--name=value`, `--name value`, `--flag`, `--no-flag`,
//! `--flag=false`, and `-alias` / `--alias` for declared aliases. Everything
//! after `--` is positional.
//!
//! Options the schema does not declare are still kept (camel-cased, value as
//! typed or `true`) so blueprint-specific flags reach the delegate even when
//! the blueprint could not be resolved ahead of time.

use heck::ToLowerCamelCase;
use hatch_core::{CommandOptions, OptionSchema, OptionSpec, OptionType, OptionValue};
use tracing::warn;

use crate::error::{PipelineError, Result};

/// Positional arguments and option values of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positionals: Vec<String>,
    pub options: CommandOptions,
}

/// Parse `argv` against `schema`, filling in schema defaults
pub fn parse_args(schema: &OptionSchema, argv: &[String]) -> Result<ParsedArgs> {
    let mut parsed = ParsedArgs::default();
    let mut iter = argv.iter().peekable();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            parsed.positionals.extend(iter.by_ref().cloned());
            break;
        }

        let Some(flag) = strip_dashes(arg) else {
            parsed.positionals.push(arg.clone());
            continue;
        };

        let (token, inline) = match flag.split_once('=') {
            Some((token, value)) => (token, Some(value)),
            None => (flag, None),
        };

        if let Some(spec) = schema.resolve(token) {
            let value = match (spec.kind, inline) {
                (OptionType::Boolean, Some(raw)) => parse_bool(spec, raw)?,
                (OptionType::Boolean, None) => OptionValue::Bool(true),
                (_, Some(raw)) => coerce(spec, raw)?,
                (_, None) => match iter.next_if(|next| strip_dashes(next).is_none()) {
                    Some(raw) => coerce(spec, raw)?,
                    None => return Err(PipelineError::missing_option_value(&spec.name)),
                },
            };
            parsed.options.insert(spec.key(), value);
            continue;
        }

        if inline.is_none() {
            let negated = token
                .strip_prefix("no-")
                .and_then(|rest| schema.resolve(rest))
                .filter(|spec| spec.kind == OptionType::Boolean);
            if let Some(spec) = negated {
                parsed.options.insert(spec.key(), false);
                continue;
            }
        }

        warn!("The option '--{}' is not registered with this command", token);
        let value = inline.map_or(OptionValue::Bool(true), OptionValue::from);
        parsed.options.insert(token.to_lower_camel_case(), value);
    }

    for spec in schema.iter() {
        if let Some(default) = &spec.default {
            let key = spec.key();
            if !parsed.options.contains_key(&key) {
                parsed.options.insert(key, default.clone());
            }
        }
    }

    Ok(parsed)
}

/// Find the blueprint named on the command line (`--blueprint x`, `--blueprint=x`, `-b x`)
pub fn blueprint_from_args(argv: &[String]) -> Option<String> {
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }
        match strip_dashes(arg) {
            Some(flag) => {
                if let Some(value) = flag
                    .strip_prefix("blueprint=")
                    .or_else(|| flag.strip_prefix("b="))
                {
                    return Some(value.to_string());
                }
                if flag == "blueprint" || flag == "b" {
                    return iter.next().cloned();
                }
            }
            None => continue,
        }
    }
    None
}

/// `--name` / `-n` → `name`; anything else (including `-` alone) is positional
fn strip_dashes(arg: &str) -> Option<&str> {
    arg.strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))
        .filter(|rest| !rest.is_empty())
}

fn parse_bool(spec: &OptionSpec, raw: &str) -> Result<OptionValue> {
    match raw {
        "true" | "1" | "yes" => Ok(OptionValue::Bool(true)),
        "false" | "0" | "no" => Ok(OptionValue::Bool(false)),
        _ => Err(PipelineError::invalid_option_value(&spec.name, raw)),
    }
}

fn coerce(spec: &OptionSpec, raw: &str) -> Result<OptionValue> {
    match spec.kind {
        OptionType::Number => raw
            .parse::<i64>()
            .map(OptionValue::Number)
            .map_err(|_| PipelineError::invalid_option_value(&spec.name, raw)),
        OptionType::Boolean => parse_bool(spec, raw),
        OptionType::String | OptionType::Path => Ok(OptionValue::String(raw.to_string())),
    }
}
