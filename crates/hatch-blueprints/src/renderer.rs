//! Blueprint file rendering with Tera.
//!
//! Handles:
//! - Building the template context from a composed option set
//! - Rendering file path and content templates
//! - Dropping files whose path renders empty (conditional files)

use camino::{Utf8Component, Utf8Path};
use chrono::Local;
use heck::{ToKebabCase, ToSnakeCase, ToUpperCamelCase};
use hatch_core::{BlueprintDescriptor, CommandOptions, Error, Result};
use std::error::Error as _;
use tera::{Context, Tera};

/// A file ready to be written, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

/// Blueprint renderer
#[derive(Debug, Default)]
pub struct BlueprintRenderer;

impl BlueprintRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Build the Tera context for `options`
    ///
    /// Blueprint option defaults fill in keys the invocation did not set, so
    /// templates can rely on every declared option being present.
    pub fn context(
        &self,
        descriptor: &BlueprintDescriptor,
        options: &CommandOptions,
    ) -> Result<Context> {
        let name = options
            .get_str("name")
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::template("project name is required to render a blueprint"))?;

        let mut context = Context::new();
        for option in &descriptor.available_options {
            if let Some(default) = &option.default {
                context.insert(option.key(), default);
            }
        }
        for (key, value) in options.iter() {
            context.insert(key.as_str(), value);
        }

        context.insert("name", name);
        context.insert("snake_name", &name.to_snake_case());
        context.insert("kebab_name", &name.to_kebab_case());
        context.insert("pascal_name", &name.to_upper_camel_case());
        context.insert("year", &Local::now().format("%Y").to_string());
        Ok(context)
    }

    /// Render a single template string
    pub fn render_string(&self, template: &str, context: &Context) -> Result<String> {
        Tera::one_off(template, context, false).map_err(tera_error)
    }

    /// Render every file of a blueprint
    pub fn render(
        &self,
        descriptor: &BlueprintDescriptor,
        options: &CommandOptions,
    ) -> Result<Vec<RenderedFile>> {
        let context = self.context(descriptor, options)?;
        let mut rendered = Vec::with_capacity(descriptor.files.len());

        for (path_template, content_template) in &descriptor.files {
            let path = self.render_string(path_template, &context)?;
            let path = path.trim();
            if path.is_empty() {
                continue;
            }
            check_relative(&descriptor.name, path)?;

            rendered.push(RenderedFile {
                path: path.to_string(),
                contents: self.render_string(content_template, &context)?,
            });
        }

        Ok(rendered)
    }
}

/// Generated paths must stay inside the project directory
fn check_relative(blueprint: &str, path: &str) -> Result<()> {
    let escapes = Utf8Path::new(path).components().any(|c| {
        matches!(
            c,
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_)
        )
    });
    if escapes {
        return Err(Error::invalid_blueprint(
            blueprint,
            format!("file path '{}' escapes the project directory", path),
        ));
    }
    Ok(())
}

/// Flatten a Tera error and its causes into one message
fn tera_error(err: tera::Error) -> Error {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    Error::template(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_core::{OptionSpec, OptionType};
    use std::collections::BTreeMap;

    fn descriptor(files: &[(&str, &str)]) -> BlueprintDescriptor {
        BlueprintDescriptor {
            name: "app".to_string(),
            description: String::new(),
            available_options: vec![
                OptionSpec::new("lang", OptionType::String).with_default("en-US"),
                OptionSpec::new("ci-provider", OptionType::String).with_default("github"),
            ],
            files: files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn options(name: &str) -> CommandOptions {
        let mut options = CommandOptions::new();
        options.insert("name", name);
        options
    }

    #[test]
    fn test_name_variants() {
        let renderer = BlueprintRenderer::new();
        let files = renderer
            .render(
                &descriptor(&[("src/{{ snake_name }}.txt", "{{ pascal_name }} {{ kebab_name }}")]),
                &options("my-app"),
            )
            .unwrap();

        assert_eq!(
            files,
            vec![RenderedFile {
                path: "src/my_app.txt".to_string(),
                contents: "MyApp my-app".to_string(),
            }]
        );
    }

    #[test]
    fn test_defaults_fill_missing_options() {
        let renderer = BlueprintRenderer::new();
        let mut opts = options("foo");
        opts.insert("lang", "fr");

        let files = renderer
            .render(&descriptor(&[("a.txt", "{{ lang }}/{{ ciProvider }}")]), &opts)
            .unwrap();
        assert_eq!(files[0].contents, "fr/github");
    }

    #[test]
    fn test_empty_path_skips_file() {
        let renderer = BlueprintRenderer::new();
        let mut opts = options("foo");
        opts.insert("ciProvider", "none");

        let files = renderer
            .render(
                &descriptor(&[
                    ("{% if ciProvider == 'github' %}ci.yml{% endif %}", "ci"),
                    ("README.md", "readme"),
                ]),
                &opts,
            )
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "README.md");
    }

    #[test]
    fn test_path_escape_rejected() {
        let renderer = BlueprintRenderer::new();
        let err = renderer
            .render(&descriptor(&[("../{{ name }}.txt", "x")]), &options("foo"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBlueprint { .. }));
    }

    #[test]
    fn test_missing_name() {
        let renderer = BlueprintRenderer::new();
        let err = renderer
            .render(&descriptor(&[]), &CommandOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_undefined_variable_reports_cause() {
        let renderer = BlueprintRenderer::new();
        let err = renderer
            .render(&descriptor(&[("a.txt", "{{ nope }}")]), &options("foo"))
            .unwrap_err();
        assert!(err.to_string().contains("nope"), "{}", err);
    }
}
