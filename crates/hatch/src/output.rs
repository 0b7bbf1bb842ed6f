//! Terminal output for generation runs

use console::style;
use hatch_commands::CommandOutput;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;

/// What happened to one generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Overwrite,
    Skip,
}

impl FileAction {
    fn label(self) -> console::StyledObject<&'static str> {
        match self {
            Self::Create => style("create").green(),
            Self::Overwrite => style("overwrite").cyan(),
            Self::Skip => style("skip").yellow(),
        }
    }
}

pub fn success(msg: impl Display) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn error(msg: impl Display) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

pub fn warning(msg: impl Display) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

pub fn info(msg: impl Display) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

pub fn header(msg: impl Display) {
    println!("\n{}", style(msg).bold().underlined());
}

pub fn kv(key: &str, value: impl Display) {
    println!("  {}: {}", style(key).dim(), value);
}

/// `   create README.md`
pub fn file_action(action: FileAction, path: &str) {
    println!("  {:>9} {}", action.label(), path);
}

/// Print the JSON summary a generation run resolves with
pub fn summary(summary: &CommandOutput) {
    let text = |key: &str| summary[key].as_str().unwrap_or("-").to_string();
    let count = |key: &str| summary[key].as_array().map_or(0, Vec::len);

    header("Summary");
    kv("Project", text("project"));
    kv("Blueprint", text("blueprint"));
    kv("Location", text("directory"));
    kv("Files written", count("files"));
    if count("skipped") > 0 {
        kv("Files skipped", count("skipped"));
    }
}

/// Spinner for a step with no measurable progress
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
