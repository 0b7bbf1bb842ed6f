//! CLI argument parsing with clap
//!
//! Only the command structure is declared here. The options of `new` and
//! `init` depend on the selected blueprint, so their arguments are collected
//! raw and parsed by the command pipeline once the schema is known.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// hatch - Generate projects from blueprints
#[derive(Parser, Debug)]
#[command(name = "hatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a hatch config file (default: ~/.hatch/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project directory and generate a blueprint into it
    New(NewArgs),

    /// Generate a blueprint into the current directory
    Init(InitArgs),

    /// Inspect available blueprints
    #[command(subcommand)]
    Blueprint(BlueprintCommands),
}

impl Commands {
    /// `-v` / `--verbose` given among the raw arguments of `new` or `init`
    ///
    /// Those land in the trailing arguments rather than the global flag, so
    /// they are counted here to raise the log level as well.
    pub fn trailing_verbosity(&self) -> u8 {
        let args = match self {
            Self::New(args) => &args.args,
            Self::Init(args) => &args.args,
            Self::Blueprint(_) => return 0,
        };
        let count = args
            .iter()
            .take_while(|a| a.as_str() != "--")
            .filter(|a| matches!(a.as_str(), "-v" | "--verbose"))
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name followed by options (e.g. `my-app --blueprint app --skip-git`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Optional project name followed by options; the name defaults to the current directory
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

// Blueprint commands
#[derive(Subcommand, Debug)]
pub enum BlueprintCommands {
    /// List available blueprints
    List,

    /// Show the options `hatch new` accepts with a blueprint
    Show(BlueprintShowArgs),
}

#[derive(Args, Debug)]
pub struct BlueprintShowArgs {
    /// Blueprint name or alias
    pub name: String,
}
