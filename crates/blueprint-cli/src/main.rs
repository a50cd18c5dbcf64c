//! blueprint CLI - Name derivation and template rendering for code generators
//!
//! Commands:
//! - `blueprint convert` - Apply one case conversion to identifiers
//! - `blueprint names` - Print every derived form of an identifier
//! - `blueprint path` - Resolve the relative path back to a feature folder
//! - `blueprint render` - Fill a template with names derived from an identifier

use anyhow::Context;
use blueprint_strings::Case;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod convert;
mod error;
mod feature;
mod logging;
mod names;
mod render;

use config::BlueprintConfig;
use feature::{LayoutOptions, flag_pair};

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(author, version, about = "Derive names and paths for generated code", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to blueprint.toml (default: ./blueprint.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Feature layout flags shared by `path` and `render`
#[derive(clap::Args)]
struct LayoutArgs {
    /// Base path of the feature (default: from config, else src/app)
    #[arg(short, long)]
    path: Option<String>,

    /// Group generated files into per-kind folders
    #[arg(long, conflicts_with = "no_group")]
    group: bool,

    /// Do not group generated files
    #[arg(long)]
    no_group: bool,

    /// Put generated files directly in the feature folder
    #[arg(long, conflicts_with = "no_flat")]
    flat: bool,

    /// Nest generated files in a folder named after the feature
    #[arg(long)]
    no_flat: bool,

    /// Folder name used when grouping
    #[arg(long)]
    group_name: Option<String>,
}

impl From<LayoutArgs> for LayoutOptions {
    fn from(args: LayoutArgs) -> Self {
        Self {
            path: args.path,
            group: flag_pair(args.group, args.no_group),
            flat: flag_pair(args.flat, args.no_flat),
            group_name: args.group_name,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one case conversion to each input
    Convert {
        /// Conversion name (e.g., classify, dasherize, snake, pascal)
        case: Case,

        /// Identifiers to convert
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print every derived form of an identifier
    Names {
        /// Identifier to derive names from
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the relative path from generated files back to the feature
    Path {
        /// Feature name
        name: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render a template with names derived from an identifier
    Render {
        /// Template file containing {{placeholder}} tokens
        template: PathBuf,

        /// Identifier to derive names from
        name: String,

        /// Write to this file instead of stdout (must not exist)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Load blueprint.toml for the commands that take layout defaults
fn load_config(explicit: Option<&Path>) -> anyhow::Result<BlueprintConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    BlueprintConfig::load(explicit, &cwd)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Convert { case, inputs } => {
            convert::run(case, &inputs)?;
        }
        Commands::Names { name, json } => {
            names::run(&name, json)?;
        }
        Commands::Path { name, layout } => {
            let config = load_config(cli.config.as_deref())?;
            feature::run(&name, layout.into(), &config.defaults)?;
        }
        Commands::Render {
            template,
            name,
            output,
            layout,
        } => {
            let config = load_config(cli.config.as_deref())?;
            render::run(
                &template,
                &name,
                output.as_deref(),
                layout.into(),
                &config.defaults,
            )?;
        }
    }

    Ok(())
}
