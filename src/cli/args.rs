use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// textconvert - renders source templates into a generated source tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every emitter's template into the output directory.
    #[command(visible_alias = "gen")]
    Generate(Args),

    /// List emitters with their template and output paths.
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

/// Arguments for the generate command.
#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Root directory holding the `Templates` directory and optional configuration.
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: PathBuf,

    /// Directory under which output paths are created.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Only run the named emitters (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "EMITTER")]
    pub only: Vec<String>,

    /// Template context as a JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub context: Option<String>,

    /// Path to a JSON or YAML file containing template context.
    #[arg(long = "context-file", value_name = "FILE")]
    pub context_file: Option<PathBuf>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Fail if any generated file is missing or out of date. Implies `--dry-run`.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Root directory holding the `Templates` directory and optional configuration.
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: PathBuf,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::MissingSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
