pub mod args;
pub mod context;
pub mod runner;

pub use args::{get_cli, get_log_level_from_verbose, Args, Cli, Commands, ListArgs};
pub use runner::{list, run, GenerationReport};
