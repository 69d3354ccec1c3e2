use textconvert::{
    cli::{get_cli, get_log_level_from_verbose, list, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = get_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let result = match cli.command {
        Commands::Generate(args) => run(args).map(|_| ()),
        Commands::List(args) => list(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
