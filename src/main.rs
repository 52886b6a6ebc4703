//! Hardrules CLI entry point

use clap::Parser;
use hardrules::cli::{Command, EXIT_ERROR, EXIT_SUCCESS, args::Cli, init_logging};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.quiet, cli.debug, cli.logfile.as_ref()) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(EXIT_ERROR);
    }

    let exit_code = match cli.command {
        Command::Init { force } => match hardrules::cli::init::run_init(force) {
            Ok(result) if result.skipped.is_empty() => {
                println!("Created hardrules.toml. Set source_lang and target_lang to start filtering.");
                EXIT_SUCCESS
            }
            Ok(_) => {
                eprintln!("hardrules.toml already exists, use --force to overwrite it.");
                EXIT_ERROR
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Filter(args) => hardrules::cli::filter::run_filter(&args),
        Command::List { config, format } => {
            hardrules::cli::list::run_list(config.as_deref(), format)
        }
    };

    process::exit(exit_code);
}
