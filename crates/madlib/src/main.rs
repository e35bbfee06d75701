mod cli;
mod commands;
mod context;
mod logging;
mod output;
mod terminal;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Form { source, json } => commands::form::run(source, json, cli.verbose),
        Commands::Fill {
            source,
            answers,
            set,
            json,
        } => commands::fill::run(source, answers, set, json, cli.verbose),
        Commands::Play { source } => commands::play::run(source, cli.verbose),
        Commands::Check { file, json } => commands::check::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
