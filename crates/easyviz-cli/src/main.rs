//! EasyViz CLI - profile a table and configure charts from the terminal.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use easyviz::RejectReason;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Profile { file, json } => commands::profile::run(file, json, &config),

        Commands::Preview { file, rows } => commands::preview::run(file, rows, &config),

        Commands::Charts { file, json } => commands::charts::run(file, json, &config),

        Commands::Resolve {
            file,
            selection,
            json,
        } => commands::resolve::run(file, selection, json, &config),

        Commands::Series { file, selection } => commands::series::run(file, selection, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.downcast_ref::<RejectReason>().is_some() {
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so JSON output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
