//! facebull CLI
//!
//! Finds the cheapest set of machines that lets every compound be turned
//! into every other compound.
//!
//! # Commands
//!
//! - `solve <INPUT>`: print the optimal total price and the sorted machine ids
//! - `inspect <INPUT>`: print catalog size and per-compound bound tables
//!
//! # Exit Codes
//! 0 ok, 1 error, 2 malformed input, 3 infeasible (see `error`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use facebull_graph::{FacebullConfig, LoggingConfig};

mod commands;
mod error;

pub use error::{CliError, EXIT_GENERAL_ERROR, EXIT_INFEASIBLE, EXIT_MALFORMED_INPUT, EXIT_SUCCESS};

/// facebull - minimum-cost machine selection
#[derive(Parser)]
#[command(name = "facebull")]
#[command(version)]
#[command(about = "Exact minimum-cost machine selection connecting every compound")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file layered over config/default.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a machine catalog
    ///
    /// Prints the total price on the first line and the selected machine
    /// ids, ascending and space separated, on the second.
    Solve(commands::solve::SolveArgs),
    /// Show compound and machine counts and the search bound tables
    Inspect(commands::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match FacebullConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Subscriber is not installed yet.
            eprintln!("Error: {}", e);
            std::process::exit(CliError::from(e).exit_code());
        }
    };

    init_logging(cli.verbose, &config.logging);

    let exit_code = match cli.command {
        Commands::Solve(args) => commands::solve::handle_solve(args, &config),
        Commands::Inspect(args) => commands::inspect::handle_inspect(args),
    };

    std::process::exit(exit_code);
}

/// Install the stderr subscriber. `-v` overrides `RUST_LOG`, which
/// overrides `logging.level`.
fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "pretty" => builder.pretty().init(),
        "full" => builder.init(),
        _ => builder.compact().init(),
    }
}
