mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("Periodica CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(num_threads, "Setting Rayon global thread pool size.");
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {e}"))
            })?;
    }

    let calibration = config::build_calibration(cli.calibration.as_deref(), &cli.set_values)?;

    let result = match cli.command {
        Commands::Hadron(args) => {
            info!("Dispatching to 'hadron' command.");
            commands::hadron::run(args, &calibration)
        }
        Commands::Atom(args) => {
            info!("Dispatching to 'atom' command.");
            commands::atom::run(args, &calibration)
        }
        Commands::Molecule(args) => {
            info!("Dispatching to 'molecule' command.");
            commands::molecule::run(args)
        }
        Commands::Table(args) => {
            info!("Dispatching to 'table' command.");
            commands::table::run(args, &calibration)
        }
        Commands::Chain(args) => {
            info!("Dispatching to 'chain' command.");
            commands::chain::run(args, &calibration)
        }
    };

    match &result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {e}"),
    }
    result
}
