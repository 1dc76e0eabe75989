use super::atom::LoadedConstituents;
use super::write_json;
use crate::cli::{TableArgs, TableFormat};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use periodica::core::io::tabular;
use periodica::engine::config::Calibration;
use periodica::engine::progress::ProgressReporter;
use periodica::workflows::periodic_table;
use tracing::info;

pub fn run(args: TableArgs, calibration: &Calibration) -> Result<()> {
    let loaded = LoadedConstituents::load(&args.constituents)?;

    let progress_handler = if args.no_progress {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the periodic-table workflow...");
    let atoms = periodic_table::run(calibration, &loaded.borrow(), &reporter)?;

    match (args.format, &args.output.output) {
        (TableFormat::Json, _) => write_json(&atoms, &args.output)?,
        (TableFormat::Csv, Some(path)) => {
            tabular::write_atoms_to_path(path, &atoms)?;
            info!(path = %path.display(), "Wrote CSV table.");
        }
        (TableFormat::Csv, None) => tabular::write_atoms(std::io::stdout().lock(), &atoms)?,
    }
    Ok(())
}
