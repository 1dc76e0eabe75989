use super::{read_json, write_json};
use crate::cli::ChainArgs;
use crate::error::Result;
use periodica::engine::config::Calibration;
use periodica::engine::progress::ProgressReporter;
use periodica::workflows::chain::{self, ChainInputs};
use tracing::info;

pub fn run(args: ChainArgs, calibration: &Calibration) -> Result<()> {
    let inputs = ChainInputs {
        up_quark: read_json(&args.up_quark)?,
        down_quark: read_json(&args.down_quark)?,
        electron: read_json(&args.electron)?,
    };
    info!(elements = args.composition.len(), "Running the quark-to-molecule chain.");

    let result = chain::run(
        calibration,
        &inputs,
        &args.composition,
        &args.name,
        &ProgressReporter::new(),
    )?;
    eprintln!(
        "p {:.2} MeV/c², n {:.2} MeV/c², {} {:.3} u",
        result.proton.mass_mev,
        result.neutron.mass_mev,
        result.molecule.formula,
        result.molecule.molecular_mass_amu
    );
    write_json(&result, &args.output)
}
