use super::{read_json, write_json};
use crate::cli::MoleculeArgs;
use crate::error::Result;
use periodica::core::models::element::ElementData;
use periodica::engine::resolvers::MoleculeResolver;
use tracing::info;

pub fn run(args: MoleculeArgs) -> Result<()> {
    let atoms = args
        .atoms
        .iter()
        .map(|entry| read_json::<ElementData>(&entry.path))
        .collect::<Result<Vec<_>>>()?;
    let counts: Vec<u32> = args.atoms.iter().map(|entry| entry.count).collect();
    info!(elements = atoms.len(), "Loaded element records.");

    let molecule = MoleculeResolver::new().resolve(
        &atoms,
        &counts,
        args.name.as_deref(),
        args.formula.as_deref(),
    )?;
    eprintln!(
        "{} ({}): {}, {}, {}",
        molecule.name, molecule.formula, molecule.geometry, molecule.polarity, molecule.state_at_stp
    );
    write_json(&molecule, &args.output)
}
