use crate::core::models::atom::Atom;
use crate::core::models::element::ElementData;
use crate::core::models::hadron::Hadron;
use crate::core::models::molecule::Molecule;
use crate::core::models::particle::Particle;
use crate::core::physics::nuclear::typical_neutron_count;
use crate::engine::config::Calibration;
use crate::engine::error::ResolveError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolvers::{
    AtomConstituents, AtomResolver, AtomSpec, HadronResolver, MoleculeResolver,
};
use serde::Serialize;
use tracing::{info, instrument};

/// The only records the chain starts from.
#[derive(Debug, Clone)]
pub struct ChainInputs {
    pub up_quark: Particle,
    pub down_quark: Particle,
    pub electron: Particle,
}

/// Every intermediate of a full chain run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainResult {
    pub proton: Hadron,
    pub neutron: Hadron,
    pub atoms: Vec<Atom>,
    pub molecule: Molecule,
}

/// Builds a molecule from quarks up.
///
/// The proton (uud) and neutron (udd) are derived first and fed, flattened
/// back into particle records, to the atom resolver. `composition` lists
/// `(atomic number, count)` pairs; each atom is neutral and takes its most
/// abundant predicted isotope.
#[instrument(skip_all, name = "chain_workflow", fields(molecule = name))]
pub fn run(
    calibration: &Calibration,
    inputs: &ChainInputs,
    composition: &[(u32, u32)],
    name: &str,
    reporter: &ProgressReporter,
) -> Result<ChainResult, ResolveError> {
    if composition.is_empty() {
        return Err(ResolveError::EmptyInput { what: "atoms" });
    }
    let hadrons = HadronResolver::new(calibration);
    let (up, down) = (&inputs.up_quark, &inputs.down_quark);

    reporter.report(Progress::Message("Deriving nucleons from quarks".to_string()));
    let proton = hadrons.resolve(&[up.clone(), up.clone(), down.clone()], "Proton", "p")?;
    let neutron = hadrons.resolve(&[up.clone(), down.clone(), down.clone()], "Neutron", "n")?;
    info!(
        proton_mev = proton.mass_mev,
        neutron_mev = neutron.mass_mev,
        "Derived nucleons."
    );

    let proton_record = proton.to_particle();
    let neutron_record = neutron.to_particle();
    let constituents = AtomConstituents {
        proton: &proton_record,
        neutron: &neutron_record,
        electron: &inputs.electron,
    };

    reporter.report(Progress::SweepStart {
        total: composition.len() as u64,
    });
    let atom_resolver = AtomResolver::new(calibration);
    let atoms = composition
        .iter()
        .map(|&(z, _)| {
            let atom = atom_resolver.resolve(&constituents, &AtomSpec::neutral(z, typical_neutron_count(z)))?;
            reporter.report(Progress::ElementResolved { atomic_number: z });
            Ok(atom)
        })
        .collect::<Result<Vec<_>, ResolveError>>()?;
    reporter.report(Progress::SweepFinish {
        resolved: atoms.len(),
    });

    let elements: Vec<ElementData> = atoms.iter().map(ElementData::from).collect();
    let counts: Vec<u32> = composition.iter().map(|&(_, count)| count).collect();
    let molecule = MoleculeResolver::new().resolve(&elements, &counts, Some(name), None)?;
    info!(formula = %molecule.formula, mass_amu = molecule.molecular_mass_amu, "Derived molecule.");

    Ok(ChainResult {
        proton,
        neutron,
        atoms,
        molecule,
    })
}
