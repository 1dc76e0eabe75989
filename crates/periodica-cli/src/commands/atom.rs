use super::{read_json, write_json};
use crate::cli::{AtomArgs, ConstituentArgs};
use crate::error::{CliError, Result};
use periodica::core::models::particle::Particle;
use periodica::engine::config::Calibration;
use periodica::engine::resolvers::{AtomConstituents, AtomResolver, AtomSpec};
use tracing::info;

/// Owned nucleon and electron records, loaded once per command.
pub(crate) struct LoadedConstituents {
    proton: Particle,
    neutron: Particle,
    electron: Particle,
}

impl LoadedConstituents {
    pub(crate) fn load(args: &ConstituentArgs) -> Result<Self> {
        Ok(Self {
            proton: read_json(&args.proton)?,
            neutron: read_json(&args.neutron)?,
            electron: read_json(&args.electron)?,
        })
    }

    pub(crate) fn borrow(&self) -> AtomConstituents<'_> {
        AtomConstituents {
            proton: &self.proton,
            neutron: &self.neutron,
            electron: &self.electron,
        }
    }
}

pub fn run(args: AtomArgs, calibration: &Calibration) -> Result<()> {
    let loaded = LoadedConstituents::load(&args.constituents)?;

    let mut spec = AtomSpec::neutral(args.protons, args.neutrons);
    if let Some(electrons) = args.electrons {
        spec = spec.with_electrons(electrons);
    }
    spec = match (args.name, args.symbol) {
        (Some(name), Some(symbol)) => spec.named(name, symbol),
        (None, None) => spec,
        _ => {
            return Err(CliError::Argument(
                "--name and --symbol must be given together".to_string(),
            ));
        }
    };

    let atom = AtomResolver::new(calibration).resolve(&loaded.borrow(), &spec)?;
    info!(symbol = %atom.symbol, mass_number = atom.mass_number, "Resolved atom.");
    eprintln!(
        "{}-{} ({}): {:.6} u, {}",
        atom.name, atom.mass_number, atom.symbol, atom.atomic_mass, atom.electron_configuration.notation
    );
    write_json(&atom, &args.output)
}
