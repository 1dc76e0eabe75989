use crate::core::models::atom::Atom;
use crate::core::physics::nuclear::typical_neutron_count;
use crate::core::tables::elements::ELEMENTS;
use crate::engine::config::Calibration;
use crate::engine::error::ResolveError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolvers::{AtomConstituents, AtomResolver, AtomSpec};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Resolves the neutral atom of every named element, ordered by atomic number.
///
/// Each element gets the neutron count of its most abundant predicted isotope.
#[instrument(skip_all, name = "periodic_table_workflow")]
pub fn run(
    calibration: &Calibration,
    constituents: &AtomConstituents<'_>,
    reporter: &ProgressReporter,
) -> Result<Vec<Atom>, ResolveError> {
    info!(elements = ELEMENTS.len(), "Starting periodic table sweep.");
    reporter.report(Progress::SweepStart {
        total: ELEMENTS.len() as u64,
    });

    let resolver = AtomResolver::new(calibration);

    #[cfg(not(feature = "parallel"))]
    let iterator = ELEMENTS.iter();

    #[cfg(feature = "parallel")]
    let iterator = ELEMENTS.par_iter();

    let results: Vec<Result<Atom, ResolveError>> = iterator
        .map(|element| {
            let z = element.atomic_number;
            let spec = AtomSpec::neutral(z, typical_neutron_count(z));
            let atom = resolver.resolve(constituents, &spec)?;
            reporter.report(Progress::ElementResolved { atomic_number: z });
            Ok(atom)
        })
        .collect();

    let mut atoms = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    atoms.sort_by_key(|atom| atom.atomic_number);

    info!(resolved = atoms.len(), "Periodic table sweep finished.");
    reporter.report(Progress::SweepFinish {
        resolved: atoms.len(),
    });
    Ok(atoms)
}
