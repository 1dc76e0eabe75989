use crate::core::models::atom::Atom;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// One flat CSV row per atom. Nested fields are reduced to scalars.
#[derive(Debug, Serialize)]
struct AtomRow<'a> {
    atomic_number: u32,
    symbol: &'a str,
    name: &'a str,
    mass_number: u32,
    atomic_mass: f64,
    charge: f64,
    block: char,
    period: u32,
    group: Option<u32>,
    electron_configuration: &'a str,
    valence_electrons: u32,
    ionization_energy_ev: f64,
    electronegativity: f64,
    electron_affinity_kj_mol: f64,
    atomic_radius_pm: u32,
    covalent_radius_pm: u32,
    melting_point_k: f64,
    boiling_point_k: f64,
    density_g_cm3: f64,
    binding_energy_mev: f64,
    binding_energy_per_nucleon_mev: f64,
    nuclear_stable: bool,
    emission_wavelength_nm: f64,
}

impl<'a> From<&'a Atom> for AtomRow<'a> {
    fn from(atom: &'a Atom) -> Self {
        Self {
            atomic_number: atom.atomic_number,
            symbol: &atom.symbol,
            name: &atom.name,
            mass_number: atom.mass_number,
            atomic_mass: atom.atomic_mass,
            charge: atom.charge,
            block: atom.block.letter(),
            period: atom.period,
            group: atom.group,
            electron_configuration: &atom.electron_configuration.notation,
            valence_electrons: atom.valence_electrons,
            ionization_energy_ev: atom.ionization_energy_ev,
            electronegativity: atom.electronegativity,
            electron_affinity_kj_mol: atom.electron_affinity_kj_mol,
            atomic_radius_pm: atom.atomic_radius_pm,
            covalent_radius_pm: atom.covalent_radius_pm,
            melting_point_k: atom.melting_point_k,
            boiling_point_k: atom.boiling_point_k,
            density_g_cm3: atom.density_g_cm3,
            binding_energy_mev: atom.binding_energy_mev,
            binding_energy_per_nucleon_mev: atom.binding_energy_per_nucleon_mev,
            nuclear_stable: atom.nuclear_stability.is_stable,
            emission_wavelength_nm: atom.emission_wavelength_nm,
        }
    }
}

/// Writes atoms as CSV with a header row.
pub fn write_atoms<W: Write>(writer: W, atoms: &[Atom]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for atom in atoms {
        csv_writer.serialize(AtomRow::from(atom))?;
    }
    csv_writer.flush().map_err(|e| ExportError::Io {
        path: "<writer>".to_string(),
        source: e,
    })
}

pub fn write_atoms_to_path(path: &Path, atoms: &[Atom]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_atoms(std::io::BufWriter::new(file), atoms)
}
