use crate::core::models::element::ElementData;
use crate::core::models::molecule::{
    Bond, BondType, Geometry, Hybridization, Molecule, Polarity, ReactionTendency, Reactivity,
    VseprAnalysis,
};
use crate::core::physics::{phase, vsepr};
use crate::core::physics::vsepr::ValenceBehavior;
use crate::core::utils::geometry::ideal_positions;
use crate::core::utils::notation::hill_formula;
use crate::engine::error::ResolveError;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

const DEFAULT_NAME: &str = "Custom Molecule";

/// Builds molecules from element records and stoichiometric counts.
///
/// The molecule model has no fitted coefficients, so the resolver carries no
/// calibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoleculeResolver;

struct Shape {
    geometry: Geometry,
    bond_angle: Option<f64>,
    vsepr: Option<VseprAnalysis>,
}

impl MoleculeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Derives the molecule made of `counts[i]` atoms of `atoms[i]`.
    ///
    /// `name` defaults to `"Custom Molecule"` and `formula` to the Hill-order
    /// formula of the input.
    #[instrument(skip_all, name = "molecule_resolver", fields(records = atoms.len()))]
    pub fn resolve(
        &self,
        atoms: &[ElementData],
        counts: &[u32],
        name: Option<&str>,
        formula: Option<&str>,
    ) -> Result<Molecule, ResolveError> {
        validate_shape(atoms, counts)?;
        let masses = atoms
            .iter()
            .map(|atom| {
                atom.atomic_mass.ok_or_else(|| ResolveError::MissingField {
                    record: record_label(atom),
                    field: "atomic_mass",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let molecular_mass_amu: f64 = masses
            .iter()
            .zip(counts)
            .map(|(mass, &count)| mass * f64::from(count))
            .sum();
        let formula = formula.map(str::to_string).unwrap_or_else(|| {
            hill_formula(atoms.iter().zip(counts).map(|(a, &c)| (a.symbol.as_str(), c)))
        });

        let (bond_type, electronegativity_difference) = bond_character(atoms);
        let shape = predict_shape(atoms, counts);
        let lone_pairs = shape.vsepr.as_ref().map_or(0, |v| v.lone_pairs);
        let (polarity, dipole_moment_debye) = vsepr::polarity(
            bond_type,
            electronegativity_difference,
            shape.geometry,
            lone_pairs,
        );
        let phase = phase::estimate(molecular_mass_amu, bond_type, polarity);

        let bonds = match &shape.vsepr {
            Some(analysis) => terminal_bonds(atoms, counts, analysis.central_index),
            None => Vec::new(),
        };
        let bond_lengths: Vec<f64> = bonds.iter().map(|b| f64::from(b.length_pm)).collect();

        let mut composition = BTreeMap::new();
        for (atom, &count) in atoms.iter().zip(counts) {
            *composition.entry(atom.symbol.clone()).or_insert(0) += count;
        }

        debug!(
            %formula,
            molecular_mass_amu,
            geometry = shape.geometry.name(),
            ?polarity,
            "Resolved molecule."
        );

        Ok(Molecule {
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
            formula,
            molecular_mass_amu,
            bond_type,
            electronegativity_difference,
            geometry: shape.geometry,
            bond_angle_deg: shape.bond_angle,
            polarity,
            dipole_moment_debye,
            melting_point_k: phase.melting_point_k,
            boiling_point_k: phase.boiling_point_k,
            density_g_cm3: phase.density_g_cm3,
            state_at_stp: phase.state,
            composition,
            idealized_positions: ideal_positions(shape.geometry, &bond_lengths, shape.bond_angle),
            bonds,
            vsepr: shape.vsepr,
            total_atoms: counts.iter().sum(),
            total_electrons: atoms
                .iter()
                .zip(counts)
                .map(|(a, &c)| a.atomic_number * c)
                .sum(),
            total_valence_electrons: atoms
                .iter()
                .zip(counts)
                .map(|(a, &c)| a.valence_electrons.unwrap_or(0) * c)
                .sum(),
        })
    }

    /// Resolves a flat atom list such as `[H, H, O]`, grouping records by
    /// symbol in order of first appearance.
    pub fn resolve_atoms(
        &self,
        atoms: &[ElementData],
        name: Option<&str>,
        formula: Option<&str>,
    ) -> Result<Molecule, ResolveError> {
        let mut distinct: Vec<ElementData> = Vec::new();
        let mut counts: Vec<u32> = Vec::new();
        for atom in atoms {
            match distinct.iter().position(|d| d.symbol == atom.symbol) {
                Some(index) => counts[index] += 1,
                None => {
                    distinct.push(atom.clone());
                    counts.push(1);
                }
            }
        }
        self.resolve(&distinct, &counts, name, formula)
    }

    /// Reactivity from the count-weighted mean ionization energy.
    pub fn reaction_tendency(&self, atoms: &[ElementData], counts: &[u32]) -> Result<ReactionTendency, ResolveError> {
        validate_shape(atoms, counts)?;
        let total: u32 = counts.iter().sum();
        let weighted: f64 = atoms
            .iter()
            .zip(counts)
            .map(|(a, &c)| a.ionization_or_default() * f64::from(c))
            .sum();
        let average_ionization_energy_ev = weighted / f64::from(total);
        let reactivity = if average_ionization_energy_ev < 8.0 {
            Reactivity::High
        } else if average_ionization_energy_ev < 12.0 {
            Reactivity::Moderate
        } else {
            Reactivity::Low
        };
        Ok(ReactionTendency {
            average_ionization_energy_ev,
            reactivity,
        })
    }
}

fn validate_shape(atoms: &[ElementData], counts: &[u32]) -> Result<(), ResolveError> {
    if atoms.is_empty() {
        return Err(ResolveError::EmptyInput { what: "atoms" });
    }
    if counts.is_empty() {
        return Err(ResolveError::EmptyInput { what: "counts" });
    }
    if atoms.len() != counts.len() {
        return Err(ResolveError::LengthMismatch {
            atoms: atoms.len(),
            counts: counts.len(),
        });
    }
    if let Some(index) = counts.iter().position(|&c| c == 0) {
        return Err(ResolveError::InvalidCount { index });
    }
    Ok(())
}

fn record_label(atom: &ElementData) -> String {
    if atom.symbol.is_empty() {
        atom.name.clone()
    } else {
        atom.symbol.clone()
    }
}

/// Bond type from the widest electronegativity gap. Zero electronegativities
/// (noble gases) do not take part; with none left the bonds are nonpolar.
fn bond_character(atoms: &[ElementData]) -> (BondType, f64) {
    let valid: Vec<f64> = atoms
        .iter()
        .map(ElementData::electronegativity_or_default)
        .filter(|&en| en > 0.0)
        .collect();
    if valid.is_empty() {
        return (BondType::NonpolarCovalent, 0.0);
    }
    let max = valid.iter().copied().fold(f64::MIN, f64::max);
    let min = valid.iter().copied().fold(f64::MAX, f64::min);
    let delta = max - min;
    (BondType::from_difference(delta), delta)
}

fn predict_shape(atoms: &[ElementData], counts: &[u32]) -> Shape {
    if atoms.len() == 1 {
        let (geometry, bond_angle) = vsepr::single_element_geometry(counts[0]);
        return Shape {
            geometry,
            bond_angle,
            vsepr: None,
        };
    }

    let central_index = vsepr::central_atom_index(
        atoms
            .iter()
            .map(|a| (a.symbol.as_str(), a.electronegativity_or_default())),
    );
    let central = &atoms[central_index];
    let valence = central
        .valence_electrons
        .unwrap_or(ElementData::DEFAULT_VALENCE);
    let total: u32 = counts.iter().sum();
    let terminal_atoms = total - counts[central_index];

    let behavior = ValenceBehavior::classify(central.atomic_number, &central.symbol);
    let bonding_electrons = behavior.bonding_electrons(valence, terminal_atoms);
    let lone_pairs = vsepr::lone_pairs(valence, bonding_electrons);
    let (geometry, bond_angle) = vsepr::geometry_for(terminal_atoms, lone_pairs);

    Shape {
        geometry,
        bond_angle,
        vsepr: Some(VseprAnalysis {
            central_atom: central.symbol.clone(),
            central_index,
            bonding_domains: terminal_atoms,
            lone_pairs,
            notation: vsepr::notation(terminal_atoms, lone_pairs),
            hybridization: Hybridization::from_steric_number(terminal_atoms + lone_pairs),
        }),
    }
}

/// One bond per terminal atom, `0.9·(r_central + r_terminal)` long.
fn terminal_bonds(atoms: &[ElementData], counts: &[u32], central_index: usize) -> Vec<Bond> {
    let central = &atoms[central_index];
    let central_radius = central.radius_or_default();
    atoms
        .iter()
        .zip(counts)
        .enumerate()
        .filter(|(index, _)| *index != central_index)
        .flat_map(|(_, (atom, &count))| {
            let length_pm = (f64::from(central_radius + atom.radius_or_default()) * 0.9) as u32;
            (0..count).map(move |_| Bond {
                from: central.symbol.clone(),
                to: atom.symbol.clone(),
                length_pm,
            })
        })
        .collect()
}
