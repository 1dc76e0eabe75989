use super::atom::Atom;
use serde::{Deserialize, Serialize};

/// Atom-like record consumed by the molecule resolver.
///
/// Only `atomic_mass` is demanded. The other properties fall back to
/// documented defaults when absent: electronegativity 2.0, valence 4 (for
/// geometry only), radius 100 pm, ionization energy 10 eV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub atomic_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronegativity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence_electrons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ionization_energy: Option<f64>,
}

impl ElementData {
    pub const DEFAULT_ELECTRONEGATIVITY: f64 = 2.0;
    pub const DEFAULT_VALENCE: u32 = 4;
    pub const DEFAULT_RADIUS_PM: u32 = 100;
    pub const DEFAULT_IONIZATION_EV: f64 = 10.0;

    pub fn new(symbol: impl Into<String>, atomic_number: u32, atomic_mass: f64) -> Self {
        Self {
            symbol: symbol.into(),
            atomic_number,
            atomic_mass: Some(atomic_mass),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_electronegativity(mut self, electronegativity: f64) -> Self {
        self.electronegativity = Some(electronegativity);
        self
    }

    pub fn with_valence_electrons(mut self, valence: u32) -> Self {
        self.valence_electrons = Some(valence);
        self
    }

    pub fn with_atomic_radius(mut self, radius_pm: u32) -> Self {
        self.atomic_radius = Some(radius_pm);
        self
    }

    pub fn with_ionization_energy(mut self, ionization_energy_ev: f64) -> Self {
        self.ionization_energy = Some(ionization_energy_ev);
        self
    }

    /// Electronegativity with the default applied. An explicit zero is kept.
    pub fn electronegativity_or_default(&self) -> f64 {
        self.electronegativity
            .unwrap_or(Self::DEFAULT_ELECTRONEGATIVITY)
    }

    pub fn radius_or_default(&self) -> u32 {
        self.atomic_radius.unwrap_or(Self::DEFAULT_RADIUS_PM)
    }

    pub fn ionization_or_default(&self) -> f64 {
        self.ionization_energy.unwrap_or(Self::DEFAULT_IONIZATION_EV)
    }
}

impl From<&Atom> for ElementData {
    fn from(atom: &Atom) -> Self {
        Self {
            symbol: atom.symbol.clone(),
            name: atom.name.clone(),
            atomic_number: atom.atomic_number,
            atomic_mass: Some(atom.atomic_mass),
            electronegativity: Some(atom.electronegativity),
            valence_electrons: Some(atom.valence_electrons),
            atomic_radius: Some(atom.atomic_radius_pm),
            ionization_energy: Some(atom.ionization_energy_ev),
        }
    }
}
