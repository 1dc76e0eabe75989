use serde::{Deserialize, Serialize};
use std::fmt;

/// Periodic-table block, named after the angular momentum of the last
/// orbital the aufbau order fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl Block {
    pub fn from_l(l: u32) -> Self {
        match l {
            1 => Self::P,
            2 => Self::D,
            3 => Self::F,
            _ => Self::S,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Electrons placed in one subshell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitalOccupancy {
    pub n: u32,
    pub l: u32,
    pub electrons: u32,
}

impl OrbitalOccupancy {
    /// Subshell label such as `3d`.
    pub fn label(&self) -> String {
        format!("{}{}", self.n, Block::from_l(self.l).letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElectronConfiguration {
    pub orbitals: Vec<OrbitalOccupancy>,
    /// Superscript notation, e.g. `1s² 2s² 2p⁴`.
    pub notation: String,
}

impl ElectronConfiguration {
    pub fn outermost(&self) -> Option<&OrbitalOccupancy> {
        self.orbitals.last()
    }

    /// Block of the last filled orbital; an empty configuration counts as `s`.
    pub fn block(&self) -> Block {
        self.outermost().map_or(Block::S, |o| Block::from_l(o.l))
    }

    pub fn total_electrons(&self) -> u32 {
        self.orbitals.iter().map(|o| o.electrons).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IonType {
    Neutral,
    Cation,
    Anion,
}

impl IonType {
    pub fn from_charge(charge: f64) -> Self {
        if charge.abs() < 1e-9 {
            Self::Neutral
        } else if charge > 0.0 {
            Self::Cation
        } else {
            Self::Anion
        }
    }
}

/// Individual terms of the semi-empirical binding energy, in MeV. Surface,
/// Coulomb and asymmetry terms are stored as the (positive) amounts subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BindingEnergyTerms {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
    pub shell: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AtomMassBreakdown {
    /// `Z·m_p + N·m_n` before the binding deficit.
    pub raw_mass_amu: f64,
    pub mass_deficit_amu: f64,
    pub binding: BindingEnergyTerms,
}

/// Position of a nucleus relative to the valley of stability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NuclearStability {
    pub is_stable: bool,
    pub n_z_ratio: Option<f64>,
    pub optimal_ratio: f64,
    pub tolerance: f64,
    pub half_life_s: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsotopeStability {
    Stable,
    LongLived,
    Unstable,
}

impl fmt::Display for IsotopeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stable => "Stable",
            Self::LongLived => "Long-lived",
            Self::Unstable => "Unstable",
        };
        f.write_str(s)
    }
}

/// Nuclear properties of a single `(Z, N)` without building a full atom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeProperties {
    pub mass_number: u32,
    pub atomic_mass_amu: f64,
    pub binding_energy_mev: f64,
    pub binding_energy_per_nucleon_mev: f64,
    pub n_z_ratio: f64,
    pub stability: IsotopeStability,
}

/// One isotope predicted around the valley of stability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeEstimate {
    pub mass_number: u32,
    pub neutrons: u32,
    /// Percent of the element's predicted stable isotopes; 0 for unstable ones.
    pub abundance_percent: f64,
    pub is_stable: bool,
    pub half_life_s: Option<f64>,
}

/// A neutral or ionized atom assembled from nucleons and electrons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub atomic_mass: f64,
    pub charge: f64,
    pub ion_type: IonType,
    pub block: Block,
    pub period: u32,
    /// `None` for lanthanides and actinides.
    pub group: Option<u32>,
    pub electron_configuration: ElectronConfiguration,
    pub valence_electrons: u32,
    pub ionization_energy_ev: f64,
    pub electronegativity: f64,
    pub electron_affinity_kj_mol: f64,
    pub atomic_radius_pm: u32,
    pub covalent_radius_pm: u32,
    pub melting_point_k: f64,
    pub boiling_point_k: f64,
    pub density_g_cm3: f64,
    pub binding_energy_mev: f64,
    pub binding_energy_per_nucleon_mev: f64,
    pub nuclear_stability: NuclearStability,
    pub emission_wavelength_nm: f64,
    pub isotopes: Vec<IsotopeEstimate>,
    pub mass_breakdown: AtomMassBreakdown,
}
