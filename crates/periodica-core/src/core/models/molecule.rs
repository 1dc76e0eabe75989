use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondType {
    Ionic,
    #[serde(rename = "Polar Covalent")]
    PolarCovalent,
    #[serde(rename = "Nonpolar Covalent")]
    NonpolarCovalent,
}

impl BondType {
    /// Classifies by electronegativity difference: above 1.7 ionic, above 0.4 polar.
    pub fn from_difference(delta_en: f64) -> Self {
        if delta_en > 1.7 {
            Self::Ionic
        } else if delta_en > 0.4 {
            Self::PolarCovalent
        } else {
            Self::NonpolarCovalent
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ionic => "Ionic",
            Self::PolarCovalent => "Polar Covalent",
            Self::NonpolarCovalent => "Nonpolar Covalent",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Polar,
    Nonpolar,
    Ionic,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geometry {
    Atomic,
    Linear,
    Bent,
    #[serde(rename = "Trigonal Planar")]
    TrigonalPlanar,
    #[serde(rename = "Trigonal Pyramidal")]
    TrigonalPyramidal,
    Tetrahedral,
    #[serde(rename = "Trigonal Bipyramidal")]
    TrigonalBipyramidal,
    Seesaw,
    #[serde(rename = "T-shaped")]
    TShaped,
    Octahedral,
    #[serde(rename = "Square Pyramidal")]
    SquarePyramidal,
    #[serde(rename = "Square Planar")]
    SquarePlanar,
    /// More than two atoms of a single element.
    Polyatomic,
    /// Outside the VSEPR table.
    Complex,
}

impl Geometry {
    pub fn name(self) -> &'static str {
        match self {
            Self::Atomic => "Atomic",
            Self::Linear => "Linear",
            Self::Bent => "Bent",
            Self::TrigonalPlanar => "Trigonal Planar",
            Self::TrigonalPyramidal => "Trigonal Pyramidal",
            Self::Tetrahedral => "Tetrahedral",
            Self::TrigonalBipyramidal => "Trigonal Bipyramidal",
            Self::Seesaw => "Seesaw",
            Self::TShaped => "T-shaped",
            Self::Octahedral => "Octahedral",
            Self::SquarePyramidal => "Square Pyramidal",
            Self::SquarePlanar => "Square Planar",
            Self::Polyatomic => "Polyatomic",
            Self::Complex => "Complex",
        }
    }

    /// Shapes whose bond dipoles cancel when the central atom has no lone pairs.
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            Self::Linear | Self::TrigonalPlanar | Self::Tetrahedral | Self::SquarePlanar | Self::Octahedral
        )
    }

    /// Shapes that always leave a net dipole.
    pub fn is_asymmetric(self) -> bool {
        matches!(
            self,
            Self::Bent | Self::TrigonalPyramidal | Self::Seesaw | Self::TShaped | Self::SquarePyramidal
        )
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateOfMatter {
    Solid,
    Liquid,
    Gas,
}

impl fmt::Display for StateOfMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hybridization {
    Sp,
    Sp2,
    Sp3,
    Sp3d,
    Sp3d2,
}

impl Hybridization {
    pub fn from_steric_number(steric_number: u32) -> Option<Self> {
        match steric_number {
            2 => Some(Self::Sp),
            3 => Some(Self::Sp2),
            4 => Some(Self::Sp3),
            5 => Some(Self::Sp3d),
            6 => Some(Self::Sp3d2),
            _ => None,
        }
    }
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sp => "sp",
            Self::Sp2 => "sp²",
            Self::Sp3 => "sp³",
            Self::Sp3d => "sp³d",
            Self::Sp3d2 => "sp³d²",
        };
        f.write_str(s)
    }
}

/// A central-to-terminal bond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub from: String,
    pub to: String,
    pub length_pm: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VseprAnalysis {
    pub central_atom: String,
    /// Index of the central atom in the resolver input.
    pub central_index: usize,
    pub bonding_domains: u32,
    pub lone_pairs: u32,
    /// `AXnEm`, with `Em` omitted when there are no lone pairs.
    pub notation: String,
    pub hybridization: Option<Hybridization>,
}

impl VseprAnalysis {
    pub fn steric_number(&self) -> u32 {
        self.bonding_domains + self.lone_pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reactivity {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionTendency {
    pub average_ionization_energy_ev: f64,
    pub reactivity: Reactivity,
}

/// A molecule assembled from element records and stoichiometric counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub name: String,
    pub formula: String,
    pub molecular_mass_amu: f64,
    pub bond_type: BondType,
    pub electronegativity_difference: f64,
    pub geometry: Geometry,
    pub bond_angle_deg: Option<f64>,
    pub polarity: Polarity,
    pub dipole_moment_debye: f64,
    pub melting_point_k: f64,
    pub boiling_point_k: f64,
    pub density_g_cm3: f64,
    pub state_at_stp: StateOfMatter,
    pub composition: BTreeMap<String, u32>,
    pub bonds: Vec<Bond>,
    /// Absent for single-element species.
    pub vsepr: Option<VseprAnalysis>,
    pub total_atoms: u32,
    pub total_electrons: u32,
    pub total_valence_electrons: u32,
    /// Terminal atom positions (pm) around the central atom at the origin.
    pub idealized_positions: Vec<Point3<f64>>,
}
