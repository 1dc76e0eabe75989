use crate::core::models::molecule::{BondType, Geometry, Polarity};

/// How many of its valence electrons a central atom commits to bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValenceBehavior {
    /// Uses every valence electron while it has at most four neighbours.
    Carbon,
    /// At most three bonds, keeping a lone pair.
    Nitrogen,
    /// Oxygen and sulfur: at most two bonds.
    Chalcogen,
    /// At most one bond.
    Halogen,
    /// Up to five bonds through an expanded octet.
    Phosphorus,
    Generic,
}

impl ValenceBehavior {
    /// Classifies by atomic number, or by symbol when the number is unknown (0).
    pub fn classify(atomic_number: u32, symbol: &str) -> Self {
        match atomic_number {
            6 => Self::Carbon,
            7 => Self::Nitrogen,
            8 | 16 => Self::Chalcogen,
            9 | 17 | 35 | 53 => Self::Halogen,
            15 => Self::Phosphorus,
            0 => match symbol {
                "C" => Self::Carbon,
                "N" => Self::Nitrogen,
                "O" | "S" => Self::Chalcogen,
                "F" | "Cl" | "Br" | "I" => Self::Halogen,
                "P" => Self::Phosphorus,
                _ => Self::Generic,
            },
            _ => Self::Generic,
        }
    }

    pub fn bonding_electrons(self, valence: u32, terminal_atoms: u32) -> u32 {
        match self {
            Self::Carbon if terminal_atoms <= 4 => valence,
            Self::Carbon | Self::Generic => valence.min(terminal_atoms),
            Self::Nitrogen => terminal_atoms.min(3),
            Self::Chalcogen => terminal_atoms.min(2),
            Self::Halogen => terminal_atoms.min(1),
            Self::Phosphorus => terminal_atoms.min(5),
        }
    }
}

/// `(bonding domains, lone pairs)` to shape and ideal bond angle.
#[rustfmt::skip]
pub const VSEPR_TABLE: [((u32, u32), Geometry, f64); 13] = [
    ((2, 0), Geometry::Linear, 180.0),
    ((3, 0), Geometry::TrigonalPlanar, 120.0),
    ((2, 1), Geometry::Bent, 117.0),
    ((4, 0), Geometry::Tetrahedral, 109.5),
    ((3, 1), Geometry::TrigonalPyramidal, 107.0),
    ((2, 2), Geometry::Bent, 104.5),
    ((5, 0), Geometry::TrigonalBipyramidal, 90.0),
    ((4, 1), Geometry::Seesaw, 117.0),
    ((3, 2), Geometry::TShaped, 90.0),
    ((2, 3), Geometry::Linear, 180.0),
    ((6, 0), Geometry::Octahedral, 90.0),
    ((5, 1), Geometry::SquarePyramidal, 90.0),
    ((4, 2), Geometry::SquarePlanar, 90.0),
];

/// Shape for a central atom; anything outside the table is [`Geometry::Complex`].
pub fn geometry_for(bonding_domains: u32, lone_pairs: u32) -> (Geometry, Option<f64>) {
    VSEPR_TABLE
        .iter()
        .find(|(key, _, _)| *key == (bonding_domains, lone_pairs))
        .map_or((Geometry::Complex, None), |(_, geometry, angle)| (*geometry, Some(*angle)))
}

/// Shape of a species made of one element only.
pub fn single_element_geometry(count: u32) -> (Geometry, Option<f64>) {
    match count {
        1 => (Geometry::Atomic, None),
        2 => (Geometry::Linear, Some(180.0)),
        _ => (Geometry::Polyatomic, None),
    }
}

/// Index of the non-hydrogen atom with the strictly lowest electronegativity,
/// or 0 when every candidate is hydrogen.
pub fn central_atom_index<'a, I>(atoms: I) -> usize
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut central = 0;
    let mut lowest = f64::INFINITY;
    for (index, (symbol, electronegativity)) in atoms.into_iter().enumerate() {
        if symbol != "H" && electronegativity < lowest {
            lowest = electronegativity;
            central = index;
        }
    }
    central
}

pub fn lone_pairs(valence: u32, bonding_electrons: u32) -> u32 {
    valence.saturating_sub(bonding_electrons) / 2
}

pub fn notation(bonding_domains: u32, lone_pairs: u32) -> String {
    if lone_pairs > 0 {
        format!("AX{bonding_domains}E{lone_pairs}")
    } else {
        format!("AX{bonding_domains}")
    }
}

/// Molecular polarity and an estimated dipole moment (D).
pub fn polarity(bond_type: BondType, delta_en: f64, geometry: Geometry, lone_pairs: u32) -> (Polarity, f64) {
    if bond_type == BondType::Ionic {
        return (Polarity::Ionic, delta_en * 0.8);
    }
    if delta_en <= 0.4 {
        return (Polarity::Nonpolar, 0.0);
    }
    if geometry.is_symmetric() && lone_pairs == 0 {
        return (Polarity::Nonpolar, 0.0);
    }
    if geometry.is_asymmetric() || lone_pairs > 0 {
        return (Polarity::Polar, delta_en * 0.8);
    }
    (Polarity::Polar, delta_en * 0.5)
}
