use crate::core::models::atom::{Block, ElectronConfiguration, OrbitalOccupancy};

/// Madelung filling order as `(n, l, capacity)`.
#[rustfmt::skip]
pub const AUFBAU_ORDER: [(u32, u32, u32); 19] = [
    (1, 0, 2), (2, 0, 2), (2, 1, 6), (3, 0, 2), (3, 1, 6),
    (4, 0, 2), (3, 2, 10), (4, 1, 6), (5, 0, 2), (4, 2, 10),
    (5, 1, 6), (6, 0, 2), (4, 3, 14), (5, 2, 10), (6, 1, 6),
    (7, 0, 2), (5, 3, 14), (6, 2, 10), (7, 1, 6),
];

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

pub fn to_superscript(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|d| d.to_digit(10).map_or(d, |i| SUPERSCRIPT_DIGITS[i as usize]))
        .collect()
}

/// Fills electrons in aufbau order. Electrons beyond the last listed orbital
/// (more than 118) are not placed.
pub fn electron_configuration(electrons: u32) -> ElectronConfiguration {
    let mut remaining = electrons;
    let mut orbitals = Vec::new();
    for &(n, l, capacity) in &AUFBAU_ORDER {
        if remaining == 0 {
            break;
        }
        let placed = remaining.min(capacity);
        orbitals.push(OrbitalOccupancy { n, l, electrons: placed });
        remaining -= placed;
    }
    let notation = orbitals
        .iter()
        .map(|o| format!("{}{}", o.label(), to_superscript(o.electrons)))
        .collect::<Vec<_>>()
        .join(" ");
    ElectronConfiguration { orbitals, notation }
}

/// Block of the neutral element with atomic number `z`.
pub fn block(z: u32) -> Block {
    electron_configuration(z).block()
}

pub fn period(z: u32) -> u32 {
    match z {
        0 => 0,
        1..=2 => 1,
        3..=10 => 2,
        11..=18 => 3,
        19..=36 => 4,
        37..=54 => 5,
        55..=86 => 6,
        _ => 7,
    }
}

/// IUPAC group (1-18). `None` for lanthanides, actinides, and anything past 118.
pub fn group(z: u32) -> Option<u32> {
    match z {
        1 | 3 | 11 | 19 | 37 | 55 | 87 => Some(1),
        4 | 12 | 20 | 38 | 56 | 88 => Some(2),
        2 => Some(18),
        5..=10 => Some(z + 8),
        13..=18 => Some(z),
        21..=36 => Some(z - 18),
        39..=54 => Some(z - 36),
        72..=86 => Some(z - 68),
        104..=118 => Some(z - 100),
        _ => None,
    }
}

/// Atomic number of the first p-block element in a period.
pub fn p_block_start(period: u32) -> Option<u32> {
    match period {
        2 => Some(5),
        3 => Some(13),
        4 => Some(31),
        5 => Some(49),
        6 => Some(81),
        7 => Some(113),
        _ => None,
    }
}

/// Where a neutral element sits in the periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicPosition {
    pub atomic_number: u32,
    pub period: u32,
    pub group: Option<u32>,
    pub block: Block,
}

impl PeriodicPosition {
    pub fn of(z: u32) -> Self {
        Self {
            atomic_number: z,
            period: period(z),
            group: group(z),
            block: block(z),
        }
    }

    /// Signed distance to the first p-block element of the period.
    pub fn position_in_p(&self) -> i64 {
        match (self.period > 1, p_block_start(self.period)) {
            (true, Some(start)) => i64::from(self.atomic_number) - i64::from(start),
            _ => 0,
        }
    }
}
