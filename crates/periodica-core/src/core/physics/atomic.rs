//! Periodic-trend estimates for single atoms.
//!
//! Each property follows the same chain: a reference table when the element
//! is tabulated, then a physical model, then interpolation between tabulated
//! neighbours, and finally a block-specific empirical trend. Derived values
//! are clamped to physically sensible ranges.

use super::orbitals::{PeriodicPosition, electron_configuration, period};
use crate::core::constants::{
    AVOGADRO, BOHR_RADIUS_PM, FINE_STRUCTURE, KJ_MOL_PER_EV, REFERENCE_ELECTRON_MASS_MEV,
    RYDBERG_ENERGY_EV,
};
use crate::core::models::atom::{Block, ElectronConfiguration};
use crate::core::tables::electronegativity::PAULING_ELECTRONEGATIVITY;
use crate::core::tables::ionization::{ELECTRON_AFFINITY_KJ_MOL, IONIZATION_ENERGY_EV};
use crate::core::tables::radii::ATOMIC_RADIUS_PM;
use crate::core::tables::screening::{clementi_zeff, nearest_lower_clementi, quantum_defect};
use crate::core::tables::thermal::{
    EMISSION_LINE_NM, GAS_BOILING_POINT_K, GAS_DENSITY_G_CM3, GAS_MELTING_POINT_K,
};
use crate::core::tables::{by_atomic_number, interpolate, neighbours};
use std::f64::consts::PI;

const NOBLE_GASES: [u32; 7] = [2, 10, 18, 36, 54, 86, 118];

const IONIZATION_RANGE_EV: (f64, f64) = (3.5, 30.0);
const ELECTRONEGATIVITY_RANGE: (f64, f64) = (0.7, 4.0);

pub fn is_noble_gas(z: u32) -> bool {
    NOBLE_GASES.contains(&z)
}

/// Slater's screening rules, used when no Clementi value is close.
pub fn slater_zeff(z: u32, n: u32) -> f64 {
    if z == 0 {
        return 0.0;
    }
    let beyond = |start: u32| f64::from(z.saturating_sub(start)) * 0.35;
    let sigma = match n {
        1 => 0.30 * f64::from(z - 1),
        2 => 2.0 * 0.85 + beyond(3),
        3 => 2.0 * 1.00 + 8.0 * 0.85 + beyond(11),
        4 => 10.0 * 1.00 + 8.0 * 0.85 + beyond(19),
        5 => 18.0 * 1.00 + 18.0 * 0.85 + beyond(37),
        6 => 36.0 * 1.00 + 18.0 * 0.85 + beyond(55),
        _ => 0.85 * f64::from(z - 1),
    };
    (f64::from(z) - sigma).max(1.0)
}

/// Effective nuclear charge felt by orbital `(n, l)`: tabulated Clementi value,
/// else the nearest lower tabulated element plus 0.85 per extra proton, else Slater.
pub fn effective_nuclear_charge(z: u32, n: u32, l: u32) -> f64 {
    if let Some(zeff) = clementi_zeff(z, n, l) {
        return zeff;
    }
    match nearest_lower_clementi(z, n, l) {
        Some((key, zeff)) => zeff + f64::from(z - key) * 0.85,
        None => slater_zeff(z, n),
    }
}

/// Tabulated quantum defect, else a period trend per `l`.
pub fn quantum_defect_for(z: u32, l: u32) -> f64 {
    if let Some(delta) = quantum_defect(z, l) {
        return delta;
    }
    let p = f64::from(period(z));
    match l {
        0 => 0.3 + 0.6 * (p - 1.0),
        1 => (0.05 + 0.35 * (p - 2.0)).max(0.0),
        2 => (0.01 + 0.15 * (p - 3.0)).max(0.0),
        _ => (0.005 + 0.05 * (p - 5.0)).max(0.0),
    }
}

/// `R∞ (m_e/0.511) Z_eff² / (n − δ_l)²`, with the relativistic factor
/// `1 + (αZ)²/2n²` above Z = 50.
pub fn quantum_defect_ionization(z: u32, electron_mass_mev: f64, n: u32, l: u32) -> f64 {
    let zeff = effective_nuclear_charge(z, n, l);
    let nf = f64::from(n);
    let n_eff = nf - quantum_defect_for(z, l);
    let mass_ratio = if electron_mass_mev > 0.0 {
        electron_mass_mev / REFERENCE_ELECTRON_MASS_MEV
    } else {
        1.0
    };
    let rydberg = RYDBERG_ENERGY_EV * mass_ratio;
    let mut ie = if n_eff > 0.5 {
        rydberg * zeff * zeff / (n_eff * n_eff)
    } else {
        rydberg * zeff * zeff / (nf * nf)
    };
    if z > 50 {
        let az = FINE_STRUCTURE * f64::from(z);
        ie *= 1.0 + az * az / (2.0 * nf * nf);
    }
    ie
}

fn block_ionization_trend(position: &PeriodicPosition, block: Block) -> f64 {
    let p = f64::from(position.period);
    match block {
        Block::S => match position.group {
            Some(1) => 5.5 - 0.3 * (p - 2.0),
            Some(2) => 9.0 - 0.5 * (p - 2.0),
            _ => 6.0,
        },
        Block::P => 8.0 + position.position_in_p() as f64 - 0.3 * (p - 2.0),
        Block::D => 7.5 - 0.2 * (p - 4.0),
        Block::F => 5.8 + 0.02 * f64::from(position.atomic_number % 14),
    }
}

/// First ionization energy (eV) with the outermost electron taken from
/// `configuration` (the atom's actual electrons).
pub fn ionization_energy(z: u32, electron_mass_mev: f64, configuration: &ElectronConfiguration) -> f64 {
    if z == 0 {
        return 0.0;
    }
    if let Some(ie) = by_atomic_number(&IONIZATION_ENERGY_EV, z) {
        return ie;
    }

    let (n, l) = configuration.outermost().map_or((1, 0), |o| (o.n, o.l));
    let base = quantum_defect_ionization(z, electron_mass_mev, n, l);
    let clamp = |v: f64| v.clamp(IONIZATION_RANGE_EV.0, IONIZATION_RANGE_EV.1);

    match neighbours(&IONIZATION_ENERGY_EV, z, |_| true) {
        (Some(lower), Some(upper)) if upper.0 - lower.0 <= 10 => {
            return clamp(interpolate(lower, upper, z));
        }
        (Some(lower), Some(upper)) if upper.0 - lower.0 <= 20 => {
            return clamp(0.2 * base + 0.8 * interpolate(lower, upper, z));
        }
        (Some(_), Some(_)) => {}
        (Some((key, value)), None) if z - key <= 5 => {
            return clamp(value - 0.1 * f64::from(z - key));
        }
        (None, Some((key, value))) if key - z <= 5 => {
            return clamp(value + 0.1 * f64::from(key - z));
        }
        _ => {}
    }

    let position = PeriodicPosition::of(z);
    clamp(block_ionization_trend(&position, configuration.block()))
}

/// Mulliken electronegativity `(IE + EA)/2` mapped onto the Pauling scale.
pub fn mulliken_to_pauling(ie_ev: f64, ea_kj_mol: f64) -> f64 {
    let chi_mulliken = (ie_ev + ea_kj_mol / KJ_MOL_PER_EV) / 2.0;
    if chi_mulliken > 0.0 {
        0.359 * chi_mulliken.sqrt() + 0.744
    } else {
        1.0
    }
}

/// Pauling electronegativity.
pub fn electronegativity(position: &PeriodicPosition) -> f64 {
    let z = position.atomic_number;
    if z == 0 {
        return 0.0;
    }
    if let Some(chi) = by_atomic_number(&PAULING_ELECTRONEGATIVITY, z) {
        return chi;
    }
    let p = f64::from(position.period);
    if is_noble_gas(z) {
        return if z <= 18 { 0.0 } else { (2.6 - 0.1 * (p - 5.0)).max(0.0) };
    }

    let clamp = |v: f64| v.clamp(ELECTRONEGATIVITY_RANGE.0, ELECTRONEGATIVITY_RANGE.1);
    let ie = by_atomic_number(&IONIZATION_ENERGY_EV, z).filter(|v| *v != 0.0);
    let ea = by_atomic_number(&ELECTRON_AFFINITY_KJ_MOL, z).filter(|v| *v != 0.0);
    if let (Some(ie), Some(ea)) = (ie, ea) {
        return clamp(mulliken_to_pauling(ie, ea));
    }

    if let (Some(lower), Some(upper)) = neighbours(&PAULING_ELECTRONEGATIVITY, z, |v| v > 0.0) {
        return clamp(interpolate(lower, upper, z));
    }

    let group = position.group.map(f64::from);
    let chi = match position.block {
        Block::S => match position.group {
            Some(1) => 1.0 - 0.04 * (p - 2.0),
            Some(2) => 1.5 - 0.10 * (p - 2.0),
            _ => 1.2,
        },
        Block::P => 1.8 + 0.35 * group.map_or(3.0, |g| g - 12.0) - 0.08 * (p - 2.0),
        Block::D => 1.4 + 0.10 * group.map_or(5.0, |g| g - 2.0) - 0.04 * (p - 4.0),
        Block::F => {
            let series_start = if position.period == 6 { 57 } else { 89 };
            1.1 + 0.015 * (f64::from(z) - f64::from(series_start))
        }
    };
    clamp(chi)
}

fn radius_block_correction(position: &PeriodicPosition) -> f64 {
    let p = f64::from(position.period);
    let group = position.group.map(f64::from);
    match position.block {
        Block::S => match position.group {
            Some(1) => 2.8 + 0.15 * (p - 2.0),
            Some(2) => 2.2 + 0.10 * (p - 2.0),
            _ => 1.8,
        },
        Block::P => {
            let in_p = group.map_or(3.0, |g| g - 12.0);
            if in_p == 6.0 { 0.8 } else { 1.5 - 0.12 * in_p }
        }
        Block::D => {
            let correction = 1.4 - 0.03 * group.map_or(5.0, |g| g - 2.0);
            if position.period >= 6 { correction * 0.92 } else { correction }
        }
        Block::F => {
            let z = f64::from(position.atomic_number);
            if position.period == 6 {
                1.6 - 0.015 * (z - 57.0)
            } else {
                1.7 - 0.012 * (z - 89.0)
            }
        }
    }
}

/// Atomic radius (pm): reference value, else `a₀ n²/Z_eff` scaled per block
/// and blended 0.4/0.6 with the interpolated neighbours. Never below 30 pm.
pub fn atomic_radius(position: &PeriodicPosition) -> u32 {
    let z = position.atomic_number;
    if z == 0 {
        return 0;
    }
    if let Some(r) = by_atomic_number(&ATOMIC_RADIUS_PM, z) {
        return r;
    }

    let config = electron_configuration(z);
    let (n, l) = config
        .outermost()
        .map_or((position.period, 0), |o| (o.n, o.l));
    let zeff = effective_nuclear_charge(z, n, l);
    let nf = f64::from(n);
    let mut r = BOHR_RADIUS_PM * nf * nf / zeff * radius_block_correction(position);

    if let (Some(lower), Some(upper)) = neighbours(&ATOMIC_RADIUS_PM, z, |_| true) {
        r = 0.4 * r + 0.6 * interpolate(lower, upper, z);
    }
    (r.round().max(30.0)) as u32
}

/// Covalent radius as a block-dependent fraction of the atomic radius, clamped to 20-250 pm.
pub fn covalent_radius(atomic_radius_pm: u32, block: Block, period: u32) -> u32 {
    if atomic_radius_pm == 0 {
        return 0;
    }
    let ratio = match block {
        Block::S if period <= 3 => 0.70,
        Block::S => 0.65,
        Block::P => 0.85,
        Block::D => 0.75,
        Block::F => 0.80,
    };
    ((f64::from(atomic_radius_pm) * ratio) as u32).clamp(20, 250)
}

pub fn valence_electrons(position: &PeriodicPosition) -> u32 {
    let z = position.atomic_number;
    if z == 0 {
        return 0;
    }
    match (position.block, position.group) {
        (Block::S, Some(g @ (1 | 2))) => return g,
        (Block::S, Some(18)) if z == 2 => return 2,
        (Block::P, Some(g)) if g >= 13 => return g - 10,
        (Block::D, Some(g)) if (3..=12).contains(&g) => return if g <= 7 { g } else { 2 },
        (Block::F, _) => return 3,
        _ => {}
    }
    if z <= 2 { z } else { (z - 2).min(8) }
}

pub fn melting_point(position: &PeriodicPosition) -> f64 {
    let z = position.atomic_number;
    if z == 0 {
        return 0.0;
    }
    if let Some(mp) = by_atomic_number(&GAS_MELTING_POINT_K, z) {
        return mp;
    }
    let p = f64::from(position.period);
    match (position.block, position.group) {
        (Block::S, Some(1)) => 500.0 - 35.0 * (p - 2.0),
        (Block::S, Some(2)) => 1100.0 - 30.0 * (p - 2.0),
        (Block::P, _) if z == 6 => 3823.0,
        (Block::P, Some(g)) => {
            let in_p = f64::from(g) - 12.0;
            if in_p <= 2.0 {
                600.0 - 30.0 * (p - 3.0) + 200.0 * (in_p - 1.0)
            } else {
                500.0 - 20.0 * (p - 3.0)
            }
        }
        (Block::D, _) => 1800.0 + 100.0 * (p - 4.0),
        (Block::F, _) if position.period == 6 => 1200.0 + 50.0 * f64::from(z.saturating_sub(57) % 7),
        (Block::F, _) => 1300.0,
        _ => 1000.0,
    }
}

/// Boiling point from the melting point and a block ratio, clamped to 10-6000 K.
pub fn boiling_point(position: &PeriodicPosition, melting_point_k: f64) -> f64 {
    let z = position.atomic_number;
    if z == 0 {
        return 0.0;
    }
    if let Some(bp) = by_atomic_number(&GAS_BOILING_POINT_K, z) {
        return bp;
    }
    let ratio = match (position.block, position.group) {
        (Block::S, Some(1)) => 2.5,
        (Block::S, _) => 1.8,
        (Block::P, _) => 1.5,
        (Block::D, _) => 1.75,
        (Block::F, _) => 2.0,
    };
    (melting_point_k * ratio).clamp(10.0, 6000.0)
}

/// Density (g/cm³) of close-packed spheres of the atomic radius, scaled per block.
pub fn density(position: &PeriodicPosition, atomic_mass_amu: f64, atomic_radius_pm: u32) -> f64 {
    let z = position.atomic_number;
    if z == 0 || atomic_radius_pm == 0 {
        return 0.0;
    }
    if let Some(rho) = by_atomic_number(&GAS_DENSITY_G_CM3, z) {
        return rho;
    }
    const PACKING: f64 = 0.74;
    let r_m = f64::from(atomic_radius_pm) * 1e-12;
    let volume = 4.0 / 3.0 * PI * r_m.powi(3);
    let molar_volume_m3 = volume * AVOGADRO / PACKING;
    let mut rho = (atomic_mass_amu / 1000.0) / (molar_volume_m3 * 1e6);
    rho *= match position.block {
        Block::D if position.period >= 6 => 4.5,
        Block::D => 3.0,
        Block::F => 2.5,
        Block::S => 0.3,
        Block::P => 1.0,
    };
    rho.clamp(0.001, 25.0)
}

/// Electron affinity (kJ/mol): reference value, else a periodic correlation
/// with electronegativity. Noble gases and alkaline earths come out negative.
pub fn electron_affinity(position: &PeriodicPosition, electronegativity: f64) -> f64 {
    let z = position.atomic_number;
    if let Some(ea) = by_atomic_number(&ELECTRON_AFFINITY_KJ_MOL, z) {
        return ea;
    }
    if z == 0 || electronegativity == 0.0 {
        return 0.0;
    }
    let p = f64::from(position.period);
    if is_noble_gas(z) {
        return -48.0 + p * 5.0;
    }
    match position.group {
        Some(2) => return -20.0 + p * 3.0,
        Some(17) => return 349.0 - (p - 3.0) * 30.0,
        _ => {}
    }
    let block_factor = match position.block {
        Block::S => 0.4,
        Block::P => 1.2,
        Block::D => 0.6,
        Block::F => 0.3,
    };
    let period_factor = (1.2 - 0.05 * (p - 2.0)).max(0.5);
    (electronegativity.powi(2) * 25.0 * block_factor * period_factor).clamp(-100.0, 350.0)
}

/// Primary emission wavelength (nm): a known line, else `1240/(0.15·IE)`
/// clamped to 200-1500 nm.
pub fn emission_wavelength(z: u32, ionization_energy_ev: f64) -> f64 {
    if z == 0 || ionization_energy_ev == 0.0 {
        return 0.0;
    }
    if let Some(line) = by_atomic_number(&EMISSION_LINE_NM, z) {
        return line;
    }
    let photon_energy = ionization_energy_ev * 0.15;
    let wavelength = if photon_energy > 0.1 {
        1240.0 / photon_energy
    } else {
        500.0
    };
    wavelength.clamp(200.0, 1500.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn ionization_prefers_reference_values() {
        let config = electron_configuration(1);
        assert_eq!(ionization_energy(1, 0.511, &config), 13.598);
        assert_eq!(ionization_energy(0, 0.511, &config), 0.0);
    }

    #[test]
    fn ionization_beyond_the_table_extrapolates_from_oganesson() {
        let config = electron_configuration(119);
        let last = by_atomic_number(&IONIZATION_ENERGY_EV, 118).unwrap();
        let ie = ionization_energy(120, 0.511, &config);
        assert!(f64_approx_equal(ie, (last - 0.2).clamp(3.5, 30.0)));
    }

    #[test]
    fn ionization_far_beyond_the_table_uses_block_trend() {
        let config = electron_configuration(118);
        let ie = ionization_energy(130, 0.511, &config);
        assert!((3.5..=30.0).contains(&ie));
    }

    #[test]
    fn quantum_defect_formula_for_hydrogen_is_rydberg() {
        let ie = quantum_defect_ionization(1, REFERENCE_ELECTRON_MASS_MEV, 1, 0);
        assert!(f64_approx_equal(ie, RYDBERG_ENERGY_EV));
    }

    #[test]
    fn quantum_defect_formula_scales_with_electron_mass() {
        let normal = quantum_defect_ionization(1, REFERENCE_ELECTRON_MASS_MEV, 1, 0);
        let heavy = quantum_defect_ionization(1, 2.0 * REFERENCE_ELECTRON_MASS_MEV, 1, 0);
        assert!(f64_approx_equal(heavy, 2.0 * normal));
        let unknown = quantum_defect_ionization(1, 0.0, 1, 0);
        assert!(f64_approx_equal(unknown, normal));
    }

    #[test]
    fn heavy_atoms_get_relativistic_boost() {
        let ie = quantum_defect_ionization(55, REFERENCE_ELECTRON_MASS_MEV, 6, 0);
        let n_eff: f64 = 6.0 - 4.0;
        let az = FINE_STRUCTURE * 55.0;
        let expected = RYDBERG_ENERGY_EV * 5.36 * 5.36 / (n_eff * n_eff) * (1.0 + az * az / 72.0);
        assert!(f64_approx_equal(ie, expected));
    }

    #[test]
    fn effective_charge_extrapolates_from_lower_element() {
        assert_eq!(effective_nuclear_charge(8, 2, 1), 4.453);
        let extrapolated = effective_nuclear_charge(57, 6, 0);
        assert!(f64_approx_equal(extrapolated, 6.333 + 0.85));
        assert!(f64_approx_equal(effective_nuclear_charge(3, 3, 2), slater_zeff(3, 3)));
    }

    #[test]
    fn slater_rules_never_drop_below_one() {
        assert_eq!(slater_zeff(0, 1), 0.0);
        assert!(f64_approx_equal(slater_zeff(1, 1), 1.0));
        assert!(f64_approx_equal(slater_zeff(11, 3), 2.2));
        assert_eq!(slater_zeff(3, 3), 1.0);
    }

    #[test]
    fn quantum_defect_trend_for_untabulated_elements() {
        assert_eq!(quantum_defect_for(11, 0), 1.35);
        assert!(f64_approx_equal(quantum_defect_for(26, 0), 0.3 + 0.6 * 3.0));
        assert_eq!(quantum_defect_for(2, 1), 0.0);
    }

    #[test]
    fn electronegativity_reference_and_noble_gases() {
        assert_eq!(electronegativity(&PeriodicPosition::of(8)), 3.44);
        assert_eq!(electronegativity(&PeriodicPosition::of(10)), 0.0);
        let og = electronegativity(&PeriodicPosition::of(118));
        assert!(f64_approx_equal(og, 2.6 - 0.2));
    }

    #[test]
    fn electronegativity_past_the_table_uses_block_trend() {
        let chi = electronegativity(&PeriodicPosition::of(110));
        assert!((0.7..=4.0).contains(&chi));
        let expected = 1.4 + 0.10 * 8.0 - 0.04 * 3.0;
        assert!(f64_approx_equal(chi, expected));
    }

    #[test]
    fn mulliken_conversion() {
        let chi = mulliken_to_pauling(12.968, 349.0);
        let chi_mulliken = (12.968 + 349.0 / KJ_MOL_PER_EV) / 2.0;
        assert!(f64_approx_equal(chi, 0.359 * f64::sqrt(chi_mulliken) + 0.744));
        assert_eq!(mulliken_to_pauling(0.0, 0.0), 1.0);
    }

    #[test]
    fn radius_reference_and_floor() {
        assert_eq!(atomic_radius(&PeriodicPosition::of(6)), 77);
        assert_eq!(atomic_radius(&PeriodicPosition::of(0)), 0);
        assert!(atomic_radius(&PeriodicPosition::of(112)) >= 30);
    }

    #[test]
    fn covalent_radius_ratios() {
        assert_eq!(covalent_radius(77, Block::P, 2), 65);
        assert_eq!(covalent_radius(265, Block::S, 5), 172);
        assert_eq!(covalent_radius(10, Block::S, 1), 20);
        assert_eq!(covalent_radius(0, Block::S, 1), 0);
    }

    #[test]
    fn valence_electrons_by_block() {
        assert_eq!(valence_electrons(&PeriodicPosition::of(1)), 1);
        assert_eq!(valence_electrons(&PeriodicPosition::of(2)), 2);
        assert_eq!(valence_electrons(&PeriodicPosition::of(8)), 6);
        assert_eq!(valence_electrons(&PeriodicPosition::of(12)), 2);
        assert_eq!(valence_electrons(&PeriodicPosition::of(22)), 4);
        assert_eq!(valence_electrons(&PeriodicPosition::of(29)), 2);
        assert_eq!(valence_electrons(&PeriodicPosition::of(60)), 3);
    }

    #[test]
    fn melting_and_boiling_points() {
        let oxygen = PeriodicPosition::of(8);
        assert_eq!(melting_point(&oxygen), 54.0);
        assert_eq!(boiling_point(&oxygen, 54.0), 90.0);

        let carbon = PeriodicPosition::of(6);
        assert_eq!(melting_point(&carbon), 3823.0);

        let sodium = PeriodicPosition::of(11);
        let mp = melting_point(&sodium);
        assert!(f64_approx_equal(mp, 465.0));
        assert!(f64_approx_equal(boiling_point(&sodium, mp), 465.0 * 2.5));

        let iron = PeriodicPosition::of(26);
        assert_eq!(melting_point(&iron), 1800.0);
        assert_eq!(boiling_point(&iron, 5000.0), 6000.0);
    }

    #[test]
    fn gas_density_comes_from_table() {
        let nitrogen = PeriodicPosition::of(7);
        assert_eq!(density(&nitrogen, 14.0, 75), 0.00125);
        assert_eq!(density(&nitrogen, 14.0, 0), 0.0);
    }

    #[test]
    fn solid_density_is_clamped() {
        let iron = PeriodicPosition::of(26);
        let rho = density(&iron, 55.85, 156);
        assert!((0.001..=25.0).contains(&rho));
        let tiny = density(&iron, 55.85, 1);
        assert_eq!(tiny, 25.0);
    }

    #[test]
    fn electron_affinity_reference_and_trends() {
        assert_eq!(electron_affinity(&PeriodicPosition::of(17), 3.16), 349.0);
        assert_eq!(electron_affinity(&PeriodicPosition::of(7), 3.04), -7.0);
        assert!(f64_approx_equal(electron_affinity(&PeriodicPosition::of(10), 0.1), -38.0));
        assert!(f64_approx_equal(electron_affinity(&PeriodicPosition::of(12), 1.31), -11.0));
        assert!(f64_approx_equal(electron_affinity(&PeriodicPosition::of(85), 2.2), 259.0));
        assert_eq!(electron_affinity(&PeriodicPosition::of(10), 0.0), 0.0);
    }

    #[test]
    fn emission_lines() {
        assert_eq!(emission_wavelength(11, 5.139), 589.3);
        assert!(f64_approx_equal(emission_wavelength(8, 13.618), 1240.0 / (13.618 * 0.15)));
        assert_eq!(emission_wavelength(55, 3.894), 1500.0);
        assert_eq!(emission_wavelength(8, 0.0), 0.0);
    }
}
