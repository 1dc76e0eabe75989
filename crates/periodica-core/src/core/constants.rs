//! Universal physical constants and unit conversions shared by every resolver.
//!
//! None of these are particle-specific: masses, charges and other constituent
//! properties always come from the caller's records.

/// MeV/c² per unified atomic mass unit.
pub const MEV_PER_AMU: f64 = 931.494;
/// Kilograms per unified atomic mass unit.
pub const KG_PER_AMU: f64 = 1.66054e-27;

pub const AVOGADRO: f64 = 6.02214076e23;
pub const RYDBERG_ENERGY_EV: f64 = 13.605693122994;
pub const BOHR_RADIUS_PM: f64 = 52.9177210903;
pub const FINE_STRUCTURE: f64 = 0.0072973525693;

/// Electron rest energy the Rydberg energy is quoted against (MeV).
pub const REFERENCE_ELECTRON_MASS_MEV: f64 = 0.511;

/// Nuclear magneton (J/T).
pub const NUCLEAR_MAGNETON_J_T: f64 = 5.050783699e-27;
/// Proton rest energy used as the magneton reference scale (MeV).
pub const REFERENCE_PROTON_MASS_MEV: f64 = 938.272;

/// kJ/mol per eV.
pub const KJ_MOL_PER_EV: f64 = 96.485;

/// Standard ambient temperature used for phase decisions (K).
pub const STANDARD_TEMPERATURE_K: f64 = 298.15;
/// Standard atmosphere (Pa).
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;
/// Molar gas constant in g-based units, J/(kmol·K).
pub const GAS_CONSTANT_G: f64 = 8314.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Nucleon counts with closed nuclear shells.
pub const MAGIC_NUMBERS: [u32; 7] = [2, 8, 20, 28, 50, 82, 126];

/// Combining overline used to mark antiparticle symbols (e.g. `d̅`).
pub const COMBINING_OVERLINE: char = '\u{0305}';

#[inline]
pub fn is_magic(count: u32) -> bool {
    MAGIC_NUMBERS.contains(&count)
}

/// Rounds to ten decimal places so exact rational sums like `2/3 + 2/3 - 1/3`
/// come out clean.
#[inline]
pub fn round_sum(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_numbers_are_recognized() {
        assert!(is_magic(8));
        assert!(is_magic(126));
        assert!(!is_magic(6));
    }

    #[test]
    fn round_sum_removes_floating_point_residue() {
        let third = 0.3333333333_f64;
        assert_eq!(round_sum(third * 3.0), 0.9999999999);
        assert_eq!(round_sum(2.0 / 3.0 + 2.0 / 3.0 - 1.0 / 3.0), 1.0);
    }
}
