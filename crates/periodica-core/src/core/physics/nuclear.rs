use crate::core::constants::{MEV_PER_AMU, SECONDS_PER_DAY, SECONDS_PER_YEAR, is_magic};
use crate::core::models::atom::{
    AtomMassBreakdown, BindingEnergyTerms, IsotopeEstimate, IsotopeStability, NuclearStability,
};
use serde::{Deserialize, Serialize};

/// Coefficients of the Weizsäcker semi-empirical mass formula, in MeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct NuclearCoefficients {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
    /// Bonus added once for a magic proton count and once for a magic neutron count.
    pub shell_bonus: f64,
}

impl Default for NuclearCoefficients {
    fn default() -> Self {
        Self {
            volume: 15.75,
            surface: 17.8,
            coulomb: 0.711,
            asymmetry: 23.7,
            pairing: 11.2,
            shell_bonus: 2.5,
        }
    }
}

impl NuclearCoefficients {
    pub(crate) fn values(&self) -> [(&'static str, f64); 6] {
        [
            ("volume", self.volume),
            ("surface", self.surface),
            ("coulomb", self.coulomb),
            ("asymmetry", self.asymmetry),
            ("pairing", self.pairing),
            ("shell-bonus", self.shell_bonus),
        ]
    }
}

/// Liquid-drop binding energy of `(Z, N)`. A single nucleon (or none) is unbound.
pub fn binding_energy(coefficients: &NuclearCoefficients, z: u32, n: u32) -> BindingEnergyTerms {
    let mass_number = z + n;
    if mass_number <= 1 {
        return BindingEnergyTerms::default();
    }
    let a = f64::from(mass_number);
    let zf = f64::from(z);
    let nf = f64::from(n);

    let volume = coefficients.volume * a;
    let surface = coefficients.surface * a.powf(2.0 / 3.0);
    let coulomb = coefficients.coulomb * zf * zf / a.cbrt();
    let asymmetry = coefficients.asymmetry * (nf - zf).powi(2) / a;
    let pairing = match (z % 2, n % 2) {
        (0, 0) => coefficients.pairing / a.sqrt(),
        (1, 1) => -coefficients.pairing / a.sqrt(),
        _ => 0.0,
    };
    let shell = [z, n]
        .into_iter()
        .filter(|&count| is_magic(count))
        .count() as f64
        * coefficients.shell_bonus;

    BindingEnergyTerms {
        volume,
        surface,
        coulomb,
        asymmetry,
        pairing,
        shell,
        total: volume - surface - coulomb - asymmetry + pairing + shell,
    }
}

/// `Z·m_p + N·m_n − B/931.494`, using the caller's nucleon masses.
pub fn atomic_mass(
    coefficients: &NuclearCoefficients,
    z: u32,
    n: u32,
    proton_mass_amu: f64,
    neutron_mass_amu: f64,
) -> (f64, AtomMassBreakdown) {
    let binding = binding_energy(coefficients, z, n);
    let raw_mass_amu = f64::from(z) * proton_mass_amu + f64::from(n) * neutron_mass_amu;
    let mass_deficit_amu = binding.total / MEV_PER_AMU;
    let breakdown = AtomMassBreakdown {
        raw_mass_amu,
        mass_deficit_amu,
        binding,
    };
    (raw_mass_amu - mass_deficit_amu, breakdown)
}

pub fn binding_energy_per_nucleon(total_mev: f64, mass_number: u32) -> f64 {
    if mass_number == 0 {
        0.0
    } else {
        total_mev / f64::from(mass_number)
    }
}

/// Optimal N/Z and the band half-width around it, by proton count.
pub fn stability_valley(z: u32) -> (f64, f64) {
    let zf = f64::from(z);
    match z {
        0..=20 => (1.0, 0.15),
        21..=40 => (1.0 + 0.015 * (zf - 20.0), 0.12),
        41..=82 => (1.3 + 0.005 * (zf - 40.0), 0.10),
        _ => (1.5, 0.08),
    }
}

/// Band-of-stability check. Everything past lead decays; the half-life
/// estimate shrinks with distance from the band or with Z.
pub fn nuclear_stability(z: u32, n: u32) -> NuclearStability {
    let (optimal_ratio, tolerance) = stability_valley(z);
    if z == 0 {
        return NuclearStability {
            is_stable: false,
            n_z_ratio: None,
            optimal_ratio,
            tolerance,
            half_life_s: None,
        };
    }

    let ratio = f64::from(n) / f64::from(z);
    let deviation = (ratio - optimal_ratio).abs();
    let is_stable = deviation <= tolerance && z <= 82;

    let half_life_s = (!is_stable).then(|| {
        let zf = f64::from(z);
        if z > 110 {
            1e-3 / (zf - 110.0)
        } else if z > 100 {
            100.0 / (zf - 100.0) * SECONDS_PER_DAY
        } else if z > 82 {
            1e6 / (zf - 82.0) * SECONDS_PER_YEAR
        } else if deviation > tolerance * 2.0 {
            1.0 / deviation
        } else {
            100.0 / deviation * SECONDS_PER_YEAR
        }
    });

    NuclearStability {
        is_stable,
        n_z_ratio: Some(ratio),
        optimal_ratio,
        tolerance,
        half_life_s,
    }
}

/// Coarse isotope label from the distance of N/Z to the linear valley estimate.
pub fn isotope_stability(z: u32, n: u32) -> IsotopeStability {
    let zf = f64::from(z);
    let ratio = f64::from(n) / zf;
    let optimal = if z > 20 { 1.0 + 0.015 * (zf - 20.0) } else { 1.0 };
    let margin = (ratio - optimal).abs();
    if margin < 0.1 {
        IsotopeStability::Stable
    } else if margin < 0.3 {
        IsotopeStability::LongLived
    } else {
        IsotopeStability::Unstable
    }
}

fn optimal_neutrons(z: u32) -> u32 {
    let scaled = |factor: f64| (f64::from(z) * factor) as u32;
    match z {
        0..=20 => z,
        21..=50 => scaled(1.2),
        51..=82 => scaled(1.4),
        _ => scaled(1.5),
    }
}

/// Isotopes around the valley of stability, most abundant first, at most eight.
///
/// Even-even nuclei and magic counts score higher; only candidates within two
/// neutrons of the optimum with a score of at least 2 are stable. Abundances
/// of stable candidates are normalized to 100 %.
pub fn generate_isotopes(z: u32) -> Vec<IsotopeEstimate> {
    if z == 0 {
        return Vec::new();
    }
    let optimal_n = optimal_neutrons(z);
    let spread: i64 = match z {
        0..=10 => 2,
        11..=30 => 4,
        _ => 6,
    };
    let zf = f64::from(z);
    let expected_ratio = f64::from(optimal_n) / zf;

    let mut isotopes: Vec<IsotopeEstimate> = (-spread..=spread)
        .filter_map(|delta| {
            let n = u32::try_from(i64::from(optimal_n) + delta).ok()?;
            let mut score = match (z % 2 == 0, n % 2 == 0) {
                (true, true) => 2.0,
                (true, false) | (false, true) => 1.0,
                (false, false) => 0.0,
            };
            score += f64::from(u8::from(is_magic(z)) + u8::from(is_magic(n)));
            score -= (f64::from(n) / zf - expected_ratio).abs() * 3.0;

            let is_stable = score >= 2.0 && delta.abs() <= 2;
            let distance = delta.unsigned_abs() as f64;
            let (abundance_percent, half_life_s) = if is_stable {
                ((50.0 - distance * 20.0).max(0.1), None)
            } else if delta.abs() <= 3 {
                (0.0, Some(10f64.powf(10.0 - distance * 3.0)))
            } else {
                (0.0, Some(0.01))
            };
            Some(IsotopeEstimate {
                mass_number: z + n,
                neutrons: n,
                abundance_percent,
                is_stable,
                half_life_s,
            })
        })
        .collect();

    let total: f64 = isotopes.iter().map(|i| i.abundance_percent).sum();
    if total > 0.0 {
        for isotope in &mut isotopes {
            isotope.abundance_percent = isotope.abundance_percent / total * 100.0;
        }
    }
    isotopes.sort_by(|a, b| b.abundance_percent.total_cmp(&a.abundance_percent));
    isotopes.truncate(8);
    isotopes
}

/// Neutron count of the most abundant predicted isotope, falling back on the
/// valley optimum when none is predicted stable. Hydrogen is protium.
pub fn typical_neutron_count(z: u32) -> u32 {
    if z <= 1 {
        return 0;
    }
    generate_isotopes(z)
        .into_iter()
        .find(|isotope| isotope.is_stable)
        .map_or_else(|| optimal_neutrons(z), |isotope| isotope.neutrons)
}
