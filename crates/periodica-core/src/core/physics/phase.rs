use crate::core::constants::{GAS_CONSTANT_G, STANDARD_PRESSURE_PA, STANDARD_TEMPERATURE_K};
use crate::core::models::molecule::{BondType, Polarity, StateOfMatter};

/// Bulk properties of a molecular substance at standard conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEstimate {
    pub melting_point_k: f64,
    pub boiling_point_k: f64,
    pub density_g_cm3: f64,
    pub state: StateOfMatter,
}

/// Phase at 298.15 K from the transition temperatures.
pub fn state_at_stp(melting_point_k: f64, boiling_point_k: f64) -> StateOfMatter {
    if melting_point_k > STANDARD_TEMPERATURE_K {
        StateOfMatter::Solid
    } else if boiling_point_k < STANDARD_TEMPERATURE_K {
        StateOfMatter::Gas
    } else {
        StateOfMatter::Liquid
    }
}

/// Ideal-gas density `M·P/(R·T)` at 298.15 K and 1 atm, in g/cm³.
pub fn ideal_gas_density(molar_mass: f64) -> f64 {
    molar_mass * STANDARD_PRESSURE_PA / (GAS_CONSTANT_G * STANDARD_TEMPERATURE_K * 1000.0)
}

/// Melting and boiling points from molar mass and the dominant intermolecular
/// force, then density for whichever phase those points imply.
pub fn estimate(molar_mass: f64, bond_type: BondType, polarity: Polarity) -> PhaseEstimate {
    let m = molar_mass;
    let (mp, bp, condensed_density) = match bond_type {
        BondType::Ionic => {
            let mp = 600.0 + 3.0 * m;
            (mp, mp + 500.0, 2.0 + m / 200.0)
        }
        BondType::PolarCovalent => {
            let (mut mp, mut bp) = if m < 50.0 {
                let mp = 150.0 + 2.0 * m;
                (mp, mp + 100.0 + m)
            } else {
                let mp = 200.0 + 1.5 * m;
                (mp, mp + 150.0)
            };
            if polarity == Polarity::Polar && m < 100.0 {
                mp += 50.0;
                bp += 80.0;
            }
            (mp, bp, 0.8 + m / 500.0)
        }
        BondType::NonpolarCovalent => {
            let mp = 50.0 + 1.5 * m;
            (mp, mp + 50.0 + 0.5 * m, 0.5 + m / 600.0)
        }
    };

    let melting_point_k = mp.max(10.0);
    let boiling_point_k = bp.max(20.0);
    let state = state_at_stp(melting_point_k, boiling_point_k);
    let density = match state {
        StateOfMatter::Gas => ideal_gas_density(m),
        StateOfMatter::Liquid => condensed_density.clamp(0.5, 2.0),
        StateOfMatter::Solid => condensed_density,
    };

    PhaseEstimate {
        melting_point_k,
        boiling_point_k,
        density_g_cm3: density.clamp(1e-5, 20.0),
        state,
    }
}
