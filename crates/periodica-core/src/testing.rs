//! Shared fixtures for unit tests: constituent records with PDG values.

use crate::core::constants::COMBINING_OVERLINE;
use crate::core::models::hadron::{QuarkFlavor, base_symbol};
use crate::core::models::particle::Particle;
use crate::core::physics::quark::QuarkState;

struct QuarkData {
    symbol: &'static str,
    name: &'static str,
    mass_mev: f64,
    charge_e: f64,
    isospin_i: f64,
    isospin_i3: f64,
}

const QUARKS: [QuarkData; 6] = [
    QuarkData { symbol: "u", name: "Up Quark", mass_mev: 2.16, charge_e: 2.0 / 3.0, isospin_i: 0.5, isospin_i3: 0.5 },
    QuarkData { symbol: "d", name: "Down Quark", mass_mev: 4.67, charge_e: -1.0 / 3.0, isospin_i: 0.5, isospin_i3: -0.5 },
    QuarkData { symbol: "s", name: "Strange Quark", mass_mev: 93.4, charge_e: -1.0 / 3.0, isospin_i: 0.0, isospin_i3: 0.0 },
    QuarkData { symbol: "c", name: "Charm Quark", mass_mev: 1270.0, charge_e: 2.0 / 3.0, isospin_i: 0.0, isospin_i3: 0.0 },
    QuarkData { symbol: "b", name: "Bottom Quark", mass_mev: 4180.0, charge_e: -1.0 / 3.0, isospin_i: 0.0, isospin_i3: 0.0 },
    QuarkData { symbol: "t", name: "Top Quark", mass_mev: 172_760.0, charge_e: 2.0 / 3.0, isospin_i: 0.0, isospin_i3: 0.0 },
];

/// A quark record by symbol; a trailing combining overline selects the antiquark.
pub fn quark(symbol: &str) -> Particle {
    let anti = symbol.contains(COMBINING_OVERLINE);
    let base = base_symbol(symbol);
    let data = QUARKS
        .iter()
        .find(|q| q.symbol == base)
        .unwrap_or_else(|| panic!("no fixture for quark {symbol}"));
    let sign = if anti { -1.0 } else { 1.0 };
    let name = if anti {
        format!("Anti-{}", data.name)
    } else {
        data.name.to_string()
    };
    Particle::new(name, symbol)
        .with_mass_mev(data.mass_mev)
        .with_charge(sign * data.charge_e)
        .with_spin(0.5)
        .with_baryon_number(sign / 3.0)
        .with_isospin(data.isospin_i, sign * data.isospin_i3)
        .with_lepton_number(0.0)
}

/// The numeric view of [`quark`], as the hadron resolver builds it.
pub fn quark_state(symbol: &str) -> QuarkState {
    let p = quark(symbol);
    QuarkState {
        flavor: QuarkFlavor::identify(&p),
        base_symbol: base_symbol(&p.symbol),
        name: p.name.clone(),
        current_mass_mev: p.mass_mev.unwrap_or_default(),
        charge_e: p.charge_e.unwrap_or_default(),
        baryon_number: p.baryon_number.unwrap_or_default(),
        spin_hbar: p.spin_hbar.unwrap_or_default(),
        isospin_i: p.isospin_i.unwrap_or_default(),
        isospin_i3: p.isospin_i3.unwrap_or_default(),
        lepton_number: p.lepton_number.unwrap_or_default(),
    }
}

pub fn proton() -> Particle {
    Particle::new("Proton", "p")
        .with_mass_mev(938.272)
        .with_mass_amu(1.007276)
        .with_charge(1.0)
        .with_spin(0.5)
        .with_baryon_number(1.0)
        .with_isospin(0.5, 0.5)
        .with_lepton_number(0.0)
}

pub fn neutron() -> Particle {
    Particle::new("Neutron", "n")
        .with_mass_mev(939.565)
        .with_mass_amu(1.008665)
        .with_charge(0.0)
        .with_spin(0.5)
        .with_baryon_number(1.0)
        .with_isospin(0.5, -0.5)
        .with_lepton_number(0.0)
}

pub fn electron() -> Particle {
    Particle::new("Electron", "e⁻")
        .with_mass_mev(0.51099895)
        .with_mass_amu(0.000548579909)
        .with_charge(-1.0)
        .with_spin(0.5)
        .with_baryon_number(0.0)
        .with_lepton_number(1.0)
}
