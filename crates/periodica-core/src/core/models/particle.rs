use crate::core::constants::MEV_PER_AMU;
use serde::{Deserialize, Serialize};

/// A constituent particle record: a quark, a nucleon, an electron, or any
/// composite that has been flattened back into this shape.
///
/// Field names on the wire match the records supplied by the data loader.
/// Numeric fields are optional at the wire level; each resolver demands the
/// ones its formulas need and reports the rest as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Symbol", default)]
    pub symbol: String,
    #[serde(rename = "Charge_e", default, skip_serializing_if = "Option::is_none")]
    pub charge_e: Option<f64>,
    #[serde(rename = "Mass_MeVc2", default, skip_serializing_if = "Option::is_none")]
    pub mass_mev: Option<f64>,
    #[serde(rename = "Mass_amu", default, skip_serializing_if = "Option::is_none")]
    pub mass_amu: Option<f64>,
    #[serde(rename = "Spin_hbar", default, skip_serializing_if = "Option::is_none")]
    pub spin_hbar: Option<f64>,
    #[serde(rename = "BaryonNumber_B", default, skip_serializing_if = "Option::is_none")]
    pub baryon_number: Option<f64>,
    #[serde(rename = "Isospin_I", default, skip_serializing_if = "Option::is_none")]
    pub isospin_i: Option<f64>,
    #[serde(rename = "Isospin_I3", default, skip_serializing_if = "Option::is_none")]
    pub isospin_i3: Option<f64>,
    #[serde(rename = "LeptonNumber_L", default, skip_serializing_if = "Option::is_none")]
    pub lepton_number: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Amu,
    MeV,
}

/// Where a resolved mass came from. A record may carry either unit; the unit
/// asked for wins and the other is converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassSource {
    Amu(f64),
    MeV(f64),
}

impl MassSource {
    pub fn in_amu(self) -> f64 {
        match self {
            MassSource::Amu(m) => m,
            MassSource::MeV(m) => m / MEV_PER_AMU,
        }
    }

    pub fn in_mev(self) -> f64 {
        match self {
            MassSource::Amu(m) => m * MEV_PER_AMU,
            MassSource::MeV(m) => m,
        }
    }

    pub fn in_unit(self, unit: MassUnit) -> f64 {
        match unit {
            MassUnit::Amu => self.in_amu(),
            MassUnit::MeV => self.in_mev(),
        }
    }
}

impl Particle {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_charge(mut self, charge_e: f64) -> Self {
        self.charge_e = Some(charge_e);
        self
    }

    pub fn with_mass_mev(mut self, mass_mev: f64) -> Self {
        self.mass_mev = Some(mass_mev);
        self
    }

    pub fn with_mass_amu(mut self, mass_amu: f64) -> Self {
        self.mass_amu = Some(mass_amu);
        self
    }

    pub fn with_spin(mut self, spin_hbar: f64) -> Self {
        self.spin_hbar = Some(spin_hbar);
        self
    }

    pub fn with_baryon_number(mut self, baryon_number: f64) -> Self {
        self.baryon_number = Some(baryon_number);
        self
    }

    pub fn with_isospin(mut self, isospin_i: f64, isospin_i3: f64) -> Self {
        self.isospin_i = Some(isospin_i);
        self.isospin_i3 = Some(isospin_i3);
        self
    }

    pub fn with_lepton_number(mut self, lepton_number: f64) -> Self {
        self.lepton_number = Some(lepton_number);
        self
    }

    /// Resolves the mass with the preferred unit taking priority over the other.
    pub fn mass_source(&self, preferred: MassUnit) -> Option<MassSource> {
        let amu = self.mass_amu.map(MassSource::Amu);
        let mev = self.mass_mev.map(MassSource::MeV);
        match preferred {
            MassUnit::Amu => amu.or(mev),
            MassUnit::MeV => mev.or(amu),
        }
    }

    pub fn mass_in(&self, unit: MassUnit) -> Option<f64> {
        self.mass_source(unit).map(|source| source.in_unit(unit))
    }

    /// A label for diagnostics: the name, falling back to the symbol.
    pub fn label(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.symbol.is_empty() {
            &self.symbol
        } else {
            "unnamed particle"
        }
    }
}
