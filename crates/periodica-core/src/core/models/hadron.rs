use super::particle::Particle;
use crate::core::constants::COMBINING_OVERLINE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuarkFlavor {
    Up,
    Down,
    Strange,
    Charm,
    Bottom,
    Top,
}

impl QuarkFlavor {
    /// Identifies a flavor from a quark symbol, ignoring case and the
    /// antiparticle overline (`u`, `D`, `s̅`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match base_symbol(symbol).as_str() {
            "u" => Some(Self::Up),
            "d" => Some(Self::Down),
            "s" => Some(Self::Strange),
            "c" => Some(Self::Charm),
            "b" => Some(Self::Bottom),
            "t" => Some(Self::Top),
            _ => None,
        }
    }

    /// Identifies a flavor from a descriptive name such as `"Anti-Strange Quark"`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .find_map(|word| word.parse().ok())
    }

    /// Symbol first, then name.
    pub fn identify(particle: &Particle) -> Option<Self> {
        Self::from_symbol(&particle.symbol).or_else(|| Self::from_name(&particle.name))
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl FromStr for QuarkFlavor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "strange" => Ok(Self::Strange),
            "charm" => Ok(Self::Charm),
            "bottom" | "beauty" => Ok(Self::Bottom),
            "top" | "truth" => Ok(Self::Top),
            _ => Err(()),
        }
    }
}

/// Lowercased symbol with any combining overline removed.
pub fn base_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|&c| c != COMBINING_OVERLINE)
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HadronKind {
    Meson,
    Baryon,
    Tetraquark,
    Pentaquark,
    Exotic,
}

impl HadronKind {
    pub fn from_constituent_count(count: usize) -> Self {
        match count {
            2 => Self::Meson,
            3 => Self::Baryon,
            4 => Self::Tetraquark,
            5 => Self::Pentaquark,
            _ => Self::Exotic,
        }
    }

    pub fn is_exotic(self) -> bool {
        !matches!(self, Self::Meson | Self::Baryon)
    }
}

impl fmt::Display for HadronKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Meson => "Meson",
            Self::Baryon => "Baryon",
            Self::Tetraquark => "Tetraquark",
            Self::Pentaquark => "Pentaquark",
            Self::Exotic => "Exotic Hadron",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    Unstable,
    ExtremelyUnstable,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stable => "Stable",
            Self::Unstable => "Unstable",
            Self::ExtremelyUnstable => "Extremely Unstable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    Strong,
    Electromagnetic,
    Weak,
    Gravitational,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayMode {
    pub products: Vec<String>,
    pub branching_ratio: f64,
    pub interaction: Interaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    pub status: Stability,
    pub half_life_s: Option<f64>,
    pub decay_products: Vec<String>,
}

/// Every term of the constituent-quark-model mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassBreakdown {
    pub current_mass_sum_mev: f64,
    pub constituent_masses_mev: Vec<f64>,
    pub constituent_mass_sum_mev: f64,
    pub binding_correction_mev: f64,
    pub hyperfine_correction_mev: f64,
    pub color_magnetic_correction_mev: f64,
    pub total_mev: f64,
}

/// One distinct constituent and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    pub name: String,
    pub count: usize,
    pub charge_e: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarkContent {
    pub total_quarks: usize,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Antiparticle {
    pub name: String,
    pub symbol: String,
}

impl Antiparticle {
    pub fn of(name: &str, symbol: &str) -> Self {
        Self {
            name: format!("Anti{}", name.to_lowercase()),
            symbol: format!("{symbol}{COMBINING_OVERLINE}"),
        }
    }
}

/// A composite hadron derived from its quark content. Computed once and never
/// mutated; it keeps only a read-only composition summary of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hadron {
    pub name: String,
    pub symbol: String,
    pub kind: HadronKind,
    pub classification: Vec<String>,
    pub charge_e: f64,
    pub baryon_number: f64,
    pub lepton_number: f64,
    pub mass_mev: f64,
    pub mass_amu: f64,
    pub mass_kg: f64,
    pub spin_hbar: f64,
    pub possible_spins: Vec<f64>,
    pub isospin_i: f64,
    pub isospin_i3: f64,
    pub parity: i8,
    pub stability: Stability,
    pub half_life_s: Option<f64>,
    pub mean_lifetime_s: Option<f64>,
    pub decay_products: Vec<String>,
    pub decay_modes: Vec<DecayMode>,
    pub interaction_forces: Vec<Interaction>,
    pub magnetic_moment_j_t: Option<f64>,
    pub antiparticle: Antiparticle,
    pub composition: Vec<Constituent>,
    pub quark_content: QuarkContent,
    pub mass_breakdown: MassBreakdown,
}

impl Hadron {
    pub fn is_baryon(&self) -> bool {
        self.kind == HadronKind::Baryon
    }

    /// Flattens the hadron into a constituent record so it can feed the next
    /// level up, e.g. a derived proton going into the atom resolver.
    pub fn to_particle(&self) -> Particle {
        Particle {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            charge_e: Some(self.charge_e),
            mass_mev: Some(self.mass_mev),
            mass_amu: Some(self.mass_amu),
            spin_hbar: Some(self.spin_hbar),
            baryon_number: Some(self.baryon_number),
            isospin_i: Some(self.isospin_i),
            isospin_i3: Some(self.isospin_i3),
            lepton_number: Some(self.lepton_number),
        }
    }
}

/// A spin-excited state (vector meson, spin-3/2 baryon) for a given quark content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcitedHadron {
    pub kind: HadronKind,
    pub charge_e: f64,
    pub baryon_number: f64,
    pub spin_hbar: f64,
    pub mass_mev: f64,
    pub mass_amu: f64,
    pub mass_breakdown: MassBreakdown,
}

/// Aggregate quantum numbers of a quark list without building a full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickProperties {
    pub charge_e: f64,
    pub baryon_number: f64,
    pub lepton_number: f64,
    pub isospin_i3: f64,
    pub current_mass_sum_mev: f64,
    pub quark_count: usize,
    pub is_baryon: bool,
    pub is_meson: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_from_symbol_ignores_overline_and_case() {
        assert_eq!(QuarkFlavor::from_symbol("u"), Some(QuarkFlavor::Up));
        assert_eq!(QuarkFlavor::from_symbol("D"), Some(QuarkFlavor::Down));
        assert_eq!(QuarkFlavor::from_symbol("s\u{0305}"), Some(QuarkFlavor::Strange));
        assert_eq!(QuarkFlavor::from_symbol("x"), None);
    }

    #[test]
    fn flavor_from_name_reads_words() {
        assert_eq!(QuarkFlavor::from_name("Anti-Strange Quark"), Some(QuarkFlavor::Strange));
        assert_eq!(QuarkFlavor::from_name("Bottom Quark"), Some(QuarkFlavor::Bottom));
        assert_eq!(QuarkFlavor::from_name("Stop Squark"), None);
    }

    #[test]
    fn identify_prefers_symbol_over_name() {
        let odd = Particle::new("Charm Quark", "s");
        assert_eq!(QuarkFlavor::identify(&odd), Some(QuarkFlavor::Strange));
        let nameless = Particle::new("Top Quark", "");
        assert_eq!(QuarkFlavor::identify(&nameless), Some(QuarkFlavor::Top));
    }

    #[test]
    fn kind_follows_constituent_count() {
        assert_eq!(HadronKind::from_constituent_count(2), HadronKind::Meson);
        assert_eq!(HadronKind::from_constituent_count(3), HadronKind::Baryon);
        assert_eq!(HadronKind::from_constituent_count(5), HadronKind::Pentaquark);
        assert_eq!(HadronKind::from_constituent_count(7), HadronKind::Exotic);
        assert!(HadronKind::Tetraquark.is_exotic());
    }

    #[test]
    fn antiparticle_naming() {
        let anti = Antiparticle::of("Proton", "p");
        assert_eq!(anti.name, "Antiproton");
        assert_eq!(anti.symbol, "p\u{0305}");
    }
}
