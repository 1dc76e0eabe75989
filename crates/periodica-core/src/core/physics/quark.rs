use crate::core::constants::{
    MEV_PER_AMU, NUCLEAR_MAGNETON_J_T, REFERENCE_PROTON_MASS_MEV, round_sum,
};
use crate::core::models::hadron::{
    DecayMode, HadronKind, Interaction, MassBreakdown, QuarkFlavor, Stability,
    StabilityAssessment,
};
use serde::{Deserialize, Serialize};

/// Fitted constituent ("dressed") quark masses in MeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ConstituentMasses {
    pub up: f64,
    pub down: f64,
    pub strange: f64,
    pub charm: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for ConstituentMasses {
    fn default() -> Self {
        Self {
            up: 336.0,
            down: 340.0,
            strange: 486.0,
            charm: 1550.0,
            bottom: 4730.0,
            top: 173_000.0,
        }
    }
}

impl ConstituentMasses {
    pub fn of(&self, flavor: QuarkFlavor) -> f64 {
        match flavor {
            QuarkFlavor::Up => self.up,
            QuarkFlavor::Down => self.down,
            QuarkFlavor::Strange => self.strange,
            QuarkFlavor::Charm => self.charm,
            QuarkFlavor::Bottom => self.bottom,
            QuarkFlavor::Top => self.top,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 6] {
        [
            ("up", self.up),
            ("down", self.down),
            ("strange", self.strange),
            ("charm", self.charm),
            ("bottom", self.bottom),
            ("top", self.top),
        ]
    }
}

/// Additive binding corrections (MeV) by hadron class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BindingCorrections {
    pub baryon: f64,
    pub light_meson: f64,
    pub strange_meson: f64,
    pub heavy_meson: f64,
    pub other_meson: f64,
    pub exotic: f64,
}

impl BindingCorrections {
    pub const GROUND: Self = Self {
        baryon: -58.0,
        light_meson: -50.0,
        strange_meson: 12.0,
        heavy_meson: -100.0,
        other_meson: -50.0,
        exotic: -100.0,
    };

    pub const EXCITED: Self = Self {
        baryon: 200.0,
        light_meson: -63.0,
        strange_meson: -43.0,
        heavy_meson: -100.0,
        other_meson: -50.0,
        exotic: -100.0,
    };

    pub fn for_hadron(&self, kind: HadronKind, content: ContentClass) -> f64 {
        match kind {
            HadronKind::Baryon => self.baryon,
            HadronKind::Meson => match content {
                ContentClass::Light => self.light_meson,
                ContentClass::Strange => self.strange_meson,
                ContentClass::Heavy => self.heavy_meson,
                ContentClass::Other => self.other_meson,
            },
            _ => self.exotic,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 6] {
        [
            ("baryon", self.baryon),
            ("light-meson", self.light_meson),
            ("strange-meson", self.strange_meson),
            ("heavy-meson", self.heavy_meson),
            ("other-meson", self.other_meson),
            ("exotic", self.exotic),
        ]
    }
}

/// Parameters of the constituent quark model. The defaults reproduce the
/// nucleon, pion, kaon, rho and Delta masses; they are fit values, so every
/// one of them can be re-fit and loaded from a calibration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct QuarkModelParams {
    pub constituent_masses: ConstituentMasses,
    /// Baryon hyperfine coupling (MeV³).
    pub hyperfine_coupling_baryon: f64,
    /// Meson hyperfine coupling (MeV³).
    pub hyperfine_coupling_meson: f64,
    /// Isospin-breaking shift for light same-flavor mesons (MeV).
    pub neutral_pion_correction: f64,
    pub ground_binding: BindingCorrections,
    pub excited_binding: BindingCorrections,
}

impl Default for QuarkModelParams {
    fn default() -> Self {
        Self {
            constituent_masses: ConstituentMasses::default(),
            hyperfine_coupling_baryon: 1.7e6,
            hyperfine_coupling_meson: 7.4e7,
            neutral_pion_correction: 5.0,
            ground_binding: BindingCorrections::GROUND,
            excited_binding: BindingCorrections::EXCITED,
        }
    }
}

/// The numeric view of one quark after its record has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarkState {
    pub flavor: Option<QuarkFlavor>,
    pub base_symbol: String,
    pub name: String,
    pub current_mass_mev: f64,
    pub charge_e: f64,
    pub baryon_number: f64,
    pub spin_hbar: f64,
    pub isospin_i: f64,
    pub isospin_i3: f64,
    pub lepton_number: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Ground,
    Excited,
}

/// Flavor content as seen through current masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    /// Every quark below 10 MeV.
    Light,
    /// A strange-range quark (50-200 MeV) and nothing heavy.
    Strange,
    /// Any quark above 1 GeV.
    Heavy,
    Other,
}

impl ContentClass {
    pub fn of(quarks: &[QuarkState]) -> Self {
        let all_light = quarks.iter().all(|q| q.current_mass_mev < 10.0);
        let has_strange = quarks
            .iter()
            .any(|q| q.current_mass_mev > 50.0 && q.current_mass_mev < 200.0);
        let has_heavy = quarks.iter().any(|q| q.current_mass_mev > 1000.0);

        if all_light {
            Self::Light
        } else if has_strange && !has_heavy {
            Self::Strange
        } else if has_heavy {
            Self::Heavy
        } else {
            Self::Other
        }
    }
}

/// Fitted constituent mass for a known flavor, otherwise dressed from the
/// current mass by range.
pub fn constituent_mass(params: &QuarkModelParams, quark: &QuarkState) -> f64 {
    if let Some(flavor) = quark.flavor {
        return params.constituent_masses.of(flavor);
    }
    let m = quark.current_mass_mev;
    if m < 10.0 {
        338.0
    } else if m < 200.0 {
        486.0
    } else if m < 2000.0 {
        m + 200.0
    } else if m < 5000.0 {
        m + 100.0
    } else {
        m + 50.0
    }
}

/// Spin-spin (color-magnetic) hyperfine shift. Antiparallel ground states pull
/// the mass down; aligned excited states push it up.
pub fn hyperfine_correction(
    params: &QuarkModelParams,
    kind: HadronKind,
    constituent_masses: &[f64],
    state: SpinState,
) -> f64 {
    if constituent_masses.len() < 2 {
        return 0.0;
    }
    match kind {
        HadronKind::Baryon => {
            let mut pair_sum = 0.0;
            for (i, mi) in constituent_masses.iter().enumerate() {
                for mj in &constituent_masses[i + 1..] {
                    pair_sum += params.hyperfine_coupling_baryon / (mi * mj);
                }
            }
            match state {
                SpinState::Ground => -pair_sum / 3.0,
                SpinState::Excited => pair_sum / 2.0,
            }
        }
        HadronKind::Meson => {
            let product = constituent_masses[0] * constituent_masses[1];
            let spin_coupling = match state {
                SpinState::Ground => -0.75,
                SpinState::Excited => 0.25,
            };
            spin_coupling * params.hyperfine_coupling_meson / product
        }
        _ => 0.0,
    }
}

/// Residual shift for light mesons made of a quark and antiquark of the same
/// flavor (the neutral pion). Zero everywhere else.
pub fn color_magnetic_correction(
    params: &QuarkModelParams,
    kind: HadronKind,
    content: ContentClass,
    quarks: &[QuarkState],
) -> f64 {
    if kind != HadronKind::Meson || content != ContentClass::Light || quarks.len() < 2 {
        return 0.0;
    }
    let (a, b) = (&quarks[0].base_symbol, &quarks[1].base_symbol);
    if !a.is_empty() && a == b {
        params.neutral_pion_correction
    } else {
        0.0
    }
}

/// Constituent-quark-model mass: Σ constituent + binding + hyperfine + color-magnetic.
pub fn hadron_mass(
    params: &QuarkModelParams,
    quarks: &[QuarkState],
    kind: HadronKind,
    state: SpinState,
) -> MassBreakdown {
    let constituent_masses: Vec<f64> = quarks.iter().map(|q| constituent_mass(params, q)).collect();
    let current_mass_sum_mev = quarks.iter().map(|q| q.current_mass_mev).sum();
    let constituent_mass_sum_mev: f64 = constituent_masses.iter().sum();
    let content = ContentClass::of(quarks);

    let hyperfine = hyperfine_correction(params, kind, &constituent_masses, state);
    let (binding, color_magnetic) = match state {
        SpinState::Ground => (
            params.ground_binding.for_hadron(kind, content),
            color_magnetic_correction(params, kind, content, quarks),
        ),
        SpinState::Excited => (params.excited_binding.for_hadron(kind, content), 0.0),
    };

    MassBreakdown {
        current_mass_sum_mev,
        constituent_mass_sum_mev,
        binding_correction_mev: binding,
        hyperfine_correction_mev: hyperfine,
        color_magnetic_correction_mev: color_magnetic,
        total_mev: constituent_mass_sum_mev + binding + hyperfine + color_magnetic,
        constituent_masses_mev: constituent_masses,
    }
}

#[inline]
pub fn mev_to_amu(mass_mev: f64) -> f64 {
    mass_mev / MEV_PER_AMU
}

/// Ground-state spin and the two lowest couplings available to `count` spin-½ quarks.
pub fn ground_state_spin(count: usize) -> (f64, [f64; 2]) {
    match count {
        2 => (0.0, [0.0, 1.0]),
        3 => (0.5, [0.5, 1.5]),
        n => {
            let lowest = 0.5 * (n % 2) as f64;
            (lowest, [lowest, lowest + 1.0])
        }
    }
}

/// Spin of the aligned (excited) configuration.
pub fn excited_state_spin(count: usize) -> f64 {
    ground_state_spin(count).1[1]
}

/// Total isospin `(I, I3)`. `I3` is the exact sum; `I` follows from the number
/// of isospin-active (u/d-like) quarks.
pub fn isospin(quarks: &[QuarkState]) -> (f64, f64) {
    let i3 = round_sum(quarks.iter().map(|q| q.isospin_i3).sum());
    let active = quarks.iter().filter(|q| q.isospin_i.abs() > 0.1).count();
    let i = match active {
        0 => 0.0,
        1 => 0.5,
        2 => {
            if i3.abs() < 0.1 {
                0.0
            } else {
                1.0
            }
        }
        3 => {
            if i3.abs() > 1.0 {
                1.5
            } else {
                0.5
            }
        }
        _ => i3.abs(),
    };
    (i, i3)
}

/// Intrinsic parity with L = 0: quarks contribute +1, antiquarks −1.
pub fn parity(quarks: &[QuarkState]) -> i8 {
    let antiquarks = quarks.iter().filter(|q| q.baryon_number < 0.0).count();
    if antiquarks % 2 == 0 { 1 } else { -1 }
}

#[derive(Debug, Clone, Copy, Default)]
struct FlavorFlags {
    strange: bool,
    charm: bool,
    bottom: bool,
    top: bool,
}

impl FlavorFlags {
    fn of(quarks: &[QuarkState]) -> Self {
        let has = |f: QuarkFlavor| quarks.iter().any(|q| q.flavor == Some(f));
        Self {
            strange: has(QuarkFlavor::Strange),
            charm: has(QuarkFlavor::Charm),
            bottom: has(QuarkFlavor::Bottom),
            top: has(QuarkFlavor::Top),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Stability bucket from the heaviest flavor present, or from the charge
/// pattern (proton, neutron, pion) for light-only hadrons.
pub fn assess_stability(quarks: &[QuarkState], charge_e: f64) -> StabilityAssessment {
    let flags = FlavorFlags::of(quarks);
    let unstable = |half_life: f64, products: &[&str]| StabilityAssessment {
        status: Stability::Unstable,
        half_life_s: Some(half_life),
        decay_products: strings(products),
    };

    if flags.top {
        return StabilityAssessment {
            status: Stability::ExtremelyUnstable,
            half_life_s: Some(5e-25),
            decay_products: strings(&["W Boson", "Bottom Quark system"]),
        };
    }
    if flags.bottom {
        return unstable(1.5e-12, &["Charm hadron", "W products"]);
    }
    if flags.charm {
        return unstable(1e-12, &["Strange hadron", "Leptons"]);
    }
    if flags.strange {
        return unstable(1e-10, &["Pion", "Nucleon", "Leptons"]);
    }

    let charge = charge_e.round() as i64;
    match (quarks.len(), charge) {
        (3, 1) => StabilityAssessment {
            status: Stability::Stable,
            half_life_s: None,
            decay_products: Vec::new(),
        },
        (3, 0) => unstable(880.3, &["Proton", "Electron", "Antineutrino"]),
        (2, 0) => unstable(8.5e-17, &["Photon", "Photon"]),
        (2, _) => unstable(2.6e-8, &["Muon", "Neutrino"]),
        _ => StabilityAssessment {
            status: Stability::Unstable,
            half_life_s: None,
            decay_products: Vec::new(),
        },
    }
}

fn mode(products: &[&str], branching_ratio: f64, interaction: Interaction) -> DecayMode {
    DecayMode {
        products: strings(products),
        branching_ratio,
        interaction,
        notes: None,
    }
}

/// Dominant decay channels with approximate branching ratios.
pub fn decay_modes(quarks: &[QuarkState], charge_e: f64, status: Stability) -> Vec<DecayMode> {
    use Interaction::{Electromagnetic, Weak};

    if status == Stability::Stable {
        return Vec::new();
    }
    let flags = FlavorFlags::of(quarks);
    let charge = charge_e.round() as i64;

    if flags.top {
        let mut top = mode(&["W Boson", "Bottom Quark"], 1.0, Weak);
        top.notes = Some("Top quark decays before hadronization".to_string());
        vec![top]
    } else if flags.bottom {
        vec![
            mode(&["D Meson", "Lepton", "Neutrino"], 0.11, Weak),
            mode(&["D* Meson", "Lepton", "Neutrino"], 0.06, Weak),
            mode(&["Charm Hadron", "Pions"], 0.80, Weak),
        ]
    } else if flags.charm {
        vec![
            mode(&["Kaon", "Pions"], 0.60, Weak),
            mode(&["Strange Hadron", "Leptons"], 0.25, Weak),
            mode(&["Pions", "Lepton", "Neutrino"], 0.15, Weak),
        ]
    } else if flags.strange {
        if quarks.len() == 3 {
            vec![
                mode(&["Nucleon", "Pion"], 0.64, Weak),
                mode(&["Nucleon", "Pion", "Pion"], 0.25, Weak),
                mode(&["Proton", "Electron", "Antineutrino"], 0.08, Weak),
            ]
        } else {
            vec![
                mode(&["Muon", "Neutrino"], 0.63, Weak),
                mode(&["Pion", "Pion"], 0.21, Weak),
                mode(&["Pion", "Pion", "Pion"], 0.12, Weak),
                mode(&["Electron", "Neutrino", "Pion"], 0.04, Weak),
            ]
        }
    } else {
        match (quarks.len(), charge) {
            (3, 0) => {
                let mut beta = mode(&["Proton", "Electron", "Electron Antineutrino"], 1.0, Weak);
                beta.notes = Some("Free neutron beta decay".to_string());
                vec![beta]
            }
            (2, 0) => vec![
                mode(&["Photon", "Photon"], 0.988, Electromagnetic),
                mode(&["Electron", "Positron", "Photon"], 0.012, Electromagnetic),
            ],
            (2, _) => vec![
                mode(&["Muon", "Muon Neutrino"], 0.9999, Weak),
                mode(&["Electron", "Electron Neutrino"], 0.0001, Weak),
            ],
            _ => Vec::new(),
        }
    }
}

/// Strong, electromagnetic (charged only), gravitational and weak.
pub fn interaction_forces(charge_e: f64) -> Vec<Interaction> {
    let mut forces = vec![Interaction::Strong];
    if charge_e.abs() > 0.001 {
        forces.push(Interaction::Electromagnetic);
    }
    forces.push(Interaction::Gravitational);
    forces.push(Interaction::Weak);
    forces
}

/// Constituent-quark-model magnetic moment, μ = Σ qᵢ (m_p/mᵢ) μ_N sᵢ, in J/T.
pub fn magnetic_moment(quarks: &[QuarkState], spin_hbar: f64) -> Option<f64> {
    if quarks.is_empty() || spin_hbar == 0.0 {
        return None;
    }
    let is_baryon = quarks.len() == 3;
    let moment: f64 = quarks
        .iter()
        .map(|q| {
            let m = q.current_mass_mev;
            let constituent = if m < 10.0 {
                336.0
            } else if m < 200.0 {
                486.0
            } else if m < 2000.0 {
                m + 200.0
            } else {
                m + 100.0
            };
            let spin_factor = match (is_baryon, q.charge_e > 0.0) {
                (true, true) => 2.0 / 3.0,
                (true, false) => -1.0 / 3.0,
                (false, _) => 0.5,
            };
            q.charge_e * (REFERENCE_PROTON_MASS_MEV / constituent) * NUCLEAR_MAGNETON_J_T * spin_factor
        })
        .sum();
    (moment.abs() > 1e-30).then_some(moment)
}

/// τ = t½ / ln 2.
pub fn mean_lifetime(half_life_s: Option<f64>) -> Option<f64> {
    half_life_s
        .filter(|t| *t > 0.0)
        .map(|t| t / std::f64::consts::LN_2)
}
