use crate::core::constants::{KG_PER_AMU, round_sum};
use crate::core::models::hadron::{
    Antiparticle, Constituent, ExcitedHadron, Hadron, HadronKind, QuarkContent, QuarkFlavor,
    QuickProperties, base_symbol,
};
use crate::core::models::particle::{MassUnit, Particle};
use crate::core::physics::quark::{self, QuarkModelParams, QuarkState, SpinState};
use crate::engine::config::Calibration;
use crate::engine::error::ResolveError;
use tracing::{debug, instrument};

/// Builds hadrons from quark records with the constituent quark model.
#[derive(Debug, Clone, Copy)]
pub struct HadronResolver<'a> {
    params: &'a QuarkModelParams,
}

impl<'a> HadronResolver<'a> {
    pub fn new(calibration: &'a Calibration) -> Self {
        Self {
            params: &calibration.hadron,
        }
    }

    /// Derives the ground-state hadron for a quark list.
    ///
    /// Charge and baryon number are exact sums of the inputs. Each quark must
    /// carry a mass (either unit), a charge and a baryon number; spin defaults
    /// to ½ and isospin and lepton number to zero.
    #[instrument(skip_all, name = "hadron_resolver", fields(hadron = name, quarks = quarks.len()))]
    pub fn resolve(&self, quarks: &[Particle], name: &str, symbol: &str) -> Result<Hadron, ResolveError> {
        let states = quark_states(quarks)?;
        let kind = HadronKind::from_constituent_count(states.len());

        let charge_e = round_sum(states.iter().map(|q| q.charge_e).sum());
        let baryon_number = round_sum(states.iter().map(|q| q.baryon_number).sum());
        let lepton_number: f64 = states.iter().map(|q| q.lepton_number).sum();

        let mass_breakdown = quark::hadron_mass(self.params, &states, kind, SpinState::Ground);
        let mass_mev = mass_breakdown.total_mev;
        let mass_amu = quark::mev_to_amu(mass_mev);

        let (spin_hbar, possible_spins) = quark::ground_state_spin(states.len());
        let (isospin_i, isospin_i3) = quark::isospin(&states);
        let stability = quark::assess_stability(&states, charge_e);
        let decay_modes = quark::decay_modes(&states, charge_e, stability.status);

        debug!(
            %kind,
            charge_e,
            mass_mev,
            status = %stability.status,
            "Resolved hadron."
        );

        Ok(Hadron {
            name: name.to_string(),
            symbol: symbol.to_string(),
            kind,
            classification: classification(kind, baryon_number),
            charge_e,
            baryon_number,
            lepton_number,
            mass_mev,
            mass_amu,
            mass_kg: mass_amu * KG_PER_AMU,
            spin_hbar,
            possible_spins: possible_spins.to_vec(),
            isospin_i,
            isospin_i3,
            parity: quark::parity(&states),
            stability: stability.status,
            half_life_s: stability.half_life_s,
            mean_lifetime_s: quark::mean_lifetime(stability.half_life_s),
            decay_products: stability.decay_products,
            decay_modes,
            interaction_forces: quark::interaction_forces(charge_e),
            magnetic_moment_j_t: quark::magnetic_moment(&states, spin_hbar),
            antiparticle: Antiparticle::of(name, symbol),
            composition: composition(quarks),
            quark_content: QuarkContent {
                total_quarks: quarks.len(),
                symbols: quarks.iter().map(|q| q.symbol.clone()).collect(),
            },
            mass_breakdown,
        })
    }

    /// Mass of the spin-aligned state for the same quark content (spin 3/2
    /// baryons, spin 1 mesons).
    #[instrument(skip_all, name = "excited_hadron_resolver", fields(quarks = quarks.len()))]
    pub fn resolve_excited(&self, quarks: &[Particle]) -> Result<ExcitedHadron, ResolveError> {
        let states = quark_states(quarks)?;
        let kind = HadronKind::from_constituent_count(states.len());
        let mass_breakdown = quark::hadron_mass(self.params, &states, kind, SpinState::Excited);
        let mass_mev = mass_breakdown.total_mev;
        debug!(%kind, mass_mev, "Resolved spin-excited hadron.");

        Ok(ExcitedHadron {
            kind,
            charge_e: round_sum(states.iter().map(|q| q.charge_e).sum()),
            baryon_number: round_sum(states.iter().map(|q| q.baryon_number).sum()),
            spin_hbar: quark::excited_state_spin(states.len()),
            mass_mev,
            mass_amu: quark::mev_to_amu(mass_mev),
            mass_breakdown,
        })
    }

    /// Aggregate quantum numbers without the mass model.
    pub fn quick_properties(&self, quarks: &[Particle]) -> Result<QuickProperties, ResolveError> {
        let states = quark_states(quarks)?;
        let baryon_number = round_sum(states.iter().map(|q| q.baryon_number).sum());
        Ok(QuickProperties {
            charge_e: round_sum(states.iter().map(|q| q.charge_e).sum()),
            baryon_number,
            lepton_number: states.iter().map(|q| q.lepton_number).sum(),
            isospin_i3: round_sum(states.iter().map(|q| q.isospin_i3).sum()),
            current_mass_sum_mev: states.iter().map(|q| q.current_mass_mev).sum(),
            quark_count: states.len(),
            is_baryon: (baryon_number.abs() - 1.0).abs() < 0.01,
            is_meson: baryon_number.abs() < 0.01 && states.len() == 2,
        })
    }
}

fn quark_states(quarks: &[Particle]) -> Result<Vec<QuarkState>, ResolveError> {
    if quarks.is_empty() {
        return Err(ResolveError::EmptyInput { what: "quarks" });
    }
    quarks.iter().map(quark_state).collect()
}

fn quark_state(particle: &Particle) -> Result<QuarkState, ResolveError> {
    let missing = |field| ResolveError::MissingField {
        record: particle.label().to_string(),
        field,
    };
    Ok(QuarkState {
        flavor: QuarkFlavor::identify(particle),
        base_symbol: base_symbol(&particle.symbol),
        name: particle.name.clone(),
        current_mass_mev: particle
            .mass_in(MassUnit::MeV)
            .ok_or_else(|| missing("Mass_MeVc2"))?,
        charge_e: particle.charge_e.ok_or_else(|| missing("Charge_e"))?,
        baryon_number: particle
            .baryon_number
            .ok_or_else(|| missing("BaryonNumber_B"))?,
        spin_hbar: particle.spin_hbar.unwrap_or(0.5),
        isospin_i: particle.isospin_i.unwrap_or(0.0),
        isospin_i3: particle.isospin_i3.unwrap_or(0.0),
        lepton_number: particle.lepton_number.unwrap_or(0.0),
    })
}

fn classification(kind: HadronKind, baryon_number: f64) -> Vec<String> {
    let statistics = if baryon_number != 0.0 { "Fermion" } else { "Boson" };
    vec![
        statistics.to_string(),
        kind.to_string(),
        "Hadron".to_string(),
        "Composite Particle".to_string(),
    ]
}

/// Distinct constituents by name, in order of first appearance.
fn composition(quarks: &[Particle]) -> Vec<Constituent> {
    let mut composition: Vec<Constituent> = Vec::new();
    for quark in quarks {
        let name = quark.label();
        match composition.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.count += 1,
            None => composition.push(Constituent {
                name: name.to_string(),
                count: 1,
                charge_e: quark.charge_e.unwrap_or_default(),
            }),
        }
    }
    composition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::hadron::{Interaction, Stability};
    use crate::testing::quark;

    fn resolver(calibration: &Calibration) -> HadronResolver<'_> {
        HadronResolver::new(calibration)
    }

    fn quarks(symbols: &[&str]) -> Vec<Particle> {
        symbols.iter().map(|s| quark(s)).collect()
    }

    #[test]
    fn proton_from_uud() {
        let calibration = Calibration::default();
        let proton = resolver(&calibration)
            .resolve(&quarks(&["u", "u", "d"]), "Proton", "p")
            .unwrap();

        assert_eq!(proton.kind, HadronKind::Baryon);
        assert_eq!(proton.charge_e, 1.0);
        assert_eq!(proton.baryon_number, 1.0);
        assert_eq!(proton.spin_hbar, 0.5);
        assert_eq!(proton.stability, Stability::Stable);
        assert_eq!(proton.half_life_s, None);
        assert!(proton.decay_modes.is_empty());
        assert!((proton.mass_mev - 938.272).abs() / 938.272 < 0.01);
        assert_eq!(
            proton.classification,
            vec!["Fermion", "Baryon", "Hadron", "Composite Particle"]
        );
        assert_eq!(proton.isospin_i, 0.5);
        assert_eq!(proton.isospin_i3, 0.5);
        assert_eq!(proton.parity, 1);
    }

    #[test]
    fn neutron_is_unstable_with_beta_decay() {
        let calibration = Calibration::default();
        let neutron = resolver(&calibration)
            .resolve(&quarks(&["u", "d", "d"]), "Neutron", "n")
            .unwrap();
        assert_eq!(neutron.charge_e, 0.0);
        assert_eq!(neutron.stability, Stability::Unstable);
        assert_eq!(neutron.half_life_s, Some(880.3));
        assert!(!neutron.interaction_forces.contains(&Interaction::Electromagnetic));
        assert!(neutron.mean_lifetime_s.unwrap() > 880.3);
    }

    #[test]
    fn charged_pion_is_a_boson() {
        let calibration = Calibration::default();
        let pion = resolver(&calibration)
            .resolve(&quarks(&["u", "d\u{0305}"]), "Pion", "π⁺")
            .unwrap();
        assert_eq!(pion.kind, HadronKind::Meson);
        assert_eq!(pion.charge_e, 1.0);
        assert_eq!(pion.baryon_number, 0.0);
        assert_eq!(pion.classification[0], "Boson");
        assert_eq!(pion.spin_hbar, 0.0);
        assert_eq!(pion.parity, -1);
        assert_eq!(pion.magnetic_moment_j_t, None);
    }

    #[test]
    fn composition_groups_by_name_in_order() {
        let calibration = Calibration::default();
        let proton = resolver(&calibration)
            .resolve(&quarks(&["u", "d", "u"]), "Proton", "p")
            .unwrap();
        assert_eq!(proton.composition.len(), 2);
        assert_eq!(proton.composition[0].name, "Up Quark");
        assert_eq!(proton.composition[0].count, 2);
        assert_eq!(proton.composition[1].count, 1);
        assert_eq!(proton.quark_content.symbols, vec!["u", "d", "u"]);
        assert_eq!(proton.antiparticle.name, "Antiproton");
    }

    #[test]
    fn excited_state_is_heavier_than_ground_state() {
        let calibration = Calibration::default();
        let r = resolver(&calibration);
        let uud = quarks(&["u", "u", "d"]);
        let ground = r.resolve(&uud, "Proton", "p").unwrap();
        let delta = r.resolve_excited(&uud).unwrap();
        assert!(delta.mass_mev > ground.mass_mev);
        assert_eq!(delta.spin_hbar, 1.5);
        assert_eq!(delta.charge_e, 1.0);

        let rho = r.resolve_excited(&quarks(&["u", "d\u{0305}"])).unwrap();
        assert_eq!(rho.spin_hbar, 1.0);
        assert!((rho.mass_mev - 775.0).abs() < 30.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        let calibration = Calibration::default();
        let r = resolver(&calibration);
        assert_eq!(
            r.resolve(&[], "Nothing", "∅"),
            Err(ResolveError::EmptyInput { what: "quarks" })
        );
        assert!(r.resolve_excited(&[]).is_err());
        assert!(r.quick_properties(&[]).is_err());
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let calibration = Calibration::default();
        let mut massless = quark("u");
        massless.mass_mev = None;
        let result = resolver(&calibration).resolve(&[massless, quark("d")], "X", "x");
        assert_eq!(
            result,
            Err(ResolveError::MissingField {
                record: "Up Quark".to_string(),
                field: "Mass_MeVc2",
            })
        );

        let mut chargeless = quark("d");
        chargeless.charge_e = None;
        let result = resolver(&calibration).quick_properties(&[quark("u"), chargeless]);
        assert!(matches!(
            result,
            Err(ResolveError::MissingField { field: "Charge_e", .. })
        ));
    }

    #[test]
    fn mass_in_amu_only_is_accepted() {
        let calibration = Calibration::default();
        let mut up = quark("u");
        up.mass_mev = None;
        up.mass_amu = Some(2.16 / 931.494);
        let hadron = resolver(&calibration)
            .resolve(&[up, quark("u"), quark("d")], "Proton", "p")
            .unwrap();
        assert!((hadron.mass_breakdown.current_mass_sum_mev - (2.16 + 2.16 + 4.67)).abs() < 1e-9);
    }

    #[test]
    fn quick_properties_summarize_quantum_numbers() {
        let calibration = Calibration::default();
        let quick = resolver(&calibration)
            .quick_properties(&quarks(&["u", "d", "s"]))
            .unwrap();
        assert_eq!(quick.charge_e, 0.0);
        assert_eq!(quick.baryon_number, 1.0);
        assert!(quick.is_baryon);
        assert!(!quick.is_meson);
        assert_eq!(quick.quark_count, 3);
        assert!((quick.current_mass_sum_mev - (2.16 + 4.67 + 93.4)).abs() < 1e-9);
    }

    #[test]
    fn resolution_is_idempotent() {
        let calibration = Calibration::default();
        let r = resolver(&calibration);
        let input = quarks(&["u", "s\u{0305}"]);
        let before = input.clone();
        let first = r.resolve(&input, "Kaon", "K⁺").unwrap();
        let second = r.resolve(&input, "Kaon", "K⁺").unwrap();
        assert_eq!(first, second);
        assert_eq!(input, before);
    }

    #[test]
    fn calibration_changes_the_mass() {
        let default = Calibration::default();
        let heavier = crate::engine::config::CalibrationBuilder::new()
            .constituent_mass(QuarkFlavor::Up, 400.0)
            .build()
            .unwrap();
        let uud = quarks(&["u", "u", "d"]);
        let a = resolver(&default).resolve(&uud, "Proton", "p").unwrap();
        let b = resolver(&heavier).resolve(&uud, "Proton", "p").unwrap();
        assert!(b.mass_mev > a.mass_mev);
    }
}
