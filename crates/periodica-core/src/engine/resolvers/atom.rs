use crate::core::constants::round_sum;
use crate::core::models::atom::{Atom, IonType, IsotopeProperties};
use crate::core::models::particle::{MassUnit, Particle};
use crate::core::physics::nuclear::{self, NuclearCoefficients};
use crate::core::physics::{atomic, orbitals};
use crate::core::physics::orbitals::PeriodicPosition;
use crate::core::tables::elements::element_by_number;
use crate::engine::config::Calibration;
use crate::engine::error::ResolveError;
use tracing::{debug, instrument};

/// The three constituent records an atom is built from.
#[derive(Debug, Clone, Copy)]
pub struct AtomConstituents<'p> {
    pub proton: &'p Particle,
    pub neutron: &'p Particle,
    pub electron: &'p Particle,
}

/// Particle counts of the atom to build. Name and symbol default to the
/// element with the same proton count, or to `"Custom Element"`/`"X"` past
/// the named elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSpec {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

impl AtomSpec {
    /// A neutral atom with as many electrons as protons.
    pub fn neutral(protons: u32, neutrons: u32) -> Self {
        Self {
            protons,
            neutrons,
            electrons: protons,
            name: None,
            symbol: None,
        }
    }

    pub fn with_electrons(mut self, electrons: u32) -> Self {
        self.electrons = electrons;
        self
    }

    pub fn named(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.symbol = Some(symbol.into());
        self
    }

    fn identity(&self) -> (String, String) {
        let known = element_by_number(self.protons);
        let name = self
            .name
            .clone()
            .or_else(|| known.map(|e| e.name.to_string()))
            .unwrap_or_else(|| "Custom Element".to_string());
        let symbol = self
            .symbol
            .clone()
            .or_else(|| known.map(|e| e.symbol.to_string()))
            .unwrap_or_else(|| "X".to_string());
        (name, symbol)
    }
}

/// Builds atoms from nucleon and electron records.
#[derive(Debug, Clone, Copy)]
pub struct AtomResolver<'a> {
    coefficients: &'a NuclearCoefficients,
}

impl<'a> AtomResolver<'a> {
    pub fn new(calibration: &'a Calibration) -> Self {
        Self {
            coefficients: &calibration.nuclear,
        }
    }

    /// Assembles the atom described by `spec`.
    ///
    /// The nucleon records must carry a mass and the electron record its rest
    /// energy; charges default to +1 and −1 when absent. Periodic trends are
    /// those of the neutral element, while the block and configuration follow
    /// the atom's own electrons.
    #[instrument(skip_all, name = "atom_resolver", fields(z = spec.protons, n = spec.neutrons))]
    pub fn resolve(&self, constituents: &AtomConstituents<'_>, spec: &AtomSpec) -> Result<Atom, ResolveError> {
        let z = spec.protons;
        let n = spec.neutrons;
        if z == 0 {
            return Err(ResolveError::NoProtons);
        }
        let proton_mass = required_mass(constituents.proton, MassUnit::Amu, "Mass_amu")?;
        let neutron_mass = required_mass(constituents.neutron, MassUnit::Amu, "Mass_amu")?;
        let electron_mass_mev = required_mass(constituents.electron, MassUnit::MeV, "Mass_MeVc2")?;

        let proton_charge = constituents.proton.charge_e.unwrap_or(1.0);
        let electron_charge = constituents.electron.charge_e.unwrap_or(-1.0);
        let charge = round_sum(f64::from(z) * proton_charge + f64::from(spec.electrons) * electron_charge);

        let (atomic_mass, mass_breakdown) =
            nuclear::atomic_mass(self.coefficients, z, n, proton_mass, neutron_mass);
        let binding_energy_mev = mass_breakdown.binding.total;
        let mass_number = z + n;

        let configuration = orbitals::electron_configuration(spec.electrons);
        let position = PeriodicPosition::of(z);

        let ionization_energy_ev = atomic::ionization_energy(z, electron_mass_mev, &configuration);
        let electronegativity = atomic::electronegativity(&position);
        let atomic_radius_pm = atomic::atomic_radius(&position);
        let melting_point_k = atomic::melting_point(&position);

        let (name, symbol) = spec.identity();
        debug!(
            %symbol,
            atomic_mass,
            binding_energy_mev,
            ionization_energy_ev,
            "Resolved atom."
        );

        Ok(Atom {
            name,
            symbol,
            atomic_number: z,
            mass_number,
            protons: z,
            neutrons: n,
            electrons: spec.electrons,
            atomic_mass,
            charge,
            ion_type: IonType::from_charge(charge),
            block: configuration.block(),
            period: position.period,
            group: position.group,
            valence_electrons: atomic::valence_electrons(&position),
            ionization_energy_ev,
            electronegativity,
            electron_affinity_kj_mol: atomic::electron_affinity(&position, electronegativity),
            atomic_radius_pm,
            covalent_radius_pm: atomic::covalent_radius(atomic_radius_pm, position.block, position.period),
            melting_point_k,
            boiling_point_k: atomic::boiling_point(&position, melting_point_k),
            density_g_cm3: atomic::density(&position, atomic_mass, atomic_radius_pm),
            binding_energy_mev,
            binding_energy_per_nucleon_mev: nuclear::binding_energy_per_nucleon(binding_energy_mev, mass_number),
            nuclear_stability: nuclear::nuclear_stability(z, n),
            emission_wavelength_nm: atomic::emission_wavelength(z, ionization_energy_ev),
            isotopes: nuclear::generate_isotopes(z),
            electron_configuration: configuration,
            mass_breakdown,
        })
    }

    /// Nuclear properties of a single isotope without building the atom.
    pub fn isotope_properties(
        &self,
        proton: &Particle,
        neutron: &Particle,
        protons: u32,
        neutrons: u32,
    ) -> Result<IsotopeProperties, ResolveError> {
        if protons == 0 {
            return Err(ResolveError::NoProtons);
        }
        let proton_mass = required_mass(proton, MassUnit::Amu, "Mass_amu")?;
        let neutron_mass = required_mass(neutron, MassUnit::Amu, "Mass_amu")?;
        let (atomic_mass_amu, breakdown) =
            nuclear::atomic_mass(self.coefficients, protons, neutrons, proton_mass, neutron_mass);
        let mass_number = protons + neutrons;

        Ok(IsotopeProperties {
            mass_number,
            atomic_mass_amu,
            binding_energy_mev: breakdown.binding.total,
            binding_energy_per_nucleon_mev: nuclear::binding_energy_per_nucleon(
                breakdown.binding.total,
                mass_number,
            ),
            n_z_ratio: f64::from(neutrons) / f64::from(protons),
            stability: nuclear::isotope_stability(protons, neutrons),
        })
    }
}

fn required_mass(particle: &Particle, unit: MassUnit, field: &'static str) -> Result<f64, ResolveError> {
    particle
        .mass_in(unit)
        .ok_or_else(|| ResolveError::MissingField {
            record: particle.label().to_string(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{Block, IsotopeStability};
    use crate::testing::{electron, neutron, proton};

    const TOLERANCE: f64 = 1e-6;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn resolve(spec: AtomSpec) -> Result<Atom, ResolveError> {
        let calibration = Calibration::default();
        let (p, n, e) = (proton(), neutron(), electron());
        let constituents = AtomConstituents {
            proton: &p,
            neutron: &n,
            electron: &e,
        };
        AtomResolver::new(&calibration).resolve(&constituents, &spec)
    }

    #[test]
    fn hydrogen_is_a_bare_proton_plus_electron() {
        let hydrogen = resolve(AtomSpec::neutral(1, 0)).unwrap();
        assert_eq!(hydrogen.name, "Hydrogen");
        assert_eq!(hydrogen.symbol, "H");
        assert_eq!(hydrogen.mass_number, 1);
        assert!(f64_approx_equal(hydrogen.atomic_mass, 1.007276));
        assert_eq!(hydrogen.binding_energy_mev, 0.0);
        assert_eq!(hydrogen.block, Block::S);
        assert_eq!(hydrogen.period, 1);
        assert_eq!(hydrogen.charge, 0.0);
        assert_eq!(hydrogen.ion_type, IonType::Neutral);
        assert!((hydrogen.ionization_energy_ev - 13.6).abs() < 0.05);
        assert_eq!(hydrogen.electron_configuration.notation, "1s¹");
    }

    #[test]
    fn carbon_twelve_lands_near_twelve_amu() {
        let carbon = resolve(AtomSpec::neutral(6, 6)).unwrap();
        assert_eq!(carbon.block, Block::P);
        assert_eq!(carbon.period, 2);
        assert_eq!(carbon.group, Some(14));
        assert!((carbon.atomic_mass - 12.0).abs() < 0.1);
        assert!(carbon.binding_energy_mev > 80.0);
        assert_eq!(carbon.mass_number, carbon.protons + carbon.neutrons);
        assert_eq!(carbon.valence_electrons, 4);
        assert!(carbon.nuclear_stability.is_stable);
    }

    #[test]
    fn ions_carry_charge_and_their_own_configuration() {
        let sodium_ion = resolve(AtomSpec::neutral(11, 12).with_electrons(10)).unwrap();
        assert_eq!(sodium_ion.charge, 1.0);
        assert_eq!(sodium_ion.ion_type, IonType::Cation);
        assert_eq!(sodium_ion.block, Block::P);
        assert_eq!(sodium_ion.electron_configuration.total_electrons(), 10);

        let chloride = resolve(AtomSpec::neutral(17, 18).with_electrons(18)).unwrap();
        assert_eq!(chloride.charge, -1.0);
        assert_eq!(chloride.ion_type, IonType::Anion);
    }

    #[test]
    fn explicit_names_override_the_element_table() {
        let atom = resolve(AtomSpec::neutral(1, 1).named("Deuterium", "D")).unwrap();
        assert_eq!(atom.name, "Deuterium");
        assert_eq!(atom.symbol, "D");
    }

    #[test]
    fn zero_protons_is_rejected() {
        assert_eq!(resolve(AtomSpec::neutral(0, 1)), Err(ResolveError::NoProtons));
    }

    #[test]
    fn missing_nucleon_mass_is_reported() {
        let calibration = Calibration::default();
        let p = Particle::new("Proton", "p").with_charge(1.0);
        let (n, e) = (neutron(), electron());
        let constituents = AtomConstituents {
            proton: &p,
            neutron: &n,
            electron: &e,
        };
        let result = AtomResolver::new(&calibration).resolve(&constituents, &AtomSpec::neutral(1, 0));
        assert_eq!(
            result,
            Err(ResolveError::MissingField {
                record: "Proton".to_string(),
                field: "Mass_amu",
            })
        );
    }

    #[test]
    fn nucleon_mass_in_mev_is_converted() {
        let calibration = Calibration::default();
        let p = Particle::new("Proton", "p").with_mass_mev(938.272).with_charge(1.0);
        let (n, e) = (neutron(), electron());
        let constituents = AtomConstituents {
            proton: &p,
            neutron: &n,
            electron: &e,
        };
        let atom = AtomResolver::new(&calibration)
            .resolve(&constituents, &AtomSpec::neutral(1, 0))
            .unwrap();
        assert!(f64_approx_equal(atom.atomic_mass, 938.272 / 931.494));
    }

    #[test]
    fn elements_past_the_table_get_a_generic_identity() {
        let atom = resolve(AtomSpec::neutral(119, 180)).unwrap();
        assert_eq!(atom.name, "Custom Element");
        assert_eq!(atom.symbol, "X");
        assert_eq!(atom.group, None);
        assert!((3.5..=30.0).contains(&atom.ionization_energy_ev));
        assert!(!atom.nuclear_stability.is_stable);
    }

    #[test]
    fn isotope_properties_of_carbon() {
        let calibration = Calibration::default();
        let resolver = AtomResolver::new(&calibration);
        let c12 = resolver
            .isotope_properties(&proton(), &neutron(), 6, 6)
            .unwrap();
        assert_eq!(c12.mass_number, 12);
        assert_eq!(c12.n_z_ratio, 1.0);
        assert_eq!(c12.stability, IsotopeStability::Stable);
        assert!((c12.atomic_mass_amu - 12.0).abs() < 0.1);

        assert_eq!(
            resolver.isotope_properties(&proton(), &neutron(), 0, 4),
            Err(ResolveError::NoProtons)
        );
    }

    #[test]
    fn atom_resolution_is_idempotent() {
        let first = resolve(AtomSpec::neutral(26, 30)).unwrap();
        let second = resolve(AtomSpec::neutral(26, 30)).unwrap();
        assert_eq!(first, second);
    }
}
