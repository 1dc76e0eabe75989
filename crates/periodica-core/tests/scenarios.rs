use periodica::core::models::atom::Block;
use periodica::core::models::element::ElementData;
use periodica::core::models::hadron::Stability;
use periodica::core::models::molecule::{BondType, Geometry, Polarity};
use periodica::core::models::particle::Particle;
use periodica::core::physics::phase::state_at_stp;
use periodica::core::physics::vsepr::{VSEPR_TABLE, geometry_for};
use periodica::engine::config::Calibration;
use periodica::engine::resolvers::{
    AtomConstituents, AtomResolver, AtomSpec, HadronResolver, MoleculeResolver,
};

fn up() -> Particle {
    Particle::new("Up Quark", "u")
        .with_mass_mev(2.16)
        .with_charge(2.0 / 3.0)
        .with_spin(0.5)
        .with_baryon_number(1.0 / 3.0)
        .with_isospin(0.5, 0.5)
}

fn down() -> Particle {
    Particle::new("Down Quark", "d")
        .with_mass_mev(4.67)
        .with_charge(-1.0 / 3.0)
        .with_spin(0.5)
        .with_baryon_number(1.0 / 3.0)
        .with_isospin(0.5, -0.5)
}

fn strange() -> Particle {
    Particle::new("Strange Quark", "s")
        .with_mass_mev(93.4)
        .with_charge(-1.0 / 3.0)
        .with_spin(0.5)
        .with_baryon_number(1.0 / 3.0)
}

fn proton() -> Particle {
    Particle::new("Proton", "p")
        .with_mass_amu(1.007276)
        .with_charge(1.0)
}

fn neutron() -> Particle {
    Particle::new("Neutron", "n")
        .with_mass_amu(1.008665)
        .with_charge(0.0)
}

fn electron() -> Particle {
    Particle::new("Electron", "e⁻")
        .with_mass_mev(0.51099895)
        .with_charge(-1.0)
}

fn hydrogen() -> ElementData {
    ElementData::new("H", 1, 1.008)
        .with_electronegativity(2.20)
        .with_valence_electrons(1)
        .with_atomic_radius(53)
}

fn carbon() -> ElementData {
    ElementData::new("C", 6, 12.011)
        .with_electronegativity(2.55)
        .with_valence_electrons(4)
        .with_atomic_radius(70)
}

fn oxygen() -> ElementData {
    ElementData::new("O", 8, 15.999)
        .with_electronegativity(3.44)
        .with_valence_electrons(6)
        .with_atomic_radius(60)
}

#[test]
fn uud_is_a_stable_proton() {
    let calibration = Calibration::default();
    let proton = HadronResolver::new(&calibration)
        .resolve(&[up(), up(), down()], "Proton", "p")
        .unwrap();

    assert_eq!(proton.charge_e, 1.0);
    assert_eq!(proton.baryon_number, 1.0);
    assert_eq!(proton.spin_hbar, 0.5);
    assert_eq!(proton.stability, Stability::Stable);
    assert!((proton.mass_mev - 938.27).abs() / 938.27 < 0.01);
}

#[test]
fn hadron_charge_and_baryon_number_are_conserved() {
    let calibration = Calibration::default();
    let resolver = HadronResolver::new(&calibration);
    let contents = vec![
        vec![up(), up(), down()],
        vec![up(), down(), down()],
        vec![up(), down(), strange()],
        vec![strange(), strange(), strange()],
    ];
    for quarks in contents {
        let hadron = resolver.resolve(&quarks, "Baryon", "B").unwrap();
        let charge: f64 = quarks.iter().filter_map(|q| q.charge_e).sum();
        let baryon: f64 = quarks.iter().filter_map(|q| q.baryon_number).sum();
        assert!((hadron.charge_e - charge).abs() < 1e-9);
        assert!((hadron.baryon_number - baryon).abs() < 1e-9);
    }
}

#[test]
fn nucleon_is_lighter_than_delta() {
    let calibration = Calibration::default();
    let resolver = HadronResolver::new(&calibration);
    let quarks = [up(), up(), down()];
    let nucleon = resolver.resolve(&quarks, "Proton", "p").unwrap();
    let delta = resolver.resolve_excited(&quarks).unwrap();
    assert!(nucleon.mass_mev < delta.mass_mev);
    assert_eq!(delta.spin_hbar, 1.5);
}

#[test]
fn hydrogen_atom_from_supplied_constituents() {
    let calibration = Calibration::default();
    let (p, n, e) = (proton(), neutron(), electron());
    let constituents = AtomConstituents {
        proton: &p,
        neutron: &n,
        electron: &e,
    };
    let atom = AtomResolver::new(&calibration)
        .resolve(&constituents, &AtomSpec::neutral(1, 0))
        .unwrap();

    assert!((atom.atomic_mass - 1.008).abs() < 0.001);
    assert_eq!(atom.block, Block::S);
    assert_eq!(atom.period, 1);
    assert!((atom.ionization_energy_ev - 13.6).abs() < 0.1);
}

#[test]
fn carbon_twelve_is_p_block() {
    let calibration = Calibration::default();
    let (p, n, e) = (proton(), neutron(), electron());
    let constituents = AtomConstituents {
        proton: &p,
        neutron: &n,
        electron: &e,
    };
    let atom = AtomResolver::new(&calibration)
        .resolve(&constituents, &AtomSpec::neutral(6, 6))
        .unwrap();

    assert_eq!(atom.electron_configuration.notation, "1s² 2s² 2p²");
    assert_eq!(atom.block, Block::P);
    assert!((atom.atomic_mass - 12.0).abs() < 0.1);
}

#[test]
fn water_and_carbon_dioxide() {
    let resolver = MoleculeResolver::new();

    let water = resolver
        .resolve(&[hydrogen(), oxygen()], &[2, 1], Some("Water"), None)
        .unwrap();
    assert_eq!(water.formula, "H₂O");
    assert_eq!(water.bond_type, BondType::PolarCovalent);
    assert!((water.electronegativity_difference - 1.24).abs() < 1e-9);
    assert_eq!(water.geometry, Geometry::Bent);
    assert_eq!(water.bond_angle_deg, Some(104.5));
    assert_eq!(water.polarity, Polarity::Polar);
    assert!(water.melting_point_k < 298.15 && 298.15 < water.boiling_point_k);

    let co2 = resolver
        .resolve(&[carbon(), oxygen()], &[1, 2], Some("Carbon Dioxide"), None)
        .unwrap();
    assert_eq!(co2.geometry, Geometry::Linear);
    assert_eq!(co2.bond_angle_deg, Some(180.0));
    assert!(co2.electronegativity_difference > 0.4);
    assert_eq!(co2.polarity, Polarity::Nonpolar);
}

#[test]
fn molecule_state_matches_its_own_phase_points() {
    let resolver = MoleculeResolver::new();
    let molecules = vec![
        resolver.resolve(&[hydrogen(), oxygen()], &[2, 1], None, None).unwrap(),
        resolver.resolve(&[carbon(), oxygen()], &[1, 2], None, None).unwrap(),
        resolver.resolve(&[carbon(), hydrogen()], &[1, 4], None, None).unwrap(),
        resolver.resolve(&[oxygen()], &[2], None, None).unwrap(),
    ];
    for molecule in molecules {
        assert_eq!(
            state_at_stp(molecule.melting_point_k, molecule.boiling_point_k),
            molecule.state_at_stp,
            "{}",
            molecule.formula
        );
    }
}

#[test]
fn vsepr_table_is_complete_and_falls_back_to_complex() {
    for ((bonding, lone), geometry, _) in VSEPR_TABLE {
        let (found, angle) = geometry_for(bonding, lone);
        assert_eq!(found, geometry);
        assert!(angle.is_some());
    }
    assert_eq!(geometry_for(7, 0), (Geometry::Complex, None));
}

#[test]
fn resolvers_are_idempotent() {
    let calibration = Calibration::default();
    let hadrons = HadronResolver::new(&calibration);
    let quarks = [up(), down(), down()];
    assert_eq!(
        hadrons.resolve(&quarks, "Neutron", "n").unwrap(),
        hadrons.resolve(&quarks, "Neutron", "n").unwrap()
    );

    let (p, n, e) = (proton(), neutron(), electron());
    let constituents = AtomConstituents {
        proton: &p,
        neutron: &n,
        electron: &e,
    };
    let atoms = AtomResolver::new(&calibration);
    let spec = AtomSpec::neutral(26, 30);
    assert_eq!(
        atoms.resolve(&constituents, &spec).unwrap(),
        atoms.resolve(&constituents, &spec).unwrap()
    );

    let molecules = MoleculeResolver::new();
    let elements = [hydrogen(), oxygen()];
    assert_eq!(
        molecules.resolve(&elements, &[2, 1], None, None).unwrap(),
        molecules.resolve(&elements, &[2, 1], None, None).unwrap()
    );
}
