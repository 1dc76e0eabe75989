use super::{read_json, write_json};
use crate::cli::HadronArgs;
use crate::error::Result;
use periodica::core::models::particle::Particle;
use periodica::engine::config::Calibration;
use periodica::engine::resolvers::HadronResolver;
use tracing::info;

pub fn run(args: HadronArgs, calibration: &Calibration) -> Result<()> {
    let quarks: Vec<Particle> = read_json(&args.quarks)?;
    info!(quarks = quarks.len(), "Loaded quark records.");
    let resolver = HadronResolver::new(calibration);

    if args.excited {
        let excited = resolver.resolve_excited(&quarks)?;
        eprintln!("Excited {} mass: {:.2} MeV/c²", excited.kind, excited.mass_mev);
        write_json(&excited, &args.output)
    } else {
        let hadron = resolver.resolve(&quarks, &args.name, &args.symbol)?;
        eprintln!("{} ({}) mass: {:.2} MeV/c²", hadron.name, hadron.symbol, hadron.mass_mev);
        write_json(&hadron, &args.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use crate::commands::fixtures;
    use crate::error::CliError;
    use periodica::engine::error::ResolveError;
    use serde_json::json;

    fn args(dir: &std::path::Path, quarks: serde_json::Value, excited: bool) -> HadronArgs {
        HadronArgs {
            quarks: fixtures::write(dir, "quarks.json", quarks),
            name: "Proton".to_string(),
            symbol: "p".to_string(),
            excited,
            output: OutputArgs {
                output: Some(dir.join("hadron.json")),
                compact: false,
            },
        }
    }

    #[test]
    fn writes_the_resolved_proton() {
        let dir = tempfile::tempdir().unwrap();
        let quarks = json!([fixtures::up_quark(), fixtures::up_quark(), fixtures::down_quark()]);
        run(args(dir.path(), quarks, false), &Calibration::default()).unwrap();

        let proton = fixtures::read(&dir.path().join("hadron.json"));
        assert_eq!(proton["name"], "Proton");
        assert_eq!(proton["charge_e"], 1.0);
        let mass = proton["mass_mev"].as_f64().unwrap();
        assert!((mass - 938.27).abs() / 938.27 < 0.01);
    }

    #[test]
    fn excited_flag_writes_the_spin_aligned_state() {
        let dir = tempfile::tempdir().unwrap();
        let quarks = json!([fixtures::up_quark(), fixtures::up_quark(), fixtures::down_quark()]);
        run(args(dir.path(), quarks, true), &Calibration::default()).unwrap();

        let delta = fixtures::read(&dir.path().join("hadron.json"));
        assert_eq!(delta["spin_hbar"], 1.5);
        assert!(delta["mass_mev"].as_f64().unwrap() > 1000.0);
    }

    #[test]
    fn empty_quark_list_surfaces_the_resolver_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(args(dir.path(), json!([]), false), &Calibration::default());
        assert!(matches!(
            result,
            Err(CliError::Resolve(ResolveError::EmptyInput { what: "quarks" }))
        ));
    }
}
