use crate::error::{CliError, Result};
use crate::utils::parser::parse_key_value;
use periodica::engine::config::Calibration;
use std::path::Path;
use toml::Value;
use tracing::{debug, info};

/// Loads the calibration file (or the fitted defaults) and applies every
/// `-S key=value` override on top. The result is validated once at the end.
pub fn build_calibration(path: Option<&Path>, set_values: &[String]) -> Result<Calibration> {
    let calibration = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading calibration file.");
            Calibration::load(path)?
        }
        None => Calibration::default(),
    };
    let calibration = apply_set_values(calibration, set_values)?;
    calibration.validate()?;
    Ok(calibration)
}

fn apply_set_values(calibration: Calibration, set_values: &[String]) -> Result<Calibration> {
    if set_values.is_empty() {
        return Ok(calibration);
    }
    let mut tree = Value::try_from(&calibration)
        .map_err(|e| CliError::Config(format!("Failed to serialize calibration: {e}")))?;

    for kv_pair in set_values {
        let (key, value_str) =
            parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let slot = lookup_mut(&mut tree, key).ok_or_else(|| {
            CliError::Config(format!("Unsupported configuration key for --set: '{key}'"))
        })?;
        let value: f64 = value_str.parse().map_err(|_| {
            CliError::Config(format!("Invalid float value for {key}: {value_str}"))
        })?;
        debug!(key, value, "Applying calibration override.");
        *slot = Value::Float(value);
    }

    tree.try_into()
        .map_err(|e| CliError::Config(format!("Invalid calibration after overrides: {e}")))
}

/// Follows a dotted key down to an existing numeric leaf.
fn lookup_mut<'a>(tree: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    let leaf = key
        .split('.')
        .try_fold(tree, |node, part| node.as_table_mut()?.get_mut(part))?;
    matches!(leaf, Value::Float(_) | Value::Integer(_)).then_some(leaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::engine::config::ConfigError;

    #[test]
    fn no_file_and_no_overrides_gives_defaults() {
        let calibration = build_calibration(None, &[]).unwrap();
        assert_eq!(calibration, Calibration::default());
    }

    #[test]
    fn overrides_reach_nested_tables() {
        let calibration = build_calibration(
            None,
            &[
                "nuclear.pairing=12.0".to_string(),
                "hadron.constituent-masses.strange=500".to_string(),
                "hadron.excited-binding.baryon=210".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(calibration.nuclear.pairing, 12.0);
        assert_eq!(calibration.hadron.constituent_masses.strange, 500.0);
        assert_eq!(calibration.hadron.excited_binding.baryon, 210.0);
        assert_eq!(calibration.nuclear.volume, Calibration::default().nuclear.volume);
    }

    #[test]
    fn overrides_apply_on_top_of_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.toml");
        std::fs::write(&path, "[nuclear]\npairing = 11.0\ncoulomb = 0.7\n").unwrap();

        let calibration =
            build_calibration(Some(&path), &["nuclear.pairing=12.5".to_string()]).unwrap();
        assert_eq!(calibration.nuclear.pairing, 12.5);
        assert_eq!(calibration.nuclear.coulomb, 0.7);
    }

    #[test]
    fn unknown_or_non_leaf_keys_are_rejected() {
        for key in ["nuclear.pairng=1", "hadron=1", "hadron.constituent-masses=1"] {
            let result = build_calibration(None, &[key.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))), "{key}");
        }
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(matches!(
            build_calibration(None, &["nuclear.pairing".to_string()]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            build_calibration(None, &["nuclear.pairing=strong".to_string()]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn overrides_are_validated() {
        let result = build_calibration(None, &["hadron.constituent-masses.up=-1".to_string()]);
        assert!(matches!(
            result,
            Err(CliError::Calibration(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn missing_calibration_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = build_calibration(Some(&dir.path().join("absent.toml")), &[]);
        assert!(matches!(
            result,
            Err(CliError::Calibration(ConfigError::Io { .. }))
        ));
    }
}
