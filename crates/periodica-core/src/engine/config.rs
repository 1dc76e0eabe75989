use crate::core::models::hadron::QuarkFlavor;
use crate::core::physics::nuclear::NuclearCoefficients;
use crate::core::physics::quark::QuarkModelParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{key}': {value} ({reason})")]
    InvalidValue {
        key: String,
        value: f64,
        reason: &'static str,
    },
}

/// Every fitted coefficient the resolvers use.
///
/// The defaults are the published fit values. A calibration file only needs
/// the keys it changes:
///
/// ```toml
/// [hadron]
/// hyperfine-coupling-meson = 7.0e7
///
/// [hadron.excited-binding]
/// baryon = 210.0
/// light-meson = -63.0
/// strange-meson = -43.0
/// heavy-meson = -100.0
/// other-meson = -50.0
/// exotic = -100.0
///
/// [nuclear]
/// pairing = 12.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct Calibration {
    pub hadron: QuarkModelParams,
    pub nuclear: NuclearCoefficients,
}

impl Calibration {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let calibration: Self = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Rejects non-finite coefficients, non-positive constituent masses and
    /// negative couplings or nuclear coefficients. Binding corrections may
    /// take either sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hadron = &self.hadron;
        for (name, value) in hadron.constituent_masses.values() {
            positive(&format!("hadron.constituent-masses.{name}"), value)?;
        }
        non_negative("hadron.hyperfine-coupling-baryon", hadron.hyperfine_coupling_baryon)?;
        non_negative("hadron.hyperfine-coupling-meson", hadron.hyperfine_coupling_meson)?;
        finite("hadron.neutral-pion-correction", hadron.neutral_pion_correction)?;
        for (name, value) in hadron.ground_binding.values() {
            finite(&format!("hadron.ground-binding.{name}"), value)?;
        }
        for (name, value) in hadron.excited_binding.values() {
            finite(&format!("hadron.excited-binding.{name}"), value)?;
        }
        for (name, value) in self.nuclear.values() {
            non_negative(&format!("nuclear.{name}"), value)?;
        }
        Ok(())
    }
}

fn finite(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            reason: "must be finite",
        })
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    finite(key, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    finite(key, value)?;
    if value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

#[derive(Default)]
pub struct CalibrationBuilder {
    hadron: Option<QuarkModelParams>,
    nuclear: Option<NuclearCoefficients>,
}

impl CalibrationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quark_model(mut self, params: QuarkModelParams) -> Self {
        self.hadron = Some(params);
        self
    }

    pub fn nuclear(mut self, coefficients: NuclearCoefficients) -> Self {
        self.nuclear = Some(coefficients);
        self
    }

    pub fn constituent_mass(mut self, flavor: QuarkFlavor, mass_mev: f64) -> Self {
        let masses = &mut self.hadron.get_or_insert_with(Default::default).constituent_masses;
        match flavor {
            QuarkFlavor::Up => masses.up = mass_mev,
            QuarkFlavor::Down => masses.down = mass_mev,
            QuarkFlavor::Strange => masses.strange = mass_mev,
            QuarkFlavor::Charm => masses.charm = mass_mev,
            QuarkFlavor::Bottom => masses.bottom = mass_mev,
            QuarkFlavor::Top => masses.top = mass_mev,
        }
        self
    }

    pub fn hyperfine_couplings(mut self, baryon: f64, meson: f64) -> Self {
        let params = self.hadron.get_or_insert_with(Default::default);
        params.hyperfine_coupling_baryon = baryon;
        params.hyperfine_coupling_meson = meson;
        self
    }

    pub fn build(self) -> Result<Calibration, ConfigError> {
        let calibration = Calibration {
            hadron: self.hadron.unwrap_or_default(),
            nuclear: self.nuclear.unwrap_or_default(),
        };
        calibration.validate()?;
        Ok(calibration)
    }
}
