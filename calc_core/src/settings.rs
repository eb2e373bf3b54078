//! # Calculation Settings
//!
//! Global knobs shared by every laser calculation. Settings serialize to JSON
//! so a front end can keep them in a config file; every field has a default,
//! so a partial file (or `{}`) is valid.
//!
//! ```rust
//! use calc_core::settings::{CalcSettings, FactorDefaults};
//!
//! let settings: CalcSettings = serde_json::from_str(r#"{ "factor_defaults": "Corrected" }"#).unwrap();
//! assert_eq!(settings.factor_defaults, FactorDefaults::Corrected);
//! assert_eq!(settings.default_angular_subtense_mrad, 1.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Smallest angular subtense (mrad) of a point source
pub const ALPHA_MIN_MRAD: f64 = 1.5;

/// Fallback values used by correction factors outside their active bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FactorDefaults {
    /// C2 = 30 and C4 = 5 outside their bands
    #[default]
    Literal,
    /// C2 = 1 outside 302.5-315 nm, C4 = 5 only in 1050-1400 nm
    Corrected,
}

/// How the emission collected by each measurement condition is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmissionModel {
    /// Both conditions see the full measured emission
    #[default]
    RawInput,
    /// Gaussian beam truncated by each condition's aperture
    GaussianAperture,
}

impl EmissionModel {
    /// Fraction of the emission passing an aperture of `aperture_mm` for a
    /// beam of 1/e² diameter `beam_diameter_mm`.
    pub fn coupling(&self, aperture_mm: f64, beam_diameter_mm: f64) -> f64 {
        match self {
            EmissionModel::RawInput => 1.0,
            EmissionModel::GaussianAperture => {
                let ratio = aperture_mm / beam_diameter_mm;
                1.0 - (-2.0 * ratio * ratio).exp()
            }
        }
    }
}

/// Settings applied to all calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Standard edition the tables follow
    pub standard: String,

    /// Correction-factor fallback behaviour
    pub factor_defaults: FactorDefaults,

    /// Emission model for Condition 1 / Condition 3
    pub emission_model: EmissionModel,

    /// Angular subtense for classification (C6, T2) when an input leaves it
    /// unset (mrad). MPE values are small-source and ignore it.
    pub default_angular_subtense_mrad: f64,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            standard: "IEC 60825-1:2014".to_string(),
            factor_defaults: FactorDefaults::Literal,
            emission_model: EmissionModel::RawInput,
            default_angular_subtense_mrad: ALPHA_MIN_MRAD,
        }
    }
}

impl CalcSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.default_angular_subtense_mrad.is_finite() || self.default_angular_subtense_mrad <= 0.0 {
            return Err(CalcError::invalid_input(
                "default_angular_subtense_mrad",
                self.default_angular_subtense_mrad.to_string(),
                "Angular subtense must be positive",
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
