//! # Nominal Ocular Hazard Distance
//!
//! Distance beyond which the beam irradiance falls below the CW MPE. For a
//! beam of exit diameter D₀ and full-angle divergence φ:
//!
//! ```text
//! NOHD = (√(4P / (π·MPE)) − D₀) / φ      floored at 0
//! ```
//!
//! A collimated beam (φ = 0) never spreads: the NOHD is infinite when the exit
//! irradiance already exceeds the MPE and zero otherwise.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::laser::{validate_wavelength, Emission};
use crate::references::NOHD_FORMULA;
use crate::settings::CalcSettings;
use crate::units::Quantity;

use super::exposure::{self, MpeInput};

/// Input parameters for a NOHD calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Outdoor show laser",
///   "power_w": 1.0,
///   "beam_diameter_mm": 5.0,
///   "divergence_rad": 0.001,
///   "wavelength_nm": 532.0,
///   "exposure_time_s": 0.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NohdInput {
    #[serde(default)]
    pub label: String,

    /// CW output power (W)
    pub power_w: f64,

    /// Beam diameter at the exit aperture (mm)
    pub beam_diameter_mm: f64,

    /// Full-angle beam divergence (rad); zero for a collimated beam
    pub divergence_rad: f64,

    pub wavelength_nm: f64,

    /// Exposure duration the MPE is evaluated for (s)
    pub exposure_time_s: f64,
}

impl NohdInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("power_w", self.power_w)?;
        require_positive("beam_diameter_mm", self.beam_diameter_mm)?;
        if !self.divergence_rad.is_finite() || self.divergence_rad < 0.0 {
            return Err(CalcError::invalid_input(
                "divergence_rad",
                self.divergence_rad.to_string(),
                "Divergence must be zero or positive",
            ));
        }
        validate_wavelength(self.wavelength_nm)?;
        require_positive("exposure_time_s", self.exposure_time_s)
    }
}

/// Hazard level implied by the NOHD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HazardLevel {
    #[serde(rename = "No ocular hazard")]
    None,
    #[serde(rename = "Low hazard")]
    Low,
    #[serde(rename = "Moderate hazard")]
    Moderate,
    #[serde(rename = "High hazard")]
    High,
    #[serde(rename = "Extremely high hazard")]
    Extreme,
}

impl HazardLevel {
    /// 0 m, < 10 m, < 100 m, < 1 km, beyond (or infinite)
    pub fn from_distance(nohd_m: f64) -> Self {
        if nohd_m <= 0.0 {
            HazardLevel::None
        } else if nohd_m < 10.0 {
            HazardLevel::Low
        } else if nohd_m < 100.0 {
            HazardLevel::Moderate
        } else if nohd_m < 1000.0 {
            HazardLevel::High
        } else {
            HazardLevel::Extreme
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HazardLevel::None => "No ocular hazard",
            HazardLevel::Low => "Low hazard",
            HazardLevel::Moderate => "Moderate hazard",
            HazardLevel::High => "High hazard",
            HazardLevel::Extreme => "Extremely high hazard",
        }
    }
}

impl fmt::Display for HazardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from a NOHD calculation.
///
/// An infinite `nohd_m` serializes as `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NohdResult {
    /// Nominal ocular hazard distance (m)
    pub nohd_m: f64,

    /// CW MPE used (W/cm²)
    pub mpe: Quantity,

    /// Beam diameter at the NOHD (mm); the exit diameter when NOHD is 0 or ∞
    pub beam_diameter_at_nohd_mm: f64,

    /// Irradiance at the NOHD (W/cm²)
    pub irradiance_at_nohd: Quantity,

    pub hazard_class: HazardLevel,

    pub steps: Vec<String>,
}

impl NohdResult {
    pub fn is_unbounded(&self) -> bool {
        self.nohd_m.is_infinite()
    }
}

/// Calculate the NOHD.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::nohd::{calculate, HazardLevel, NohdInput};
/// use calc_core::settings::CalcSettings;
///
/// let input = NohdInput {
///     label: String::new(),
///     power_w: 0.1,
///     beam_diameter_mm: 2.0,
///     divergence_rad: 0.0,
///     wavelength_nm: 532.0,
///     exposure_time_s: 0.25,
/// };
/// let result = calculate(&input, &CalcSettings::default()).unwrap();
/// assert!(result.nohd_m.is_infinite());
/// assert_eq!(result.hazard_class, HazardLevel::Extreme);
/// ```
pub fn calculate(input: &NohdInput, settings: &CalcSettings) -> CalcResult<NohdResult> {
    input.validate()?;

    let mpe_result = exposure::calculate(
        &MpeInput {
            label: input.label.clone(),
            wavelength_nm: input.wavelength_nm,
            exposure_time_s: input.exposure_time_s,
            emission: Emission::Continuous {
                power_w: input.power_w,
            },
        },
        settings,
    )?;
    let mpe = mpe_result.critical_mpe;
    let mpe_w_m2 = mpe.value * 1e4;

    let p = input.power_w;
    let d0_m = input.beam_diameter_mm * 1e-3;
    let phi = input.divergence_rad;
    let irradiance_w_m2 = |d_m: f64| 4.0 * p / (PI * d_m * d_m);

    let mut steps = vec![
        format!("Formula ({}): NOHD = (√(4P/(π·MPE)) − D₀)/φ", NOHD_FORMULA.citation()),
        format!("CW MPE at {} s: {}", input.exposure_time_s, mpe),
    ];

    let exit_irradiance = irradiance_w_m2(d0_m);
    let (nohd_m, diameter_m) = if phi > 0.0 {
        let hazard_diameter_m = (4.0 * p / (PI * mpe_w_m2)).sqrt();
        let nohd_m = ((hazard_diameter_m - d0_m) / phi).max(0.0);
        steps.push(format!(
            "Diameter where irradiance equals MPE: {:.3} mm",
            hazard_diameter_m * 1e3
        ));
        (nohd_m, d0_m + phi * nohd_m)
    } else if exit_irradiance > mpe_w_m2 {
        steps.push("Collimated beam above MPE at exit: NOHD unbounded".to_string());
        (f64::INFINITY, d0_m)
    } else {
        steps.push("Collimated beam at or below MPE at exit: no hazard zone".to_string());
        (0.0, d0_m)
    };

    let hazard_class = HazardLevel::from_distance(nohd_m);
    let irradiance_at_nohd = Quantity::watts_per_cm2(irradiance_w_m2(diameter_m) * 1e-4);
    steps.push(format!("NOHD = {:.2} m ({})", nohd_m, hazard_class));

    tracing::debug!(nohd_m, hazard = hazard_class.display_name(), "NOHD calculated");

    Ok(NohdResult {
        nohd_m,
        mpe,
        beam_diameter_at_nohd_mm: diameter_m * 1e3,
        irradiance_at_nohd,
        hazard_class,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn show_laser() -> NohdInput {
        NohdInput {
            label: "Show laser".to_string(),
            power_w: 1.0,
            beam_diameter_mm: 5.0,
            divergence_rad: 1e-3,
            wavelength_nm: 532.0,
            exposure_time_s: 0.25,
        }
    }

    #[test]
    fn test_irradiance_at_nohd_equals_mpe() {
        let result = calculate(&show_laser(), &CalcSettings::default()).unwrap();
        assert!(result.nohd_m > 0.0);

        let rel = (result.irradiance_at_nohd.value - result.mpe.value).abs() / result.mpe.value;
        assert!(rel < 1e-6, "relative error {}", rel);
    }

    #[test]
    fn test_show_laser_distance() {
        // MPE 2.546 mW/cm²: hazard diameter √(4/(π·25.46)) = 0.2236 m
        let result = calculate(&show_laser(), &CalcSettings::default()).unwrap();
        assert!((result.nohd_m - 218.6).abs() < 0.5);
        assert_eq!(result.hazard_class, HazardLevel::High);
    }

    #[test]
    fn test_zero_divergence_above_mpe() {
        let mut input = show_laser();
        input.divergence_rad = 0.0;
        let result = calculate(&input, &CalcSettings::default()).unwrap();

        assert!(result.nohd_m.is_infinite());
        assert_eq!(result.hazard_class, HazardLevel::Extreme);
        assert_eq!(result.hazard_class.display_name(), "Extremely high hazard");
    }

    #[test]
    fn test_zero_divergence_below_mpe() {
        let mut input = show_laser();
        input.divergence_rad = 0.0;
        input.power_w = 1e-6;
        let result = calculate(&input, &CalcSettings::default()).unwrap();

        assert_eq!(result.nohd_m, 0.0);
        assert_eq!(result.hazard_class, HazardLevel::None);
    }

    #[test]
    fn test_weak_divergent_beam_has_no_hazard() {
        let mut input = show_laser();
        input.power_w = 1e-6;
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        assert_eq!(result.nohd_m, 0.0);
        assert!((result.beam_diameter_at_nohd_mm - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_hazard_levels() {
        assert_eq!(HazardLevel::from_distance(0.0), HazardLevel::None);
        assert_eq!(HazardLevel::from_distance(5.0), HazardLevel::Low);
        assert_eq!(HazardLevel::from_distance(50.0), HazardLevel::Moderate);
        assert_eq!(HazardLevel::from_distance(500.0), HazardLevel::High);
        assert_eq!(HazardLevel::from_distance(f64::INFINITY), HazardLevel::Extreme);
    }

    #[test]
    fn test_negative_divergence_rejected() {
        let mut input = show_laser();
        input.divergence_rad = -1e-3;
        assert!(calculate(&input, &CalcSettings::default()).is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip_at_nohd(
            log_p in -2.0f64..2.0,
            d in 1.0f64..10.0,
            phi in 1e-4f64..1e-2,
            l in 400.0f64..1400.0,
        ) {
            let input = NohdInput {
                label: String::new(),
                power_w: 10f64.powf(log_p),
                beam_diameter_mm: d,
                divergence_rad: phi,
                wavelength_nm: l,
                exposure_time_s: 0.25,
            };
            let result = calculate(&input, &CalcSettings::default()).unwrap();
            if result.nohd_m > 0.0 {
                let rel = (result.irradiance_at_nohd.value - result.mpe.value).abs() / result.mpe.value;
                prop_assert!(rel < 1e-6);
            }
        }
    }
}
