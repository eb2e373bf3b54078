//! # Laser Safety Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`classification`] - IEC 60825-1 product class (1, 1M, 2, 2M, 3R, 3B, 4)
//! - [`exposure`] - Ocular MPE with the three pulsed-train rules
//! - [`nohd`] - Nominal ocular hazard distance
//! - [`eyewear`] - Required optical density and EN 207 marking

pub mod classification;
pub mod exposure;
pub mod eyewear;
pub mod nohd;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::CalcSettings;

// Re-export commonly used types
pub use classification::{classify, ClassificationInput, ClassificationResult, LaserClass};
pub use exposure::{LimitingMechanism, MpeInput, MpeResult};
pub use eyewear::{EyewearInput, EyewearMarking, EyewearResult};
pub use nohd::{HazardLevel, NohdInput, NohdResult};

/// Enum wrapper for all calculation types.
///
/// This is the shape stored records take when they come from an import or
/// history layer.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Nohd",
///   "label": "Show laser",
///   "power_w": 1.0,
///   "beam_diameter_mm": 5.0,
///   "divergence_rad": 0.001,
///   "wavelength_nm": 532.0,
///   "exposure_time_s": 0.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Product classification
    Classification(ClassificationInput),
    /// Ocular MPE
    Mpe(MpeInput),
    /// Nominal ocular hazard distance
    Nohd(NohdInput),
    /// Protective eyewear
    Eyewear(EyewearInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Classification(c) => &c.laser.label,
            CalculationItem::Mpe(m) => &m.label,
            CalculationItem::Nohd(n) => &n.label,
            CalculationItem::Eyewear(e) => &e.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Classification(_) => "Classification",
            CalculationItem::Mpe(_) => "MPE",
            CalculationItem::Nohd(_) => "NOHD",
            CalculationItem::Eyewear(_) => "Eyewear",
        }
    }

    /// Run the calculation.
    pub fn run(&self, settings: &CalcSettings) -> CalcResult<CalculationOutput> {
        let output = match self {
            CalculationItem::Classification(input) => {
                CalculationOutput::Classification(classification::calculate(input, settings)?)
            }
            CalculationItem::Mpe(input) => CalculationOutput::Mpe(exposure::calculate(input, settings)?),
            CalculationItem::Nohd(input) => CalculationOutput::Nohd(nohd::calculate(input, settings)?),
            CalculationItem::Eyewear(input) => CalculationOutput::Eyewear(eyewear::calculate(input, settings)?),
        };
        tracing::info!(calc_type = self.calc_type(), label = self.label(), "calculation complete");
        Ok(output)
    }
}

/// Result of [`CalculationItem::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Classification(ClassificationResult),
    Mpe(MpeResult),
    Nohd(NohdResult),
    Eyewear(EyewearResult),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laser::{ExposureContext, LaserSpec};

    #[test]
    fn test_item_json_roundtrip() {
        let item = CalculationItem::Classification(ClassificationInput {
            laser: LaserSpec::continuous(532.0, 0.005, 7.0).with_label("Pointer"),
            exposure: ExposureContext::aversion(),
        });

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Classification\""));

        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        assert_eq!(back.label(), "Pointer");
        assert_eq!(back.calc_type(), "Classification");
    }

    #[test]
    fn test_run_from_json() {
        let json = r#"{
            "type": "Nohd",
            "label": "Show laser",
            "power_w": 1.0,
            "beam_diameter_mm": 5.0,
            "divergence_rad": 0.001,
            "wavelength_nm": 532.0,
            "exposure_time_s": 0.25
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();

        match item.run(&CalcSettings::default()).unwrap() {
            CalculationOutput::Nohd(result) => assert_eq!(result.hazard_class, HazardLevel::High),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_classification_defaults_exposure() {
        let json = r#"{
            "type": "Classification",
            "laser": {
                "wavelength_nm": 532.0,
                "emission": { "mode": "Continuous", "power_w": 0.005 },
                "beam_diameter_mm": 7.0
            }
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();

        match item.run(&CalcSettings::default()).unwrap() {
            CalculationOutput::Classification(result) => {
                assert_eq!(result.laser_class, LaserClass::Class3R)
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_item_propagates_error() {
        let item = CalculationItem::Mpe(MpeInput {
            label: String::new(),
            wavelength_nm: 50.0,
            exposure_time_s: 1.0,
            emission: crate::laser::Emission::Continuous { power_w: 1.0 },
        });
        let err = item.run(&CalcSettings::default()).unwrap_err();
        assert!(err.is_input_error());
    }
}
