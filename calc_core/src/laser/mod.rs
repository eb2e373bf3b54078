//! # Laser Parameters and IEC 60825-1 Tables
//!
//! Input types shared by every laser calculation, plus the table engines
//! the calculations are built from:
//!
//! - [`spectrum`] - Spectral region and thermal confinement time base
//! - [`factors`] - Correction factors (C1-C7, T1, T2) and MPE factors (CA, CB, CC)
//! - [`conditions`] - Measurement apertures and distances (Condition 1 / 3)
//! - [`ael`] - Accessible emission limits for Class 1, 2, 3R, 3B
//! - [`mpe`] - Single-exposure ocular MPE
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Green pointer",
//!   "wavelength_nm": 532.0,
//!   "emission": { "mode": "Continuous", "power_w": 0.005 },
//!   "beam_diameter_mm": 7.0
//! }
//! ```

pub mod ael;
pub mod conditions;
pub mod factors;
pub mod mpe;
pub mod spectrum;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::CalcSettings;
use crate::units::Quantity;

pub use ael::AelSet;
pub use conditions::{MeasurementConditions, MeasurementGeometry};
pub use factors::{CorrectionFactors, MpeFactors};
pub use spectrum::WavelengthRegion;

/// Shortest wavelength covered by the tables (nm)
pub const MIN_WAVELENGTH_NM: f64 = 180.0;

/// Longest wavelength covered by the tables (nm)
pub const MAX_WAVELENGTH_NM: f64 = 1.0e6;

/// Longest exposure time covered by the tables (s)
pub const MAX_EXPOSURE_TIME_S: f64 = 3.0e4;

/// Aversion response time (s)
pub const AVERSION_TIME_S: f64 = 0.25;

/// Default exposure time for thermal evaluation of non-visible beams (s)
pub const THERMAL_TIME_S: f64 = 10.0;

/// Laser output, continuous or pulsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum Emission {
    /// Continuous wave
    Continuous {
        /// Output power (W)
        power_w: f64,
    },
    /// Repetitively pulsed
    Pulsed {
        /// Energy per pulse (J)
        pulse_energy_j: f64,
        /// Pulse duration (s)
        pulse_width_s: f64,
        /// Pulse repetition frequency (Hz)
        repetition_rate_hz: f64,
    },
}

impl Emission {
    /// Measured emission: power for CW, energy per pulse for pulsed output.
    pub fn measured(&self) -> Quantity {
        match *self {
            Emission::Continuous { power_w } => Quantity::watts(power_w),
            Emission::Pulsed { pulse_energy_j, .. } => Quantity::joules(pulse_energy_j),
        }
    }

    /// Mean output power (W)
    pub fn average_power_w(&self) -> f64 {
        match *self {
            Emission::Continuous { power_w } => power_w,
            Emission::Pulsed {
                pulse_energy_j,
                repetition_rate_hz,
                ..
            } => pulse_energy_j * repetition_rate_hz,
        }
    }

    /// Peak power of a single pulse (W); equals the power for CW
    pub fn peak_power_w(&self) -> f64 {
        match *self {
            Emission::Continuous { power_w } => power_w,
            Emission::Pulsed {
                pulse_energy_j,
                pulse_width_s,
                ..
            } => pulse_energy_j / pulse_width_s,
        }
    }

    pub fn is_pulsed(&self) -> bool {
        matches!(self, Emission::Pulsed { .. })
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Emission::Continuous { .. } => "CW",
            Emission::Pulsed { .. } => "Pulsed",
        }
    }

    /// Validate emission parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            Emission::Continuous { power_w } => require_positive("power_w", power_w),
            Emission::Pulsed {
                pulse_energy_j,
                pulse_width_s,
                repetition_rate_hz,
            } => {
                require_positive("pulse_energy_j", pulse_energy_j)?;
                require_positive("pulse_width_s", pulse_width_s)?;
                require_positive("repetition_rate_hz", repetition_rate_hz)?;
                if pulse_width_s * repetition_rate_hz > 1.0 {
                    return Err(CalcError::invalid_input(
                        "pulse_width_s",
                        pulse_width_s.to_string(),
                        "Pulse width exceeds the pulse period (duty cycle above 100%)",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Laser source parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserSpec {
    /// User label (e.g., "Alignment laser")
    #[serde(default)]
    pub label: String,

    /// Emission wavelength (nm), 180 to 1e6
    pub wavelength_nm: f64,

    /// Output parameters
    pub emission: Emission,

    /// Beam diameter at the exit aperture (mm)
    pub beam_diameter_mm: f64,
}

impl LaserSpec {
    /// CW laser
    pub fn continuous(wavelength_nm: f64, power_w: f64, beam_diameter_mm: f64) -> Self {
        LaserSpec {
            label: String::new(),
            wavelength_nm,
            emission: Emission::Continuous { power_w },
            beam_diameter_mm,
        }
    }

    /// Repetitively pulsed laser
    pub fn pulsed(
        wavelength_nm: f64,
        pulse_energy_j: f64,
        pulse_width_s: f64,
        repetition_rate_hz: f64,
        beam_diameter_mm: f64,
    ) -> Self {
        LaserSpec {
            label: String::new(),
            wavelength_nm,
            emission: Emission::Pulsed {
                pulse_energy_j,
                pulse_width_s,
                repetition_rate_hz,
            },
            beam_diameter_mm,
        }
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_wavelength(self.wavelength_nm)?;
        self.emission.validate()?;
        require_positive("beam_diameter_mm", self.beam_diameter_mm)
    }

    /// Spectral region of this laser
    pub fn region(&self) -> WavelengthRegion {
        WavelengthRegion::from_wavelength(self.wavelength_nm)
    }
}

/// Reject wavelengths outside the tabulated range.
pub fn validate_wavelength(wavelength_nm: f64) -> CalcResult<()> {
    if !wavelength_nm.is_finite() || !(MIN_WAVELENGTH_NM..=MAX_WAVELENGTH_NM).contains(&wavelength_nm) {
        return Err(CalcError::invalid_input(
            "wavelength_nm",
            wavelength_nm.to_string(),
            "Wavelength must be between 180 nm and 1 mm (1e6 nm)",
        ));
    }
    Ok(())
}

/// Exposure duration and source geometry for an AEL/MPE lookup.
///
/// The exposure time means different things depending on the evaluation:
/// the aversion response (0.25 s), a thermal time base (10 s), a long
/// photochemical exposure (up to 30 000 s), or a single pulse width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureContext {
    /// Exposure duration (s)
    pub exposure_time_s: f64,

    /// Apparent source angular subtense (mrad); `None` uses the settings default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_subtense_mrad: Option<f64>,
}

impl ExposureContext {
    pub fn new(exposure_time_s: f64) -> Self {
        ExposureContext {
            exposure_time_s,
            angular_subtense_mrad: None,
        }
    }

    /// Accidental viewing limited by the aversion response
    pub fn aversion() -> Self {
        ExposureContext::new(AVERSION_TIME_S)
    }

    /// Thermal evaluation time base
    pub fn thermal() -> Self {
        ExposureContext::new(THERMAL_TIME_S)
    }

    /// Long-duration photochemical exposure
    pub fn photochemical(exposure_time_s: f64) -> Self {
        ExposureContext::new(exposure_time_s)
    }

    /// One pulse of the given width
    pub fn single_pulse(pulse_width_s: f64) -> Self {
        ExposureContext::new(pulse_width_s)
    }

    /// Extended source of the given angular subtense
    pub fn with_angular_subtense(mut self, angular_subtense_mrad: f64) -> Self {
        self.angular_subtense_mrad = Some(angular_subtense_mrad);
        self
    }

    /// Angular subtense in effect, falling back to `settings`
    pub fn subtense_mrad(&self, settings: &CalcSettings) -> f64 {
        self.angular_subtense_mrad
            .unwrap_or(settings.default_angular_subtense_mrad)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("exposure_time_s", self.exposure_time_s)?;
        if self.exposure_time_s > MAX_EXPOSURE_TIME_S {
            return Err(CalcError::invalid_input(
                "exposure_time_s",
                self.exposure_time_s.to_string(),
                "Exposure time exceeds 30 000 s",
            ));
        }
        match self.angular_subtense_mrad {
            Some(alpha) => require_positive("angular_subtense_mrad", alpha),
            None => Ok(()),
        }
    }
}

impl Default for ExposureContext {
    fn default() -> Self {
        ExposureContext::aversion()
    }
}
