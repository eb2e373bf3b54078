//! # Protective Eyewear
//!
//! Optical density needed to bring the beam at the exit aperture down to the
//! MPE:
//!
//! ```text
//! OD = max(0, log10(H / MPE))
//! ```
//!
//! H is the irradiance (CW, W/cm²) or the radiant exposure per pulse (pulsed,
//! J/cm²) averaged over the beam cross-section, compared against the CW MPE
//! or the critical pulsed MPE respectively.
//!
//! Recommendations include an EN 207 style marking: the operating mode
//! (D, I, R, M), the wavelength and the LB scale number, e.g. `D 532 LB3`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CalcResult;
use crate::laser::{Emission, ExposureContext, LaserSpec};
use crate::references::EYEWEAR_MARKING;
use crate::settings::CalcSettings;
use crate::units::{aperture_area_cm2, Quantity};

use super::exposure::{self, MpeInput};

/// Highest EN 207 scale number
pub const MAX_SCALE_NUMBER: u8 = 10;

/// Input parameters for an eyewear calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyewearInput {
    #[serde(default)]
    pub label: String,

    pub laser: LaserSpec,

    /// Defaults to the 0.25 s aversion response. Only the exposure time is
    /// used; the MPE is a small-source value.
    #[serde(default)]
    pub exposure: ExposureContext,
}

impl EyewearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.laser.validate()?;
        self.exposure.validate()
    }
}

/// EN 207 operating mode letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectionMode {
    /// Continuous wave (and pulses longer than 0.25 s)
    D,
    /// Pulses from 1 µs to 0.25 s
    I,
    /// Q-switched pulses from 1 ns to 1 µs
    R,
    /// Mode-locked pulses shorter than 1 ns
    M,
}

impl ProtectionMode {
    pub fn for_emission(emission: &Emission) -> Self {
        match *emission {
            Emission::Continuous { .. } => ProtectionMode::D,
            Emission::Pulsed { pulse_width_s, .. } => {
                if pulse_width_s > 0.25 {
                    ProtectionMode::D
                } else if pulse_width_s >= 1e-6 {
                    ProtectionMode::I
                } else if pulse_width_s >= 1e-9 {
                    ProtectionMode::R
                } else {
                    ProtectionMode::M
                }
            }
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            ProtectionMode::D => "D",
            ProtectionMode::I => "I",
            ProtectionMode::R => "R",
            ProtectionMode::M => "M",
        }
    }
}

/// Eyewear marking such as `D 532 LB3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyewearMarking {
    pub mode: ProtectionMode,
    pub wavelength_nm: f64,
    /// LB scale number, 1 to 10
    pub scale_number: u8,
}

impl EyewearMarking {
    /// Marking for a required OD: LB = ⌈OD⌉, clamped to 1..=10.
    pub fn for_density(mode: ProtectionMode, wavelength_nm: f64, required_od: f64) -> Self {
        let scale = required_od.ceil().clamp(1.0, f64::from(MAX_SCALE_NUMBER)) as u8;
        EyewearMarking {
            mode,
            wavelength_nm,
            scale_number: scale,
        }
    }
}

impl fmt::Display for EyewearMarking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.0} LB{}", self.mode.letter(), self.wavelength_nm, self.scale_number)
    }
}

/// Results from an eyewear calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyewearResult {
    /// Minimum optical density (0 when no attenuation is needed)
    pub required_od: f64,

    /// Beam-averaged irradiance (W/cm²) or radiant exposure per pulse (J/cm²)
    pub exposure_level: Quantity,

    /// MPE in the same unit as `exposure_level`
    pub mpe: Quantity,

    /// `None` when no eyewear is needed
    pub marking: Option<EyewearMarking>,

    pub recommendations: Vec<String>,
}

impl EyewearResult {
    pub fn eyewear_required(&self) -> bool {
        self.required_od > 0.0
    }
}

/// Calculate the optical density required at the beam exit.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::eyewear::{calculate, EyewearInput};
/// use calc_core::laser::{ExposureContext, LaserSpec};
/// use calc_core::settings::CalcSettings;
///
/// let input = EyewearInput {
///     label: "Pointer".to_string(),
///     laser: LaserSpec::continuous(532.0, 0.005, 7.0),
///     exposure: ExposureContext::aversion(),
/// };
/// let result = calculate(&input, &CalcSettings::default()).unwrap();
/// assert!(result.required_od > 0.0 && result.required_od < 1.0);
/// ```
pub fn calculate(input: &EyewearInput, settings: &CalcSettings) -> CalcResult<EyewearResult> {
    input.validate()?;

    let laser = &input.laser;
    let mpe_result = exposure::calculate(
        &MpeInput {
            label: input.label.clone(),
            wavelength_nm: laser.wavelength_nm,
            exposure_time_s: input.exposure.exposure_time_s,
            emission: laser.emission,
        },
        settings,
    )?;
    let mpe = mpe_result.critical_mpe;

    let area_cm2 = aperture_area_cm2(laser.beam_diameter_mm);
    let exposure_level = match laser.emission {
        Emission::Continuous { power_w } => Quantity::watts_per_cm2(power_w / area_cm2),
        Emission::Pulsed { pulse_energy_j, .. } => Quantity::joules_per_cm2(pulse_energy_j / area_cm2),
    };

    let required_od = (exposure_level.value / mpe.value).log10().max(0.0);

    let mut recommendations = Vec::new();
    let marking = if required_od > 0.0 {
        let marking = EyewearMarking::for_density(
            ProtectionMode::for_emission(&laser.emission),
            laser.wavelength_nm,
            required_od,
        );
        recommendations.push(format!(
            "Minimum optical density OD {:.2} at {:.0} nm",
            required_od, laser.wavelength_nm
        ));
        recommendations.push(format!("{} marking: {} or higher", EYEWEAR_MARKING.short_form(), marking));
        if required_od > f64::from(MAX_SCALE_NUMBER) {
            recommendations.push(
                "Required OD exceeds LB10; reduce the accessible beam with engineering controls".to_string(),
            );
        }
        if laser.emission.is_pulsed() {
            recommendations.push(format!(
                "Pulsed limit set by the {} rule",
                mpe_result.limiting_mechanism.display_name().to_lowercase()
            ));
            recommendations.push(format!(
                "Filter must also withstand average power {:.3e} W and peak power {:.3e} W",
                laser.emission.average_power_w(),
                laser.emission.peak_power_w()
            ));
        }
        Some(marking)
    } else {
        recommendations.push("Exposure at the beam exit is below the MPE; no protective eyewear required".to_string());
        None
    };

    tracing::debug!(required_od, wavelength_nm = laser.wavelength_nm, "eyewear OD calculated");

    Ok(EyewearResult {
        required_od,
        exposure_level,
        mpe,
        marking,
        recommendations,
    })
}
