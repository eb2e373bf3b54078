//! # Ocular MPE Evaluation
//!
//! Maximum permissible exposure for a CW or repetitively pulsed beam.
//!
//! For CW output the critical MPE is the single-exposure irradiance limit at
//! the exposure time. Pulsed output is checked against three rules, all
//! expressed as radiant exposure per pulse (J/cm²):
//!
//! 1. **Single pulse** - MPE at the pulse width
//! 2. **Average power** - CW irradiance limit at the exposure time, divided by
//!    the repetition rate
//! 3. **Repetitive pulse** - single-pulse MPE × C_P, with C_P = N^-0.25 for the
//!    N pulses inside the thermal time base Ti (applied only when N > 1)
//!
//! Limits are small-source (point-source) values: the angular subtense of
//! the source does not enter the MPE, only T1 and C2 from the correction
//! factors do.
//!
//! The smallest of the three governs. Equal limits resolve to the
//! repetitive-pulse rule first, then single pulse, then average power, so a
//! train with N ≤ 1 (where Rule 3 reduces to Rule 1) reports Rule 3.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::exposure::{calculate, LimitingMechanism, MpeInput};
//! use calc_core::laser::Emission;
//! use calc_core::settings::CalcSettings;
//!
//! let input = MpeInput {
//!     label: "Nd:YAG".to_string(),
//!     wavelength_nm: 1064.0,
//!     exposure_time_s: 10.0,
//!     emission: Emission::Pulsed {
//!         pulse_energy_j: 0.1,
//!         pulse_width_s: 10e-9,
//!         repetition_rate_hz: 1000.0,
//!     },
//! };
//!
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//! assert_eq!(result.limiting_mechanism, LimitingMechanism::RepetitivePulse);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::laser::factors::mpe_correction_factors;
use crate::laser::mpe::{mpe, MpeMode};
use crate::laser::spectrum::time_base;
use crate::laser::{validate_wavelength, CorrectionFactors, Emission, MpeFactors, MAX_EXPOSURE_TIME_S};
use crate::references::{iec_ref, OCULAR_MPE};
use crate::settings::{CalcSettings, ALPHA_MIN_MRAD};
use crate::units::Quantity;

/// Relative difference below which two rule limits count as equal
const TIE_TOLERANCE: f64 = 1e-9;

/// Input parameters for an MPE evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Alignment beam",
///   "wavelength_nm": 632.8,
///   "exposure_time_s": 0.25,
///   "emission": { "mode": "Continuous", "power_w": 0.001 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpeInput {
    /// User label
    #[serde(default)]
    pub label: String,

    /// Emission wavelength (nm)
    pub wavelength_nm: f64,

    /// Total exposure duration (s)
    pub exposure_time_s: f64,

    /// CW power or pulse train parameters
    pub emission: Emission,
}

impl MpeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_wavelength(self.wavelength_nm)?;
        require_positive("exposure_time_s", self.exposure_time_s)?;
        if self.exposure_time_s > MAX_EXPOSURE_TIME_S {
            return Err(CalcError::invalid_input(
                "exposure_time_s",
                self.exposure_time_s.to_string(),
                "Exposure time exceeds 30 000 s",
            ));
        }
        self.emission.validate()
    }
}

/// Which rule sets the critical MPE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitingMechanism {
    /// CW exposure, single limit
    ContinuousWave,
    /// Rule 1
    SinglePulse,
    /// Rule 3
    RepetitivePulse,
    /// Rule 2
    AveragePower,
}

impl LimitingMechanism {
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitingMechanism::ContinuousWave => "Continuous wave",
            LimitingMechanism::SinglePulse => "Single pulse",
            LimitingMechanism::RepetitivePulse => "Repetitive pulse (thermal)",
            LimitingMechanism::AveragePower => "Average power",
        }
    }
}

/// Results of an MPE evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpeResult {
    /// Rule 1 limit per pulse (J/cm²); `None` for CW
    pub mpe_single_pulse: Option<Quantity>,

    /// CW irradiance limit at the exposure time (W/cm²)
    pub mpe_average: Quantity,

    /// Rule 3 limit per pulse (J/cm²); `None` for CW
    pub mpe_thermal: Option<Quantity>,

    /// Governing limit: W/cm² for CW, J/cm² per pulse for pulsed output
    pub critical_mpe: Quantity,

    pub limiting_mechanism: LimitingMechanism,

    /// N, pulses inside the time base Ti
    pub pulses_in_time_base: u64,

    /// C_P applied to the single-pulse limit
    pub pulse_count_factor: f64,

    pub correction_factors: MpeFactors,

    /// Calculation trail
    pub steps: Vec<String>,
}

/// Evaluate the ocular MPE.
///
/// # Returns
///
/// * `Ok(MpeResult)` - Limits for every applicable rule and the governing one
/// * `Err(CalcError)` - If the wavelength, time or emission is invalid
pub fn calculate(input: &MpeInput, settings: &CalcSettings) -> CalcResult<MpeResult> {
    input.validate()?;

    let l = input.wavelength_nm;
    let t = input.exposure_time_s;
    let k = mpe_correction_factors(l);
    let factors = CorrectionFactors::compute(l, t, ALPHA_MIN_MRAD, settings.factor_defaults);

    let mut steps = vec![format!(
        "{} MPE at {} nm, exposure {} s ({})",
        input.emission.display_name(),
        l,
        t,
        OCULAR_MPE.citation()
    )];
    steps.push(format!("CA = {:.4}, CB = {:.4}, CC = {:.4}", k.ca, k.cb, k.cc));

    let mpe_average = mpe(l, t, MpeMode::Continuous, &k, &factors);
    steps.push(format!("CW irradiance limit at {} s: {}", t, mpe_average));

    let result = match input.emission {
        Emission::Continuous { .. } => {
            steps.push(format!("Critical MPE: {}", mpe_average));
            MpeResult {
                mpe_single_pulse: None,
                mpe_average,
                mpe_thermal: None,
                critical_mpe: mpe_average,
                limiting_mechanism: LimitingMechanism::ContinuousWave,
                pulses_in_time_base: 0,
                pulse_count_factor: 1.0,
                correction_factors: k,
                steps,
            }
        }
        Emission::Pulsed {
            pulse_width_s,
            repetition_rate_hz,
            ..
        } => {
            let single = mpe(l, pulse_width_s, MpeMode::Pulsed, &k, &factors);
            steps.push(format!("Rule 1, single pulse at {} s: {}", pulse_width_s, single));

            let per_pulse_average = Quantity::joules_per_cm2(mpe_average.value / repetition_rate_hz);
            steps.push(format!(
                "Rule 2, average power: {} / {} Hz = {}",
                mpe_average, repetition_rate_hz, per_pulse_average
            ));

            let ti = time_base(l);
            let n = (ti * repetition_rate_hz).floor() as u64;
            let c_p = pulse_count_factor(n);
            let thermal = single * c_p;
            if n > 1 {
                steps.push(format!(
                    "Rule 3 ({}), Ti = {} s ({}): N = {}, C_P = N^-0.25 = {:.4}, limit {}",
                    iec_ref::REPETITIVE_PULSES,
                    ti,
                    iec_ref::TIME_BASE,
                    n,
                    c_p,
                    thermal
                ));
            } else {
                steps.push(format!(
                    "Rule 3 ({}), Ti = {} s ({}): N = {}, C_P not applied, limit {}",
                    iec_ref::REPETITIVE_PULSES,
                    ti,
                    iec_ref::TIME_BASE,
                    n,
                    thermal
                ));
            }

            let (limiting_mechanism, critical_mpe) = most_restrictive(&[
                (LimitingMechanism::RepetitivePulse, thermal),
                (LimitingMechanism::SinglePulse, single),
                (LimitingMechanism::AveragePower, per_pulse_average),
            ]);
            steps.push(format!(
                "Critical MPE: {} ({} governs)",
                critical_mpe,
                limiting_mechanism.display_name()
            ));

            MpeResult {
                mpe_single_pulse: Some(single),
                mpe_average,
                mpe_thermal: Some(thermal),
                critical_mpe,
                limiting_mechanism,
                pulses_in_time_base: n,
                pulse_count_factor: c_p,
                correction_factors: k,
                steps,
            }
        }
    };

    tracing::debug!(
        wavelength_nm = l,
        exposure_time_s = t,
        critical_mpe = result.critical_mpe.value,
        mechanism = result.limiting_mechanism.display_name(),
        "MPE evaluated"
    );

    Ok(result)
}

/// C_P = N^-0.25 for N > 1, otherwise 1.
pub fn pulse_count_factor(pulses: u64) -> f64 {
    if pulses > 1 {
        (pulses as f64).powf(-0.25)
    } else {
        1.0
    }
}

/// Smallest limit; a later candidate must be lower by more than
/// [`TIE_TOLERANCE`] to displace an earlier one.
fn most_restrictive(candidates: &[(LimitingMechanism, Quantity); 3]) -> (LimitingMechanism, Quantity) {
    let mut best = candidates[0];
    for &(mechanism, limit) in &candidates[1..] {
        if limit.value < best.1.value * (1.0 - TIE_TOLERANCE) {
            best = (mechanism, limit);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::RadiometricUnit;

    fn nd_yag() -> MpeInput {
        MpeInput {
            label: "Nd:YAG".to_string(),
            wavelength_nm: 1064.0,
            exposure_time_s: 10.0,
            emission: Emission::Pulsed {
                pulse_energy_j: 0.1,
                pulse_width_s: 10e-9,
                repetition_rate_hz: 1000.0,
            },
        }
    }

    #[test]
    fn test_cw_mpe() {
        let input = MpeInput {
            label: String::new(),
            wavelength_nm: 532.0,
            exposure_time_s: 0.25,
            emission: Emission::Continuous { power_w: 0.005 },
        };
        let result = calculate(&input, &CalcSettings::default()).unwrap();

        assert_eq!(result.limiting_mechanism, LimitingMechanism::ContinuousWave);
        assert_eq!(result.critical_mpe.unit, RadiometricUnit::WattsPerCm2);
        // 1.8 × 0.25^0.75 mJ/cm² over 0.25 s
        assert!((result.critical_mpe.value - 2.546e-3).abs() < 1e-5);
        assert!(result.mpe_single_pulse.is_none());
        assert!(result.mpe_thermal.is_none());
    }

    #[test]
    fn test_nd_yag_pulse_train() {
        let result = calculate(&nd_yag(), &CalcSettings::default()).unwrap();

        // N = floor(13 µs × 1 kHz) = 0, C_P not applied
        assert_eq!(result.pulses_in_time_base, 0);
        assert_eq!(result.pulse_count_factor, 1.0);
        assert_eq!(result.mpe_thermal, result.mpe_single_pulse);

        let single = result.mpe_single_pulse.unwrap();
        assert!((single.value - 5e-6).abs() < 1e-15);

        // 5 mW/cm² / 1000 Hz = 5 µJ/cm² per pulse, level with Rules 1 and 3
        let per_pulse_average = result.mpe_average.value / 1000.0;
        assert!((per_pulse_average - 5e-6).abs() < 1e-15);
        assert_eq!(result.limiting_mechanism, LimitingMechanism::RepetitivePulse);
        assert_eq!(result.critical_mpe.unit, RadiometricUnit::JoulesPerCm2);
        assert!((result.critical_mpe.value - 5e-6).abs() < 1e-15);
        assert!(result
            .steps
            .iter()
            .any(|s| s.starts_with("Rule 3 (IEC 60825-1 4.3 f))") && s.contains("C_P not applied")));
    }

    #[test]
    fn test_repetitive_pulse_rule() {
        // 532 nm at 10.5 MHz: N = floor(5 µs × 1.05e7) = 52
        let input = MpeInput {
            label: String::new(),
            wavelength_nm: 532.0,
            exposure_time_s: 0.25,
            emission: Emission::Pulsed {
                pulse_energy_j: 1e-9,
                pulse_width_s: 1e-9,
                repetition_rate_hz: 1.05e7,
            },
        };
        let result = calculate(&input, &CalcSettings::default()).unwrap();

        assert_eq!(result.pulses_in_time_base, 52);
        assert!((result.pulse_count_factor - 52f64.powf(-0.25)).abs() < 1e-12);
        let thermal = result.mpe_thermal.unwrap();
        let single = result.mpe_single_pulse.unwrap();
        assert!(thermal.value < single.value);
    }

    #[test]
    fn test_critical_is_minimum_of_rules() {
        let result = calculate(&nd_yag(), &CalcSettings::default()).unwrap();
        let single = result.mpe_single_pulse.unwrap().value;
        let thermal = result.mpe_thermal.unwrap().value;
        let average = result.mpe_average.value / 1000.0;
        let expected = single.min(thermal).min(average);
        assert!((result.critical_mpe.value - expected).abs() < 1e-18);
    }

    #[test]
    fn test_tie_goes_to_repetitive_pulse() {
        let q = Quantity::joules_per_cm2(1e-6);
        let (mechanism, _) = most_restrictive(&[
            (LimitingMechanism::RepetitivePulse, q),
            (LimitingMechanism::SinglePulse, q),
            (LimitingMechanism::AveragePower, q * (1.0 - 1e-12)),
        ]);
        assert_eq!(mechanism, LimitingMechanism::RepetitivePulse);
    }

    #[test]
    fn test_lower_average_power_governs() {
        let q = Quantity::joules_per_cm2(1e-6);
        let (mechanism, limit) = most_restrictive(&[
            (LimitingMechanism::RepetitivePulse, q),
            (LimitingMechanism::SinglePulse, q),
            (LimitingMechanism::AveragePower, q * 0.5),
        ]);
        assert_eq!(mechanism, LimitingMechanism::AveragePower);
        assert!((limit.value - 5e-7).abs() < 1e-18);
    }

    #[test]
    fn test_slow_train_average_power_governs() {
        // 1064 nm, 1 µJ at 100 kHz for 10 s: N = 1, avg 5e-8 J/cm² per pulse
        let mut input = nd_yag();
        input.emission = Emission::Pulsed {
            pulse_energy_j: 1e-6,
            pulse_width_s: 10e-9,
            repetition_rate_hz: 1e5,
        };
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        assert_eq!(result.pulses_in_time_base, 1);
        assert_eq!(result.limiting_mechanism, LimitingMechanism::AveragePower);
        assert!((result.critical_mpe.value - 5e-8).abs() < 1e-15);
    }

    #[test]
    fn test_pulse_count_factor() {
        assert_eq!(pulse_count_factor(0), 1.0);
        assert_eq!(pulse_count_factor(1), 1.0);
        assert!((pulse_count_factor(16) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = nd_yag();
        input.exposure_time_s = 0.0;
        assert!(calculate(&input, &CalcSettings::default()).is_err());

        let mut input = nd_yag();
        input.wavelength_nm = -1.0;
        let err = calculate(&input, &CalcSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_input_json_roundtrip() {
        let json = serde_json::to_string(&nd_yag()).unwrap();
        let back: MpeInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nd_yag());
    }
}
