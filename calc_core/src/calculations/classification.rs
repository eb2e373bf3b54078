//! # Laser Product Classification
//!
//! Assigns an IEC 60825-1 hazard class by testing the accessible emission
//! against each class's AEL in turn:
//!
//! | Order | Class | Passes when                                              |
//! |-------|-------|----------------------------------------------------------|
//! | 1     | 1     | E1 ≤ AEL1 and E3 ≤ AEL1                                  |
//! | 2     | 1M    | E1 > AEL1, E1 ≤ AEL3B, E3 ≤ AEL1 (wide beams only)       |
//! | 3     | 2     | E1 ≤ AEL2 and E3 ≤ AEL2 (400-700 nm only)                |
//! | 4     | 2M    | E1 > AEL2, E1 ≤ AEL3B, E3 ≤ AEL2 (wide visible beams)    |
//! | 5     | 3R    | E1 ≤ AEL3R and E3 ≤ AEL3R                                |
//! | 6     | 3B    | E1 ≤ AEL3B and E3 ≤ AEL3B                                |
//! | 7     | 4     | always                                                   |
//!
//! E1 and E3 are the emission collected under Condition 1 and Condition 3.
//! Where Condition 1 does not apply its test passes vacuously. A blank AEL
//! table cell makes the class "not evaluable" and the search moves on.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::classification::{classify, LaserClass};
//! use calc_core::laser::{ExposureContext, LaserSpec};
//! use calc_core::settings::CalcSettings;
//!
//! let pointer = LaserSpec::continuous(532.0, 0.005, 7.0);
//! let result = classify(&pointer, &ExposureContext::aversion(), &CalcSettings::default()).unwrap();
//!
//! assert_eq!(result.laser_class, LaserClass::Class3R);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CalcResult;
use crate::laser::ael::AelClass;
use crate::laser::conditions::{requires_class_m, supports_class2};
use crate::laser::{
    AelSet, CorrectionFactors, ExposureContext, LaserSpec, MeasurementConditions, WavelengthRegion,
};
use crate::references::{iec_ref, AEL_TABLES};
use crate::settings::CalcSettings;
use crate::units::Quantity;

/// Exact trail entry written when Condition 1 is skipped.
pub const CONDITION1_NOT_APPLIED: &str = "Condition 1 test is not applied.";

/// IEC 60825-1 hazard class, least hazardous first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LaserClass {
    #[serde(rename = "Class 1")]
    Class1,
    #[serde(rename = "Class 1M")]
    Class1M,
    #[serde(rename = "Class 2")]
    Class2,
    #[serde(rename = "Class 2M")]
    Class2M,
    #[serde(rename = "Class 3R")]
    Class3R,
    #[serde(rename = "Class 3B")]
    Class3B,
    #[serde(rename = "Class 4")]
    Class4,
}

impl LaserClass {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LaserClass::Class1 => "Class 1",
            LaserClass::Class1M => "Class 1M",
            LaserClass::Class2 => "Class 2",
            LaserClass::Class2M => "Class 2M",
            LaserClass::Class3R => "Class 3R",
            LaserClass::Class3B => "Class 3B",
            LaserClass::Class4 => "Class 4",
        }
    }
}

impl fmt::Display for LaserClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Laser and exposure bundled for storage as a calculation item.
///
/// ## JSON Example
///
/// ```json
/// {
///   "laser": {
///     "label": "Green pointer",
///     "wavelength_nm": 532.0,
///     "emission": { "mode": "Continuous", "power_w": 0.005 },
///     "beam_diameter_mm": 7.0
///   },
///   "exposure": { "exposure_time_s": 0.25 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub laser: LaserSpec,

    /// Defaults to the 0.25 s aversion response
    #[serde(default)]
    pub exposure: ExposureContext,
}

/// Outcome of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub laser_class: LaserClass,

    /// The AEL the assigned class was tested against, in the unit of the
    /// measured emission. Class 4 reports the Class 3B limit it exceeded.
    pub ael: Option<Quantity>,

    /// Raw measured emission (W for CW, J per pulse for pulsed)
    pub measured_emission: Quantity,

    /// Condition 3 emission divided by `ael`
    pub ratio: Option<f64>,

    /// Condition 1 outcome of the deciding test (true when not applied)
    pub condition1_test: bool,

    /// Condition 3 outcome of the deciding test
    pub condition3_test: bool,

    /// Beam wider than the Condition 3 aperture, so 1M / 2M are possible
    pub requires_class_m: bool,

    pub region: WavelengthRegion,
    pub conditions: MeasurementConditions,
    pub correction_factors: CorrectionFactors,
    pub aels: AelSet,

    /// Ordered calculation trail
    pub steps: Vec<String>,
}

impl ClassificationResult {
    /// Margin to the tested AEL; `None` when no AEL was available.
    pub fn margin(&self) -> Option<f64> {
        self.ratio.map(|r| 1.0 - r)
    }
}

/// Per-condition outcome of one class test.
#[derive(Debug, Clone, Copy)]
struct Check {
    condition1: bool,
    condition3: bool,
}

impl Check {
    fn passes(&self) -> bool {
        self.condition1 && self.condition3
    }
}

/// Everything a class test needs; accumulates the trail.
struct Classifier<'a> {
    laser: &'a LaserSpec,
    exposure_time_s: f64,
    conditions: MeasurementConditions,
    aels: AelSet,
    measured: Quantity,
    e1: f64,
    e3: f64,
    /// Class 3B limit once looked up
    class3b: Option<Option<Quantity>>,
    steps: Vec<String>,
}

impl Classifier<'_> {
    /// Class 3B limit, looked up (and written to the trail) on first use.
    fn class3b_limit(&mut self) -> Option<Quantity> {
        if let Some(cached) = self.class3b {
            return cached;
        }
        let limit = self.limit(AelClass::Class3B);
        self.class3b = Some(limit);
        limit
    }

    /// AEL for `class` in the measured unit, or `None` (logged) if blank.
    fn limit(&mut self, class: AelClass) -> Option<Quantity> {
        let wavelength_nm = self.laser.wavelength_nm;
        match self.aels.require(class, wavelength_nm, self.exposure_time_s) {
            Ok(ael) => {
                let limit = ael.to_total(
                    self.measured.unit,
                    self.exposure_time_s,
                    self.conditions.condition3.aperture_mm,
                );
                self.steps.push(format!("{} AEL ({}): {}", class, table_for(class), limit));
                Some(limit)
            }
            Err(err) => {
                tracing::warn!(
                    class = class.display_name(),
                    wavelength_nm,
                    exposure_time_s = self.exposure_time_s,
                    error = %err,
                    "AEL undefined, class not evaluable"
                );
                self.steps.push(format!(
                    "{} not evaluable: AEL undefined at {} nm, {} s",
                    class, wavelength_nm, self.exposure_time_s
                ));
                None
            }
        }
    }

    /// E1 ≤ limit (or not applied) and E3 ≤ limit.
    fn check(&mut self, name: &str, limit: Quantity) -> Check {
        let condition1 = if self.conditions.is_condition1_applicable {
            let pass = self.e1 <= limit.value;
            self.steps.push(format!(
                "{} Condition 1: {} {} {}",
                name,
                Quantity::new(self.e1, self.measured.unit),
                if pass { "≤" } else { ">" },
                limit
            ));
            pass
        } else {
            self.steps.push(CONDITION1_NOT_APPLIED.to_string());
            true
        };

        let condition3 = self.e3 <= limit.value;
        self.steps.push(format!(
            "{} Condition 3: {} {} {}",
            name,
            Quantity::new(self.e3, self.measured.unit),
            if condition3 { "≤" } else { ">" },
            limit
        ));

        let check = Check {
            condition1,
            condition3,
        };
        self.steps.push(format!(
            "{}: {}",
            name,
            if check.passes() { "satisfied" } else { "not satisfied" }
        ));
        check
    }

    /// Magnifier class test: only the optically aided condition exceeds the
    /// lower limit, and it stays within the Class 3B limit.
    fn check_magnified(&mut self, name: &str, lower: Quantity, class3b: Quantity) -> Check {
        let condition1 = self.e1 > lower.value && self.e1 <= class3b.value;
        let condition3 = self.e3 <= lower.value;
        let check = Check {
            condition1,
            condition3,
        };
        self.steps.push(format!(
            "{}: E1 {} within ({}, {}], E3 {} ≤ {}: {}",
            name,
            Quantity::new(self.e1, self.measured.unit),
            lower,
            class3b,
            Quantity::new(self.e3, self.measured.unit),
            lower,
            if check.passes() { "satisfied" } else { "not satisfied" }
        ));
        check
    }

    fn finish(
        self,
        laser_class: LaserClass,
        ael: Option<Quantity>,
        check: Option<Check>,
        factors: CorrectionFactors,
    ) -> ClassificationResult {
        let mut steps = self.steps;
        steps.push(format!("Result: {}", laser_class));

        let ratio = ael.filter(|a| a.value > 0.0).map(|a| self.e3 / a.value);
        let (condition1_test, condition3_test) = check
            .map(|c| (c.condition1, c.condition3))
            .unwrap_or((false, false));

        ClassificationResult {
            laser_class,
            ael,
            measured_emission: self.measured,
            ratio,
            condition1_test,
            condition3_test,
            requires_class_m: requires_class_m(self.laser.wavelength_nm, self.laser.beam_diameter_mm),
            region: self.laser.region(),
            conditions: self.conditions,
            correction_factors: factors,
            aels: self.aels,
            steps,
        }
    }
}

fn table_for(class: AelClass) -> &'static str {
    match class {
        AelClass::Class1 => iec_ref::CLASS_1_AEL,
        AelClass::Class2 => iec_ref::CLASS_2_AEL,
        AelClass::Class3R => iec_ref::CLASS_3R_AEL,
        AelClass::Class3B => iec_ref::CLASS_3B_AEL,
    }
}

/// Classify a laser product.
///
/// Tests run in strict order (1, 1M, 2, 2M, 3R, 3B) and the first satisfied
/// class is returned; Class 4 is the fallback. Identical inputs always give
/// identical results, including the trail.
///
/// # Errors
///
/// Returns `CalcError::InvalidInput` for wavelengths outside 180 nm - 1 mm,
/// non-positive emission, beam diameter or exposure time, or exposure times
/// beyond 30 000 s. A blank AEL never produces an error.
pub fn classify(
    laser: &LaserSpec,
    exposure: &ExposureContext,
    settings: &CalcSettings,
) -> CalcResult<ClassificationResult> {
    laser.validate()?;
    exposure.validate()?;
    settings.validate()?;

    let l = laser.wavelength_nm;
    let t = exposure.exposure_time_s;
    let alpha = exposure.subtense_mrad(settings);

    let factors = CorrectionFactors::compute(l, t, alpha, settings.factor_defaults);
    let conditions = MeasurementConditions::resolve(l, t);
    let aels = AelSet::compute(l, t, &factors, &conditions);

    let measured = laser.emission.measured();
    let model = settings.emission_model;
    let e1 = measured.value * model.coupling(conditions.condition1.aperture_mm, laser.beam_diameter_mm);
    let e3 = measured.value * model.coupling(conditions.condition3.aperture_mm, laser.beam_diameter_mm);

    let mut steps = vec![
        format!(
            "Wavelength {} nm ({}), exposure time {} s; limits per {}",
            l,
            laser.region(),
            t,
            AEL_TABLES.citation()
        ),
        format!(
            "Correction factors ({}): C1 = {:.4}, C2 = {:.4}, C3 = {:.4}, C4 = {:.4}, C6 = {:.4}, C7 = {:.4}, T1 = {:.3e} s, T2 = {:.3} s",
            iec_ref::CORRECTION_FACTORS,
            factors.c1,
            factors.c2,
            factors.c3,
            factors.c4,
            factors.c6,
            factors.c7,
            factors.t1,
            factors.t2
        ),
    ];
    if conditions.is_condition1_applicable {
        steps.push(format!(
            "Condition 1: {} mm aperture at {} mm; Condition 3: {} mm aperture at {} mm ({})",
            conditions.condition1.aperture_mm,
            conditions.condition1.distance_mm,
            conditions.condition3.aperture_mm,
            conditions.condition3.distance_mm,
            iec_ref::MEASUREMENT_CONDITIONS
        ));
    } else {
        steps.push(format!(
            "Condition 3: {} mm aperture at {} mm; Condition 1 does not apply ({})",
            conditions.condition3.aperture_mm,
            conditions.condition3.distance_mm,
            iec_ref::MEASUREMENT_CONDITIONS
        ));
    }
    steps.push(format!("Measured emission ({}): {}", laser.emission.display_name(), measured));

    let mut c = Classifier {
        laser,
        exposure_time_s: t,
        conditions,
        aels,
        measured,
        e1,
        e3,
        class3b: None,
        steps,
    };

    let class_m = requires_class_m(l, laser.beam_diameter_mm) && conditions.is_condition1_applicable;

    // Class 1 / 1M
    if let Some(ael1) = c.limit(AelClass::Class1) {
        let check = c.check("Class 1", ael1);
        if check.passes() {
            return Ok(done(c, LaserClass::Class1, Some(ael1), Some(check), factors));
        }
        if class_m {
            if let Some(ael3b) = c.class3b_limit() {
                let check = c.check_magnified("Class 1M", ael1, ael3b);
                if check.passes() {
                    return Ok(done(c, LaserClass::Class1M, Some(ael1), Some(check), factors));
                }
            }
        }
    }

    // Class 2 / 2M
    if supports_class2(l) {
        if let Some(ael2) = c.limit(AelClass::Class2) {
            let check = c.check("Class 2", ael2);
            if check.passes() {
                return Ok(done(c, LaserClass::Class2, Some(ael2), Some(check), factors));
            }
            if class_m {
                if let Some(ael3b) = c.class3b_limit() {
                    let check = c.check_magnified("Class 2M", ael2, ael3b);
                    if check.passes() {
                        return Ok(done(c, LaserClass::Class2M, Some(ael2), Some(check), factors));
                    }
                }
            }
        }
    }

    // Class 3R
    if let Some(ael3r) = c.limit(AelClass::Class3R) {
        let check = c.check("Class 3R", ael3r);
        if check.passes() {
            return Ok(done(c, LaserClass::Class3R, Some(ael3r), Some(check), factors));
        }
    }

    // Class 3B
    let mut last_check = None;
    let class3b = c.class3b_limit();
    if let Some(ael3b) = class3b {
        let check = c.check("Class 3B", ael3b);
        if check.passes() {
            return Ok(done(c, LaserClass::Class3B, Some(ael3b), Some(check), factors));
        }
        last_check = Some(check);
    }

    Ok(done(c, LaserClass::Class4, class3b, last_check, factors))
}

fn done(
    c: Classifier<'_>,
    laser_class: LaserClass,
    ael: Option<Quantity>,
    check: Option<Check>,
    factors: CorrectionFactors,
) -> ClassificationResult {
    tracing::debug!(
        wavelength_nm = c.laser.wavelength_nm,
        exposure_time_s = c.exposure_time_s,
        class = laser_class.display_name(),
        "laser classified"
    );
    c.finish(laser_class, ael, check, factors)
}

/// Classify a stored [`ClassificationInput`].
pub fn calculate(input: &ClassificationInput, settings: &CalcSettings) -> CalcResult<ClassificationResult> {
    classify(&input.laser, &input.exposure, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{EmissionModel, FactorDefaults};
    use proptest::prelude::*;

    fn defaults() -> CalcSettings {
        CalcSettings::default()
    }

    #[test]
    fn test_green_pointer_is_class_3r() {
        let laser = LaserSpec::continuous(532.0, 0.005, 7.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();

        assert_eq!(result.laser_class, LaserClass::Class3R);
        assert!(result.condition1_test);
        assert!(result.condition3_test);
        assert!(!result.requires_class_m);
        assert!((result.ratio.unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(result.steps.last().unwrap(), "Result: Class 3R");
    }

    #[test]
    fn test_class_serializes_as_display_name() {
        let json = serde_json::to_string(&LaserClass::Class3R).unwrap();
        assert_eq!(json, "\"Class 3R\"");
    }

    #[test]
    fn test_low_power_visible_is_class_1() {
        // Class 1 AEL at 532 nm / 0.25 s is about 0.99 mW
        let laser = LaserSpec::continuous(532.0, 0.0005, 2.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();
        assert_eq!(result.laser_class, LaserClass::Class1);
    }

    #[test]
    fn test_visible_between_class1_and_class2() {
        let laser = LaserSpec::continuous(532.0, 0.000_995, 2.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();
        assert_eq!(result.laser_class, LaserClass::Class2);
    }

    #[test]
    fn test_uv_condition1_not_applied() {
        // Class 1 AEL at 250 nm: 24 µJ over 0.25 s = 96 µW
        let laser = LaserSpec::continuous(250.0, 1e-5, 1.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();

        assert_eq!(result.laser_class, LaserClass::Class1);
        assert!(result.condition1_test);
        assert!(result.steps.iter().any(|s| s == CONDITION1_NOT_APPLIED));
    }

    #[test]
    fn test_high_power_is_class_4() {
        let laser = LaserSpec::continuous(532.0, 2.0, 2.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();

        assert_eq!(result.laser_class, LaserClass::Class4);
        assert_eq!(result.ael, Some(Quantity::watts(0.5)));
        assert!(!result.condition3_test);
    }

    #[test]
    fn test_class_3b() {
        let laser = LaserSpec::continuous(808.0, 0.2, 3.0);
        let result = classify(&laser, &ExposureContext::thermal(), &defaults()).unwrap();
        assert_eq!(result.laser_class, LaserClass::Class3B);
    }

    #[test]
    fn test_wide_beam_class_1m() {
        // 50 mW at 1064 nm spread over 60 mm: Condition 3 collects about 2.7%
        let settings = CalcSettings {
            emission_model: EmissionModel::GaussianAperture,
            ..CalcSettings::default()
        };
        let laser = LaserSpec::continuous(1064.0, 0.05, 60.0);
        let result = classify(&laser, &ExposureContext::thermal(), &settings).unwrap();

        assert!(result.requires_class_m);
        assert_eq!(result.laser_class, LaserClass::Class1M);
        assert!(!result.condition1_test);
        assert!(result.condition3_test);
    }

    #[test]
    fn test_wide_visible_beam_class_2m() {
        // 37 mW at 532 nm over 60 mm: E3 = 0.994 mW, above AEL1 (0.990 mW)
        // but within the 1 mW Class 2 limit; E1 = 27.8 mW
        let settings = CalcSettings {
            emission_model: EmissionModel::GaussianAperture,
            ..CalcSettings::default()
        };
        let laser = LaserSpec::continuous(532.0, 0.037, 60.0);
        let result = classify(&laser, &ExposureContext::aversion(), &settings).unwrap();

        assert!(result.requires_class_m);
        assert_eq!(result.laser_class, LaserClass::Class2M);
        assert_eq!(result.ael, Some(Quantity::watts(1e-3)));
        assert!(result.condition1_test);
        assert!(result.condition3_test);
        assert!(result.steps.iter().any(|s| s.starts_with("Class 1M:") && s.ends_with("not satisfied")));
        assert_eq!(result.steps.last().unwrap(), "Result: Class 2M");
    }

    #[test]
    fn test_trail_follows_class_order() {
        let laser = LaserSpec::continuous(532.0, 0.0005, 2.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();
        assert_eq!(result.laser_class, LaserClass::Class1);
        assert!(!result.steps.iter().any(|s| s.contains("Class 3B")));

        let laser = LaserSpec::continuous(532.0, 2.0, 2.0);
        let result = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();
        let position = |prefix: &str| result.steps.iter().position(|s| s.starts_with(prefix)).unwrap();
        assert!(position("Class 1 AEL") < position("Class 2 AEL"));
        assert!(position("Class 2 AEL") < position("Class 3R AEL"));
        assert!(position("Class 3R AEL") < position("Class 3B AEL"));
        assert_eq!(result.steps.iter().filter(|s| s.starts_with("Class 3B AEL")).count(), 1);
    }

    #[test]
    fn test_raw_model_never_yields_magnifier_classes() {
        let laser = LaserSpec::continuous(1064.0, 0.05, 60.0);
        let result = classify(&laser, &ExposureContext::thermal(), &defaults()).unwrap();
        assert!(result.requires_class_m);
        assert_ne!(result.laser_class, LaserClass::Class1M);
    }

    #[test]
    fn test_undefined_ael_is_not_evaluable() {
        // Retinal Class 1 limits start at 1e-13 s
        let laser = LaserSpec::continuous(532.0, 1e-9, 2.0);
        let result = classify(&laser, &ExposureContext::new(1e-14), &defaults()).unwrap();

        assert!(result.aels.class1.is_none());
        assert!(result.steps.iter().any(|s| s.starts_with("Class 1 not evaluable")));
        assert_ne!(result.laser_class, LaserClass::Class1);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let settings = defaults();
        let exposure = ExposureContext::aversion();
        assert!(classify(&LaserSpec::continuous(-532.0, 0.005, 7.0), &exposure, &settings).is_err());
        assert!(classify(&LaserSpec::continuous(532.0, 0.0, 7.0), &exposure, &settings).is_err());
        assert!(classify(&LaserSpec::continuous(532.0, 0.005, 0.0), &exposure, &settings).is_err());
        assert!(classify(&LaserSpec::continuous(532.0, 0.005, 7.0), &ExposureContext::new(0.0), &settings).is_err());
    }

    #[test]
    fn test_corrected_defaults_change_factors_only_out_of_band() {
        let settings = CalcSettings {
            factor_defaults: FactorDefaults::Corrected,
            ..CalcSettings::default()
        };
        let laser = LaserSpec::continuous(532.0, 0.005, 7.0);
        let literal = classify(&laser, &ExposureContext::aversion(), &defaults()).unwrap();
        let corrected = classify(&laser, &ExposureContext::aversion(), &settings).unwrap();

        assert_eq!(literal.correction_factors.c2, 30.0);
        assert_eq!(corrected.correction_factors.c2, 1.0);
        assert_eq!(literal.laser_class, corrected.laser_class);
    }

    #[test]
    fn test_pulsed_classification_uses_energy() {
        let laser = LaserSpec::pulsed(1064.0, 0.1, 10e-9, 1000.0, 5.0);
        let result = classify(&laser, &ExposureContext::single_pulse(10e-9), &defaults()).unwrap();

        assert_eq!(result.measured_emission, Quantity::joules(0.1));
        // 100 mJ is under the 150 mJ Class 3B pulse limit
        assert_eq!(result.laser_class, LaserClass::Class3B);
    }

    fn arb_laser() -> impl Strategy<Value = (LaserSpec, ExposureContext)> {
        (180.0f64..1.0e6, -9.0f64..4.4, -6.0f64..2.0, 0.5f64..20.0).prop_map(|(l, log_t, log_p, d)| {
            (
                LaserSpec::continuous(l, 10f64.powf(log_p), d),
                ExposureContext::new(10f64.powf(log_t)),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_classification_is_total((laser, exposure) in arb_laser()) {
            let result = classify(&laser, &exposure, &CalcSettings::default());
            prop_assert!(result.is_ok());
        }

        #[test]
        fn prop_classification_is_deterministic((laser, exposure) in arb_laser()) {
            let settings = CalcSettings::default();
            let first = classify(&laser, &exposure, &settings).unwrap();
            let second = classify(&laser, &exposure, &settings).unwrap();
            prop_assert_eq!(first.laser_class, second.laser_class);
            prop_assert_eq!(first.steps, second.steps);
        }
    }
}
