//! # Accessible Emission Limits
//!
//! AEL tables for Class 1, 2, 3R and 3B. Each table is split into wavelength
//! bands and, inside a band, into exposure-time sub-bands of the form
//! `k × t^p × factor`. The unit of the result depends on the branch that
//! fires (J for short exposures, W for long ones, J/m² or W/m² beyond
//! 4000 nm), so every branch returns a tagged [`Quantity`].
//!
//! A `None` result means the table has a blank cell for this combination:
//! the limit is undefined, not zero.
//!
//! ## Class 1 bands (point source, C6 = 1)
//!
//! | Band (nm)     | Sub-bands                                                  |
//! |---------------|------------------------------------------------------------|
//! | 180 - 302.5   | 1e-9 - 3e4 s: 2.4e-5 J                                     |
//! | 302.5 - 315   | t < T1: 7.9e-7 C1 J; T1 - 3e4 s: 7.9e-7 C2 J               |
//! | 315 - 400     | 7.9e-7 C1 J; 7.9e-3 J; 7.9e-6 W                            |
//! | 400 - 700     | 3.8e-8 J; 7.7e-8 J; 7e-4 t^0.75 J; 3.9e-4 W (+ C3 photochemical below 500 nm) |
//! | 700 - 1050    | as visible × C4                                            |
//! | 1050 - 1400   | 3.8e-8 C7 J; 7.7e-7 C7 J; 3.5e-3 t^0.75 C7 J; 2e-3 C7 W    |
//! | 1400 - 4000   | 8e-4 J / 8e-3 J / 8e-5 J; 4.4e-3 t^0.25 J; 1.8e-2 t^0.75 J; 1e-2 W |
//! | 4000 - 1e6    | 100 J/m²; 5600 t^0.25 J/m²; 1000 W/m²                      |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::conditions::{supports_class2, MeasurementConditions};
use super::factors::CorrectionFactors;
use crate::errors::{CalcError, CalcResult};
use crate::units::Quantity;

/// Shortest tabulated exposure for retinal bands (s)
const T_MIN_RETINAL: f64 = 1e-13;

/// Shortest tabulated exposure for UV and IR bands (s)
const T_MIN: f64 = 1e-9;

/// Longest tabulated exposure (s)
const T_MAX: f64 = 3e4;

/// Aversion response time separating the pulsed and CW Class 3B limits (s)
const T_AVERSION: f64 = 0.25;

/// The classes that have an AEL table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AelClass {
    Class1,
    Class2,
    Class3R,
    Class3B,
}

impl AelClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            AelClass::Class1 => "Class 1",
            AelClass::Class2 => "Class 2",
            AelClass::Class3R => "Class 3R",
            AelClass::Class3B => "Class 3B",
        }
    }
}

impl fmt::Display for AelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn span(t: f64, start: f64, end: f64) -> bool {
    t >= start && t < end
}

fn through(t: f64, start: f64, end: f64) -> bool {
    t >= start && t <= end
}

/// Pick the smaller of two limits by power-equivalent at `t`.
fn more_restrictive(a: Quantity, b: Quantity, t: f64) -> Quantity {
    // Both limits are unnormalised here, so the aperture does not matter
    if b.to_power_w(t, 1.0) < a.to_power_w(t, 1.0) {
        b
    } else {
        a
    }
}

/// Class 1 AEL.
pub fn class1_ael(wavelength_nm: f64, t: f64, f: &CorrectionFactors) -> Option<Quantity> {
    let l = wavelength_nm;

    if l < 302.5 {
        return through(t, T_MIN, T_MAX).then(|| Quantity::joules(2.4e-5));
    }

    if l < 315.0 {
        if !through(t, T_MIN, T_MAX) {
            return None;
        }
        return Some(if t < f.t1 {
            Quantity::joules(7.9e-7 * f.c1)
        } else {
            Quantity::joules(7.9e-7 * f.c2)
        });
    }

    if l < 400.0 {
        return if span(t, T_MIN, 10.0) {
            Some(Quantity::joules(7.9e-7 * f.c1))
        } else if span(t, 10.0, 1e3) {
            Some(Quantity::joules(7.9e-3))
        } else if through(t, 1e3, T_MAX) {
            Some(Quantity::watts(7.9e-6))
        } else {
            None
        };
    }

    if l < 1050.0 {
        // C4 only scales the near-infrared part of the band
        let c4 = if l >= 700.0 { f.c4 } else { 1.0 };
        let thermal = if span(t, T_MIN_RETINAL, 1e-11) {
            Quantity::joules(3.8e-8 * c4)
        } else if span(t, 1e-11, 5e-6) {
            Quantity::joules(7.7e-8 * c4 * f.c6)
        } else if span(t, 5e-6, f.t2) {
            Quantity::joules(7e-4 * t.powf(0.75) * c4 * f.c6)
        } else if through(t, f.t2, T_MAX) {
            Quantity::watts(7e-4 * c4 * f.c6 * f.t2.powf(-0.25))
        } else {
            return None;
        };

        return Some(match photochemical_class1(l, t, f) {
            Some(photo) => more_restrictive(thermal, photo, t),
            None => thermal,
        });
    }

    if l < 1400.0 {
        return if span(t, T_MIN_RETINAL, 1e-11) {
            Some(Quantity::joules(3.8e-8 * f.c7))
        } else if span(t, 1e-11, 1.3e-5) {
            Some(Quantity::joules(7.7e-7 * f.c7))
        } else if span(t, 1.3e-5, f.t2) {
            Some(Quantity::joules(7e-4 * f.c4 * t.powf(0.75) * f.c6 * f.c7))
        } else if through(t, f.t2, T_MAX) {
            Some(Quantity::watts(7e-4 * f.c4 * f.c6 * f.c7 * f.t2.powf(-0.25)))
        } else {
            None
        };
    }

    if l < 4000.0 {
        // Shortest sub-band differs per band; the rest share the corneal formulas
        let (short_end, short_limit) = if l < 1500.0 {
            (1e-3, 8e-4)
        } else if l < 1800.0 {
            (0.35, 8e-3)
        } else if l < 2600.0 {
            (1e-3, 8e-4)
        } else {
            (1e-7, 8e-5)
        };
        return if span(t, T_MIN, short_end) {
            Some(Quantity::joules(short_limit))
        } else if span(t, short_end, 0.35) {
            Some(Quantity::joules(4.4e-3 * t.powf(0.25)))
        } else if span(t, 0.35, 10.0) {
            Some(Quantity::joules(1.8e-2 * t.powf(0.75)))
        } else if through(t, 10.0, T_MAX) {
            Some(Quantity::watts(1e-2))
        } else {
            None
        };
    }

    if span(t, T_MIN, 1e-7) {
        Some(Quantity::joules_per_m2(100.0))
    } else if span(t, 1e-7, 10.0) {
        Some(Quantity::joules_per_m2(5600.0 * t.powf(0.25)))
    } else if through(t, 10.0, T_MAX) {
        Some(Quantity::watts_per_m2(1000.0))
    } else {
        None
    }
}

/// Blue-light photochemical limit for 400-500 nm at t ≥ 10 s.
fn photochemical_class1(wavelength_nm: f64, t: f64, f: &CorrectionFactors) -> Option<Quantity> {
    if !(400.0..500.0).contains(&wavelength_nm) {
        return None;
    }
    if span(t, 10.0, 100.0) {
        Some(Quantity::joules(3.9e-3 * f.c3))
    } else if through(t, 100.0, T_MAX) {
        Some(Quantity::watts(3.9e-5 * f.c3))
    } else {
        None
    }
}

/// Class 2 AEL: 1 mW blink-reflex limit, visible only.
pub fn class2_ael(wavelength_nm: f64, _t: f64, _f: &CorrectionFactors) -> Option<Quantity> {
    supports_class2(wavelength_nm).then(|| Quantity::watts(1e-3))
}

/// Class 3R AEL.
pub fn class3r_ael(wavelength_nm: f64, t: f64, f: &CorrectionFactors) -> Option<Quantity> {
    let l = wavelength_nm;

    if l < 302.5 {
        return through(t, T_MIN, T_MAX).then(|| Quantity::joules(1.2e-4));
    }

    if l >= 4000.0 {
        return if span(t, T_MIN, 1e-7) {
            Some(Quantity::joules_per_m2(500.0))
        } else if span(t, 1e-7, 10.0) {
            Some(Quantity::joules_per_m2(2.8e4 * t.powf(0.25)))
        } else if through(t, 10.0, T_MAX) {
            Some(Quantity::watts_per_m2(5000.0))
        } else {
            None
        };
    }

    if supports_class2(l) && t >= T_AVERSION {
        return class2_ael(l, t, f).map(|q| q * 5.0);
    }

    class1_ael(l, t, f).map(|q| q * 5.0)
}

/// Class 3B AEL. Independent of the lower classes.
pub fn class3b_ael(wavelength_nm: f64, t: f64, f: &CorrectionFactors) -> Option<Quantity> {
    let l = wavelength_nm;

    if t <= 0.0 || t > T_MAX {
        return None;
    }
    let pulsed = t < T_AVERSION;

    let limit = if l < 302.5 {
        if pulsed {
            Quantity::joules(3.8e-4)
        } else {
            Quantity::watts(1.5e-3)
        }
    } else if l < 315.0 {
        if pulsed {
            Quantity::joules((1.25e-4 * f.c2).min(0.125))
        } else {
            Quantity::watts((5e-4 * f.c2).min(0.5))
        }
    } else if pulsed {
        if l < 400.0 {
            Quantity::joules(0.125)
        } else if l < 700.0 {
            Quantity::joules(0.03)
        } else if l < 1050.0 {
            Quantity::joules(0.03 * f.c4)
        } else if l < 1400.0 {
            Quantity::joules(0.15)
        } else {
            Quantity::joules(0.125)
        }
    } else {
        Quantity::watts(0.5)
    };

    Some(limit)
}

/// All four AELs for one wavelength/time pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AelSet {
    pub class1: Option<Quantity>,
    pub class2: Option<Quantity>,
    pub class3r: Option<Quantity>,
    pub class3b: Option<Quantity>,
}

impl AelSet {
    /// Compute every class and enforce Class 1 ≤ Class 3R ≤ Class 3B.
    ///
    /// Where the raw tables invert (large C6/C7, wide far-IR apertures) the
    /// lower tier is capped at the next tier. Comparisons use power-equivalents
    /// through the Condition 3 aperture.
    pub fn compute(
        wavelength_nm: f64,
        exposure_time_s: f64,
        factors: &CorrectionFactors,
        conditions: &MeasurementConditions,
    ) -> Self {
        let t = exposure_time_s;
        let aperture = conditions.condition3.aperture_mm;

        let class3b = class3b_ael(wavelength_nm, t, factors);
        let class3r = cap(class3r_ael(wavelength_nm, t, factors), class3b, t, aperture);
        let class1 = cap(class1_ael(wavelength_nm, t, factors), class3r.or(class3b), t, aperture);

        AelSet {
            class1,
            class2: class2_ael(wavelength_nm, t, factors),
            class3r,
            class3b,
        }
    }

    pub fn get(&self, class: AelClass) -> Option<Quantity> {
        match class {
            AelClass::Class1 => self.class1,
            AelClass::Class2 => self.class2,
            AelClass::Class3R => self.class3r,
            AelClass::Class3B => self.class3b,
        }
    }

    /// The AEL for `class`, or `UndefinedAel` if the table cell is blank.
    pub fn require(&self, class: AelClass, wavelength_nm: f64, exposure_time_s: f64) -> CalcResult<Quantity> {
        self.get(class)
            .ok_or_else(|| CalcError::undefined_ael(class.display_name(), wavelength_nm, exposure_time_s))
    }
}

fn cap(lower: Option<Quantity>, upper: Option<Quantity>, t: f64, aperture_mm: f64) -> Option<Quantity> {
    match (lower, upper) {
        (Some(l), Some(u)) if l.to_power_w(t, aperture_mm) > u.to_power_w(t, aperture_mm) => Some(u),
        _ => lower,
    }
}
