//! # Single-Exposure Ocular MPE
//!
//! Maximum permissible exposure at the cornea for one exposure of duration
//! `t`. Values are radiant exposure (J/cm²) or irradiance (W/cm²) depending on
//! the branch; [`mpe`] re-expresses either in the unit the caller's mode needs.
//!
//! | Band (nm)        | Short pulses                 | Up to 10 s                 | 10 s and longer                     |
//! |------------------|------------------------------|----------------------------|-------------------------------------|
//! | 180 - 302.5      | 3 mJ/cm²                     | 3 mJ/cm²                   | 3 mJ/cm²                            |
//! | 302.5 - 315      | 0.56 t^0.25 J/cm² (t < T1)   | C2 × 10^-4 J/cm²           | C2 × 10^-4 J/cm²                    |
//! | 315 - 400        | 0.56 t^0.25 J/cm²            | 0.56 t^0.25 J/cm²          | 1 J/cm², then 1 mW/cm² past 1000 s  |
//! | 400 - 700        | 0.5 µJ/cm²                   | 1.8 CA t^0.75 mJ/cm²       | min(1 mW/cm², photochemical CB)     |
//! | 700 - 1050       | 0.5 CA µJ/cm²                | 1.8 CA t^0.75 mJ/cm²       | 1 CA mW/cm²                         |
//! | 1050 - 1400      | 5 CC µJ/cm²                  | 9 CC t^0.75 mJ/cm²         | 5 CC mW/cm²                         |
//! | 1400 - 1e6       | 0.01 - 1.0 CC J/cm²          | 0.56 t^0.25 J/cm²          | 0.1 W/cm²                           |

use serde::{Deserialize, Serialize};

use super::factors::{CorrectionFactors, MpeFactors};
use crate::units::Quantity;

/// How an MPE value is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MpeMode {
    /// Radiant exposure per pulse (J/cm²)
    Pulsed,
    /// Irradiance (W/cm²)
    Continuous,
}

/// Table value of the ocular MPE, in the unit its branch defines.
pub fn exposure_limit(wavelength_nm: f64, t: f64, k: &MpeFactors, f: &CorrectionFactors) -> Quantity {
    let l = wavelength_nm;

    if l < 302.5 {
        return Quantity::joules_per_cm2(3e-3);
    }

    if l < 315.0 {
        return if t < f.t1 {
            Quantity::joules_per_cm2(0.56 * t.powf(0.25))
        } else {
            Quantity::joules_per_cm2(1e-4 * f.c2)
        };
    }

    if l < 400.0 {
        return if t < 10.0 {
            Quantity::joules_per_cm2(0.56 * t.powf(0.25))
        } else if t < 1e3 {
            Quantity::joules_per_cm2(1.0)
        } else {
            Quantity::watts_per_cm2(1e-3)
        };
    }

    if l < 1400.0 {
        let (short_end, short_limit, cw_limit) = if l < 700.0 {
            (18e-6, 5e-7, 1e-3)
        } else if l < 1050.0 {
            (18e-6, 5e-7 * k.ca, 1e-3 * k.ca)
        } else {
            (50e-6, 5e-6 * k.cc, 5e-3 * k.cc)
        };

        if t < short_end {
            return Quantity::joules_per_cm2(short_limit);
        }
        if t < 10.0 {
            return Quantity::joules_per_cm2(1.8e-3 * k.ca * k.cc * t.powf(0.75));
        }

        let thermal = Quantity::watts_per_cm2(cw_limit);
        if l >= 600.0 {
            return thermal;
        }
        let photochemical = if t < 100.0 {
            Quantity::joules_per_cm2(1e-2 * k.cb)
        } else {
            Quantity::watts_per_cm2(1e-4 * k.cb * k.cc)
        };
        return if irradiance(photochemical, t) < irradiance(thermal, t) {
            photochemical
        } else {
            thermal
        };
    }

    let (short_end, short_limit) = if l < 1500.0 {
        (1e-3, 0.1)
    } else if l < 1800.0 {
        (10.0, 1.0)
    } else if l < 2600.0 {
        (1e-3, 0.1)
    } else {
        (1e-7, 1e-2)
    };

    if t < short_end {
        Quantity::joules_per_cm2(short_limit * k.cc)
    } else if t < 10.0 {
        Quantity::joules_per_cm2(0.56 * t.powf(0.25))
    } else {
        Quantity::watts_per_cm2(0.1)
    }
}

// Every branch above yields a per-cm² unit.
fn irradiance(q: Quantity, t: f64) -> f64 {
    q.to_irradiance_w_cm2(t).unwrap_or(q.value)
}

/// MPE expressed for `mode`: J/cm² for pulsed evaluation, W/cm² for CW.
pub fn mpe(wavelength_nm: f64, t: f64, mode: MpeMode, k: &MpeFactors, f: &CorrectionFactors) -> Quantity {
    let limit = exposure_limit(wavelength_nm, t, k, f);
    let e = irradiance(limit, t);
    match mode {
        MpeMode::Continuous => Quantity::watts_per_cm2(e),
        MpeMode::Pulsed => Quantity::joules_per_cm2(e * t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laser::factors::mpe_correction_factors;
    use crate::units::RadiometricUnit;

    fn lookup(wavelength_nm: f64, t: f64, mode: MpeMode) -> Quantity {
        mpe(
            wavelength_nm,
            t,
            mode,
            &mpe_correction_factors(wavelength_nm),
            &CorrectionFactors::point_source(wavelength_nm, t),
        )
    }

    #[test]
    fn test_visible_aversion_mpe() {
        // 1.8 × 0.25^0.75 mJ/cm² = 0.636 mJ/cm², 2.55 mW/cm²
        let h = lookup(532.0, 0.25, MpeMode::Pulsed);
        assert_eq!(h.unit, RadiometricUnit::JoulesPerCm2);
        assert!((h.value - 6.364e-4).abs() < 1e-6);

        let e = lookup(532.0, 0.25, MpeMode::Continuous);
        assert!((e.value - 2.546e-3).abs() < 1e-5);
    }

    #[test]
    fn test_visible_cw_thermal() {
        let e = lookup(633.0, 1000.0, MpeMode::Continuous);
        assert!((e.value - 1e-3).abs() < 1e-12);
    }

    #[test]
    fn test_blue_photochemical() {
        // CB = 1 below 450 nm: 100 µW/cm²
        let e = lookup(445.0, 1000.0, MpeMode::Continuous);
        assert!((e.value - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn test_short_pulse_visible() {
        let h = lookup(532.0, 10e-9, MpeMode::Pulsed);
        assert!((h.value - 5e-7).abs() < 1e-15);
    }

    #[test]
    fn test_nd_yag() {
        let h = lookup(1064.0, 10e-9, MpeMode::Pulsed);
        assert!((h.value - 5e-6).abs() < 1e-15);

        let e = lookup(1064.0, 10.0, MpeMode::Continuous);
        assert!((e.value - 5e-3).abs() < 1e-12);
    }

    #[test]
    fn test_far_ir() {
        let h = lookup(1550.0, 1e-8, MpeMode::Pulsed);
        assert!((h.value - 1.0).abs() < 1e-12);

        let e = lookup(10_600.0, 100.0, MpeMode::Continuous);
        assert!((e.value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_continuity_at_ten_seconds() {
        let below = lookup(532.0, 9.999, MpeMode::Continuous).value;
        let above = lookup(532.0, 10.0, MpeMode::Continuous).value;
        assert!((below - above).abs() / above < 0.02);
    }

    #[test]
    fn test_near_ir_continuity_at_ten_seconds() {
        // 9 CC t^0.75 mJ/cm² meets 5 CC mW/cm² at 10 s
        let below = lookup(1064.0, 9.999, MpeMode::Continuous).value;
        let above = lookup(1064.0, 10.0, MpeMode::Continuous).value;
        assert!((below - above).abs() / above < 0.02);
    }

    #[test]
    fn test_uv_constant() {
        let h = lookup(250.0, 1.0, MpeMode::Pulsed);
        assert!((h.value - 3e-3).abs() < 1e-15);
    }
}
