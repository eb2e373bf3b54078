//! # Correction Factors
//!
//! Wavelength, time and source-size dependent factors that scale the AEL and
//! MPE tables.
//!
//! ## AEL factors (IEC 60825-1)
//!
//! | Factor | Band (nm)     | Formula                                  | Outside band |
//! |--------|---------------|------------------------------------------|--------------|
//! | C1     | 180 - 400     | 5.6×10³ t^0.25                           | 1            |
//! | T1     | 180 - 400     | 10^-15 × 10^(0.8(λ-295)) s               | 0            |
//! | C2     | 302.5 - 315   | 10^(0.2(λ-295))                          | 30 *         |
//! | C3     | 450 - 600     | 10^(0.02(λ-450))                         | 1            |
//! | C4     | 700 - 1050    | 10^(0.002(λ-700))                        | 5 *          |
//! | C6     | 400 - 1400    | α/α_min, limited to α_max/α_min          | 1            |
//! | C7     | 1150 - 1400   | see [`c7`]                               | 1            |
//! | T2     | 400 - 1400    | 10 × 10^((α-1.5)/98.5) s, 10 to 100 s    | 10           |
//!
//! `*` Fallbacks marked with an asterisk follow [`FactorDefaults`]: the
//! `Literal` mode keeps the values above, `Corrected` uses C2 = 1 and applies
//! C4 = 5 only between 1050 and 1400 nm.
//!
//! ## MPE factors
//!
//! CA, CB and CC are the simpler factors used by the ocular MPE table. They
//! come from [`mpe_correction_factors`] and are not interchangeable with
//! C1-C7.

use serde::{Deserialize, Serialize};

use crate::settings::{FactorDefaults, ALPHA_MIN_MRAD};

/// AEL correction factors for one wavelength / exposure time / source size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactors {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c6: f64,
    pub c7: f64,
    /// UV photochemical/thermal breakpoint (s)
    pub t1: f64,
    /// Retinal thermal breakpoint for extended sources (s)
    pub t2: f64,
}

impl CorrectionFactors {
    /// Compute every factor. Each is active only in its own band.
    pub fn compute(
        wavelength_nm: f64,
        exposure_time_s: f64,
        angular_subtense_mrad: f64,
        defaults: FactorDefaults,
    ) -> Self {
        let uv = (180.0..=400.0).contains(&wavelength_nm);
        let retinal = (400.0..=1400.0).contains(&wavelength_nm);

        CorrectionFactors {
            c1: if uv { 5.6e3 * exposure_time_s.powf(0.25) } else { 1.0 },
            c2: c2(wavelength_nm, defaults),
            c3: if (450.0..=600.0).contains(&wavelength_nm) {
                10f64.powf(0.02 * (wavelength_nm - 450.0))
            } else {
                1.0
            },
            c4: c4(wavelength_nm, defaults),
            c6: if retinal {
                c6(exposure_time_s, angular_subtense_mrad)
            } else {
                1.0
            },
            c7: c7(wavelength_nm, defaults),
            t1: if uv {
                1e-15 * 10f64.powf(0.8 * (wavelength_nm - 295.0))
            } else {
                0.0
            },
            t2: if retinal { t2(angular_subtense_mrad) } else { 10.0 },
        }
    }

    /// Point-source factors with the literal fallbacks
    pub fn point_source(wavelength_nm: f64, exposure_time_s: f64) -> Self {
        CorrectionFactors::compute(wavelength_nm, exposure_time_s, ALPHA_MIN_MRAD, FactorDefaults::Literal)
    }
}

fn c2(wavelength_nm: f64, defaults: FactorDefaults) -> f64 {
    if (302.5..=315.0).contains(&wavelength_nm) {
        return 10f64.powf(0.2 * (wavelength_nm - 295.0));
    }
    match defaults {
        FactorDefaults::Literal => 30.0,
        FactorDefaults::Corrected => 1.0,
    }
}

fn c4(wavelength_nm: f64, defaults: FactorDefaults) -> f64 {
    if (700.0..=1050.0).contains(&wavelength_nm) {
        return 10f64.powf(0.002 * (wavelength_nm - 700.0));
    }
    match defaults {
        FactorDefaults::Literal => 5.0,
        FactorDefaults::Corrected if (1050.0..=1400.0).contains(&wavelength_nm) => 5.0,
        FactorDefaults::Corrected => 1.0,
    }
}

/// Maximum angular subtense α_max (mrad) for the exposure time.
pub fn alpha_max_mrad(exposure_time_s: f64) -> f64 {
    if exposure_time_s < 625e-6 {
        5.0
    } else if exposure_time_s <= 0.25 {
        200.0 * exposure_time_s.sqrt()
    } else {
        100.0
    }
}

/// Extended source factor C6 = α/α_min, limited to [1, α_max/α_min].
pub fn c6(exposure_time_s: f64, angular_subtense_mrad: f64) -> f64 {
    let upper = alpha_max_mrad(exposure_time_s) / ALPHA_MIN_MRAD;
    (angular_subtense_mrad / ALPHA_MIN_MRAD).clamp(1.0, upper)
}

/// C7 for the water absorption band.
///
/// The literal mode uses an exponent of 0.0018 between 1150 and 1200 nm; the
/// corrected mode uses 0.018, which meets 8 + 10^(0.04(λ-1250)) at 1200 nm.
pub fn c7(wavelength_nm: f64, defaults: FactorDefaults) -> f64 {
    if (1150.0..1200.0).contains(&wavelength_nm) {
        let slope = match defaults {
            FactorDefaults::Literal => 0.0018,
            FactorDefaults::Corrected => 0.018,
        };
        10f64.powf(slope * (wavelength_nm - 1150.0))
    } else if (1200.0..=1400.0).contains(&wavelength_nm) {
        8.0 + 10f64.powf(0.04 * (wavelength_nm - 1250.0))
    } else {
        1.0
    }
}

/// Retinal thermal breakpoint T2 (s) for the source size.
pub fn t2(angular_subtense_mrad: f64) -> f64 {
    if angular_subtense_mrad <= ALPHA_MIN_MRAD {
        10.0
    } else if angular_subtense_mrad <= 100.0 {
        10.0 * 10f64.powf((angular_subtense_mrad - ALPHA_MIN_MRAD) / 98.5)
    } else {
        100.0
    }
}

/// Factors used by the ocular MPE table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MpeFactors {
    /// Retinal thermal factor (700-1400 nm)
    pub ca: f64,
    /// Blue-light photochemical factor (450-700 nm)
    pub cb: f64,
    /// Water absorption factor (1150-1400 nm)
    pub cc: f64,
}

/// MPE factors CA, CB, CC for the wavelength.
pub fn mpe_correction_factors(wavelength_nm: f64) -> MpeFactors {
    let ca = if (700.0..1050.0).contains(&wavelength_nm) {
        10f64.powf(0.002 * (wavelength_nm - 700.0))
    } else if (1050.0..=1400.0).contains(&wavelength_nm) {
        5.0
    } else {
        1.0
    };

    let cb = if (450.0..600.0).contains(&wavelength_nm) {
        10f64.powf(0.02 * (wavelength_nm - 450.0))
    } else if (600.0..=700.0).contains(&wavelength_nm) {
        1000.0
    } else {
        1.0
    };

    let cc = if (1150.0..1200.0).contains(&wavelength_nm) {
        10f64.powf(0.018 * (wavelength_nm - 1150.0))
    } else if (1200.0..=1400.0).contains(&wavelength_nm) {
        8.0 + 10f64.powf(0.04 * (wavelength_nm - 1250.0))
    } else {
        1.0
    };

    MpeFactors { ca, cb, cc }
}
