//! # Measurement Conditions
//!
//! Aperture stops and measurement distances for Condition 1 (collimated beam
//! viewed through binoculars or a telescope) and Condition 3 (unaided eye),
//! after IEC 60825-1 Table 10.
//!
//! | Band (nm)      | Condition 1         | Condition 3        |
//! |----------------|---------------------|--------------------|
//! | < 302.5        | not applied         | 1 mm at 0 mm       |
//! | 302.5 - 400    | 7 mm at 2000 mm     | 1 mm at 100 mm     |
//! | 400 - 1400     | 50 mm at 2000 mm    | 7 mm at 100 mm     |
//! | 1400 - 4000    | 7 × A3 at 2000 mm   | A3(t) at 100 mm    |
//! | 4000 - 1e5     | not applied         | A3(t) at 0 mm      |
//! | ≥ 1e5          | not applied         | 11 mm at 0 mm      |
//!
//! A3(t) is 1 mm up to 0.35 s, 1.5 t^(3/8) mm up to 10 s, then 3.5 mm.

use serde::{Deserialize, Serialize};

/// Aperture diameter and distance from the reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementGeometry {
    pub aperture_mm: f64,
    pub distance_mm: f64,
}

impl MeasurementGeometry {
    pub fn new(aperture_mm: f64, distance_mm: f64) -> Self {
        MeasurementGeometry {
            aperture_mm,
            distance_mm,
        }
    }
}

/// Condition 1 and Condition 3 geometry for one wavelength/time pair.
///
/// When Condition 1 does not apply it holds a copy of Condition 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConditions {
    pub condition1: MeasurementGeometry,
    pub condition3: MeasurementGeometry,
    pub is_condition1_applicable: bool,
}

impl MeasurementConditions {
    /// Resolve the Table 10 geometry.
    pub fn resolve(wavelength_nm: f64, exposure_time_s: f64) -> Self {
        if wavelength_nm < 302.5 {
            MeasurementConditions::condition3_only(MeasurementGeometry::new(1.0, 0.0))
        } else if wavelength_nm < 400.0 {
            MeasurementConditions {
                condition1: MeasurementGeometry::new(7.0, 2000.0),
                condition3: MeasurementGeometry::new(1.0, 100.0),
                is_condition1_applicable: true,
            }
        } else if wavelength_nm < 1400.0 {
            MeasurementConditions {
                condition1: MeasurementGeometry::new(50.0, 2000.0),
                condition3: MeasurementGeometry::new(7.0, 100.0),
                is_condition1_applicable: true,
            }
        } else if wavelength_nm < 4000.0 {
            let aperture = infrared_aperture_mm(exposure_time_s);
            MeasurementConditions {
                condition1: MeasurementGeometry::new(7.0 * aperture, 2000.0),
                condition3: MeasurementGeometry::new(aperture, 100.0),
                is_condition1_applicable: true,
            }
        } else if wavelength_nm < 1.0e5 {
            let aperture = infrared_aperture_mm(exposure_time_s);
            MeasurementConditions::condition3_only(MeasurementGeometry::new(aperture, 0.0))
        } else {
            MeasurementConditions::condition3_only(MeasurementGeometry::new(11.0, 0.0))
        }
    }

    fn condition3_only(condition3: MeasurementGeometry) -> Self {
        MeasurementConditions {
            condition1: condition3,
            condition3,
            is_condition1_applicable: false,
        }
    }
}

/// Time-dependent limiting aperture for 1400 nm - 0.1 mm (mm).
pub fn infrared_aperture_mm(exposure_time_s: f64) -> f64 {
    if exposure_time_s <= 0.35 {
        1.0
    } else if exposure_time_s < 10.0 {
        1.5 * exposure_time_s.powf(3.0 / 8.0)
    } else {
        3.5
    }
}

/// Class 1M / 2M applies to beams wider than the Condition 3 pupil between
/// 302.5 and 4000 nm.
pub fn requires_class_m(wavelength_nm: f64, beam_diameter_mm: f64) -> bool {
    (302.5..=4000.0).contains(&wavelength_nm) && beam_diameter_mm > 7.0
}

/// Class 2 exists only for visible wavelengths (400-700 nm inclusive).
pub fn supports_class2(wavelength_nm: f64) -> bool {
    (400.0..=700.0).contains(&wavelength_nm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_conditions() {
        let c = MeasurementConditions::resolve(532.0, 0.25);
        assert!(c.is_condition1_applicable);
        assert_eq!(c.condition1, MeasurementGeometry::new(50.0, 2000.0));
        assert_eq!(c.condition3, MeasurementGeometry::new(7.0, 100.0));
    }

    #[test]
    fn test_uv_condition1_not_applicable() {
        let c = MeasurementConditions::resolve(250.0, 1.0);
        assert!(!c.is_condition1_applicable);
        assert_eq!(c.condition1, c.condition3);
    }

    #[test]
    fn test_far_ir_condition1_not_applicable() {
        let c = MeasurementConditions::resolve(10_600.0, 10.0);
        assert!(!c.is_condition1_applicable);
        assert_eq!(c.condition3.aperture_mm, 3.5);
        let c = MeasurementConditions::resolve(2.0e5, 10.0);
        assert_eq!(c.condition3.aperture_mm, 11.0);
    }

    #[test]
    fn test_infrared_aperture_time_dependence() {
        assert_eq!(infrared_aperture_mm(0.1), 1.0);
        assert!((infrared_aperture_mm(1.0) - 1.5).abs() < 1e-12);
        assert_eq!(infrared_aperture_mm(100.0), 3.5);

        let c = MeasurementConditions::resolve(1550.0, 1.0);
        assert!((c.condition1.aperture_mm - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_requires_class_m() {
        assert!(requires_class_m(532.0, 8.0));
        assert!(!requires_class_m(532.0, 7.0));
        assert!(!requires_class_m(250.0, 20.0));
        assert!(requires_class_m(4000.0, 20.0));
        assert!(!requires_class_m(4000.1, 20.0));
    }

    #[test]
    fn test_supports_class2_boundary() {
        assert!(supports_class2(400.0));
        assert!(supports_class2(700.0));
        assert!(!supports_class2(700.001));
        assert!(!supports_class2(399.9));
    }
}
