//! # Spectral Regions
//!
//! Maps a wavelength to its named spectral region and to the thermal
//! confinement time base Ti used when summing repetitive pulses.
//!
//! | Region   | Band (nm)        |
//! |----------|------------------|
//! | UV       | 180 - 400        |
//! | Visible  | 400 - 700        |
//! | Near-IR  | 700 - 1400       |
//! | IR-B/C   | 1400 - 10 600    |
//! | Far-IR   | ≥ 10 600         |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named spectral region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavelengthRegion {
    #[serde(rename = "UV")]
    Ultraviolet,
    Visible,
    #[serde(rename = "Near-IR")]
    NearInfrared,
    #[serde(rename = "IR-B/C")]
    InfraredBc,
    #[serde(rename = "Far-IR")]
    FarInfrared,
}

impl WavelengthRegion {
    /// Classify a wavelength. Anything outside the lower bands is Far-IR.
    pub fn from_wavelength(wavelength_nm: f64) -> Self {
        if (180.0..400.0).contains(&wavelength_nm) {
            WavelengthRegion::Ultraviolet
        } else if (400.0..700.0).contains(&wavelength_nm) {
            WavelengthRegion::Visible
        } else if (700.0..1400.0).contains(&wavelength_nm) {
            WavelengthRegion::NearInfrared
        } else if (1400.0..10_600.0).contains(&wavelength_nm) {
            WavelengthRegion::InfraredBc
        } else {
            WavelengthRegion::FarInfrared
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WavelengthRegion::Ultraviolet => "UV",
            WavelengthRegion::Visible => "Visible",
            WavelengthRegion::NearInfrared => "Near-IR",
            WavelengthRegion::InfraredBc => "IR-B/C",
            WavelengthRegion::FarInfrared => "Far-IR",
        }
    }
}

impl fmt::Display for WavelengthRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Thermal confinement time base Ti (s) for the wavelength.
pub fn time_base(wavelength_nm: f64) -> f64 {
    if (400.0..1050.0).contains(&wavelength_nm) {
        5e-6
    } else if (1050.0..1400.0).contains(&wavelength_nm) {
        13e-6
    } else if (1400.0..1500.0).contains(&wavelength_nm) {
        1e-3
    } else if (1500.0..1800.0).contains(&wavelength_nm) {
        10.0
    } else if (1800.0..2600.0).contains(&wavelength_nm) {
        1e-3
    } else if (2600.0..=1.0e6).contains(&wavelength_nm) {
        1e-7
    } else {
        1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_boundaries() {
        assert_eq!(WavelengthRegion::from_wavelength(180.0), WavelengthRegion::Ultraviolet);
        assert_eq!(WavelengthRegion::from_wavelength(399.9), WavelengthRegion::Ultraviolet);
        assert_eq!(WavelengthRegion::from_wavelength(400.0), WavelengthRegion::Visible);
        assert_eq!(WavelengthRegion::from_wavelength(700.0), WavelengthRegion::NearInfrared);
        assert_eq!(WavelengthRegion::from_wavelength(1400.0), WavelengthRegion::InfraredBc);
        assert_eq!(WavelengthRegion::from_wavelength(10_600.0), WavelengthRegion::FarInfrared);
    }

    #[test]
    fn test_out_of_band_is_far_ir() {
        assert_eq!(WavelengthRegion::from_wavelength(100.0), WavelengthRegion::FarInfrared);
    }

    #[test]
    fn test_time_base() {
        assert_eq!(time_base(532.0), 5e-6);
        assert_eq!(time_base(1064.0), 13e-6);
        assert_eq!(time_base(1450.0), 1e-3);
        assert_eq!(time_base(1550.0), 10.0);
        assert_eq!(time_base(2000.0), 1e-3);
        assert_eq!(time_base(10_600.0), 1e-7);
        assert_eq!(time_base(355.0), 1e-3);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&WavelengthRegion::NearInfrared).unwrap();
        assert_eq!(json, "\"Near-IR\"");
    }
}
