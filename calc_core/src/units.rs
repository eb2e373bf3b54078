//! # Radiometric Units
//!
//! Every AEL and MPE value in this crate is a [`Quantity`]: a number tagged with
//! the [`RadiometricUnit`] its formula produces. Table branches switch between
//! power, energy and per-area units, so the tag travels with the value and the
//! conversion to whatever the caller compares against is explicit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Quantity, RadiometricUnit};
//!
//! // Class 1 visible AEL at 0.25 s is an energy
//! let ael = Quantity::joules(2.47e-4);
//! let as_power = ael.to_power_w(0.25, 7.0);
//! assert!((as_power - 9.88e-4).abs() < 1e-6);
//! assert_eq!(ael.unit, RadiometricUnit::Joules);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Mul;

/// Unit attached to a radiometric quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiometricUnit {
    /// Power (W)
    #[serde(rename = "W")]
    Watts,
    /// Energy (J)
    #[serde(rename = "J")]
    Joules,
    /// Irradiance (W/m²)
    #[serde(rename = "W/m2")]
    WattsPerM2,
    /// Radiant exposure (J/m²)
    #[serde(rename = "J/m2")]
    JoulesPerM2,
    /// Irradiance (W/cm²)
    #[serde(rename = "W/cm2")]
    WattsPerCm2,
    /// Radiant exposure (J/cm²)
    #[serde(rename = "J/cm2")]
    JoulesPerCm2,
}

impl RadiometricUnit {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            RadiometricUnit::Watts => "W",
            RadiometricUnit::Joules => "J",
            RadiometricUnit::WattsPerM2 => "W/m²",
            RadiometricUnit::JoulesPerM2 => "J/m²",
            RadiometricUnit::WattsPerCm2 => "W/cm²",
            RadiometricUnit::JoulesPerCm2 => "J/cm²",
        }
    }

    /// True for energy-like units (J, J/m², J/cm²)
    pub fn is_energy(&self) -> bool {
        matches!(
            self,
            RadiometricUnit::Joules | RadiometricUnit::JoulesPerM2 | RadiometricUnit::JoulesPerCm2
        )
    }

    /// True for units normalised by area
    pub fn is_per_area(&self) -> bool {
        !matches!(self, RadiometricUnit::Watts | RadiometricUnit::Joules)
    }
}

impl fmt::Display for RadiometricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A value with its radiometric unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: RadiometricUnit,
}

impl Quantity {
    pub fn new(value: f64, unit: RadiometricUnit) -> Self {
        Quantity { value, unit }
    }

    pub fn watts(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::Watts)
    }

    pub fn joules(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::Joules)
    }

    pub fn watts_per_m2(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::WattsPerM2)
    }

    pub fn joules_per_m2(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::JoulesPerM2)
    }

    pub fn watts_per_cm2(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::WattsPerCm2)
    }

    pub fn joules_per_cm2(value: f64) -> Self {
        Quantity::new(value, RadiometricUnit::JoulesPerCm2)
    }

    /// Power-equivalent (W) over `time_s`, through an aperture of `aperture_mm`
    /// for per-area units.
    pub fn to_power_w(self, time_s: f64, aperture_mm: f64) -> f64 {
        let total = match self.unit {
            RadiometricUnit::Watts | RadiometricUnit::Joules => self.value,
            RadiometricUnit::WattsPerM2 | RadiometricUnit::JoulesPerM2 => {
                self.value * aperture_area_m2(aperture_mm)
            }
            RadiometricUnit::WattsPerCm2 | RadiometricUnit::JoulesPerCm2 => {
                self.value * aperture_area_cm2(aperture_mm)
            }
        };
        if self.unit.is_energy() {
            total / time_s
        } else {
            total
        }
    }

    /// Energy-equivalent (J) over `time_s`, through an aperture of `aperture_mm`.
    pub fn to_energy_j(self, time_s: f64, aperture_mm: f64) -> f64 {
        self.to_power_w(time_s, aperture_mm) * time_s
    }

    /// Convert to `target` (W or J), the unit a measured emission is given in.
    pub fn to_total(self, target: RadiometricUnit, time_s: f64, aperture_mm: f64) -> Quantity {
        if target.is_energy() {
            Quantity::joules(self.to_energy_j(time_s, aperture_mm))
        } else {
            Quantity::watts(self.to_power_w(time_s, aperture_mm))
        }
    }

    /// Irradiance in W/cm² over `time_s`. `None` for unnormalised units.
    pub fn to_irradiance_w_cm2(self, time_s: f64) -> Option<f64> {
        let per_cm2 = match self.unit {
            RadiometricUnit::Watts | RadiometricUnit::Joules => return None,
            RadiometricUnit::WattsPerM2 | RadiometricUnit::JoulesPerM2 => self.value * 1e-4,
            RadiometricUnit::WattsPerCm2 | RadiometricUnit::JoulesPerCm2 => self.value,
        };
        Some(if self.unit.is_energy() { per_cm2 / time_s } else { per_cm2 })
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Self::Output {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3e} {}", self.value, self.unit)
    }
}

/// Area of a circular aperture in m²
pub fn aperture_area_m2(diameter_mm: f64) -> f64 {
    let radius_m = diameter_mm * 1e-3 / 2.0;
    PI * radius_m * radius_m
}

/// Area of a circular aperture in cm²
pub fn aperture_area_cm2(diameter_mm: f64) -> f64 {
    let radius_cm = diameter_mm * 0.1 / 2.0;
    PI * radius_cm * radius_cm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_to_power() {
        let q = Quantity::joules(1e-3);
        assert!((q.to_power_w(0.5, 7.0) - 2e-3).abs() < 1e-12);
    }

    #[test]
    fn test_per_area_to_power() {
        // 1000 W/m² through a 3.5 mm aperture ≈ 9.62 mW
        let q = Quantity::watts_per_m2(1000.0);
        assert!((q.to_power_w(10.0, 3.5) - 9.621e-3).abs() < 1e-5);
    }

    #[test]
    fn test_to_total_keeps_requested_unit() {
        let q = Quantity::watts(2e-3).to_total(RadiometricUnit::Joules, 0.25, 7.0);
        assert_eq!(q.unit, RadiometricUnit::Joules);
        assert!((q.value - 5e-4).abs() < 1e-12);
    }

    #[test]
    fn test_irradiance_conversion() {
        let h = Quantity::joules_per_cm2(1e-2);
        assert!((h.to_irradiance_w_cm2(10.0).unwrap() - 1e-3).abs() < 1e-15);
        assert!(Quantity::watts(1.0).to_irradiance_w_cm2(1.0).is_none());

        let e = Quantity::watts_per_m2(10.0);
        assert!((e.to_irradiance_w_cm2(2.0).unwrap() - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn test_serialization() {
        let q = Quantity::watts_per_cm2(1e-3);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("W/cm2"));
        let roundtrip: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(q, roundtrip);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::watts(0.005).to_string(), "5.000e-3 W");
    }
}
