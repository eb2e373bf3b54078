//! # calc_core - Laser Safety Calculation Engine
//!
//! `calc_core` is the computational heart of Lumen: IEC 60825-1 product
//! classification, ocular maximum permissible exposure (MPE), nominal ocular
//! hazard distance (NOHD) and protective eyewear optical density. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Tagged Units**: Limits carry their radiometric unit (W, J, W/m², J/cm², ...)
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{classify, CalcSettings, ExposureContext, LaserClass, LaserSpec};
//!
//! let pointer = LaserSpec::continuous(532.0, 0.005, 7.0);
//! let result = classify(&pointer, &ExposureContext::aversion(), &CalcSettings::default()).unwrap();
//!
//! assert_eq!(result.laser_class, LaserClass::Class3R);
//! for step in &result.steps {
//!     println!("{}", step);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`laser`] - Laser parameters and the IEC tables (factors, conditions, AEL, MPE)
//! - [`calculations`] - Classification, MPE, NOHD and eyewear calculations
//! - [`settings`] - Calculation settings
//! - [`units`] - Radiometric quantities
//! - [`references`] - Standard references cited in calculation trails
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod laser;
pub mod references;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{classify, CalculationItem, CalculationOutput, ClassificationResult, LaserClass, MpeResult};
pub use errors::{CalcError, CalcResult};
pub use laser::{Emission, ExposureContext, LaserSpec};
pub use settings::{CalcSettings, EmissionModel, FactorDefaults};
pub use units::{Quantity, RadiometricUnit};
