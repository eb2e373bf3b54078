//! # Error Types
//!
//! Two things can stop a calculation: an input outside the physical domain
//! (rejected before any table is consulted) or a JSON record that does not
//! parse. A blank AEL table cell is reported as [`CalcError::UndefinedAel`]
//! by [`AelSet::require`](crate::laser::ael::AelSet::require); the classifier
//! turns that into a "not evaluable" trail step instead of failing.
//!
//! ```rust
//! use calc_core::{classify, CalcSettings, ExposureContext, LaserSpec};
//!
//! let bad = LaserSpec::continuous(532.0, -0.005, 7.0);
//! let err = classify(&bad, &ExposureContext::aversion(), &CalcSettings::default()).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, outside the tabulated domain, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The AEL table has no entry for this wavelength/time combination
    #[error("AEL for {class} is not defined at {wavelength_nm} nm, t = {exposure_time_s} s")]
    UndefinedAel {
        class: String,
        wavelength_nm: f64,
        exposure_time_s: f64,
    },

    /// A JSON record or settings file could not be read
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UndefinedAel error
    pub fn undefined_ael(class: impl Into<String>, wavelength_nm: f64, exposure_time_s: f64) -> Self {
        CalcError::UndefinedAel {
            class: class.into(),
            wavelength_nm,
            exposure_time_s,
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the error came from the inputs rather than the engine
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UndefinedAel { .. } => "UNDEFINED_AEL",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject values that are not finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number greater than zero",
        ));
    }
    Ok(())
}
