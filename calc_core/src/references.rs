//! # Standard References
//!
//! Traceable references for the tables and formulas used in calculation
//! trails. Steps in a [`ClassificationResult`](crate::calculations::ClassificationResult)
//! or [`MpeResult`](crate::calculations::MpeResult) cite these so an engineer
//! can check each number against the published table.

use serde::Serialize;

/// IEC 60825-1:2014 table and clause references.
pub mod iec_ref {
    /// Thermal confinement time Ti
    pub const TIME_BASE: &str = "IEC 60825-1 Table 2";
    /// Class 1 / 1M accessible emission limits
    pub const CLASS_1_AEL: &str = "IEC 60825-1 Table 3";
    /// Class 2 / 2M accessible emission limits
    pub const CLASS_2_AEL: &str = "IEC 60825-1 Table 4";
    /// Class 3R accessible emission limits
    pub const CLASS_3R_AEL: &str = "IEC 60825-1 Table 5";
    /// Class 3B accessible emission limits
    pub const CLASS_3B_AEL: &str = "IEC 60825-1 Table 6";
    /// Correction factors C1-C7, T1, T2
    pub const CORRECTION_FACTORS: &str = "IEC 60825-1 Table 9";
    /// Measurement apertures and distances
    pub const MEASUREMENT_CONDITIONS: &str = "IEC 60825-1 Table 10";
    /// Repetitive pulse evaluation
    pub const REPETITIVE_PULSES: &str = "IEC 60825-1 4.3 f)";
}

/// Reference to a laser safety standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// IEC 60825-1 Safety of laser products
    Iec60825 { year: u16, table: &'static str },
    /// ANSI Z136.1 Safe Use of Lasers
    AnsiZ136 { year: u16, table: &'static str },
    /// EN 207 Personal eye-protection against laser radiation
    En207 { year: u16 },
    /// Gaussian beam optics (no code reference needed)
    BeamOptics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Iec60825 { year, table } => format!("IEC 60825-1:{} {}", year, table),
            CodeReference::AnsiZ136 { year, table } => format!("ANSI Z136.1-{} {}", year, table),
            CodeReference::En207 { year } => format!("EN 207:{}", year),
            CodeReference::BeamOptics => "Gaussian beam optics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Iec60825 { .. } => "IEC 60825-1",
            CodeReference::AnsiZ136 { .. } => "ANSI Z136.1",
            CodeReference::En207 { .. } => "EN 207",
            CodeReference::BeamOptics => "Optics",
        }
    }
}

/// Reference for the AEL tables
pub const AEL_TABLES: CodeReference = CodeReference::Iec60825 { year: 2014, table: "Tables 3-6" };

/// Reference for the ocular MPE table
pub const OCULAR_MPE: CodeReference = CodeReference::AnsiZ136 { year: 2014, table: "Table 5a" };

/// Reference for the eyewear scale numbers
pub const EYEWEAR_MARKING: CodeReference = CodeReference::En207 { year: 2017 };

/// Reference for the NOHD formula
pub const NOHD_FORMULA: CodeReference = CodeReference::BeamOptics;
