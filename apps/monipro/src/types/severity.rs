//! Severity bands for percentage metrics

use serde::{Deserialize, Serialize};

/// Lower bound of the elevated band
pub const ELEVATED_THRESHOLD: f64 = 50.0;
/// Lower bound of the critical band
pub const CRITICAL_THRESHOLD: f64 = 80.0;

/// Severity band derived from a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Below 50
    Nominal,
    /// 50 up to (not including) 80
    Elevated,
    /// 80 and above
    Critical,
}

impl Severity {
    /// Map a percentage to its band
    ///
    /// Boundary values belong to the upper band. Inputs that fail both
    /// comparisons (NaN) land in `Critical`.
    pub fn from_percent(value: f64) -> Self {
        if value < ELEVATED_THRESHOLD {
            Severity::Nominal
        } else if value < CRITICAL_THRESHOLD {
            Severity::Elevated
        } else {
            Severity::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Nominal => "nominal",
            Severity::Elevated => "elevated",
            Severity::Critical => "critical",
        }
    }
}

impl From<u8> for Severity {
    fn from(value: u8) -> Self {
        Severity::from_percent(f64::from(value))
    }
}
