//! Risk assessment output model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-bucket categorical summary of a risk score.
///
/// Serialised with the uppercase wire strings `"LOW"`, `"MEDIUM"`, `"HIGH"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// The wire form of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of scoring one [`VitalsReading`](crate::VitalsReading).
///
/// Derived and immutable: an assessment is computed at the moment a reading
/// is recorded or previewed and is never updated afterwards. A new reading
/// requires a new assessment.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Unitless severity estimate, clamped to `[0, 100]`.
    pub risk_score: f64,

    /// Categorical summary of `risk_score`.
    pub risk_level: RiskLevel,
}
