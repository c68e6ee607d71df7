//! Scoring configuration.
//!
//! Baselines, per-vital weights, and the two classification thresholds are
//! data rather than code: a [`ScoringConfig`] is bound into a
//! [`RiskEngine`](crate::RiskEngine) when it is constructed, so an alternate
//! calibration is a new config and a new engine, not a code change.
//!
//! [`ScoringConfig::default`] reproduces the demo's fixed calibration.

use serde::{Deserialize, Serialize};

/// Which side of the baseline a vital is penalised on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum DeviationSide {
    /// Deviation in either direction contributes.
    Both,
    /// Only readings below the baseline contribute; readings above it
    /// contribute nothing.
    BelowOnly,
}

/// Baseline and weighting for a single vital.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct VitalWeight {
    /// The reference "normal" value, the zero point for deviation scoring.
    pub baseline: f64,

    /// Multiplier applied to the deviation from the baseline.
    pub weight: f64,

    /// Which deviations from the baseline are penalised.
    pub side: DeviationSide,
}

impl VitalWeight {
    /// Weighted contribution of one measured value.
    ///
    /// Non-negative for every real input: the deviation is an absolute value
    /// for [`DeviationSide::Both`] and explicitly floored at zero for
    /// [`DeviationSide::BelowOnly`].
    pub fn term(&self, value: f64) -> f64 {
        let deviation = match self.side {
            DeviationSide::Both => (value - self.baseline).abs(),
            DeviationSide::BelowOnly => (self.baseline - value).max(0.0),
        };
        deviation * self.weight
    }
}

/// Boundaries between the three risk levels, applied to the clamped score.
///
/// A score strictly below `low_ceiling` is low risk; a score up to and
/// including `medium_ceiling` is medium; anything above is high.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct RiskThresholds {
    pub low_ceiling: f64,
    pub medium_ceiling: f64,
}

/// Complete calibration for the scoring engine: one [`VitalWeight`] per
/// vital plus the classification thresholds.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    pub heart_rate: VitalWeight,
    pub bp_systolic: VitalWeight,
    pub bp_diastolic: VitalWeight,
    pub temperature: VitalWeight,
    pub blood_sugar: VitalWeight,
    pub spo2: VitalWeight,
    pub respiration_rate: VitalWeight,
    pub thresholds: RiskThresholds,
}

impl Default for ScoringConfig {
    /// The demo calibration.
    ///
    /// Weights are hand-tuned for relative clinical sensitivity: a one-degree
    /// temperature deviation counts six times, a one-bpm heart-rate deviation
    /// two thirds. Saturation is the only one-sided vital; supersaturation is
    /// never penalised.
    fn default() -> Self {
        Self {
            heart_rate: VitalWeight {
                baseline: 75.0,
                weight: 1.0 / 1.5,
                side: DeviationSide::Both,
            },
            bp_systolic: VitalWeight {
                baseline: 120.0,
                weight: 1.0 / 2.0,
                side: DeviationSide::Both,
            },
            bp_diastolic: VitalWeight {
                baseline: 80.0,
                weight: 1.0 / 2.0,
                side: DeviationSide::Both,
            },
            temperature: VitalWeight {
                baseline: 98.6,
                weight: 6.0,
                side: DeviationSide::Both,
            },
            blood_sugar: VitalWeight {
                baseline: 100.0,
                weight: 1.0 / 1.8,
                side: DeviationSide::Both,
            },
            spo2: VitalWeight {
                baseline: 98.0,
                weight: 6.0,
                side: DeviationSide::BelowOnly,
            },
            respiration_rate: VitalWeight {
                baseline: 16.0,
                weight: 2.0,
                side: DeviationSide::Both,
            },
            thresholds: RiskThresholds {
                low_ceiling: 30.0,
                medium_ceiling: 60.0,
            },
        }
    }
}
