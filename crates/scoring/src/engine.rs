//! Deterministic vitals-to-risk scoring.

use crate::assessment::{RiskAssessment, RiskLevel};
use crate::config::ScoringConfig;
use crate::reading::VitalsReading;

/// Closed interval the summed score is clamped into. Every term is
/// non-negative by construction, so only the upper bound can bite; the lower
/// bound is kept for the output contract.
const SCORE_FLOOR: f64 = 0.0;
const SCORE_CEILING: f64 = 100.0;

/// Converts a [`VitalsReading`] into a [`RiskAssessment`].
///
/// Scoring is a pure function of the reading and the configuration the engine
/// was built with: no side effects, no hidden state, and identical inputs
/// always produce bit-identical output. There is no error path; the engine
/// is total over real-valued readings. Behaviour on non-finite inputs (NaN,
/// infinities) is undefined; callers must reject those before scoring.
///
/// The engine holds nothing but its configuration, so concurrent callers
/// (a live preview recomputing per keystroke while a save scores a different
/// reading) never interfere.
#[derive(Clone, Debug, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    /// Builds an engine bound to the given calibration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The calibration this engine scores with.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one reading.
    ///
    /// The score is the sum of the seven weighted deviation terms, clamped
    /// into `[0, 100]`. The level is a function of the clamped score alone:
    /// strictly below the low ceiling is [`RiskLevel::Low`], up to and
    /// including the medium ceiling is [`RiskLevel::Medium`], and anything
    /// above is [`RiskLevel::High`].
    pub fn score(&self, reading: &VitalsReading) -> RiskAssessment {
        let c = &self.config;

        let sum = c.heart_rate.term(reading.heart_rate)
            + c.bp_systolic.term(reading.bp_systolic)
            + c.bp_diastolic.term(reading.bp_diastolic)
            + c.temperature.term(reading.temperature)
            + c.blood_sugar.term(reading.blood_sugar)
            + c.spo2.term(reading.spo2)
            + c.respiration_rate.term(reading.respiration_rate);

        let risk_score = sum.clamp(SCORE_FLOOR, SCORE_CEILING);

        RiskAssessment {
            risk_score,
            risk_level: self.classify(risk_score),
        }
    }

    fn classify(&self, score: f64) -> RiskLevel {
        let thresholds = &self.config.thresholds;
        if score < thresholds.low_ceiling {
            RiskLevel::Low
        } else if score <= thresholds.medium_ceiling {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
