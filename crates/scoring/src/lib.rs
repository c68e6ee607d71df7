//! Vitals-to-risk scoring.
//!
//! This crate contains the deterministic scoring engine for the VitalSight
//! health-monitoring demo: a pure function from a vitals reading to a numeric
//! risk score in `[0, 100]` and a categorical risk level.
//!
//! Baselines, weights, and classification thresholds are configuration, bound
//! into a [`RiskEngine`] when it is built. Everything else (input validation,
//! record storage, reporting) lives in `vitalsight-core`; this crate holds no
//! collections and performs no I/O.
//!
//! The scoring heuristic is illustrative, not clinically validated.

pub mod assessment;
pub mod config;
pub mod engine;
pub mod reading;

pub use assessment::{RiskAssessment, RiskLevel};
pub use config::{DeviationSide, RiskThresholds, ScoringConfig, VitalWeight};
pub use engine::RiskEngine;
pub use reading::VitalsReading;
