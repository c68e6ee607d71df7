//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services, rather than being re-derived
//! per call. In particular the scoring calibration is bound here so every
//! consumer of a [`RecordService`](crate::service::RecordService) scores with
//! the same weights for the lifetime of the process.

use vitalsight_scoring::ScoringConfig;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    scoring: ScoringConfig,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with an explicit scoring calibration.
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }
}
