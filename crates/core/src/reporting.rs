//! Summary reporting over persisted records.
//!
//! Reporting reads the risk level already attached to each record and counts
//! buckets; it never re-invokes the scoring engine. A record's stored level
//! is authoritative even if the calibration has changed since it was saved.

use crate::record::MedicalRecord;
use serde::Serialize;
use uuid::Uuid;
use vitalsight_scoring::RiskLevel;

/// Bucket counts of records by risk level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

fn bucket<'a>(records: impl Iterator<Item = &'a MedicalRecord>) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for record in records {
        match record.assessment.risk_level {
            RiskLevel::Low => distribution.low += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::High => distribution.high += 1,
        }
    }
    distribution
}

/// Buckets every record by its stored risk level.
pub fn risk_distribution(records: &[MedicalRecord]) -> RiskDistribution {
    bucket(records.iter())
}

/// Buckets one patient's records by their stored risk levels.
pub fn distribution_for_patient(records: &[MedicalRecord], patient_id: Uuid) -> RiskDistribution {
    bucket(records.iter().filter(|r| r.patient_id == patient_id))
}

/// The most recently appended record for one patient, if any.
pub fn latest_for_patient(records: &[MedicalRecord], patient_id: Uuid) -> Option<&MedicalRecord> {
    records.iter().rev().find(|r| r.patient_id == patient_id)
}
