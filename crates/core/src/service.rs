//! Record-creation and live-preview flows.
//!
//! [`RecordService`] is the seam between the form layer and the scoring
//! engine. It owns an engine built from the startup configuration and keeps
//! the two call paths honest:
//!
//! - a preview materialises placeholder defaults, scores, and returns an
//!   assessment that is never stored;
//! - a save requires a complete, finite reading before anything is scored or
//!   appended, so an invalid draft leaves the store untouched.

use crate::config::CoreConfig;
use crate::draft::VitalsDraft;
use crate::record::MedicalRecord;
use crate::repositories::RecordStore;
use crate::validation::validate_finite;
use crate::RecordResult;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use vitalsight_scoring::{RiskAssessment, RiskEngine};

/// Scores readings and commits them as records.
#[derive(Clone, Debug)]
pub struct RecordService {
    engine: RiskEngine,
}

impl RecordService {
    /// Builds a service whose engine is bound to the startup calibration.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            engine: RiskEngine::new(cfg.scoring().clone()),
        }
    }

    /// The engine this service scores with.
    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    /// Provisional assessment for a form still being typed.
    ///
    /// Blank fields are materialised with placeholder defaults; the result
    /// is for display only and is discarded by the caller, never persisted.
    pub fn preview(&self, draft: &VitalsDraft) -> RiskAssessment {
        self.engine.score(&draft.materialise())
    }

    /// Commits a completed form as a new record.
    ///
    /// The draft must be fully filled in and finite; validation runs before
    /// the engine is invoked and before anything is stored, so a rejected
    /// draft leaves the store exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingVital`](crate::RecordError::MissingVital)
    /// for a blank field and
    /// [`RecordError::NonNumericVital`](crate::RecordError::NonNumericVital)
    /// for a non-finite one.
    pub fn save_record(
        &self,
        store: &mut RecordStore,
        patient_id: Uuid,
        doctor_id: Uuid,
        draft: &VitalsDraft,
    ) -> RecordResult<MedicalRecord> {
        let vitals = draft.complete()?;
        validate_finite(&vitals)?;

        let assessment = self.engine.score(&vitals);
        let record = MedicalRecord {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id,
            date: Utc::now(),
            vitals,
            symptoms: draft.symptoms.clone(),
            diagnosis: draft.diagnosis.clone(),
            assessment,
        };

        tracing::info!(
            record = %record.id,
            patient = %record.patient_id,
            score = record.assessment.risk_score,
            level = %record.assessment.risk_level,
            "vitals record saved"
        );

        store.add(record.clone());
        Ok(record)
    }
}
