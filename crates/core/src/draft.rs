//! Partially-filled vitals forms.
//!
//! A clinician types vitals one field at a time; until every field is filled
//! the reading only exists as a draft. A draft becomes a scoreable
//! [`VitalsReading`] in one of two ways:
//!
//! - [`materialise`](VitalsDraft::materialise) substitutes fixed placeholder
//!   defaults for blank fields: the live-preview path, where the result is
//!   displayed and discarded;
//! - [`complete`](VitalsDraft::complete) requires every field to be present:
//!   the save path, where nothing is stored until the form is whole.
//!
//! Default substitution lives here, on the caller's side, so the engine
//! itself stays total and defaults-free.

use crate::constants::{
    PREVIEW_BLOOD_SUGAR, PREVIEW_BP_DIASTOLIC, PREVIEW_BP_SYSTOLIC, PREVIEW_HEART_RATE,
    PREVIEW_RESPIRATION_RATE, PREVIEW_SPO2, PREVIEW_TEMPERATURE,
};
use crate::{RecordError, RecordResult};
use vitalsight_scoring::VitalsReading;

/// A vitals form in progress: any numeric field may still be blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VitalsDraft {
    pub heart_rate: Option<f64>,
    pub bp_systolic: Option<f64>,
    pub bp_diastolic: Option<f64>,
    pub temperature: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub spo2: Option<f64>,
    pub respiration_rate: Option<f64>,

    /// Free-text symptoms; may legitimately be empty.
    pub symptoms: String,

    /// Free-text diagnosis; may legitimately be empty.
    pub diagnosis: String,
}

impl VitalsDraft {
    /// Builds a complete reading by substituting placeholder defaults for
    /// blank fields.
    ///
    /// Used by the live preview, which recomputes on every keystroke and
    /// discards the result. The placeholders are unremarkable values, not
    /// the scoring baselines, so an untouched form previews a small
    /// non-zero score.
    pub fn materialise(&self) -> VitalsReading {
        VitalsReading {
            heart_rate: self.heart_rate.unwrap_or(PREVIEW_HEART_RATE),
            bp_systolic: self.bp_systolic.unwrap_or(PREVIEW_BP_SYSTOLIC),
            bp_diastolic: self.bp_diastolic.unwrap_or(PREVIEW_BP_DIASTOLIC),
            temperature: self.temperature.unwrap_or(PREVIEW_TEMPERATURE),
            blood_sugar: self.blood_sugar.unwrap_or(PREVIEW_BLOOD_SUGAR),
            spo2: self.spo2.unwrap_or(PREVIEW_SPO2),
            respiration_rate: self.respiration_rate.unwrap_or(PREVIEW_RESPIRATION_RATE),
        }
    }

    /// Builds a complete reading, requiring every field to be present.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingVital`] naming the first blank field.
    pub fn complete(&self) -> RecordResult<VitalsReading> {
        fn require(field: &'static str, value: Option<f64>) -> RecordResult<f64> {
            value.ok_or(RecordError::MissingVital { field })
        }

        Ok(VitalsReading {
            heart_rate: require("heartRate", self.heart_rate)?,
            bp_systolic: require("bpSystolic", self.bp_systolic)?,
            bp_diastolic: require("bpDiastolic", self.bp_diastolic)?,
            temperature: require("temperature", self.temperature)?,
            blood_sugar: require("bloodSugar", self.blood_sugar)?,
            spo2: require("spo2", self.spo2)?,
            respiration_rate: require("respirationRate", self.respiration_rate)?,
        })
    }

    /// Convenience constructor for a fully-filled form.
    #[allow(clippy::too_many_arguments)]
    pub fn filled(
        heart_rate: f64,
        bp_systolic: f64,
        bp_diastolic: f64,
        temperature: f64,
        blood_sugar: f64,
        spo2: f64,
        respiration_rate: f64,
    ) -> Self {
        Self {
            heart_rate: Some(heart_rate),
            bp_systolic: Some(bp_systolic),
            bp_diastolic: Some(bp_diastolic),
            temperature: Some(temperature),
            blood_sugar: Some(blood_sugar),
            spo2: Some(spo2),
            respiration_rate: Some(respiration_rate),
            symptoms: String::new(),
            diagnosis: String::new(),
        }
    }
}
