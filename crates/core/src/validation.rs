//! Input validation utilities.
//!
//! The scoring engine is total over real numbers and has no error path of
//! its own, so numeric validity is enforced here, on the caller's side,
//! before a reading is ever scored. Physiological plausibility is
//! intentionally not checked: implausible values are the engine's business
//! and simply score high.

use crate::{RecordError, RecordResult};
use vitalsight_scoring::VitalsReading;

/// Validates that every field of a reading is a finite number.
///
/// NaN and the infinities are the typed equivalent of the "non-numeric
/// vitals" a form layer must reject: the engine's behaviour on them is
/// undefined, so callers fail fast here and never invoke it.
///
/// # Errors
///
/// Returns [`RecordError::NonNumericVital`] naming the first offending
/// field.
pub fn validate_finite(reading: &VitalsReading) -> RecordResult<()> {
    let fields: [(&'static str, f64); 7] = [
        ("heartRate", reading.heart_rate),
        ("bpSystolic", reading.bp_systolic),
        ("bpDiastolic", reading.bp_diastolic),
        ("temperature", reading.temperature),
        ("bloodSugar", reading.blood_sugar),
        ("spo2", reading.spo2),
        ("respirationRate", reading.respiration_rate),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(RecordError::NonNumericVital { field });
        }
    }

    Ok(())
}
