//! In-memory collections.
//!
//! Doctors, patients, and records live in explicit, application-owned
//! collections that are passed to whoever needs them. Nothing here persists
//! anything and nothing here scores anything; the scoring engine never sees
//! these types.

pub mod doctors;
pub mod patients;
pub mod records;

pub use doctors::DoctorDirectory;
pub use patients::PatientDirectory;
pub use records::RecordStore;

use crate::{RecordError, RecordResult};
use uuid::Uuid;

/// Removes a patient and every record that belongs to them.
///
/// Patients and their records live in separate collections, so removal is a
/// two-step cascade; this helper keeps the two in step.
///
/// # Returns
///
/// The number of records removed alongside the patient.
///
/// # Errors
///
/// Returns [`RecordError::UnknownPatient`] if the directory has no such
/// patient; the record store is left untouched in that case.
pub fn remove_patient_cascade(
    patients: &mut PatientDirectory,
    records: &mut RecordStore,
    patient_id: Uuid,
) -> RecordResult<usize> {
    if !patients.remove(patient_id) {
        return Err(RecordError::UnknownPatient(patient_id));
    }
    Ok(records.remove_for_patient(patient_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::{BloodGroup, Gender, Patient};
    use crate::record::MedicalRecord;
    use chrono::Utc;
    use vitalsight_scoring::{RiskAssessment, RiskLevel, VitalsReading};

    fn test_patient(name: &str) -> Patient {
        Patient::new(
            name,
            format!("{}@health.ai", name.to_lowercase()),
            34,
            Gender::Male,
            "+1 555-0202",
            "23 Elm St",
            BloodGroup::OPositive,
        )
    }

    fn test_record(patient_id: Uuid) -> MedicalRecord {
        MedicalRecord {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id: Uuid::new_v4(),
            date: Utc::now(),
            vitals: VitalsReading {
                heart_rate: 82.0,
                bp_systolic: 122.0,
                bp_diastolic: 78.0,
                temperature: 98.6,
                blood_sugar: 108.0,
                spo2: 98.0,
                respiration_rate: 16.0,
            },
            symptoms: String::new(),
            diagnosis: String::new(),
            assessment: RiskAssessment {
                risk_score: 11.11,
                risk_level: RiskLevel::Low,
            },
        }
    }

    #[test]
    fn test_remove_patient_cascade_drops_their_records_only() {
        let mut patients = PatientDirectory::new();
        let mut records = RecordStore::new();

        let kept = patients.add(test_patient("Alice"));
        let removed = patients.add(test_patient("Bob"));

        records.add(test_record(kept));
        records.add(test_record(removed));
        records.add(test_record(removed));

        let dropped = remove_patient_cascade(&mut patients, &mut records, removed)
            .expect("cascade should succeed");

        assert_eq!(dropped, 2);
        assert!(patients.get(removed).is_none());
        assert!(patients.get(kept).is_some());
        assert_eq!(records.all().len(), 1);
        assert_eq!(records.all()[0].patient_id, kept);
    }

    #[test]
    fn test_remove_patient_cascade_rejects_unknown_patient() {
        let mut patients = PatientDirectory::new();
        let mut records = RecordStore::new();
        let resident = patients.add(test_patient("Alice"));
        records.add(test_record(resident));

        let stranger = Uuid::new_v4();
        let err = remove_patient_cascade(&mut patients, &mut records, stranger)
            .expect_err("unknown patient should fail");

        assert!(matches!(err, RecordError::UnknownPatient(id) if id == stranger));
        assert_eq!(records.all().len(), 1, "record store must be untouched");
    }
}
