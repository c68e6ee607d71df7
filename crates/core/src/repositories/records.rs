//! In-memory medical record store.

use crate::record::MedicalRecord;
use uuid::Uuid;

/// Application-owned, append-only collection of medical records.
///
/// Records are never edited in place: a new reading for a patient is a new
/// record. Insertion order is preserved, so "the latest record" is simply
/// the last one matching a patient.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<MedicalRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its id.
    pub fn add(&mut self, record: MedicalRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        id
    }

    pub fn all(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record for one patient, oldest first.
    pub fn for_patient(&self, patient_id: Uuid) -> Vec<&MedicalRecord> {
        self.records
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .collect()
    }

    /// Drops every record for one patient. Returns how many were removed.
    pub fn remove_for_patient(&mut self, patient_id: Uuid) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.patient_id != patient_id);
        before - self.records.len()
    }
}
