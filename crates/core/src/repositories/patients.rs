//! In-memory patient directory.

use crate::demographics::Patient;
use uuid::Uuid;

/// Application-owned collection of patients.
#[derive(Clone, Debug, Default)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
}

impl PatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a patient and returns their id.
    pub fn add(&mut self, patient: Patient) -> Uuid {
        let id = patient.id;
        self.patients.push(patient);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Removes a patient. Returns `false` if no such patient exists.
    ///
    /// Records belonging to the patient live in a separate store; use
    /// [`remove_patient_cascade`](super::remove_patient_cascade) to drop
    /// both together.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        self.patients.len() < before
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Case-insensitive substring search over name and email.
    pub fn search(&self, query: &str) -> Vec<&Patient> {
        let query = query.to_lowercase();
        self.patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query) || p.email.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::{BloodGroup, Gender};

    fn test_patient(name: &str, email: &str) -> Patient {
        Patient::new(
            name,
            email,
            34,
            Gender::Male,
            "+1 555-0202",
            "23 Elm St",
            BloodGroup::OPositive,
        )
    }

    #[test]
    fn test_add_then_get_returns_the_patient() {
        let mut directory = PatientDirectory::new();
        let id = directory.add(test_patient("John Carter", "john@health.ai"));

        let found = directory.get(id).expect("should find added patient");
        assert_eq!(found.name, "John Carter");
    }

    #[test]
    fn test_remove_is_idempotent_on_missing_patient() {
        let mut directory = PatientDirectory::new();
        let id = directory.add(test_patient("John Carter", "john@health.ai"));

        assert!(directory.remove(id));
        assert!(!directory.remove(id));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitively() {
        let mut directory = PatientDirectory::new();
        directory.add(test_patient("John Carter", "john@health.ai"));
        directory.add(test_patient("Maya Singh", "maya@health.ai"));

        assert_eq!(directory.search("carter").len(), 1);
        assert_eq!(directory.search("MAYA@").len(), 1);
        assert_eq!(directory.search("health.ai").len(), 2);
    }
}
