//! In-memory doctor directory.

use crate::demographics::Doctor;
use uuid::Uuid;

/// Application-owned collection of doctors.
///
/// Plain owned data with no interior mutability; callers that need sharing
/// wrap it themselves.
#[derive(Clone, Debug, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a doctor and returns their id.
    pub fn add(&mut self, doctor: Doctor) -> Uuid {
        let id = doctor.id;
        self.doctors.push(doctor);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Removes a doctor. Returns `false` if no such doctor exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.doctors.len();
        self.doctors.retain(|d| d.id != id);
        self.doctors.len() < before
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Case-insensitive substring search over name and email.
    pub fn search(&self, query: &str) -> Vec<&Doctor> {
        let query = query.to_lowercase();
        self.doctors
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&query) || d.email.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_doctor(name: &str, email: &str) -> Doctor {
        Doctor::new(name, email, "Cardiology", "+1 555-0101")
    }

    #[test]
    fn test_add_then_get_returns_the_doctor() {
        let mut directory = DoctorDirectory::new();
        let id = directory.add(test_doctor("Dr. Aisha Khan", "aisha@med.ai"));

        let found = directory.get(id).expect("should find added doctor");
        assert_eq!(found.name, "Dr. Aisha Khan");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_remove_drops_only_the_named_doctor() {
        let mut directory = DoctorDirectory::new();
        let keep = directory.add(test_doctor("Dr. Aisha Khan", "aisha@med.ai"));
        let drop = directory.add(test_doctor("Dr. Omar Reyes", "omar@med.ai"));

        assert!(directory.remove(drop));
        assert!(!directory.remove(drop), "second removal finds nothing");
        assert!(directory.get(keep).is_some());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitively() {
        let mut directory = DoctorDirectory::new();
        directory.add(test_doctor("Dr. Aisha Khan", "aisha@med.ai"));
        directory.add(test_doctor("Dr. Omar Reyes", "omar@med.ai"));

        assert_eq!(directory.search("KHAN").len(), 1);
        assert_eq!(directory.search("omar@").len(), 1);
        assert_eq!(directory.search("med.ai").len(), 2);
        assert!(directory.search("nobody").is_empty());
    }
}
