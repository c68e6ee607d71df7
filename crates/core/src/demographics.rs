//! Demographic domain models.
//!
//! Small, explicit structs for the people the system reasons about: the
//! doctors who record vitals and the patients the records belong to. These
//! are plain in-memory values: identity is a UUID, collection ownership
//! lives in [`repositories`](crate::repositories), and nothing here touches
//! the scoring engine.
//!
//! Credentials are deliberately absent: the demo performs no authentication.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Patient gender as captured on the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// ABO/Rh blood group.
///
/// Serialised with the conventional short strings (`"A+"`, `"AB-"`, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    /// The conventional short form of this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clinician who records vitals.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Doctor {
    /// Unique identifier for this doctor.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub phone: String,
    pub active: bool,
}

impl Doctor {
    /// Creates an active doctor with a fresh UUID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            specialization: specialization.into(),
            phone: phone.into(),
            active: true,
        }
    }
}

/// A person whose vitals are monitored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Patient {
    /// Unique identifier for this patient.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub blood_group: BloodGroup,
    pub active: bool,
}

impl Patient {
    /// Creates an active patient with a fresh UUID.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        gender: Gender,
        phone: impl Into<String>,
        address: impl Into<String>,
        blood_group: BloodGroup,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            age,
            gender,
            phone: phone.into(),
            address: address.into(),
            blood_group,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_group_uses_conventional_wire_strings() {
        assert_eq!(
            serde_json::to_string(&BloodGroup::OPositive).expect("should serialise"),
            "\"O+\""
        );
        assert_eq!(
            serde_json::to_string(&BloodGroup::AbNegative).expect("should serialise"),
            "\"AB-\""
        );

        let group: BloodGroup = serde_json::from_str("\"B-\"").expect("should deserialise");
        assert_eq!(group, BloodGroup::BNegative);
    }

    #[test]
    fn test_blood_group_display_matches_wire_form() {
        assert_eq!(BloodGroup::APositive.to_string(), "A+");
        assert_eq!(BloodGroup::ONegative.to_string(), "O-");
    }

    #[test]
    fn test_new_doctor_is_active_with_unique_id() {
        let a = Doctor::new("Dr. Aisha Khan", "aisha@med.ai", "Cardiology", "+1 555-0101");
        let b = Doctor::new("Dr. Aisha Khan", "aisha@med.ai", "Cardiology", "+1 555-0101");

        assert!(a.active);
        assert_ne!(a.id, b.id, "each doctor gets its own UUID");
    }

    #[test]
    fn test_patient_round_trips_through_json() {
        let patient = Patient::new(
            "John Carter",
            "john@health.ai",
            34,
            Gender::Male,
            "+1 555-0202",
            "23 Elm St",
            BloodGroup::OPositive,
        );

        let json = serde_json::to_string(&patient).expect("should serialise");
        let back: Patient = serde_json::from_str(&json).expect("should deserialise");
        assert_eq!(back, patient);
    }
}
