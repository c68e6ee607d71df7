//! Medical record domain model.
//!
//! A record is the committed form of one vitals reading: who it belongs to,
//! who took it, when, the reading itself, and the risk assessment that was
//! computed at the moment of saving. Records are append-only values; a new
//! reading always becomes a new record with a freshly computed assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitalsight_scoring::{RiskAssessment, VitalsReading};

/// One saved vitals reading with its embedded risk assessment.
///
/// The wire format is flat, with the seven vitals and the two risk fields at
/// the top level next to the record's own fields.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// The patient the reading belongs to.
    pub patient_id: Uuid,

    /// The doctor who recorded the reading.
    pub doctor_id: Uuid,

    /// When the reading was committed.
    pub date: DateTime<Utc>,

    /// The reading as measured.
    #[serde(flatten)]
    pub vitals: VitalsReading,

    /// Free-text symptoms noted at recording time.
    pub symptoms: String,

    /// Free-text diagnosis noted at recording time.
    pub diagnosis: String,

    /// The assessment computed when the record was saved. Reporting reads
    /// this field; it never rescores the vitals.
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalsight_scoring::RiskLevel;

    #[test]
    fn test_record_wire_format_is_flat() {
        let record = MedicalRecord {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
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
            symptoms: "Mild fatigue".into(),
            diagnosis: "Normal".into(),
            assessment: RiskAssessment {
                risk_score: 11.11,
                risk_level: RiskLevel::Low,
            },
        };

        let json = serde_json::to_value(&record).expect("should serialise");

        // Vitals and risk fields sit at the top level, not nested.
        assert_eq!(json["heartRate"], 82.0);
        assert_eq!(json["spo2"], 98.0);
        assert_eq!(json["riskScore"], 11.11);
        assert_eq!(json["riskLevel"], "LOW");
        assert_eq!(json["symptoms"], "Mild fatigue");
        assert!(json.get("vitals").is_none());
        assert!(json.get("assessment").is_none());

        let back: MedicalRecord =
            serde_json::from_value(json).expect("flat form should deserialise");
        assert_eq!(back, record);
    }
}
