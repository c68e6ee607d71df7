//! Vitals reading input model.

use serde::{Deserialize, Serialize};

/// A snapshot of seven physiological measurements for one patient at one
/// point in time.
///
/// All fields are required and carried as plain numbers. The engine performs
/// no plausibility checks: out-of-range or negative values still score, they
/// just produce large deviation terms. Callers that accept user input must
/// reject non-finite values (NaN, infinities) before scoring; the engine's
/// behaviour on them is undefined.
///
/// The wire format uses camelCase keys (`heartRate`, `bpSystolic`, …). The
/// struct stays flatten-friendly (no `deny_unknown_fields`) so records can
/// embed it alongside their own fields.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    /// Heart rate in beats per minute.
    pub heart_rate: f64,

    /// Systolic blood pressure in mmHg.
    pub bp_systolic: f64,

    /// Diastolic blood pressure in mmHg.
    pub bp_diastolic: f64,

    /// Body temperature in degrees Fahrenheit.
    pub temperature: f64,

    /// Blood sugar in mg/dL.
    pub blood_sugar: f64,

    /// Oxygen saturation in percent.
    pub spo2: f64,

    /// Respiration rate in breaths per minute.
    pub respiration_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_serialises_with_camel_case_keys() {
        let reading = VitalsReading {
            heart_rate: 82.0,
            bp_systolic: 122.0,
            bp_diastolic: 78.0,
            temperature: 98.6,
            blood_sugar: 108.0,
            spo2: 98.0,
            respiration_rate: 16.0,
        };

        let json = serde_json::to_value(&reading).expect("should serialise");
        assert_eq!(json["heartRate"], 82.0);
        assert_eq!(json["bpSystolic"], 122.0);
        assert_eq!(json["bpDiastolic"], 78.0);
        assert_eq!(json["temperature"], 98.6);
        assert_eq!(json["bloodSugar"], 108.0);
        assert_eq!(json["spo2"], 98.0);
        assert_eq!(json["respirationRate"], 16.0);
    }

    #[test]
    fn test_reading_round_trips_through_json() {
        let reading = VitalsReading {
            heart_rate: 64.5,
            bp_systolic: 118.0,
            bp_diastolic: 76.0,
            temperature: 97.9,
            blood_sugar: 92.0,
            spo2: 99.0,
            respiration_rate: 14.0,
        };

        let json = serde_json::to_string(&reading).expect("should serialise");
        let back: VitalsReading = serde_json::from_str(&json).expect("should deserialise");
        assert_eq!(back, reading);
    }

    #[test]
    fn test_reading_rejects_missing_fields() {
        let json = r#"{
            "heartRate": 70, "bpSystolic": 120, "bpDiastolic": 80,
            "temperature": 98.6, "bloodSugar": 100, "spo2": 98
        }"#;

        let err = serde_json::from_str::<VitalsReading>(json)
            .expect_err("should reject incomplete reading");
        assert!(err.to_string().contains("respirationRate"));
    }
}
