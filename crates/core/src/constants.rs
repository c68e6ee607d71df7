//! Constants used throughout the VitalSight core crate.

/// Placeholder heart rate for a live preview when the field is blank.
///
/// Deliberately not the scoring baseline of 75: an empty preview form shows a
/// small non-zero score rather than a perfect zero.
pub const PREVIEW_HEART_RATE: f64 = 70.0;

/// Placeholder systolic blood pressure for a live preview.
pub const PREVIEW_BP_SYSTOLIC: f64 = 120.0;

/// Placeholder diastolic blood pressure for a live preview.
pub const PREVIEW_BP_DIASTOLIC: f64 = 80.0;

/// Placeholder body temperature (°F) for a live preview.
pub const PREVIEW_TEMPERATURE: f64 = 98.6;

/// Placeholder blood sugar (mg/dL) for a live preview.
pub const PREVIEW_BLOOD_SUGAR: f64 = 100.0;

/// Placeholder oxygen saturation (%) for a live preview.
pub const PREVIEW_SPO2: f64 = 98.0;

/// Placeholder respiration rate for a live preview.
pub const PREVIEW_RESPIRATION_RATE: f64 = 16.0;
