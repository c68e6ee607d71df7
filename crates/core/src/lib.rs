//! # VitalSight Core
//!
//! Application layer for the VitalSight health-monitoring demo.
//!
//! This crate owns everything around the scoring engine that the engine
//! itself must stay free of:
//! - Demographic models and in-memory doctor/patient/record collections
//! - Caller-side numeric validation of vitals input
//! - Draft materialisation for live previews, with placeholder defaults
//! - The record-creation flow that scores a reading and appends the record
//! - Summary reporting over stored risk levels
//!
//! **No presentation concerns**: rendering, charts, and interactive surfaces
//! belong to whatever front end consumes these types. **No persistence**:
//! every collection is in-memory and process-local by design.

pub mod config;
pub mod constants;
pub mod demographics;
pub mod draft;
pub mod error;
pub mod record;
pub mod reporting;
pub mod repositories;
pub mod service;
pub mod validation;

pub use config::CoreConfig;
pub use demographics::{BloodGroup, Doctor, Gender, Patient};
pub use draft::VitalsDraft;
pub use error::{RecordError, RecordResult};
pub use record::MedicalRecord;
pub use reporting::{
    distribution_for_patient, latest_for_patient, risk_distribution, RiskDistribution,
};
pub use repositories::{DoctorDirectory, PatientDirectory, RecordStore};
pub use service::RecordService;
pub use validation::validate_finite;
