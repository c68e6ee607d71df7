use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitalsight_core::{
    risk_distribution, BloodGroup, CoreConfig, Doctor, DoctorDirectory, Gender, Patient,
    PatientDirectory, RecordService, RecordStore, VitalsDraft,
};
use vitalsight_scoring::RiskAssessment;

#[derive(Parser)]
#[command(name = "vitalsight")]
#[command(about = "VitalSight health monitoring demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a complete vitals reading
    Score {
        /// Heart rate (bpm)
        heart_rate: f64,
        /// Systolic blood pressure (mmHg)
        bp_systolic: f64,
        /// Diastolic blood pressure (mmHg)
        bp_diastolic: f64,
        /// Body temperature (°F)
        temperature: f64,
        /// Blood sugar (mg/dL)
        blood_sugar: f64,
        /// Oxygen saturation (%)
        spo2: f64,
        /// Respiration rate (breaths/min)
        respiration_rate: f64,
    },
    /// Preview the risk for a partially-filled form, using placeholder
    /// defaults for omitted fields
    Preview {
        /// Heart rate (bpm)
        #[arg(long)]
        heart_rate: Option<f64>,
        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        bp_systolic: Option<f64>,
        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        bp_diastolic: Option<f64>,
        /// Body temperature (°F)
        #[arg(long)]
        temperature: Option<f64>,
        /// Blood sugar (mg/dL)
        #[arg(long)]
        blood_sugar: Option<f64>,
        /// Oxygen saturation (%)
        #[arg(long)]
        spo2: Option<f64>,
        /// Respiration rate (breaths/min)
        #[arg(long)]
        respiration_rate: Option<f64>,
    },
    /// Seed the demo data, save a few records, and print the report
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitalsight_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let service = RecordService::new(Arc::new(CoreConfig::default()));

    match cli.command {
        Some(Commands::Score {
            heart_rate,
            bp_systolic,
            bp_diastolic,
            temperature,
            blood_sugar,
            spo2,
            respiration_rate,
        }) => {
            let draft = VitalsDraft::filled(
                heart_rate,
                bp_systolic,
                bp_diastolic,
                temperature,
                blood_sugar,
                spo2,
                respiration_rate,
            );
            let vitals = draft.complete()?;
            vitalsight_core::validate_finite(&vitals)?;

            print_assessment(&service.engine().score(&vitals));
        }
        Some(Commands::Preview {
            heart_rate,
            bp_systolic,
            bp_diastolic,
            temperature,
            blood_sugar,
            spo2,
            respiration_rate,
        }) => {
            let draft = VitalsDraft {
                heart_rate,
                bp_systolic,
                bp_diastolic,
                temperature,
                blood_sugar,
                spo2,
                respiration_rate,
                ..VitalsDraft::default()
            };

            println!("Provisional assessment (blank fields use placeholders):");
            print_assessment(&service.preview(&draft));
        }
        Some(Commands::Demo) => run_demo(&service)?,
        None => {
            println!("Use 'vitalsight --help' for commands");
        }
    }

    Ok(())
}

fn print_assessment(assessment: &RiskAssessment) {
    println!(
        "Risk score: {:.2} ({})",
        assessment.risk_score, assessment.risk_level
    );
}

/// Seeds the demo doctor and patient, commits a short history of readings,
/// and prints the records plus the risk distribution.
fn run_demo(service: &RecordService) -> anyhow::Result<()> {
    tracing::info!("++ Seeding VitalSight demo directories");

    let mut doctors = DoctorDirectory::new();
    let mut patients = PatientDirectory::new();
    let mut records = RecordStore::new();

    let doctor_id = doctors.add(Doctor::new(
        "Dr. Aisha Khan",
        "aisha@med.ai",
        "Cardiology",
        "+1 555-0101",
    ));
    let patient_id = patients.add(Patient::new(
        "John Carter",
        "john@health.ai",
        34,
        Gender::Male,
        "+1 555-0202",
        "23 Elm St",
        BloodGroup::OPositive,
    ));

    let mut checkup = VitalsDraft::filled(82.0, 122.0, 78.0, 98.6, 108.0, 98.0, 16.0);
    checkup.symptoms = "Mild fatigue".into();
    checkup.diagnosis = "Normal".into();
    service.save_record(&mut records, patient_id, doctor_id, &checkup)?;

    let mut desaturated = VitalsDraft::filled(88.0, 124.0, 80.0, 98.6, 104.0, 92.0, 18.0);
    desaturated.symptoms = "Shortness of breath".into();
    desaturated.diagnosis = "Monitor oxygen saturation".into();
    service.save_record(&mut records, patient_id, doctor_id, &desaturated)?;

    let mut febrile = VitalsDraft::filled(120.0, 138.0, 92.0, 102.5, 145.0, 91.0, 24.0);
    febrile.symptoms = "High fever, rapid pulse".into();
    febrile.diagnosis = "Suspected infection".into();
    service.save_record(&mut records, patient_id, doctor_id, &febrile)?;

    println!("Doctors: {}", doctors.len());
    println!("Patients: {}", patients.len());
    println!("Records:");
    println!("{}", serde_json::to_string_pretty(records.all())?);

    let distribution = risk_distribution(records.all());
    println!(
        "Risk distribution: LOW {} / MEDIUM {} / HIGH {}",
        distribution.low, distribution.medium, distribution.high
    );

    if let Some(latest) = vitalsight_core::latest_for_patient(records.all(), patient_id) {
        println!(
            "Latest for John Carter: {:.2} ({})",
            latest.assessment.risk_score, latest.assessment.risk_level
        );
    }

    Ok(())
}
