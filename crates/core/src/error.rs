use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("vitals field '{field}' is missing")]
    MissingVital { field: &'static str },
    #[error("non-numeric vitals: field '{field}' is not a finite number")]
    NonNumericVital { field: &'static str },
    #[error("unknown patient: {0}")]
    UnknownPatient(Uuid),
    #[error("unknown doctor: {0}")]
    UnknownDoctor(Uuid),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
