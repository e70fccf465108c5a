use thiserror::Error;

/// Errors surfaced by the catering engine.
///
/// Expected conditions such as an unknown id on lookup or delete are not errors;
/// they come back as `Ok(None)` or `Ok(false)` from the engine.
#[derive(Error, Debug)]
pub enum CateringError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unexpected error: {0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, CateringError>;
