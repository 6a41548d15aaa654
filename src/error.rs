use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
