//! Error types for syllabus extraction

use thiserror::Error;

use crate::service::llm::GenerationError;

/// Error type for syllabus extraction
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("{0}")]
    Generation(#[from] GenerationError),

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model output has unexpected shape: {0}")]
    InvalidShape(String),
}
