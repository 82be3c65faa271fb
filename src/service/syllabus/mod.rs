//! Syllabus extraction service using LLM
//!
//! Asks the model for a JSON document and normalizes it. There is no
//! fallback: engine errors and unparseable output go back to the caller.

use std::sync::Arc;

use crate::model::SyllabusExtraction;
use crate::service::llm::{GenerationParams, TextGenerator};

pub mod error;
pub mod prompts;
pub mod validation;

pub use error::ExtractionError;

use prompts::{SYLLABUS_SYSTEM_PROMPT, build_syllabus_prompt};
use validation::{check_extraction, normalize_extraction};

/// Low temperature for structured output
const EXTRACTION_TEMPERATURE: f64 = 0.3;

/// Service for extracting structured data from syllabus text
pub struct SyllabusService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl SyllabusService {
    pub fn new(generator: Arc<dyn TextGenerator>, model: String) -> Self {
        tracing::info!(model = %model, "Syllabus extraction service initialized");
        Self { generator, model }
    }

    /// Extract course info, assignments, exams and readings from raw text
    pub async fn extract_syllabus(&self, text: &str) -> Result<SyllabusExtraction, ExtractionError> {
        let prompt = build_syllabus_prompt(text);
        let prompt_length = prompt.len();
        let params = GenerationParams {
            model: self.model.clone(),
            temperature: EXTRACTION_TEMPERATURE,
            max_tokens: None,
        };

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            text_length = text.len(),
            "Initiating LLM call for syllabus extraction"
        );

        let start_time = std::time::Instant::now();

        let raw = match self
            .generator
            .generate(SYLLABUS_SYSTEM_PROMPT, &prompt, &params)
            .await
        {
            Ok(raw) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    response_length = raw.len(),
                    "LLM call for syllabus extraction completed successfully"
                );
                raw
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "LLM call for syllabus extraction failed"
                );
                return Err(e.into());
            }
        };

        let extraction = normalize_extraction(&raw).inspect_err(|e| {
            tracing::error!(error = %e, "Syllabus extraction output rejected");
        })?;

        let quality = check_extraction(&extraction);
        if !quality.warnings.is_empty() {
            tracing::warn!(
                warnings = ?quality.warnings,
                "Syllabus extraction produced quality warnings"
            );
        }

        tracing::debug!(
            assignments = extraction.assignments.len(),
            exams = extraction.exams.len(),
            readings = extraction.readings.len(),
            "Normalized syllabus extraction"
        );

        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::testing::ScriptedGenerator;

    fn service(generator: Arc<ScriptedGenerator>) -> SyllabusService {
        SyllabusService::new(generator, "gpt-4".to_string())
    }

    #[tokio::test]
    async fn test_extracts_and_normalizes() {
        let generator = Arc::new(ScriptedGenerator::replying(
            r#"{"course": {"name": "Biology 201"}, "exams": [{"name": "Final", "date": "2024-12-12"}]}"#,
        ));
        let extraction = service(generator.clone())
            .extract_syllabus("BIO 201 Final exam Dec 12")
            .await
            .unwrap();

        assert_eq!(extraction.course["name"], "Biology 201");
        assert_eq!(extraction.exams.len(), 1);
        assert!(extraction.assignments.is_empty());
        assert!(extraction.readings.is_empty());

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt, SYLLABUS_SYSTEM_PROMPT);
        assert!(calls[0].user_prompt.ends_with("BIO 201 Final exam Dec 12"));
        assert_eq!(calls[0].params.temperature, 0.3);
        assert_eq!(calls[0].params.max_tokens, None);
    }

    #[tokio::test]
    async fn test_non_json_output_fails() {
        let generator = Arc::new(ScriptedGenerator::replying("I could not find any dates."));
        let result = service(generator).extract_syllabus("syllabus").await;
        assert!(matches!(result, Err(ExtractionError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_engine_failure_propagates() {
        let generator = Arc::new(ScriptedGenerator::failing());
        let result = service(generator).extract_syllabus("syllabus").await;
        assert!(matches!(result, Err(ExtractionError::Generation(_))));
    }
}
