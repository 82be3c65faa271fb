//! Parsing, normalization and quality checks for model-extracted syllabi
//!
//! Only unparseable or wrongly-shaped output is an error. Missing sections
//! default to empty and missing record fields are reported as warnings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::model::{SyllabusExtraction, SyllabusRecord};

use super::error::ExtractionError;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern must compile"));

/// Parse raw model output into a normalized extraction
pub fn normalize_extraction(raw: &str) -> Result<SyllabusExtraction, ExtractionError> {
    let value: Value = serde_json::from_str(raw.trim())?;

    let mut root = match value {
        Value::Object(root) => root,
        other => {
            return Err(ExtractionError::InvalidShape(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            )));
        }
    };

    Ok(SyllabusExtraction {
        course: take_object(&mut root, "course")?,
        assignments: take_records(&mut root, "assignments")?,
        exams: take_records(&mut root, "exams")?,
        readings: take_records(&mut root, "readings")?,
    })
}

fn take_object(root: &mut Map<String, Value>, key: &str) -> Result<SyllabusRecord, ExtractionError> {
    match root.remove(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(ExtractionError::InvalidShape(format!(
            "'{key}' must be an object, got {}",
            type_name(&other)
        ))),
    }
}

fn take_records(
    root: &mut Map<String, Value>,
    key: &str,
) -> Result<Vec<SyllabusRecord>, ExtractionError> {
    let items = match root.remove(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ExtractionError::InvalidShape(format!(
                "'{key}' must be an array, got {}",
                type_name(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(ExtractionError::InvalidShape(format!(
                "'{key}[{index}]' must be an object, got {}",
                type_name(&other)
            ))),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result of the quality check
#[derive(Debug, Default)]
pub struct ExtractionValidationResult {
    /// Non-fatal quality issues
    pub warnings: Vec<String>,
}

impl ExtractionValidationResult {
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Report missing or malformed fields in a normalized extraction
pub fn check_extraction(extraction: &SyllabusExtraction) -> ExtractionValidationResult {
    let mut result = ExtractionValidationResult::default();

    if text_field(&extraction.course, "name").is_none() {
        result.add_warning("Course name is missing".to_string());
    }

    for (i, assignment) in extraction.assignments.iter().enumerate() {
        check_date(&mut result, "Assignment", i, assignment, "due_date");
    }

    for (i, exam) in extraction.exams.iter().enumerate() {
        check_date(&mut result, "Exam", i, exam, "date");
    }

    for (i, reading) in extraction.readings.iter().enumerate() {
        if text_field(reading, "topics").is_none() {
            result.add_warning(format!("Reading {i} has no topics"));
        }
    }

    result
}

fn check_date(
    result: &mut ExtractionValidationResult,
    kind: &str,
    index: usize,
    record: &SyllabusRecord,
    field: &str,
) {
    match text_field(record, field) {
        None => result.add_warning(format!("{kind} {index} has no {field}")),
        Some(date) if !ISO_DATE.is_match(date) => result.add_warning(format!(
            "{kind} {index} {field} '{date}' is not in YYYY-MM-DD format"
        )),
        Some(_) => {}
    }
}

/// Non-blank string value of a field
fn text_field<'a>(record: &'a SyllabusRecord, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
