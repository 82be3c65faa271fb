use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Loosely-typed record produced by the model; every field is optional
pub type SyllabusRecord = Map<String, Value>;
pub type CourseInfo = SyllabusRecord;
pub type AssignmentRecord = SyllabusRecord;
pub type ExamRecord = SyllabusRecord;
pub type ReadingRecord = SyllabusRecord;

/// Normalized syllabus extraction
///
/// Missing sections are empty rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SyllabusExtraction {
    #[schema(value_type = Object)]
    pub course: CourseInfo,
    #[schema(value_type = Vec<Object>)]
    pub assignments: Vec<AssignmentRecord>,
    #[schema(value_type = Vec<Object>)]
    pub exams: Vec<ExamRecord>,
    #[schema(value_type = Vec<Object>)]
    pub readings: Vec<ReadingRecord>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SyllabusParseRequest {
    pub text: String,
}
