//! REST API endpoint for syllabus extraction

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, require_text};
use crate::model::{SyllabusExtraction, SyllabusParseRequest};
use crate::service::SyllabusService;

/// Extract course info, assignments, exams and readings from syllabus text
#[utoipa::path(
    post,
    path = "/api/parse-syllabus",
    request_body = SyllabusParseRequest,
    responses(
        (status = 200, description = "Syllabus extracted", body = SyllabusExtraction),
        (status = 400, description = "Empty text", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Extraction failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "syllabus"
)]
#[post("/api/parse-syllabus")]
pub async fn parse_syllabus(
    service: web::Data<SyllabusService>,
    request: web::Json<SyllabusParseRequest>,
) -> Result<HttpResponse, ApiError> {
    require_text("text", &request.text)?;

    let extraction = service.extract_syllabus(&request.text).await?;

    tracing::info!(
        assignments = extraction.assignments.len(),
        exams = extraction.exams.len(),
        readings = extraction.readings.len(),
        "Syllabus parsed"
    );

    Ok(HttpResponse::Ok().json(extraction))
}

/// Configure syllabus routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(parse_syllabus);
}
