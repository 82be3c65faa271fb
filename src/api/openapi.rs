//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ApiError;

#[derive(OpenApi)]
#[openapi(
    info(title = "ZENI AI Service"),
    paths(
        crate::api::chat::chat,
        crate::api::syllabus::parse_syllabus,
        crate::api::health::health
    ),
    components(schemas(
        crate::model::ChatRequest,
        crate::model::ChatResponse,
        crate::model::CrisisResources,
        crate::model::UserContext,
        crate::model::SyllabusParseRequest,
        crate::model::SyllabusExtraction,
        crate::api::health::HealthStatus,
        crate::api::error::ErrorResponse
    )),
    tags(
        (name = "chat", description = "Supportive replies with crisis screening"),
        (name = "syllabus", description = "Structured syllabus extraction"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {e}")))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
