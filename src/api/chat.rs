//! REST API endpoint for supportive chat replies

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, require_text};
use crate::model::{ChatExchange, ChatRequest, ChatResponse};
use crate::service::ChatService;

/// Generate an empathetic reply and classify the message
///
/// Engine failures never surface here; the reply degrades to a fixed line
/// while the classification fields stay accurate.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply generated", body = ChatResponse),
        (status = 400, description = "Empty message", body = crate::api::error::ErrorResponse)
    ),
    tag = "chat"
)]
#[post("/api/chat")]
pub async fn chat(
    service: web::Data<ChatService>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    require_text("message", &request.message)?;

    let exchange = ChatExchange::from(request);
    let outcome = service.respond(&exchange).await;

    Ok(HttpResponse::Ok().json(ChatResponse::from(outcome)))
}

/// Configure chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::service::chat::{CRISIS_RESOURCES_BLOCK, FALLBACK_RESPONSE};
    use crate::service::llm::testing::ScriptedGenerator;

    fn chat_data(generator: ScriptedGenerator) -> web::Data<ChatService> {
        web::Data::new(ChatService::new(Arc::new(generator), "gpt-4".to_string()))
    }

    #[actix_web::test]
    async fn test_chat_crisis_response() {
        let app = test::init_service(
            App::new()
                .app_data(chat_data(ScriptedGenerator::replying("You matter.")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({
                "message": "I want to kill myself",
                "user_context": {"first_name": "Jo"}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["response"], format!("You matter.{CRISIS_RESOURCES_BLOCK}"));
        assert_eq!(body["crisis_detected"], true);
        assert_eq!(body["crisis_severity"], "high");
        assert_eq!(body["resources"]["suicide_prevention"], "988");
    }

    #[actix_web::test]
    async fn test_chat_fallback_keeps_classification() {
        let app = test::init_service(
            App::new()
                .app_data(chat_data(ScriptedGenerator::failing()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({
                "message": "I'm anxious and exhausted",
                "user_context": {},
                "conversation_history": [{"message": "hi", "response": "hello"}]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["response"], FALLBACK_RESPONSE);
        assert_eq!(body["sentiment"], "negative");
        assert_eq!(body["emotions"], json!(["anxiety", "burnout"]));
        assert_eq!(body["crisis_detected"], false);
        assert_eq!(body["crisis_severity"], "low");
        assert!(body["resources"].is_null());
    }

    #[actix_web::test]
    async fn test_chat_rejects_blank_message() {
        let app = test::init_service(
            App::new()
                .app_data(chat_data(ScriptedGenerator::replying("unused")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({"message": "  ", "user_context": {}}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_chat_rejects_missing_user_context() {
        let generator = Arc::new(ScriptedGenerator::replying("unused"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ChatService::new(
                    generator.clone(),
                    "gpt-4".to_string(),
                )))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({"message": "I feel stressed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(generator.calls().is_empty());
    }
}
