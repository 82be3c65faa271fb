//! Application state and service initialization
//!
//! Builds the shared LLM client once and hands it to every service that
//! needs it, so handlers never read configuration themselves.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web;

use crate::model::Config;
use crate::service::{ChatService, LlmClient, SyllabusService, TextGenerator};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    /// Supportive chat replies
    pub chat_service: web::Data<ChatService>,
    /// Syllabus extraction
    pub syllabus_service: web::Data<SyllabusService>,
    /// Browser origins allowed by the CORS policy, empty means any
    allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Fails when no OpenAI API key is configured.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = config
            .openai_api_key
            .as_deref()
            .ok_or(AppError::MissingConfig("OPENAI_API_KEY"))?;

        let llm_client = LlmClient::new(api_key);

        Ok(Self::with_generator(Arc::new(llm_client), config))
    }

    /// Build state around any text generator
    pub fn with_generator(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        let chat_service = ChatService::new(Arc::clone(&generator), config.chat_model.clone());
        let syllabus_service = SyllabusService::new(generator, config.syllabus_model.clone());

        Self {
            chat_service: web::Data::new(chat_service),
            syllabus_service: web::Data::new(syllabus_service),
            allowed_origins: config.allowed_origins.clone().into(),
        }
    }

    /// CORS middleware for the configured origins
    ///
    /// With no origins configured every origin is accepted.
    pub fn cors(&self) -> Cors {
        if self.allowed_origins.is_empty() {
            return Cors::permissive();
        }

        self.allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600)
    }

    /// Register services and routes on an actix `App`
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.chat_service.clone())
            .app_data(self.syllabus_service.clone())
            .configure(crate::api::chat::configure)
            .configure(crate::api::syllabus::configure)
            .configure(crate::api::health::configure)
            .configure(crate::api::openapi::configure);
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}
