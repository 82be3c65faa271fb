pub mod chat;
pub mod classification;
pub mod config;
pub mod syllabus;

pub use chat::{
    ChatExchange, ChatOutcome, ChatRequest, ChatResponse, CrisisResources, UserContext,
};
pub use classification::{
    ClassificationResult, CrisisSeverity, CrisisVerdict, EmotionTag, Sentiment,
};
pub use config::Config;
pub use syllabus::{SyllabusExtraction, SyllabusParseRequest, SyllabusRecord};
