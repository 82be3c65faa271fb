pub mod chat;
pub mod classify;
pub mod llm;
pub mod syllabus;

pub use chat::ChatService;
pub use llm::{LlmClient, TextGenerator};
pub use syllabus::SyllabusService;
