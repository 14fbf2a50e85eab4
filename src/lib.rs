// Doc Assessor - LLM-backed document assessment and rewriting service

pub mod config;
pub mod models;
pub mod types;
pub mod agents;
pub mod llm;
pub mod extraction; // PDF/DOCX text extraction
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use agents::DocumentAssessor;
pub use config::Config;
pub use models::{AppState, WorkflowState, WorkflowStatus};
pub use types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
