use std::sync::Arc;

use crate::agents::DocumentAssessor;
use crate::config::Config;
use crate::types::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub assessor: Arc<DocumentAssessor>,
}

impl AppState {
    pub fn new(config: Config, assessor: DocumentAssessor) -> Self {
        Self {
            config,
            assessor: Arc::new(assessor),
        }
    }
}

/// Where a workflow run ended up. Exactly one output can exist per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStatus {
    Pending,
    Assessed(String),
    Modified(String),
    Failed(String),
}

/// Inputs and outcome of a single assess or modify run. Built fresh per
/// request and dropped once the response is written.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub document_content: String,
    pub guidelines: String,
    pub modification_request: Option<String>,
    status: WorkflowStatus,
}

impl WorkflowState {
    pub fn for_assessment(document_content: impl Into<String>, guidelines: impl Into<String>) -> Self {
        Self {
            document_content: document_content.into(),
            guidelines: guidelines.into(),
            modification_request: None,
            status: WorkflowStatus::Pending,
        }
    }

    pub fn for_modification(
        document_content: impl Into<String>,
        guidelines: impl Into<String>,
        modification_request: impl Into<String>,
    ) -> Self {
        Self {
            document_content: document_content.into(),
            guidelines: guidelines.into(),
            modification_request: Some(modification_request.into()),
            status: WorkflowStatus::Pending,
        }
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == WorkflowStatus::Pending
    }

    pub fn assessment_report(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Assessed(report) => Some(report),
            _ => None,
        }
    }

    pub fn modified_document(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Modified(document) => Some(document),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Terminal transition. A run that already finished keeps its outcome.
    pub(crate) fn finish(&mut self, status: WorkflowStatus) {
        if self.is_pending() {
            self.status = status;
        }
    }

    /// The produced output, or the recorded failure as a model error.
    pub fn into_result(self) -> AppResult<String> {
        match self.status {
            WorkflowStatus::Assessed(output) | WorkflowStatus::Modified(output) => Ok(output),
            WorkflowStatus::Failed(error) => Err(AppError::WorkflowFailed(error)),
            WorkflowStatus::Pending => Err(AppError::Internal(
                "workflow finished without producing output".to_string(),
            )),
        }
    }
}

// API Request/Response types

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AssessResponse {
    pub report: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub model_provider: String,
    pub model: String,
}
