//! Document Assessor
//!
//! Runs the two single-step workflows over a configured [`LLM`]:
//! render a prompt, make one model call, record the outcome on a fresh
//! [`WorkflowState`]. Nothing is kept between runs, so one instance can be
//! shared by every request.

use tracing::{error, info};

use crate::agents::prompts;
use crate::llm::LLM;
use crate::models::{WorkflowState, WorkflowStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Assess,
    Modify,
}

impl Step {
    fn name(self) -> &'static str {
        match self {
            Step::Assess => "assess",
            Step::Modify => "modify",
        }
    }

    fn succeeded(self, output: String) -> WorkflowStatus {
        match self {
            Step::Assess => WorkflowStatus::Assessed(output),
            Step::Modify => WorkflowStatus::Modified(output),
        }
    }
}

pub struct DocumentAssessor {
    llm: LLM,
}

impl DocumentAssessor {
    pub fn new(llm: LLM) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &LLM {
        &self.llm
    }

    /// Assess a document against the guidelines. The returned state carries
    /// either `assessment_report` or `error`.
    pub async fn assess(
        &self,
        document_content: impl Into<String>,
        guidelines: impl Into<String>,
    ) -> WorkflowState {
        let state = WorkflowState::for_assessment(document_content, guidelines);
        let prompt = prompts::render_assessment(&state.guidelines, &state.document_content);
        self.run(state, &prompt, Step::Assess).await
    }

    /// Rewrite a document to follow the guidelines and the user's request.
    /// The returned state carries either `modified_document` or `error`.
    pub async fn modify(
        &self,
        document_content: impl Into<String>,
        guidelines: impl Into<String>,
        modification_request: impl Into<String>,
    ) -> WorkflowState {
        let state =
            WorkflowState::for_modification(document_content, guidelines, modification_request);
        let prompt = prompts::render_modification(
            &state.guidelines,
            state.modification_request.as_deref().unwrap_or_default(),
            &state.document_content,
        );
        self.run(state, &prompt, Step::Modify).await
    }

    async fn run(&self, mut state: WorkflowState, prompt: &str, step: Step) -> WorkflowState {
        info!(
            step = step.name(),
            document_bytes = state.document_content.len(),
            guidelines_bytes = state.guidelines.len(),
            "Running document workflow"
        );

        let status = match self.llm.complete(prompt).await {
            Ok(output) => {
                info!(step = step.name(), output_bytes = output.len(), "Workflow complete");
                step.succeeded(output)
            }
            Err(e) => {
                error!(step = step.name(), error = %e, "Workflow failed");
                WorkflowStatus::Failed(format!("Failed to {} document: {}", step.name(), e))
            }
        };

        state.finish(status);
        state
    }
}
