//! Agent System
//!
//! The document assessor and the prompts it sends:
//!
//! - **Prompts**: fixed templates for the assessment and modification tasks
//! - **Assessor**: runs one workflow per request against the configured model
//!
//! ## Pipeline Overview
//!
//! ```text
//!  Extracted text + guidelines (+ request)
//!      │
//!      ▼
//! ┌─────────────┐
//! │   Prompt    │  → render_assessment / render_modification
//! │  templates  │
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │     LLM     │  → exactly one completion call
//! └─────────────┘
//!      │
//!      ▼
//!  WorkflowState (report | modified document | error)
//! ```

pub mod assessor;
pub mod prompts;

pub use assessor::DocumentAssessor;
pub use prompts::{render_assessment, render_modification};
