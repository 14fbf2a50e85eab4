//! Document endpoints
//!
//! - `POST /assess/` - multipart `file` + `guidelines`, answers `{"report": ...}`
//! - `POST /modify/` - multipart `file` + `guidelines` + optional `request`,
//!   answers with the modified document as plain text

use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::config::{LimitsConfig, DEFAULT_MODIFICATION_REQUEST};
use crate::extraction::{DocumentFormat, DocumentProcessor};
use crate::models::{AppState, AssessResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_upload_bytes;

    Router::new()
        .route("/assess/", post(assess_document))
        .route("/assess", post(assess_document))
        .route("/modify/", post(modify_document))
        .route("/modify", post(modify_document))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Uploaded file plus the text fields that came with it.
struct DocumentUpload {
    filename: String,
    content: Vec<u8>,
    fields: HashMap<String, String>,
}

impl DocumentUpload {
    async fn read(mut multipart: Multipart, limits: &LimitsConfig) -> AppResult<Self> {
        let mut file: Option<(String, Vec<u8>)> = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, limits))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "file" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| multipart_error(e, limits))?;
                file = Some((filename, bytes.to_vec()));
            } else {
                let value = field.text().await.map_err(|e| multipart_error(e, limits))?;
                fields.insert(name, value);
            }
        }

        let (filename, content) =
            file.ok_or_else(|| AppError::InvalidRequest("Missing form field: file".to_string()))?;

        Ok(Self {
            filename,
            content,
            fields,
        })
    }

    fn required_field(&mut self, name: &str) -> AppResult<String> {
        self.fields
            .remove(name)
            .ok_or_else(|| AppError::InvalidRequest(format!("Missing form field: {}", name)))
    }

    fn optional_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Extractor for the uploaded file, picked from its filename.
    fn format(&self) -> AppResult<DocumentFormat> {
        DocumentFormat::from_filename(&self.filename)
    }

    async fn extract_text(self, format: DocumentFormat, limits: &LimitsConfig) -> AppResult<String> {
        let text = DocumentProcessor::process_document(format, self.content).await?;

        if text.trim().is_empty() {
            return Err(AppError::ExtractionEmpty);
        }
        check_length("document", &text, limits.max_document_chars)?;

        Ok(text)
    }
}

fn multipart_error(e: MultipartError, limits: &LimitsConfig) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge {
            limit: limits.max_upload_bytes,
        }
    } else {
        AppError::InvalidRequest(format!("Malformed multipart body: {}", e.body_text()))
    }
}

fn check_length(field: &'static str, value: &str, limit: usize) -> AppResult<()> {
    let actual = value.chars().count();
    if actual > limit {
        return Err(AppError::InputTooLarge {
            field,
            actual,
            limit,
        });
    }
    Ok(())
}

async fn assess_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<AssessResponse>> {
    let limits = &state.config.limits;
    let mut upload = DocumentUpload::read(multipart, limits).await?;
    info!(filename = %upload.filename, bytes = upload.content.len(), "Assessment request received");
    let format = upload.format()?;

    let guidelines = upload.required_field("guidelines")?;
    check_length("guidelines", &guidelines, limits.max_guidelines_chars)?;

    let document = upload.extract_text(format, limits).await?;
    let report = state.assessor.assess(document, guidelines).await.into_result()?;

    Ok(Json(AssessResponse { report }))
}

async fn modify_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<String> {
    let limits = &state.config.limits;
    let mut upload = DocumentUpload::read(multipart, limits).await?;
    info!(filename = %upload.filename, bytes = upload.content.len(), "Modification request received");
    let format = upload.format()?;

    let guidelines = upload.required_field("guidelines")?;
    check_length("guidelines", &guidelines, limits.max_guidelines_chars)?;
    let request = upload
        .optional_field("request")
        .unwrap_or_else(|| DEFAULT_MODIFICATION_REQUEST.to_string());
    check_length("request", &request, limits.max_request_chars)?;

    let document = upload.extract_text(format, limits).await?;
    let modified = state
        .assessor
        .modify(document, guidelines, request)
        .await
        .into_result()?;

    Ok(modified)
}
