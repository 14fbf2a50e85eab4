//! Prompt templates for the assessor workflows.

/// Prompt asking the model for a compliance report on `document_content`.
pub fn render_assessment(guidelines: &str, document_content: &str) -> String {
    format!(r#"As an expert document analyst, please assess the following document based on the provided guidelines.
Provide a detailed report specifying compliance or violations.

Guidelines:
{guidelines}

Document Content:
{document_content}

Assessment Report:
"#,
        guidelines = guidelines,
        document_content = document_content,
    )
}

/// Prompt asking the model to rewrite `document_content` so it follows the
/// guidelines and the user's request.
pub fn render_modification(
    guidelines: &str,
    modification_request: &str,
    document_content: &str,
) -> String {
    format!(r#"As an expert document editor, please modify the following document to comply with the given guidelines,
taking into account the user's specific request.

Guidelines:
{guidelines}

User's Modification Request:
{modification_request}

Original Document Content:
{document_content}

Modified Document:
"#,
        guidelines = guidelines,
        modification_request = modification_request,
        document_content = document_content,
    )
}
