use lopdf::Document;
use tracing::debug;

/// Concatenate the text layer of every page. Pages whose content cannot be
/// decoded contribute nothing; only an unreadable file is an error.
pub fn extract_text(content: &[u8]) -> Result<String, String> {
    let document = Document::load_mem(content).map_err(|e| format!("Invalid PDF: {}", e))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!(page = page_number, error = %e, "Skipping page without extractable text"),
        }
    }

    Ok(text)
}
