use std::io::Cursor;

use docx_rust::document::BodyContent;
use docx_rust::DocxFile;

/// One line per top-level paragraph, in document order.
pub fn extract_text(content: &[u8]) -> Result<String, String> {
    let file = DocxFile::from_reader(Cursor::new(content))
        .map_err(|e| format!("Invalid DOCX archive: {}", e))?;
    let docx = file
        .parse()
        .map_err(|e| format!("Invalid DOCX document: {}", e))?;

    let mut text = String::new();
    for block in &docx.document.body.content {
        if let BodyContent::Paragraph(paragraph) = block {
            for run_text in paragraph.iter_text() {
                text.push_str(run_text);
            }
            text.push('\n');
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fixtures;

    #[test]
    fn paragraphs_become_lines() {
        let bytes = fixtures::docx_with_paragraphs(&["Dear team,", "The report is attached."]);
        let text = extract_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines, vec!["Dear team,", "The report is attached."]);
    }

    #[test]
    fn empty_document_yields_no_text() {
        let bytes = fixtures::docx_with_paragraphs(&[]);
        let text = extract_text(&bytes).unwrap();
        assert!(text.trim().is_empty());
    }

    #[test]
    fn non_zip_bytes_return_error() {
        assert!(extract_text(b"plain text pretending to be docx").is_err());
    }
}
