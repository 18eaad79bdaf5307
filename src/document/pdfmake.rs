//! Writes the document definition as JSON for a pdfmake renderer.

use super::{DocumentBackend, DocumentDescription};
use crate::constants::EXPORT_FILE_STEM;
use crate::errors::ExportError;

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfMakeBackend;

impl DocumentBackend for PdfMakeBackend {
    fn file_name(&self) -> String {
        format!("{}.json", EXPORT_FILE_STEM)
    }

    fn render(&self, document: &DocumentDescription) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(document).map_err(|e| ExportError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, BlockKind};

    #[test]
    fn test_renders_document_definition() {
        let mut document = DocumentDescription::default();
        document.push(Block {
            kind: BlockKind::Line,
            text: "Сталкинг".to_string(),
            font_size: None,
            bold: false,
            margin: [10.0, 0.0, 0.0, 2.0],
        });

        let bytes = PdfMakeBackend.render(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["content"][0]["text"], "Сталкинг");
        assert_eq!(PdfMakeBackend.file_name(), "DiaryPractice.json");
    }
}
