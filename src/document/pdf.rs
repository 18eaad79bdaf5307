//! PDF backend for exported journals.
//!
//! Lays blocks out top to bottom on A4 pages, wrapping long lines at word
//! boundaries and starting a new page when the bottom margin is reached. Text
//! is set in DejaVu Sans, which is embedded into every document so Cyrillic and
//! other non-Latin scripts render without fonts installed on the reader's side.

use super::{Block, DocumentBackend, DocumentDescription};
use crate::constants::{EXPORT_FILE_STEM, EXPORT_TITLE};
use crate::errors::ExportError;
use printpdf::{Mm, PdfDocument, Pt};
use ttf_parser::Face;

const REGULAR_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BOLD_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const PAGE_MARGIN: f32 = 40.0;
const LINE_HEIGHT: f32 = 1.2;
const BASELINE_OFFSET: f32 = 0.25;
const LAYER_NAME: &str = "Text";

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfBackend;

impl DocumentBackend for PdfBackend {
    fn file_name(&self) -> String {
        format!("{}.pdf", EXPORT_FILE_STEM)
    }

    fn render(&self, document: &DocumentDescription) -> Result<Vec<u8>, ExportError> {
        let metrics = FontMetrics::load()?;
        let pages = layout(document, &metrics);
        write_pdf(&pages)
    }
}

/// Advance widths of the embedded faces.
struct FontMetrics {
    regular: Face<'static>,
    bold: Face<'static>,
}

impl FontMetrics {
    fn load() -> Result<Self, ExportError> {
        Ok(Self {
            regular: parse_face(REGULAR_FONT)?,
            bold: parse_face(BOLD_FONT)?,
        })
    }

    /// Width of `text` in points. Characters without a glyph take no space.
    fn text_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let face = if bold { &self.bold } else { &self.regular };
        let units: u32 = text
            .chars()
            .filter_map(|c| face.glyph_index(c))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .map(u32::from)
            .sum();
        units as f32 * size / f32::from(face.units_per_em())
    }
}

fn parse_face(data: &'static [u8]) -> Result<Face<'static>, ExportError> {
    Face::parse(data, 0).map_err(|e| ExportError::Render(format!("Invalid embedded font: {}", e)))
}

/// One positioned run of text; coordinates are in points from the bottom left.
#[derive(Debug, Clone, PartialEq)]
struct TextRun {
    x: f32,
    y: f32,
    size: f32,
    bold: bool,
    text: String,
}

fn layout(document: &DocumentDescription, metrics: &FontMetrics) -> Vec<Vec<TextRun>> {
    let top = PAGE_HEIGHT - PAGE_MARGIN;
    let mut pages: Vec<Vec<TextRun>> = vec![Vec::new()];
    let mut y = top;

    for block in &document.content {
        let [left, margin_top, right, margin_bottom] = block.margin;
        let size = block.font_size_or_default();
        let line_height = size * LINE_HEIGHT;
        let x = PAGE_MARGIN + left;
        let max_width = (PAGE_WIDTH - 2.0 * PAGE_MARGIN - left - right).max(size);

        y -= margin_top;
        for line in wrap(block, max_width, metrics) {
            if y - line_height < PAGE_MARGIN {
                pages.push(Vec::new());
                y = top;
            }
            y -= line_height;
            if let Some(page) = pages.last_mut() {
                page.push(TextRun {
                    x,
                    y: y + size * BASELINE_OFFSET,
                    size,
                    bold: block.bold,
                    text: line,
                });
            }
        }
        y -= margin_bottom;
    }

    pages
}

/// Splits a block's text into lines no wider than `max_width` points.
///
/// A single word wider than the line is kept whole rather than broken.
fn wrap(block: &Block, max_width: f32, metrics: &FontMetrics) -> Vec<String> {
    let size = block.font_size_or_default();
    let space = metrics.text_width(" ", size, block.bold);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in block.text.split_whitespace() {
        let word_width = metrics.text_width(word, size, block.bold);
        if !current.is_empty() && current_width + space + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += space;
        }
        current.push_str(word);
        current_width += word_width;
    }

    // Blank blocks still take up one line of vertical space.
    lines.push(current);
    lines
}

fn pdf_error(e: printpdf::Error) -> ExportError {
    ExportError::Render(e.to_string())
}

fn write_pdf(pages: &[Vec<TextRun>]) -> Result<Vec<u8>, ExportError> {
    let width = Mm::from(Pt(PAGE_WIDTH));
    let height = Mm::from(Pt(PAGE_HEIGHT));
    let (doc, first_page, first_layer) = PdfDocument::new(EXPORT_TITLE, width, height, LAYER_NAME);
    let regular = doc.add_external_font(REGULAR_FONT).map_err(pdf_error)?;
    let bold = doc.add_external_font(BOLD_FONT).map_err(pdf_error)?;

    for (index, runs) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, LAYER_NAME)
        };
        let layer = doc.get_page(page).get_layer(layer);
        for run in runs {
            let font = if run.bold { &bold } else { &regular };
            layer.use_text(
                run.text.as_str(),
                run.size,
                Mm::from(Pt(run.x)),
                Mm::from(Pt(run.y)),
                font,
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BlockKind;
    use printpdf::lopdf::content::Content;
    use printpdf::lopdf::Document;

    fn line(text: &str) -> Block {
        Block {
            kind: BlockKind::Line,
            text: text.to_string(),
            font_size: None,
            bold: false,
            margin: [10.0, 0.0, 0.0, 2.0],
        }
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    /// Glyph ids of every text-showing operation, page by page.
    fn shown_glyphs(bytes: &[u8]) -> Vec<Vec<u16>> {
        let pdf = Document::load_mem(bytes).unwrap();
        let mut shown = Vec::new();
        for page_id in pdf.get_pages().values() {
            let content = Content::decode(&pdf.get_page_content(*page_id).unwrap()).unwrap();
            for op in content.operations.iter().filter(|op| op.operator == "Tj") {
                let raw = op.operands[0].as_str().unwrap();
                shown.push(
                    raw.chunks(2)
                        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                        .collect(),
                );
            }
        }
        shown
    }

    fn glyphs_of(face: &Face, text: &str) -> Vec<u16> {
        text.chars()
            .map(|c| face.glyph_index(c).expect("glyph in embedded font").0)
            .collect()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(PdfBackend.file_name(), "DiaryPractice.pdf");
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let bytes = PdfBackend.render(&DocumentDescription::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_font_is_embedded() {
        let mut document = DocumentDescription::default();
        document.push(line("hello"));

        let bytes = PdfBackend.render(&document).unwrap();
        assert!(bytes.windows(10).any(|w| w == b"/FontFile2"));
    }

    #[test]
    fn test_cyrillic_text_survives_into_pdf() {
        let text = "02.01.2024 • Сталкинг утром";
        let mut document = DocumentDescription::default();
        document.push(line(text));

        let bytes = PdfBackend.render(&document).unwrap();
        let metrics = FontMetrics::load().unwrap();
        let expected = glyphs_of(&metrics.regular, text);

        assert_eq!(expected.len(), text.chars().count());
        assert!(shown_glyphs(&bytes).contains(&expected));
    }

    #[test]
    fn test_bold_blocks_use_bold_face() {
        let mut document = DocumentDescription::default();
        document.push(Block {
            kind: BlockKind::Title,
            text: "Дневник".to_string(),
            font_size: Some(18.0),
            bold: true,
            margin: [0.0, 0.0, 0.0, 10.0],
        });

        let bytes = PdfBackend.render(&document).unwrap();
        let metrics = FontMetrics::load().unwrap();
        assert_eq!(
            shown_glyphs(&bytes),
            vec![glyphs_of(&metrics.bold, "Дневник")]
        );
    }

    #[test]
    fn test_long_documents_paginate() {
        let mut document = DocumentDescription::default();
        for i in 0..200 {
            document.push(line(&format!("entry {}", i)));
        }

        let metrics = FontMetrics::load().unwrap();
        let pages = layout(&document, &metrics);
        assert_eq!(pages.len(), 5);
        assert_eq!(
            pages.last().and_then(|page| page.last()).map(|run| run.text.as_str()),
            Some("entry 199")
        );

        let bytes = PdfBackend.render(&document).unwrap();
        assert_eq!(page_count(&bytes), 5);
    }

    #[test]
    fn test_layout_applies_block_margins() {
        let mut document = DocumentDescription::default();
        document.push(Block {
            kind: BlockKind::Title,
            text: "Title".to_string(),
            font_size: Some(18.0),
            bold: true,
            margin: [0.0, 0.0, 0.0, 10.0],
        });
        document.push(line("entry"));

        let metrics = FontMetrics::load().unwrap();
        let runs = &layout(&document, &metrics)[0];

        assert_eq!(runs[0].x, PAGE_MARGIN);
        assert_eq!(runs[1].x, PAGE_MARGIN + 10.0);
        assert!(runs[0].bold && !runs[1].bold);
        // Title line height, title bottom margin, then the entry's own line height
        let title_bottom = PAGE_HEIGHT - PAGE_MARGIN - 18.0 * LINE_HEIGHT;
        let entry_bottom = title_bottom - 10.0 - 12.0 * LINE_HEIGHT;
        assert!((runs[1].y - (entry_bottom + 12.0 * BASELINE_OFFSET)).abs() < 0.01);
    }

    #[test]
    fn test_wrap_breaks_long_lines_at_words() {
        let metrics = FontMetrics::load().unwrap();
        let block = line(&"слово ".repeat(100));
        let lines = wrap(&block, 200.0, &metrics);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| !l.starts_with(' ') && !l.ends_with(' ')));
        assert!(lines
            .iter()
            .all(|l| metrics.text_width(l, 12.0, false) <= 200.0));
        assert_eq!(lines.join(" ").split(' ').count(), 100);
    }

    #[test]
    fn test_blank_block_occupies_a_line() {
        let metrics = FontMetrics::load().unwrap();
        assert_eq!(wrap(&line(" "), 200.0, &metrics), vec![String::new()]);
    }

    #[test]
    fn test_bold_text_is_wider() {
        let metrics = FontMetrics::load().unwrap();
        let regular = metrics.text_width("Упражнения", 14.0, false);
        let bold = metrics.text_width("Упражнения", 14.0, true);
        assert!(regular > 0.0);
        assert!(bold > regular);
    }
}
