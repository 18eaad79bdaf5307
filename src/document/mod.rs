//! Backend-agnostic document description and the backends that render it.
//!
//! A [`DocumentDescription`] is an ordered list of text blocks carrying size,
//! weight and spacing attributes. Its JSON form is a pdfmake document
//! definition, so the same value can be handed to a pdfmake renderer or to the
//! PDF backend.

pub mod pdf;
pub mod pdfmake;

use crate::constants::EXPORT_DEFAULT_FONT_SIZE;
use crate::errors::ExportError;
use serde::Serialize;

pub use pdf::PdfBackend;
pub use pdfmake::PdfMakeBackend;

/// Role of a block inside an exported journal.
///
/// Not part of the serialized form; backends only look at the attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    Heading,
    Line,
    Spacer,
}

/// One paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(skip)]
    pub kind: BlockKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    /// Spacing around the block in points: left, top, right, bottom.
    pub margin: [f32; 4],
}

impl Block {
    pub fn font_size_or_default(&self) -> f32 {
        self.font_size.unwrap_or(EXPORT_DEFAULT_FONT_SIZE)
    }
}

/// An ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentDescription {
    pub content: Vec<Block>,
}

impl DocumentDescription {
    pub fn push(&mut self, block: Block) {
        self.content.push(block);
    }

    /// Blocks of the given kind, in document order.
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &Block> {
        self.content.iter().filter(move |block| block.kind == kind)
    }
}

/// Turns a document description into a downloadable artifact.
pub trait DocumentBackend {
    /// File name the artifact is saved under.
    fn file_name(&self) -> String;

    fn render(&self, document: &DocumentDescription) -> Result<Vec<u8>, ExportError>;
}
