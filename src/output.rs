//! Output types returned by the conversion entry points.

use serde::{Deserialize, Serialize};

/// One structural unit recognised by the scanner.
///
/// All text is already LaTeX-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    AbstractBegin,
    /// One source line of abstract prose.
    AbstractLine(String),
    /// Abstract closed by the acknowledgements line.
    AbstractEnd,
    /// Abstract still open when the input ran out.
    AbstractTruncated,
    Section(String),
    Subsection(String),
    Paragraph(String),
}

/// Where every input line ended up.
///
/// A heading spelled over two lines counts once in `sections` or
/// `subsections` and twice in `heading_lines`, so the buckets below
/// `total_lines` always sum to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Lines in the input after splitting.
    pub total_lines: usize,

    /// Empty (after trimming) lines skipped.
    pub blank_lines: usize,

    /// Front-matter lines dropped before the body (title, authors, dates).
    pub title_block_lines: usize,

    /// Lines between the acknowledgement trigger and the first section number.
    pub acknowledgement_lines: usize,

    /// Stray running page numbers dropped from the body.
    pub page_numbers: usize,

    /// The abstract heading line plus abstract prose lines.
    pub abstract_lines: usize,

    /// Input lines consumed by section and subsection headings.
    pub heading_lines: usize,

    pub sections: usize,
    pub subsections: usize,
    pub paragraphs: usize,

    /// Wall-clock duration of the scan in milliseconds.
    pub duration_ms: u64,
}

impl ConversionStats {
    /// Sum of the line buckets; equals `total_lines` after a complete scan.
    pub fn accounted_lines(&self) -> usize {
        self.blank_lines
            + self.title_block_lines
            + self.acknowledgement_lines
            + self.page_numbers
            + self.abstract_lines
            + self.heading_lines
            + self.paragraphs
    }
}

/// Full result of converting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The complete LaTeX document.
    pub latex: String,

    /// Structural blocks in emission order.
    pub blocks: Vec<Block>,

    pub stats: ConversionStats,
}
