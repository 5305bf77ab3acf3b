//! # txt2tex
//!
//! Convert the plain-text extraction of an academic PDF into a structured
//! LaTeX document.
//!
//! The input has no markup: only layout survives extraction. Section and
//! subsection boundaries are therefore inferred from cues such as lone
//! heading numbers, blank lines, title casing and line length. Everything that
//! is not recognised is passed through as an escaped paragraph, so no text is
//! lost unless a rule explicitly drops it (front matter, acknowledgements,
//! running page numbers).
//!
//! ## Pipeline Overview
//!
//! ```text
//! SRL.txt
//!  │
//!  ├─ 1. Input   read bytes, replace invalid UTF-8, split into lines
//!  ├─ 2. Scan    title block → abstract → body, one pass with lookahead
//!  ├─ 3. Escape  LaTeX special characters in every emitted line
//!  ├─ 4. Render  preamble + blocks + \end{document}
//!  └─ 5. Output  atomic write to SRL.tex + per-category line counts
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use txt2tex::{convert_text, Block, ConversionConfig};
//!
//! let text = "abstract\nWe study X.\nWe thank Y.\n1\n\nIntroduction\nBody.\n";
//! let output = convert_text(text, &ConversionConfig::default());
//! assert_eq!(output.blocks[3], Block::Section("Introduction".into()));
//! assert!(output.latex.contains(r"\begin{abstract}"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `txt2tex` binary (clap + anyhow + tracing-subscriber) |
//!
//! The heading heuristics are tuned to one specific paper; see
//! [`HeadingRules`] for the tables that encode its quirks.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DocumentHeader, HeadingRules};
pub use convert::{convert_file, convert_lines, convert_text, convert_to_file};
pub use error::Txt2TexError;
pub use output::{Block, ConversionOutput, ConversionStats};
pub use pipeline::escape::escape_latex;
pub use pipeline::scan::{scan, Mode, Scanner};
